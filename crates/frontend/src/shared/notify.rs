//! Transient notifications (toasts)

use crate::config;
use leptos::prelude::*;
use std::time::Duration;
use thaw::*;

/// Thin handle over the Thaw toaster. Every notification is also logged.
#[derive(Clone, Copy)]
pub struct Notifications {
    toaster: StoredValue<ToasterInjection, LocalStorage>,
}

impl Notifications {
    /// App-wide handle provided by [`NotificationsProvider`]. It outlives the
    /// sheets and dialogs that use it, so late results still reach a toast.
    pub fn expect_context() -> Self {
        use_context::<Notifications>()
            .expect("Notifications::expect_context must be used within a NotificationsProvider")
    }

    pub fn success(&self, message: impl Into<String>) {
        let message = message.into();
        log::info!("notify success: {}", message);
        self.dispatch(message, ToastIntent::Success);
    }

    pub fn error(&self, message: impl Into<String>) {
        let message = message.into();
        log::warn!("notify error: {}", message);
        self.dispatch(message, ToastIntent::Error);
    }

    fn dispatch(&self, message: String, intent: ToastIntent) {
        let timeout = Duration::from_millis(config::get().ui.toast_timeout_ms);
        self.toaster.with_value(|toaster| {
            toaster.dispatch_toast(
                move || {
                    view! {
                        <Toast>
                            <ToastTitle>{message.clone()}</ToastTitle>
                        </Toast>
                    }
                },
                ToastOptions::default()
                    .with_intent(intent)
                    .with_position(ToastPosition::BottomEnd)
                    .with_timeout(timeout),
            )
        });
    }
}

/// Must sit inside `ToasterProvider`
#[component]
pub fn NotificationsProvider(children: Children) -> impl IntoView {
    provide_context(Notifications {
        toaster: StoredValue::new_local(ToasterInjection::expect_context()),
    });
    children()
}
