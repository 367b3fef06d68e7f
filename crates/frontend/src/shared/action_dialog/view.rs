use super::flow::{ActionOutcome, ConfirmationFlow, Notice, TriggerEffect};
use super::kind::{ActionPreset, ActionVariant};
use super::messages::{ActionMessages, ActionTarget, CustomMessages};
use crate::shared::errors::ActionError;
use crate::shared::icons::icon;
use crate::shared::media_query::use_is_desktop;
use crate::shared::notify::Notifications;
use contracts::shared::ActionResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use thaw::*;

pub type ActionFuture = Pin<Box<dyn Future<Output = Result<ActionResponse, ActionError>>>>;

/// Async action invoked with the ids of the target records
pub type ActionCallback = Arc<dyn Fn(Vec<String>) -> ActionFuture + Send + Sync>;

pub fn action_callback<F, Fut>(f: F) -> ActionCallback
where
    F: Fn(Vec<String>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ActionResponse, ActionError>> + 'static,
{
    Arc::new(move |ids| Box::pin(f(ids)))
}

pub fn button_appearance(variant: ActionVariant) -> ButtonAppearance {
    match variant {
        ActionVariant::Destructive => ButtonAppearance::Primary,
        ActionVariant::Outline => ButtonAppearance::Secondary,
    }
}

fn button_class(variant: ActionVariant) -> &'static str {
    match variant {
        ActionVariant::Destructive => "action-button action-button--destructive",
        ActionVariant::Outline => "action-button",
    }
}

/// Confirmation dialog around an async action on a set of records.
///
/// Renders a modal on desktop viewports and a bottom drawer otherwise. When
/// `open` is given the dialog is controlled by the caller and reports close
/// requests through `on_open_change`.
#[component]
pub fn GenericActionDialog<T>(
    /// Target records; snapshotted when the action starts
    #[prop(into)]
    data: Signal<Vec<T>>,
    /// Singular item noun, e.g. "task"
    #[prop(into)]
    item_name: String,
    #[prop(into)]
    action: ActionPreset,
    on_action: ActionCallback,
    #[prop(optional, into)]
    open: Option<Signal<bool>>,
    #[prop(optional)]
    on_open_change: Option<Callback<bool>>,
    #[prop(optional)]
    on_success: Option<Callback<Vec<T>>>,
    #[prop(optional)]
    on_error: Option<Callback<(String, Vec<T>)>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, default = true)]
    show_trigger: bool,
    #[prop(optional, default = true)]
    require_confirmation: bool,
    #[prop(optional)]
    custom_messages: CustomMessages,
) -> impl IntoView
where
    T: ActionTarget + Clone + Send + Sync + 'static,
{
    let notify = Notifications::expect_context();
    let is_desktop = use_is_desktop();

    let flow = RwSignal::new(ConfirmationFlow::new(require_confirmation));
    let surface_open = RwSignal::new(false);
    let preset = StoredValue::new(action);
    let on_action = StoredValue::new(on_action);

    let messages = Memo::new(move |_| {
        data.with(|targets| {
            preset.with_value(|p| ActionMessages::build(targets, &item_name, p, &custom_messages))
        })
    });

    if let Some(open) = open {
        Effect::new(move |_| {
            let value = open.get();
            flow.update(|f| f.set_open(value));
        });
    }

    Effect::new(move |_| {
        let value = flow.with(|f| f.open);
        if surface_open.get_untracked() != value {
            surface_open.set(value);
        }
    });

    let report_open = move |value: bool| {
        if let Some(cb) = on_open_change {
            if cb.try_run(value).is_none() {
                log::debug!("open-change handler already disposed");
            }
        }
    };

    let execute = move || {
        let snapshot = data.get_untracked();
        let mut started = false;
        flow.update(|f| started = f.begin(snapshot.len()));
        if !started {
            log::debug!("action pending or without targets, ignoring");
            return;
        }

        let ids: Vec<String> = snapshot.iter().map(|t| t.target_id()).collect();
        let msgs = messages.get_untracked();
        log::info!("running action on {} record(s)", ids.len());
        let fut = on_action.with_value(|cb| cb(ids));

        spawn_local(async move {
            let outcome = ActionOutcome::from_result(fut.await, &msgs);
            let settlement = flow
                .try_update(|f| f.settle(outcome.clone()))
                .unwrap_or_else(|| {
                    log::debug!("action dialog unmounted before the action settled");
                    ConfirmationFlow::detached(require_confirmation).settle(outcome)
                });

            match settlement.notice {
                Notice::Success(ref m) => notify.success(m.clone()),
                Notice::Error(ref m) => notify.error(m.clone()),
            }
            if let Some(error) = settlement.fire_error {
                if let Some(cb) = on_error {
                    if cb.try_run((error, snapshot.clone())).is_none() {
                        log::warn!("error handler disposed before the action settled");
                    }
                }
            }
            if settlement.fire_success {
                if let Some(cb) = on_success {
                    if cb.try_run(snapshot).is_none() {
                        log::warn!("success handler disposed before the action settled");
                    }
                }
            }
            if settlement.close {
                report_open(false);
            }
        });
    };

    let on_trigger = move |_| {
        let count = data.with_untracked(Vec::len);
        let mut effect = TriggerEffect::Ignored;
        flow.update(|f| effect = f.trigger(count, disabled.get_untracked()));
        match effect {
            TriggerEffect::OpenConfirmation => report_open(true),
            TriggerEffect::Execute => execute(),
            TriggerEffect::Ignored => {}
        }
    };

    let on_cancel = move |_| {
        let mut closed = false;
        flow.update(|f| closed = f.dismiss());
        if closed {
            report_open(false);
        }
    };

    let pending = Signal::derive(move || flow.with(|f| f.pending));
    let trigger_disabled = Signal::derive(move || {
        let count = data.with(Vec::len);
        !flow.with(|f| f.can_trigger(count, disabled.get()))
    });
    // Controlled dialogs open without the trigger, so confirm checks again
    let confirm_disabled = Signal::derive(move || {
        pending.get() || data.with(Vec::is_empty) || disabled.get()
    });

    let variant = preset.with_value(|p| p.variant);
    let label = preset.with_value(|p| p.label.clone());
    let trigger_icon = preset.with_value(|p| p.icon);

    let trigger = move || {
        let label = label.clone();
        show_trigger.then(|| {
            view! {
                <Button
                    appearance=button_appearance(variant)
                    class=button_class(variant)
                    disabled=trigger_disabled
                    on_click=on_trigger
                >
                    {move || if pending.get() {
                        view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                    } else {
                        icon(trigger_icon)
                    }}
                    {format!(" {} ", label)}
                    {move || format!("({})", data.with(Vec::len))}
                </Button>
            }
        })
    };

    if !require_confirmation {
        return view! { <>{trigger}</> }.into_any();
    }

    let confirm_labels = StoredValue::new(preset.with_value(|p| {
        let busy = p.loading_message.clone().unwrap_or_else(|| p.label.clone());
        (p.label.clone(), busy)
    }));
    let confirm_text = move || {
        confirm_labels.with_value(|(idle, busy)| {
            if pending.get() {
                busy.clone()
            } else {
                idle.clone()
            }
        })
    };

    let footer = move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=pending
                on_click=on_cancel
            >
                "Cancel"
            </Button>
            <Button
                appearance=button_appearance(variant)
                class=button_class(variant)
                disabled=confirm_disabled
                on_click=move |_| execute()
            >
                {move || pending.get().then(|| view! { <Spinner size=SpinnerSize::Tiny /> })}
                {confirm_text}
            </Button>
        }
    };

    view! {
        {trigger}
        {move || if is_desktop.get() {
            view! {
                <Dialog open=surface_open mask_closeable=false close_on_esc=false>
                    <DialogSurface>
                        <DialogBody>
                            <DialogTitle>{move || messages.with(|m| m.confirmation_title.clone())}</DialogTitle>
                            <DialogContent>
                                {move || messages.with(|m| m.confirmation_description.clone())}
                            </DialogContent>
                            <DialogActions>{footer()}</DialogActions>
                        </DialogBody>
                    </DialogSurface>
                </Dialog>
            }.into_any()
        } else {
            view! {
                <OverlayDrawer
                    open=surface_open
                    position=DrawerPosition::Bottom
                    mask_closeable=false
                    close_on_esc=false
                >
                    <DrawerHeader>
                        <DrawerHeaderTitle>
                            {move || messages.with(|m| m.confirmation_title.clone())}
                        </DrawerHeaderTitle>
                    </DrawerHeader>
                    <DrawerBody>
                        <p class="action-dialog__description">
                            {move || messages.with(|m| m.confirmation_description.clone())}
                        </p>
                        <div class="action-dialog__footer">{footer()}</div>
                    </DrawerBody>
                </OverlayDrawer>
            }.into_any()
        }}
    }
    .into_any()
}
