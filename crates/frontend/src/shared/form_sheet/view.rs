use super::flexible_sheet::{FlexibleSheet, SheetAction, SheetSize};
use super::flow::{FormSheetFlow, SubmitGate, SubmitOutcome};
use super::form::FormHandle;
use super::schema::FormSchema;
use crate::shared::errors::ActionError;
use crate::shared::notify::Notifications;
use contracts::shared::ActionResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

pub type SubmitFuture = Pin<Box<dyn Future<Output = Result<ActionResponse, ActionError>>>>;

/// Async submit of validated form values
pub type SubmitCallback<T> = Arc<dyn Fn(T) -> SubmitFuture + Send + Sync>;

/// Renders the field set for a live form handle
pub type FormRenderer<T> = Arc<dyn Fn(FormHandle<T>) -> AnyView + Send + Sync>;

pub fn submit_callback<T, F, Fut>(f: F) -> SubmitCallback<T>
where
    F: Fn(T) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<ActionResponse, ActionError>> + 'static,
{
    Arc::new(move |values| Box::pin(f(values)))
}

pub fn form_renderer<T, F>(f: F) -> FormRenderer<T>
where
    T: Send + Sync + 'static,
    F: Fn(FormHandle<T>) -> AnyView + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Form inside a slide-over sheet. Validates before submit, reports the
/// outcome as a toast and closes on success.
#[component]
pub fn GenericFormSheet<T>(
    #[prop(into)]
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    on_submit: SubmitCallback<T>,
    render_form: FormRenderer<T>,
    /// Values the form resets to each time the sheet opens
    #[prop(optional, into)]
    default_values: Signal<Option<T>>,
    #[prop(into)]
    title: String,
    #[prop(optional, into)]
    description: MaybeProp<String>,
    #[prop(into)]
    submit_label: String,
    #[prop(optional_no_strip)]
    on_success: Option<Callback<()>>,
    #[prop(optional)]
    size: SheetSize,
    #[prop(optional, into)]
    trigger: Option<ViewFn>,
) -> impl IntoView
where
    T: FormSchema,
{
    let notify = Notifications::expect_context();
    let form = FormHandle::new(default_values.get_untracked().unwrap_or_default());
    let flow = RwSignal::new(FormSheetFlow::default());
    let on_submit = StoredValue::new(on_submit);
    let title_value = StoredValue::new(title.clone());

    Effect::new(move |_| {
        let is_open = open.get();
        let defaults = default_values.get();
        let mut reset = None;
        flow.update(|f| reset = f.sync_open(is_open, defaults.as_ref()));
        if let Some(values) = reset {
            log::debug!("form sheet opened, resetting to defaults");
            form.reset(values);
        }
    });

    let submit = move || {
        let values = form.values.get_untracked();
        let mut gate = SubmitGate::Busy;
        flow.update(|f| gate = f.begin_submit(&values));
        match gate {
            SubmitGate::Busy => {
                log::debug!("submit already pending, ignoring");
            }
            SubmitGate::Invalid(errors) => {
                log::debug!("form has {} invalid field(s)", errors.len());
                form.errors.set(errors);
            }
            SubmitGate::Ready => {
                form.errors.set(Default::default());
                let fut = on_submit.with_value(|cb| cb(values));
                let title = title_value.get_value();
                spawn_local(async move {
                    let outcome = SubmitOutcome::from_result(fut.await, &title);
                    if flow.try_update(|f| f.settle(&outcome)).is_none() {
                        log::debug!("form sheet unmounted before submit settled");
                    }
                    match outcome {
                        SubmitOutcome::Failed(message) => notify.error(message),
                        SubmitOutcome::Saved(message) => {
                            notify.success(message);
                            if on_open_change.try_run(false).is_none() {
                                log::debug!("open-change handler already disposed");
                            }
                            if let Some(cb) = on_success {
                                if cb.try_run(()).is_none() {
                                    log::warn!("success handler disposed before submit settled");
                                }
                            }
                        }
                    }
                });
            }
        }
    };

    let pending = Signal::derive(move || flow.with(|f| f.pending));
    let actions = vec![
        SheetAction::new("Cancel", Callback::new(move |_| on_open_change.run(false))),
        SheetAction::new(submit_label, Callback::new(move |_| submit()))
            .primary()
            .disabled(pending)
            .loading(pending),
    ];

    view! {
        <FlexibleSheet
            open=open
            on_open_change=on_open_change
            title=title
            description=description
            size=size
            actions=actions
            trigger=trigger
        >
            <form on:submit=move |ev| {
                ev.prevent_default();
                submit();
            }>
                {render_form(form)}
            </form>
        </FlexibleSheet>
    }
}
