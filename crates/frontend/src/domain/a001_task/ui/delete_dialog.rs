use crate::domain::a001_task::api;
use crate::shared::action_dialog::{action_callback, ActionKind, ActionPreset, GenericActionDialog};
use contracts::domain::a001_task::Task;
use leptos::prelude::*;

pub fn delete_preset() -> ActionPreset {
    ActionPreset::from(ActionKind::Delete)
}

/// Delete confirmation mounted by the table for the `Delete` row action
#[component]
pub fn DeleteTasksDialog(
    #[prop(into)]
    tasks: Signal<Vec<Task>>,
    #[prop(into)]
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    #[prop(optional_no_strip)]
    on_success: Option<Callback<()>>,
    #[prop(optional)]
    show_trigger: bool,
) -> impl IntoView {
    let on_deleted = Callback::new(move |deleted: Vec<Task>| {
        log::info!("deleted {} task(s)", deleted.len());
        if let Some(cb) = on_success {
            cb.run(());
        }
    });

    view! {
        <GenericActionDialog
            data=tasks
            item_name="task"
            action=delete_preset()
            on_action=action_callback(api::delete_tasks)
            open=open
            on_open_change=on_open_change
            on_success=on_deleted
            show_trigger=show_trigger
        />
    }
}
