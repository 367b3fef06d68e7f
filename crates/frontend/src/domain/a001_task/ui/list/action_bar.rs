use crate::domain::a001_task::api;
use crate::domain::a001_task::ui::delete_dialog::delete_preset;
use crate::shared::action_dialog::{action_callback, GenericActionDialog};
use crate::shared::data_table::ActionBarContext;
use crate::shared::icons::icon;
use contracts::domain::a001_task::Task;
use leptos::prelude::*;
use thaw::*;

/// Floating bar for the selected tasks
#[component]
pub fn TasksTableActionBar(
    context: ActionBarContext<Task>,
    /// Called after a bulk action changed the store
    on_saved: Callback<()>,
) -> impl IntoView {
    let ActionBarContext {
        selected_rows,
        selection,
    } = context;
    let count = Signal::derive(move || selected_rows.with(Vec::len));

    view! {
        <div class="data-table-action-bar" role="toolbar" aria-label="Selected tasks">
            <span class="data-table-action-bar__count">
                {move || format!("{} selected", count.get())}
            </span>
            <Button
                appearance=ButtonAppearance::Subtle
                size=ButtonSize::Small
                attr:title="Clear selection"
                on_click=move |_| selection.clear()
            >
                {icon("x")}
            </Button>
            <div class="data-table-action-bar__separator"></div>
            <GenericActionDialog
                data=selected_rows
                item_name="task"
                action=delete_preset()
                on_action=action_callback(api::delete_tasks)
                on_success=Callback::new(move |deleted: Vec<Task>| {
                    log::info!("bulk deleted {} task(s)", deleted.len());
                    selection.clear();
                    on_saved.run(());
                })
            />
        </div>
    }
}
