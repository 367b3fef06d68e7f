use super::form::{TaskForm, TaskFormValues};
use crate::domain::a001_task::api;
use crate::shared::form_sheet::{form_renderer, submit_callback, GenericFormSheet};
use crate::shared::icons::icon;
use contracts::domain::a001_task::Task;
use leptos::prelude::*;
use thaw::*;

fn task_form() -> crate::shared::form_sheet::FormRenderer<TaskFormValues> {
    form_renderer(|form| view! { <TaskForm form=form /> }.into_any())
}

/// "New task" button with its own create sheet
#[component]
pub fn CreateTaskSheet(
    /// Called after the task store accepted the new task
    on_saved: Callback<()>,
) -> impl IntoView {
    let open = RwSignal::new(false);

    view! {
        <GenericFormSheet
            open=open
            on_open_change=Callback::new(move |value: bool| open.set(value))
            on_submit=submit_callback(|values: TaskFormValues| async move {
                api::create_task(values.to_create_request()).await
            })
            render_form=task_form()
            default_values=Signal::derive(|| Some(TaskFormValues::default()))
            title="Create Task"
            description="Fill in the details below to create a new task"
            submit_label="Create"
            on_success=Some(on_saved)
            trigger=move || view! {
                <Button appearance=ButtonAppearance::Primary>
                    {icon("plus")}
                    "New task"
                </Button>
            }
        />
    }
}

/// Edit sheet mounted by the table for the `Update` row action
#[component]
pub fn UpdateTaskSheet(
    #[prop(into)]
    open: Signal<bool>,
    on_open_change: Callback<bool>,
    /// Owned by the table, so it still runs when the save settles after
    /// the sheet was closed
    #[prop(optional_no_strip)]
    on_success: Option<Callback<()>>,
    task: Option<Task>,
) -> impl IntoView {
    let Some(task) = task else {
        log::warn!("update sheet mounted without a task");
        return ().into_any();
    };
    let task_id = task.id.clone();
    let defaults = TaskFormValues::from(&task);

    view! {
        <GenericFormSheet
            open=open
            on_open_change=on_open_change
            on_submit=submit_callback(move |values: TaskFormValues| {
                let request = values.to_update_request(&task_id);
                async move { api::update_task(request).await }
            })
            render_form=task_form()
            default_values=Signal::derive(move || Some(defaults.clone()))
            title="Update Task"
            description="Update the task details and save the changes"
            submit_label="Save"
            on_success=on_success
        />
    }
    .into_any()
}
