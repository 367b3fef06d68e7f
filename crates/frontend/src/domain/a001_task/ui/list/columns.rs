use crate::domain::a001_task::TaskTableAction;
use crate::shared::data_table::{
    ColumnDef, ColumnFilter, ColumnsFn, FilterOption, RowActionState,
};
use crate::shared::icons::icon;
use contracts::domain::a001_task::response::TaskFacetsResponse;
use contracts::domain::a001_task::Task;
use contracts::enums::{TaskPriority, TaskStatus};
use leptos::prelude::*;
use std::sync::Arc;
use thaw::*;

fn status_badge(status: TaskStatus) -> AnyView {
    let color = match status {
        TaskStatus::Todo => BadgeColor::Informative,
        TaskStatus::InProgress => BadgeColor::Brand,
        TaskStatus::Done => BadgeColor::Success,
        TaskStatus::Canceled => BadgeColor::Danger,
    };
    view! { <Badge appearance=BadgeAppearance::Tint color=color>{status.label()}</Badge> }.into_any()
}

fn priority_text(priority: TaskPriority) -> AnyView {
    let class = match priority {
        TaskPriority::High => "task-priority task-priority--high",
        TaskPriority::Medium => "task-priority task-priority--medium",
        TaskPriority::Low => "task-priority task-priority--low",
    };
    view! { <span class=class>{priority.label()}</span> }.into_any()
}

pub fn status_options(facets: &TaskFacetsResponse) -> Vec<FilterOption> {
    TaskStatus::all()
        .into_iter()
        .map(|s| FilterOption::new(s.as_str(), s.label()).with_count(facets.status_count(s.as_str())))
        .collect()
}

pub fn priority_options(facets: &TaskFacetsResponse) -> Vec<FilterOption> {
    TaskPriority::all()
        .into_iter()
        .map(|p| {
            FilterOption::new(p.as_str(), p.label()).with_count(facets.priority_count(p.as_str()))
        })
        .collect()
}

/// Columns of the tasks table. Facets feed the filter options, so the
/// columns follow the facets signal.
pub fn get_columns(facets: Signal<TaskFacetsResponse>) -> ColumnsFn<Task, TaskTableAction> {
    Arc::new(move |row_actions: RowActionState<Task, TaskTableAction>| {
        let facets = facets.get();
        let range = facets.estimated_hours_range;

        vec![
            ColumnDef::new("code", "Task", |task: &Task| {
                view! { <span class="task-code">{task.code.clone()}</span> }.into_any()
            })
            .sortable()
            .fixed()
            .width("110px"),
            ColumnDef::new("title", "Title", |task: &Task| {
                let title = task.display_title().unwrap_or("-").to_string();
                let label = task.label.label();
                view! {
                    <Flex align=FlexAlign::Center gap=FlexGap::Small>
                        <Badge appearance=BadgeAppearance::Outline>{label}</Badge>
                        <span class="task-title">{title}</span>
                    </Flex>
                }
                .into_any()
            })
            .sortable()
            .filter(ColumnFilter::Text {
                placeholder: "Search titles...".to_string(),
            }),
            ColumnDef::new("status", "Status", |task: &Task| status_badge(task.status))
                .sortable()
                .filter(ColumnFilter::MultiSelect {
                    options: status_options(&facets),
                }),
            ColumnDef::new("priority", "Priority", |task: &Task| priority_text(task.priority))
                .sortable()
                .filter(ColumnFilter::MultiSelect {
                    options: priority_options(&facets),
                }),
            ColumnDef::new("estimatedHours", "Est. Hours", |task: &Task| {
                view! { <span class="task-hours">{format!("{}", task.estimated_hours)}</span> }
                    .into_any()
            })
            .sortable()
            .align_right()
            .filter(ColumnFilter::Range {
                min: range.min,
                max: range.max,
                unit: Some("hr".to_string()),
            }),
            ColumnDef::new("createdAt", "Created At", |task: &Task| {
                task.created_at.format("%b %-d, %Y").to_string().into_any()
            })
            .sortable()
            .filter(ColumnFilter::Date),
            ColumnDef::new("actions", "", move |task: &Task| {
                let id = task.id.clone();
                let for_edit = task.clone();
                let for_delete = task.clone();
                let edit_id = id.clone();
                view! {
                    <Flex justify=FlexJustify::End gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:title="Edit"
                            on_click=move |_| {
                                row_actions.set(edit_id.clone(), for_edit.clone(), TaskTableAction::Update)
                            }
                        >
                            {icon("edit")}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            size=ButtonSize::Small
                            attr:title="Delete"
                            on_click=move |_| {
                                row_actions.set(id.clone(), for_delete.clone(), TaskTableAction::Delete)
                            }
                        >
                            {icon("trash")}
                        </Button>
                    </Flex>
                }
                .into_any()
            })
            .fixed()
            .width("96px"),
        ]
    })
}
