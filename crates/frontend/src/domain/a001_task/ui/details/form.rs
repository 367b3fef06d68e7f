use crate::shared::components::ui::{Input, Select, Textarea};
use crate::shared::form_sheet::{FieldErrors, FormHandle, FormSchema};
use contracts::domain::a001_task::request::{CreateTaskRequest, UpdateTaskRequest};
use contracts::domain::a001_task::Task;
use contracts::enums::{TaskLabel, TaskPriority, TaskStatus};
use contracts::shared::ValidationRules;
use leptos::prelude::*;

pub const TITLE_RULES: ValidationRules = ValidationRules::required().with_max_length(128);
pub const HOURS_RULES: ValidationRules = ValidationRules::required().with_range(0.0, 1000.0);

/// Editable task fields. Estimated hours stay text until submit so a typo
/// is reported on the field instead of being dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskFormValues {
    pub title: String,
    pub status: TaskStatus,
    pub label: TaskLabel,
    pub priority: TaskPriority,
    pub estimated_hours: String,
}

impl Default for TaskFormValues {
    fn default() -> Self {
        Self {
            title: String::new(),
            status: TaskStatus::default(),
            label: TaskLabel::default(),
            priority: TaskPriority::default(),
            estimated_hours: "0".to_string(),
        }
    }
}

impl From<&Task> for TaskFormValues {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone().unwrap_or_default(),
            status: task.status,
            label: task.label,
            priority: task.priority,
            estimated_hours: task.estimated_hours.to_string(),
        }
    }
}

impl TaskFormValues {
    fn hours(&self) -> f64 {
        self.estimated_hours.trim().parse().unwrap_or(f64::NAN)
    }

    pub fn to_create_request(&self) -> CreateTaskRequest {
        CreateTaskRequest {
            title: self.title.trim().to_string(),
            status: self.status,
            label: self.label,
            priority: self.priority,
            estimated_hours: self.hours(),
        }
    }

    pub fn to_update_request(&self, id: &str) -> UpdateTaskRequest {
        UpdateTaskRequest {
            id: id.to_string(),
            title: Some(self.title.trim().to_string()),
            status: Some(self.status),
            label: Some(self.label),
            priority: Some(self.priority),
            estimated_hours: Some(self.hours()),
        }
    }
}

impl FormSchema for TaskFormValues {
    fn validate(&self) -> Result<(), FieldErrors> {
        let mut errors = FieldErrors::new();
        errors.check("title", TITLE_RULES.validate_string(self.title.trim(), "Title"));
        if self.estimated_hours.trim().is_empty() {
            errors.insert("estimated_hours", "Estimated hours is required");
        } else {
            errors.check(
                "estimated_hours",
                HOURS_RULES.validate_number(self.hours(), "Estimated hours"),
            );
        }
        errors.into_result()
    }
}

fn enum_options<E>(
    all: Vec<E>,
    value: impl Fn(&E) -> &'static str,
    label: impl Fn(&E) -> &'static str,
) -> Vec<(String, String)> {
    all.iter()
        .map(|e| (value(e).to_string(), label(e).to_string()))
        .collect()
}

/// Field set shared by the create and update sheets
#[component]
pub fn TaskForm(form: FormHandle<TaskFormValues>) -> impl IntoView {
    let values = form.values;

    view! {
        <div class="task-form">
            <Textarea
                label="Title"
                placeholder="Do a kickflip"
                rows=2
                value=Signal::derive(move || values.with(|v| v.title.clone()))
                on_input=Callback::new(move |text: String| form.update_field("title", |v| v.title = text))
                error=form.error("title")
            />
            <Select
                label="Label"
                value=Signal::derive(move || values.with(|v| v.label.as_str().to_string()))
                options=enum_options(TaskLabel::all(), TaskLabel::as_str, TaskLabel::label)
                on_change=Callback::new(move |raw: String| {
                    if let Some(label) = TaskLabel::parse(&raw) {
                        form.update_field("label", |v| v.label = label);
                    }
                })
                error=form.error("label")
            />
            <Select
                label="Status"
                value=Signal::derive(move || values.with(|v| v.status.as_str().to_string()))
                options=enum_options(TaskStatus::all(), TaskStatus::as_str, TaskStatus::label)
                on_change=Callback::new(move |raw: String| {
                    if let Some(status) = TaskStatus::parse(&raw) {
                        form.update_field("status", |v| v.status = status);
                    }
                })
                error=form.error("status")
            />
            <Select
                label="Priority"
                value=Signal::derive(move || values.with(|v| v.priority.as_str().to_string()))
                options=enum_options(TaskPriority::all(), TaskPriority::as_str, TaskPriority::label)
                on_change=Callback::new(move |raw: String| {
                    if let Some(priority) = TaskPriority::parse(&raw) {
                        form.update_field("priority", |v| v.priority = priority);
                    }
                })
                error=form.error("priority")
            />
            <Input
                label="Estimated Hours"
                input_type="number"
                step="0.5"
                placeholder="Enter estimated hours"
                value=Signal::derive(move || values.with(|v| v.estimated_hours.clone()))
                on_input=Callback::new(move |text: String| {
                    form.update_field("estimated_hours", |v| v.estimated_hours = text)
                })
                error=form.error("estimated_hours")
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(title: &str, hours: &str) -> TaskFormValues {
        TaskFormValues {
            title: title.to_string(),
            estimated_hours: hours.to_string(),
            ..TaskFormValues::default()
        }
    }

    #[test]
    fn test_valid_values_pass() {
        assert!(values("Fix login redirect", "2.5").validate().is_ok());
        assert!(values("x", "0").validate().is_ok());
        assert!(values("x", "1000").validate().is_ok());
    }

    #[test]
    fn test_title_rules() {
        let errors = values("   ", "1").validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title is required"));
        assert_eq!(errors.len(), 1);

        let errors = values(&"a".repeat(129), "1").validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Title must not exceed 128 characters"));
    }

    #[test]
    fn test_hours_parse_failure_is_a_field_error() {
        let errors = values("Task", "two").validate().unwrap_err();
        assert_eq!(errors.get("estimated_hours"), Some("Estimated hours must be a number"));

        let errors = values("Task", "").validate().unwrap_err();
        assert_eq!(errors.get("estimated_hours"), Some("Estimated hours is required"));

        let errors = values("Task", "-1").validate().unwrap_err();
        assert_eq!(errors.get("estimated_hours"), Some("Estimated hours must be at least 0"));

        let errors = values("Task", "1001").validate().unwrap_err();
        assert_eq!(errors.get("estimated_hours"), Some("Estimated hours must be at most 1000"));
    }

    #[test]
    fn test_requests_trim_title() {
        let form = values("  Ship it  ", "3");
        let create = form.to_create_request();
        assert_eq!(create.title, "Ship it");
        assert_eq!(create.estimated_hours, 3.0);

        let update = form.to_update_request("t-1");
        assert_eq!(update.id, "t-1");
        assert_eq!(update.title.as_deref(), Some("Ship it"));
    }
}
