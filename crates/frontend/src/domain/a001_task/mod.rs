pub mod api;
pub mod ui;

use crate::shared::action_dialog::ActionTarget;
use contracts::domain::a001_task::Task;

/// Row actions of the tasks table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskTableAction {
    Update,
    Delete,
}

impl ActionTarget for Task {
    fn target_id(&self) -> String {
        self.id.clone()
    }

    fn target_title(&self) -> Option<String> {
        self.display_title().map(str::to_string)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::action_dialog::messages::display_name;
    use contracts::enums::{TaskLabel, TaskPriority, TaskStatus};

    fn task(title: Option<&str>) -> Task {
        Task {
            id: "t-7".to_string(),
            code: "TASK-0007".to_string(),
            title: title.map(str::to_string),
            status: TaskStatus::Todo,
            label: TaskLabel::Bug,
            priority: TaskPriority::Low,
            estimated_hours: 1.0,
            archived: false,
            created_at: chrono::Utc::now(),
            updated_at: None,
        }
    }

    #[test]
    fn test_task_display_name_falls_back_to_id() {
        assert_eq!(display_name(&task(Some("Fix login")), "task"), "Fix login");
        assert_eq!(display_name(&task(Some("  ")), "task"), "task t-7");
        assert_eq!(display_name(&task(None), "task"), "task t-7");
    }
}
