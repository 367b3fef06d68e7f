use crate::enums::{TaskLabel, TaskPriority, TaskStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task record as returned by the task store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: String,

    /// Human readable code, e.g. `TASK-1042`
    pub code: String,

    pub title: Option<String>,
    pub status: TaskStatus,
    pub label: TaskLabel,
    pub priority: TaskPriority,

    #[serde(default)]
    pub estimated_hours: f64,

    #[serde(default)]
    pub archived: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Title if present and not blank
    pub fn display_title(&self) -> Option<&str> {
        self.title
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_store_payload() {
        let json = r#"{
            "id": "t-1",
            "code": "TASK-0001",
            "title": "Ship it",
            "status": "in-progress",
            "label": "feature",
            "priority": "high",
            "estimatedHours": 2.5,
            "createdAt": "2024-03-15T14:02:26Z",
            "updatedAt": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.estimated_hours, 2.5);
        assert!(!task.archived);
        assert_eq!(task.display_title(), Some("Ship it"));
    }

    #[test]
    fn test_blank_title_is_not_displayed() {
        let json = r#"{
            "id": "t-2", "code": "TASK-0002", "title": "   ",
            "status": "todo", "label": "bug", "priority": "low",
            "createdAt": "2024-03-15T14:02:26Z", "updatedAt": null
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.display_title(), None);
    }
}
