use serde::{Deserialize, Serialize};

/// Task workflow status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
    Canceled,
}

impl TaskStatus {
    /// Wire value, also used in URL filters
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "in-progress",
            TaskStatus::Done => "done",
            TaskStatus::Canceled => "canceled",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
            TaskStatus::Canceled => "Canceled",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::Done,
            TaskStatus::Canceled,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "todo" => Some(TaskStatus::Todo),
            "in-progress" => Some(TaskStatus::InProgress),
            "done" => Some(TaskStatus::Done),
            "canceled" => Some(TaskStatus::Canceled),
            _ => None,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

/// Task category label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskLabel {
    Bug,
    Feature,
    Enhancement,
    Documentation,
}

impl TaskLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskLabel::Bug => "bug",
            TaskLabel::Feature => "feature",
            TaskLabel::Enhancement => "enhancement",
            TaskLabel::Documentation => "documentation",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskLabel::Bug => "Bug",
            TaskLabel::Feature => "Feature",
            TaskLabel::Enhancement => "Enhancement",
            TaskLabel::Documentation => "Documentation",
        }
    }

    pub fn all() -> Vec<TaskLabel> {
        vec![
            TaskLabel::Bug,
            TaskLabel::Feature,
            TaskLabel::Enhancement,
            TaskLabel::Documentation,
        ]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "bug" => Some(TaskLabel::Bug),
            "feature" => Some(TaskLabel::Feature),
            "enhancement" => Some(TaskLabel::Enhancement),
            "documentation" => Some(TaskLabel::Documentation),
            _ => None,
        }
    }
}

impl Default for TaskLabel {
    fn default() -> Self {
        TaskLabel::Bug
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl TaskPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskPriority::Low => "low",
            TaskPriority::Medium => "medium",
            TaskPriority::High => "high",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
        }
    }

    pub fn all() -> Vec<TaskPriority> {
        vec![TaskPriority::Low, TaskPriority::Medium, TaskPriority::High]
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "low" => Some(TaskPriority::Low),
            "medium" => Some(TaskPriority::Medium),
            "high" => Some(TaskPriority::High),
            _ => None,
        }
    }
}

impl Default for TaskPriority {
    fn default() -> Self {
        TaskPriority::Low
    }
}
