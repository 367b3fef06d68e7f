use crate::enums::{TaskLabel, TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTaskRequest {
    pub title: String,
    pub status: TaskStatus,
    pub label: TaskLabel,
    pub priority: TaskPriority,
    pub estimated_hours: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTaskRequest {
    pub id: String,
    pub title: Option<String>,
    pub status: Option<TaskStatus>,
    pub label: Option<TaskLabel>,
    pub priority: Option<TaskPriority>,
    pub estimated_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteTasksRequest {
    pub ids: Vec<String>,
}
