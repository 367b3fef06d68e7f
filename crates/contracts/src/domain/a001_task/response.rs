use super::aggregate::Task;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One page of tasks for the current table query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListResponse {
    pub data: Vec<Task>,
    pub page_count: usize,
    #[serde(default)]
    pub total_count: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HoursRange {
    pub min: f64,
    pub max: f64,
}

/// Facet counts used to populate filter options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskFacetsResponse {
    /// Keyed by `TaskStatus::as_str()`
    #[serde(default)]
    pub status_counts: BTreeMap<String, usize>,
    /// Keyed by `TaskPriority::as_str()`
    #[serde(default)]
    pub priority_counts: BTreeMap<String, usize>,
    #[serde(default)]
    pub estimated_hours_range: HoursRange,
}

impl TaskFacetsResponse {
    pub fn status_count(&self, key: &str) -> usize {
        self.status_counts.get(key).copied().unwrap_or(0)
    }

    pub fn priority_count(&self, key: &str) -> usize {
        self.priority_counts.get(key).copied().unwrap_or(0)
    }
}
