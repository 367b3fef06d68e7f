use contracts::domain::a001_task::response::{TaskFacetsResponse, TaskListResponse};
use contracts::domain::a001_task::Task;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct TaskListState {
    pub tasks: Vec<Task>,
    pub page_count: usize,
    pub total_count: usize,
    pub facets: TaskFacetsResponse,
    /// A page has arrived at least once
    pub is_loaded: bool,
}

impl TaskListState {
    pub fn apply_page(&mut self, page: TaskListResponse) {
        self.tasks = page.data;
        self.page_count = page.page_count;
        self.total_count = page.total_count;
        self.is_loaded = true;
    }

    /// Full-table spinner only before the first page; later reloads keep
    /// the current rows on screen
    pub fn shows_initial_loading(&self, loading: bool) -> bool {
        loading && !self.is_loaded
    }
}

pub fn create_state() -> RwSignal<TaskListState> {
    RwSignal::new(TaskListState::default())
}
