use crate::shared::query_params::{
    on_navigation, read_search_params, write_owned_params, QueryParams,
};
use contracts::enums::{TaskPriority, TaskStatus};
use contracts::shared::table_query::{
    ColumnSort, FilterCondition, JoinOperator, TableQuery, TableQueryDefaults, TABLE_QUERY_KEYS,
};
use leptos::prelude::*;

/// Apply `change` to a copy of `query`. Any change besides the page itself
/// sends the user back to the first page. `None` when nothing changed.
pub fn with_page_reset(query: &TableQuery, change: impl FnOnce(&mut TableQuery)) -> Option<TableQuery> {
    let mut next = query.clone();
    change(&mut next);
    if next == *query {
        return None;
    }
    next.page = 1;
    Some(next)
}

/// Header click cycle: unsorted -> asc -> desc -> unsorted
pub fn next_sort(current: &[ColumnSort], id: &str) -> Vec<ColumnSort> {
    match current.first() {
        Some(sort) if sort.id == id && !sort.desc => vec![ColumnSort::desc(id)],
        Some(sort) if sort.id == id => Vec::new(),
        _ => vec![ColumnSort::asc(id)],
    }
}

/// Filter, sort and pagination state of one table, mirrored into the URL
#[derive(Clone, Copy)]
pub struct TableQueryState {
    query: RwSignal<TableQuery>,
    defaults: StoredValue<TableQueryDefaults>,
}

impl TableQueryState {
    pub fn new(defaults: TableQueryDefaults) -> Self {
        Self {
            query: RwSignal::new(TableQuery::new(&defaults)),
            defaults: StoredValue::new(defaults),
        }
    }

    pub fn query(&self) -> Signal<TableQuery> {
        self.query.into()
    }

    pub fn get_untracked(&self) -> TableQuery {
        self.query.get_untracked()
    }

    pub fn defaults(&self) -> TableQueryDefaults {
        self.defaults.get_value()
    }

    fn change(&self, f: impl FnOnce(&mut TableQuery)) {
        let next = self.query.with_untracked(|q| with_page_reset(q, f));
        if let Some(next) = next {
            self.query.set(next);
        }
    }

    pub fn set_page(&self, page: usize) {
        let page = page.max(1);
        if self.query.with_untracked(|q| q.page) != page {
            self.query.update(|q| q.page = page);
        }
    }

    pub fn set_per_page(&self, per_page: usize) {
        if per_page == 0 {
            return;
        }
        self.change(|q| q.per_page = per_page);
    }

    pub fn toggle_sort(&self, column_id: &str) {
        self.change(|q| q.sort = next_sort(&q.sort, column_id));
    }

    pub fn set_sort(&self, sort: Vec<ColumnSort>) {
        self.change(|q| q.sort = sort);
    }

    pub fn set_title(&self, title: String) {
        self.change(|q| q.title = title);
    }

    pub fn set_status(&self, status: Vec<TaskStatus>) {
        self.change(|q| q.status = status);
    }

    pub fn set_priority(&self, priority: Vec<TaskPriority>) {
        self.change(|q| q.priority = priority);
    }

    /// Values of a faceted toolbar filter, by column id
    pub fn multi_filter(&self, column_id: &str) -> Vec<String> {
        self.query.with(|q| match column_id {
            "status" => q.status.iter().map(|s| s.as_str().to_string()).collect(),
            "priority" => q.priority.iter().map(|p| p.as_str().to_string()).collect(),
            _ => Vec::new(),
        })
    }

    pub fn set_multi_filter(&self, column_id: &str, values: Vec<String>) {
        match column_id {
            "status" => self.set_status(values.iter().filter_map(|v| TaskStatus::parse(v)).collect()),
            "priority" => {
                self.set_priority(values.iter().filter_map(|v| TaskPriority::parse(v)).collect())
            }
            other => log::warn!("column {} has no toolbar filter", other),
        }
    }

    pub fn add_filter(&self, condition: FilterCondition) {
        self.change(|q| q.filters.push(condition));
    }

    pub fn update_filter(&self, filter_id: &str, f: impl FnOnce(&mut FilterCondition)) {
        self.change(|q| {
            if let Some(condition) = q.filters.iter_mut().find(|c| c.filter_id == filter_id) {
                f(condition);
            }
        });
    }

    pub fn remove_filter(&self, filter_id: &str) {
        self.change(|q| q.filters.retain(|c| c.filter_id != filter_id));
    }

    pub fn clear_filters(&self) {
        self.change(|q| {
            q.filters.clear();
            q.join_operator = JoinOperator::And;
        });
    }

    pub fn set_join_operator(&self, join_operator: JoinOperator) {
        self.change(|q| q.join_operator = join_operator);
    }

    /// Drop every toolbar filter; sort and page size stay
    pub fn reset_filters(&self) {
        self.change(|q| {
            q.title.clear();
            q.status.clear();
            q.priority.clear();
        });
    }

    /// Restore from URL params. A no-op once the owning view is disposed.
    fn restore(&self, params: &QueryParams) {
        let Some(restored) = self
            .defaults
            .try_with_value(|d| TableQuery::from_params(params, d))
        else {
            return;
        };
        if self.query.try_get_untracked().is_some_and(|q| q != restored) {
            log::debug!("table query restored from the URL");
            self.query.set(restored);
        }
    }
}

/// Create the query state, restore it from the URL and keep the URL in sync
pub fn use_table_query(defaults: TableQueryDefaults) -> TableQueryState {
    let state = TableQueryState::new(defaults);
    state.restore(&read_search_params());

    let query = state.query;
    let defaults = state.defaults;
    Effect::new(move |_| {
        let params = query.with(|q| defaults.with_value(|d| q.to_params(d)));
        write_owned_params(&TABLE_QUERY_KEYS, &params);
    });

    on_navigation(move |params| state.restore(params));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::shared::table_query::FilterOperator;

    fn query_on_page(page: usize) -> TableQuery {
        let mut query = TableQuery::new(&TableQueryDefaults::default());
        query.page = page;
        query
    }

    #[test]
    fn test_filter_change_resets_page() {
        let query = query_on_page(4);
        let next = with_page_reset(&query, |q| q.status = vec![TaskStatus::Done]).unwrap();
        assert_eq!(next.page, 1);
        assert_eq!(next.status, vec![TaskStatus::Done]);

        let next = with_page_reset(&query, |q| q.per_page = 50).unwrap();
        assert_eq!(next.page, 1);

        let next = with_page_reset(&query, |q| {
            q.filters.push(FilterCondition {
                filter_id: "f1".into(),
                id: "title".into(),
                operator: FilterOperator::ILike,
                value: "fix".into(),
            })
        })
        .unwrap();
        assert_eq!(next.page, 1);
    }

    #[test]
    fn test_unchanged_query_keeps_page() {
        let query = query_on_page(3);
        assert!(with_page_reset(&query, |q| q.title = String::new()).is_none());
    }

    #[test]
    fn test_navigation_without_keys_restores_defaults() {
        let owner = Owner::new();
        owner.set();
        let state = TableQueryState::new(TableQueryDefaults::default());
        state.set_title("fix".to_string());
        state.set_page(3);

        state.restore(&QueryParams::new());
        assert_eq!(state.get_untracked(), TableQuery::new(&TableQueryDefaults::default()));
    }

    #[test]
    fn test_header_sort_cycle() {
        let asc = next_sort(&[], "title");
        assert_eq!(asc, vec![ColumnSort::asc("title")]);

        let desc = next_sort(&asc, "title");
        assert_eq!(desc, vec![ColumnSort::desc("title")]);

        assert!(next_sort(&desc, "title").is_empty());
        assert_eq!(next_sort(&desc, "status"), vec![ColumnSort::asc("status")]);
    }
}
