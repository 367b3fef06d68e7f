//! Server-driven table query: pagination, sorting and filters.
//!
//! The same flat key set is used for the browser URL and for the task store
//! request, so `to_params` / `from_params` are the single mapping point.

use crate::enums::{TaskPriority, TaskStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const PARAM_PAGE: &str = "page";
pub const PARAM_PER_PAGE: &str = "perPage";
pub const PARAM_SORT: &str = "sort";
pub const PARAM_FILTERS: &str = "filters";
pub const PARAM_JOIN_OPERATOR: &str = "joinOperator";
pub const PARAM_TITLE: &str = "title";
pub const PARAM_STATUS: &str = "status";
pub const PARAM_PRIORITY: &str = "priority";

/// Every key owned by the table query
pub const TABLE_QUERY_KEYS: [&str; 8] = [
    PARAM_PAGE,
    PARAM_PER_PAGE,
    PARAM_SORT,
    PARAM_FILTERS,
    PARAM_JOIN_OPERATOR,
    PARAM_TITLE,
    PARAM_STATUS,
    PARAM_PRIORITY,
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSort {
    pub id: String,
    pub desc: bool,
}

impl ColumnSort {
    pub fn asc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: false,
        }
    }

    pub fn desc(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            desc: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FilterOperator {
    #[serde(rename = "iLike")]
    ILike,
    #[serde(rename = "notILike")]
    NotILike,
    #[serde(rename = "eq")]
    Eq,
    #[serde(rename = "ne")]
    Ne,
    #[serde(rename = "lt")]
    Lt,
    #[serde(rename = "lte")]
    Lte,
    #[serde(rename = "gt")]
    Gt,
    #[serde(rename = "gte")]
    Gte,
    #[serde(rename = "isEmpty")]
    IsEmpty,
    #[serde(rename = "isNotEmpty")]
    IsNotEmpty,
}

impl FilterOperator {
    pub fn all() -> Vec<FilterOperator> {
        vec![
            FilterOperator::ILike,
            FilterOperator::NotILike,
            FilterOperator::Eq,
            FilterOperator::Ne,
            FilterOperator::Lt,
            FilterOperator::Lte,
            FilterOperator::Gt,
            FilterOperator::Gte,
            FilterOperator::IsEmpty,
            FilterOperator::IsNotEmpty,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterOperator::ILike => "iLike",
            FilterOperator::NotILike => "notILike",
            FilterOperator::Eq => "eq",
            FilterOperator::Ne => "ne",
            FilterOperator::Lt => "lt",
            FilterOperator::Lte => "lte",
            FilterOperator::Gt => "gt",
            FilterOperator::Gte => "gte",
            FilterOperator::IsEmpty => "isEmpty",
            FilterOperator::IsNotEmpty => "isNotEmpty",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::all().into_iter().find(|op| op.as_str() == value)
    }

    pub fn label(&self) -> &'static str {
        match self {
            FilterOperator::ILike => "Contains",
            FilterOperator::NotILike => "Does not contain",
            FilterOperator::Eq => "Is",
            FilterOperator::Ne => "Is not",
            FilterOperator::Lt => "Is less than",
            FilterOperator::Lte => "Is less than or equal to",
            FilterOperator::Gt => "Is greater than",
            FilterOperator::Gte => "Is greater than or equal to",
            FilterOperator::IsEmpty => "Is empty",
            FilterOperator::IsNotEmpty => "Is not empty",
        }
    }

    /// Operators that ignore the condition value
    pub fn is_value_less(&self) -> bool {
        matches!(self, FilterOperator::IsEmpty | FilterOperator::IsNotEmpty)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JoinOperator {
    #[default]
    And,
    Or,
}

impl JoinOperator {
    pub fn as_str(&self) -> &'static str {
        match self {
            JoinOperator::And => "and",
            JoinOperator::Or => "or",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "and" => Some(JoinOperator::And),
            "or" => Some(JoinOperator::Or),
            _ => None,
        }
    }
}

/// One advanced filter row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    /// Stable id of the row in the filter builder
    pub filter_id: String,
    /// Column id
    pub id: String,
    pub operator: FilterOperator,
    #[serde(default)]
    pub value: String,
}

impl FilterCondition {
    pub fn is_valid(&self) -> bool {
        self.operator.is_value_less() || !self.value.trim().is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableQuery {
    /// 1-based
    pub page: usize,
    pub per_page: usize,
    pub sort: Vec<ColumnSort>,
    pub title: String,
    pub status: Vec<TaskStatus>,
    pub priority: Vec<TaskPriority>,
    pub filters: Vec<FilterCondition>,
    pub join_operator: JoinOperator,
}

/// Values the query falls back to when a URL key is absent
#[derive(Debug, Clone, PartialEq)]
pub struct TableQueryDefaults {
    pub per_page: usize,
    pub sort: Vec<ColumnSort>,
}

impl Default for TableQueryDefaults {
    fn default() -> Self {
        Self {
            per_page: 10,
            sort: vec![ColumnSort::desc("createdAt")],
        }
    }
}

impl TableQuery {
    pub fn new(defaults: &TableQueryDefaults) -> Self {
        Self {
            page: 1,
            per_page: defaults.per_page,
            sort: defaults.sort.clone(),
            title: String::new(),
            status: Vec::new(),
            priority: Vec::new(),
            filters: Vec::new(),
            join_operator: JoinOperator::And,
        }
    }

    /// Conditions worth sending to the store
    pub fn valid_filters(&self) -> Vec<FilterCondition> {
        self.filters.iter().filter(|f| f.is_valid()).cloned().collect()
    }

    /// Simple toolbar filters are active
    pub fn has_simple_filters(&self) -> bool {
        !self.title.trim().is_empty() || !self.status.is_empty() || !self.priority.is_empty()
    }

    /// Copy used for the store request. Advanced filters only travel while
    /// a filter mode is enabled; invalid conditions never do.
    pub fn for_request(&self, advanced_filtering: bool) -> TableQuery {
        let mut query = self.clone();
        if advanced_filtering {
            query.filters = self.valid_filters();
        } else {
            query.filters.clear();
            query.join_operator = JoinOperator::And;
        }
        query
    }

    /// Flat parameter map. Values equal to their default are omitted.
    pub fn to_params(&self, defaults: &TableQueryDefaults) -> BTreeMap<String, String> {
        let mut params = BTreeMap::new();

        if self.page > 1 {
            params.insert(PARAM_PAGE.to_string(), self.page.to_string());
        }
        if self.per_page != defaults.per_page {
            params.insert(PARAM_PER_PAGE.to_string(), self.per_page.to_string());
        }
        if self.sort != defaults.sort {
            if let Ok(json) = serde_json::to_string(&self.sort) {
                params.insert(PARAM_SORT.to_string(), json);
            }
        }
        if !self.filters.is_empty() {
            if let Ok(json) = serde_json::to_string(&self.filters) {
                params.insert(PARAM_FILTERS.to_string(), json);
            }
        }
        if self.join_operator != JoinOperator::default() {
            params.insert(
                PARAM_JOIN_OPERATOR.to_string(),
                self.join_operator.as_str().to_string(),
            );
        }
        if !self.title.is_empty() {
            params.insert(PARAM_TITLE.to_string(), self.title.clone());
        }
        if !self.status.is_empty() {
            let joined = self
                .status
                .iter()
                .map(|s| s.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.insert(PARAM_STATUS.to_string(), joined);
        }
        if !self.priority.is_empty() {
            let joined = self
                .priority
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(",");
            params.insert(PARAM_PRIORITY.to_string(), joined);
        }

        params
    }

    /// Lenient parse: malformed values fall back to defaults.
    pub fn from_params(params: &BTreeMap<String, String>, defaults: &TableQueryDefaults) -> Self {
        let mut query = TableQuery::new(defaults);

        if let Some(page) = params.get(PARAM_PAGE).and_then(|v| v.parse::<usize>().ok()) {
            query.page = page.max(1);
        }
        if let Some(per_page) = params
            .get(PARAM_PER_PAGE)
            .and_then(|v| v.parse::<usize>().ok())
            .filter(|v| *v > 0)
        {
            query.per_page = per_page;
        }
        if let Some(sort) = params
            .get(PARAM_SORT)
            .and_then(|v| serde_json::from_str::<Vec<ColumnSort>>(v).ok())
        {
            query.sort = sort;
        }
        if let Some(filters) = params
            .get(PARAM_FILTERS)
            .and_then(|v| serde_json::from_str::<Vec<FilterCondition>>(v).ok())
        {
            query.filters = filters;
        }
        if let Some(join) = params
            .get(PARAM_JOIN_OPERATOR)
            .and_then(|v| JoinOperator::parse(v))
        {
            query.join_operator = join;
        }
        if let Some(title) = params.get(PARAM_TITLE) {
            query.title = title.clone();
        }
        if let Some(status) = params.get(PARAM_STATUS) {
            query.status = split_list(status, TaskStatus::parse);
        }
        if let Some(priority) = params.get(PARAM_PRIORITY) {
            query.priority = split_list(priority, TaskPriority::parse);
        }

        query
    }
}

fn split_list<T>(raw: &str, parse: impl Fn(&str) -> Option<T>) -> Vec<T> {
    raw.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter_map(parse)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn condition(id: &str, operator: FilterOperator, value: &str) -> FilterCondition {
        FilterCondition {
            filter_id: format!("f-{}", id),
            id: id.to_string(),
            operator,
            value: value.to_string(),
        }
    }

    #[test]
    fn test_default_query_has_no_params() {
        let defaults = TableQueryDefaults::default();
        let query = TableQuery::new(&defaults);
        assert!(query.to_params(&defaults).is_empty());
    }

    #[test]
    fn test_params_round_trip_non_defaults() {
        let defaults = TableQueryDefaults::default();
        let mut query = TableQuery::new(&defaults);
        query.page = 3;
        query.per_page = 50;
        query.sort = vec![ColumnSort::asc("title")];
        query.title = "login".to_string();
        query.status = vec![TaskStatus::Todo, TaskStatus::InProgress];
        query.priority = vec![TaskPriority::High];
        query.filters = vec![condition("estimatedHours", FilterOperator::Gt, "4")];
        query.join_operator = JoinOperator::Or;

        let params = query.to_params(&defaults);
        assert_eq!(params.get(PARAM_STATUS).map(String::as_str), Some("todo,in-progress"));
        assert_eq!(params.get(PARAM_JOIN_OPERATOR).map(String::as_str), Some("or"));

        let parsed = TableQuery::from_params(&params, &defaults);
        assert_eq!(parsed, query);
    }

    #[test]
    fn test_malformed_params_fall_back_to_defaults() {
        let defaults = TableQueryDefaults::default();
        let mut params = BTreeMap::new();
        params.insert(PARAM_PAGE.to_string(), "abc".to_string());
        params.insert(PARAM_PER_PAGE.to_string(), "0".to_string());
        params.insert(PARAM_SORT.to_string(), "{not json".to_string());
        params.insert(PARAM_STATUS.to_string(), "todo,unknown,,done".to_string());

        let parsed = TableQuery::from_params(&params, &defaults);
        assert_eq!(parsed.page, 1);
        assert_eq!(parsed.per_page, 10);
        assert_eq!(parsed.sort, defaults.sort);
        assert_eq!(parsed.status, vec![TaskStatus::Todo, TaskStatus::Done]);
    }

    #[test]
    fn test_valid_filters_drop_empty_values() {
        let defaults = TableQueryDefaults::default();
        let mut query = TableQuery::new(&defaults);
        query.filters = vec![
            condition("title", FilterOperator::ILike, "  "),
            condition("title", FilterOperator::IsEmpty, ""),
            condition("status", FilterOperator::Eq, "done"),
        ];
        let valid = query.valid_filters();
        assert_eq!(valid.len(), 2);
        assert_eq!(valid[0].operator, FilterOperator::IsEmpty);
    }

    #[test]
    fn test_request_without_filter_mode_drops_advanced_filters() {
        let defaults = TableQueryDefaults::default();
        let mut query = TableQuery::new(&defaults);
        query.filters = vec![condition("status", FilterOperator::Eq, "done")];
        query.join_operator = JoinOperator::Or;

        let request = query.for_request(false);
        assert!(request.filters.is_empty());
        assert_eq!(request.join_operator, JoinOperator::And);
        assert_eq!(query.for_request(true).filters.len(), 1);
    }

    #[test]
    fn test_operator_wire_names() {
        let json = serde_json::to_string(&FilterOperator::NotILike).unwrap();
        assert_eq!(json, "\"notILike\"");
        assert_eq!(FilterOperator::parse("isNotEmpty"), Some(FilterOperator::IsNotEmpty));
        assert_eq!(FilterOperator::parse("like"), None);
    }
}
