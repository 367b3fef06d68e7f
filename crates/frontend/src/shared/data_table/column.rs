use contracts::shared::table_query::FilterOperator;
use leptos::prelude::*;
use std::collections::HashSet;
use std::sync::Arc;

pub type CellFn<T> = Arc<dyn Fn(&T) -> AnyView + Send + Sync>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColumnAlign {
    #[default]
    Left,
    Right,
}

/// Option of a faceted filter; `count` comes from the task store facets
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
    pub count: Option<usize>,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

/// How a column can be filtered
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnFilter {
    Text { placeholder: String },
    MultiSelect { options: Vec<FilterOption> },
    Range { min: f64, max: f64, unit: Option<String> },
    Date,
}

impl ColumnFilter {
    /// Operators offered in the expert filter list
    pub fn operators(&self) -> &'static [FilterOperator] {
        use FilterOperator::*;
        match self {
            Self::Text { .. } => &[ILike, NotILike, Eq, Ne, IsEmpty, IsNotEmpty],
            Self::MultiSelect { .. } => &[Eq, Ne, IsEmpty, IsNotEmpty],
            Self::Range { .. } | Self::Date => &[Eq, Ne, Lt, Lte, Gt, Gte, IsEmpty, IsNotEmpty],
        }
    }

    pub fn default_operator(&self) -> FilterOperator {
        match self {
            Self::Text { .. } => FilterOperator::ILike,
            _ => FilterOperator::Eq,
        }
    }

    /// Option value matching `input` by value or label, ignoring case
    pub fn match_option(&self, input: &str) -> Option<String> {
        let Self::MultiSelect { options } = self else {
            return None;
        };
        let input = input.trim();
        options
            .iter()
            .find(|o| o.value.eq_ignore_ascii_case(input) || o.label.eq_ignore_ascii_case(input))
            .map(|o| o.value.clone())
    }
}

/// Column description used by toolbars, without the cell renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnMeta {
    pub id: &'static str,
    pub label: String,
    pub sortable: bool,
    pub hideable: bool,
    pub filter: Option<ColumnFilter>,
}

/// Column of a data table
pub struct ColumnDef<T> {
    pub id: &'static str,
    pub label: String,
    pub sortable: bool,
    pub hideable: bool,
    pub align: ColumnAlign,
    pub width: Option<&'static str>,
    pub filter: Option<ColumnFilter>,
    pub cell: CellFn<T>,
}

impl<T> Clone for ColumnDef<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id,
            label: self.label.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            align: self.align,
            width: self.width,
            filter: self.filter.clone(),
            cell: Arc::clone(&self.cell),
        }
    }
}

impl<T> ColumnDef<T> {
    pub fn new<F>(id: &'static str, label: impl Into<String>, cell: F) -> Self
    where
        F: Fn(&T) -> AnyView + Send + Sync + 'static,
    {
        Self {
            id,
            label: label.into(),
            sortable: false,
            hideable: true,
            align: ColumnAlign::Left,
            width: None,
            filter: None,
            cell: Arc::new(cell),
        }
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn fixed(mut self) -> Self {
        self.hideable = false;
        self
    }

    pub fn align_right(mut self) -> Self {
        self.align = ColumnAlign::Right;
        self
    }

    pub fn width(mut self, width: &'static str) -> Self {
        self.width = Some(width);
        self
    }

    pub fn filter(mut self, filter: ColumnFilter) -> Self {
        self.filter = Some(filter);
        self
    }

    pub fn meta(&self) -> ColumnMeta {
        ColumnMeta {
            id: self.id,
            label: self.label.clone(),
            sortable: self.sortable,
            hideable: self.hideable,
            filter: self.filter.clone(),
        }
    }
}

/// Hidden column ids
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnVisibility {
    hidden: HashSet<String>,
}

impl ColumnVisibility {
    pub fn is_visible(&self, id: &str) -> bool {
        !self.hidden.contains(id)
    }

    pub fn toggle(&mut self, id: &str) {
        if !self.hidden.remove(id) {
            self.hidden.insert(id.to_string());
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    pub fn hide_all<'a>(&mut self, hideable: impl IntoIterator<Item = &'a str>) {
        self.hidden.extend(hideable.into_iter().map(str::to_string));
    }

    /// `(visible, total)` over the given column ids
    pub fn counts<'a>(&self, ids: impl IntoIterator<Item = &'a str>) -> (usize, usize) {
        ids.into_iter().fold((0, 0), |(visible, total), id| {
            (visible + usize::from(self.is_visible(id)), total + 1)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visibility_toggle_and_counts() {
        let ids = ["code", "title", "status"];
        let mut visibility = ColumnVisibility::default();
        assert_eq!(visibility.counts(ids), (3, 3));

        visibility.toggle("status");
        assert!(!visibility.is_visible("status"));
        assert_eq!(visibility.counts(ids), (2, 3));

        visibility.toggle("status");
        assert!(visibility.is_visible("status"));

        visibility.hide_all(["title", "status"]);
        assert_eq!(visibility.counts(ids), (1, 3));

        visibility.show_all();
        assert_eq!(visibility.counts(ids), (3, 3));
    }

    #[test]
    fn test_match_option_by_value_or_label() {
        let filter = ColumnFilter::MultiSelect {
            options: vec![
                FilterOption::new("in-progress", "In Progress"),
                FilterOption::new("done", "Done"),
            ],
        };
        assert_eq!(filter.match_option("in progress"), Some("in-progress".to_string()));
        assert_eq!(filter.match_option("DONE"), Some("done".to_string()));
        assert_eq!(filter.match_option("later"), None);
        assert_eq!(
            ColumnFilter::Date.match_option("done"),
            None
        );
    }

    #[test]
    fn test_text_columns_offer_like_operators() {
        let text = ColumnFilter::Text { placeholder: String::new() };
        assert!(text.operators().contains(&FilterOperator::ILike));
        assert!(!text.operators().contains(&FilterOperator::Gt));
        assert_eq!(ColumnFilter::Date.default_operator(), FilterOperator::Eq);
    }
}
