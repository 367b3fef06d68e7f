use leptos::prelude::*;
use std::collections::HashSet;

/// Header checkbox state for the rows of one page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckboxState {
    Unchecked,
    Checked,
    Indeterminate,
}

pub fn header_state(page_ids: &[String], selected: &HashSet<String>) -> CheckboxState {
    if page_ids.is_empty() {
        return CheckboxState::Unchecked;
    }
    let selected_count = page_ids.iter().filter(|id| selected.contains(*id)).count();
    if selected_count == 0 {
        CheckboxState::Unchecked
    } else if selected_count == page_ids.len() {
        CheckboxState::Checked
    } else {
        CheckboxState::Indeterminate
    }
}

/// Selected row ids of one table
#[derive(Clone, Copy)]
pub struct RowSelection {
    selected: RwSignal<HashSet<String>>,
}

impl RowSelection {
    pub fn new() -> Self {
        Self {
            selected: RwSignal::new(HashSet::new()),
        }
    }

    pub fn ids(&self) -> Signal<HashSet<String>> {
        self.selected.into()
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.with(|s| s.contains(id))
    }

    pub fn count(&self) -> usize {
        self.selected.with(HashSet::len)
    }

    pub fn toggle(&self, id: String, checked: bool) {
        self.selected.update(|s| {
            if checked {
                s.insert(id);
            } else {
                s.remove(&id);
            }
        });
    }

    pub fn deselect(&self, id: &str) {
        if self.selected.with_untracked(|s| s.contains(id)) {
            self.selected.update(|s| {
                s.remove(id);
            });
        }
    }

    /// Select or deselect every id of the current page
    pub fn set_page(&self, page_ids: &[String], checked: bool) {
        self.selected.update(|s| {
            for id in page_ids {
                if checked {
                    s.insert(id.clone());
                } else {
                    s.remove(id);
                }
            }
        });
    }

    pub fn clear(&self) {
        if self.selected.with_untracked(|s| !s.is_empty()) {
            self.selected.set(HashSet::new());
        }
    }

    /// Drop ids that are no longer on the page
    pub fn retain(&self, page_ids: &[String]) {
        let stale = self
            .selected
            .with_untracked(|s| s.iter().any(|id| !page_ids.contains(id)));
        if stale {
            self.selected.update(|s| s.retain(|id| page_ids.contains(id)));
        }
    }
}

impl Default for RowSelection {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_header_state() {
        let page = ids(&["a", "b"]);
        let mut selected = HashSet::new();
        assert_eq!(header_state(&page, &selected), CheckboxState::Unchecked);

        selected.insert("a".to_string());
        assert_eq!(header_state(&page, &selected), CheckboxState::Indeterminate);

        selected.insert("b".to_string());
        assert_eq!(header_state(&page, &selected), CheckboxState::Checked);

        assert_eq!(header_state(&[], &selected), CheckboxState::Unchecked);
    }

    #[test]
    fn test_ids_from_other_pages_do_not_count() {
        let selected: HashSet<String> = ids(&["x", "y"]).into_iter().collect();
        assert_eq!(
            header_state(&ids(&["a", "b"]), &selected),
            CheckboxState::Unchecked
        );
    }
}
