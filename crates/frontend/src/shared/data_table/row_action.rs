use leptos::prelude::*;

/// Action requested on one table row
#[derive(Debug, Clone, PartialEq)]
pub struct RowAction<T, A> {
    /// Row the action was triggered from, if it still resolves
    pub row_id: Option<String>,
    pub original: Option<T>,
    pub variant: A,
}

impl<T, A: Copy> RowAction<T, A> {
    pub fn key(&self) -> (A, Option<String>) {
        (self.variant, self.row_id.clone())
    }
}

/// Owner of the single active row action of a table. Setting a new action
/// replaces the previous one, so at most one dialog is ever shown.
pub struct RowActionState<T: Send + Sync + 'static, A: Send + Sync + 'static> {
    current: RwSignal<Option<RowAction<T, A>>>,
    last: StoredValue<Option<RowAction<T, A>>>,
}

impl<T: Send + Sync + 'static, A: Send + Sync + 'static> Clone for RowActionState<T, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static, A: Send + Sync + 'static> Copy for RowActionState<T, A> {}

impl<T, A> RowActionState<T, A>
where
    T: Clone + Send + Sync + 'static,
    A: Copy + Send + Sync + 'static,
{
    pub fn new() -> Self {
        Self {
            current: RwSignal::new(None),
            last: StoredValue::new(None),
        }
    }

    pub fn set(&self, row_id: impl Into<String>, original: T, variant: A) {
        let action = RowAction {
            row_id: Some(row_id.into()),
            original: Some(original),
            variant,
        };
        self.last.set_value(Some(action.clone()));
        self.current.set(Some(action));
    }

    pub fn clear(&self) {
        if self.current.with_untracked(Option::is_some) {
            self.current.set(None);
        }
    }

    pub fn current(&self) -> Signal<Option<RowAction<T, A>>> {
        self.current.into()
    }

    pub fn get_untracked(&self) -> Option<RowAction<T, A>> {
        self.current.get_untracked()
    }

    /// Most recently set action, even after it was cleared
    pub fn last(&self) -> Option<RowAction<T, A>> {
        self.last.get_value()
    }
}

impl<T, A> Default for RowActionState<T, A>
where
    T: Clone + Send + Sync + 'static,
    A: Copy + Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
