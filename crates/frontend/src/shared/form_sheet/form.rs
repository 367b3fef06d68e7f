use super::schema::{FieldErrors, FormSchema};
use leptos::prelude::*;

/// Live form state handed to the field renderer
pub struct FormHandle<T: Send + Sync + 'static> {
    pub values: RwSignal<T>,
    pub errors: RwSignal<FieldErrors>,
}

impl<T: Send + Sync + 'static> Clone for FormHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for FormHandle<T> {}

impl<T: FormSchema> FormHandle<T> {
    pub fn new(initial: T) -> Self {
        Self {
            values: RwSignal::new(initial),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Replace values and drop all errors
    pub fn reset(&self, values: T) {
        self.values.set(values);
        self.errors.set(FieldErrors::new());
    }

    /// Change one field; its stale error is cleared
    pub fn update_field(&self, field: &str, f: impl FnOnce(&mut T)) {
        self.values.update(f);
        if self.errors.with_untracked(|e| e.get(field).is_some()) {
            self.errors.update(|e| e.remove(field));
        }
    }

    pub fn set_error(&self, field: &str, message: impl Into<String>) {
        let message = message.into();
        self.errors.update(|e| e.insert(field, message));
    }

    pub fn error(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).map(str::to_string)))
    }
}
