pub mod form;
pub mod sheets;

pub use form::{TaskForm, TaskFormValues};
pub use sheets::{CreateTaskSheet, UpdateTaskSheet};
