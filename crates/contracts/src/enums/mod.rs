pub mod task_fields;

pub use task_fields::{TaskLabel, TaskPriority, TaskStatus};
