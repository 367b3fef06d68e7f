//! Generic form-in-sheet flow

pub mod flexible_sheet;
pub mod flow;
pub mod form;
pub mod schema;
pub mod view;

pub use flexible_sheet::{FlexibleSheet, SheetAction, SheetSide, SheetSize};
pub use form::FormHandle;
pub use schema::{FieldErrors, FormSchema};
pub use view::{form_renderer, submit_callback, FormRenderer, GenericFormSheet, SubmitCallback};
