//! Generic confirmation flow for actions on one or more records

pub mod flow;
pub mod kind;
pub mod messages;
pub mod view;

pub use kind::{ActionKind, ActionPreset, ActionVariant};
pub use messages::{ActionMessages, ActionTarget, CustomMessages};
pub use view::{action_callback, ActionCallback, GenericActionDialog};
