//! Filter-mode selection shared by a table view and persisted in the URL

pub mod config;
pub mod context;
pub mod state;
pub mod view;

pub use config::{FilterModeOption, TableFilterMode};
pub use context::{provide_table_filter_mode, use_table_filter_mode, TableFilterModeContext, FILTER_MODE_PARAM};
pub use view::{TableFilterModeProvider, TableFilterModeToggle};
