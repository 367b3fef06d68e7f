pub mod action_dialog;
pub mod api_utils;
pub mod components;
pub mod data_table;
pub mod errors;
pub mod filter_mode;
pub mod form_sheet;
pub mod icons;
pub mod list_utils;
pub mod media_query;
pub mod notify;
pub mod query_params;
