pub mod pagination_controls;
pub mod table;
pub mod ui;

pub use pagination_controls::PaginationControls;
