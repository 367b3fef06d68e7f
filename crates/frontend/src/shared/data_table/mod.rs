//! Server-driven data table with row actions.
//!
//! A table owns at most one [`RowAction`]; the [`ActionRegistry`] maps its
//! variant to the dialog that handles it. Filter, sort and pagination state
//! lives in [`TableQueryState`] and is mirrored into the URL.

pub mod column;
pub mod command;
pub mod filter_list;
pub mod filter_menu;
pub mod query_state;
pub mod registry;
pub mod row_action;
pub mod selection;
pub mod sort_list;
pub mod toolbar;
pub mod view;
pub mod view_options;

pub use column::{ColumnAlign, ColumnDef, ColumnFilter, ColumnMeta, ColumnVisibility, FilterOption};
pub use filter_list::DataTableFilterList;
pub use filter_menu::DataTableFilterMenu;
pub use query_state::{use_table_query, TableQueryState};
pub use registry::{
    ActionConfig, ActionDataType, ActionRegistry, DialogCallbacks, MultiItemDialogProps,
    ResolvedDialog, SingleItemDialogProps,
};
pub use row_action::{RowAction, RowActionState};
pub use selection::{header_state, CheckboxState, RowSelection};
pub use sort_list::DataTableSortList;
pub use toolbar::DataTableToolbar;
pub use view::{ActionBarContext, ActionBarFn, AdvancedDataTable, ColumnsFn, RowIdFn};
pub use view_options::DataTableViewOptions;
