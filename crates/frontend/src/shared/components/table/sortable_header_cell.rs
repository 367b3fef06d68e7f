//! Sortable column header
//!
//! ```ignore
//! <SortableHeaderCell
//!     label="Title"
//!     field="title"
//!     sort=Signal::derive(move || query.query().with(|q| q.sort.clone()))
//!     on_sort=Callback::new(move |field: String| query.toggle_sort(&field))
//! />
//! ```

use crate::shared::data_table::ColumnAlign;
use crate::shared::list_utils::{get_sort_class, get_sort_indicator};
use contracts::shared::table_query::ColumnSort;
use leptos::prelude::*;
use thaw::*;

/// Header cell that shows the sort direction (▲▼) and reports clicks
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column id sent to the task store
    #[prop(into)]
    field: String,

    /// Current sort of the table
    #[prop(into)]
    sort: Signal<Vec<ColumnSort>>,

    on_sort: Callback<String>,

    #[prop(optional)]
    align: ColumnAlign,
) -> impl IntoView {
    let field_for_click = field.clone();
    let field_for_indicator = field.clone();
    let field_for_class = field.clone();

    let header_style = match align {
        ColumnAlign::Right => "cursor: pointer; justify-content: flex-end; padding-right: 12px;",
        ColumnAlign::Left => "cursor: pointer; padding-right: 12px;",
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                role="button"
                on:click=move |_| on_sort.run(field_for_click.clone())
            >
                {label}
                <span class=move || sort.with(|s| get_sort_class(s, &field_for_class))>
                    {move || sort.with(|s| get_sort_indicator(s, &field_for_indicator))}
                </span>
            </div>
        </TableHeaderCell>
    }
}
