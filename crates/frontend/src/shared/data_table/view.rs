use super::column::{ColumnAlign, ColumnDef, ColumnMeta, ColumnVisibility};
use super::filter_list::DataTableFilterList;
use super::filter_menu::DataTableFilterMenu;
use super::query_state::TableQueryState;
use super::registry::{ActionRegistry, DialogCallbacks};
use super::row_action::{RowAction, RowActionState};
use super::selection::RowSelection;
use super::sort_list::DataTableSortList;
use super::toolbar::DataTableToolbar;
use super::view_options::DataTableViewOptions;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table::{SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox};
use crate::shared::filter_mode::{use_table_filter_mode, TableFilterMode};
use leptos::prelude::*;
use std::fmt::Debug;
use std::sync::Arc;
use thaw::*;

pub type ColumnsFn<T, A> = Arc<dyn Fn(RowActionState<T, A>) -> Vec<ColumnDef<T>> + Send + Sync>;
pub type RowIdFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;
pub type ActionBarFn<T> = Arc<dyn Fn(ActionBarContext<T>) -> AnyView + Send + Sync>;

/// What a floating action bar gets to work with
pub struct ActionBarContext<T: Send + Sync + 'static> {
    pub selected_rows: Signal<Vec<T>>,
    pub selection: RowSelection,
}

impl<T: Send + Sync + 'static> Clone for ActionBarContext<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for ActionBarContext<T> {}

/// Server-driven data table: toolbar for the current filter mode, sortable
/// headers, row selection, pagination, and the dialog of the active row
/// action. Must be rendered inside a `TableFilterModeProvider`.
#[component]
pub fn AdvancedDataTable<T, A>(
    /// Rows of the current page
    #[prop(into)]
    data: Signal<Vec<T>>,
    #[prop(into)]
    page_count: Signal<usize>,
    #[prop(into)]
    total_count: Signal<usize>,
    #[prop(optional, into)]
    loading: Signal<bool>,
    query: TableQueryState,
    /// Column factory; reading signals inside makes the columns reactive
    get_columns: ColumnsFn<T, A>,
    get_row_id: RowIdFn<T>,
    registry: ActionRegistry<T, A>,
    #[prop(optional)]
    action_bar: Option<ActionBarFn<T>>,
    /// Runs after any row-action dialog reported success
    #[prop(optional)]
    on_action_success: Option<Callback<()>>,
) -> impl IntoView
where
    T: Clone + Send + Sync + 'static,
    A: Copy + PartialEq + Debug + Send + Sync + 'static,
{
    let filter_mode = use_table_filter_mode();
    let row_actions = RowActionState::<T, A>::new();
    let selection = RowSelection::new();
    let visibility = RwSignal::new(ColumnVisibility::default());

    let get_columns = StoredValue::new(get_columns);
    let get_row_id = StoredValue::new(get_row_id);
    let registry = StoredValue::new(registry);
    let action_bar = StoredValue::new(action_bar);

    let columns: Signal<Vec<ColumnDef<T>>> =
        Signal::derive(move || get_columns.with_value(|f| f(row_actions)));
    let column_meta = Memo::new(move |_| {
        columns.with(|cols| cols.iter().map(ColumnDef::meta).collect::<Vec<ColumnMeta>>())
    });
    let visible_columns = Signal::derive(move || {
        let cols = columns.get();
        visibility.with(|v| cols.into_iter().filter(|c| v.is_visible(c.id)).collect::<Vec<_>>())
    });

    let page_ids = Memo::new(move |_| {
        data.with(|rows| get_row_id.with_value(|f| rows.iter().map(|r| f(r)).collect::<Vec<_>>()))
    });
    let selected_rows = Signal::derive(move || {
        selection.ids().with(|ids| {
            data.with(|rows| {
                get_row_id.with_value(|f| {
                    rows.iter()
                        .filter(|r| ids.contains(&f(r)))
                        .cloned()
                        .collect::<Vec<_>>()
                })
            })
        })
    });
    let has_selection = Memo::new(move |_| selected_rows.with(|rows| !rows.is_empty()));

    // Selection never outlives the rows it points at
    Effect::new(move |_| {
        page_ids.with(|ids| selection.retain(ids));
    });

    let sort = Signal::derive(move || query.query().with(|q| q.sort.clone()));
    let on_sort = Callback::new(move |field: String| query.toggle_sort(&field));
    let colspan = move || (visible_columns.with(Vec::len) + 1).to_string();

    // Dialog wiring lives on the table so it outlasts the dialogs it mounts
    let callbacks = DialogCallbacks::for_table(row_actions, selection, registry, on_action_success);
    let dialog_key = Memo::new(move |_| {
        row_actions.current().with(|current| current.as_ref().map(RowAction::key))
    });

    view! {
        <div class="data-table">
            <div class="data-table__toolbar">
                <div class="data-table__toolbar-start">
                    {move || match filter_mode.current_mode() {
                        None => view! {
                            <DataTableToolbar query=query columns=column_meta />
                        }.into_any(),
                        Some(TableFilterMode::Expert) => view! {
                            <DataTableFilterList query=query columns=column_meta />
                        }.into_any(),
                        Some(TableFilterMode::Command) => view! {
                            <DataTableFilterMenu query=query columns=column_meta />
                        }.into_any(),
                    }}
                </div>
                <div class="data-table__toolbar-end">
                    <DataTableSortList query=query columns=column_meta />
                    <DataTableViewOptions columns=column_meta visibility=visibility />
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCheckbox
                            page_ids=page_ids
                            selected=selection.ids()
                            on_change=Callback::new(move |checked: bool| {
                                page_ids.with_untracked(|ids| selection.set_page(ids, checked));
                            })
                        />
                        {move || visible_columns.get().into_iter().map(|column| {
                            if column.sortable {
                                view! {
                                    <SortableHeaderCell
                                        label=column.label
                                        field=column.id
                                        sort=sort
                                        on_sort=on_sort
                                        align=column.align
                                    />
                                }.into_any()
                            } else {
                                let style = column.width.map(|w| format!("width: {};", w));
                                view! {
                                    <TableHeaderCell attr:style=style>{column.label}</TableHeaderCell>
                                }.into_any()
                            }
                        }).collect_view()}
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {move || {
                        if loading.get() && data.with(Vec::is_empty) {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan attr:style="padding: 40px; text-align: center;">
                                        <Flex justify=FlexJustify::Center align=FlexAlign::Center gap=FlexGap::Small>
                                            <Spinner />
                                            "Loading..."
                                        </Flex>
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        let rows = data.get();
                        if rows.is_empty() {
                            return view! {
                                <TableRow>
                                    <TableCell attr:colspan=colspan attr:style="padding: 40px; text-align: center; color: var(--colorNeutralForeground3);">
                                        "No results."
                                    </TableCell>
                                </TableRow>
                            }.into_any();
                        }
                        let cols = visible_columns.get();
                        rows.into_iter().map(|row| {
                            let id = get_row_id.with_value(|f| f(&row));
                            let id_for_class = id.clone();
                            let cols = cols.clone();
                            view! {
                                <TableRow attr:class=move || {
                                    if selection.is_selected(&id_for_class) {
                                        "data-table__row data-table__row--selected"
                                    } else {
                                        "data-table__row"
                                    }
                                }>
                                    <TableCellCheckbox
                                        item_id=id
                                        selected=selection.ids()
                                        on_change=Callback::new(move |(id, checked): (String, bool)| {
                                            selection.toggle(id, checked)
                                        })
                                    />
                                    {cols.into_iter().map(|column| {
                                        let row = row.clone();
                                        let style = match column.align {
                                            ColumnAlign::Right => "text-align: right;",
                                            ColumnAlign::Left => "",
                                        };
                                        view! {
                                            <TableCell attr:style=style>{(column.cell)(&row)}</TableCell>
                                        }
                                    }).collect_view()}
                                </TableRow>
                            }
                        }).collect_view().into_any()
                    }}
                </TableBody>
            </Table>

            <PaginationControls
                current_page=Signal::derive(move || query.query().with(|q| q.page))
                total_pages=page_count
                total_count=total_count
                page_size=Signal::derive(move || query.query().with(|q| q.per_page))
                on_page_change=Callback::new(move |page: usize| query.set_page(page))
                on_page_size_change=Callback::new(move |size: usize| query.set_per_page(size))
                selected_count=Signal::derive(move || selected_rows.with(Vec::len))
            />

            {move || {
                if !has_selection.get() {
                    return None;
                }
                action_bar.with_value(|bar| {
                    bar.as_ref().map(|render| render(ActionBarContext { selected_rows, selection }))
                })
            }}

            {move || {
                dialog_key.track();
                let current = row_actions.get_untracked();
                registry
                    .with_value(|r| r.resolve(current.as_ref()))
                    .map(|dialog| dialog.render(callbacks))
            }}
        </div>
    }
}
