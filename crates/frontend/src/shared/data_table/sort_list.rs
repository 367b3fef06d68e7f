use super::column::ColumnMeta;
use super::query_state::TableQueryState;
use crate::shared::icons::icon;
use contracts::shared::table_query::ColumnSort;
use leptos::prelude::*;
use thaw::*;

/// Append the first sortable column that is not sorted yet
pub fn add_sort(current: &[ColumnSort], columns: &[ColumnMeta]) -> Option<Vec<ColumnSort>> {
    let next = columns
        .iter()
        .find(|c| c.sortable && current.iter().all(|s| s.id != c.id))?;
    let mut sort = current.to_vec();
    sort.push(ColumnSort::asc(next.id));
    Some(sort)
}

/// Replace the column of the sort at `index`. A column already sorted
/// elsewhere is left alone.
pub fn change_sort_column(current: &[ColumnSort], index: usize, id: &str) -> Vec<ColumnSort> {
    let mut sort = current.to_vec();
    let taken = sort.iter().enumerate().any(|(i, s)| i != index && s.id == id);
    if !taken {
        if let Some(entry) = sort.get_mut(index) {
            entry.id = id.to_string();
        }
    }
    sort
}

/// Editable list of sort entries
#[component]
pub fn DataTableSortList(
    query: TableQueryState,
    #[prop(into)]
    columns: Signal<Vec<ColumnMeta>>,
) -> impl IntoView {
    let sort = Signal::derive(move || query.query().with(|q| q.sort.clone()));
    let sortable = Memo::new(move |_| {
        columns.with(|cols| {
            cols.iter()
                .filter(|c| c.sortable)
                .map(|c| (c.id.to_string(), c.label.clone()))
                .collect::<Vec<_>>()
        })
    });

    let on_add = move |_| {
        let next = columns.with_untracked(|cols| sort.with_untracked(|s| add_sort(s, cols)));
        if let Some(next) = next {
            query.set_sort(next);
        }
    };

    view! {
        <details class="sort-list">
            <summary class="sort-list__trigger">
                {icon("arrow-up-down")}
                <span>"Sort"</span>
                {move || {
                    let count = sort.with(Vec::len);
                    (count > 0).then(|| view! { <span class="sort-list__count">{count}</span> })
                }}
            </summary>
            <div class="sort-list__panel">
                {move || {
                    let entries = sort.get();
                    if entries.is_empty() {
                        return view! {
                            <p class="sort-list__empty">"No sorting applied"</p>
                        }.into_any();
                    }
                    entries.into_iter().enumerate().map(|(index, entry)| {
                        let id = entry.id.clone();
                        view! {
                            <div class="sort-list__row">
                                <select
                                    prop:value=entry.id.clone()
                                    on:change=move |ev| {
                                        let column = event_target_value(&ev);
                                        let next = sort.with_untracked(|s| change_sort_column(s, index, &column));
                                        query.set_sort(next);
                                    }
                                >
                                    {sortable.get_untracked().into_iter().map(|(value, label)| {
                                        let selected = value == entry.id;
                                        view! { <option value=value selected=selected>{label}</option> }
                                    }).collect_view()}
                                </select>
                                <select
                                    prop:value=if entry.desc { "desc" } else { "asc" }
                                    on:change=move |ev| {
                                        let desc = event_target_value(&ev) == "desc";
                                        let mut next = sort.get_untracked();
                                        if let Some(s) = next.get_mut(index) {
                                            s.desc = desc;
                                        }
                                        query.set_sort(next);
                                    }
                                >
                                    <option value="asc" selected=!entry.desc>"Asc"</option>
                                    <option value="desc" selected=entry.desc>"Desc"</option>
                                </select>
                                <button
                                    class="sort-list__remove"
                                    title="Remove sort"
                                    on:click=move |_| {
                                        let mut next = sort.get_untracked();
                                        next.retain(|s| s.id != id);
                                        query.set_sort(next);
                                    }
                                >
                                    {icon("x")}
                                </button>
                            </div>
                        }
                    }).collect_view().into_any()
                }}
                <Space>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=on_add
                        disabled=Signal::derive(move || {
                            sortable.with(Vec::len) <= sort.with(Vec::len)
                        })
                    >
                        "Add sort"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| query.set_sort(query.defaults().sort)
                    >
                        "Reset sorting"
                    </Button>
                </Space>
            </div>
        </details>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meta(id: &'static str, sortable: bool) -> ColumnMeta {
        ColumnMeta {
            id,
            label: id.to_string(),
            sortable,
            hideable: true,
            filter: None,
        }
    }

    #[test]
    fn test_add_sort_picks_next_free_column() {
        let columns = vec![meta("select", false), meta("title", true), meta("status", true)];
        let sort = add_sort(&[ColumnSort::desc("title")], &columns).unwrap();
        assert_eq!(sort, vec![ColumnSort::desc("title"), ColumnSort::asc("status")]);
        assert!(add_sort(&sort, &columns).is_none());
    }

    #[test]
    fn test_change_column_keeps_entries_unique() {
        let sort = vec![ColumnSort::asc("title"), ColumnSort::desc("status")];
        assert_eq!(change_sort_column(&sort, 0, "status"), sort);
        assert_eq!(
            change_sort_column(&sort, 0, "priority"),
            vec![ColumnSort::asc("priority"), ColumnSort::desc("status")]
        );
    }
}
