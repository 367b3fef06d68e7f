use super::column::{ColumnFilter, ColumnMeta, FilterOption};
use super::query_state::TableQueryState;
use crate::shared::icons::icon;
use crate::shared::list_utils::SearchInput;
use leptos::prelude::*;
use thaw::*;

/// Dropdown of checkboxes for one faceted column
#[component]
pub fn FacetedFilter(
    #[prop(into)]
    title: String,
    options: Vec<FilterOption>,
    #[prop(into)]
    selected: Signal<Vec<String>>,
    on_change: Callback<Vec<String>>,
) -> impl IntoView {
    let toggle = move |value: String, checked: bool| {
        let mut next = selected.get_untracked();
        if checked {
            if !next.contains(&value) {
                next.push(value);
            }
        } else {
            next.retain(|v| *v != value);
        }
        on_change.run(next);
    };

    view! {
        <details class="faceted-filter">
            <summary class="faceted-filter__trigger">
                {icon("plus")}
                <span>{title}</span>
                {move || {
                    let count = selected.with(Vec::len);
                    (count > 0).then(|| view! {
                        <span class="faceted-filter__count">{format!("{} selected", count)}</span>
                    })
                }}
            </summary>
            <div class="faceted-filter__panel">
                {options.into_iter().map(|option| {
                    let value = option.value.clone();
                    let value_for_checked = option.value.clone();
                    view! {
                        <label class="faceted-filter__option">
                            <input
                                type="checkbox"
                                prop:checked=move || selected.with(|s| s.contains(&value_for_checked))
                                on:change=move |ev| toggle(value.clone(), event_target_checked(&ev))
                            />
                            <span class="faceted-filter__label">{option.label}</span>
                            {option.count.map(|count| view! {
                                <span class="faceted-filter__facet">{count}</span>
                            })}
                        </label>
                    }
                }).collect_view()}
                {move || selected.with(|s| !s.is_empty()).then(|| view! {
                    <button
                        class="faceted-filter__clear"
                        on:click=move |_| on_change.run(Vec::new())
                    >
                        "Clear filters"
                    </button>
                })}
            </div>
        </details>
    }
}

/// Toolbar of the simple filter mode: title search, faceted selects, reset
#[component]
pub fn DataTableToolbar(
    query: TableQueryState,
    #[prop(into)]
    columns: Signal<Vec<ColumnMeta>>,
) -> impl IntoView {
    let title = Signal::derive(move || query.query().with(|q| q.title.clone()));
    let is_filtered = Signal::derive(move || query.query().with(|q| q.has_simple_filters()));
    // Facet count updates must not remount the search box
    let search_placeholder = Memo::new(move |_| {
        columns.with(|cols| {
            cols.iter().find_map(|c| match &c.filter {
                Some(ColumnFilter::Text { placeholder }) => Some(placeholder.clone()),
                _ => None,
            })
        })
    });

    view! {
        <div class="data-table-toolbar">
            {move || search_placeholder.get().map(|placeholder| view! {
                <SearchInput
                    value=title
                    on_change=Callback::new(move |value: String| query.set_title(value))
                    placeholder=placeholder
                />
            })}
            {move || columns.with(|cols| {
                cols.iter()
                    .filter_map(|c| match &c.filter {
                        Some(ColumnFilter::MultiSelect { options }) => {
                            Some((c.id, c.label.clone(), options.clone()))
                        }
                        _ => None,
                    })
                    .map(|(id, label, options)| view! {
                        <FacetedFilter
                            title=label
                            options=options
                            selected=Signal::derive(move || query.multi_filter(id))
                            on_change=Callback::new(move |values: Vec<String>| {
                                query.set_multi_filter(id, values)
                            })
                        />
                    })
                    .collect_view()
            })}
            {move || is_filtered.get().then(|| view! {
                <Button
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| query.reset_filters()
                    attr:aria-label="Reset filters"
                >
                    "Reset"
                    {icon("x")}
                </Button>
            })}
        </div>
    }
}
