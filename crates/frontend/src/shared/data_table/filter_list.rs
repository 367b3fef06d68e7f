use super::column::{ColumnFilter, ColumnMeta};
use super::query_state::TableQueryState;
use crate::shared::icons::icon;
use contracts::shared::table_query::{FilterCondition, FilterOperator, JoinOperator};
use leptos::prelude::*;
use thaw::*;

/// New empty condition on the first filterable column
pub fn new_condition(columns: &[ColumnMeta]) -> Option<FilterCondition> {
    let (column, filter) = columns
        .iter()
        .find_map(|c| c.filter.as_ref().map(|f| (c, f)))?;
    Some(FilterCondition {
        filter_id: uuid::Uuid::new_v4().to_string(),
        id: column.id.to_string(),
        operator: filter.default_operator(),
        value: String::new(),
    })
}

/// Point `condition` at another column. The operator falls back to the
/// column default when the new column does not offer it.
pub fn retarget(condition: &mut FilterCondition, column: &ColumnMeta) {
    let Some(filter) = column.filter.as_ref() else {
        return;
    };
    if condition.id == column.id {
        return;
    }
    condition.id = column.id.to_string();
    condition.value.clear();
    if !filter.operators().contains(&condition.operator) {
        condition.operator = filter.default_operator();
    }
}

/// Join operator selector shared by the expert and command modes
#[component]
pub fn JoinOperatorSelect(query: TableQueryState) -> impl IntoView {
    view! {
        <select
            class="filter-list__join"
            aria-label="Join operator"
            prop:value=move || query.query().with(|q| q.join_operator.as_str().to_string())
            on:change=move |ev| {
                if let Some(join) = JoinOperator::parse(&event_target_value(&ev)) {
                    query.set_join_operator(join);
                }
            }
        >
            <option value="and">"and"</option>
            <option value="or">"or"</option>
        </select>
    }
}

fn value_editor(
    query: TableQueryState,
    condition: &FilterCondition,
    filter: &ColumnFilter,
) -> AnyView {
    if condition.operator.is_value_less() {
        return view! { <span class="filter-list__value filter-list__value--none"></span> }.into_any();
    }
    let filter_id = condition.filter_id.clone();
    let commit = move |value: String| {
        query.update_filter(&filter_id, |c| c.value = value);
    };
    let value = condition.value.clone();

    match filter {
        ColumnFilter::MultiSelect { options } => view! {
            <select
                class="filter-list__value"
                prop:value=value.clone()
                on:change=move |ev| commit(event_target_value(&ev))
            >
                <option value="" selected=value.is_empty()>"Select..."</option>
                {options.iter().map(|o| {
                    let selected = o.value == value;
                    view! { <option value=o.value.clone() selected=selected>{o.label.clone()}</option> }
                }).collect_view()}
            </select>
        }.into_any(),
        ColumnFilter::Range { min, max, .. } => view! {
            <input
                class="filter-list__value"
                type="number"
                min=min.to_string()
                max=max.to_string()
                placeholder="Enter a number..."
                prop:value=value
                on:change=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        ColumnFilter::Date => view! {
            <input
                class="filter-list__value"
                type="date"
                prop:value=value
                on:change=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
        ColumnFilter::Text { placeholder } => view! {
            <input
                class="filter-list__value"
                type="text"
                placeholder=placeholder.clone()
                prop:value=value
                on:change=move |ev| commit(event_target_value(&ev))
            />
        }.into_any(),
    }
}

/// Condition rows of the expert filter mode
#[component]
pub fn DataTableFilterList(
    query: TableQueryState,
    #[prop(into)]
    columns: Signal<Vec<ColumnMeta>>,
) -> impl IntoView {
    let filters = Signal::derive(move || query.query().with(|q| q.filters.clone()));

    let on_add = move |_| {
        if let Some(condition) = columns.with_untracked(|cols| new_condition(cols)) {
            query.add_filter(condition);
        }
    };

    let row = move |index: usize, condition: FilterCondition, cols: &[ColumnMeta]| {
        let filterable: Vec<ColumnMeta> = cols.iter().filter(|c| c.filter.is_some()).cloned().collect();
        let Some(filter) = filterable
            .iter()
            .find(|c| c.id == condition.id)
            .and_then(|c| c.filter.clone())
        else {
            log::warn!("filter on unknown column {}", condition.id);
            return ().into_any();
        };

        let filter_id = condition.filter_id.clone();
        let id_for_column = filter_id.clone();
        let id_for_operator = filter_id.clone();
        let columns_for_change = filterable.clone();
        let prefix = match index {
            0 => view! { <span class="filter-list__join-label">"Where"</span> }.into_any(),
            1 => view! { <JoinOperatorSelect query=query /> }.into_any(),
            _ => view! {
                <span class="filter-list__join-label">
                    {move || query.query().with(|q| q.join_operator.as_str().to_string())}
                </span>
            }.into_any(),
        };

        view! {
            <div class="filter-list__row">
                {prefix}
                <select
                    class="filter-list__column"
                    prop:value=condition.id.clone()
                    on:change=move |ev| {
                        let id = event_target_value(&ev);
                        if let Some(column) = columns_for_change.iter().find(|c| c.id == id) {
                            query.update_filter(&id_for_column, |c| retarget(c, column));
                        }
                    }
                >
                    {filterable.iter().map(|c| {
                        let selected = c.id == condition.id;
                        view! { <option value=c.id selected=selected>{c.label.clone()}</option> }
                    }).collect_view()}
                </select>
                <select
                    class="filter-list__operator"
                    prop:value=condition.operator.as_str()
                    on:change=move |ev| {
                        if let Some(op) = FilterOperator::parse(&event_target_value(&ev)) {
                            query.update_filter(&id_for_operator, |c| {
                                c.operator = op;
                                if op.is_value_less() {
                                    c.value.clear();
                                }
                            });
                        }
                    }
                >
                    {filter.operators().iter().map(|op| {
                        let selected = *op == condition.operator;
                        view! { <option value=op.as_str() selected=selected>{op.label()}</option> }
                    }).collect_view()}
                </select>
                {value_editor(query, &condition, &filter)}
                <button
                    class="filter-list__remove"
                    title="Remove filter"
                    on:click=move |_| query.remove_filter(&filter_id)
                >
                    {icon("trash")}
                </button>
            </div>
        }.into_any()
    };

    view! {
        <div class="filter-list">
            <div class="filter-list__header">
                {icon("filter")}
                <span>"Filters"</span>
                {move || {
                    let count = filters.with(Vec::len);
                    (count > 0).then(|| view! { <span class="filter-list__count">{count}</span> })
                }}
            </div>
            {move || {
                let current = filters.get();
                if current.is_empty() {
                    return view! {
                        <p class="filter-list__empty">
                            "No filters applied. Add filters to refine your rows."
                        </p>
                    }.into_any();
                }
                columns.with(|cols| {
                    current
                        .into_iter()
                        .enumerate()
                        .map(|(index, condition)| row(index, condition, cols))
                        .collect_view()
                        .into_any()
                })
            }}
            <Space>
                <Button appearance=ButtonAppearance::Secondary on_click=on_add>
                    {icon("plus")}
                    "Add filter"
                </Button>
                <Button
                    appearance=ButtonAppearance::Subtle
                    disabled=Signal::derive(move || filters.with(Vec::is_empty))
                    on_click=move |_| query.clear_filters()
                >
                    "Reset filters"
                </Button>
            </Space>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::data_table::column::FilterOption;

    fn columns() -> Vec<ColumnMeta> {
        vec![
            ColumnMeta {
                id: "code",
                label: "Task".into(),
                sortable: false,
                hideable: false,
                filter: None,
            },
            ColumnMeta {
                id: "title",
                label: "Title".into(),
                sortable: true,
                hideable: false,
                filter: Some(ColumnFilter::Text { placeholder: String::new() }),
            },
            ColumnMeta {
                id: "status",
                label: "Status".into(),
                sortable: true,
                hideable: true,
                filter: Some(ColumnFilter::MultiSelect {
                    options: vec![FilterOption::new("done", "Done")],
                }),
            },
        ]
    }

    #[test]
    fn test_new_condition_uses_first_filterable_column() {
        let condition = new_condition(&columns()).unwrap();
        assert_eq!(condition.id, "title");
        assert_eq!(condition.operator, FilterOperator::ILike);
        assert!(condition.value.is_empty());
        assert!(!condition.filter_id.is_empty());
        assert!(new_condition(&columns()[..1]).is_none());
    }

    #[test]
    fn test_retarget_resets_value_and_unsupported_operator() {
        let columns = columns();
        let mut condition = new_condition(&columns).unwrap();
        condition.value = "fix".into();
        retarget(&mut condition, &columns[2]);
        assert_eq!(condition.id, "status");
        assert_eq!(condition.operator, FilterOperator::Eq);
        assert!(condition.value.is_empty());

        condition.operator = FilterOperator::IsEmpty;
        retarget(&mut condition, &columns[1]);
        assert_eq!(condition.operator, FilterOperator::IsEmpty);
        retarget(&mut condition, &columns[0]);
        assert_eq!(condition.id, "title");
    }
}
