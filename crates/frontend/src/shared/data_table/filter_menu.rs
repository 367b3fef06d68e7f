use super::column::ColumnMeta;
use super::command::{describe_condition, parse_filter_command};
use super::filter_list::JoinOperatorSelect;
use super::query_state::TableQueryState;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Command input of the command filter mode. Each command becomes a
/// removable chip.
#[component]
pub fn DataTableFilterMenu(
    query: TableQueryState,
    #[prop(into)]
    columns: Signal<Vec<ColumnMeta>>,
) -> impl IntoView {
    let input = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let filters = Signal::derive(move || query.query().with(|q| q.filters.clone()));

    let submit = move || {
        let text = input.get_untracked();
        let parsed = columns.with_untracked(|cols| parse_filter_command(&text, cols));
        match parsed {
            Ok(filter) => {
                log::debug!("command filter {:?}", filter);
                query.add_filter(filter.into_condition(uuid::Uuid::new_v4().to_string()));
                input.set(String::new());
                error.set(None);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let hint = move || {
        columns.with(|cols| {
            let names: Vec<&str> = cols
                .iter()
                .filter(|c| c.filter.is_some())
                .map(|c| c.id)
                .collect();
            format!("Columns: {}", names.join(", "))
        })
    };

    view! {
        <div class="filter-menu">
            <div class="filter-menu__input-row">
                {icon("command")}
                <input
                    class="filter-menu__input"
                    type="text"
                    placeholder="status:done, estimatedHours>=4, title:login"
                    aria-label="Filter command"
                    prop:value=move || input.get()
                    on:input=move |ev| {
                        input.set(event_target_value(&ev));
                        if error.with_untracked(Option::is_some) {
                            error.set(None);
                        }
                    }
                    on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                        if ev.key() == "Enter" {
                            ev.prevent_default();
                            submit();
                        }
                    }
                />
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| submit()>
                    "Add"
                </Button>
            </div>
            {move || match error.get() {
                Some(message) => view! { <div class="filter-menu__error">{message}</div> }.into_any(),
                None => view! { <div class="filter-menu__hint">{hint}</div> }.into_any(),
            }}
            <div class="filter-menu__chips">
                {move || {
                    let current = filters.get();
                    let chips = columns.with(|cols| {
                        current
                            .iter()
                            .map(|c| (c.filter_id.clone(), describe_condition(c, cols)))
                            .collect::<Vec<_>>()
                    });
                    chips.into_iter().map(|(filter_id, text)| view! {
                        <span class="filter-menu__chip">
                            {text}
                            <button
                                class="filter-menu__chip-remove"
                                title="Remove filter"
                                on:click=move |_| query.remove_filter(&filter_id)
                            >
                                {icon("x")}
                            </button>
                        </span>
                    }).collect_view()
                }}
                {move || (filters.with(Vec::len) > 1).then(|| view! {
                    <span class="filter-menu__join">"Match" <JoinOperatorSelect query=query /></span>
                })}
                {move || filters.with(|f| !f.is_empty()).then(|| view! {
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| query.clear_filters()>
                        "Clear all"
                    </Button>
                })}
            </div>
        </div>
    }
}
