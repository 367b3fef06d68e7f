//! Header checkbox that selects every row of the current page

use crate::shared::data_table::{header_state, CheckboxState};
use leptos::prelude::*;
use std::collections::HashSet;
use thaw::*;
use wasm_bindgen::JsCast;

/// Shows unchecked, checked or indeterminate for the rows of the page and
/// reports `true` (select all) or `false` (deselect all)
#[component]
pub fn TableHeaderCheckbox(
    /// Row ids of the current page
    #[prop(into)]
    page_ids: Signal<Vec<String>>,

    #[prop(into)]
    selected: Signal<HashSet<String>>,

    on_change: Callback<bool>,
) -> impl IntoView {
    let checkbox_state =
        Signal::derive(move || page_ids.with(|ids| selected.with(|sel| header_state(ids, sel))));

    let checkbox_ref = NodeRef::<leptos::html::Input>::new();

    // indeterminate is a DOM property only
    Effect::new(move |_| {
        let state = checkbox_state.get();
        if let Some(input) = checkbox_ref.get() {
            if let Some(input_el) = input.dyn_ref::<web_sys::HtmlInputElement>() {
                input_el.set_indeterminate(state == CheckboxState::Indeterminate);
            }
        }
    });

    view! {
        <TableHeaderCell class="fixed-checkbox-column">
            <input
                node_ref=checkbox_ref
                type="checkbox"
                class="table__checkbox"
                aria-label="Select all"
                prop:checked=move || checkbox_state.get() == CheckboxState::Checked
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
        </TableHeaderCell>
    }
}
