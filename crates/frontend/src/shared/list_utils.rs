/// List helpers shared by table toolbars (search input, sort indicators)
use crate::config;
use contracts::shared::table_query::ColumnSort;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// `setTimeout` delay for a configured debounce; saturates instead of wrapping
pub fn debounce_delay(ms: u32) -> i32 {
    i32::try_from(ms).unwrap_or(i32::MAX)
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Applied filter value
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new value once typing pauses
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };
    let debounce_ms = debounce_delay(config::get().table.debounce_ms);

    // Local value before debounce
    let (input_value, set_input_value) = signal(value.get_untracked());

    // Back/forward and reset change the applied value from outside
    Effect::new(move |_| {
        let applied = value.get();
        if input_value.get_untracked().trim() != applied.trim() {
            set_input_value.set(applied);
        }
    });

    let debounce_timeout = StoredValue::new(None::<i32>);

    let cancel_pending = move || {
        if let Some(timeout_id) = debounce_timeout.try_get_value().flatten() {
            if let Some(w) = web_sys::window() {
                w.clear_timeout_with_handle(timeout_id);
            }
            debounce_timeout.try_update_value(|t| *t = None);
        }
    };

    // A pending timeout must not fire into a disposed callback
    on_cleanup(cancel_pending);

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());
        cancel_pending();

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };
        // Freed by wasm-bindgen once it has run
        let callback = wasm_bindgen::closure::Closure::once_into_js(move || {
            debounce_timeout.try_update_value(|t| *t = None);
            on_change.run(new_value);
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref::<js_sys::Function>(),
            debounce_ms,
        ) {
            Ok(timeout_id) => {
                debounce_timeout.set_value(Some(timeout_id));
            }
            Err(e) => log::error!("setTimeout failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        cancel_pending();
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div style="position: relative; display: inline-flex; align-items: center;">
            <input
                type="text"
                placeholder=placeholder
                style=move || format!(
                    "width: 250px; padding: 6px 32px 6px 10px; border: 1px solid #ddd; border-radius: 4px; font-size: 15px; background: {};",
                    if is_filter_active() { "#fffbea" } else { "white" }
                )
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            {move || (!input_value.get().is_empty()).then(|| view! {
                <button
                    style="position: absolute; right: 6px; background: none; border: none; cursor: pointer; padding: 4px; display: inline-flex; align-items: center; color: #666; line-height: 1;"
                    on:click=clear_filter
                    title="Clear"
                >
                    {crate::shared::icons::icon("x")}
                </button>
            })}
        </div>
    }
}

/// Sort indicator for a column header
pub fn get_sort_indicator(sort: &[ColumnSort], field: &str) -> &'static str {
    match sort.iter().find(|s| s.id == field) {
        Some(s) if s.desc => " ▼",
        Some(_) => " ▲",
        None => " ⇅",
    }
}

pub fn get_sort_class(sort: &[ColumnSort], field: &str) -> &'static str {
    if sort.iter().any(|s| s.id == field) {
        "table__sort-indicator table__sort-indicator--active"
    } else {
        "table__sort-indicator"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_indicator() {
        let sort = vec![ColumnSort::desc("createdAt")];
        assert_eq!(get_sort_indicator(&sort, "createdAt"), " ▼");
        assert_eq!(get_sort_indicator(&[ColumnSort::asc("title")], "title"), " ▲");
        assert_eq!(get_sort_indicator(&sort, "title"), " ⇅");
        assert!(get_sort_class(&sort, "createdAt").ends_with("--active"));
    }

    #[test]
    fn test_debounce_delay_saturates() {
        assert_eq!(debounce_delay(300), 300);
        assert_eq!(debounce_delay(i32::MAX as u32), i32::MAX);
        assert_eq!(debounce_delay(u32::MAX), i32::MAX);
        assert_eq!(debounce_delay(3_000_000_000), i32::MAX);
    }
}
