use crate::config;
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Page navigation and page size selector
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    #[prop(into)]
    total_pages: Signal<usize>,

    #[prop(into)]
    total_count: Signal<usize>,

    #[prop(into)]
    page_size: Signal<usize>,

    on_page_change: Callback<usize>,

    on_page_size_change: Callback<usize>,

    /// Page size options, `table.page_size_options` from the config by default
    #[prop(optional)]
    page_size_options: Option<Vec<usize>>,

    /// Rows selected across the table
    #[prop(optional, into)]
    selected_count: Signal<usize>,
) -> impl IntoView {
    let page_size_opts =
        page_size_options.unwrap_or_else(|| config::get().table.page_size_options.clone());
    let last_page = move || total_pages.get().max(1);

    view! {
        <div class="pagination-controls">
            <span class="pagination-selection">
                {move || format!(
                    "{} of {} row(s) selected.",
                    selected_count.get(),
                    total_count.get()
                )}
            </span>
            <label class="pagination-size">
                "Rows per page"
                <select
                    class="page-size-select"
                    on:change=move |ev| {
                        if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                            on_page_size_change.run(size);
                        }
                    }
                    prop:value=move || page_size.get().to_string()
                >
                    {page_size_opts.into_iter().map(|size| {
                        view! {
                            <option value=size.to_string() selected=move || page_size.get() == size>
                                {size.to_string()}
                            </option>
                        }
                    }).collect_view()}
                </select>
            </label>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page.get(), last_page())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(1)
                disabled=move || current_page.get() <= 1
                title="Go to first page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page > 1 {
                        on_page_change.run(page - 1);
                    }
                }
                disabled=move || current_page.get() <= 1
                title="Go to previous page"
            >
                {icon("chevron-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    let page = current_page.get();
                    if page < total_pages.get() {
                        on_page_change.run(page + 1);
                    }
                }
                disabled=move || current_page.get() >= total_pages.get()
                title="Go to next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| on_page_change.run(last_page())
                disabled=move || current_page.get() >= total_pages.get()
                title="Go to last page"
            >
                {icon("chevrons-right")}
            </button>
        </div>
    }
}
