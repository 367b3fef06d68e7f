//! Top navigation bar: brand and page links

use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Task Table"</span>
            </div>

            <nav class="top-header__nav">
                <A href="/tasks" attr:class="top-header__link">
                    {icon("columns")}
                    "Tasks"
                </A>
            </nav>
        </div>
    }
}
