use crate::domain::a001_task::ui::TasksPage;
use crate::layout::Shell;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Page not found"</h1>
                </div>
            </div>
            <a href="/">"Back to tasks"</a>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=TasksPage />
                    <Route path=path!("/tasks") view=TasksPage />
                </Routes>
            </Shell>
        </Router>
    }
}
