use crate::routes::routes::AppRoutes;
use crate::shared::notify::NotificationsProvider;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <ConfigProvider>
            <ToasterProvider>
                <NotificationsProvider>
                    <AppRoutes />
                </NotificationsProvider>
            </ToasterProvider>
        </ConfigProvider>
    }
}
