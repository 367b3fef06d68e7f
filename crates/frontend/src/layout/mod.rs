pub mod top_header;

use crate::shared::filter_mode::TableFilterModeProvider;
use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                    |
/// +------------------------------------------+
/// |  filter mode toggle                       |
/// |  page content                             |
/// +------------------------------------------+
/// ```
///
/// Pages below share one filter-mode context.
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <div class="app-main">
                    <TableFilterModeProvider>
                        {children()}
                    </TableFilterModeProvider>
                </div>
            </div>
        </div>
    }
}
