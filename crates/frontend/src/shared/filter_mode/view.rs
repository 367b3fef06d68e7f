use super::config::FilterModeOption;
use super::context::{provide_table_filter_mode, use_table_filter_mode};
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Toggle buttons for the enabled filter modes
#[component]
pub fn TableFilterModeToggle() -> impl IntoView {
    let ctx = use_table_filter_mode();
    let options: Vec<FilterModeOption> = ctx
        .enabled_modes()
        .into_iter()
        .map(FilterModeOption::from)
        .collect();

    view! {
        <div class="filter-mode-toggle">
            <span class="filter-mode-toggle__label">"Filter Mode:"</span>
            <Space>
                {options.into_iter().map(|option| {
                    let mode = option.mode;
                    let tooltip = format!("{}\n{}", option.tooltip_title, option.tooltip_description);
                    let is_active = move || ctx.current_mode() == Some(mode);
                    view! {
                        <span title=tooltip>
                            <Button
                                appearance=Signal::derive(move || if is_active() {
                                    ButtonAppearance::Primary
                                } else {
                                    ButtonAppearance::Subtle
                                })
                                on_click=move |_| ctx.select(mode)
                                attr:aria-label=format!("Enable {}", option.label)
                                attr:aria-pressed=move || is_active().to_string()
                            >
                                {icon(option.icon)}
                                <span class="filter-mode-toggle__text">{option.label}</span>
                            </Button>
                        </span>
                    }
                }).collect_view()}
            </Space>
        </div>
    }
}

/// Provides the filter-mode context to `children` and renders the toggle
/// above them
#[component]
pub fn TableFilterModeProvider(children: Children) -> impl IntoView {
    provide_table_filter_mode();

    view! {
        <TableFilterModeToggle />
        {children()}
    }
}
