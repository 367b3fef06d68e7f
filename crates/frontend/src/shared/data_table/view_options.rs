use super::column::{ColumnMeta, ColumnVisibility};
use crate::shared::components::ui::Checkbox;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Column visibility menu
#[component]
pub fn DataTableViewOptions(
    #[prop(into)]
    columns: Signal<Vec<ColumnMeta>>,
    visibility: RwSignal<ColumnVisibility>,
) -> impl IntoView {
    let hideable = Memo::new(move |_| {
        columns.with(|cols| {
            cols.iter()
                .filter(|c| c.hideable)
                .map(|c| (c.id, c.label.clone()))
                .collect::<Vec<_>>()
        })
    });

    let counter = move || {
        let (visible, total) = hideable.with(|cols| {
            visibility.with(|v| v.counts(cols.iter().map(|(id, _)| *id)))
        });
        format!("{}/{}", visible, total)
    };

    view! {
        <details class="view-options">
            <summary class="view-options__trigger">
                {icon("columns")}
                <span>"View"</span>
                <span class="view-options__count">{counter}</span>
            </summary>
            <div class="view-options__panel">
                <div class="view-options__heading">"Toggle columns"</div>
                {move || hideable.get().into_iter().map(|(id, label)| {
                    view! {
                        <Checkbox
                            label=label
                            checked=Signal::derive(move || visibility.with(|v| v.is_visible(id)))
                            on_change=Callback::new(move |_: bool| visibility.update(|v| v.toggle(id)))
                        />
                    }
                }).collect_view()}
                <Space>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| visibility.update(ColumnVisibility::show_all)
                    >
                        "Show all"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Subtle
                        on_click=move |_| {
                            let ids = hideable.get_untracked();
                            visibility.update(|v| v.hide_all(ids.iter().map(|(id, _)| *id)));
                        }
                    >
                        "Hide all"
                    </Button>
                </Space>
            </div>
        </details>
    }
}
