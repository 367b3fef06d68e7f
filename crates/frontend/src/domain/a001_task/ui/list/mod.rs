pub mod action_bar;
pub mod columns;
pub mod state;

use self::action_bar::TasksTableActionBar;
use self::columns::get_columns;
use self::state::create_state;
use crate::config;
use crate::domain::a001_task::api;
use crate::domain::a001_task::ui::delete_dialog::DeleteTasksDialog;
use crate::domain::a001_task::ui::details::{CreateTaskSheet, UpdateTaskSheet};
use crate::domain::a001_task::TaskTableAction;
use crate::shared::data_table::{
    use_table_query, ActionBarContext, ActionBarFn, ActionConfig, ActionRegistry,
    AdvancedDataTable, MultiItemDialogProps, RowIdFn, SingleItemDialogProps,
};
use crate::shared::errors::error_message;
use crate::shared::filter_mode::use_table_filter_mode;
use crate::shared::icons::icon;
use contracts::domain::a001_task::Task;
use contracts::shared::table_query::TableQueryDefaults;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::sync::Arc;
use thaw::*;

#[component]
pub fn TasksPage() -> impl IntoView {
    let filter_mode = use_table_filter_mode();
    let query = use_table_query(TableQueryDefaults {
        per_page: config::get().table.page_size,
        ..TableQueryDefaults::default()
    });

    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal::<Option<String>>(None);
    let reload = RwSignal::new(0u32);
    // Responses of superseded requests are dropped
    let request_seq = StoredValue::new(0u64);

    let load_tasks = move || {
        let current = query.get_untracked();
        let advanced = filter_mode.is_advanced_filtering_enabled();
        let seq = request_seq.get_value() + 1;
        request_seq.set_value(seq);

        spawn_local(async move {
            set_loading.set(true);
            set_error.set(None);

            let result = api::fetch_tasks(&current, advanced).await;
            if request_seq.try_get_value() != Some(seq) {
                return;
            }
            match result {
                Ok(page) => {
                    state.update(|s| s.apply_page(page));
                }
                Err(e) => {
                    log!("Failed to fetch tasks: {}", e);
                    set_error.set(Some(error_message(&e, "Failed to load tasks")));
                }
            }
            set_loading.set(false);
        });
    };

    let load_facets = move || {
        spawn_local(async move {
            match api::fetch_facets().await {
                Ok(facets) => {
                    state.try_update(|s| s.facets = facets);
                }
                Err(e) => log!("Failed to fetch task facets: {}", e),
            }
        });
    };

    // Query, filter mode or a finished action
    Effect::new(move |_| {
        query.query().track();
        filter_mode.is_advanced_filtering_enabled();
        reload.track();
        load_tasks();
    });

    Effect::new(move |_| {
        reload.track();
        load_facets();
    });

    let on_saved = Callback::new(move |_| reload.update(|n| *n = n.wrapping_add(1)));

    let facets = Signal::derive(move || state.with(|s| s.facets.clone()));
    let registry = ActionRegistry::<Task, TaskTableAction>::new()
        .with(
            TaskTableAction::Update,
            ActionConfig::single(move |props: SingleItemDialogProps<Task>| {
                view! {
                    <UpdateTaskSheet
                        open=props.open
                        on_open_change=props.on_open_change
                        on_success=props.on_success
                        task=props.data
                    />
                }
                .into_any()
            }),
        )
        .with(
            TaskTableAction::Delete,
            ActionConfig::multi(move |props: MultiItemDialogProps<Task>| {
                view! {
                    <DeleteTasksDialog
                        tasks=props.data
                        open=props.open
                        on_open_change=props.on_open_change
                        on_success=props.on_success
                        show_trigger=props.show_trigger
                    />
                }
                .into_any()
            }),
        );

    let get_row_id: RowIdFn<Task> = Arc::new(|task: &Task| task.id.clone());
    let action_bar: ActionBarFn<Task> = Arc::new(move |context: ActionBarContext<Task>| {
        view! { <TasksTableActionBar context=context on_saved=on_saved /> }.into_any()
    });

    view! {
        <div class="page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Tasks"</h1>
                    <p class="header__subtitle">"Here's a list of your tasks for this month."</p>
                </div>
                <div class="header__actions">
                    <CreateTaskSheet on_saved=on_saved />
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| on_saved.run(())
                        disabled=loading
                    >
                        {icon("refresh")}
                        "Refresh"
                    </Button>
                </div>
            </div>

            {move || error.get().map(|e| view! {
                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100);">
                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                    <span class="warning-box__text" style="color: var(--color-error);">{e}</span>
                </div>
            })}

            <AdvancedDataTable
                data=Signal::derive(move || state.with(|s| s.tasks.clone()))
                page_count=Signal::derive(move || state.with(|s| s.page_count))
                total_count=Signal::derive(move || state.with(|s| s.total_count))
                loading=Signal::derive(move || state.with(|s| s.shows_initial_loading(loading.get())))
                query=query
                get_columns=get_columns(facets)
                get_row_id=get_row_id
                registry=registry
                action_bar=action_bar
                on_action_success=on_saved
            />
        </div>
    }
}
