use super::config::{enabled_modes, TableFilterMode};
use super::state::{same_param, FilterModeState};
use crate::config;
use crate::shared::query_params::{
    on_navigation, read_search_params, write_owned_params, QueryParams,
};
use leptos::prelude::*;

/// URL field holding the selected mode
pub const FILTER_MODE_PARAM: &str = "tableFilterMode";

/// Filter mode shared by one table view. The state is only changed through
/// `select` / `set_filter_mode`.
#[derive(Clone, Copy)]
pub struct TableFilterModeContext {
    state: RwSignal<FilterModeState>,
    enabled: StoredValue<Vec<TableFilterMode>>,
}

impl TableFilterModeContext {
    pub fn current_mode(&self) -> Option<TableFilterMode> {
        self.state.with(|s| s.current)
    }

    pub fn is_advanced_filtering_enabled(&self) -> bool {
        self.state.with(|s| s.is_advanced_filtering_enabled())
    }

    pub fn is_command_filtering_enabled(&self) -> bool {
        self.state.with(|s| s.is_command_filtering_enabled())
    }

    pub fn enabled_modes(&self) -> Vec<TableFilterMode> {
        self.enabled.get_value()
    }

    /// Toggle `mode`
    pub fn select(&self, mode: TableFilterMode) {
        if !self.enabled.with_value(|e| e.contains(&mode)) {
            log::warn!("filter mode {} is disabled", mode.as_str());
            return;
        }
        self.state.update(|s| s.select(mode));
        log::debug!("filter mode -> {:?}", self.state.with_untracked(|s| s.current));
    }

    pub fn set_filter_mode(&self, mode: Option<TableFilterMode>) {
        let mode = mode.filter(|m| self.enabled.with_value(|e| e.contains(m)));
        if self.state.with_untracked(|s| s.current) != mode {
            self.state.set(FilterModeState::new(mode));
        }
    }

    /// Restore from URL params; an absent field resets to simple filtering.
    /// A no-op once the owning view is disposed.
    fn restore(&self, params: &QueryParams) {
        let Some(restored) = self
            .enabled
            .try_with_value(|enabled| FilterModeState::from_params(params, enabled))
        else {
            return;
        };
        if self.state.try_get_untracked().is_some_and(|s| s != restored) {
            log::debug!("filter mode restored from the URL: {:?}", restored.current);
            self.state.set(restored);
        }
    }
}

impl FilterModeState {
    pub fn from_params(params: &QueryParams, enabled: &[TableFilterMode]) -> Self {
        Self::from_param(params.get(FILTER_MODE_PARAM).map(String::as_str), enabled)
    }
}

/// Create the context, restore it from the URL and keep the URL in sync
pub fn provide_table_filter_mode() -> TableFilterModeContext {
    let enabled = enabled_modes(&config::get().table.filter_modes);
    let ctx = TableFilterModeContext {
        state: RwSignal::new(FilterModeState::default()),
        enabled: StoredValue::new(enabled),
    };
    ctx.restore(&read_search_params());

    let state = ctx.state;
    Effect::new(move |_| {
        let param = state.with(|s| s.to_param());
        let current = read_search_params();
        if same_param(current.get(FILTER_MODE_PARAM).map(String::as_str), param.as_deref()) {
            return;
        }
        let mut values = QueryParams::new();
        if let Some(value) = param {
            values.insert(FILTER_MODE_PARAM.to_string(), value);
        }
        write_owned_params(&[FILTER_MODE_PARAM], &values);
    });

    on_navigation(move |params| ctx.restore(params));

    provide_context(ctx);
    ctx
}

pub fn use_table_filter_mode() -> TableFilterModeContext {
    use_context::<TableFilterModeContext>()
        .expect("use_table_filter_mode must be used within a TableFilterModeProvider")
}
