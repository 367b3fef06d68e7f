use super::config::TableFilterMode;

/// Current filter mode; `None` means simple filtering
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterModeState {
    pub current: Option<TableFilterMode>,
}

impl FilterModeState {
    pub fn new(current: Option<TableFilterMode>) -> Self {
        Self { current }
    }

    /// Toggle semantics: selecting the active mode clears it
    pub fn select(&mut self, mode: TableFilterMode) {
        self.current = if self.current == Some(mode) {
            None
        } else {
            Some(mode)
        };
    }

    pub fn is_advanced_filtering_enabled(&self) -> bool {
        self.current.is_some()
    }

    pub fn is_command_filtering_enabled(&self) -> bool {
        self.current == Some(TableFilterMode::Command)
    }

    /// Parse the persisted URL value. Missing, empty, unknown and disabled
    /// values all mean "no mode".
    pub fn from_param(value: Option<&str>, enabled: &[TableFilterMode]) -> Self {
        let current = value
            .filter(|v| !v.is_empty())
            .and_then(TableFilterMode::parse)
            .filter(|m| enabled.contains(m));
        Self { current }
    }

    /// Value to persist; `None` removes the field
    pub fn to_param(&self) -> Option<String> {
        self.current.map(|m| m.as_str().to_string())
    }
}

/// Persistence equality: `None` and `""` are the same value
pub fn same_param(a: Option<&str>, b: Option<&str>) -> bool {
    a.filter(|v| !v.is_empty()) == b.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [TableFilterMode; 2] = [TableFilterMode::Expert, TableFilterMode::Command];

    fn reachable() -> Vec<FilterModeState> {
        vec![
            FilterModeState::new(None),
            FilterModeState::new(Some(TableFilterMode::Expert)),
            FilterModeState::new(Some(TableFilterMode::Command)),
        ]
    }

    #[test]
    fn test_select_same_mode_twice_clears() {
        for start in reachable() {
            for mode in ALL {
                let mut state = start;
                state.select(mode);
                state.select(mode);
                if start.current == Some(mode) {
                    assert_eq!(state.current, Some(mode));
                } else {
                    assert_eq!(state.current, None);
                }
            }
        }

        let mut state = FilterModeState::default();
        state.select(TableFilterMode::Command);
        state.select(TableFilterMode::Command);
        assert_eq!(state.current, None);
    }

    #[test]
    fn test_select_other_mode_switches() {
        let mut state = FilterModeState::default();
        state.select(TableFilterMode::Expert);
        state.select(TableFilterMode::Command);
        assert_eq!(state.current, Some(TableFilterMode::Command));
    }

    #[test]
    fn test_derived_flags_hold_for_all_states() {
        for state in reachable() {
            assert_eq!(state.is_advanced_filtering_enabled(), state.current.is_some());
            assert_eq!(
                state.is_command_filtering_enabled(),
                state.current == Some(TableFilterMode::Command)
            );
        }
        assert!(FilterModeState::new(Some(TableFilterMode::Expert)).is_advanced_filtering_enabled());
    }

    #[test]
    fn test_from_param_coerces_invalid_to_none() {
        assert_eq!(FilterModeState::from_param(None, &ALL).current, None);
        assert_eq!(FilterModeState::from_param(Some(""), &ALL).current, None);
        assert_eq!(FilterModeState::from_param(Some("Expert"), &ALL).current, None);
        assert_eq!(
            FilterModeState::from_param(Some("command"), &ALL).current,
            Some(TableFilterMode::Command)
        );
        assert_eq!(
            FilterModeState::from_param(Some("command"), &[TableFilterMode::Expert]).current,
            None
        );
    }

    #[test]
    fn test_empty_and_missing_params_are_equal() {
        assert!(same_param(None, Some("")));
        assert!(same_param(Some("expert"), Some("expert")));
        assert!(!same_param(None, Some("expert")));
        assert_eq!(FilterModeState::default().to_param(), None);
    }
}
