/// Filtering interaction style of the table toolbar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableFilterMode {
    /// Multi-condition filter builder
    Expert,
    /// Typed `field:value` commands
    Command,
}

impl TableFilterMode {
    pub fn all() -> [TableFilterMode; 2] {
        [TableFilterMode::Expert, TableFilterMode::Command]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TableFilterMode::Expert => "expert",
            TableFilterMode::Command => "command",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "expert" => Some(TableFilterMode::Expert),
            "command" => Some(TableFilterMode::Command),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FilterModeOption {
    pub mode: TableFilterMode,
    pub label: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
    pub tooltip_title: &'static str,
    pub tooltip_description: &'static str,
}

impl From<TableFilterMode> for FilterModeOption {
    fn from(mode: TableFilterMode) -> Self {
        match mode {
            TableFilterMode::Expert => FilterModeOption {
                mode,
                label: "Detailed Filters",
                icon: "sliders",
                description: "Comprehensive filtering with multiple conditions and operators",
                tooltip_title: "Expert Filter Mode",
                tooltip_description: "Excel/Airtable-style advanced filtering with complex conditions and logical operators.",
            },
            TableFilterMode::Command => FilterModeOption {
                mode,
                label: "Quick Command",
                icon: "command",
                description: "Quick filtering through command-based interface",
                tooltip_title: "Quick Filter Mode",
                tooltip_description: "Linear-style command palette for rapid filtering with keyboard shortcuts.",
            },
        }
    }
}

/// Modes enabled by `table.filter_modes`, in configured order. Unknown and
/// duplicate names are skipped.
pub fn enabled_modes(configured: &[String]) -> Vec<TableFilterMode> {
    let mut modes = Vec::new();
    for name in configured {
        match TableFilterMode::parse(name.trim()) {
            Some(mode) if !modes.contains(&mode) => modes.push(mode),
            Some(_) => {}
            None => log::warn!("unknown filter mode in config: {}", name),
        }
    }
    modes
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enabled_modes_follow_config_order() {
        let configured = vec![
            "command".to_string(),
            "bogus".to_string(),
            "expert".to_string(),
            "command".to_string(),
        ];
        assert_eq!(
            enabled_modes(&configured),
            vec![TableFilterMode::Command, TableFilterMode::Expert]
        );
    }

    #[test]
    fn test_option_text() {
        let option = FilterModeOption::from(TableFilterMode::Expert);
        assert_eq!(option.label, "Detailed Filters");
        assert_eq!(option.tooltip_title, "Expert Filter Mode");
    }
}
