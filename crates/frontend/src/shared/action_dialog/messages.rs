use super::kind::ActionPreset;

/// Record an action can be applied to
pub trait ActionTarget {
    fn target_id(&self) -> String;

    fn target_name(&self) -> Option<String> {
        None
    }

    fn target_title(&self) -> Option<String> {
        None
    }
}

/// Name shown in confirmation text: name, then title, then "<item_name> <id>"
pub fn display_name<T: ActionTarget>(item: &T, item_name: &str) -> String {
    item.target_name()
        .filter(|n| !n.trim().is_empty())
        .or_else(|| item.target_title().filter(|t| !t.trim().is_empty()))
        .unwrap_or_else(|| format!("{} {}", item_name, item.target_id()))
}

/// Caller overrides for generated messages
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomMessages {
    pub confirmation_title: Option<String>,
    pub confirmation_description: Option<String>,
    pub success_message: Option<String>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActionMessages {
    pub confirmation_title: String,
    pub confirmation_description: String,
    pub success_message: String,
    pub error_message: String,
}

/// Targets listed by name up to this count, summarized beyond it
const MAX_NAMED_TARGETS: usize = 3;

impl ActionMessages {
    pub fn build<T: ActionTarget>(
        targets: &[T],
        item_name: &str,
        preset: &ActionPreset,
        custom: &CustomMessages,
    ) -> Self {
        let count = targets.len();
        let item_text = if count == 1 {
            item_name.to_string()
        } else {
            format!("{}s", item_name)
        };
        let names = if count <= MAX_NAMED_TARGETS {
            targets
                .iter()
                .map(|t| display_name(t, item_name))
                .collect::<Vec<_>>()
                .join(", ")
        } else {
            format!("{} {}", count, item_text)
        };
        let verb = preset.label.to_lowercase();

        Self {
            confirmation_title: custom
                .confirmation_title
                .clone()
                .unwrap_or_else(|| format!("{} ({})", preset.confirmation_title, count)),
            confirmation_description: custom.confirmation_description.clone().unwrap_or_else(
                || {
                    format!(
                        "{} You are about to {} {}.",
                        preset.confirmation_description, verb, names
                    )
                },
            ),
            success_message: custom
                .success_message
                .clone()
                .or_else(|| preset.success_message_override().map(str::to_string))
                .unwrap_or_else(|| {
                    format!("{} {} {} successfully", count, item_text, preset.past_tense)
                }),
            error_message: custom
                .error_message
                .clone()
                .unwrap_or_else(|| format!("Failed to {} {}", verb, item_text)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::action_dialog::kind::ActionKind;

    struct Item {
        id: &'static str,
        name: Option<&'static str>,
        title: Option<&'static str>,
    }

    impl ActionTarget for Item {
        fn target_id(&self) -> String {
            self.id.to_string()
        }
        fn target_name(&self) -> Option<String> {
            self.name.map(str::to_string)
        }
        fn target_title(&self) -> Option<String> {
            self.title.map(str::to_string)
        }
    }

    fn named(id: &'static str, name: &'static str) -> Item {
        Item {
            id,
            name: Some(name),
            title: None,
        }
    }

    #[test]
    fn test_three_targets_are_listed_by_name() {
        let targets = vec![named("1", "A"), named("2", "B"), named("3", "C")];
        let msgs = ActionMessages::build(
            &targets,
            "Task",
            &ActionKind::Delete.preset(),
            &CustomMessages::default(),
        );
        assert!(msgs.confirmation_description.contains("A, B, C"));
        assert_eq!(msgs.confirmation_title, "Delete Items (3)");
        assert_eq!(msgs.success_message, "3 Tasks deleted successfully");
    }

    #[test]
    fn test_four_targets_are_counted() {
        let targets = vec![
            named("1", "A"),
            named("2", "B"),
            named("3", "C"),
            named("4", "D"),
        ];
        let msgs = ActionMessages::build(
            &targets,
            "Task",
            &ActionKind::Delete.preset(),
            &CustomMessages::default(),
        );
        assert!(msgs.confirmation_description.contains("4 Tasks"));
        assert!(!msgs.confirmation_description.contains("A, B"));
    }

    #[test]
    fn test_display_name_fallbacks() {
        let titled = Item {
            id: "7",
            name: Some(" "),
            title: Some("Fix login"),
        };
        let bare = Item {
            id: "8",
            name: None,
            title: None,
        };
        assert_eq!(display_name(&titled, "task"), "Fix login");
        assert_eq!(display_name(&bare, "task"), "task 8");
    }

    #[test]
    fn test_single_target_messages() {
        let msgs = ActionMessages::build(
            &[named("1", "A")],
            "task",
            &ActionKind::Edit.preset(),
            &CustomMessages::default(),
        );
        assert_eq!(msgs.success_message, "1 task edited successfully");
        assert_eq!(msgs.error_message, "Failed to edit task");
        assert!(msgs.confirmation_description.ends_with("You are about to edit A."));
    }

    #[test]
    fn test_custom_messages_win() {
        let custom = CustomMessages {
            success_message: Some("Gone".to_string()),
            ..Default::default()
        };
        let msgs = ActionMessages::build(
            &[named("1", "A")],
            "task",
            &ActionKind::Delete.preset(),
            &custom,
        );
        assert_eq!(msgs.success_message, "Gone");
        assert_eq!(msgs.error_message, "Failed to delete task");
    }

    #[test]
    fn test_preset_success_message_replaces_generated_text() {
        let preset = ActionKind::Delete.preset().with_success_message("Tasks purged");
        let msgs = ActionMessages::build(&[named("1", "A")], "task", &preset, &CustomMessages::default());
        assert_eq!(msgs.success_message, "Tasks purged");

        let custom = CustomMessages {
            success_message: Some("Gone".to_string()),
            ..Default::default()
        };
        let msgs = ActionMessages::build(&[named("1", "A")], "task", &preset, &custom);
        assert_eq!(msgs.success_message, "Gone");
    }
}
