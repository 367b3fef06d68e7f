//! Closed set of confirmation actions and their default presentation

/// Button styling of an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionVariant {
    Destructive,
    Outline,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionKind {
    Delete,
    Edit,
    Archive,
    Restore,
    Ban,
    Unban,
    Deactivate,
    Activate,
}

impl ActionKind {
    pub fn all() -> [ActionKind; 8] {
        [
            ActionKind::Delete,
            ActionKind::Edit,
            ActionKind::Archive,
            ActionKind::Restore,
            ActionKind::Ban,
            ActionKind::Unban,
            ActionKind::Deactivate,
            ActionKind::Activate,
        ]
    }

    /// Past tense used in generated success messages
    pub fn past_tense(&self) -> &'static str {
        match self {
            ActionKind::Delete => "deleted",
            ActionKind::Edit => "edited",
            ActionKind::Archive => "archived",
            ActionKind::Restore => "restored",
            ActionKind::Ban => "banned",
            ActionKind::Unban => "unbanned",
            ActionKind::Deactivate => "deactivated",
            ActionKind::Activate => "activated",
        }
    }

    pub fn preset(&self) -> ActionPreset {
        ActionPreset::from(*self)
    }
}

/// Resolved presentation of an action. Start from `ActionPreset::from(kind)`
/// and override individual fields with the `with_*` builders.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionPreset {
    pub kind: ActionKind,
    pub label: String,
    pub icon: &'static str,
    pub variant: ActionVariant,
    pub past_tense: String,
    pub confirmation_title: String,
    pub confirmation_description: String,
    pub success_message: String,
    pub loading_message: Option<String>,
}

impl ActionPreset {
    pub fn is_destructive(&self) -> bool {
        self.variant == ActionVariant::Destructive
    }

    /// Success text set through `with_success_message`. The kind's own
    /// default is generic, so generated messages with a count win over it.
    pub fn success_message_override(&self) -> Option<&str> {
        let default = ActionPreset::from(self.kind).success_message;
        (self.success_message != default).then_some(self.success_message.as_str())
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = icon;
        self
    }

    pub fn with_variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn with_past_tense(mut self, past_tense: impl Into<String>) -> Self {
        self.past_tense = past_tense.into();
        self
    }

    pub fn with_confirmation_title(mut self, title: impl Into<String>) -> Self {
        self.confirmation_title = title.into();
        self
    }

    pub fn with_confirmation_description(mut self, description: impl Into<String>) -> Self {
        self.confirmation_description = description.into();
        self
    }

    pub fn with_success_message(mut self, message: impl Into<String>) -> Self {
        self.success_message = message.into();
        self
    }

    pub fn with_loading_message(mut self, message: impl Into<String>) -> Self {
        self.loading_message = Some(message.into());
        self
    }
}

impl From<ActionKind> for ActionPreset {
    fn from(kind: ActionKind) -> Self {
        let (label, icon, variant, title, description, success, loading) = match kind {
            ActionKind::Delete => (
                "Delete",
                "trash",
                ActionVariant::Destructive,
                "Delete Items",
                "This action cannot be undone. This will permanently delete the selected items from our servers.",
                "Items deleted successfully",
                Some("Deleting items..."),
            ),
            ActionKind::Edit => (
                "Edit",
                "edit",
                ActionVariant::Outline,
                "Edit Items",
                "This will apply the selected changes to all selected items.",
                "Items updated successfully",
                Some("Updating items..."),
            ),
            ActionKind::Archive => (
                "Archive",
                "archive",
                ActionVariant::Outline,
                "Archive Items",
                "This will move the selected items to your archive. You can restore them later.",
                "Items archived successfully",
                None,
            ),
            ActionKind::Restore => (
                "Restore",
                "archive",
                ActionVariant::Outline,
                "Restore Items",
                "This will restore the selected items from your archive.",
                "Items restored successfully",
                None,
            ),
            ActionKind::Ban => (
                "Ban",
                "ban",
                ActionVariant::Destructive,
                "Ban Users",
                "This will ban the selected users from accessing the platform.",
                "Users banned successfully",
                None,
            ),
            ActionKind::Unban => (
                "Unban",
                "user-x",
                ActionVariant::Outline,
                "Unban Users",
                "This will restore access for the selected users.",
                "Users unbanned successfully",
                None,
            ),
            ActionKind::Deactivate => (
                "Deactivate",
                "user-x",
                ActionVariant::Outline,
                "Deactivate Items",
                "This will temporarily deactivate the selected items.",
                "Items deactivated successfully",
                None,
            ),
            ActionKind::Activate => (
                "Activate",
                "user-x",
                ActionVariant::Outline,
                "Activate Items",
                "This will activate the selected items.",
                "Items activated successfully",
                None,
            ),
        };

        Self {
            kind,
            label: label.to_string(),
            icon,
            variant,
            past_tense: kind.past_tense().to_string(),
            confirmation_title: title.to_string(),
            confirmation_description: description.to_string(),
            success_message: success.to_string(),
            loading_message: loading.map(str::to_string),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_kind_has_a_preset() {
        for kind in ActionKind::all() {
            let preset = ActionPreset::from(kind);
            assert_eq!(preset.kind, kind);
            assert!(!preset.label.is_empty());
            assert!(!preset.confirmation_title.is_empty());
            assert!(preset.past_tense.ends_with("ed"));
        }
    }

    #[test]
    fn test_past_tense_is_not_label_plus_d() {
        assert_eq!(ActionKind::Edit.past_tense(), "edited");
        assert_eq!(ActionKind::Ban.past_tense(), "banned");
        assert_eq!(ActionKind::Delete.past_tense(), "deleted");
    }

    #[test]
    fn test_overrides_keep_other_defaults() {
        let preset = ActionKind::Delete
            .preset()
            .with_label("Remove")
            .with_past_tense("removed");
        assert_eq!(preset.label, "Remove");
        assert_eq!(preset.past_tense, "removed");
        assert!(preset.is_destructive());
        assert_eq!(preset.icon, "trash");
    }

    #[test]
    fn test_only_explicit_success_message_is_an_override() {
        assert_eq!(ActionKind::Archive.preset().success_message_override(), None);
        let preset = ActionKind::Archive.preset().with_success_message("Moved to archive");
        assert_eq!(preset.success_message_override(), Some("Moved to archive"));
    }
}
