//! Open/validate/submit/close transitions of a form sheet

use super::schema::{FieldErrors, FormSchema};
use crate::shared::errors::{error_message, ActionError};
use contracts::shared::ActionResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitGate {
    /// A submission is already in flight
    Busy,
    /// Validation failed; nothing is sent
    Invalid(FieldErrors),
    Ready,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Saved(String),
    Failed(String),
}

impl SubmitOutcome {
    /// Only depends on the response and the sheet title, so it can be
    /// computed after the sheet itself is gone.
    pub fn from_result(result: Result<ActionResponse, ActionError>, title: &str) -> Self {
        let error = match result {
            Ok(response) => response.error_text().map(str::to_string),
            Err(e) => Some(error_message(&e, &format!("Failed to {}", title.to_lowercase()))),
        };
        match error {
            Some(message) => SubmitOutcome::Failed(message),
            None => SubmitOutcome::Saved(success_message(title)),
        }
    }
}

/// Toast text after a successful save, e.g. "Create Task" -> "Create Taskd successfully!"
pub fn success_message(title: &str) -> String {
    format!("{}d successfully!", title)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FormSheetFlow {
    pub open: bool,
    pub pending: bool,
}

impl FormSheetFlow {
    /// Track the open flag. Returns the values to reset the form to on a
    /// closed -> open transition when defaults are supplied.
    pub fn sync_open<T: Clone>(&mut self, open: bool, defaults: Option<&T>) -> Option<T> {
        let opened = open && !self.open;
        self.open = open;
        if opened {
            defaults.cloned()
        } else {
            None
        }
    }

    pub fn begin_submit<T: FormSchema>(&mut self, values: &T) -> SubmitGate {
        if self.pending {
            return SubmitGate::Busy;
        }
        if let Err(errors) = values.validate() {
            return SubmitGate::Invalid(errors);
        }
        self.pending = true;
        SubmitGate::Ready
    }

    /// Leave the pending state; a save also closes the sheet
    pub fn settle(&mut self, outcome: &SubmitOutcome) {
        self.pending = false;
        if matches!(outcome, SubmitOutcome::Saved(_)) {
            self.open = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Default, PartialEq)]
    struct Draft {
        title: String,
    }

    impl FormSchema for Draft {
        fn validate(&self) -> Result<(), FieldErrors> {
            let mut errors = FieldErrors::new();
            if self.title.trim().is_empty() {
                errors.insert("title", "Title is required");
            }
            errors.into_result()
        }
    }

    fn draft(title: &str) -> Draft {
        Draft {
            title: title.to_string(),
        }
    }

    #[test]
    fn test_reopen_uses_latest_defaults() {
        let mut flow = FormSheetFlow::default();
        let mut values = Draft::default();

        if let Some(reset) = flow.sync_open(true, Some(&draft("first"))) {
            values = reset;
        }
        values.title.push_str(" edited");
        assert_eq!(flow.sync_open::<Draft>(false, Some(&draft("first"))), None);

        if let Some(reset) = flow.sync_open(true, Some(&draft("second"))) {
            values = reset;
        }
        assert_eq!(values, draft("second"));
    }

    #[test]
    fn test_open_without_defaults_keeps_values() {
        let mut flow = FormSheetFlow::default();
        assert_eq!(flow.sync_open::<Draft>(true, None), None);
        assert!(flow.open);
        assert_eq!(flow.sync_open(true, Some(&draft("x"))), None);
    }

    #[test]
    fn test_invalid_values_never_submit() {
        let mut flow = FormSheetFlow::default();
        match flow.begin_submit(&draft("  ")) {
            SubmitGate::Invalid(errors) => assert_eq!(errors.get("title"), Some("Title is required")),
            other => panic!("unexpected gate: {:?}", other),
        }
        assert!(!flow.pending);
    }

    #[test]
    fn test_second_submit_while_pending_is_noop() {
        let mut flow = FormSheetFlow::default();
        assert_eq!(flow.begin_submit(&draft("a")), SubmitGate::Ready);
        assert_eq!(flow.begin_submit(&draft("a")), SubmitGate::Busy);
        assert!(flow.pending);
    }

    #[test]
    fn test_error_keeps_sheet_open() {
        let mut flow = FormSheetFlow::default();
        flow.sync_open::<Draft>(true, None);
        flow.begin_submit(&draft("a"));
        let outcome = SubmitOutcome::from_result(Ok(ActionResponse::failure("Title taken")), "Update Task");
        flow.settle(&outcome);
        assert_eq!(outcome, SubmitOutcome::Failed("Title taken".to_string()));
        assert!(flow.open);
        assert!(!flow.pending);
    }

    #[test]
    fn test_success_closes_sheet() {
        let mut flow = FormSheetFlow::default();
        flow.sync_open::<Draft>(true, None);
        flow.begin_submit(&draft("a"));
        let outcome = SubmitOutcome::from_result(Ok(ActionResponse::ok()), "Create Task");
        flow.settle(&outcome);
        assert_eq!(
            outcome,
            SubmitOutcome::Saved("Create Taskd successfully!".to_string())
        );
        assert!(!flow.open);
    }

    #[test]
    fn test_outcome_is_independent_of_the_sheet() {
        let saved = SubmitOutcome::from_result(Ok(ActionResponse::ok()), "Update Task");
        assert_eq!(saved, SubmitOutcome::Saved("Update Taskd successfully!".to_string()));

        let failed = SubmitOutcome::from_result(
            Err(ActionError::Network("offline".to_string())),
            "Update Task",
        );
        assert_eq!(
            failed,
            SubmitOutcome::Failed("Failed to send request: offline".to_string())
        );

        let empty = SubmitOutcome::from_result(Err(ActionError::Decode(String::new())), "Update Task");
        assert_eq!(empty, SubmitOutcome::Failed("Failed to update task".to_string()));
    }
}
