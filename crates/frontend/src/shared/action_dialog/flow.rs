//! State machine of one confirmation dialog instance.
//!
//! Kept free of reactive types so the transitions can be unit tested; the
//! component holds it in a signal and applies the returned decisions.

use super::messages::ActionMessages;
use crate::shared::errors::{error_message, ActionError};
use contracts::shared::ActionResponse;

/// What a trigger click should do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerEffect {
    Ignored,
    OpenConfirmation,
    Execute,
}

/// Settled result of one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    Success(String),
    Failure(String),
}

impl ActionOutcome {
    /// `{error}` and `Err` both become `Failure`; anything else is a success
    /// with the returned message or the generated default.
    pub fn from_result(
        result: Result<ActionResponse, ActionError>,
        messages: &ActionMessages,
    ) -> Self {
        match result {
            Ok(response) => match response.error_text() {
                Some(error) => ActionOutcome::Failure(error.to_string()),
                None => ActionOutcome::Success(
                    response
                        .message
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| messages.success_message.clone()),
                ),
            },
            Err(e) => ActionOutcome::Failure(error_message(&e, &messages.error_message)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Success(String),
    Error(String),
}

/// Side effects the dialog must perform after an invocation settles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settlement {
    pub notice: Notice,
    pub fire_success: bool,
    pub fire_error: Option<String>,
    pub close: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfirmationFlow {
    pub open: bool,
    pub pending: bool,
    pub require_confirmation: bool,
}

impl ConfirmationFlow {
    pub fn new(require_confirmation: bool) -> Self {
        Self {
            open: false,
            pending: false,
            require_confirmation,
        }
    }

    pub fn can_trigger(&self, target_count: usize, disabled: bool) -> bool {
        target_count > 0 && !disabled && !self.pending
    }

    pub fn trigger(&mut self, target_count: usize, disabled: bool) -> TriggerEffect {
        if !self.can_trigger(target_count, disabled) {
            return TriggerEffect::Ignored;
        }
        if self.require_confirmation {
            self.open = true;
            TriggerEffect::OpenConfirmation
        } else {
            TriggerEffect::Execute
        }
    }

    /// Flow used to settle an invocation whose dialog was unmounted while
    /// the action was in flight
    pub fn detached(require_confirmation: bool) -> Self {
        Self {
            open: require_confirmation,
            pending: true,
            require_confirmation,
        }
    }

    /// Enter the pending state. `false` means there is nothing to act on or
    /// an invocation is already in flight; the caller must not start one.
    pub fn begin(&mut self, target_count: usize) -> bool {
        if self.pending || target_count == 0 {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn settle(&mut self, outcome: ActionOutcome) -> Settlement {
        self.pending = false;
        match outcome {
            ActionOutcome::Failure(message) => Settlement {
                notice: Notice::Error(message.clone()),
                fire_success: false,
                fire_error: Some(message),
                close: false,
            },
            ActionOutcome::Success(message) => {
                let close = self.require_confirmation;
                if close {
                    self.open = false;
                }
                Settlement {
                    notice: Notice::Success(message),
                    fire_success: true,
                    fire_error: None,
                    close,
                }
            }
        }
    }

    /// Close request from cancel or the surface itself. Refused while pending.
    pub fn dismiss(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.open = false;
        true
    }

    /// Open state driven from outside (controlled dialogs)
    pub fn set_open(&mut self, open: bool) {
        if !self.pending || open {
            self.open = open;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn messages() -> ActionMessages {
        ActionMessages {
            confirmation_title: "Delete Items (1)".to_string(),
            confirmation_description: "Sure?".to_string(),
            success_message: "1 task deleted successfully".to_string(),
            error_message: "Failed to delete task".to_string(),
        }
    }

    #[test]
    fn test_error_response_keeps_dialog_open() {
        let mut flow = ConfirmationFlow::new(true);
        assert_eq!(flow.trigger(1, false), TriggerEffect::OpenConfirmation);
        assert!(flow.begin(1));

        let outcome =
            ActionOutcome::from_result(Ok(ActionResponse::failure("boom")), &messages());
        let settlement = flow.settle(outcome);

        assert_eq!(settlement.notice, Notice::Error("boom".to_string()));
        assert!(!settlement.fire_success);
        assert_eq!(settlement.fire_error.as_deref(), Some("boom"));
        assert!(!settlement.close);
        assert!(flow.open);
        assert!(!flow.pending);
    }

    #[test]
    fn test_success_closes_when_confirmation_required() {
        let mut flow = ConfirmationFlow::new(true);
        flow.trigger(2, false);
        flow.begin(1);

        let outcome = ActionOutcome::from_result(Ok(ActionResponse::ok()), &messages());
        let settlement = flow.settle(outcome);

        assert_eq!(
            settlement.notice,
            Notice::Success("1 task deleted successfully".to_string())
        );
        assert!(settlement.fire_success);
        assert!(settlement.close);
        assert!(!flow.open);
    }

    #[test]
    fn test_success_without_confirmation_runs_directly() {
        let mut flow = ConfirmationFlow::new(false);
        assert_eq!(flow.trigger(1, false), TriggerEffect::Execute);
        assert!(!flow.open);
        flow.begin(1);
        let settlement = flow.settle(ActionOutcome::Success("ok".to_string()));
        assert!(settlement.fire_success);
        assert!(!settlement.close);
    }

    #[test]
    fn test_returned_message_replaces_default() {
        let outcome =
            ActionOutcome::from_result(Ok(ActionResponse::with_message("Purged")), &messages());
        assert_eq!(outcome, ActionOutcome::Success("Purged".to_string()));
    }

    #[test]
    fn test_thrown_error_is_an_action_error() {
        let outcome = ActionOutcome::from_result(
            Err(ActionError::Network("offline".to_string())),
            &messages(),
        );
        assert_eq!(
            outcome,
            ActionOutcome::Failure("Failed to send request: offline".to_string())
        );

        let empty = ActionOutcome::from_result(Err(ActionError::Decode(String::new())), &messages());
        assert_eq!(empty, ActionOutcome::Failure("Failed to delete task".to_string()));
    }

    #[test]
    fn test_second_begin_while_pending_is_noop() {
        let mut flow = ConfirmationFlow::new(true);
        flow.trigger(1, false);
        assert!(flow.begin(1));
        assert!(!flow.begin(1));
        assert_eq!(flow.trigger(1, false), TriggerEffect::Ignored);
        assert!(!flow.dismiss());
        assert!(flow.open);
    }

    #[test]
    fn test_trigger_requires_targets_and_enabled() {
        let mut flow = ConfirmationFlow::new(true);
        assert_eq!(flow.trigger(0, false), TriggerEffect::Ignored);
        assert_eq!(flow.trigger(3, true), TriggerEffect::Ignored);
        assert!(!flow.open);
    }

    #[test]
    fn test_confirm_with_no_targets_does_not_run() {
        let mut flow = ConfirmationFlow::new(true);
        flow.set_open(true);
        assert!(!flow.can_trigger(0, false));
        assert!(!flow.begin(0));
        assert!(!flow.pending);
        assert!(flow.begin(2));
    }

    #[test]
    fn test_detached_settlement_still_reports() {
        let success = ConfirmationFlow::detached(true).settle(ActionOutcome::Success("done".to_string()));
        assert_eq!(success.notice, Notice::Success("done".to_string()));
        assert!(success.fire_success);
        assert!(success.close);

        let failure = ConfirmationFlow::detached(true).settle(ActionOutcome::Failure("boom".to_string()));
        assert_eq!(failure.notice, Notice::Error("boom".to_string()));
        assert_eq!(failure.fire_error.as_deref(), Some("boom"));
        assert!(!failure.fire_success);

        let direct = ConfirmationFlow::detached(false).settle(ActionOutcome::Success("done".to_string()));
        assert!(direct.fire_success);
        assert!(!direct.close);
    }
}
