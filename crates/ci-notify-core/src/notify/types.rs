use std::fmt;

use crate::dispatch::{DeliveryResult, OutboundRequest};

/// Progress of a single notification run.
///
/// Strictly linear; any non-terminal stage may drop to `Failed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStage {
    NotReady,
    InputsResolved,
    MessageFormatted,
    RequestSent,
    Succeeded,
    Failed,
}

impl RunStage {
    pub fn is_terminal(&self) -> bool {
        matches!(self, RunStage::Succeeded | RunStage::Failed)
    }

    /// Whether `next` may follow `self`.
    pub fn can_transition_to(&self, next: RunStage) -> bool {
        use RunStage::*;
        match (self, next) {
            (NotReady, InputsResolved)
            | (InputsResolved, MessageFormatted)
            | (MessageFormatted, RequestSent)
            | (RequestSent, Succeeded) => true,
            (current, Failed) => !current.is_terminal(),
            _ => false,
        }
    }
}

impl fmt::Display for RunStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStage::NotReady => write!(f, "not_ready"),
            RunStage::InputsResolved => write!(f, "inputs_resolved"),
            RunStage::MessageFormatted => write!(f, "message_formatted"),
            RunStage::RequestSent => write!(f, "request_sent"),
            RunStage::Succeeded => write!(f, "succeeded"),
            RunStage::Failed => write!(f, "failed"),
        }
    }
}

/// Whether to deliver the notification or only build it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunMode {
    Send,
    /// Build the request without sending it.
    Preview,
}

/// What a successful run produced.
#[derive(Debug, Clone)]
pub enum RunOutcome {
    Delivered(DeliveryResult),
    Previewed(OutboundRequest),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_transitions() {
        assert!(RunStage::NotReady.can_transition_to(RunStage::InputsResolved));
        assert!(RunStage::InputsResolved.can_transition_to(RunStage::MessageFormatted));
        assert!(RunStage::MessageFormatted.can_transition_to(RunStage::RequestSent));
        assert!(RunStage::RequestSent.can_transition_to(RunStage::Succeeded));
    }

    #[test]
    fn test_no_skipping_or_going_back() {
        assert!(!RunStage::NotReady.can_transition_to(RunStage::MessageFormatted));
        assert!(!RunStage::RequestSent.can_transition_to(RunStage::InputsResolved));
        assert!(!RunStage::MessageFormatted.can_transition_to(RunStage::Succeeded));
    }

    #[test]
    fn test_failure_from_any_non_terminal_stage() {
        for stage in [
            RunStage::NotReady,
            RunStage::InputsResolved,
            RunStage::MessageFormatted,
            RunStage::RequestSent,
        ] {
            assert!(stage.can_transition_to(RunStage::Failed));
        }
        assert!(!RunStage::Succeeded.can_transition_to(RunStage::Failed));
        assert!(!RunStage::Failed.can_transition_to(RunStage::Failed));
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(RunStage::InputsResolved.to_string(), "inputs_resolved");
        assert_eq!(RunStage::Failed.to_string(), "failed");
    }
}
