//! Observable state of a submission controller.

use super::{Outcome, ShortenedUrl};

/// Lifecycle phase of the current submission.
///
/// ```text
/// Idle -> Validating -> { Idle(error) | Submitting } -> { Idle(error) | Succeeded }
/// ```
///
/// `Succeeded` holds until the next submission resets the machine to `Validating`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    Idle {
        error: Option<String>,
    },
    Validating,
    Submitting,
    Succeeded(ShortenedUrl),
}

impl Default for Phase {
    fn default() -> Self {
        Self::Idle { error: None }
    }
}

impl Phase {
    /// Returns true while a submission is being validated or is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }
}

/// Snapshot of everything a front end needs to render.
///
/// `input` keeps the raw text of the latest submission, so a failed submission
/// can be corrected or retried without retyping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionState {
    pub input: String,
    pub phase: Phase,
    /// Incremented on every accepted submission.
    pub generation: u64,
}

impl SubmissionState {
    /// The current result, if the latest submission succeeded.
    pub fn result(&self) -> Option<&ShortenedUrl> {
        match &self.phase {
            Phase::Succeeded(shortened) => Some(shortened),
            _ => None,
        }
    }

    /// The error attached to the idle phase, if any.
    pub fn error(&self) -> Option<&str> {
        match &self.phase {
            Phase::Idle { error } => error.as_deref(),
            _ => None,
        }
    }

    /// Moves to the phase that follows a settled `outcome`.
    pub(crate) fn settle(&mut self, outcome: &Outcome) {
        self.phase = match outcome {
            Outcome::Success(shortened) => Phase::Succeeded(shortened.clone()),
            failure => Phase::Idle {
                error: failure.error_message(),
            },
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{REQUEST_FAILED_MESSAGE, RequestError, ValidationError};

    #[test]
    fn test_default_state_is_idle() {
        let state = SubmissionState::default();

        assert_eq!(state.phase, Phase::Idle { error: None });
        assert_eq!(state.generation, 0);
        assert!(state.input.is_empty());
        assert!(state.result().is_none());
        assert!(state.error().is_none());
    }

    #[test]
    fn test_busy_phases() {
        assert!(Phase::Validating.is_busy());
        assert!(Phase::Submitting.is_busy());
        assert!(!Phase::default().is_busy());
    }

    #[test]
    fn test_settle_success() {
        let shortened = ShortenedUrl::new(
            "https://github.com".to_string(),
            "xY9".to_string(),
            "https://mkrl.app/xY9".to_string(),
        );
        let mut state = SubmissionState {
            input: "github.com".to_string(),
            phase: Phase::Submitting,
            generation: 1,
        };

        state.settle(&Outcome::Success(shortened.clone()));

        assert_eq!(state.result(), Some(&shortened));
        assert_eq!(state.input, "github.com");
    }

    #[test]
    fn test_settle_failures_return_to_idle_with_message() {
        let mut state = SubmissionState {
            input: "   ".to_string(),
            phase: Phase::Validating,
            generation: 1,
        };
        state.settle(&Outcome::ValidationFailure(ValidationError::Empty));
        assert_eq!(state.error(), Some("Please enter a URL"));

        state.phase = Phase::Submitting;
        state.settle(&Outcome::RequestFailure(RequestError::Status(500)));
        assert_eq!(state.error(), Some(REQUEST_FAILED_MESSAGE));
        assert_eq!(state.input, "   ");
    }
}
