//! Error taxonomy for the submission pipeline.
//!
//! Two failure classes reach callers through [`crate::domain::Outcome`]:
//!
//! - [`ValidationError`] - input rejected locally, before any I/O
//! - [`RequestError`] - the shortening service call failed
//!
//! [`SubmissionInProgress`] is returned instead of an outcome when the controller's
//! re-entrancy guard refuses a call.

/// User-facing message shared by every request failure.
///
/// Transport details are never shown to the user; they are kept in the
/// [`RequestError`] variant and logged.
pub const REQUEST_FAILED_MESSAGE: &str = "Failed to shorten URL. Please try again.";

/// Input rejected before any network call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter a URL")]
    Empty,

    #[error("Please enter a valid URL")]
    Invalid(String),
}

impl ValidationError {
    /// Stable machine-readable reason: `"empty"` or `"invalid"`.
    pub fn reason(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Invalid(_) => "invalid",
        }
    }
}

/// Failure of the call to the shortening service.
///
/// `Display` carries the diagnostic cause; use [`RequestError::user_message`] for
/// anything shown to a user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RequestError {
    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Request timed out")]
    Timeout,

    #[error("Shortening service responded with status {0}")]
    Status(u16),

    #[error("Malformed response body: {0}")]
    MalformedBody(String),
}

impl RequestError {
    /// Generic message safe to display, identical for every variant.
    pub fn user_message(&self) -> &'static str {
        REQUEST_FAILED_MESSAGE
    }
}

impl From<reqwest::Error> for RequestError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            Self::Timeout
        } else if e.is_decode() {
            Self::MalformedBody(e.to_string())
        } else if let Some(status) = e.status() {
            Self::Status(status.as_u16())
        } else {
            Self::Transport(e.to_string())
        }
    }
}

/// A submission is already pending on this controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("A submission is already in progress")]
pub struct SubmissionInProgress;
