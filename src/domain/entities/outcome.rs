//! Classified result of a single submission.

use super::ShortenedUrl;
use crate::error::{RequestError, ValidationError};

/// What a submission produced.
///
/// Every submission ends in exactly one variant; nothing escapes the controller
/// as a panic or an unclassified error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Success(ShortenedUrl),
    /// Input rejected locally; no request was issued.
    ValidationFailure(ValidationError),
    /// The shortening service call failed.
    RequestFailure(RequestError),
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// The shortened URL, if the submission succeeded.
    pub fn shortened(&self) -> Option<&ShortenedUrl> {
        match self {
            Self::Success(shortened) => Some(shortened),
            _ => None,
        }
    }

    /// Message suitable for display, or `None` on success.
    ///
    /// Request failures always yield the same generic text.
    pub fn error_message(&self) -> Option<String> {
        match self {
            Self::Success(_) => None,
            Self::ValidationFailure(e) => Some(e.to_string()),
            Self::RequestFailure(e) => Some(e.user_message().to_string()),
        }
    }
}
