//! Shortened URL value object.

use serde::Serialize;

/// Result of a successful shortening round trip.
///
/// Immutable once built: every submission produces a fresh value and the previous
/// one is discarded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortenedUrl {
    original: String,
    code: String,
    short: String,
}

impl ShortenedUrl {
    /// Creates a new ShortenedUrl instance.
    ///
    /// `short` must already be absolute; see [`crate::utils::short_url::reconstruct`].
    pub fn new(original: String, code: String, short: String) -> Self {
        Self {
            original,
            code,
            short,
        }
    }

    /// The normalized URL that was submitted.
    pub fn original(&self) -> &str {
        &self.original
    }

    /// Opaque code issued by the shortening service.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Absolute short link, ready to follow or copy.
    pub fn short(&self) -> &str {
        &self.short
    }
}
