//! DTOs for the shortening service contract.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// Characters a short code may contain to be embedded in a link unescaped.
static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").expect("short code regex is valid"));

/// Body of `POST <base>/shorten`.
#[derive(Debug, Serialize)]
pub struct ShortenRequest<'a> {
    pub long_url: &'a str,
}

/// Successful response of `POST <base>/shorten`.
///
/// Fields other than `short_code` are ignored.
#[derive(Debug, Deserialize)]
pub struct ShortenResponse {
    pub short_code: String,
}

impl ShortenResponse {
    /// Returns true if the code is a non-empty URL-safe token.
    pub fn has_valid_code(&self) -> bool {
        SHORT_CODE_REGEX.is_match(&self.short_code)
    }
}
