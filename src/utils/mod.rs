//! Pure helpers for URL processing.
//!
//! - [`url_normalizer`] - Input normalization and HTTP(S) validation
//! - [`short_url`] - Short link reconstruction and origin handling

pub mod short_url;
pub mod url_normalizer;
