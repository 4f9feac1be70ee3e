//! Core domain entities.
//!
//! - [`ShortenedUrl`] - A successfully shortened link
//! - [`Outcome`] - Classified result of one submission
//! - [`SubmissionState`] / [`Phase`] - Observable submission lifecycle

pub mod outcome;
pub mod shortened_url;
pub mod submission_state;

pub use outcome::Outcome;
pub use shortened_url::ShortenedUrl;
pub use submission_state::{Phase, SubmissionState};
