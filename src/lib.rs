//! # mkrl
//!
//! Client for the mkrl URL shortener: turns whatever a user typed into an absolute
//! short link, or a classified failure.
//!
//! ## Architecture
//!
//! The crate keeps the layering of the shortening service it talks to:
//!
//! - **Domain Layer** ([`domain`]) - Value objects, submission state and the client trait
//! - **Application Layer** ([`application`]) - The submission controller
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` transport
//! - **API Layer** ([`api`]) - Wire DTOs of the shortening service
//!
//! ## Pipeline
//!
//! raw text → [`utils::url_normalizer::normalize`] → `POST <base>/shorten` →
//! [`utils::short_url::reconstruct`] → [`domain::Outcome`]
//!
//! ## Quick Start
//!
//! ```bash
//! export MKRL_API_URL="https://mkrl.app/api"
//!
//! cargo run -- shorten github.com
//! ```
//!
//! ## Configuration
//!
//! Client configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod utils;

pub use error::{RequestError, SubmissionInProgress, ValidationError};

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::UrlSubmissionController;
    pub use crate::config::Config;
    pub use crate::domain::{Outcome, Phase, ShortenedUrl, ShorteningClient, SubmissionState};
    pub use crate::error::{RequestError, SubmissionInProgress, ValidationError};
    pub use crate::infrastructure::http::HttpShorteningClient;
}
