//! Domain layer: entities and the seam to the shortening service.
//!
//! # Architecture
//!
//! - [`entities`] - Value objects and the observable submission state
//! - [`shortening_client`] - Trait implemented by the infrastructure layer
//!
//! The domain layer has no dependency on HTTP or configuration; the controller in
//! [`crate::application::services`] drives it.

pub mod entities;
pub mod shortening_client;

pub use entities::{Outcome, Phase, ShortenedUrl, SubmissionState};
pub use shortening_client::ShorteningClient;

#[cfg(test)]
pub use shortening_client::MockShorteningClient;
