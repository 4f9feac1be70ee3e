//! Application layer orchestrating the submission pipeline.
//!
//! The controller consumes the [`crate::domain::ShorteningClient`] trait and the
//! pure helpers in [`crate::utils`], and exposes a small API to front ends.
//!
//! # Available Services
//!
//! - [`services::submission_controller::UrlSubmissionController`] - Normalizes,
//!   submits and resolves short links, one submission at a time

pub mod services;
