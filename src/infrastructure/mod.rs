//! Infrastructure layer for external integrations.
//!
//! Implements the [`crate::domain::ShorteningClient`] trait over HTTP.
//!
//! # Modules
//!
//! - [`http`] - `reqwest` client for the shortening service

pub mod http;
