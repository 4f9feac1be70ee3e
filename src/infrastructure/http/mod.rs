//! HTTP transport to the shortening service.

mod reqwest_client;

pub use reqwest_client::{DEFAULT_USER_AGENT, HttpShorteningClient};
