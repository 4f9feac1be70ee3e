//! Client trait for the remote shortening service.

use crate::error::RequestError;
use async_trait::async_trait;

/// Interface to the service that issues short codes.
///
/// The contract is `POST <base>/shorten` with `{ "long_url": ... }`, answered by
/// `{ "short_code": ... }`.
///
/// # Implementations
///
/// - [`crate::infrastructure::http::HttpShorteningClient`] - `reqwest` implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShorteningClient: Send + Sync {
    /// Requests a short code for `long_url`.
    ///
    /// Issues exactly one request; implementations must not retry.
    ///
    /// # Errors
    ///
    /// Returns [`RequestError`] on transport failures, timeouts, non-success
    /// statuses, and response bodies without a usable `short_code`.
    async fn shorten(&self, long_url: &str) -> Result<String, RequestError>;
}
