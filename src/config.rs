//! Client configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the first
//! submission.
//!
//! ## Deployment Shapes
//!
//! ### Same-origin (reverse-proxied API)
//!
//! ```bash
//! export MKRL_API_URL="/api"
//! export MKRL_PAGE_ORIGIN="https://mkrl.app"
//! ```
//!
//! Requests go to `https://mkrl.app/api/shorten` and short links are built on
//! `https://mkrl.app`.
//!
//! ### Separate API host
//!
//! ```bash
//! export MKRL_API_URL="https://api.example.com/v1"
//! export MKRL_REDIRECT_ORIGIN="https://s.example.com"
//! ```
//!
//! If `MKRL_REDIRECT_ORIGIN` is not set, it is derived from `MKRL_API_URL` by
//! stripping a trailing `/api` segment.
//!
//! ## Optional Variables
//!
//! - `MKRL_API_URL` - API base (default: `http://localhost:8000/api`)
//! - `MKRL_REDIRECT_ORIGIN` - Public origin of short links
//! - `MKRL_PAGE_ORIGIN` - Origin for relative bases (required if `MKRL_API_URL` is relative)
//! - `MKRL_REQUEST_TIMEOUT_SECS` - Request timeout (default: 10, max: 300)
//! - `MKRL_USER_AGENT` - User agent header (default: `mkrl/<version>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::Result;
use std::env;
use std::time::Duration;
use url::Url;

use crate::infrastructure::http::DEFAULT_USER_AGENT;
use crate::utils::short_url::{derive_redirect_origin, is_path_relative, shorten_endpoint};
use crate::utils::url_normalizer::is_valid_http_url;

/// API base used when `MKRL_API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

/// Client configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the shortening API, absolute or path-relative (`/api`).
    pub api_base_url: String,
    /// Explicit public origin for short links. Derived from `api_base_url` when unset.
    pub redirect_origin: Option<String>,
    /// Origin of the page running the client. Used to absolutize relative bases.
    pub page_origin: Option<String>,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub log_level: String,
    pub log_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            redirect_origin: None,
            page_origin: None,
            request_timeout_secs: 10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Unset or unparsable values fall back to defaults; call
    /// [`Config::validate`] before use.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let api_base_url = non_empty_var("MKRL_API_URL").unwrap_or(defaults.api_base_url);
        let redirect_origin = non_empty_var("MKRL_REDIRECT_ORIGIN");
        let page_origin = non_empty_var("MKRL_PAGE_ORIGIN");

        let request_timeout_secs = env::var("MKRL_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(defaults.request_timeout_secs);

        let user_agent = non_empty_var("MKRL_USER_AGENT").unwrap_or(defaults.user_agent);
        let log_level = env::var("RUST_LOG").unwrap_or(defaults.log_level);
        let log_format = env::var("LOG_FORMAT").unwrap_or(defaults.log_format);

        Self {
            api_base_url,
            redirect_origin,
            page_origin,
            request_timeout_secs,
            user_agent,
            log_level,
            log_format,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `api_base_url` is neither an absolute HTTP(S) URL nor a path starting with `/`
    /// - a relative base or redirect origin is used without `page_origin`
    /// - `page_origin` or an absolute `redirect_origin` is not an HTTP(S) URL
    /// - `request_timeout_secs` is outside `1..=300`
    /// - `log_format` is not `text` or `json`
    pub fn validate(&self) -> Result<()> {
        if self.api_base_url.is_empty() {
            anyhow::bail!("MKRL_API_URL must not be empty");
        }

        if !is_path_relative(&self.api_base_url) && !is_valid_http_url(&self.api_base_url) {
            anyhow::bail!(
                "MKRL_API_URL must be an http(s) URL or a path starting with '/', got '{}'",
                self.api_base_url
            );
        }

        if let Some(ref page_origin) = self.page_origin
            && !is_valid_http_url(page_origin)
        {
            anyhow::bail!(
                "MKRL_PAGE_ORIGIN must be an absolute http(s) URL, got '{}'",
                page_origin
            );
        }

        if let Some(ref redirect_origin) = self.redirect_origin
            && !is_path_relative(redirect_origin)
            && !is_valid_http_url(redirect_origin)
        {
            anyhow::bail!(
                "MKRL_REDIRECT_ORIGIN must be an http(s) URL or a path starting with '/', got '{}'",
                redirect_origin
            );
        }

        if self.page_origin.is_none() {
            if is_path_relative(&self.api_base_url) {
                anyhow::bail!(
                    "MKRL_PAGE_ORIGIN must be set when MKRL_API_URL is relative ('{}')",
                    self.api_base_url
                );
            }
            if is_path_relative(&self.redirect_origin()) {
                anyhow::bail!("MKRL_PAGE_ORIGIN must be set when the redirect origin is relative");
            }
        }

        if self.request_timeout_secs == 0 || self.request_timeout_secs > 300 {
            anyhow::bail!(
                "MKRL_REQUEST_TIMEOUT_SECS must be between 1 and 300, got {}",
                self.request_timeout_secs
            );
        }

        if self.user_agent.trim().is_empty() {
            anyhow::bail!("MKRL_USER_AGENT must not be blank");
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        Ok(())
    }

    /// Public origin short links are built on.
    ///
    /// Uses `redirect_origin` when set, otherwise strips `/api` from the API base.
    pub fn redirect_origin(&self) -> String {
        match self.redirect_origin {
            Some(ref origin) => origin.trim_end_matches('/').to_string(),
            None => derive_redirect_origin(&self.api_base_url),
        }
    }

    /// Origin used to absolutize relative references.
    ///
    /// Falls back to the origin of an absolute API base.
    pub fn page_origin(&self) -> String {
        if let Some(ref origin) = self.page_origin {
            return origin.trim_end_matches('/').to_string();
        }

        Url::parse(&self.api_base_url)
            .map(|url| url.origin().ascii_serialization())
            .unwrap_or_default()
    }

    /// Absolute URL of the shorten endpoint.
    pub fn shorten_endpoint(&self) -> String {
        shorten_endpoint(&self.api_base_url, &self.page_origin())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: [&str; 7] = [
        "MKRL_API_URL",
        "MKRL_REDIRECT_ORIGIN",
        "MKRL_PAGE_ORIGIN",
        "MKRL_REQUEST_TIMEOUT_SECS",
        "MKRL_USER_AGENT",
        "RUST_LOG",
        "LOG_FORMAT",
    ];

    fn clear_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();

        assert!(config.validate().is_ok());
        assert_eq!(config.shorten_endpoint(), "http://localhost:8000/api/shorten");
        assert_eq!(config.redirect_origin(), "http://localhost:8000");
        assert_eq!(config.page_origin(), "http://localhost:8000");
    }

    #[test]
    fn test_config_validation() {
        let mut config = Config::default();

        config.api_base_url = "mkrl.app/api".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "ftp://mkrl.app/api".to_string();
        assert!(config.validate().is_err());

        config.api_base_url = "https://mkrl.app/api".to_string();
        assert!(config.validate().is_ok());

        config.request_timeout_secs = 0;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 301;
        assert!(config.validate().is_err());

        config.request_timeout_secs = 30;

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.page_origin = Some("not a url".to_string());
        assert!(config.validate().is_err());

        config.page_origin = None;
        config.redirect_origin = Some("javascript:alert(1)".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_relative_base_requires_page_origin() {
        let mut config = Config {
            api_base_url: "/api".to_string(),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        config.page_origin = Some("https://mkrl.app/".to_string());
        assert!(config.validate().is_ok());
        assert_eq!(config.shorten_endpoint(), "https://mkrl.app/api/shorten");
        assert_eq!(config.redirect_origin(), "");
        assert_eq!(config.page_origin(), "https://mkrl.app");
    }

    #[test]
    fn test_relative_redirect_origin_requires_page_origin() {
        let mut config = Config {
            api_base_url: "https://api.mkrl.app".to_string(),
            redirect_origin: Some("/s".to_string()),
            ..Config::default()
        };
        assert!(config.validate().is_err());

        config.page_origin = Some("https://mkrl.app".to_string());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_redirect_origin_wins() {
        let config = Config {
            api_base_url: "https://api.example.com/v1".to_string(),
            redirect_origin: Some("https://s.example.com/".to_string()),
            ..Config::default()
        };

        assert_eq!(config.redirect_origin(), "https://s.example.com");
        assert_eq!(config.page_origin(), "https://api.example.com");
        assert_eq!(config.shorten_endpoint(), "https://api.example.com/v1/shorten");
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();

        let config = Config::from_env();

        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.redirect_origin.is_none());
        assert!(config.page_origin.is_none());
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.log_format, "text");
    }

    #[test]
    #[serial]
    fn test_from_env_reads_variables() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("MKRL_API_URL", "/api");
            env::set_var("MKRL_PAGE_ORIGIN", "https://mkrl.app");
            env::set_var("MKRL_REQUEST_TIMEOUT_SECS", "3");
            env::set_var("MKRL_USER_AGENT", "mkrl-test");
            env::set_var("LOG_FORMAT", "json");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.api_base_url, "/api");
        assert_eq!(config.page_origin.as_deref(), Some("https://mkrl.app"));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.user_agent, "mkrl-test");
        assert_eq!(config.log_format, "json");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_ignores_blank_and_unparsable_values() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MKRL_API_URL", "   ");
            env::set_var("MKRL_REDIRECT_ORIGIN", "");
            env::set_var("MKRL_REQUEST_TIMEOUT_SECS", "soon");
        }

        let config = Config::from_env();

        assert_eq!(config.api_base_url, DEFAULT_API_URL);
        assert!(config.redirect_origin.is_none());
        assert_eq!(config.request_timeout_secs, 10);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_relative_base_without_page_origin() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("MKRL_API_URL", "/api");
        }

        assert!(load_from_env().is_err());

        clear_env();
    }
}
