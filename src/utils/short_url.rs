//! Short URL reconstruction and origin handling.
//!
//! The shortening service answers with a bare code; the link shown to the user is
//! built here from the service's public origin. Service origins may be
//! path-relative when the API is reverse-proxied under the page's own origin, so
//! every result is re-based onto the page origin when needed.

/// Path segment stripped from the API base to obtain the redirect origin.
pub const API_PATH_SUFFIX: &str = "/api";

/// Builds the absolute short URL for `code`.
///
/// Joins `service_origin` and `code` with a single `/`. When the joined value is
/// path-relative (the service origin is empty or starts with `/`), it is re-based
/// onto `page_origin`.
///
/// # Examples
///
/// ```
/// use mkrl::utils::short_url::reconstruct;
///
/// assert_eq!(
///     reconstruct("abc123", "https://mkrl.app", "https://mkrl.app"),
///     "https://mkrl.app/abc123"
/// );
/// assert_eq!(
///     reconstruct("abc123", "", "https://mkrl.app"),
///     "https://mkrl.app/abc123"
/// );
/// ```
pub fn reconstruct(code: &str, service_origin: &str, page_origin: &str) -> String {
    let short = format!("{}/{}", service_origin.trim_end_matches('/'), code);
    absolutize(&short, page_origin)
}

/// Re-bases a path-relative reference (`/...`) onto `page_origin`.
///
/// Absolute references are returned unchanged.
pub fn absolutize(reference: &str, page_origin: &str) -> String {
    if reference.starts_with('/') {
        format!("{}{}", page_origin.trim_end_matches('/'), reference)
    } else {
        reference.to_string()
    }
}

/// Derives the public redirect origin from the API base URL.
///
/// A trailing `/api` segment is stripped; any other base is used as-is.
///
/// - `https://mkrl.app/api` → `https://mkrl.app`
/// - `/api` → `""` (same origin as the page)
/// - `https://short.example.com` → `https://short.example.com`
pub fn derive_redirect_origin(api_base: &str) -> String {
    let base = api_base.trim_end_matches('/');
    base.strip_suffix(API_PATH_SUFFIX)
        .unwrap_or(base)
        .to_string()
}

/// Builds the absolute URL of the `POST <base>/shorten` endpoint.
pub fn shorten_endpoint(api_base: &str, page_origin: &str) -> String {
    let endpoint = format!("{}/shorten", api_base.trim_end_matches('/'));
    absolutize(&endpoint, page_origin)
}

/// Returns true if `value` is a path-relative reference such as `/api`.
pub fn is_path_relative(value: &str) -> bool {
    value.is_empty() || value.starts_with('/')
}
