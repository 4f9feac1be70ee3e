//! Input normalization and validation for submitted URLs.
//!
//! Turns free-form user text into an absolute `http`/`https` URL, or rejects it
//! before anything touches the network.

use crate::error::ValidationError;
use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Normalizes raw user input into an absolute HTTP(S) URL.
///
/// # Normalization Rules
///
/// 1. **Whitespace**: Leading and trailing whitespace is trimmed
/// 2. **Scheme**: Input without an `http://`/`https://` prefix (any case) gets `https://`
/// 3. **Validation**: The result must parse as a URL with scheme `http` or `https`
///    and a non-empty host
///
/// The accepted string is returned as typed (after trimming and prefixing), so
/// normalizing an already-normalized URL returns it unchanged.
///
/// # Security
///
/// Input that carries any other scheme (`ftp://`, `javascript:`, `data:`,
/// `mailto:`, ...) is rejected instead of being prefixed, as is an `http:` or
/// `https:` scheme not followed by `//`. Schemeless credentials
/// (`user:pass@host`) read as a scheme and are rejected too.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`] when the trimmed input is empty.
/// Returns [`ValidationError::Invalid`] for malformed URLs and non-HTTP(S) schemes.
///
/// # Examples
///
/// ```
/// use mkrl::utils::url_normalizer::normalize;
///
/// assert_eq!(normalize("  example.com ").unwrap(), "https://example.com");
/// assert_eq!(normalize("HTTP://Example.com/a").unwrap(), "HTTP://Example.com/a");
/// assert!(normalize("ftp://example.com").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, ValidationError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::Empty);
    }

    let candidate = match explicit_scheme(trimmed) {
        _ if has_http_prefix(trimmed) => trimmed.to_string(),
        Some(scheme) if is_http_scheme(scheme) => {
            return Err(ValidationError::Invalid(format!(
                "missing '//' after scheme '{scheme}'"
            )));
        }
        Some(scheme) => {
            return Err(ValidationError::Invalid(format!(
                "unsupported scheme '{scheme}'"
            )));
        }
        None => format!("{DEFAULT_SCHEME_PREFIX}{trimmed}"),
    };

    validate(&candidate)?;
    Ok(candidate)
}

/// Returns true if `input` parses as an absolute URL with an HTTP(S) scheme and a host.
pub fn is_valid_http_url(input: &str) -> bool {
    validate(input).is_ok()
}

fn validate(input: &str) -> Result<(), ValidationError> {
    let url = Url::parse(input).map_err(|e| ValidationError::Invalid(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ValidationError::Invalid(format!(
                "unsupported scheme '{other}'"
            )));
        }
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(ValidationError::Invalid("missing host".to_string())),
    }
}

fn has_http_prefix(input: &str) -> bool {
    let lower = input
        .get(..DEFAULT_SCHEME_PREFIX.len())
        .unwrap_or(input)
        .to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

fn is_http_scheme(scheme: &str) -> bool {
    scheme.eq_ignore_ascii_case("http") || scheme.eq_ignore_ascii_case("https")
}

/// Extracts a leading `scheme:` if the input carries one.
///
/// `host:port` forms (`localhost:3000`, `example.com:8080/path`) are not schemes.
fn explicit_scheme(input: &str) -> Option<&str> {
    let (scheme, rest) = input.split_once(':')?;

    let mut chars = scheme.chars();
    let starts_alpha = chars.next().is_some_and(|c| c.is_ascii_alphabetic());
    let scheme_chars = chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
    if !starts_alpha || !scheme_chars {
        return None;
    }

    if rest.starts_with("//") {
        return Some(scheme);
    }

    let port = rest.split(['/', '?', '#']).next().unwrap_or_default();
    if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) {
        None
    } else {
        Some(scheme)
    }
}
