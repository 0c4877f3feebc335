//! Target URL preparation and validation.
//!
//! User input is accepted with or without a scheme. Scheme-less input gets
//! `https://` prepended, then the result must parse as an absolute HTTP(S)
//! URL with a well-formed host.

use url::{Host, Url};

/// Scheme prepended to input that has none.
pub const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Errors that can occur while preparing a target URL.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UrlError {
    #[error("URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL has no valid host")]
    InvalidHost,
}

/// Prepares a user-supplied URL for storage.
///
/// # Rules
///
/// 1. Empty input is rejected
/// 2. Input not starting with `http://` or `https://` gets `https://` prepended
/// 3. Whitespace anywhere is rejected
/// 4. The result must parse with an `http`/`https` scheme
/// 5. The host must be an IP address or a dotted domain name
///
/// The returned string is the prefixed input as given, not the re-serialized
/// URL, so `example.com` is stored as `https://example.com`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(prepare_url("example.com").unwrap(), "https://example.com");
/// assert_eq!(prepare_url("http://example.com/a").unwrap(), "http://example.com/a");
/// assert!(prepare_url("not a url").is_err());
/// ```
pub fn prepare_url(input: &str) -> Result<String, UrlError> {
    if input.is_empty() {
        return Err(UrlError::Empty);
    }

    let candidate = if input.starts_with("http://") || input.starts_with("https://") {
        input.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{input}")
    };

    validate_url(&candidate)?;

    Ok(candidate)
}

/// Checks that `input` is a structurally valid absolute HTTP(S) URL.
pub fn validate_url(input: &str) -> Result<(), UrlError> {
    if input.chars().any(char::is_whitespace) {
        return Err(UrlError::InvalidFormat(
            "URL must not contain whitespace".to_string(),
        ));
    }

    // The stored string is sent back verbatim in `Location`.
    if input.chars().any(char::is_control) {
        return Err(UrlError::InvalidFormat(
            "URL must not contain control characters".to_string(),
        ));
    }

    let url = Url::parse(input).map_err(|e| UrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(UrlError::UnsupportedProtocol),
    }

    match url.host() {
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => Ok(()),
        Some(Host::Domain(domain)) if is_valid_domain(domain) => Ok(()),
        _ => Err(UrlError::InvalidHost),
    }
}

/// A domain needs at least two labels, each 1-63 characters of letters,
/// digits and inner hyphens. The last label must not be all digits.
fn is_valid_domain(domain: &str) -> bool {
    let domain = domain.strip_suffix('.').unwrap_or(domain);
    if domain.len() > 253 {
        return false;
    }

    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 {
        return false;
    }

    let labels_ok = labels.iter().all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-')
    });

    let tld_ok = labels
        .last()
        .is_some_and(|tld| !tld.chars().all(|c| c.is_ascii_digit()));

    labels_ok && tld_ok
}
