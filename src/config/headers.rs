//! Outbound HTTP header names and values.
//!
//! Names are lowercase so they can be used directly as `HeaderName`s.
//!
//! The blacklist site checks that form posts come from its own pages, so the
//! Origin and Referer headers are derived from the configured base URL.

/// Origin header
pub const HEADER_ORIGIN: &str = "origin";
/// Referer header
pub const HEADER_REFERER: &str = "referer";
/// X-Requested-With header (marks the toggle call as an XHR)
pub const HEADER_X_REQUESTED_WITH: &str = "x-requested-with";
/// Value sent with `X-Requested-With`
pub const XML_HTTP_REQUEST: &str = "XMLHttpRequest";

/// Returns the `scheme://host[:port]` origin of a URL, without a trailing slash.
///
/// Falls back to the input with trailing slashes trimmed when it cannot be parsed.
pub fn origin_of(base_url: &str) -> String {
    match url::Url::parse(base_url) {
        Ok(parsed) => parsed.origin().ascii_serialization(),
        Err(_) => base_url.trim_end_matches('/').to_string(),
    }
}
