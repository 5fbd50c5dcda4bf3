//! URL normalization for extraction requests.

/// Normalizes a requested URL before fetching.
///
/// Trims surrounding whitespace and adds an `https://` prefix if the URL does
/// not already start with `http://` or `https://`. No further validation is
/// done here: a URL that still cannot be parsed fails at fetch time like any
/// other unreachable target.
///
/// # Arguments
///
/// * `url` - The URL string as received from the caller
pub fn normalize_url(url: &str) -> String {
    let trimmed = url.trim();
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{trimmed}")
    }
}

#[cfg(test)]
mod tests {
    use super::normalize_url;

    #[test]
    fn test_normalize_url_adds_https() {
        assert_eq!(normalize_url("example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_preserves_https() {
        assert_eq!(normalize_url("https://example.com"), "https://example.com");
    }

    #[test]
    fn test_normalize_url_preserves_http() {
        assert_eq!(
            normalize_url("http://example.com/path?q=1"),
            "http://example.com/path?q=1"
        );
    }

    #[test]
    fn test_normalize_url_trims_whitespace() {
        assert_eq!(normalize_url("  example.com/page \n"), "https://example.com/page");
    }

    #[test]
    fn test_normalize_url_other_scheme_is_prefixed() {
        // Only http(s) counts as a scheme; everything else is treated as a bare host
        assert_eq!(normalize_url("ftp://example.com"), "https://ftp://example.com");
    }
}
