//! CSS selector utilities.

use scraper::Selector;

/// Selector that can never match; used when a static selector fails to compile.
const NEVER_MATCH: &str = "*:not(*)";

/// Compiles a CSS selector, falling back to one that matches nothing.
///
/// Selectors in this crate are string constants, so a parse failure is a
/// programming error. It is logged instead of panicking so a request sees
/// "element not found" rather than a crashed worker.
///
/// # Arguments
///
/// * `css` - The CSS selector string to parse
/// * `context` - What the selector is for (included in the error log)
pub fn compile_selector(css: &str, context: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| {
        log::error!("Failed to parse CSS selector '{css}' for {context}: {e}");
        Selector::parse(NEVER_MATCH)
            .expect("fallback selector '*:not(*)' always parses - this is a programming error")
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    #[test]
    fn test_compile_selector_valid() {
        let selector = compile_selector("table.table", "test");
        let doc = Html::parse_document(r#"<table class="table"><tr><td>x</td></tr></table>"#);
        assert_eq!(doc.select(&selector).count(), 1);
    }

    #[test]
    fn test_compile_selector_invalid_matches_nothing() {
        let selector = compile_selector("table[", "test");
        let doc = Html::parse_document(r#"<table class="table"></table>"#);
        assert_eq!(doc.select(&selector).count(), 0);
    }
}
