//! Text extraction.
//!
//! Fetches a page, strips non-content elements and returns the remaining
//! text one trimmed line per block, together with its word count.
//!
//! Two page sources are available:
//! - **static** (default): one reqwest GET, parsed with `scraper`
//! - **browser** (`browser` feature): headless Chromium with subresources
//!   other than documents/XHR/fetch blocked

#[cfg(feature = "browser")]
mod browser;
mod fetcher;
mod text;
mod types;

use log::{debug, info};

use crate::app::normalize_url;
use crate::error_handling::ScrapeError;

#[cfg(feature = "browser")]
pub use browser::BrowserFetcher;
pub use fetcher::{PageSource, StaticFetcher};
pub use text::{count_words, flatten_text, is_non_content, visible_text};
pub use types::{ExtractedText, ExtractionResult, ExtractionStatus};

/// Fetch-and-flatten pipeline behind `/extract`.
#[derive(Debug)]
pub struct TextExtractor {
    source: PageSource,
}

impl TextExtractor {
    /// Creates an extractor over the given page source.
    pub fn new(source: PageSource) -> Self {
        Self { source }
    }

    /// Extracts the visible text of `url`.
    ///
    /// A URL without an `http://`/`https://` prefix is fetched over https.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::InvalidInput` for a blank URL (nothing is
    /// fetched), or whatever the page source reports when the fetch fails.
    pub async fn extract_text(&self, url: &str) -> Result<ExtractedText, ScrapeError> {
        if url.trim().is_empty() {
            return Err(ScrapeError::InvalidInput("URL required".to_string()));
        }
        let url = normalize_url(url);

        info!("Loading ({}): {}", self.source.name(), url);
        let html = self.source.fetch_html(&url).await?;
        debug!("Received {} bytes of HTML from {}", html.len(), url);

        info!("Extracting raw text...");
        let content = flatten_text(&visible_text(&html));
        let word_count = count_words(&content);
        debug!("Extracted {word_count} words from {url}");

        Ok(ExtractedText {
            content,
            word_count,
        })
    }
}
