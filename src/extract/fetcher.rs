//! Page sources for the text extractor.
//!
//! `PageSource` is dispatched by enum rather than a trait object: there are
//! exactly two renderers and one of them only exists with the `browser`
//! feature.

use log::debug;

use crate::config::Renderer;
use crate::error_handling::{InitializationError, ScrapeError};
use crate::initialization::{init_client, HttpSettings};

#[cfg(feature = "browser")]
use super::browser::BrowserFetcher;

/// Plain HTTP GET of the page.
#[derive(Debug, Clone)]
pub struct StaticFetcher {
    client: reqwest::Client,
}

impl StaticFetcher {
    /// Wraps an already configured client.
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Fetches `url` and returns the response body.
    ///
    /// # Errors
    ///
    /// Returns `ScrapeError::Fetch` on timeout, connection failure, non-2xx
    /// status, or an unreadable body.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        debug!(
            "Fetched {} ({}), final url {}",
            url,
            response.status(),
            response.url()
        );
        Ok(response.text().await?)
    }
}

/// Where `/extract` gets its HTML from.
#[derive(Debug)]
pub enum PageSource {
    /// reqwest GET; no JavaScript
    Static(StaticFetcher),
    /// Headless Chromium navigation
    #[cfg(feature = "browser")]
    Browser(BrowserFetcher),
}

impl PageSource {
    /// Builds the source selected in configuration.
    ///
    /// # Errors
    ///
    /// Fails if the HTTP client cannot be built, or if `Renderer::Browser` is
    /// requested from a build without the `browser` feature.
    pub fn new(renderer: Renderer, settings: &HttpSettings) -> Result<Self, InitializationError> {
        match renderer {
            Renderer::Static => Ok(PageSource::Static(StaticFetcher::new(init_client(settings)?))),
            #[cfg(feature = "browser")]
            Renderer::Browser => Ok(PageSource::Browser(BrowserFetcher::new(settings.clone()))),
            #[cfg(not(feature = "browser"))]
            Renderer::Browser => Err(InitializationError::RendererError(
                "the browser renderer requires building with `--features browser`".to_string(),
            )),
        }
    }

    /// Name used in log lines.
    pub fn name(&self) -> &'static str {
        match self {
            PageSource::Static(_) => "static",
            #[cfg(feature = "browser")]
            PageSource::Browser(_) => "browser",
        }
    }

    /// Returns the page's HTML (as served, or as rendered by the browser).
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScrapeError> {
        match self {
            PageSource::Static(fetcher) => fetcher.fetch_html(url).await,
            #[cfg(feature = "browser")]
            PageSource::Browser(fetcher) => fetcher.rendered_html(url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn test_static_source_builds() {
        let settings = HttpSettings::from(&Config::default());
        let source = PageSource::new(Renderer::Static, &settings).expect("static source");
        assert_eq!(source.name(), "static");
    }

    #[cfg(not(feature = "browser"))]
    #[test]
    fn test_browser_source_requires_feature() {
        let settings = HttpSettings::from(&Config::default());
        let err = PageSource::new(Renderer::Browser, &settings).unwrap_err();
        assert!(matches!(err, InitializationError::RendererError(_)));
        assert!(err.to_string().contains("--features browser"));
    }
}
