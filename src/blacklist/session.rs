//! Cookie-carrying session against the blacklist site.
//!
//! A session lives for exactly one `/check-ips` request. The colorblind
//! preference is stored server-side against the session cookie, so the
//! toggle and the form post must go through the same client.

use std::sync::LazyLock;

use log::{debug, error};
use reqwest::header::{HeaderMap, HeaderValue};
use scraper::{Html, Selector};
use url::Url;

use crate::config::{
    origin_of, COLORBLIND_CHECKBOX_ID, COLORBLIND_TOGGLE_PATH, HEADER_ORIGIN, HEADER_REFERER,
    HEADER_X_REQUESTED_WITH, IPS_FORM_FIELD, XML_HTTP_REQUEST,
};
use crate::error_handling::{InitializationError, ScrapeError};
use crate::initialization::{init_session_client, HttpSettings};
use crate::utils::compile_selector;

static CHECKBOX_SELECTOR: LazyLock<Selector> = LazyLock::new(|| {
    compile_selector(
        &format!("input#{COLORBLIND_CHECKBOX_ID}"),
        "colorblind checkbox",
    )
});

/// Returns true if the page's colorblind checkbox carries a `checked` attribute.
///
/// A page without the checkbox counts as unchecked.
pub fn colorblind_checkbox_checked(html: &str) -> bool {
    let document = Html::parse_document(html);
    document
        .select(&CHECKBOX_SELECTOR)
        .next()
        .map(|input| input.value().attr("checked").is_some())
        .unwrap_or(false)
}

/// Parses the configured site root and makes its path end in `/`.
///
/// # Errors
///
/// `InitializationError::BlacklistUrlError` unless `raw` is an absolute
/// http(s) URL.
pub fn site_root(raw: &str) -> Result<Url, InitializationError> {
    let rejected = |reason: String| InitializationError::BlacklistUrlError {
        url: raw.to_string(),
        reason,
    };
    let mut url = Url::parse(raw.trim()).map_err(|e| rejected(e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(rejected(format!("unsupported scheme '{}'", url.scheme())));
    }
    // Url::join replaces the last segment unless the path ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// One request's worth of conversation with the blacklist site.
pub struct BlacklistSession {
    client: reqwest::Client,
    base_url: Url,
    origin: String,
}

impl BlacklistSession {
    /// Opens a session with an empty cookie jar against `base_url`
    /// (as returned by [`site_root`]).
    ///
    /// # Errors
    ///
    /// `ScrapeError::Fetch` if the client cannot be built.
    pub fn open(settings: &HttpSettings, base_url: &Url) -> Result<Self, ScrapeError> {
        let origin = origin_of(base_url.as_str());
        let client = init_session_client(settings)?;
        debug!("Opened blacklist session for {base_url}");
        Ok(Self {
            client,
            base_url: base_url.clone(),
            origin,
        })
    }

    /// Headers the site expects on state-changing requests.
    fn same_origin_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        if let Ok(origin) = HeaderValue::from_str(&self.origin) {
            headers.insert(HEADER_ORIGIN, origin);
        }
        if let Ok(referer) = HeaderValue::from_str(self.base_url.as_str()) {
            headers.insert(HEADER_REFERER, referer);
        }
        headers
    }

    fn toggle_url(&self) -> Result<Url, ScrapeError> {
        self.base_url
            .join(COLORBLIND_TOGGLE_PATH)
            .map_err(|e| ScrapeError::Parse(format!("Invalid toggle URL: {e}")))
    }

    /// Reads the current colorblind preference from the home page.
    ///
    /// Any failure is logged and reported as "off".
    pub async fn colorblind_enabled(&self) -> bool {
        match self.fetch_home().await {
            Ok(body) => colorblind_checkbox_checked(&body),
            Err(e) => {
                error!("Error checking colorblind mode status: {e}");
                false
            }
        }
    }

    async fn fetch_home(&self) -> Result<String, ScrapeError> {
        let response = self
            .client
            .get(self.base_url.clone())
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Makes the remote colorblind preference match `desired`.
    ///
    /// Posts to the toggle endpoint only when the current state differs.
    ///
    /// # Errors
    ///
    /// `ScrapeError::Fetch` if the toggle request fails or answers non-2xx.
    pub async fn sync_colorblind(&self, desired: bool) -> Result<(), ScrapeError> {
        let current = self.colorblind_enabled().await;
        if current == desired {
            debug!("Colorblind mode already {}", if desired { "on" } else { "off" });
            return Ok(());
        }

        let mut headers = self.same_origin_headers();
        headers.insert(
            HEADER_X_REQUESTED_WITH,
            HeaderValue::from_static(XML_HTTP_REQUEST),
        );
        self.client
            .post(self.toggle_url()?)
            .headers(headers)
            .send()
            .await?
            .error_for_status()?;
        debug!("Toggled colorblind mode to {desired}");
        Ok(())
    }

    /// Posts the newline-joined IP list and returns the results page.
    ///
    /// # Errors
    ///
    /// `ScrapeError::Fetch` on transport failure or a non-2xx answer.
    pub async fn submit(&self, ips: &[String]) -> Result<String, ScrapeError> {
        let form = [(IPS_FORM_FIELD, ips.join("\n"))];
        let response = self
            .client
            .post(self.base_url.clone())
            .headers(self.same_origin_headers())
            .form(&form)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.text().await?)
    }

    /// Ends the session; the cookie jar goes with the client.
    pub fn close(self) {
        debug!("Closing blacklist session for {}", self.base_url);
    }
}
