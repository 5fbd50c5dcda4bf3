//! Headless Chromium page source.
//!
//! One browser process per request: launch, navigate with every subresource
//! except documents/XHR/fetch blocked, read the DOM, shut down. Page scripts
//! are disabled, so the DOM is what the server sent plus anything loaded into
//! frames by navigation.

use std::sync::Arc;

use chromiumoxide::browser::{Browser, BrowserConfig};
use chromiumoxide::cdp::browser_protocol::emulation::SetScriptExecutionDisabledParams;
use chromiumoxide::cdp::browser_protocol::fetch::{
    ContinueRequestParams, EnableParams, EventRequestPaused, FailRequestParams, RequestPattern,
};
use chromiumoxide::cdp::browser_protocol::network::{
    ErrorReason, ResourceType, SetUserAgentOverrideParams,
};
use chromiumoxide::Page;
use futures::StreamExt;
use log::{debug, info, warn};
use tokio::task::JoinHandle;

use crate::config::{BROWSER_LAUNCH_TIMEOUT, BROWSER_VIEWPORT};
use crate::error_handling::ScrapeError;
use crate::initialization::HttpSettings;

/// Chromium switches that keep the page light.
const BROWSER_ARGS: &[&str] = &[
    "--disable-images",
    "--disable-stylesheets",
    "--disable-fonts",
    "--disable-javascript",
    "--disable-dev-shm-usage",
];

/// Resource types allowed through request interception.
pub fn is_allowed_resource(resource_type: &ResourceType) -> bool {
    matches!(
        resource_type,
        ResourceType::Document | ResourceType::Xhr | ResourceType::Fetch
    )
}

fn browser_error(context: &str, e: impl std::fmt::Display) -> ScrapeError {
    ScrapeError::Browser(format!("{context}: {e}"))
}

/// Renders pages in a throwaway headless browser.
#[derive(Debug, Clone)]
pub struct BrowserFetcher {
    settings: HttpSettings,
}

impl BrowserFetcher {
    /// Creates a fetcher; no browser is started until a request arrives.
    pub fn new(settings: HttpSettings) -> Self {
        Self { settings }
    }

    /// Navigates to `url` and returns the page's HTML once the DOM has loaded.
    ///
    /// The browser is closed whether or not navigation succeeded.
    ///
    /// # Errors
    ///
    /// `ScrapeError::Timeout` if launch or navigation exceed their bounds,
    /// `ScrapeError::Browser` for any other CDP failure.
    pub async fn rendered_html(&self, url: &str) -> Result<String, ScrapeError> {
        let (width, height) = BROWSER_VIEWPORT;
        let config = BrowserConfig::builder()
            .no_sandbox()
            .window_size(width, height)
            .request_timeout(self.settings.timeout)
            .args(BROWSER_ARGS.iter().copied())
            .build()
            .map_err(|e| browser_error("invalid browser configuration", e))?;

        let (mut browser, mut handler) =
            tokio::time::timeout(BROWSER_LAUNCH_TIMEOUT, Browser::launch(config))
                .await
                .map_err(|_| ScrapeError::Timeout(BROWSER_LAUNCH_TIMEOUT))?
                .map_err(|e| browser_error("failed to launch browser", e))?;

        let handler_task = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if event.is_err() {
                    break;
                }
            }
        });

        let outcome = self.navigate(&browser, url).await;

        if let Err(e) = browser.close().await {
            warn!("Failed to close browser cleanly: {e}");
        }
        if let Err(e) = browser.wait().await {
            debug!("Browser process wait failed: {e}");
        }
        handler_task.abort();

        outcome
    }

    async fn navigate(&self, browser: &Browser, url: &str) -> Result<String, ScrapeError> {
        let page = browser
            .new_page("about:blank")
            .await
            .map_err(|e| browser_error("failed to open page", e))?;

        page.execute(SetUserAgentOverrideParams::new(
            self.settings.user_agent.clone(),
        ))
        .await
        .map_err(|e| browser_error("failed to set user agent", e))?;
        page.execute(SetScriptExecutionDisabledParams::new(true))
            .await
            .map_err(|e| browser_error("failed to disable scripts", e))?;

        let interceptor = intercept_requests(&page).await?;

        info!("Loading: {url}");
        let navigation = tokio::time::timeout(self.settings.timeout, page.goto(url)).await;
        let result = match navigation {
            Err(_) => Err(ScrapeError::Timeout(self.settings.timeout)),
            Ok(Err(e)) => Err(browser_error("navigation failed", e)),
            Ok(Ok(_)) => page
                .content()
                .await
                .map_err(|e| browser_error("failed to read page content", e)),
        };

        interceptor.abort();
        result
    }
}

/// Routes every request through `Fetch.requestPaused` and fails the ones
/// whose resource type is not allowed.
async fn intercept_requests(page: &Page) -> Result<JoinHandle<()>, ScrapeError> {
    let mut paused = page
        .event_listener::<EventRequestPaused>()
        .await
        .map_err(|e| browser_error("failed to listen for requests", e))?;

    let intercept_page = page.clone();
    let task = tokio::spawn(async move {
        while let Some(event) = paused.next().await {
            let event: Arc<EventRequestPaused> = event;
            let request_id = event.request_id.clone();
            let outcome = if is_allowed_resource(&event.resource_type) {
                intercept_page
                    .execute(ContinueRequestParams::new(request_id))
                    .await
                    .map(|_| ())
            } else {
                debug!("Blocking {:?} request {}", event.resource_type, event.request.url);
                intercept_page
                    .execute(FailRequestParams::new(
                        request_id,
                        ErrorReason::BlockedByClient,
                    ))
                    .await
                    .map(|_| ())
            };
            if let Err(e) = outcome {
                debug!("Failed to resolve intercepted request: {e}");
            }
        }
    });

    page.execute(EnableParams {
        patterns: Some(vec![RequestPattern {
            url_pattern: Some("*".to_string()),
            resource_type: None,
            request_stage: None,
        }]),
        handle_auth_requests: None,
    })
    .await
    .map_err(|e| browser_error("failed to enable request interception", e))?;

    Ok(task)
}
