//! IP blacklist checking.
//!
//! Submits a batch of IPs to the bulk blacklist site and turns its results
//! table into records. Per request:
//! 1. open a session (fresh cookie jar)
//! 2. if colorblind mode was requested, sync the site's display preference
//!    (failure is logged and ignored)
//! 3. post the newline-joined IP list
//! 4. parse the results table
//! 5. close the session, whatever happened above

mod session;
mod table;
mod types;

use log::{info, warn};
use url::Url;

use crate::error_handling::{InitializationError, ScrapeError};
use crate::initialization::HttpSettings;

pub use session::{colorblind_checkbox_checked, site_root, BlacklistSession};
pub use table::{column_position, parse_results_table, parse_row, Cell, Column, COLUMNS, MIN_CELLS};
pub use types::{CheckStatus, IpCheckRecord, IpCheckRequest, IpCheckResult, ListingFlag};

/// Entry point for `/check-ips`.
#[derive(Debug, Clone)]
pub struct BlacklistChecker {
    settings: HttpSettings,
    base_url: Url,
}

impl BlacklistChecker {
    /// Creates a checker against the site rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// `InitializationError::BlacklistUrlError` if `base_url` is not an
    /// absolute http(s) URL.
    pub fn new(settings: HttpSettings, base_url: &str) -> Result<Self, InitializationError> {
        Ok(Self {
            settings,
            base_url: site_root(base_url)?,
        })
    }

    /// Root URL of the blacklist site, always ending in `/`.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Checks `ips` and returns one record per retained table row.
    ///
    /// # Errors
    ///
    /// - `ScrapeError::InvalidInput` for an empty list (nothing is sent)
    /// - `ScrapeError::Fetch` if the form post fails
    /// - `ScrapeError::ResultsTableNotFound` / `NoDataRows` if the page has
    ///   no usable table
    pub async fn check_ips(
        &self,
        ips: &[String],
        colorblind_mode: bool,
    ) -> Result<Vec<IpCheckRecord>, ScrapeError> {
        if ips.is_empty() {
            return Err(ScrapeError::InvalidInput(
                "No IP addresses provided".to_string(),
            ));
        }

        let session = BlacklistSession::open(&self.settings, &self.base_url)?;
        let outcome = Self::run(&session, ips, colorblind_mode).await;
        session.close();
        outcome
    }

    async fn run(
        session: &BlacklistSession,
        ips: &[String],
        colorblind_mode: bool,
    ) -> Result<Vec<IpCheckRecord>, ScrapeError> {
        if colorblind_mode {
            info!("Setting colorblind mode as requested...");
            if let Err(e) = session.sync_colorblind(true).await {
                warn!("Could not set colorblind mode: {e}");
            }
        }

        info!("Submitting {} IPs for checking...", ips.len());
        let body = session.submit(ips).await?;
        let records = parse_results_table(&body)?;
        info!("Parsed {} result rows for {} submitted IPs", records.len(), ips.len());
        Ok(records)
    }
}
