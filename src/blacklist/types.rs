//! Blacklist check data structures.

use std::fmt;

use serde::Serialize;

/// Normalized value of a listing indicator cell (SpamCop, Spamhaus, Barracuda).
///
/// Serialized as a plain string: `"Yes"`, `"No"`, or the cell text verbatim
/// when the site renders something unexpected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum ListingFlag {
    /// The IP is listed
    Yes,
    /// The IP is not listed
    No,
    /// Unrecognized cell text, passed through trimmed
    Other(String),
}

impl ListingFlag {
    /// Maps an indicator cell's text to a flag.
    ///
    /// The checkmark and case-insensitive "yes" mean listed; an empty cell
    /// and case-insensitive "no" mean not listed.
    pub fn from_cell(text: &str) -> Self {
        let text = text.trim();
        if text == "✓" || text.eq_ignore_ascii_case("yes") {
            ListingFlag::Yes
        } else if text.is_empty() || text.eq_ignore_ascii_case("no") {
            ListingFlag::No
        } else {
            ListingFlag::Other(text.to_string())
        }
    }
}

impl fmt::Display for ListingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingFlag::Yes => f.write_str("Yes"),
            ListingFlag::No => f.write_str("No"),
            ListingFlag::Other(text) => f.write_str(text),
        }
    }
}

impl From<ListingFlag> for String {
    fn from(flag: ListingFlag) -> Self {
        flag.to_string()
    }
}

/// One row of the blacklist results table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpCheckRecord {
    /// IP address as echoed by the site
    pub ip: String,
    /// Reverse-DNS hostname reported by the site
    pub ptr_record: String,
    /// Listed on SpamCop
    pub spamcop: ListingFlag,
    /// Listed on Spamhaus
    pub spamhaus: ListingFlag,
    /// Listed on Barracuda
    pub barracuda: ListingFlag,
    /// Sender Score reputation value
    pub sender_score: String,
    /// SenderBase reputation value
    pub sender_base: String,
    /// Extra API column, only present on wide tables
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<String>,
}

/// Body of `POST /check-ips` after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IpCheckRequest {
    /// IP addresses in submission order
    pub ips: Vec<String>,
    /// Ask the site to render indicators in colorblind mode first
    pub colorblind_mode: bool,
}

/// Outcome flag of a blacklist check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    /// The table was parsed
    Success,
    /// Validation, fetch or parse failed
    Error,
}

/// JSON body returned by `/check-ips`.
#[derive(Debug, Clone, Serialize)]
pub struct IpCheckResult {
    /// success or error
    pub status: CheckStatus,
    /// Parsed rows (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<IpCheckRecord>>,
    /// Number of parsed rows (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ip_count: Option<usize>,
    /// Echo of the requested colorblind mode (success only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorblind_mode: Option<bool>,
    /// Failure message (error only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Seconds since the request arrived
    pub processing_time: f64,
}

impl IpCheckResult {
    /// Successful check; `ip_count` counts retained rows only.
    pub fn success(records: Vec<IpCheckRecord>, colorblind_mode: bool, processing_time: f64) -> Self {
        Self {
            status: CheckStatus::Success,
            ip_count: Some(records.len()),
            results: Some(records),
            colorblind_mode: Some(colorblind_mode),
            message: None,
            processing_time,
        }
    }

    /// Failed check; carries no results.
    pub fn error(message: impl Into<String>, processing_time: f64) -> Self {
        Self {
            status: CheckStatus::Error,
            results: None,
            ip_count: None,
            colorblind_mode: None,
            message: Some(message.into()),
            processing_time,
        }
    }
}
