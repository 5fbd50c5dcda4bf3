//! Configuration constants.
//!
//! Timeouts, default endpoints and the element lists that drive text
//! extraction and blacklist scraping.

use std::time::Duration;

/// Default bind address for the API server
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default bind port for the API server
pub const DEFAULT_PORT: u16 = 5000;

/// Bound on every outbound request and browser navigation, in seconds.
/// Kept inside the 10-15s window so a dead target never pins a handler.
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// Browser process startup is bounded separately from navigation
pub const BROWSER_LAUNCH_TIMEOUT: Duration = Duration::from_secs(20);

/// Default User-Agent string for outbound requests.
///
/// The blacklist site rejects requests that do not look like a desktop
/// browser, so this is sent on every outbound call.
///
/// Users can override this via the `--user-agent` CLI flag.
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// Root of the bulk blacklist checking site
pub const DEFAULT_BLACKLIST_BASE_URL: &str = "https://www.bulkblacklist.com/";

/// Path (relative to the blacklist root) that flips the colorblind display preference
pub const COLORBLIND_TOGGLE_PATH: &str = "toggle-colorblind-mode";

/// Element id of the colorblind checkbox on the blacklist home page
pub const COLORBLIND_CHECKBOX_ID: &str = "colorblindMode";

/// Form field that carries the newline-joined IP list
pub const IPS_FORM_FIELD: &str = "ips";

/// Elements removed before text extraction.
/// These never carry readable page content.
pub const NON_CONTENT_TAGS: &[&str] = &[
    "script", "style", "noscript", "iframe", "svg", "nav", "footer", "header", "form", "img",
    "picture", "video", "audio", "canvas",
];

/// Elements that start a new line when flattening a static document to text.
pub const BLOCK_LEVEL_TAGS: &[&str] = &[
    "address",
    "article",
    "aside",
    "blockquote",
    "dd",
    "details",
    "dialog",
    "div",
    "dl",
    "dt",
    "fieldset",
    "figcaption",
    "figure",
    "h1",
    "h2",
    "h3",
    "h4",
    "h5",
    "h6",
    "hgroup",
    "hr",
    "li",
    "main",
    "ol",
    "p",
    "pre",
    "section",
    "summary",
    "table",
    "tbody",
    "tfoot",
    "thead",
    "title",
    "tr",
    "ul",
];

/// Table cells stay on their row's line, separated by a tab.
pub const TABLE_CELL_TAGS: &[&str] = &["td", "th"];

/// Elements whose text keeps its whitespace as written.
pub const PREFORMATTED_TAGS: &[&str] = &["pre", "listing", "plaintext"];

/// Headless browser viewport
pub const BROWSER_VIEWPORT: (u32, u32) = (1280, 720);
