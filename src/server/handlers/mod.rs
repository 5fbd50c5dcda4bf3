//! API server HTTP handlers.

mod check_ips;
mod extract;
mod info;

pub use check_ips::check_ips_handler;
pub use extract::extract_handler;
pub use info::{health_handler, home_handler};
