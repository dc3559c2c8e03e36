//! Project list and dashboard settings.

#[expect(clippy::module_inception, reason = "the config module holds the Config type")]
mod config;
mod endpoints;

pub use config::{CONFIG_FILE_CANDIDATES, Config, MAX_PROVIDER_TIMEOUT_SECS, MAX_REFRESH_INTERVAL_MINUTES};
pub use endpoints::Endpoints;
