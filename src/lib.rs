//! project-dashboard crate
//!
//! Aggregates per-project health metrics from GitHub, RubyGems and Travis CI into a periodically
//! refreshed in-memory cache. The binary in this package is a thin CLI over [`dashboard::Dashboard`].

/// Result type alias using `ohno::AppError` as the default error type.
pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;

pub mod config;

pub mod dashboard;

pub mod facts;

pub mod reports;
