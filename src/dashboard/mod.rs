//! The project cache: registry, fetch orchestration, periodic refresh, and lookups.

#[expect(clippy::module_inception, reason = "the dashboard module holds the Dashboard type")]
mod dashboard;
mod fetcher;
mod project;
mod record;
pub mod registry;
mod scheduler;

pub use dashboard::Dashboard;
pub use fetcher::{Fetcher, Source};
pub use project::{DEFAULT_BRANCH, Project};
pub use record::{MetricsRecord, ProjectSnapshot, RecordState};
pub use scheduler::RefreshScheduler;
