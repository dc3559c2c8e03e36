//! Data providers: one client per external source of project metrics.

pub mod ci;
pub mod gems;
pub mod hosting;
mod http;
mod provider_result;
mod repo_spec;

pub use provider_result::ProviderResult;
pub use repo_spec::RepoSpec;
