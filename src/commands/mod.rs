mod common;
mod projects;
mod validate;
mod watch;

pub use projects::{AllArgs, ListArgs, ShowArgs, list_projects, show_all, show_project};
pub use validate::{ValidateArgs, validate_config};
pub use watch::{WatchArgs, watch};
