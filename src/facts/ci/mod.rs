mod ci_data;
mod provider;

pub use ci_data::{BranchBuild, CiData};
pub use provider::Provider;
