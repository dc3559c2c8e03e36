use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Status of the last CI build of a branch, as reported by Travis CI.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CiData {
    pub branch: BranchBuild,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct BranchBuild {
    pub id: u64,
    pub number: String,

    /// Build state such as `passed`, `failed`, `errored` or `started`.
    pub state: String,

    #[serde(default)]
    pub duration: Option<u64>,

    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub finished_at: Option<DateTime<Utc>>,
}
