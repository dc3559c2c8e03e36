use crate::facts::RepoSpec;
use serde::Serialize;

/// Branch assumed for every tracked repository.
pub const DEFAULT_BRANCH: &str = "master";

/// Identity of a tracked project. Immutable once the registry has been loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Project {
    name: String,
    nwo: String,
    branch: String,
    gem_name: String,
}

impl Project {
    #[must_use]
    pub fn new(name: impl Into<String>, nwo: impl Into<String>, branch: impl Into<String>, gem_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            nwo: nwo.into(),
            branch: branch.into(),
            gem_name: gem_name.into(),
        }
    }

    /// A project named after its repository, on the default branch, publishing a gem of the same name.
    #[must_use]
    pub fn from_repo_spec(repo_spec: &RepoSpec) -> Self {
        Self::new(repo_spec.repo(), repo_spec.to_string(), DEFAULT_BRANCH, repo_spec.repo())
    }

    /// Short name, used for lookups.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `owner/repo` pair.
    #[must_use]
    pub fn nwo(&self) -> &str {
        &self.nwo
    }

    #[must_use]
    pub fn branch(&self) -> &str {
        &self.branch
    }

    #[must_use]
    pub fn gem_name(&self) -> &str {
        &self.gem_name
    }
}
