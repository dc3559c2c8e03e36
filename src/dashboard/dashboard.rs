use crate::Result;
use crate::config::Config;
use crate::dashboard::record::ProjectEntry;
use crate::dashboard::{Fetcher, Project, ProjectSnapshot, registry};
use futures_util::future::join_all;
use std::collections::HashMap;
use std::sync::OnceLock;

const LOG_TARGET: &str = " dashboard";

/// The in-memory cache of every tracked project's metrics.
#[derive(Debug)]
pub struct Dashboard {
    entries: Vec<ProjectEntry>,
    by_name: OnceLock<HashMap<String, usize>>,
    fetcher: Fetcher,
}

impl Dashboard {
    /// Build the providers and the project registry described by `config`.
    ///
    /// # Errors
    ///
    /// Returns an error if the providers cannot be created or the project list is malformed.
    pub async fn new(config: &Config, github_token: Option<&str>) -> Result<Self> {
        let fetcher = Fetcher::from_config(config, github_token)?;
        let projects = registry::load(config, fetcher.hosting()).await?;
        Ok(Self::with_projects(projects, fetcher))
    }

    /// A dashboard over an already resolved project list.
    #[must_use]
    pub fn with_projects(projects: impl IntoIterator<Item = Project>, fetcher: Fetcher) -> Self {
        Self {
            entries: projects.into_iter().map(ProjectEntry::new).collect(),
            by_name: OnceLock::new(),
            fetcher,
        }
    }

    /// Number of tracked projects, duplicates included.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no project is tracked at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a project by name, fetching its metrics first if they aren't cached.
    ///
    /// Returns `None` for unknown names. When several projects share a name, the last one registered wins.
    pub async fn get_project(&self, name: &str) -> Option<ProjectSnapshot> {
        let &index = self.index().get(name)?;
        Some(self.entries[index].fetched_snapshot(&self.fetcher).await)
    }

    /// Fetch every project that isn't cached, concurrently, and return them all in registry order.
    pub async fn get_all_projects(&self) -> Vec<ProjectSnapshot> {
        log::debug!(target: LOG_TARGET, "Fetching all {} projects", self.entries.len());
        join_all(self.entries.iter().map(|entry| entry.fetched_snapshot(&self.fetcher))).await
    }

    /// Every project in registry order, as currently cached. Never fetches.
    pub async fn get_projects(&self) -> Vec<ProjectSnapshot> {
        join_all(self.entries.iter().map(|entry| entry.snapshot())).await
    }

    /// Clear every record. In-flight fetches complete before their record is cleared.
    pub async fn clear_all(&self) {
        let _ = join_all(self.entries.iter().map(|entry| entry.clear())).await;
    }

    fn index(&self) -> &HashMap<String, usize> {
        self.by_name.get_or_init(|| {
            log::debug!(target: LOG_TARGET, "Building project index");
            self.entries
                .iter()
                .enumerate()
                .map(|(index, entry)| (entry.project().name().to_string(), index))
                .collect()
        })
    }
}
