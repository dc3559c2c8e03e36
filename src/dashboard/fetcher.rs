use crate::Result;
use crate::config::Config;
use crate::dashboard::{MetricsRecord, Project};
use crate::facts::hosting::{ACCESS_TOKEN_ENV_VAR, HostingData};
use crate::facts::{ProviderResult, RepoSpec, ci, gems, hosting};
use core::time::Duration;
use futures_util::future::OptionFuture;
use ohno::{EnrichableExt, app_err};
use std::sync::Arc;

const LOG_TARGET: &str = "   fetcher";

/// The external data sources a record is assembled from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Source {
    #[strum(to_string = "RubyGems")]
    Gems,

    #[strum(to_string = "Travis CI")]
    Ci,

    #[strum(to_string = "GitHub")]
    Hosting,
}

/// Fills a project's record by querying every provider concurrently.
#[derive(Debug, Clone)]
pub struct Fetcher {
    hosting: Option<hosting::Provider>,
    gems: gems::Provider,
    ci: ci::Provider,
    timeout: Duration,
}

impl Fetcher {
    #[must_use]
    pub const fn new(hosting: Option<hosting::Provider>, gems: gems::Provider, ci: ci::Provider, timeout: Duration) -> Self {
        Self { hosting, gems, ci, timeout }
    }

    /// Build the providers described by `config`.
    ///
    /// Without a GitHub token the GitHub provider stays disabled for the life of the process.
    ///
    /// # Errors
    ///
    /// Returns an error if an HTTP client cannot be built or the token is not a valid header value.
    pub fn from_config(config: &Config, github_token: Option<&str>) -> Result<Self> {
        let hosting = match github_token.filter(|t| !t.is_empty()) {
            Some(token) => Some(hosting::Provider::new(token, &config.endpoints.github, config.provider_timeout())?),
            None => {
                log::warn!(target: LOG_TARGET, "{ACCESS_TOKEN_ENV_VAR} required for GitHub; GitHub metrics are disabled");
                None
            }
        };

        Ok(Self::new(
            hosting,
            gems::Provider::new(&config.endpoints.rubygems)?,
            ci::Provider::new(&config.endpoints.travis)?,
            config.provider_timeout(),
        ))
    }

    /// The GitHub provider, if enabled.
    #[must_use]
    pub const fn hosting(&self) -> Option<&hosting::Provider> {
        self.hosting.as_ref()
    }

    /// Fill every empty slot of `record` and mark it fetched.
    ///
    /// Only the providers for empty slots are called; slots that already hold an outcome are kept as they are.
    /// All calls run concurrently. The RubyGems and Travis CI calls are bounded by the fetcher's timeout; GitHub
    /// bounds each of its lookups separately so a slow one only loses its own fields.
    pub async fn fetch(&self, project: &Project, record: &mut MetricsRecord) {
        log::debug!(target: LOG_TARGET, "Fetching metrics for project '{}'", project.name());

        let gem: OptionFuture<_> = record
            .gem
            .is_none()
            .then(|| self.bounded(Source::Gems, project, self.gems.get_gem_data(project.gem_name())))
            .into();

        let travis: OptionFuture<_> = record
            .travis
            .is_none()
            .then(|| self.bounded(Source::Ci, project, self.ci.get_ci_data(project.nwo(), project.branch())))
            .into();

        let github: OptionFuture<_> = record
            .github
            .is_none()
            .then(|| self.get_hosting_data(project))
            .into();

        let (gem, travis, github) = tokio::join!(gem, travis, github);

        if let Some(result) = gem {
            record.gem = Some(result);
        }
        if let Some(result) = travis {
            record.travis = Some(result);
        }
        if let Some(result) = github {
            record.github = Some(result);
        }

        record.mark_fetched();

        log::debug!(
            target: LOG_TARGET,
            "Fetched project '{}': gem={}, travis={}, github={}",
            project.name(),
            status_str(record.gem.as_ref()),
            status_str(record.travis.as_ref()),
            status_str(record.github.as_ref()),
        );
    }

    async fn get_hosting_data(&self, project: &Project) -> ProviderResult<HostingData> {
        let Some(provider) = &self.hosting else {
            return ProviderResult::Unavailable;
        };

        if project.nwo().is_empty() {
            return ProviderResult::Unavailable;
        }

        match RepoSpec::parse_nwo(project.nwo()) {
            Ok(repo_spec) => ProviderResult::Found(provider.get_hosting_data(&repo_spec, project.branch()).await),
            Err(e) => ProviderResult::Error(Arc::new(
                e.enrich_with(|| format!("{} lookup for project '{}' has no usable repository", Source::Hosting, project.name())),
            )),
        }
    }

    async fn bounded<T>(&self, source: Source, project: &Project, call: impl Future<Output = ProviderResult<T>>) -> ProviderResult<T> {
        if let Ok(result) = tokio::time::timeout(self.timeout, call).await {
            result
        } else {
            log::warn!(
                target: LOG_TARGET,
                "{source} lookup for project '{}' timed out after {:.1}s",
                project.name(),
                self.timeout.as_secs_f64()
            );
            ProviderResult::Error(Arc::new(app_err!(
                "{source} lookup for project '{}' timed out after {:.1}s",
                project.name(),
                self.timeout.as_secs_f64()
            )))
        }
    }
}

fn status_str<T>(slot: Option<&ProviderResult<T>>) -> &'static str {
    slot.map_or("Empty", ProviderResult::status_str)
}
