use crate::Result;
use crate::facts::RepoSpec;
use crate::facts::hosting::HostingData;
use crate::facts::hosting::client::Client;
use core::time::Duration;
use ohno::IntoAppError;
use url::Url;

const LOG_TARGET: &str = "   hosting";

/// Environment variable holding the GitHub access token.
pub const ACCESS_TOKEN_ENV_VAR: &str = "GITHUB_ACCESS_TOKEN";

/// GitHub data provider.
///
/// Only ever constructed with a token; without one the dashboard runs with GitHub disabled.
#[derive(Debug, Clone)]
pub struct Provider {
    client: Client,
    timeout: Duration,
}

impl Provider {
    /// Create a new GitHub provider talking to `base_url`, giving up on any single lookup after `timeout`.
    pub fn new(token: &str, base_url: &Url, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: Client::new(token, base_url)?,
            timeout,
        })
    }

    /// Full names (`owner/repo`) of every repository in `org`, in the order GitHub returns them.
    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<String>> {
        log::debug!(target: LOG_TARGET, "Listing repositories of organization '{org}'");
        self.bounded("repository list", self.client.list_org_repos(org)).await
    }

    /// Gather source-control metrics for a repository.
    ///
    /// The lookups run concurrently and fail independently: a failed or timed out lookup is logged and leaves
    /// its field(s) empty without affecting the others.
    pub async fn get_hosting_data(&self, repo_spec: &RepoSpec, branch: &str) -> HostingData {
        let owner = repo_spec.owner();
        let repo = repo_spec.repo();
        let pr_query = format!("state:open type:pr repo:{repo_spec}");

        log::info!(target: LOG_TARGET, "Querying GitHub for repository '{repo_spec}'");

        let (repo_res, prs_res, activity_res, (commits_since_release, latest_release_tag)) = tokio::join!(
            self.bounded("repository info", self.client.repository(owner, repo)),
            self.bounded("open pull requests", self.client.search_issues_count(&pr_query)),
            self.bounded("commit activity", self.client.commit_activity(owner, repo)),
            self.commits_since_latest_release(repo_spec, branch),
        );

        let open_issues_and_prs = log_failure(repo_res, "repository info", repo_spec).map(|r| r.open_issues_count);
        let open_prs = log_failure(prs_res, "open pull requests", repo_spec);

        let commits_this_week = log_failure(activity_res, "commit activity", repo_spec).and_then(|weeks| {
            let last = weeks.last().map(|week| week.total);
            if last.is_none() {
                log::info!(target: LOG_TARGET, "No commit activity reported for '{repo_spec}'");
            }
            last
        });

        let open_issues = match (open_issues_and_prs, open_prs) {
            (Some(total), Some(prs)) => Some(total.saturating_sub(prs)),
            _ => None,
        };

        log::debug!(target: LOG_TARGET, "Completed GitHub API requests for repository '{repo_spec}'");

        HostingData {
            commits_this_week,
            open_prs,
            open_issues,
            commits_since_latest_release: commits_since_release,
            latest_release_tag,
        }
    }

    /// Number of commits on `branch` since the latest release, along with that release's tag.
    async fn commits_since_latest_release(&self, repo_spec: &RepoSpec, branch: &str) -> (Option<u64>, Option<String>) {
        let owner = repo_spec.owner();
        let repo = repo_spec.repo();

        let Some(release) = log_failure(
            self.bounded("latest release", self.client.latest_release(owner, repo)).await,
            "latest release",
            repo_spec,
        ) else {
            return (None, None);
        };

        match self
            .bounded("comparison", self.client.compare(owner, repo, &release.tag_name, branch))
            .await
        {
            Ok(comparison) => (Some(comparison.total_commits), Some(release.tag_name)),
            Err(e) => {
                log::info!(target: LOG_TARGET, "Failed to compare {}...{branch} for '{repo_spec}': {e:#}", release.tag_name);
                (None, Some(release.tag_name))
            }
        }
    }

    /// Bound one lookup by the provider's timeout, turning expiry into an error for that lookup only.
    async fn bounded<T>(&self, what: &str, call: impl Future<Output = Result<T>>) -> Result<T> {
        tokio::time::timeout(self.timeout, call)
            .await
            .into_app_err_with(|| format!("{what} lookup timed out after {:.1}s", self.timeout.as_secs_f64()))?
    }
}

fn log_failure<T>(result: Result<T>, what: &str, repo_spec: &RepoSpec) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            log::info!(target: LOG_TARGET, "Failed to fetch {what} for '{repo_spec}': {e:#}");
            None
        }
    }
}
