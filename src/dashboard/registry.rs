//! Resolves the configured repositories and organizations into the list of tracked projects.

use crate::Result;
use crate::config::Config;
use crate::dashboard::Project;
use crate::facts::{RepoSpec, hosting};
use futures_util::future::join_all;
use ohno::EnrichableExt;

const LOG_TARGET: &str = "  registry";

/// Build the ordered project list: explicit repositories first, then each organization's repositories in
/// configuration order.
///
/// Nothing is de-duplicated. An organization that cannot be listed contributes no projects, and without a
/// GitHub provider organizations are skipped altogether.
///
/// # Errors
///
/// Returns an error if an explicit repository entry is not of the form `owner/repo`.
pub async fn load(config: &Config, hosting: Option<&hosting::Provider>) -> Result<Vec<Project>> {
    let mut projects = config
        .repos
        .iter()
        .map(|entry| {
            RepoSpec::parse_nwo(entry)
                .map(|spec| Project::from_repo_spec(&spec))
                .map_err(|e| e.enrich_with(|| format!("invalid entry '{entry}' in repos")))
        })
        .collect::<Result<Vec<_>>>()?;

    match hosting {
        Some(provider) => {
            let listings = join_all(config.orgs.iter().map(|org| provider.list_org_repos(org))).await;

            for (org, listing) in config.orgs.iter().zip(listings) {
                match listing {
                    Ok(names) => {
                        log::debug!(target: LOG_TARGET, "Organization '{org}' has {} repositories", names.len());
                        projects.extend(names.iter().filter_map(|name| match RepoSpec::parse_nwo(name) {
                            Ok(spec) => Some(Project::from_repo_spec(&spec)),
                            Err(e) => {
                                log::warn!(target: LOG_TARGET, "Skipping repository '{name}' of organization '{org}': {e:#}");
                                None
                            }
                        }));
                    }
                    Err(e) => log::warn!(target: LOG_TARGET, "Could not list repositories of organization '{org}': {e:#}"),
                }
            }
        }
        None if !config.orgs.is_empty() => {
            log::warn!(target: LOG_TARGET, "GitHub is disabled; not expanding {} organization(s)", config.orgs.len());
        }
        None => {}
    }

    log::info!(target: LOG_TARGET, "Tracking {} projects", projects.len());
    Ok(projects)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_load_explicit_repos() {
        let config = Config {
            repos: vec!["acme/widget".into()],
            ..Config::default()
        };

        let projects = load(&config, None).await.unwrap();
        assert_eq!(projects, vec![Project::new("widget", "acme/widget", "master", "widget")]);
    }

    #[tokio::test]
    async fn test_load_keeps_order_and_duplicates() {
        let config = Config {
            repos: vec!["acme/widget".into(), "other/gadget".into(), "acme/widget".into()],
            ..Config::default()
        };

        let projects = load(&config, None).await.unwrap();
        let nwos: Vec<_> = projects.iter().map(Project::nwo).collect();
        assert_eq!(nwos, vec!["acme/widget", "other/gadget", "acme/widget"]);
    }

    #[tokio::test]
    async fn test_load_skips_orgs_without_hosting() {
        let config = Config {
            orgs: vec!["acme".into()],
            repos: vec!["acme/widget".into()],
            ..Config::default()
        };

        let projects = load(&config, None).await.unwrap();
        assert_eq!(projects.len(), 1);
    }

    #[tokio::test]
    async fn test_load_rejects_malformed_repo() {
        let config = Config {
            repos: vec!["widget".into()],
            ..Config::default()
        };

        let _ = load(&config, None).await.unwrap_err();
    }
}
