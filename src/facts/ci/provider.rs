use crate::Result;
use crate::facts::ci::CiData;
use crate::facts::{ProviderResult, RepoSpec, http};
use ohno::EnrichableExt;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use std::sync::Arc;
use url::Url;

const LOG_TARGET: &str = "        ci";
const TRAVIS_MEDIA_TYPE: &str = "application/vnd.travis-ci.2+json";

/// Travis CI data provider.
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
}

impl Provider {
    pub fn new(base_url: &Url) -> Result<Self> {
        let mut headers = HeaderMap::new();
        let _ = headers.insert(ACCEPT, HeaderValue::from_static(TRAVIS_MEDIA_TYPE));

        Ok(Self {
            client: http::build_client(headers)?,
            base_url: base_url.as_str().to_string(),
        })
    }

    /// Look up the last build of `branch` in the repository `nwo`.
    pub async fn get_ci_data(&self, nwo: &str, branch: &str) -> ProviderResult<CiData> {
        if nwo.is_empty() || branch.is_empty() {
            return ProviderResult::Unavailable;
        }

        log::info!(target: LOG_TARGET, "Querying Travis CI for '{nwo}@{branch}'");

        match self.fetch(nwo, branch).await {
            Ok(data) => ProviderResult::Found(data),
            Err(e) => {
                log::info!(target: LOG_TARGET, "Failed to fetch build status for '{nwo}@{branch}': {e:#}");
                ProviderResult::Error(Arc::new(e.enrich_with(|| format!("could not fetch build status for '{nwo}@{branch}'"))))
            }
        }
    }

    async fn fetch(&self, nwo: &str, branch: &str) -> Result<CiData> {
        let repo_spec = RepoSpec::parse_nwo(nwo).map_err(|e| e.enrich_with(|| "unusable repository identifier".to_string()))?;
        let url = http::join_url(
            &self.base_url,
            &format!("repos/{}/{}/branches/{branch}", repo_spec.owner(), repo_spec.repo()),
        );
        http::get_json(&self.client, &url, &[]).await
    }
}
