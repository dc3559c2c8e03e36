//! GitHub REST API client
//!
//! Minimal client covering the handful of endpoints the dashboard reads, with only the fields it needs.

use crate::Result;
use crate::facts::http;
use ohno::{IntoAppError, bail};
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue, LINK};
use reqwest::StatusCode;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;
use url::Url;

/// Pattern to extract the next page URL from a GitHub `Link` header
static NEXT_LINK_REGEX: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r#"<([^>]+)>;\s*rel="next""#).expect("invalid regex"));

const REPOS_PAGE_SIZE: &str = "100";

#[derive(Debug, Deserialize)]
pub struct OrgRepository {
    pub full_name: String,
}

#[derive(Debug, Deserialize)]
pub struct Repository {
    /// GitHub counts open pull requests as issues here.
    pub open_issues_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct SearchResult {
    pub total_count: u64,
}

#[derive(Debug, Deserialize)]
pub struct WeeklyCommitActivity {
    pub total: u64,
}

#[derive(Debug, Deserialize)]
pub struct Release {
    pub tag_name: String,
}

#[derive(Debug, Deserialize)]
pub struct Comparison {
    pub total_commits: u64,
}

#[derive(Debug, Clone)]
#[expect(clippy::struct_field_names, reason = "client field stores the underlying HTTP client")]
pub struct Client {
    client: reqwest::Client,
    base_url: String,
}

impl Client {
    pub fn new(token: &str, base_url: &Url) -> Result<Self> {
        let mut auth_val = HeaderValue::from_str(&format!("Bearer {token}")).into_app_err("invalid GitHub access token")?;
        auth_val.set_sensitive(true);

        let mut headers = HeaderMap::new();
        let _ = headers.insert(AUTHORIZATION, auth_val);

        Ok(Self {
            client: http::build_client(headers)?,
            base_url: base_url.as_str().to_string(),
        })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        http::get_json(&self.client, &http::join_url(&self.base_url, path), query).await
    }

    /// List the full names of every repository in an organization, following pagination.
    pub async fn list_org_repos(&self, org: &str) -> Result<Vec<String>> {
        let mut names = Vec::new();
        let mut next = Some(http::join_url(&self.base_url, &format!("orgs/{org}/repos")));
        let mut first = true;

        while let Some(url) = next.take() {
            let query: &[(&str, &str)] = if first { &[("per_page", REPOS_PAGE_SIZE)] } else { &[] };
            first = false;

            let resp = http::get(&self.client, &url, query).await?;
            next = next_page_url(resp.headers());

            let page: Vec<OrgRepository> = resp
                .json()
                .await
                .into_app_err_with(|| format!("could not decode repository list for organization '{org}'"))?;
            names.extend(page.into_iter().map(|r| r.full_name));
        }

        Ok(names)
    }

    pub async fn repository(&self, owner: &str, repo: &str) -> Result<Repository> {
        self.get_json(&format!("repos/{owner}/{repo}"), &[]).await
    }

    pub async fn search_issues_count(&self, query: &str) -> Result<u64> {
        let result: SearchResult = self.get_json("search/issues", &[("q", query)]).await?;
        Ok(result.total_count)
    }

    /// Weekly commit totals for the last year, oldest first.
    pub async fn commit_activity(&self, owner: &str, repo: &str) -> Result<Vec<WeeklyCommitActivity>> {
        let url = http::join_url(&self.base_url, &format!("repos/{owner}/{repo}/stats/commit_activity"));
        let resp = http::get(&self.client, &url, &[]).await?;

        // GitHub answers 202 with an empty object while it computes statistics for the repository
        if resp.status() == StatusCode::ACCEPTED {
            bail!("commit statistics for {owner}/{repo} are still being computed");
        }

        resp.json()
            .await
            .into_app_err_with(|| format!("could not decode commit activity for {owner}/{repo}"))
    }

    pub async fn latest_release(&self, owner: &str, repo: &str) -> Result<Release> {
        self.get_json(&format!("repos/{owner}/{repo}/releases/latest"), &[]).await
    }

    pub async fn compare(&self, owner: &str, repo: &str, base: &str, head: &str) -> Result<Comparison> {
        self.get_json(&format!("repos/{owner}/{repo}/compare/{base}...{head}"), &[]).await
    }
}

/// Extract the `rel="next"` URL from a `Link` header, if present.
fn next_page_url(headers: &HeaderMap) -> Option<String> {
    let link = headers.get(LINK)?.to_str().ok()?;
    NEXT_LINK_REGEX
        .captures(link)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}
