//! Plain HTTP GET helpers shared by the providers.
//!
//! Every call is a single attempt: a non-success status is turned into an error and handed back to the
//! provider, which decides how the failure shows up in its data.

use crate::Result;
use ohno::{IntoAppError, bail};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;

const LOG_TARGET: &str = "      http";
const USER_AGENT: &str = concat!("project-dashboard/", env!("CARGO_PKG_VERSION"));

/// Build an HTTP client with the crate's user agent and the given default headers.
pub fn build_client(mut headers: HeaderMap) -> Result<reqwest::Client> {
    if !headers.contains_key(ACCEPT) {
        let _ = headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    }

    Ok(reqwest::Client::builder().user_agent(USER_AGENT).default_headers(headers).build()?)
}

/// Join a base URL and a relative path with exactly one slash between them.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Send a GET request and fail on any non-success status.
pub async fn get(client: &reqwest::Client, url: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
    log::debug!(target: LOG_TARGET, "GET {url}");

    let resp = client
        .get(url)
        .query(query)
        .send()
        .await
        .into_app_err_with(|| format!("could not send request to '{url}'"))?;

    let status = resp.status();
    if !status.is_success() {
        bail!("request to '{url}' failed with status {status}");
    }

    Ok(resp)
}

/// Send a GET request and deserialize the JSON body.
pub async fn get_json<T: DeserializeOwned>(client: &reqwest::Client, url: &str, query: &[(&str, &str)]) -> Result<T> {
    let resp = get(client, url, query).await?;
    resp.json::<T>()
        .await
        .into_app_err_with(|| format!("could not decode JSON response from '{url}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("https://api.github.com", "repos/a/b"), "https://api.github.com/repos/a/b");
        assert_eq!(join_url("https://api.github.com/", "/repos/a/b"), "https://api.github.com/repos/a/b");
        assert_eq!(join_url("https://rubygems.org/api/v1", "gems/x.json"), "https://rubygems.org/api/v1/gems/x.json");
    }

    #[test]
    fn test_build_client() {
        let _client = build_client(HeaderMap::new()).unwrap();
    }
}
