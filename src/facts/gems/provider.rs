use crate::Result;
use crate::facts::ProviderResult;
use crate::facts::gems::GemData;
use crate::facts::http;
use ohno::EnrichableExt;
use reqwest::header::HeaderMap;
use std::sync::Arc;
use url::Url;

const LOG_TARGET: &str = "      gems";

/// RubyGems data provider.
#[derive(Debug, Clone)]
pub struct Provider {
    client: reqwest::Client,
    base_url: String,
}

impl Provider {
    pub fn new(base_url: &Url) -> Result<Self> {
        Ok(Self {
            client: http::build_client(HeaderMap::new())?,
            base_url: base_url.as_str().to_string(),
        })
    }

    /// Look up the current release of `gem_name`.
    pub async fn get_gem_data(&self, gem_name: &str) -> ProviderResult<GemData> {
        if gem_name.is_empty() {
            return ProviderResult::Unavailable;
        }

        log::info!(target: LOG_TARGET, "Querying RubyGems for gem '{gem_name}'");

        let url = http::join_url(&self.base_url, &format!("gems/{gem_name}.json"));
        match http::get_json::<GemData>(&self.client, &url, &[]).await {
            Ok(data) => ProviderResult::Found(data),
            Err(e) => {
                log::info!(target: LOG_TARGET, "Failed to fetch gem '{gem_name}': {e:#}");
                ProviderResult::Error(Arc::new(e.enrich_with(|| format!("could not fetch gem '{gem_name}'"))))
            }
        }
    }
}
