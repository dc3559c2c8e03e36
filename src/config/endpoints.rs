use serde::{Deserialize, Serialize};
use url::Url;

const DEFAULT_GITHUB_API: &str = "https://api.github.com";
const DEFAULT_RUBYGEMS_API: &str = "https://rubygems.org/api/v1";
const DEFAULT_TRAVIS_API: &str = "https://api.travis-ci.org";

/// Base URLs of the external APIs the providers talk to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Endpoints {
    #[serde(default = "default_github")]
    pub github: Url,

    #[serde(default = "default_rubygems")]
    pub rubygems: Url,

    #[serde(default = "default_travis")]
    pub travis: Url,
}

impl Endpoints {
    /// Point every provider at the same base URL.
    ///
    /// Mostly useful for tests, where a single mock server stands in for all three APIs.
    #[must_use]
    pub fn all_at(base: &Url) -> Self {
        Self {
            github: base.clone(),
            rubygems: base.clone(),
            travis: base.clone(),
        }
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self {
            github: default_github(),
            rubygems: default_rubygems(),
            travis: default_travis(),
        }
    }
}

fn default_github() -> Url {
    Url::parse(DEFAULT_GITHUB_API).expect("valid default GitHub URL")
}

fn default_rubygems() -> Url {
    Url::parse(DEFAULT_RUBYGEMS_API).expect("valid default RubyGems URL")
}

fn default_travis() -> Url {
    Url::parse(DEFAULT_TRAVIS_API).expect("valid default Travis URL")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let endpoints = Endpoints::default();
        assert_eq!(endpoints.github.as_str(), "https://api.github.com/");
        assert_eq!(endpoints.rubygems.as_str(), "https://rubygems.org/api/v1");
        assert_eq!(endpoints.travis.as_str(), "https://api.travis-ci.org/");
    }

    #[test]
    fn test_all_at() {
        let base = Url::parse("http://127.0.0.1:8080").unwrap();
        let endpoints = Endpoints::all_at(&base);
        assert_eq!(endpoints.github, base);
        assert_eq!(endpoints.rubygems, base);
        assert_eq!(endpoints.travis, base);
    }
}
