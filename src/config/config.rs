use crate::Result;
use crate::config::Endpoints;
use crate::facts::RepoSpec;
use camino::{Utf8Path, Utf8PathBuf};
use core::time::Duration;
use ohno::{EnrichableExt, IntoAppError, app_err, bail};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;

/// File names probed, in order, when no explicit configuration path is given.
pub const CONFIG_FILE_CANDIDATES: [&str; 4] = ["repos.yml", "repos.yaml", "repos.toml", "repos.json"];

/// Longest accepted refresh interval, one year.
pub const MAX_REFRESH_INTERVAL_MINUTES: u64 = 366 * 24 * 60;

/// Longest accepted provider timeout, one day.
pub const MAX_PROVIDER_TIMEOUT_SECS: u64 = 24 * 60 * 60;

const fn default_refresh_interval_minutes() -> u64 {
    30
}

const fn default_provider_timeout_secs() -> u64 {
    30
}

/// The set of tracked projects plus the knobs of the refresh machinery.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    /// Organizations whose full repository list is expanded at startup.
    #[serde(default)]
    pub orgs: Vec<String>,

    /// Explicit `owner/repo` entries.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Parsed for compatibility with existing project lists, never applied.
    #[serde(default)]
    pub exclude_repos: Vec<String>,

    #[serde(default = "default_refresh_interval_minutes")]
    pub refresh_interval_minutes: u64,

    #[serde(default = "default_provider_timeout_secs")]
    pub provider_timeout_secs: u64,

    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            orgs: Vec::new(),
            repos: Vec::new(),
            exclude_repos: Vec::new(),
            refresh_interval_minutes: default_refresh_interval_minutes(),
            provider_timeout_secs: default_provider_timeout_secs(),
            endpoints: Endpoints::default(),
        }
    }
}

impl Config {
    /// Load the configuration from `config_path`, or from the first of [`CONFIG_FILE_CANDIDATES`] found in `base_dir`.
    ///
    /// Returns the configuration along with any non-fatal warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if no file can be found, if the file cannot be read or parsed,
    /// or if it fails validation.
    pub fn load(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<(Self, Vec<String>)> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading project configuration from {path}"))?;
            (path.clone(), text)
        } else {
            let mut found = None;
            for name in CONFIG_FILE_CANDIDATES {
                let path = base_dir.join(name);
                match fs::read_to_string(&path) {
                    Ok(text) => {
                        found = Some((path, text));
                        break;
                    }
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e).into_app_err_with(|| format!("reading project configuration from {path}")),
                }
            }

            found.ok_or_else(|| app_err!("no project configuration found in {base_dir} (looked for {})", CONFIG_FILE_CANDIDATES.join(", ")))?
        };

        let extension = final_path.extension().unwrap_or_default();
        let config = Self::parse(&text, extension).map_err(|e| e.enrich_with(|| format!("loading project configuration from {final_path}")))?;

        let warnings = config.validate()?;
        Ok((config, warnings))
    }

    /// Parse configuration text in the format named by `extension` (`yml`, `yaml`, `toml` or `json`).
    ///
    /// # Errors
    ///
    /// Returns an error if the extension is unsupported or the text is malformed.
    pub fn parse(text: &str, extension: &str) -> Result<Self> {
        let config = match extension {
            "toml" => toml::from_str(text).into_app_err("parsing TOML configuration")?,
            "yml" | "yaml" => serde_yaml::from_str(text).into_app_err("parsing YAML configuration")?,
            "json" => serde_json::from_str(text).into_app_err("parsing JSON configuration")?,
            _ => bail!("unsupported configuration file extension: {extension}"),
        };

        Ok(config)
    }

    #[must_use]
    pub const fn refresh_interval(&self) -> Duration {
        Duration::from_secs(self.refresh_interval_minutes.saturating_mul(60))
    }

    #[must_use]
    pub const fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_secs)
    }

    /// Check the configuration for problems.
    ///
    /// Malformed entries are errors; questionable but usable settings come back as warnings.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit repository is not of the form `owner/repo`,
    /// or if a duration setting is zero or above its maximum.
    pub fn validate(&self) -> Result<Vec<String>> {
        for entry in &self.repos {
            let _ = RepoSpec::parse_nwo(entry)?;
        }

        if self.refresh_interval_minutes == 0 {
            bail!("refresh_interval_minutes must be greater than zero");
        }

        if self.refresh_interval_minutes > MAX_REFRESH_INTERVAL_MINUTES {
            bail!("refresh_interval_minutes must be at most {MAX_REFRESH_INTERVAL_MINUTES}");
        }

        if self.provider_timeout_secs == 0 {
            bail!("provider_timeout_secs must be greater than zero");
        }

        if self.provider_timeout_secs > MAX_PROVIDER_TIMEOUT_SECS {
            bail!("provider_timeout_secs must be at most {MAX_PROVIDER_TIMEOUT_SECS}");
        }

        let mut warnings = Vec::new();

        if !self.exclude_repos.is_empty() {
            warnings.push(format!(
                "exclude_repos lists {} repositories but is not applied; those repositories are still tracked",
                self.exclude_repos.len()
            ));
        }

        let mut seen = HashSet::new();
        for entry in &self.repos {
            if !seen.insert(entry.as_str()) {
                warnings.push(format!("repository '{entry}' is listed more than once and will be tracked more than once"));
            }
        }

        let mut seen = HashSet::new();
        for org in &self.orgs {
            if !seen.insert(org.as_str()) {
                warnings.push(format!("organization '{org}' is listed more than once and its repositories will be tracked more than once"));
            }
        }

        Ok(warnings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_yaml() {
        let yaml = "orgs:\n  - acme\nrepos:\n  - acme/widget\n  - other/gadget\nexclude_repos:\n  - acme/old\n";
        let config = Config::parse(yaml, "yml").unwrap();

        assert_eq!(config.orgs, vec!["acme"]);
        assert_eq!(config.repos, vec!["acme/widget", "other/gadget"]);
        assert_eq!(config.exclude_repos, vec!["acme/old"]);
        assert_eq!(config.refresh_interval(), Duration::from_secs(30 * 60));
        assert_eq!(config.provider_timeout(), Duration::from_secs(30));
        assert_eq!(config.endpoints, Endpoints::default());
    }

    #[test]
    fn test_parse_toml() {
        let text = "repos = [\"acme/widget\"]\nrefresh_interval_minutes = 5\n\n[endpoints]\ngithub = \"http://localhost:9999\"\n";
        let config = Config::parse(text, "toml").unwrap();

        assert_eq!(config.repos, vec!["acme/widget"]);
        assert!(config.orgs.is_empty());
        assert_eq!(config.refresh_interval_minutes, 5);
        assert_eq!(config.endpoints.github.as_str(), "http://localhost:9999/");
        assert_eq!(config.endpoints.travis, Endpoints::default().travis);
    }

    #[test]
    fn test_parse_json() {
        let config = Config::parse(r#"{"orgs": ["acme"], "provider_timeout_secs": 3}"#, "json").unwrap();
        assert_eq!(config.orgs, vec!["acme"]);
        assert!(config.repos.is_empty());
        assert_eq!(config.provider_timeout(), Duration::from_secs(3));
    }

    #[test]
    fn test_parse_empty_yaml_mapping() {
        let config = Config::parse("{}", "yaml").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_malformed() {
        let _ = Config::parse("repos: [unterminated", "yml").unwrap_err();
        let _ = Config::parse("repos = ", "toml").unwrap_err();
        let _ = Config::parse("{", "json").unwrap_err();
    }

    #[test]
    fn test_parse_unsupported_extension() {
        let err = Config::parse("repos: []", "ini").unwrap_err();
        assert!(err.to_string().contains("unsupported"));
    }

    #[test]
    fn test_validate_rejects_bad_repo() {
        let config = Config {
            repos: vec!["no-slash".into()],
            ..Config::default()
        };
        let _ = config.validate().unwrap_err();
    }

    #[test]
    fn test_validate_rejects_zero_interval() {
        let config = Config {
            refresh_interval_minutes: 0,
            ..Config::default()
        };
        let _ = config.validate().unwrap_err();

        let config = Config {
            provider_timeout_secs: 0,
            ..Config::default()
        };
        let _ = config.validate().unwrap_err();
    }

    #[test]
    fn test_validate_rejects_oversized_durations() {
        let config = Config::parse("refresh_interval_minutes: 18446744073709551615\n", "yml").unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("refresh_interval_minutes"));
        assert_eq!(config.refresh_interval(), Duration::from_secs(u64::MAX));

        let config = Config {
            refresh_interval_minutes: 4_611_686_018_427_387_904,
            ..Config::default()
        };
        let _ = config.validate().unwrap_err();

        let config = Config {
            refresh_interval_minutes: MAX_REFRESH_INTERVAL_MINUTES,
            provider_timeout_secs: MAX_PROVIDER_TIMEOUT_SECS,
            ..Config::default()
        };
        assert!(config.validate().unwrap().is_empty());
        assert_eq!(config.refresh_interval(), Duration::from_secs(MAX_REFRESH_INTERVAL_MINUTES * 60));

        let config = Config {
            provider_timeout_secs: MAX_PROVIDER_TIMEOUT_SECS + 1,
            ..Config::default()
        };
        let _ = config.validate().unwrap_err();
    }

    #[test]
    fn test_validate_warnings() {
        let config = Config {
            orgs: vec!["acme".into(), "acme".into()],
            repos: vec!["acme/widget".into(), "acme/widget".into()],
            exclude_repos: vec!["acme/old".into()],
            ..Config::default()
        };

        let warnings = config.validate().unwrap();
        assert_eq!(warnings.len(), 3);
        assert!(warnings[0].contains("exclude_repos"));
        assert!(warnings[1].contains("acme/widget"));
        assert!(warnings[2].contains("acme"));
    }

    #[test]
    fn test_validate_clean() {
        let config = Config {
            repos: vec!["acme/widget".into()],
            ..Config::default()
        };
        assert!(config.validate().unwrap().is_empty());
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = Utf8PathBuf::from_path_buf(dir.path().join("projects.yml")).unwrap();
        fs::write(&path, "repos:\n  - acme/widget\nexclude_repos:\n  - acme/old\n").unwrap();

        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        let (config, warnings) = Config::load(&base, Some(&path)).unwrap();
        assert_eq!(config.repos, vec!["acme/widget"]);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn test_load_probes_candidates() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::write(base.join("repos.toml"), "orgs = [\"acme\"]\n").unwrap();

        let (config, warnings) = Config::load(&base, None).unwrap();
        assert_eq!(config.orgs, vec!["acme"]);
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();

        let _ = Config::load(&base, None).unwrap_err();
        let _ = Config::load(&base, Some(&base.join("nope.yml"))).unwrap_err();
    }

    #[test]
    fn test_load_malformed_repo_entry() {
        let dir = tempfile::tempdir().unwrap();
        let base = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
        fs::write(base.join("repos.yml"), "repos:\n  - widget\n").unwrap();

        let _ = Config::load(&base, None).unwrap_err();
    }
}
