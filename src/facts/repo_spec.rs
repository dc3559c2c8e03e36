use crate::Result;
use core::fmt::{Display, Formatter};
use ohno::bail;

/// A GitHub repository identified by its `owner/repo` pair (its "name with owner").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoSpec {
    owner: Box<str>,
    repo: Box<str>,
}

impl RepoSpec {
    /// Parse an `owner/repo` string.
    ///
    /// # Errors
    ///
    /// Returns an error unless the input has exactly two non-empty, slash-separated segments.
    pub fn parse_nwo(nwo: &str) -> Result<Self> {
        let mut segments = nwo.split('/');
        let (Some(owner), Some(repo), None) = (segments.next(), segments.next(), segments.next()) else {
            bail!("invalid repository '{nwo}': expected 'owner/repo'");
        };

        if owner.trim().is_empty() || repo.trim().is_empty() {
            bail!("invalid repository '{nwo}': empty owner or repo name");
        }

        Ok(Self {
            owner: Box::from(owner.trim()),
            repo: Box::from(repo.trim()),
        })
    }

    #[must_use]
    pub fn owner(&self) -> &str {
        &self.owner
    }

    #[must_use]
    pub fn repo(&self) -> &str {
        &self.repo
    }
}

impl Display for RepoSpec {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}/{}", self.owner, self.repo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_nwo() {
        let spec = RepoSpec::parse_nwo("acme/widget").unwrap();
        assert_eq!(spec.owner(), "acme");
        assert_eq!(spec.repo(), "widget");
        assert_eq!(spec.to_string(), "acme/widget");
    }

    #[test]
    fn test_parse_nwo_trims_whitespace() {
        let spec = RepoSpec::parse_nwo(" acme/widget ").unwrap();
        assert_eq!(spec.to_string(), "acme/widget");
    }

    #[test]
    fn test_parse_nwo_rejects_malformed() {
        for bad in ["", "widget", "/widget", "acme/", "acme/widget/extra", " / "] {
            let _ = RepoSpec::parse_nwo(bad).unwrap_err();
        }
    }
}
