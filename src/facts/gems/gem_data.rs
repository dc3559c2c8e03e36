use serde::{Deserialize, Serialize};

/// Release status of a gem as reported by RubyGems.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct GemData {
    pub name: String,
    pub version: String,
    pub downloads: u64,
    pub version_downloads: u64,

    #[serde(default)]
    pub homepage_uri: Option<String>,

    #[serde(default)]
    pub documentation_uri: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_rubygems_response() {
        let json = r#"{
            "name": "jekyll",
            "downloads": 123456789,
            "version": "4.3.3",
            "version_downloads": 4321,
            "platform": "ruby",
            "authors": "Tom Preston-Werner, Parker Moore, Matt Rogers",
            "homepage_uri": "https://jekyllrb.com",
            "documentation_uri": null
        }"#;

        let gem: GemData = serde_json::from_str(json).unwrap();
        assert_eq!(gem.name, "jekyll");
        assert_eq!(gem.version, "4.3.3");
        assert_eq!(gem.downloads, 123_456_789);
        assert_eq!(gem.version_downloads, 4321);
        assert_eq!(gem.homepage_uri.as_deref(), Some("https://jekyllrb.com"));
        assert_eq!(gem.documentation_uri, None);
    }

    #[test]
    fn test_deserialize_missing_required_field() {
        let _ = serde_json::from_str::<GemData>(r#"{"name": "jekyll"}"#).unwrap_err();
    }
}
