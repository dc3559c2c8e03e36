use serde::{Serialize, Serializer};

/// Source-control activity for one repository.
///
/// Every field is fetched independently; `None` means that particular lookup failed. On the wire a missing count
/// is written as `-1` and a missing tag as an empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct HostingData {
    #[serde(serialize_with = "count_or_sentinel")]
    pub commits_this_week: Option<u64>,

    #[serde(serialize_with = "count_or_sentinel")]
    pub open_prs: Option<u64>,

    /// Open issues, not counting pull requests.
    #[serde(serialize_with = "count_or_sentinel")]
    pub open_issues: Option<u64>,

    #[serde(serialize_with = "count_or_sentinel")]
    pub commits_since_latest_release: Option<u64>,

    #[serde(serialize_with = "tag_or_empty")]
    pub latest_release_tag: Option<String>,
}

fn count_or_sentinel<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(count) => serializer.serialize_u64(*count),
        None => serializer.serialize_i64(-1),
    }
}

fn tag_or_empty<S: Serializer>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(value.as_deref().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serialize_found() {
        let data = HostingData {
            commits_this_week: Some(12),
            open_prs: Some(3),
            open_issues: Some(0),
            commits_since_latest_release: Some(40),
            latest_release_tag: Some("v1.2.0".into()),
        };

        assert_eq!(
            serde_json::to_value(&data).unwrap(),
            json!({
                "commits_this_week": 12,
                "open_prs": 3,
                "open_issues": 0,
                "commits_since_latest_release": 40,
                "latest_release_tag": "v1.2.0",
            })
        );
    }

    #[test]
    fn test_serialize_missing_as_sentinels() {
        assert_eq!(
            serde_json::to_value(HostingData::default()).unwrap(),
            json!({
                "commits_this_week": -1,
                "open_prs": -1,
                "open_issues": -1,
                "commits_since_latest_release": -1,
                "latest_release_tag": "",
            })
        );
    }
}
