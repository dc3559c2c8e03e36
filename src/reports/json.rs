use crate::Result;
use crate::dashboard::ProjectSnapshot;
use core::fmt::Write;

/// Write `projects` as a JSON array of output records.
pub fn generate<W: Write>(projects: &[ProjectSnapshot], pretty: bool, writer: &mut W) -> Result<()> {
    write_value(projects, pretty, writer)
}

/// Write a single project as a JSON output record.
pub fn generate_one<W: Write>(project: &ProjectSnapshot, pretty: bool, writer: &mut W) -> Result<()> {
    write_value(project, pretty, writer)
}

fn write_value<T: serde::Serialize + ?Sized, W: Write>(value: &T, pretty: bool, writer: &mut W) -> Result<()> {
    let text = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };

    writeln!(writer, "{text}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboard::{Project, RecordState};
    use crate::facts::ProviderResult;
    use crate::facts::gems::GemData;

    fn snapshot(name: &str) -> ProjectSnapshot {
        ProjectSnapshot {
            project: Project::new(name, format!("acme/{name}"), "master", name),
            gem: Some(ProviderResult::Found(GemData {
                name: name.to_string(),
                version: "1.0.0".into(),
                downloads: 10,
                version_downloads: 2,
                homepage_uri: None,
                documentation_uri: None,
            })),
            travis: None,
            github: Some(ProviderResult::Unavailable),
            state: RecordState::Populated,
        }
    }

    #[test]
    fn test_generate_compact() {
        let mut out = String::new();
        generate(&[snapshot("widget")], false, &mut out).unwrap();

        assert_eq!(
            out,
            concat!(
                r#"[{"name":"widget","nwo":"acme/widget","branch":"master","gem_name":"widget","#,
                r#""gem":{"name":"widget","version":"1.0.0","downloads":10,"version_downloads":2,"homepage_uri":null,"documentation_uri":null},"#,
                r#""travis":null,"github":null}]"#,
                "\n"
            )
        );
    }

    #[test]
    fn test_generate_pretty_round_trips_as_json() {
        let mut out = String::new();
        generate(&[snapshot("widget"), snapshot("gadget")], true, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().map(Vec::len), Some(2));
        assert_eq!(value[1]["name"], "gadget");
    }

    #[test]
    fn test_generate_one() {
        let mut out = String::new();
        generate_one(&snapshot("widget"), false, &mut out).unwrap();

        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["nwo"], "acme/widget");
        assert_eq!(value["gem"]["version"], "1.0.0");
    }
}
