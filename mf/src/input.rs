//! Reading templates and collecting values

use std::fs;
use std::io::Read;

use eyre::{Context, Result};
use mailtemplate::ValueMap;
use mailtemplate::values::{load_values, parse_assignment};
use tracing::debug;

use crate::cli::ValueArgs;

/// Name given to templates read from stdin
pub const STDIN_TEMPLATE_NAME: &str = "template";

/// Read template HTML from a file, or from stdin when `source` is `-`
pub fn read_template(source: &str) -> Result<String> {
    if source == "-" {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read template from stdin")?;
        return Ok(html);
    }
    fs::read_to_string(source).context(format!("Failed to read template: {}", source))
}

/// Values from the --values file, overlaid with every --set assignment
pub fn collect_values(args: &ValueArgs) -> Result<ValueMap> {
    let mut values = match &args.values {
        Some(path) => load_values(path)?,
        None => ValueMap::new(),
    };

    for assignment in &args.set {
        let (key, value) = parse_assignment(assignment)?;
        values.insert(key, value);
    }

    debug!(count = values.len(), "collect_values: done");
    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_read_template_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("welcome.html");
        fs::write(&path, "<p>{{title}}</p>").unwrap();

        let html = read_template(path.to_str().unwrap()).unwrap();
        assert_eq!(html, "<p>{{title}}</p>");
    }

    #[test]
    fn test_read_template_missing_file() {
        let err = read_template("/definitely/not/here.html").unwrap_err();
        assert!(err.to_string().contains("Failed to read template"));
    }

    #[test]
    fn test_sets_override_values_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("values.json");
        fs::write(&path, r#"{"title": "From file", "body": "Body"}"#).unwrap();

        let args = ValueArgs {
            values: Some(path),
            set: vec!["title=From flag".to_string()],
        };
        let values = collect_values(&args).unwrap();
        assert_eq!(values["title"], "From flag");
        assert_eq!(values["body"], "Body");
    }

    #[test]
    fn test_invalid_set_is_rejected() {
        let args = ValueArgs {
            values: None,
            set: vec!["no-equals-sign".to_string()],
        };
        assert!(collect_values(&args).is_err());
    }
}
