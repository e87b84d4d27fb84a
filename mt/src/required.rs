//! Required-field policy
//!
//! The renderer blanks anything unresolved. Callers that want to refuse
//! incomplete forms check here first.

use tracing::debug;

use crate::error::TemplateError;
use crate::placeholder::PlaceholderSet;
use crate::values::Values;

/// Placeholders with no value or an empty one, in first-occurrence order
pub fn missing_fields<V: Values + ?Sized>(set: &PlaceholderSet, values: &V) -> Vec<String> {
    set.iter()
        .filter(|name| values.lookup(name).is_none_or(|v| v.is_empty()))
        .map(str::to_string)
        .collect()
}

/// Fail when any placeholder lacks a non-empty value
pub fn ensure_complete<V: Values + ?Sized>(set: &PlaceholderSet, values: &V) -> Result<(), TemplateError> {
    let names = missing_fields(set, values);
    if names.is_empty() {
        return Ok(());
    }
    debug!(?names, "ensure_complete: missing fields");
    Err(TemplateError::MissingFields { names })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placeholder::extract_placeholders;
    use crate::values::ValueMap;

    #[test]
    fn test_missing_fields_reports_absent_and_empty() {
        let set = extract_placeholders("{{title}} {{body}} {{footer}}");
        let values = ValueMap::from([
            ("title".to_string(), "Hi".to_string()),
            ("body".to_string(), String::new()),
        ]);

        assert_eq!(missing_fields(&set, &values), vec!["body", "footer"]);
    }

    #[test]
    fn test_ensure_complete() {
        let set = extract_placeholders("{{title}}");
        let full = ValueMap::from([("title".to_string(), "Hi".to_string())]);
        assert!(ensure_complete(&set, &full).is_ok());

        let err = ensure_complete(&set, &ValueMap::new()).unwrap_err();
        match err {
            TemplateError::MissingFields { names } => assert_eq!(names, vec!["title"]),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_no_placeholders_is_complete() {
        let set = extract_placeholders("<p>static</p>");
        assert!(ensure_complete(&set, &ValueMap::new()).is_ok());
    }
}
