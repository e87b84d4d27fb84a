//! Error types for the helpers around the templating core
//!
//! Extraction and rendering themselves never fail.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("Invalid assignment '{input}': expected KEY=VALUE where KEY matches [A-Za-z0-9_-]+")]
    InvalidAssignment { input: String },

    #[error("Missing values for required fields: {}", .names.join(", "))]
    MissingFields { names: Vec<String> },

    #[error("Value file {path} must contain a mapping at the top level")]
    NotAnObject { path: PathBuf },

    #[error("Failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_names() {
        let err = TemplateError::MissingFields {
            names: vec!["title".to_string(), "cta_url".to_string()],
        };

        let msg = err.to_string();
        assert!(msg.contains("title, cta_url"));
    }

    #[test]
    fn test_invalid_assignment_message() {
        let err = TemplateError::InvalidAssignment {
            input: "user.name=Ana".to_string(),
        };

        assert!(err.to_string().contains("user.name=Ana"));
    }
}
