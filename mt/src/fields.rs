//! Form field discovery
//!
//! Turns the placeholders of a template into the list of fields a form
//! should present. The choice between a one-line input and a multi-line
//! editor is a naming heuristic; the templating core has no opinion on it.

use serde::Serialize;
use tracing::debug;

use crate::placeholder::extract_placeholders;

/// Editing affordance for a form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum FieldKind {
    SingleLine,
    MultiLine,
}

impl FieldKind {
    /// Multi-line when the lower-cased name contains any keyword
    pub fn classify<K: AsRef<str>>(name: &str, keywords: &[K]) -> Self {
        let lower = name.to_lowercase();
        if keywords
            .iter()
            .any(|k| !k.as_ref().is_empty() && lower.contains(&k.as_ref().to_lowercase()))
        {
            Self::MultiLine
        } else {
            Self::SingleLine
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::SingleLine => "single-line",
            Self::MultiLine => "multi-line",
        }
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A placeholder as presented on a form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
}

/// Fields for every placeholder in `html`, in first-occurrence order
pub fn form_fields<K: AsRef<str>>(html: &str, keywords: &[K]) -> Vec<Field> {
    let fields: Vec<Field> = extract_placeholders(html)
        .into_iter()
        .map(|name| {
            let kind = FieldKind::classify(&name, keywords);
            Field { name, kind }
        })
        .collect();

    debug!(count = fields.len(), "form_fields: done");
    fields
}
