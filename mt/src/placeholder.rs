//! Placeholder extraction and rendering
//!
//! A placeholder is `{{`, optional whitespace, a name made of
//! `[A-Za-z0-9_-]`, optional whitespace, then `}}`. Whitespace includes
//! U+FEFF. Any other brace text is
//! ordinary markup: it is never extracted and rendering leaves it untouched.
//! Matches are found left to right and never overlap.

use std::borrow::Cow;
use std::collections::HashSet;
use std::sync::LazyLock;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::debug;

use crate::values::Values;

static PLACEHOLDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{[\s\x{FEFF}]*([A-Za-z0-9_-]+)[\s\x{FEFF}]*\}\}").expect("placeholder pattern is valid"));

/// Unique placeholder names found in a template
///
/// Equality is set equality. Iteration follows first occurrence in the
/// template, which callers may rely on for presenting fields in a stable order.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(transparent)]
pub struct PlaceholderSet {
    names: Vec<String>,
}

impl PlaceholderSet {
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in first-occurrence order
    pub fn as_slice(&self) -> &[String] {
        &self.names
    }

    pub fn into_vec(self) -> Vec<String> {
        self.names
    }
}

impl PartialEq for PlaceholderSet {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|name| other.contains(name))
    }
}

impl Eq for PlaceholderSet {}

impl IntoIterator for PlaceholderSet {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.into_iter()
    }
}

impl<'a> IntoIterator for &'a PlaceholderSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

/// Collect the distinct placeholder names referenced by `html`
pub fn extract_placeholders(html: &str) -> PlaceholderSet {
    let mut seen = HashSet::new();
    let mut names = Vec::new();

    for caps in PLACEHOLDER_RE.captures_iter(html) {
        let Some(name) = caps.get(1).map(|m| m.as_str()) else {
            continue;
        };
        if seen.insert(name) {
            names.push(name.to_string());
        }
    }

    debug!(html_len = html.len(), count = names.len(), "extract_placeholders: done");
    PlaceholderSet { names }
}

/// Replace every placeholder in `html` with its value, or with nothing when unresolved
///
/// Values are inserted verbatim: no escaping, and the inserted text is not
/// scanned again.
pub fn render_template<V: Values + ?Sized>(html: &str, values: &V) -> String {
    let rendered = PLACEHOLDER_RE.replace_all(html, |caps: &Captures<'_>| {
        values.lookup(&caps[1]).unwrap_or(Cow::Borrowed(""))
    });

    debug!(
        html_len = html.len(),
        rendered_len = rendered.len(),
        "render_template: done"
    );
    rendered.into_owned()
}

/// Whether `name` could appear between placeholder delimiters
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty()
        && name
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
}
