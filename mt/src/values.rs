//! Value mappings fed to the renderer

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::hash::BuildHasher;
use std::path::Path;

use serde_json::{Number, Value};
use tracing::{debug, info};

use crate::error::TemplateError;
use crate::placeholder::{PlaceholderSet, is_valid_name};

/// Concrete mapping collected from files and command-line assignments
pub type ValueMap = BTreeMap<String, String>;

/// Source of placeholder values
///
/// `None` covers both an absent key and an explicit null; the renderer
/// treats either as the empty string.
pub trait Values {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<S: BuildHasher> Values for HashMap<String, String, S> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl<S: BuildHasher> Values for HashMap<String, Option<String>, S> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)?.as_deref().map(Cow::Borrowed)
    }
}

impl Values for BTreeMap<String, String> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl Values for BTreeMap<String, Option<String>> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name)?.as_deref().map(Cow::Borrowed)
    }
}

impl Values for serde_json::Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(stringify)
    }
}

/// Only JSON objects resolve anything
impl Values for Value {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        match self {
            Value::Object(map) => map.lookup(name),
            _ => None,
        }
    }
}

impl<T: Values + ?Sized> Values for &T {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(name)
    }
}

impl<T: Values> Values for Option<T> {
    fn lookup(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_ref()?.lookup(name)
    }
}

/// Render a JSON value as text, the way a form field would hold it
///
/// Null has no text. Whole floats print without a fractional part.
fn stringify(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Number(n) => Some(Cow::Owned(number_to_string(n))),
        other => Some(Cow::Owned(other.to_string())),
    }
}

fn number_to_string(n: &Number) -> String {
    match n.as_f64() {
        Some(f) if n.is_f64() && f == 0.0 => "0".to_string(),
        Some(f) if n.is_f64() && f.is_finite() && f.fract() == 0.0 && f.abs() < 1e21 => format!("{f:.0}"),
        _ => n.to_string(),
    }
}

/// A mapping that binds every placeholder to the empty string
pub fn blank_values(set: &PlaceholderSet) -> ValueMap {
    set.iter().map(|name| (name.to_string(), String::new())).collect()
}

/// Split `KEY=VALUE` on the first `=`
pub fn parse_assignment(input: &str) -> Result<(String, String), TemplateError> {
    match input.split_once('=') {
        Some((key, value)) if is_valid_name(key) => Ok((key.to_string(), value.to_string())),
        _ => Err(TemplateError::InvalidAssignment {
            input: input.to_string(),
        }),
    }
}

/// Load a JSON or YAML mapping of placeholder values
///
/// The format follows the extension (`.yml`/`.yaml` is YAML, anything else
/// JSON). Scalars are stringified and null entries dropped.
pub fn load_values(path: impl AsRef<Path>) -> Result<ValueMap, TemplateError> {
    let path = path.as_ref();
    debug!(?path, "load_values: called");

    let content = fs::read_to_string(path).map_err(|source| TemplateError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let is_yaml = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("yml") || e.eq_ignore_ascii_case("yaml"));

    let parsed: Value = if is_yaml {
        serde_yaml::from_str(&content).map_err(|e| TemplateError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        serde_json::from_str(&content).map_err(|e| TemplateError::Parse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let Value::Object(map) = parsed else {
        return Err(TemplateError::NotAnObject {
            path: path.to_path_buf(),
        });
    };

    let values: ValueMap = map
        .iter()
        .filter_map(|(key, value)| stringify(value).map(|v| (key.clone(), v.into_owned())))
        .collect();

    info!(?path, count = values.len(), "Loaded values");
    Ok(values)
}
