//! MailTemplate - placeholder templating for HTML email templates
//!
//! Templates are opaque HTML containing `{{name}}` placeholders. The engine
//! discovers which names a template uses and substitutes caller-supplied
//! values into them. Everything else in this crate supports the form and
//! export workflow built around those two operations.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use mailtemplate::{extract_placeholders, render_template};
//!
//! let html = "<p>Hi {{ name }}, {{missing}}!</p>";
//! let fields = extract_placeholders(html);
//! assert_eq!(fields.as_slice(), ["name", "missing"]);
//!
//! let values = HashMap::from([("name".to_string(), "Ana".to_string())]);
//! assert_eq!(render_template(html, &values), "<p>Hi Ana, !</p>");
//! ```

mod error;
pub mod export;
pub mod fields;
mod placeholder;
pub mod required;
pub mod values;

pub use error::TemplateError;
pub use fields::{Field, FieldKind, form_fields};
pub use placeholder::{PlaceholderSet, extract_placeholders, is_valid_name, render_template};
pub use values::{ValueMap, Values};

/// Field names containing any of these (case-insensitively) get a multi-line editor
pub const DEFAULT_MULTILINE_KEYWORDS: &[&str] = &["body", "content", "message", "desc", "description"];
