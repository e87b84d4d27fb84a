//! MailForm - fill HTML email templates from the command line
//!
//! The form workflow of the templating engine: discover a template's fields,
//! collect values for them, then preview or export the rendered HTML.
//!
//! ```text
//! mf fields welcome.html
//! mf init welcome.html > values.json
//! mf render welcome.html --values values.json --set title="Hello"
//! mf export welcome.html --values values.json --dir out/
//! ```

pub mod cli;
pub mod config;
pub mod input;
