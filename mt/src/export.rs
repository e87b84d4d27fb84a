//! Export naming and preview helpers

use std::path::Path;

/// Shown in place of a preview when the rendered template has no content
pub const EMPTY_PREVIEW: &str = "<!doctype html><html><body style='background:#0a0a0a;color:#e5e7eb;font-family:sans-serif;padding:16px'>No content</body></html>";

/// Lower-case `name` with each whitespace run replaced by `-`
///
/// Leading and trailing runs become dashes too; callers trim names first.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_whitespace = false;
    for c in name.chars() {
        if c.is_whitespace() || c == '\u{FEFF}' {
            if !in_whitespace {
                slug.push('-');
            }
            in_whitespace = true;
        } else {
            slug.push(c);
            in_whitespace = false;
        }
    }
    slug.to_lowercase()
}

/// File name for an exported, rendered template
pub fn rendered_file_name(name: &str) -> String {
    format!("{}-rendered.html", slugify(name))
}

/// File name for an exported raw template
pub fn template_file_name(name: &str) -> String {
    format!("{}.html", slugify(name))
}

/// Template name taken from an uploaded file, minus any `.html`/`.htm` suffix
pub fn template_name_from_path(path: impl AsRef<Path>) -> Option<String> {
    let file_name = path.as_ref().file_name()?.to_str()?;
    let name = [".html", ".htm"]
        .iter()
        .find_map(|ext| strip_suffix_ignore_case(file_name, ext))
        .unwrap_or(file_name);
    Some(name.to_string())
}

fn strip_suffix_ignore_case<'a>(s: &'a str, suffix: &str) -> Option<&'a str> {
    let split = s.len().checked_sub(suffix.len())?;
    let tail = s.get(split..)?;
    tail.eq_ignore_ascii_case(suffix).then(|| &s[..split])
}

/// HTML to show in a preview pane
pub fn preview_document(rendered: &str) -> &str {
    if rendered.is_empty() { EMPTY_PREVIEW } else { rendered }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Order Receipt"), "order-receipt");
        assert_eq!(slugify("Weekly \t News\nLetter"), "weekly-news-letter");
        assert_eq!(slugify(" Weekly News "), "-weekly-news-");
        assert_eq!(slugify("already-slugged"), "already-slugged");
    }

    #[test]
    fn test_export_file_names() {
        assert_eq!(rendered_file_name("Order Receipt"), "order-receipt-rendered.html");
        assert_eq!(template_file_name("Order Receipt"), "order-receipt.html");
    }

    #[test]
    fn test_template_name_from_path() {
        assert_eq!(template_name_from_path("mail/Welcome.HTML").as_deref(), Some("Welcome"));
        assert_eq!(template_name_from_path("promo.htm").as_deref(), Some("promo"));
        assert_eq!(template_name_from_path("notes.txt").as_deref(), Some("notes.txt"));
        assert_eq!(template_name_from_path("ünïcode.html").as_deref(), Some("ünïcode"));
        assert_eq!(template_name_from_path("/").as_deref(), None);
    }

    #[test]
    fn test_preview_document_fallback() {
        assert_eq!(preview_document("<p>Hi</p>"), "<p>Hi</p>");
        assert_eq!(preview_document(""), EMPTY_PREVIEW);
        assert_eq!(preview_document(" \n"), " \n");
    }
}
