//! Markdown-to-HTML conversion
//!
//! Thin wrapper around `pulldown-cmark` with the common GFM-style
//! extensions enabled. Conversion itself is infallible synchronous work;
//! trust decisions happen afterwards in [`crate::sanitize`].

use pulldown_cmark::{Options, Parser, html};

/// Convert markdown text to an HTML fragment
///
/// Enables strikethrough, tables, footnotes, and task lists on top of
/// CommonMark.
pub fn to_html(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut out = String::new();
    html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_and_paragraph() {
        let out = to_html("# Title\n\nBody text.");
        assert!(out.contains("<h1>Title</h1>"));
        assert!(out.contains("<p>Body text.</p>"));
    }

    #[test]
    fn test_table_extension_enabled() {
        let out = to_html("| a | b |\n|---|---|\n| 1 | 2 |");
        assert!(out.contains("<table>"));
    }

    #[test]
    fn test_strikethrough_extension_enabled() {
        let out = to_html("~~gone~~");
        assert!(out.contains("<del>gone</del>"));
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(to_html(""), "");
    }
}
