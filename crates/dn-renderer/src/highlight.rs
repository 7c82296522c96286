//! Syntax highlighting for fenced code blocks.

use std::sync::OnceLock;

use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Bundled grammar set, loaded once per process.
fn syntax_set() -> &'static SyntaxSet {
    static SYNTAXES: OnceLock<SyntaxSet> = OnceLock::new();
    SYNTAXES.get_or_init(SyntaxSet::load_defaults_newlines)
}

/// Highlight `source` as `lang` into class-annotated token spans.
///
/// Returns `None` when the language token is unrecognized or the grammar
/// chokes on the input; the caller falls back to escaped plain code either
/// way. A failed highlight is logged but never surfaced as an error.
pub(crate) fn highlight(lang: &str, source: &str) -> Option<String> {
    let set = syntax_set();
    let syntax = set.find_syntax_by_token(lang)?;

    let mut generator = ClassedHTMLGenerator::new_with_class_style(syntax, set, ClassStyle::Spaced);
    for line in LinesWithEndings::from(source) {
        if let Err(error) = generator.parse_html_for_line_which_includes_newline(line) {
            tracing::warn!(language = lang, %error, "highlight failed, rendering plain code");
            return None;
        }
    }

    Some(generator.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_language_produces_spans() {
        let html = highlight("rust", "fn main() {}\n").unwrap();
        assert!(html.contains("<span"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_language_aliases_resolve() {
        assert!(highlight("js", "const x = 1;\n").is_some());
        assert!(highlight("py", "x = 1\n").is_some());
    }

    #[test]
    fn test_unknown_language_is_none() {
        assert_eq!(highlight("no-such-grammar", "text\n"), None);
    }

    #[test]
    fn test_output_is_escaped() {
        let html = highlight("html", "<body>&amp;</body>\n").unwrap();
        assert!(!html.contains("<body>"));
        assert!(html.contains("&lt;"));
    }
}
