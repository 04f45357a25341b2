//! Reserved-word escaping for identifiers and quoted names.

use kotgen_parser::{NodeIndex, ParsedFile};
use kotgen_scanner::SyntaxKind;
use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;
use std::borrow::Cow;

/// Kotlin words that collide with source identifiers often enough to need
/// backtick quoting in generated declarations.
static SHOULD_BE_ESCAPED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "val", "var", "is", "as", "trait", "package", "object", "when", "type", "fun", "in",
        "This",
    ]
    .into_iter()
    .collect()
});

/// Backtick-quote `text` when it is a reserved word or contains `$`;
/// otherwise return it unchanged.
pub fn escape_if_needed(text: &str) -> Cow<'_, str> {
    if SHOULD_BE_ESCAPED.contains(text) || text.contains('$') {
        Cow::Owned(format!("`{text}`"))
    } else {
        Cow::Borrowed(text)
    }
}

/// Escaped text of a name node. Quoted names (string-literal members) are
/// stripped of their surrounding quotes first, then escaped by the same
/// rule.
pub fn escaped_name_text(file: &ParsedFile, name: NodeIndex) -> String {
    if file.node_kind(name) == SyntaxKind::StringLiteral as u16 {
        let quoted = file.text_of(name);
        return escape_if_needed(strip_quotes(quoted)).into_owned();
    }
    escape_if_needed(file.identifier_text(name)).into_owned()
}

fn strip_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'\'' || first == b'"') && bytes[bytes.len() - 1] == first {
            return &text[1..text.len() - 1];
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reserved_words_are_backtick_quoted() {
        assert_eq!(escape_if_needed("val"), "`val`");
        assert_eq!(escape_if_needed("when"), "`when`");
        assert_eq!(escape_if_needed("This"), "`This`");
    }

    #[test]
    fn dollar_sign_forces_quoting() {
        assert_eq!(escape_if_needed("x$y"), "`x$y`");
        assert_eq!(escape_if_needed("$"), "`$`");
    }

    #[test]
    fn ordinary_names_pass_through_unchanged() {
        assert!(matches!(
            escape_if_needed("normalName"),
            Cow::Borrowed("normalName")
        ));
        // Case matters: only "This" is in the reserved set.
        assert_eq!(escape_if_needed("this"), "this");
    }

    #[test]
    fn strip_quotes_removes_matching_quotes_only() {
        assert_eq!(strip_quotes("'abc'"), "abc");
        assert_eq!(strip_quotes("\"abc\""), "abc");
        assert_eq!(strip_quotes("'abc\""), "'abc\"");
        assert_eq!(strip_quotes("x"), "x");
    }
}
