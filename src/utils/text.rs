//! Text normalization for fields read from the eReader's database.
//!
//! Highlights and notes often carry the line breaks of the page they were
//! taken from, titles carry series notes in parentheses and descriptions
//! carry inline HTML.

use std::sync::LazyLock;

use regex::{NoExpand, Regex};

/// One or more whitespace characters, including newlines and tabs.
pub static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").unwrap());

/// A parenthesized group, shortest match.
pub static PARENTHETICAL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\(.*?\)").unwrap());

/// An angle-bracket markup tag, shortest match.
pub static MARKUP_TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<.*?>").unwrap());

/// Replace every match of `pattern` with `replacement`, then trim.
///
/// `replacement` is inserted literally; `$` group references are not expanded.
pub fn normalize(text: &str, pattern: &Regex, replacement: &str) -> String {
    pattern
        .replace_all(text, NoExpand(replacement))
        .trim()
        .to_string()
}

/// Collapse whitespace runs into single spaces.
pub fn collapse_whitespace(text: &str) -> String {
    normalize(text, &WHITESPACE, " ")
}

/// Remove parenthesized groups, e.g. "Dune (Dune Chronicles, #1)" -> "Dune".
pub fn strip_parentheticals(text: &str) -> String {
    normalize(text, &PARENTHETICAL, "")
}

/// Remove markup tags, keeping their text content.
pub fn strip_markup(text: &str) -> String {
    normalize(text, &MARKUP_TAG, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_whitespace() {
        assert_eq!(
            collapse_whitespace("  It was\na bright\t\tcold day \r\n "),
            "It was a bright cold day"
        );
    }

    #[test]
    fn test_collapse_whitespace_is_idempotent() {
        let inputs = ["", "   ", "plain", " a \n\n b\tc ", "\u{a0}non\u{a0}breaking "];
        for input in inputs {
            let once = collapse_whitespace(input);
            assert_eq!(collapse_whitespace(&once), once, "input: {:?}", input);
        }
    }

    #[test]
    fn test_empty_and_unmatched_input() {
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(strip_parentheticals("No series"), "No series");
        assert_eq!(strip_markup("  No tags  "), "No tags");
    }

    #[test]
    fn test_strip_parentheticals() {
        assert_eq!(strip_parentheticals("Dune (Dune Chronicles, #1)"), "Dune");
        // Shortest match keeps text between groups
        assert_eq!(strip_parentheticals("A (b) c (d)"), "A  c");
    }

    #[test]
    fn test_strip_markup() {
        assert_eq!(
            strip_markup("<p>A <b>bold</b> story.</p>"),
            "A bold story."
        );
    }

    #[test]
    fn test_replacement_is_literal() {
        assert_eq!(normalize("a b", &WHITESPACE, "$0"), "a$0b");
    }
}
