//! Heuristic detection of `if (a == b)` / `if (a != b)` lines.
//!
//! Lines are raw bytes so sources in any ASCII-compatible encoding match.

use regex::bytes::Regex;
use std::sync::LazyLock;

/// `if(` followed anywhere later by a comparison, checked against a line
/// with its spaces removed.
static CONDITIONAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?-u)if\(.*(?:==|!=)").expect("invalid regex"));

/// Recognizes candidate conditional lines.
///
/// This is a substring scan, not a parser. Comparisons inside string
/// literals or comments match too, and the operator does not have to sit
/// inside the parentheses that follow `if`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConditionalMatcher;

impl ConditionalMatcher {
    /// Creates a new conditional matcher.
    pub fn new() -> Self {
        Self
    }

    /// Tests whether the line is a candidate for an operand swap.
    pub fn is_match(&self, line: impl AsRef<[u8]>) -> bool {
        CONDITIONAL.is_match(&strip_spaces(line.as_ref()))
    }
}

/// Tests whether the line is a candidate for an operand swap.
pub fn is_match(line: impl AsRef<[u8]>) -> bool {
    ConditionalMatcher.is_match(line)
}

/// The portion of the line from the first `if` onward.
///
/// Falls back to the whole line when the keyword is split by spaces.
pub fn matched_segment(line: &[u8]) -> &[u8] {
    find(line, b"if").map_or(line, |idx| &line[idx..])
}

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

fn strip_spaces(line: &[u8]) -> Vec<u8> {
    line.iter().copied().filter(|&b| b != b' ').collect()
}
