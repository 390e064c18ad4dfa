//! Diff generation for reviewing a swap run.

use similar::{ChangeTag, TextDiff};
use std::fmt::{self, Write};
use std::path::Path;

// ANSI color codes
const RED: &str = "\x1b[31m";
const GREEN: &str = "\x1b[32m";
const CYAN: &str = "\x1b[36m";
const RESET: &str = "\x1b[0m";

/// Generates a unified diff between the input file and the swapped output.
pub fn unified_diff(original: &str, modified: &str, from: &Path, to: &Path) -> String {
    let mut output = String::new();
    // Writing into a String cannot fail.
    let _ = render(&mut output, original, modified, from, to, false);
    output
}

/// Colorized diff output for terminal display.
pub fn colorized_diff(original: &str, modified: &str, from: &Path, to: &Path) -> String {
    let mut output = String::new();
    let _ = render(&mut output, original, modified, from, to, true);
    output
}

fn render(
    output: &mut String,
    original: &str,
    modified: &str,
    from: &Path,
    to: &Path,
    color: bool,
) -> fmt::Result {
    let diff = TextDiff::from_lines(original, modified);
    let paint = |code: &'static str| if color { code } else { "" };

    writeln!(output, "{}--- a/{}{}", paint(CYAN), from.display(), paint(RESET))?;
    writeln!(output, "{}+++ b/{}{}", paint(CYAN), to.display(), paint(RESET))?;

    for (idx, group) in diff.grouped_ops(3).iter().enumerate() {
        if idx > 0 {
            writeln!(output)?;
        }

        for op in group {
            for change in diff.iter_changes(op) {
                let (sign, code) = match change.tag() {
                    ChangeTag::Delete => ("-", RED),
                    ChangeTag::Insert => ("+", GREEN),
                    ChangeTag::Equal => (" ", ""),
                };

                if code.is_empty() || !color {
                    write!(output, "{}{}", sign, change.value())?;
                } else {
                    write!(output, "{}{}{}{}", code, sign, change.value(), RESET)?;
                }
                if change.missing_newline() {
                    writeln!(output)?;
                }
            }
        }
    }

    Ok(())
}

/// Represents a summary of changes.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct DiffSummary {
    pub insertions: usize,
    pub deletions: usize,
}

impl DiffSummary {
    /// Creates a summary from original and modified content.
    pub fn from_diff(original: &str, modified: &str) -> Self {
        let diff = TextDiff::from_lines(original, modified);
        let mut summary = Self::default();

        for change in diff.iter_all_changes() {
            match change.tag() {
                ChangeTag::Insert => summary.insertions += 1,
                ChangeTag::Delete => summary.deletions += 1,
                ChangeTag::Equal => {}
            }
        }

        summary
    }

    /// Returns true if both sides are identical.
    pub fn is_empty(&self) -> bool {
        self.insertions == 0 && self.deletions == 0
    }
}

impl fmt::Display for DiffSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} insertions(+), {} deletions(-)",
            self.insertions, self.deletions
        )
    }
}
