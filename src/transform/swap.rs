//! Operand swapping for `==` / `!=` conditionals.

use super::Transform;
use crate::error::{Result, YodaError};
use crate::matcher::conditional::find;
use std::fmt;

/// The comparison operator of a conditional.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    Ne,
}

impl Operator {
    /// Picks the operator of a line. `==` wins when both are present.
    pub fn detect(line: impl AsRef<[u8]>) -> Option<Self> {
        let line = line.as_ref();
        if find(line, b"==").is_some() {
            Some(Operator::Eq)
        } else if find(line, b"!=").is_some() {
            Some(Operator::Ne)
        } else {
            None
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to text after the closing parenthesis of a swapped line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TrailingText {
    /// Discard it: `if(x!=y){` becomes `if(y != x)`.
    #[default]
    Drop,
    /// Keep it: `if(x!=y){` becomes `if(y != x){`.
    Keep,
}

/// Reverses the operands around the comparison operator of a line.
///
/// Everything up to and including the first `(` is kept verbatim. The left
/// operand runs to the first occurrence of the operator and the right
/// operand to the last `)`; both are trimmed of spaces and rejoined as
/// `right op left)`.
///
/// Only leading and trailing spaces of an operand are removed, so
/// `if (a + 1 == b)` becomes `if (b == a + 1)`. The classic `yoda` tool
/// deletes every space and writes `if (b == a+1)`; lines whose operands
/// contain spaces therefore differ from its output.
///
/// Lines are handled as bytes. Anything that is not one of the ASCII
/// delimiters is copied unchanged, whatever its encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct OperandSwap {
    trailing: TrailingText,
}

impl OperandSwap {
    /// Creates a swap that drops trailing text.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the trailing text mode.
    pub fn trailing(mut self, trailing: TrailingText) -> Self {
        self.trailing = trailing;
        self
    }

    /// Keeps text after the closing parenthesis.
    pub fn keep_trailing(self) -> Self {
        self.trailing(TrailingText::Keep)
    }

    /// Swaps the operands of a matched line.
    pub fn swap(&self, line: impl AsRef<[u8]>) -> Result<Vec<u8>> {
        let line = line.as_ref();
        let op = Operator::detect(line)
            .ok_or_else(|| malformed(line, "no == or != operator"))?;
        let open = line
            .iter()
            .position(|&b| b == b'(')
            .ok_or_else(|| malformed(line, "no opening parenthesis"))?;

        let (prefix, rest) = line.split_at(open + 1);
        let op_pos = find(rest, op.as_bytes())
            .ok_or_else(|| malformed(line, format!("no '{op}' after the opening parenthesis")))?;

        let left = trim_spaces(&rest[..op_pos]);
        let after = &rest[op_pos + op.as_bytes().len()..];

        // Without a closing parenthesis the whole remainder is the operand.
        let (right, tail) = match after.iter().rposition(|&b| b == b')') {
            Some(close) => (&after[..close], &after[close + 1..]),
            None => (after, &b""[..]),
        };
        let right = trim_spaces(right);

        let mut swapped = Vec::with_capacity(line.len() + 2);
        swapped.extend_from_slice(prefix);
        swapped.extend_from_slice(right);
        swapped.push(b' ');
        swapped.extend_from_slice(op.as_bytes());
        swapped.push(b' ');
        swapped.extend_from_slice(left);
        swapped.push(b')');
        if self.trailing == TrailingText::Keep {
            swapped.extend_from_slice(tail);
        }
        Ok(swapped)
    }
}

impl Transform for OperandSwap {
    fn apply(&self, line: &[u8]) -> Result<Vec<u8>> {
        self.swap(line)
    }

    fn describe(&self) -> String {
        match self.trailing {
            TrailingText::Drop => "Swap operands of ==/!= conditionals".to_string(),
            TrailingText::Keep => {
                "Swap operands of ==/!= conditionals, keeping trailing text".to_string()
            }
        }
    }
}

fn trim_spaces(bytes: &[u8]) -> &[u8] {
    let start = bytes.iter().position(|&b| b != b' ').unwrap_or(bytes.len());
    let end = bytes.iter().rposition(|&b| b != b' ').map_or(start, |i| i + 1);
    &bytes[start..end]
}

fn malformed(line: &[u8], reason: impl Into<String>) -> YodaError {
    YodaError::MalformedConditional {
        line: String::from_utf8_lossy(line).into_owned(),
        reason: reason.into(),
    }
}
