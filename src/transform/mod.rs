//! Line transformations applied to matched conditionals.

pub mod swap;

pub use swap::{OperandSwap, Operator, TrailingText};

use crate::error::Result;

/// A transformation of a single source line.
pub trait Transform {
    /// Applies the transformation to the given line, without its terminator.
    fn apply(&self, line: &[u8]) -> Result<Vec<u8>>;

    /// Returns a description of the transformation.
    fn describe(&self) -> String;
}

/// A line that was rewritten during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineChange {
    /// 1-based line number in the input file.
    pub line_number: usize,
    pub original: Vec<u8>,
    pub transformed: Vec<u8>,
}

impl LineChange {
    /// Returns true if the content was modified.
    pub fn is_modified(&self) -> bool {
        self.original != self.transformed
    }
}
