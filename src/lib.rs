//! # Yoda Swap
//!
//! Rewrites `if (a == b)` and `if (a != b)` conditionals into Yoda order
//! (`if (b == a)`), one confirmed line at a time.
//!
//! The input file is never modified. Every line is streamed to a sibling
//! file named `<input>.YODA`, swapped where the user agreed and unchanged
//! everywhere else.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use yoda_swap::prelude::*;
//!
//! // Swap every candidate without asking
//! let report = YodaSwap::new("src/main.c")
//!     .trailing(TrailingText::Keep)
//!     .run(&mut AutoConfirm::Yes, &mut std::io::stdout())?;
//!
//! println!("swapped {} of {} conditionals", report.swapped, report.matched);
//! # Ok::<(), yoda_swap::error::YodaError>(())
//! ```
//!
//! ## Single lines
//!
//! ```rust
//! use yoda_swap::prelude::*;
//!
//! assert!(is_match("if (answer == 42)"));
//! assert_eq!(OperandSwap::new().swap("if (answer == 42)")?, b"if (42 == answer)");
//! # Ok::<(), yoda_swap::error::YodaError>(())
//! ```
//!
//! Matching is a heuristic: spaces are ignored and any line containing
//! `if(` followed by `==` or `!=` is a candidate, including ones inside
//! comments or string literals.

pub mod diff;
pub mod error;
pub mod logger;
pub mod matcher;
pub mod prompt;
pub mod session;
pub mod transform;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::diff::{DiffSummary, colorized_diff, unified_diff};
    pub use crate::error::{Result, YodaError};
    pub use crate::matcher::{ConditionalMatcher, is_match, matched_segment};
    pub use crate::prompt::{AutoConfirm, Confirm, TokenPrompt};
    pub use crate::session::{OUTPUT_SUFFIX, SwapReport, YodaSwap, output_path_for};
    pub use crate::transform::{
        LineChange, OperandSwap, Operator, TrailingText, Transform,
    };
}

pub use prelude::*;
