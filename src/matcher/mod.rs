//! Matchers for conditional lines.

pub mod conditional;

pub use conditional::{ConditionalMatcher, is_match, matched_segment};
