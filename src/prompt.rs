//! Interactive y/n confirmation.

use crate::error::Result;
use std::collections::VecDeque;
use std::io::{self, BufRead, Stdout, StdinLock, Write};
use tracing::warn;

const QUESTION: &str = "Perform swap? (y/n) ";

/// Decides whether a matched line gets swapped.
pub trait Confirm {
    /// Returns true if the swap should be applied.
    fn confirm(&mut self) -> Result<bool>;
}

/// Answers every question the same way without reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoConfirm {
    Yes,
    No,
}

impl Confirm for AutoConfirm {
    fn confirm(&mut self) -> Result<bool> {
        Ok(*self == AutoConfirm::Yes)
    }
}

/// Asks on `output` and reads whitespace-separated answers from `input`.
///
/// Only the exact tokens `y` and `n` are accepted; anything else repeats
/// the question. End of input counts as `n`.
pub struct TokenPrompt<R, W> {
    input: R,
    output: W,
    pending: VecDeque<String>,
    exhausted: bool,
}

impl TokenPrompt<StdinLock<'static>, Stdout> {
    /// A prompt on the process's stdin and stdout.
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TokenPrompt<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            pending: VecDeque::new(),
            exhausted: false,
        }
    }

    /// Consumes the prompt, returning the output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_token(&mut self) -> Result<Option<String>> {
        loop {
            if let Some(token) = self.pending.pop_front() {
                return Ok(Some(token));
            }
            if self.exhausted {
                return Ok(None);
            }

            // Undecodable bytes become part of a token that is never `y` or `n`.
            let mut buf = Vec::new();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                warn!("standard input closed, declining remaining swaps");
                self.exhausted = true;
                return Ok(None);
            }
            self.pending.extend(
                String::from_utf8_lossy(&buf)
                    .split_whitespace()
                    .map(str::to_string),
            );
        }
    }
}

impl<R: BufRead, W: Write> Confirm for TokenPrompt<R, W> {
    fn confirm(&mut self) -> Result<bool> {
        loop {
            write!(self.output, "{QUESTION}")?;
            self.output.flush()?;

            match self.next_token()?.as_deref() {
                Some("y") => return Ok(true),
                Some("n") => return Ok(false),
                Some(_) => continue,
                None => {
                    writeln!(self.output)?;
                    return Ok(false);
                }
            }
        }
    }
}
