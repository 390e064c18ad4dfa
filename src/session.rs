//! The swap driver: streams an input file into its `.YODA` sibling.

use crate::error::{Result, YodaError};
use crate::matcher::{ConditionalMatcher, matched_segment};
use crate::prompt::Confirm;
use crate::transform::{LineChange, OperandSwap, TrailingText, Transform};
use std::ffi::OsString;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Suffix appended to the input path to name the output file.
pub const OUTPUT_SUFFIX: &str = ".YODA";

/// Returns `<input>.YODA`.
pub fn output_path_for(input: &Path) -> PathBuf {
    let mut name = OsString::from(input.as_os_str());
    name.push(OUTPUT_SUFFIX);
    PathBuf::from(name)
}

/// Counters collected over one run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SwapReport {
    pub lines: usize,
    pub matched: usize,
    pub swapped: usize,
    pub declined: usize,
    /// Accepted candidates the swapper could not rebuild.
    pub malformed: usize,
    pub changes: Vec<LineChange>,
}

impl SwapReport {
    /// Returns the number of lines that differ from the input.
    pub fn lines_modified(&self) -> usize {
        self.changes.iter().filter(|c| c.is_modified()).count()
    }
}

/// Builder for a single swap run over one file.
#[derive(Debug, Clone)]
pub struct YodaSwap {
    input: PathBuf,
    output: Option<PathBuf>,
    matcher: ConditionalMatcher,
    swapper: OperandSwap,
}

impl YodaSwap {
    /// Creates a run reading from `input` and writing to `<input>.YODA`.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            matcher: ConditionalMatcher::new(),
            swapper: OperandSwap::new(),
        }
    }

    /// Writes to `path` instead of the `.YODA` sibling.
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Sets how text after the closing parenthesis is handled.
    pub fn trailing(mut self, trailing: TrailingText) -> Self {
        self.swapper = self.swapper.trailing(trailing);
        self
    }

    /// Returns the input path.
    pub fn input_path(&self) -> &Path {
        &self.input
    }

    /// Returns the path the output will be written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| output_path_for(&self.input))
    }

    /// Runs the swap, talking to the user through `prompt` and `console`.
    ///
    /// The input is opened before the output is created, so an unreadable
    /// input never leaves an output file behind.
    pub fn run<C, V>(&self, prompt: &mut C, console: &mut V) -> Result<SwapReport>
    where
        C: Confirm + ?Sized,
        V: Write + ?Sized,
    {
        let input = open_input(&self.input)?;
        writeln!(console, "Yoda Swap v{}", env!("CARGO_PKG_VERSION"))?;

        let output_path = self.output_path();
        let output = File::create(&output_path).map_err(|source| YodaError::OutputCreate {
            path: output_path.clone(),
            source,
        })?;

        info!(
            input = %self.input.display(),
            output = %output_path.display(),
            transform = %self.swapper.describe(),
            "starting swap run"
        );

        let report = self.process(
            BufReader::new(input),
            BufWriter::new(output),
            prompt,
            console,
        )?;

        writeln!(
            console,
            "\nDone. New text file is called {}",
            output_path.display()
        )?;
        console.flush()?;

        info!(
            lines = report.lines,
            matched = report.matched,
            swapped = report.swapped,
            "swap run finished"
        );
        Ok(report)
    }

    /// Streams `input` to `output` one line at a time.
    ///
    /// Every input line produces exactly one output line. Line endings are
    /// kept; a final line without one gets `\n`. Lines are matched and
    /// swapped as bytes, so text in any ASCII-compatible encoding passes
    /// through unchanged.
    pub fn process<R, W, C, V>(
        &self,
        mut input: R,
        mut output: W,
        prompt: &mut C,
        console: &mut V,
    ) -> Result<SwapReport>
    where
        R: BufRead,
        W: Write,
        C: Confirm + ?Sized,
        V: Write + ?Sized,
    {
        let mut report = SwapReport::default();
        let mut buf = Vec::new();

        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            report.lines += 1;
            let line_number = report.lines;

            let (body, ending) = split_line_ending(&buf);
            let mut line = body.to_vec();
            if self.matcher.is_match(&line) {
                report.matched += 1;
                debug!(
                    line = line_number,
                    text = %String::from_utf8_lossy(&line),
                    "conditional candidate"
                );

                writeln!(console)?;
                writeln!(console, "{}", String::from_utf8_lossy(matched_segment(&line)))?;
                console.flush()?;

                if prompt.confirm()? {
                    match self.swapper.apply(&line) {
                        Ok(swapped) => {
                            writeln!(
                                console,
                                "Swap successful: {}",
                                String::from_utf8_lossy(matched_segment(&swapped))
                            )?;
                            report.swapped += 1;
                            report.changes.push(LineChange {
                                line_number,
                                original: std::mem::replace(&mut line, swapped.clone()),
                                transformed: swapped,
                            });
                        }
                        Err(err) if !err.is_fatal() => {
                            warn!(line = line_number, %err, "leaving line unchanged");
                            writeln!(console, "Cannot swap, line left unchanged: {err}")?;
                            report.malformed += 1;
                        }
                        Err(err) => return Err(err),
                    }
                } else {
                    report.declined += 1;
                }
            }

            output.write_all(&line)?;
            output.write_all(ending)?;
        }

        output.flush()?;
        Ok(report)
    }
}

fn open_input(path: &Path) -> Result<File> {
    let file_open = |source: io::Error| YodaError::FileOpen {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(file_open)?;
    if file.metadata().map_err(file_open)?.is_dir() {
        return Err(file_open(io::Error::from(io::ErrorKind::IsADirectory)));
    }
    Ok(file)
}

/// Splits a raw line into its content and its terminator (`\n`, `\r\n`,
/// or `\n` supplied for an unterminated final line).
fn split_line_ending(raw: &[u8]) -> (&[u8], &'static [u8]) {
    if let Some(body) = raw.strip_suffix(b"\r\n") {
        (body, &b"\r\n"[..])
    } else if let Some(body) = raw.strip_suffix(b"\n") {
        (body, &b"\n"[..])
    } else {
        (raw, &b"\n"[..])
    }
}
