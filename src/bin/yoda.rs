//! CLI for yoda-swap.

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use yoda_swap::logger;
use yoda_swap::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "yoda")]
#[command(author, version, about = "Swap the operands of if (a == b) conditionals", long_about = None)]
struct Cli {
    /// Source file to scan; the result is written to <FILE>.YODA
    file: PathBuf,

    /// Swap every match without asking
    #[arg(short, long)]
    yes: bool,

    /// Keep text after the closing parenthesis (e.g. a trailing `{`)
    #[arg(long)]
    keep_trailing: bool,

    /// Write to this path instead of <FILE>.YODA
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print a diff of the input against the output when done
    #[arg(long)]
    diff: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => return usage_failure(err),
    };

    logger::init_cli_logger(cli.verbose);
    tracing::debug!(?cli, "parsed arguments");

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!("{err:#}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

/// Help and version go to stdout with success; a wrong argument count gets
/// the single-file diagnostic. Every failure exits with status 1.
fn usage_failure(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        ErrorKind::MissingRequiredArgument | ErrorKind::UnknownArgument => {
            eprintln!("{}", YodaError::Usage);
            ExitCode::FAILURE
        }
        _ => {
            let _ = err.print();
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let trailing = if cli.keep_trailing {
        TrailingText::Keep
    } else {
        TrailingText::Drop
    };

    let mut swap = YodaSwap::new(&cli.file).trailing(trailing);
    if let Some(output) = cli.output {
        swap = swap.output(output);
    }

    let mut prompt: Box<dyn Confirm> = if cli.yes {
        Box::new(AutoConfirm::Yes)
    } else {
        Box::new(TokenPrompt::stdio())
    };

    let report = swap.run(prompt.as_mut(), &mut io::stdout())?;

    if cli.diff {
        print_diff(&swap, &report)?;
    }

    Ok(())
}

fn print_diff(swap: &YodaSwap, report: &SwapReport) -> Result<()> {
    let output_path = swap.output_path();
    let original = fs::read(swap.input_path())
        .with_context(|| format!("Failed to read {}", swap.input_path().display()))?;
    let swapped = fs::read(&output_path)
        .with_context(|| format!("Failed to read {}", output_path.display()))?;

    let original = String::from_utf8_lossy(&original);
    let swapped = String::from_utf8_lossy(&swapped);

    if report.lines_modified() > 0 {
        println!();
        print!(
            "{}",
            colorized_diff(&original, &swapped, swap.input_path(), &output_path)
        );
    }
    println!("\n{}", DiffSummary::from_diff(&original, &swapped));

    Ok(())
}
