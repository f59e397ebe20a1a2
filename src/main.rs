//! html-skeleton - CLI entry point

use std::io::{self, Read, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::{debug, warn};

use html_skeleton::cli::Cli;
use html_skeleton::logging::init_logging;
use html_skeleton::{
    process_html, Config, InputSource, OutputSink, ProcessOptions, SourceError, SystemTty, TtyProbe,
};

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // --help and --version
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            let _ = e.print();
            return ExitCode::from(1);
        }
    };

    if let Err(e) = init_logging() {
        eprintln!("Warning: {:#}", e);
    }

    match run(cli, &SystemTty, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", error_message(&e));
            ExitCode::from(1)
        }
    }
}

fn run<R: Read, W: Write>(cli: Cli, tty: &impl TtyProbe, stdin: R, mut stdout: W) -> Result<()> {
    let source = InputSource::resolve(cli.input.as_deref(), tty);
    let input = match source.read_from(stdin) {
        Ok(input) => input,
        Err(SourceError::Interactive) => {
            // Nothing piped in and no file named: show usage instead of waiting.
            write!(stdout, "{}", Cli::command().render_help())?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };
    if input.is_empty() {
        warn!("input is empty");
    }

    let config = Config::load()?;
    let options = resolve_options(&cli, &config);
    debug!(?options, "resolved options");

    let output = process_html(&input, &options).context("Failed to process HTML")?;

    OutputSink::resolve(cli.output.as_deref()).write_to(&output, stdout)?;
    Ok(())
}

/// Command line beats config file beats built-in defaults.
fn resolve_options(cli: &Cli, config: &Config) -> ProcessOptions {
    ProcessOptions::default()
        .keep_whitespace(cli.keep_whitespace || config.output.keep_whitespace)
        .parse_mode(cli.parse_mode().unwrap_or(config.parse.mode))
}

/// One-line description of an error and its causes.
fn error_message(error: &anyhow::Error) -> String {
    let message = format!("{:#}", error);
    if message.trim().is_empty() {
        "Unknown error".to_string()
    } else {
        message
    }
}
