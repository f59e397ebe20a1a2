//! Command-line definition, shared by the binary and the docs generator.

use std::path::PathBuf;

use clap::Parser;

use crate::dom::ParseMode;

#[derive(Debug, Parser)]
#[command(name = "html-skeleton")]
#[command(version)]
#[command(
    about = "Strip scripts, styles and attributes from HTML, leaving its structural skeleton"
)]
#[command(long_about = "Strip scripts, styles and attributes from HTML, leaving its structural skeleton.

Removes every <script> and <style> element, drops all attributes and, unless
--keep-whitespace is given, collapses whitespace between tags.

Defaults can be set in ~/.config/html-skeleton/config.toml (or the file named
by HTML_SKELETON_CONFIG). Set HTML_SKELETON_LOG=debug for diagnostics on stderr.")]
pub struct Cli {
    /// Input HTML file (if not specified, stdin will be used)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Keep whitespace and newlines in HTML
    #[arg(short, long)]
    pub keep_whitespace: bool,

    /// Output file (if not specified, stdout will be used)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Parse input as a complete document, adding <html>, <head> and <body> when missing
    #[arg(long, conflicts_with = "fragment")]
    pub document: bool,

    /// Parse input as a body fragment, even if it starts with a doctype
    #[arg(long)]
    pub fragment: bool,
}

impl Cli {
    /// Parse mode forced on the command line, if any.
    pub fn parse_mode(&self) -> Option<ParseMode> {
        if self.document {
            Some(ParseMode::Document)
        } else if self.fragment {
            Some(ParseMode::Fragment)
        } else {
            None
        }
    }
}
