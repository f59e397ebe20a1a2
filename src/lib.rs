//! html-skeleton library
//!
//! Strips an HTML document down to its structural skeleton: `<script>` and
//! `<style>` elements are removed, every attribute is dropped, and
//! whitespace between tags is optionally collapsed.

pub mod cli;
pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod normalize;
pub mod process;
pub mod source;
pub mod transforms;

pub use config::Config;
pub use dom::{Document, Node, ParseMode};
pub use error::{HtmlError, SourceError};
pub use normalize::normalize;
pub use process::{process_html, ProcessOptions};
pub use source::{InputSource, OutputSink, SystemTty, TtyProbe};
pub use transforms::{clean, Transform, TreeCleaner};
