//! End-to-end processing: parse, clean, serialize, normalize.

use tracing::debug;

use crate::dom::{self, ParseMode};
use crate::error::HtmlError;
use crate::normalize::normalize;
use crate::transforms::{Transform, TreeCleaner};

/// Options for [`process_html`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProcessOptions {
    /// Skip whitespace normalization of the serialized output.
    pub keep_whitespace: bool,
    pub parse_mode: ParseMode,
}

impl ProcessOptions {
    pub fn keep_whitespace(mut self, keep: bool) -> Self {
        self.keep_whitespace = keep;
        self
    }

    pub fn parse_mode(mut self, mode: ParseMode) -> Self {
        self.parse_mode = mode;
        self
    }
}

/// Strip scripts, styles and attributes from an HTML document.
///
/// # Example
///
/// ```
/// use html_skeleton::{process_html, ProcessOptions};
///
/// let html = r#"<div class="a"><script>alert(1)</script><p id="x">Hi</p></div>"#;
/// let out = process_html(html, &ProcessOptions::default()).unwrap();
/// assert_eq!(out, "<div><p>Hi</p></div>");
/// ```
pub fn process_html(input: &str, options: &ProcessOptions) -> Result<String, HtmlError> {
    let mut document = dom::parse(input, options.parse_mode);

    let before = document.node_count();
    TreeCleaner.transform(&mut document.children);
    debug!(
        before,
        after = document.node_count(),
        "cleaned document tree"
    );

    let html = dom::serialize(&document)?;
    Ok(normalize(&html, options.keep_whitespace).into_owned())
}
