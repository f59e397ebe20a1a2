//! Whitespace normalization of serialized HTML.
//!
//! Works on the serialized string, not the tree, so whitespace inside
//! `<pre>` and `<textarea>` is collapsed too. That is accepted: the output
//! is a structural skeleton, not a faithful rendering.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s{2,}").expect("valid regex"))
}

fn inter_tag_whitespace() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r">\s+<").expect("valid regex"))
}

/// Normalize whitespace in serialized HTML.
///
/// With `keep_whitespace` the input is returned unchanged. Otherwise, in
/// order:
/// 1. every run of two or more whitespace characters becomes one space
/// 2. whitespace between `>` and `<` is removed
/// 3. remaining newlines are removed
pub fn normalize(html: &str, keep_whitespace: bool) -> Cow<'_, str> {
    if keep_whitespace {
        return Cow::Borrowed(html);
    }

    let collapsed = whitespace_run().replace_all(html, " ");
    let joined = inter_tag_whitespace().replace_all(&collapsed, "><");
    Cow::Owned(joined.replace('\n', ""))
}
