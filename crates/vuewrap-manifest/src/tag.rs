//! Custom element tag name validation.

use regex::Regex;
use std::sync::LazyLock;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)+$").unwrap());

/// Check that `tag` is a valid custom element name.
///
/// The name must start with a lowercase ASCII letter and consist of
/// hyphen-separated segments of lowercase letters and digits, with at least
/// one hyphen and no empty segment.
pub fn is_valid_tag(tag: &str) -> bool {
    TAG_RE.is_match(tag)
}
