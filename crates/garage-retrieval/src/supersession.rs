//! Detection of documents that declare they replace earlier guidance.

use std::sync::LazyLock;

use regex::Regex;

static OVERRIDE_MARKER: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)\b(supersedes|overrides)\b").ok());

/// Whether `content` carries a supersession marker. Audit only; never reorders.
pub fn is_override(content: &str) -> bool {
    OVERRIDE_MARKER
        .as_ref()
        .is_some_and(|re| re.is_match(content))
}
