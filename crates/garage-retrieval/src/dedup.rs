//! Content-prefix signatures for near-duplicate suppression.

use std::collections::HashSet;

use garage_core::constants::DEDUP_PREFIX_CHARS;

/// blake3 of the lower-cased, whitespace-collapsed first 100 characters.
pub fn content_signature(content: &str) -> blake3::Hash {
    let normalized: String = content
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
        .chars()
        .take(DEDUP_PREFIX_CHARS)
        .collect();
    blake3::hash(normalized.as_bytes())
}

/// Keep the first item for each signature, preserving order.
pub fn deduplicate<T>(items: Vec<T>, content: impl Fn(&T) -> &str) -> Vec<T> {
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(content_signature(content(item))))
        .collect()
}
