//! Noisy complaint text to workshop English.
//!
//! Three passes in order: typo rules, whole-word abbreviation expansion
//! (case-insensitive, replacement is the lower-case expansion), whitespace
//! collapse. Expansions are ordinary words, so normalizing already normalized
//! text changes nothing.

pub mod patterns;

use regex::{Captures, Regex};
use serde::Serialize;
use tracing::{debug, warn};

use garage_core::errors::ErrorCode;

use self::patterns::{abbreviation_regex, typo_rules, ABBREVIATIONS};

/// One normalization and what it changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NormalizedInput {
    pub original: String,
    pub normalized: String,
    /// `(abbreviation as found, lower-cased; expansion)` per occurrence.
    pub abbreviations_expanded: Vec<(String, String)>,
    /// Names of the typo rules that fired.
    pub typos_fixed: Vec<String>,
}

impl NormalizedInput {
    pub fn changes_made(&self) -> usize {
        self.abbreviations_expanded.len() + self.typos_fixed.len()
    }

    /// Outcome warning for a complaint that needed corrections.
    pub fn warning(&self) -> Option<String> {
        let n = self.changes_made();
        (n > 0).then(|| format!("{}: {n} corrections applied", ErrorCode::Normalized))
    }
}

pub struct InputNormalizer {
    abbreviations: Vec<(String, String)>,
    matcher: Option<Regex>,
}

impl Default for InputNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl InputNormalizer {
    /// Normalizer over the built-in abbreviation table.
    pub fn new() -> Self {
        Self::with_abbreviations(
            ABBREVIATIONS
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string())),
        )
    }

    /// Normalizer over a caller-supplied table. Keys match whole words,
    /// ignoring case. A later duplicate key wins.
    pub fn with_abbreviations(table: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut abbreviations: Vec<(String, String)> = Vec::new();
        for (key, expansion) in table {
            let key = key.trim().to_lowercase();
            match abbreviations.iter_mut().find(|(k, _)| *k == key) {
                Some(slot) => slot.1 = expansion,
                None => abbreviations.push((key, expansion)),
            }
        }
        let matcher = abbreviation_regex(abbreviations.iter().map(|(k, _)| k.as_str()));
        if matcher.is_none() && !abbreviations.is_empty() {
            warn!(
                entries = abbreviations.len(),
                "abbreviation table failed to compile; expansion disabled"
            );
        }
        Self {
            abbreviations,
            matcher,
        }
    }

    /// Expansion for `word`, ignoring case.
    pub fn expansion(&self, word: &str) -> Option<&str> {
        let word = word.to_lowercase();
        self.abbreviations
            .iter()
            .find(|(k, _)| *k == word)
            .map(|(_, v)| v.as_str())
    }

    pub fn normalize(&self, text: &str) -> NormalizedInput {
        let mut current = text.to_string();

        let mut typos_fixed = Vec::new();
        for rule in typo_rules() {
            // Patterns that failed to compile are skipped.
            let Some(re) = rule.regex.as_ref() else {
                continue;
            };
            if re.is_match(&current) {
                current = re.replace_all(&current, rule.replacement).into_owned();
                typos_fixed.push(rule.name.to_string());
            }
        }

        let mut abbreviations_expanded = Vec::new();
        if let Some(matcher) = &self.matcher {
            current = matcher
                .replace_all(&current, |caps: &Captures<'_>| {
                    let found = caps[0].to_lowercase();
                    match self.expansion(&found) {
                        Some(expansion) => {
                            let expansion = expansion.to_string();
                            if found != expansion {
                                abbreviations_expanded.push((found, expansion.clone()));
                            }
                            expansion
                        }
                        None => caps[0].to_string(),
                    }
                })
                .into_owned();
        }

        let normalized = current.split_whitespace().collect::<Vec<_>>().join(" ");
        let result = NormalizedInput {
            original: text.to_string(),
            normalized,
            abbreviations_expanded,
            typos_fixed,
        };
        if result.changes_made() > 0 {
            debug!(
                abbreviations = result.abbreviations_expanded.len(),
                typos = result.typos_fixed.len(),
                "complaint normalized"
            );
        }
        result
    }
}
