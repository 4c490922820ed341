//! Query translation: free text in, canonical keywords out.
//!
//! Translation runs in fixed stages:
//!
//! 1. Normalize: keep letters, digits, and whitespace; upper-case; trim.
//! 2. Split off the exclusion tail at the first `EXCLUDES`/`EXCLUDE` token.
//! 3. Remove filler words as whole, space-bounded tokens. The working text
//!    is padded with one space on each side so fillers at the start and end
//!    of the input are removed too.
//! 4. Scan triggers in dictionary insertion order. For a trigger present in
//!    the remaining text, check each of its groups: the first alternate
//!    found is resolved to the group's canonical keyword and **every**
//!    occurrence of that alternate is replaced by a single space, not just
//!    the first one. The residual never retains a resolved phrase.
//! 5. Whatever text survives becomes the residual, with whitespace runs
//!    collapsed.
//!
//! Triggers themselves are never removed from the text, and each trigger is
//! evaluated exactly once per call.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::text;

use super::dictionary::SynonymDictionary;

/// Words removed before trigger scanning when space-bounded.
const FILLER_WORDS: [&str; 3] = ["A", "AN", "THE"];

/// Tokens that switch the rest of the input into exclusion mode.
const EXCLUDE_MARKERS: [&str; 2] = ["EXCLUDES", "EXCLUDE"];

/// Result of translating one raw query line.
///
/// `keywords` may repeat if the same keyword is triggered more than once;
/// consumers treat it as a set. An empty `residual` means the input was
/// fully resolved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranslatedQuery {
    /// Canonical keywords a matching card must carry.
    pub keywords: Vec<String>,
    /// Canonical keywords a matching card must NOT carry.
    pub exclusions: Vec<String>,
    /// Normalized leftover text for free-text base-field matching.
    pub residual: String,
}

impl TranslatedQuery {
    /// True if the query carries anything to match on.
    #[must_use]
    pub fn has_criteria(&self) -> bool {
        !self.keywords.is_empty() || !self.exclusions.is_empty() || !self.residual.is_empty()
    }
}

/// Translate one raw line of user text against a dictionary.
#[must_use]
pub fn translate(raw: &str, dictionary: &SynonymDictionary) -> TranslatedQuery {
    let normalized = normalize(raw);
    let (required, excluded) = split_exclusions(&normalized);

    let (keywords, residual) = consume_phrases(&required, dictionary);

    let mut exclusions = Vec::new();
    if let Some(excluded) = excluded {
        let (excluded_keywords, excluded_residual) = consume_phrases(&excluded, dictionary);
        exclusions.extend(excluded_keywords);
        // Unresolved exclusion tokens still name things to reject.
        exclusions.extend(excluded_residual.split_whitespace().map(str::to_owned));
    }

    TranslatedQuery {
        keywords,
        exclusions,
        residual,
    }
}

/// Reduce raw input to upper-case letters, digits, and single spaces.
fn normalize(raw: &str) -> String {
    text::keep_alphanumeric(raw)
        .to_uppercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Split normalized input at the first exclusion marker.
fn split_exclusions(input: &str) -> (String, Option<String>) {
    let words: Vec<&str> = input.split_whitespace().collect();
    match words.iter().position(|word| EXCLUDE_MARKERS.contains(word)) {
        Some(position) => (
            words[..position].join(" "),
            Some(words[position + 1..].join(" ")),
        ),
        None => (words.join(" "), None),
    }
}

/// Run the trigger scan over one normalized fragment.
fn consume_phrases(input: &str, dictionary: &SynonymDictionary) -> (Vec<String>, String) {
    let mut working = format!(" {input} ");
    for filler in FILLER_WORDS {
        working = working.replace(&format!(" {filler} "), " ");
    }

    let mut keywords = Vec::new();
    for entry in dictionary.entries() {
        if text::is_blank(&working) {
            break;
        }
        if !working.contains(entry.trigger.as_str()) {
            continue;
        }

        for group in &entry.groups {
            for alternate in &group.alternates {
                if working.contains(alternate.as_str()) {
                    debug!(
                        trigger = %entry.trigger,
                        alternate = %alternate,
                        keyword = %group.keyword,
                        "resolved phrase"
                    );
                    keywords.push(group.keyword.clone());
                    working = working.replace(alternate.as_str(), " ");
                    break;
                }
            }
        }
    }

    let residual = working.split_whitespace().collect::<Vec<_>>().join(" ");
    (keywords, residual)
}
