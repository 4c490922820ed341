//! Synonym dictionary: trigger tokens and their synonym groups.
//!
//! The dictionary is a two-tier structure. A *trigger token* is a coarse
//! string whose presence in normalized input activates its *synonym groups*;
//! each group lists alternate surface forms that all resolve to one canonical
//! keyword. Several rule lines may share a trigger; their groups accumulate
//! in file order and are never overwritten.
//!
//! ## Iteration order
//!
//! Entries iterate in insertion order, i.e. the first appearance of each
//! trigger in the rule source. Which trigger wins when several could match
//! the same input span is therefore a property of the rule file, not of a
//! hash function.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use tracing::{debug, info};

/// Sentinel line marking the start of data records in a rule source.
const DATA_START: &str = "@@@";

/// Delimiter between the three fields of a rule line.
const FIELD_DELIMITER: char = '@';

/// Delimiter between alternate surface forms within a rule line.
const ALTERNATE_DELIMITER: char = ',';

/// Failure to load a rule source.
#[derive(Debug, Error)]
pub enum DictionaryError {
    /// A rule line did not split into exactly 3 fields.
    #[error("{source_name}: rule record #{record}: expected 3 fields, found {found}")]
    FieldCount {
        /// Rule source identifier.
        source_name: String,
        /// 1-based index among data records (lines after the sentinel).
        record: usize,
        /// Fields actually found.
        found: usize,
    },

    /// The underlying reader failed.
    #[error("failed to read rule source")]
    Io(#[from] std::io::Error),
}

/// One set of surface forms resolving to a canonical keyword.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymGroup {
    /// Alternates in rule order; the first one present in the input wins.
    pub alternates: SmallVec<[String; 4]>,
    /// Canonical keyword emitted when an alternate matches.
    pub keyword: String,
}

/// Every group registered under one trigger token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymEntry {
    /// The trigger token.
    pub trigger: String,
    /// Groups in registration order.
    pub groups: Vec<SynonymGroup>,
}

/// The query vocabulary, loaded once per session and read-only thereafter.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct SynonymDictionary {
    entries: Vec<SynonymEntry>,
    index: FxHashMap<String, usize>,
}

impl SynonymDictionary {
    /// Create an empty dictionary.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a dictionary from a file path.
    ///
    /// The file handle lives only for the duration of the call.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::load(BufReader::new(file), &path.display().to_string())
    }

    /// Parse a dictionary from any line source.
    ///
    /// Lines before the `@@@` sentinel are ignored. Each line after it must
    /// split on `@` into exactly three fields: trigger token, comma-separated
    /// alternates, canonical keyword.
    pub fn load(reader: impl BufRead, source: &str) -> Result<Self, DictionaryError> {
        let mut dictionary = Self::new();
        let mut started = false;
        let mut record = 0;

        for line in reader.lines() {
            let line = line?;
            if !started {
                started = line.trim() == DATA_START;
                continue;
            }

            record += 1;
            let fields: Vec<&str> = line.split(FIELD_DELIMITER).collect();
            if fields.len() != 3 {
                return Err(DictionaryError::FieldCount {
                    source_name: source.to_string(),
                    record,
                    found: fields.len(),
                });
            }

            dictionary.insert(fields[0], fields[1].split(ALTERNATE_DELIMITER), fields[2]);
            debug!(trigger = fields[0], keyword = fields[2], "registered synonym group");
        }

        info!(
            triggers = dictionary.len(),
            records = record,
            source,
            "dictionary loaded"
        );
        Ok(dictionary)
    }

    /// Register one synonym group under a trigger.
    ///
    /// Triggers and alternates are upper-cased to align with normalized query
    /// text. A repeated trigger appends the group to the existing entry.
    /// Empty alternates are dropped; an empty pattern would match everywhere.
    pub fn insert<I, S>(&mut self, trigger: &str, alternates: I, keyword: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let trigger = trigger.to_uppercase();
        let group = SynonymGroup {
            alternates: alternates
                .into_iter()
                .map(|alternate| alternate.as_ref().to_uppercase())
                .filter(|alternate| !alternate.is_empty())
                .collect(),
            keyword: keyword.to_string(),
        };

        match self.index.get(&trigger) {
            Some(&position) => self.entries[position].groups.push(group),
            None => {
                self.index.insert(trigger.clone(), self.entries.len());
                self.entries.push(SynonymEntry {
                    trigger,
                    groups: vec![group],
                });
            }
        }
    }

    /// Number of distinct triggers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the dictionary holds no triggers.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up the entry for a trigger, if registered.
    #[must_use]
    pub fn get(&self, trigger: &str) -> Option<&SynonymEntry> {
        self.index
            .get(&trigger.to_uppercase())
            .map(|&position| &self.entries[position])
    }

    /// Iterate entries in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = &SynonymEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_accumulates_groups() {
        let mut dictionary = SynonymDictionary::new();
        dictionary.insert("FLY", ["FLYING", "FLIES"], "FLYING");
        dictionary.insert("FLY", ["AIRBORNE"], "FLYING");

        assert_eq!(dictionary.len(), 1);
        let entry = dictionary.get("FLY").expect("registered trigger");
        assert_eq!(entry.groups.len(), 2);
        assert_eq!(entry.groups[0].alternates.as_slice(), ["FLYING", "FLIES"]);
        assert_eq!(entry.groups[1].alternates.as_slice(), ["AIRBORNE"]);
    }

    #[test]
    fn test_load_skips_preamble_until_sentinel() {
        let text = "\
this line is commentary and has no fields at all
so@is@this@one@with@too@many
@@@
FLY@FLYING,FLIES@FLYING
";
        let dictionary =
            SynonymDictionary::load(text.as_bytes(), "rules.txt").expect("valid rules");
        assert_eq!(dictionary.len(), 1);
        assert!(dictionary.get("fly").is_some());
    }

    #[test]
    fn test_load_reports_record_index_and_source() {
        let text = "@@@\nFLY@FLYING,FLIES@FLYING\nBAD@ONLY TWO\n";
        let err = SynonymDictionary::load(text.as_bytes(), "rules.txt").unwrap_err();

        assert!(matches!(
            err,
            DictionaryError::FieldCount {
                record: 2,
                found: 2,
                ..
            }
        ));
        assert!(err.to_string().contains("rules.txt"));
        assert!(err.to_string().contains("#2"));
    }

    #[test]
    fn test_entries_iterate_in_insertion_order() {
        let mut dictionary = SynonymDictionary::new();
        dictionary.insert("TRAMPLE", ["TRAMPLE"], "TRAMPLE");
        dictionary.insert("FLY", ["FLYING"], "FLYING");
        dictionary.insert("TRAMPLE", ["TRAMPLING"], "TRAMPLE");

        let triggers: Vec<&str> = dictionary
            .entries()
            .map(|entry| entry.trigger.as_str())
            .collect();
        assert_eq!(triggers, ["TRAMPLE", "FLY"]);
    }
}
