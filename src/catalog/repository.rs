//! Catalog loading and card storage.
//!
//! The catalog source is line-oriented: one header line (discarded), then one
//! pair of lines per card. The first line of a pair is the 16-field,
//! pipe-delimited base record; the second is its comma-delimited tag list.
//!
//! ## Failure policy
//!
//! A malformed pair aborts the whole load. No partial records survive, so a
//! `Catalog` in hand always reflects its source completely; downstream counts
//! can rely on that.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use super::card::Card;

/// Delimiter between fields of a base record.
const FIELD_DELIMITER: char = '|';

/// Delimiter between tags on a tag line.
const TAG_DELIMITER: char = ',';

/// Failure to load a catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A base record did not split into exactly 16 fields.
    #[error("{source_name}: card #{line}: expected 16 base fields, found {found}")]
    FieldCount {
        /// Catalog source identifier.
        source_name: String,
        /// Line/sequence number of the offending record.
        line: String,
        /// Fields actually found.
        found: usize,
    },

    /// A base record reached end-of-input before its tag line.
    #[error("{source_name}: card #{line}: base record has no tag line")]
    MissingTagLine {
        /// Catalog source identifier.
        source_name: String,
        /// Line/sequence number of the offending record.
        line: String,
    },

    /// The underlying reader failed.
    #[error("failed to read catalog source")]
    Io(#[from] std::io::Error),
}

/// Ordered collection of cards parsed from one catalog source.
///
/// Cards keep their source order; the whole catalog is replaced on reload
/// rather than patched in place.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// Load a catalog from a file path.
    ///
    /// The file handle lives only for the duration of the call.
    pub fn load_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        Self::load(BufReader::new(file), &path.display().to_string())
    }

    /// Parse a catalog from any line source.
    ///
    /// `source` names the origin for diagnostics. The first line is a header
    /// and is discarded; an empty source yields an empty catalog. Blank lines
    /// are tolerated between pairs but never inside one: a tag line is read
    /// verbatim, so a card with no tags gets an empty tag line.
    pub fn load(reader: impl BufRead, source: &str) -> Result<Self, CatalogError> {
        let mut lines = reader.lines();

        if lines.next().transpose()?.is_none() {
            return Ok(Self::default());
        }

        let mut cards = Vec::new();
        while let Some(base_line) = lines.next().transpose()? {
            let base_line = base_line.trim().to_string();
            if base_line.is_empty() {
                continue;
            }

            let fields: Vec<&str> = base_line.split(FIELD_DELIMITER).collect();

            let Some(tag_line) = lines.next().transpose()? else {
                return Err(CatalogError::MissingTagLine {
                    source_name: source.to_string(),
                    line: fields.first().copied().unwrap_or_default().to_string(),
                });
            };
            let tags: Vec<&str> = tag_line.trim().split(TAG_DELIMITER).collect();

            let card = Card::from_record(&fields, &tags, source)?;
            debug!(line = %card.line_number, name = %card.name, "parsed card");
            cards.push(card);
        }

        info!(count = cards.len(), source, "catalog loaded");
        Ok(Self { cards })
    }

    /// Assemble a catalog from records already constructed.
    #[must_use]
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check whether the catalog holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Get a card by position in source order.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// Get a card mutably, e.g. to attach tags after load.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }

    /// Iterate cards in source order.
    pub fn cards(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// All cards as a slice, in source order.
    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}
