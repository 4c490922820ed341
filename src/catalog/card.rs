//! Card records and searchable-term derivation.
//!
//! A `Card` is built from one catalog line pair: a 16-field base record and a
//! comma-delimited tag list. Construction derives everything a query can
//! match against:
//!
//! - the **base term set**: normalized word tokens from name, type, subtype,
//!   and artist, the notable rules-text terms, and the literal rarity, set,
//!   and year values;
//! - the **extended property set**: the open-ended tag list;
//! - the color classification and total cost from the cost expression.
//!
//! The cost expression, catalog number, power, toughness, equip cost,
//! loyalty, and quantity are deliberately left out of the base term set;
//! they are not meaningful as unordered lookup keys.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::text;

use super::mana::{Color, TotalCost};
use super::repository::CatalogError;

/// Number of pipe-delimited fields in a catalog base record.
pub const BASE_FIELD_COUNT: usize = 16;

/// Delimiter between notable rules-text terms in the base record.
const NOTABLE_TERM_DELIMITER: char = '@';

/// One catalog entry.
///
/// Everything except the extended property set is read-only after
/// construction; [`Card::add_property`] is the single mutation point.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    /// Line/sequence number from the catalog. Identity only, not a search key.
    pub line_number: String,

    /// Image file reference derived from the name. Identity only.
    pub image_name: String,

    /// Card name as printed.
    pub name: String,

    /// Primary type (Creature, Instant, ...).
    pub card_type: String,

    /// Subtype, possibly empty.
    pub subtype: String,

    /// Raw cost expression, e.g. `2RR` or `XG`.
    pub mana_cost: String,

    /// Rarity label.
    pub rarity: String,

    /// Catalog number within the set.
    pub card_number: String,

    /// Set label.
    pub set_name: String,

    /// Artist credit.
    pub artist: String,

    /// Release year.
    pub year: String,

    /// Power, possibly empty for non-creatures.
    pub power: String,

    /// Toughness, possibly empty for non-creatures.
    pub toughness: String,

    /// Notable rules-text terms, upper-cased, in record order.
    pub notable_terms: Vec<String>,

    /// Activation-cost expression, possibly empty.
    pub equip_cost: String,

    /// Secondary-resource value, possibly empty.
    pub loyalty: String,

    /// Copies owned.
    pub quantity: String,

    /// Color classification derived from the cost expression.
    pub color: Color,

    /// Total cost derived from the cost expression.
    pub total_cost: TotalCost,

    base_terms: FxHashSet<String>,
    properties: FxHashSet<String>,
}

impl Card {
    /// Build a card from a 16-field base record and its tag list.
    ///
    /// `source` names the catalog the record came from and appears only in
    /// diagnostics. Fails with [`CatalogError::FieldCount`] when the record
    /// does not split into exactly [`BASE_FIELD_COUNT`] fields; no partial
    /// card is ever produced.
    ///
    /// Tags and derived terms are stored upper-cased, so membership tests via
    /// [`Card::has_keyword`] are case-insensitive.
    pub fn from_record(
        fields: &[&str],
        tags: &[&str],
        source: &str,
    ) -> Result<Self, CatalogError> {
        // Line number first: diagnostics need it even for a bad record.
        let line_number = fields.first().copied().unwrap_or_default().to_string();

        if fields.len() != BASE_FIELD_COUNT {
            return Err(CatalogError::FieldCount {
                source_name: source.to_string(),
                line: line_number,
                found: fields.len(),
            });
        }

        let notable_terms: Vec<String> = fields[12]
            .to_uppercase()
            .split(NOTABLE_TERM_DELIMITER)
            .filter(|term| !term.is_empty())
            .map(str::to_owned)
            .collect();

        let mut base_terms: FxHashSet<String> = FxHashSet::default();
        for field in [fields[1], fields[2], fields[3], fields[8]] {
            base_terms.extend(text::letter_words(field));
        }
        base_terms.extend(notable_terms.iter().cloned());
        for literal in [fields[5], fields[7], fields[9]] {
            base_terms.insert(literal.to_uppercase());
        }

        let properties: FxHashSet<String> = tags
            .iter()
            .map(|tag| tag.trim().to_uppercase())
            .filter(|tag| !tag.is_empty())
            .collect();

        Ok(Self {
            line_number,
            image_name: format!("{}.jpg", fields[1]),
            name: fields[1].to_string(),
            card_type: fields[2].to_string(),
            subtype: fields[3].to_string(),
            mana_cost: fields[4].to_string(),
            rarity: fields[5].to_string(),
            card_number: fields[6].to_string(),
            set_name: fields[7].to_string(),
            artist: fields[8].to_string(),
            year: fields[9].to_string(),
            power: fields[10].to_string(),
            toughness: fields[11].to_string(),
            notable_terms,
            equip_cost: fields[13].to_string(),
            loyalty: fields[14].to_string(),
            quantity: fields[15].to_string(),
            color: Color::from_cost(fields[4]),
            total_cost: TotalCost::from_cost(fields[4]),
            base_terms,
            properties,
        })
    }

    /// Check a canonical keyword against the extended property set and the
    /// base term set. Exact token match, case-insensitive.
    #[must_use]
    pub fn has_keyword(&self, keyword: &str) -> bool {
        let keyword = keyword.to_uppercase();
        self.properties.contains(&keyword) || self.base_terms.contains(&keyword)
    }

    /// Check the extended property set alone.
    #[must_use]
    pub fn has_property(&self, property: &str) -> bool {
        self.properties.contains(&property.to_uppercase())
    }

    /// Attach a tag after construction.
    ///
    /// Returns `true` if the card did not already carry the tag.
    pub fn add_property(&mut self, property: impl Into<String>) -> bool {
        self.properties.insert(property.into().to_uppercase())
    }

    /// Number of tags in the extended property set.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.properties.len()
    }

    /// The derived base term set.
    #[must_use]
    pub fn base_terms(&self) -> &FxHashSet<String> {
        &self.base_terms
    }

    /// The extended property set.
    #[must_use]
    pub fn properties(&self) -> &FxHashSet<String> {
        &self.properties
    }
}
