//! # cardex
//!
//! Free-text search over a flat-file trading-card catalog.
//!
//! A catalog file is parsed into [`Card`] records, each deriving a
//! normalized, searchable term set from its raw delimited fields. Free-text
//! queries are translated into canonical keywords through an externally
//! defined synonym dictionary, and the matcher selects the cards whose term
//! or property sets satisfy the translated query.
//!
//! ## Design Principles
//!
//! 1. **No partial records**: a malformed catalog or rule line aborts the
//!    whole load with a diagnostic naming the source and position. The
//!    matcher never sees a half-built card.
//!
//! 2. **Deterministic translation**: synonym triggers are scanned in rule
//!    file order, so which synonym wins on overlapping input is decided by
//!    the rule file, not a hash function.
//!
//! 3. **Scoped resources**: file handles live only for the duration of a
//!    load call. Loaded structures are plain in-memory values.
//!
//! ## Pipeline
//!
//! - catalog lines → [`Catalog`] → ordered [`Card`] records
//! - raw text + [`SynonymDictionary`] → [`translate`] → [`TranslatedQuery`]
//! - [`TranslatedQuery`] + [`Catalog`] → [`find_cards`] → result list
//!
//! ## Modules
//!
//! - `text`: shared character-class normalization helpers
//! - `catalog`: card records, derived fields, repository loader
//! - `query`: synonym dictionary, query translation, matching

pub mod catalog;
pub mod query;
pub mod text;

// Re-export commonly used types
pub use crate::catalog::{Card, Catalog, CatalogError, Color, TotalCost, BASE_FIELD_COUNT};

pub use crate::query::{
    card_matches, find_cards, sort_by_name, translate, DictionaryError, QueryError,
    SynonymDictionary, SynonymEntry, SynonymGroup, TranslatedQuery,
};
