//! Query pipeline: synonym dictionary, translation, and matching.
//!
//! ## Key Types
//!
//! - `SynonymDictionary`: trigger tokens mapped to ordered synonym groups
//! - `TranslatedQuery`: canonical keywords, exclusions, and residual text
//! - `translate`: free text in, `TranslatedQuery` out
//! - `find_cards`: `TranslatedQuery` applied to a `Catalog`

pub mod dictionary;
pub mod matcher;
pub mod translator;

pub use dictionary::{DictionaryError, SynonymDictionary, SynonymEntry, SynonymGroup};
pub use matcher::{card_matches, find_cards, sort_by_name, QueryError};
pub use translator::{translate, TranslatedQuery};
