//! Card selection against a translated query.
//!
//! A card qualifies when every required keyword is present in its extended
//! property set or base term set, no exclusion keyword is present in either,
//! and a non-empty residual matches one of the scalar base fields or sits
//! inside the name. Results keep catalog order; [`sort_by_name`] is a
//! presentation helper, not part of matching.

use thiserror::Error;

use crate::catalog::{Card, Catalog};

use super::translator::TranslatedQuery;

/// Failure to run a query.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    /// The query carries no keywords, no exclusions, and an empty residual.
    ///
    /// Surfaced instead of silently matching everything or nothing.
    #[error("query contains no usable search criteria")]
    EmptyQuery,
}

/// Select the cards satisfying `query`, in catalog order.
pub fn find_cards<'a>(
    catalog: &'a Catalog,
    query: &TranslatedQuery,
) -> Result<Vec<&'a Card>, QueryError> {
    if !query.has_criteria() {
        return Err(QueryError::EmptyQuery);
    }

    Ok(catalog
        .cards()
        .filter(|card| card_matches(card, query))
        .collect())
}

/// Decide whether one card satisfies every requirement of `query`.
#[must_use]
pub fn card_matches(card: &Card, query: &TranslatedQuery) -> bool {
    if !query.keywords.iter().all(|keyword| card.has_keyword(keyword)) {
        return false;
    }
    if query.exclusions.iter().any(|keyword| card.has_keyword(keyword)) {
        return false;
    }
    if query.residual.is_empty() {
        return true;
    }
    residual_matches(card, &query.residual)
}

/// Free-text check: residual equals a scalar base field or sits inside the
/// name. Case-insensitive.
fn residual_matches(card: &Card, residual: &str) -> bool {
    let needle = residual.to_uppercase();
    let scalars = [
        &card.name,
        &card.card_type,
        &card.subtype,
        &card.artist,
        &card.set_name,
        &card.rarity,
        &card.year,
    ];

    scalars.iter().any(|field| field.to_uppercase() == needle)
        || card.name.to_uppercase().contains(&needle)
}

/// Presentation helper: order a result list alphabetically by name.
pub fn sort_by_name(cards: &mut [&Card]) {
    cards.sort_by(|a, b| a.name.cmp(&b.name));
}
