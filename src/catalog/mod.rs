//! Card catalog: records, derived search terms, and the repository loader.
//!
//! ## Key Types
//!
//! - `Card`: one catalog entry with its derived base term set and extended
//!   property set
//! - `Color` / `TotalCost`: fields derived from the cost expression
//! - `Catalog`: ordered card collection loaded from a line source
//! - `CatalogError`: load/construction failures with source context

pub mod card;
pub mod mana;
pub mod repository;

pub use card::{Card, BASE_FIELD_COUNT};
pub use mana::{Color, TotalCost};
pub use repository::{Catalog, CatalogError};
