//! Card system: records, edition resolution, and the catalog.
//!
//! ## Key Types
//!
//! - `CardId`: Canonical (string) card identifier
//! - `RawCard`: Catalog entry as loaded from JSON
//! - `CardRecord`: Normalized, immutable card
//! - `EditionResolver`: Derives the edition from an image path
//! - `Normalizer`: Raw entries to records (ids, editions)
//! - `Catalog`: Records in load order with lookup by id

pub mod catalog;
pub mod edition;
pub mod record;

pub use catalog::{Catalog, Normalizer};
pub use edition::EditionResolver;
pub use record::{CardId, CardRecord, RawCard, RawId, UNSET_COST};
