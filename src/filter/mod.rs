//! Filter engine: combinable predicates over the catalog.
//!
//! ## Key Types
//!
//! - `FilterCriteria`: text, edition, category and cost constraints
//! - `CostFilter`: `all`, exact cost, or minimum cost (`"4+"`)
//! - `EditionGroup`: filter results bucketed by edition for display
//!
//! Filtering is pure: it never changes the catalog, keeps relative order,
//! and applying the same criteria twice gives the same result.

pub mod criteria;
pub mod engine;
pub mod grouping;

pub use criteria::{CostFilter, FilterCriteria, ALL};
pub use engine::filter;
pub use grouping::{group_by_edition, EditionGroup};
