//! Deck building: quantities, summary and export.
//!
//! ## Key Types
//!
//! - `DeckLedger`: per-card quantities under a copy cap (3 by default)
//! - `LedgerEntry`: one card's quantity
//! - `CategoryRules`: buckets used by the summary (Oro, Aliado, Otros)
//! - `DeckSummary`: total and per-category counts against the target size
//!
//! Ledger keys are `CardId`s, so lookups never depend on whether the
//! catalog wrote an id as a number or a string.

pub mod export;
pub mod ledger;
pub mod summary;

pub use export::export_deck;
pub use ledger::{DeckLedger, LedgerEntry};
pub use summary::{CategoryCount, CategoryRule, CategoryRules, DeckSummary};
