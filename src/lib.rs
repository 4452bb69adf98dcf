//! # myl-deck
//!
//! Card browser and deck-builder engine for the Mitos y Leyendas
//! "Primer Bloque" catalog.
//!
//! ## Design Principles
//!
//! 1. **Pure Core**: Normalization, filtering and deck bookkeeping are plain
//!    functions over in-memory data. Fetching, rendering and clipboard
//!    access belong to the caller.
//!
//! 2. **Explicit State**: A `Session` owns the catalog and the deck. There
//!    is no global state; sessions are independent values.
//!
//! 3. **Configuration Over Forks**: Browser variants differ only in
//!    `EngineConfig` flags (edition derivation, deck tracking).
//!
//! ## Modules
//!
//! - `core`: Configuration, errors, session
//! - `cards`: Card records, edition resolution, catalog
//! - `filter`: Filter criteria, evaluation, grouping by edition
//! - `deck`: Deck ledger, category summary, text export
//!
//! ## Example
//!
//! ```
//! use myl_deck::{CardId, EngineConfig, FilterCriteria, Session};
//!
//! let mut session = Session::new(EngineConfig::default()).unwrap();
//! session
//!     .load_json_str(
//!         r#"[
//!             {"nombre": "Oro", "tipo": "Oro"},
//!             {"nombre": "Aquiles", "tipo": "Aliado", "coste": 3,
//!              "imagen": "img/PRIMER_BLOQUE/03-Helenica/aquiles.png"}
//!         ]"#,
//!     )
//!     .unwrap();
//!
//! let groups = session.grouped(&FilterCriteria::new());
//! assert_eq!(groups[0].edition, "Helenica");
//!
//! session.add_to_deck(&CardId::from(1u32)).unwrap();
//! let summary = session.deck_summary().unwrap();
//! assert_eq!(summary.count("Aliado"), 1);
//! ```

pub mod cards;
pub mod core;
pub mod deck;
pub mod filter;

// Re-export commonly used types
pub use crate::core::{CatalogError, ConfigError, DeckError, EngineConfig, FilterError, Session};

pub use crate::cards::{CardId, CardRecord, Catalog, EditionResolver, Normalizer, RawCard};

pub use crate::filter::{filter, group_by_edition, CostFilter, EditionGroup, FilterCriteria};

pub use crate::deck::{CategoryRules, DeckLedger, DeckSummary, LedgerEntry};
