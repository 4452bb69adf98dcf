//! Browsing session: the state a presentation layer drives.
//!
//! A `Session` owns its configuration, the loaded catalog and the deck
//! being built. Sessions are plain values; several can coexist and a
//! catalog can be handed to each of them.

use std::path::Path;

use super::config::EngineConfig;
use super::error::{CatalogError, ConfigError, DeckError};
use crate::cards::{CardId, CardRecord, Catalog, Normalizer};
use crate::deck::{DeckLedger, DeckSummary};
use crate::filter::{filter, group_by_edition, EditionGroup, FilterCriteria};

/// One browsing/deck-building session.
///
/// ## Example
///
/// ```
/// use myl_deck::core::{EngineConfig, Session};
/// use myl_deck::cards::CardId;
/// use myl_deck::filter::FilterCriteria;
///
/// let mut session = Session::new(EngineConfig::default()).unwrap();
/// session
///     .load_json_str(r#"[{"nombre": "Zeus", "tipo": "Aliado", "coste": 5}]"#)
///     .unwrap();
///
/// assert_eq!(session.filter(&FilterCriteria::new().with_text("zeus")).len(), 1);
///
/// session.add_to_deck(&CardId::from(0u32)).unwrap();
/// assert_eq!(session.export_deck().unwrap(), "1x Zeus");
/// ```
#[derive(Clone, Debug)]
pub struct Session {
    config: EngineConfig,
    normalizer: Normalizer,
    catalog: Catalog,
    deck: DeckLedger,
}

impl Session {
    /// Create a session with an empty catalog.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_catalog(config, Catalog::new())
    }

    /// Create a session over an already built catalog.
    pub fn with_catalog(config: EngineConfig, catalog: Catalog) -> Result<Self, ConfigError> {
        config.validate()?;
        let normalizer = config.normalizer()?;
        let deck = DeckLedger::from_config(&config);
        Ok(Self {
            config,
            normalizer,
            catalog,
            deck,
        })
    }

    #[must_use]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Load a catalog from a JSON string. Returns the number of cards.
    ///
    /// On failure the catalog is left empty. The deck is kept either way.
    pub fn load_json_str(&mut self, json: &str) -> Result<usize, CatalogError> {
        let loaded = Catalog::from_json_str(json, &self.normalizer);
        self.install(loaded)
    }

    /// Load a catalog from a JSON file. Returns the number of cards.
    ///
    /// On failure the catalog is left empty. The deck is kept either way.
    pub fn load_path(&mut self, path: impl AsRef<Path>) -> Result<usize, CatalogError> {
        let loaded = Catalog::from_path(path.as_ref(), &self.normalizer);
        self.install(loaded)
    }

    fn install(&mut self, loaded: Result<Catalog, CatalogError>) -> Result<usize, CatalogError> {
        match loaded {
            Ok(catalog) => {
                self.catalog = catalog;
                log::info!(
                    "Catalog ready: {} cards in {} editions",
                    self.catalog.len(),
                    self.catalog.editions().len()
                );
                Ok(self.catalog.len())
            }
            Err(err) => {
                log::error!("Failed to load catalog: {err}");
                self.catalog = Catalog::new();
                Err(err)
            }
        }
    }

    /// Catalog cards matching `criteria`, in load order.
    #[must_use]
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&CardRecord> {
        filter(self.catalog.iter(), criteria)
    }

    /// Catalog cards matching `criteria`, grouped by edition.
    #[must_use]
    pub fn grouped(&self, criteria: &FilterCriteria) -> Vec<EditionGroup<'_>> {
        group_by_edition(self.filter(criteria))
    }

    /// Distinct editions in the catalog, sorted.
    #[must_use]
    pub fn editions(&self) -> Vec<&str> {
        self.catalog.editions()
    }

    /// The deck, or `None` when deck tracking is disabled.
    #[must_use]
    pub fn deck(&self) -> Option<&DeckLedger> {
        self.config.deck_tracking.then_some(&self.deck)
    }

    fn tracked_deck(&self) -> Result<&DeckLedger, DeckError> {
        self.deck().ok_or(DeckError::TrackingDisabled)
    }

    fn tracked_deck_mut(&mut self) -> Result<&mut DeckLedger, DeckError> {
        if self.config.deck_tracking {
            Ok(&mut self.deck)
        } else {
            Err(DeckError::TrackingDisabled)
        }
    }

    /// Add one copy of a catalog card. Returns the new quantity.
    pub fn add_to_deck(&mut self, id: &CardId) -> Result<u8, DeckError> {
        if self.config.deck_tracking && !self.catalog.contains(id) {
            return Err(DeckError::UnknownCard(id.clone()));
        }
        self.tracked_deck_mut()?.add(id)
    }

    /// Remove one copy. Returns the remaining quantity.
    pub fn remove_from_deck(&mut self, id: &CardId) -> Result<u8, DeckError> {
        Ok(self.tracked_deck_mut()?.remove(id))
    }

    /// Empty the deck. Callers confirm with the user first.
    pub fn clear_deck(&mut self) -> Result<(), DeckError> {
        self.tracked_deck_mut()?.clear();
        Ok(())
    }

    /// Deck totals by category.
    pub fn deck_summary(&self) -> Result<DeckSummary, DeckError> {
        Ok(self
            .tracked_deck()?
            .summarize(&self.catalog, &self.config.categories))
    }

    /// Deck as `"<quantity>x <name>"` lines.
    pub fn export_deck(&self) -> Result<String, DeckError> {
        Ok(self.tracked_deck()?.export(&self.catalog))
    }
}
