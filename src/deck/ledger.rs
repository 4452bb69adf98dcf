//! Deck ledger: per-card quantities under a copy cap.
//!
//! Each entry moves through a fixed lifecycle:
//!
//! ```text
//! absent -add-> 1 -add-> ... -add-> cap   (further adds fail)
//! cap -remove-> ... -remove-> 1 -remove-> absent
//! ```
//!
//! There is no zero-quantity entry and no direct quantity edit.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Catalog, CardId};
use crate::core::config::{EngineConfig, DEFAULT_COPY_CAP, DEFAULT_TARGET_DECK_SIZE};
use crate::core::error::DeckError;

use super::export::export_deck;
use super::summary::{CategoryRules, DeckSummary};

/// Quantity of one card in the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerEntry {
    pub id: CardId,
    /// Always in `1..=copy_cap`.
    pub quantity: u8,
}

/// The deck being built.
///
/// Entries keep the order in which cards were first added.
///
/// ## Example
///
/// ```
/// use myl_deck::cards::CardId;
/// use myl_deck::deck::DeckLedger;
///
/// let mut deck = DeckLedger::default();
/// let zeus = CardId::from("12");
///
/// for _ in 0..3 {
///     deck.add(&zeus).unwrap();
/// }
/// assert!(deck.add(&zeus).is_err());
/// assert_eq!(deck.quantity(&zeus), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckLedger {
    entries: Vector<LedgerEntry>,
    copy_cap: u8,
    target_size: u32,
}

impl Default for DeckLedger {
    fn default() -> Self {
        Self::new(DEFAULT_COPY_CAP, DEFAULT_TARGET_DECK_SIZE)
    }
}

impl DeckLedger {
    /// Create an empty ledger.
    #[must_use]
    pub fn new(copy_cap: u8, target_size: u32) -> Self {
        Self {
            entries: Vector::new(),
            copy_cap,
            target_size,
        }
    }

    /// Create an empty ledger with the configured limits.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.copy_cap, config.target_deck_size)
    }

    #[must_use]
    pub fn copy_cap(&self) -> u8 {
        self.copy_cap
    }

    /// Advisory deck size.
    #[must_use]
    pub fn target_size(&self) -> u32 {
        self.target_size
    }

    fn position(&self, id: &CardId) -> Option<usize> {
        self.entries.iter().position(|e| &e.id == id)
    }

    /// Add one copy. Returns the new quantity.
    ///
    /// At the copy cap this fails with `DeckError::CopyCapReached` and the
    /// ledger is unchanged.
    pub fn add(&mut self, id: &CardId) -> Result<u8, DeckError> {
        if self.quantity(id) >= self.copy_cap {
            return Err(DeckError::CopyCapReached {
                id: id.clone(),
                cap: self.copy_cap,
            });
        }

        let quantity = match self.position(id) {
            Some(index) => {
                let entry = &mut self.entries[index];
                entry.quantity += 1;
                entry.quantity
            }
            None => {
                self.entries.push_back(LedgerEntry {
                    id: id.clone(),
                    quantity: 1,
                });
                1
            }
        };
        log::debug!("Added {id} to deck ({quantity}/{})", self.copy_cap);
        Ok(quantity)
    }

    /// Remove one copy. Returns the remaining quantity.
    ///
    /// Removing the last copy deletes the entry. Removing a card that is
    /// not in the deck does nothing.
    pub fn remove(&mut self, id: &CardId) -> u8 {
        let Some(index) = self.position(id) else {
            return 0;
        };

        let remaining = self.entries[index].quantity.saturating_sub(1);
        if remaining == 0 {
            self.entries.remove(index);
        } else {
            self.entries[index].quantity = remaining;
        }
        log::debug!("Removed {id} from deck ({remaining} left)");
        remaining
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        log::debug!("Deck cleared");
    }

    /// Copies of a card in the deck (0 when absent).
    #[must_use]
    pub fn quantity(&self, id: &CardId) -> u8 {
        self.entries
            .iter()
            .find(|e| &e.id == id)
            .map_or(0, |e| e.quantity)
    }

    /// Check if a card has reached the copy cap.
    #[must_use]
    pub fn is_at_cap(&self, id: &CardId) -> bool {
        self.quantity(id) >= self.copy_cap
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn total_quantity(&self) -> u32 {
        self.entries.iter().map(|e| u32::from(e.quantity)).sum()
    }

    /// Number of distinct cards.
    #[must_use]
    pub fn distinct_cards(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over entries in first-added order.
    pub fn entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.entries.iter()
    }

    /// Totals by category, resolved against `catalog`.
    #[must_use]
    pub fn summarize(&self, catalog: &Catalog, rules: &CategoryRules) -> DeckSummary {
        DeckSummary::build(self, catalog, rules)
    }

    /// Plain-text listing, one `"<quantity>x <name>"` line per card.
    #[must_use]
    pub fn export(&self, catalog: &Catalog) -> String {
        export_deck(self, catalog)
    }
}
