//! Plain-text deck export.

use crate::cards::Catalog;

use super::ledger::DeckLedger;

/// One `"<quantity>x <name>"` line per card, in deck order.
///
/// Entries whose card is not in the catalog are left out.
#[must_use]
pub fn export_deck(ledger: &DeckLedger, catalog: &Catalog) -> String {
    ledger
        .entries()
        .filter_map(|entry| match catalog.get(&entry.id) {
            Some(card) => Some(format!("{}x {}", entry.quantity, card.name)),
            None => {
                log::debug!("Skipping {} in export: not in catalog", entry.id);
                None
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, CardRecord};

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CardRecord::new(CardId::from(0u32), "Oro Inicial", "Oro"),
            CardRecord::new(CardId::from(1u32), "Aquiles", "Aliado"),
        ])
    }

    #[test]
    fn test_export_lines() {
        let mut deck = DeckLedger::default();
        deck.add(&CardId::from(1u32)).unwrap();
        deck.add(&CardId::from(0u32)).unwrap();
        deck.add(&CardId::from(0u32)).unwrap();

        assert_eq!(export_deck(&deck, &catalog()), "1x Aquiles\n2x Oro Inicial");
    }

    #[test]
    fn test_export_skips_unknown() {
        let mut deck = DeckLedger::default();
        deck.add(&CardId::from("missing")).unwrap();
        deck.add(&CardId::from(1u32)).unwrap();

        assert_eq!(deck.export(&catalog()), "1x Aquiles");
    }

    #[test]
    fn test_export_empty_deck() {
        assert_eq!(export_deck(&DeckLedger::default(), &catalog()), "");
    }
}
