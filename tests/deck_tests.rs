//! Deck ledger integration tests.
//!
//! These tests verify the deck-building flow against a loaded catalog:
//! - Copy cap enforcement
//! - Entry removal at zero
//! - Category summary and export
//! - Stale entries after a catalog reload

use myl_deck::cards::CardId;
use myl_deck::core::{DeckError, EngineConfig, Session};
use myl_deck::deck::CategoryRules;

const CATALOG: &str = r#"[
    {"id": 1, "nombre": "Oro Inicial", "tipo": "🪙 ORO"},
    {"id": 2, "nombre": "Aquiles", "tipo": "Aliado", "coste": 3},
    {"id": 3, "nombre": "Excalibur", "tipo": "Arma", "coste": 4}
]"#;

fn session() -> Session {
    let mut session = Session::new(EngineConfig::default()).unwrap();
    session.load_json_str(CATALOG).unwrap();
    session
}

/// Test that the fourth add of a card reports the cap.
#[test]
fn test_copy_cap() {
    let mut session = session();
    let id = CardId::from(2u32);

    let results: Vec<_> = (0..4).map(|_| session.add_to_deck(&id)).collect();

    let expected: [Result<u8, DeckError>; 3] = [Ok(1), Ok(2), Ok(3)];
    assert_eq!(results[..3], expected);
    assert_eq!(
        results[3],
        Err(DeckError::CopyCapReached {
            id: id.clone(),
            cap: 3
        })
    );
    assert_eq!(session.deck().unwrap().quantity(&id), 3);
}

/// Test that removing the last copy removes the entry.
#[test]
fn test_remove_last_copy() {
    let mut session = session();
    let id = CardId::from(3u32);

    session.add_to_deck(&id).unwrap();
    assert_eq!(session.remove_from_deck(&id), Ok(0));

    let deck = session.deck().unwrap();
    assert_eq!(deck.distinct_cards(), 0);
    assert!(deck.entries().all(|e| e.quantity > 0));
}

/// Test the category summary with a decorated gold label.
#[test]
fn test_summary_buckets() {
    let mut session = session();
    for _ in 0..3 {
        session.add_to_deck(&CardId::from(1u32)).unwrap();
    }
    session.add_to_deck(&CardId::from(2u32)).unwrap();

    let summary = session.deck_summary().unwrap();

    assert_eq!(summary.total, 4);
    assert_eq!(summary.count("Oro"), 3);
    assert_eq!(summary.count("Aliado"), 1);
    assert_eq!(summary.count("Otros"), 0);
    assert_eq!(summary.remaining(), 46);
}

/// Test custom category rules from configuration.
#[test]
fn test_custom_categories() {
    let rules = CategoryRules::new("Resto")
        .with_rule("Armas", "arma")
        .with_rule("Oro", "oro");
    let config = EngineConfig::default().with_categories(rules);
    let mut session = Session::new(config).unwrap();
    session.load_json_str(CATALOG).unwrap();

    session.add_to_deck(&CardId::from(3u32)).unwrap();
    session.add_to_deck(&CardId::from(2u32)).unwrap();

    let summary = session.deck_summary().unwrap();
    assert_eq!(summary.count("Armas"), 1);
    assert_eq!(summary.count("Resto"), 1);
    assert_eq!(summary.count("Aliado"), 0);
}

/// Test export format and order.
#[test]
fn test_export() {
    let mut session = session();
    session.add_to_deck(&CardId::from(3u32)).unwrap();
    session.add_to_deck(&CardId::from(1u32)).unwrap();
    session.add_to_deck(&CardId::from(1u32)).unwrap();

    assert_eq!(session.export_deck().unwrap(), "1x Excalibur\n2x Oro Inicial");
}

/// Test that entries left over from a previous catalog are skipped.
#[test]
fn test_stale_entries_after_reload() {
    let mut session = session();
    session.add_to_deck(&CardId::from(1u32)).unwrap();
    session.add_to_deck(&CardId::from(3u32)).unwrap();

    session
        .load_json_str(r#"[{"id": 3, "nombre": "Excalibur", "tipo": "Arma"}]"#)
        .unwrap();

    let summary = session.deck_summary().unwrap();
    assert_eq!(summary.total, 1);
    assert_eq!(summary.missing, vec![CardId::from(1u32)]);
    assert_eq!(session.export_deck().unwrap(), "1x Excalibur");
}

/// Test that clearing empties the deck.
#[test]
fn test_clear() {
    let mut session = session();
    session.add_to_deck(&CardId::from(1u32)).unwrap();
    session.add_to_deck(&CardId::from(2u32)).unwrap();

    session.clear_deck().unwrap();

    assert_eq!(session.deck_summary().unwrap().total, 0);
    assert_eq!(session.export_deck().unwrap(), "");
}
