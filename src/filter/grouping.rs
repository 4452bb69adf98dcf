//! Grouping of filter results by edition for display.

use std::collections::BTreeMap;

use crate::cards::CardRecord;

/// Cards of one edition.
#[derive(Clone, Debug, PartialEq)]
pub struct EditionGroup<'a> {
    pub edition: &'a str,
    /// Cards in input order.
    pub cards: Vec<&'a CardRecord>,
}

impl EditionGroup<'_> {
    /// Number of cards in the group.
    #[must_use]
    pub fn count(&self) -> usize {
        self.cards.len()
    }
}

/// Bucket cards by edition. Groups are sorted by label; cards keep input
/// order within their group. Empty input yields no groups.
pub fn group_by_edition<'a, I>(cards: I) -> Vec<EditionGroup<'a>>
where
    I: IntoIterator<Item = &'a CardRecord>,
{
    let mut groups: BTreeMap<&'a str, Vec<&'a CardRecord>> = BTreeMap::new();
    for card in cards {
        groups.entry(card.edition.as_str()).or_default().push(card);
    }
    groups
        .into_iter()
        .map(|(edition, cards)| EditionGroup { edition, cards })
        .collect()
}
