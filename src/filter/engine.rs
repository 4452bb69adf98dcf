//! Filter evaluation.

use crate::cards::CardRecord;

use super::criteria::{CostFilter, FilterCriteria};

/// Criteria with needles lowered once per filter pass.
pub(crate) struct Matcher<'c> {
    text: String,
    edition: Option<&'c str>,
    category: Option<String>,
    cost: CostFilter,
}

impl<'c> Matcher<'c> {
    pub(crate) fn new(criteria: &'c FilterCriteria) -> Self {
        Self {
            text: criteria.text.to_lowercase(),
            edition: criteria.edition.as_deref(),
            category: criteria.category.as_deref().map(str::to_lowercase),
            cost: criteria.cost,
        }
    }

    pub(crate) fn matches(&self, card: &CardRecord) -> bool {
        self.matches_text(card)
            && self.edition.map_or(true, |e| card.edition == e)
            && self
                .category
                .as_deref()
                .map_or(true, |c| card.card_type.to_lowercase().contains(c))
            && self.cost.matches(card.cost)
    }

    fn matches_text(&self, card: &CardRecord) -> bool {
        self.text.is_empty()
            || card.name.to_lowercase().contains(&self.text)
            || card.ability_text().to_lowercase().contains(&self.text)
    }
}

/// Cards satisfying every active criterion, in input order.
///
/// Accepts anything yielding record references, so a previous result can
/// be filtered again.
///
/// ```
/// use myl_deck::cards::{CardId, CardRecord};
/// use myl_deck::filter::{filter, CostFilter, FilterCriteria};
///
/// let cards = vec![
///     CardRecord::new(CardId::from(0u32), "Zeus", "Aliado").with_cost(4),
///     CardRecord::new(CardId::from(1u32), "Oro", "Oro"),
/// ];
///
/// let criteria = FilterCriteria::new().with_cost(CostFilter::AtLeast(4));
/// let found = filter(&cards, &criteria);
///
/// assert_eq!(found.len(), 1);
/// assert_eq!(found[0].name, "Zeus");
/// ```
pub fn filter<'a, I>(cards: I, criteria: &FilterCriteria) -> Vec<&'a CardRecord>
where
    I: IntoIterator<Item = &'a CardRecord>,
{
    let matcher = Matcher::new(criteria);
    cards.into_iter().filter(|c| matcher.matches(c)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::CardId;

    fn cards() -> Vec<CardRecord> {
        vec![
            CardRecord::new(CardId::from(0u32), "Aquiles", "Aliado")
                .with_cost(3)
                .with_ability("Imbloqueable.")
                .with_edition("Helenica"),
            CardRecord::new(CardId::from(1u32), "Oro Inicial", "🪙 ORO").with_edition("Helenica"),
            CardRecord::new(CardId::from(2u32), "Ra", "Aliado")
                .with_cost(5)
                .with_ability("Cuando entra, destruye un aliado.")
                .with_edition("Dominios De Ra"),
            CardRecord::new(CardId::from(3u32), "Espada", "Arma")
                .with_cost(4)
                .with_edition("Espada Sagrada"),
        ]
    }

    fn names<'a>(found: &[&'a CardRecord]) -> Vec<&'a str> {
        found.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_empty_criteria_returns_everything() {
        let cards = cards();
        let found = filter(&cards, &FilterCriteria::new());
        assert_eq!(names(&found), vec!["Aquiles", "Oro Inicial", "Ra", "Espada"]);
    }

    #[test]
    fn test_text_matches_name_or_ability() {
        let cards = cards();

        let found = filter(&cards, &FilterCriteria::new().with_text("AQUI"));
        assert_eq!(names(&found), vec!["Aquiles"]);

        let found = filter(&cards, &FilterCriteria::new().with_text("destruye"));
        assert_eq!(names(&found), vec!["Ra"]);
    }

    #[test]
    fn test_edition_is_exact() {
        let cards = cards();

        let found = filter(&cards, &FilterCriteria::new().with_edition("Helenica"));
        assert_eq!(names(&found), vec!["Aquiles", "Oro Inicial"]);

        let found = filter(&cards, &FilterCriteria::new().with_edition("helenica"));
        assert!(found.is_empty());
    }

    #[test]
    fn test_category_contains_ignoring_decoration() {
        let cards = cards();
        let found = filter(&cards, &FilterCriteria::new().with_category("Oro"));
        assert_eq!(names(&found), vec!["Oro Inicial"]);
    }

    #[test]
    fn test_cost_exact_and_at_least() {
        let cards = cards();

        let exact: CostFilter = "4".parse().unwrap();
        let found = filter(&cards, &FilterCriteria::new().with_cost(exact));
        assert_eq!(names(&found), vec!["Espada"]);

        let found = filter(&cards, &FilterCriteria::new().with_cost(CostFilter::AtLeast(4)));
        assert_eq!(names(&found), vec!["Ra", "Espada"]);
    }

    #[test]
    fn test_criteria_are_combined() {
        let cards = cards();
        let criteria = FilterCriteria::new()
            .with_category("aliado")
            .with_cost(CostFilter::AtLeast(4));
        let found = filter(&cards, &criteria);
        assert_eq!(names(&found), vec!["Ra"]);
    }

    #[test]
    fn test_refiltering_is_stable() {
        let cards = cards();
        let criteria = FilterCriteria::new().with_text("a");

        let once = filter(&cards, &criteria);
        let twice = filter(once.iter().copied(), &criteria);

        assert_eq!(once, twice);
    }

    #[test]
    fn test_criteria_matches_single_card() {
        let cards = cards();
        let criteria = FilterCriteria::new().with_text("oro");
        assert!(criteria.matches(&cards[1]));
        assert!(!criteria.matches(&cards[0]));
    }
}
