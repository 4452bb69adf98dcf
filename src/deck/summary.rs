//! Deck summary: total quantity and counts per category.
//!
//! Categories come from an ordered list of rules. A card belongs to the
//! first rule whose token appears (case-insensitively) in its type label,
//! so decorated labels such as `"🪙 ORO"` still land in the gold bucket.
//! Cards matching no rule are counted under the fallback label.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{CardId, Catalog};

use super::ledger::DeckLedger;

/// One summary bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRule {
    /// Bucket name shown to the user.
    pub label: String,
    /// Substring looked for in the type label.
    pub token: String,
}

impl CategoryRule {
    #[must_use]
    pub fn new(label: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            token: token.into(),
        }
    }
}

/// Ordered category rules plus the catch-all bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryRules {
    pub rules: Vec<CategoryRule>,
    pub fallback: String,
}

impl Default for CategoryRules {
    fn default() -> Self {
        Self::new("Otros")
            .with_rule("Oro", "oro")
            .with_rule("Aliado", "aliado")
    }
}

impl CategoryRules {
    /// Rules with no buckets besides `fallback`.
    #[must_use]
    pub fn new(fallback: impl Into<String>) -> Self {
        Self {
            rules: Vec::new(),
            fallback: fallback.into(),
        }
    }

    /// Append a rule (builder pattern). Earlier rules win.
    #[must_use]
    pub fn with_rule(mut self, label: impl Into<String>, token: impl Into<String>) -> Self {
        self.rules.push(CategoryRule::new(label, token));
        self
    }

    /// Bucket label for a type label.
    #[must_use]
    pub fn classify(&self, card_type: &str) -> &str {
        let card_type = card_type.to_lowercase();
        self.rules
            .iter()
            .find(|rule| {
                let token = rule.token.trim().to_lowercase();
                !token.is_empty() && card_type.contains(&token)
            })
            .map_or(self.fallback.as_str(), |rule| rule.label.as_str())
    }

    /// All bucket labels in display order, fallback last.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.rules
            .iter()
            .map(|r| r.label.as_str())
            .chain(std::iter::once(self.fallback.as_str()))
    }
}

/// Quantity counted in one bucket.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    pub label: String,
    pub count: u32,
}

/// Aggregate view of the deck.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeckSummary {
    /// Sum of quantities of resolved entries.
    pub total: u32,

    /// Every bucket, including empty ones, in rule order.
    pub per_category: SmallVec<[CategoryCount; 4]>,

    /// Entries whose card is not in the catalog. Not counted.
    pub missing: Vec<CardId>,

    /// Advisory deck size.
    pub target: u32,
}

impl DeckSummary {
    /// Summarize `ledger` against `catalog`.
    ///
    /// Unknown ids are skipped with a warning rather than failing the
    /// summary.
    #[must_use]
    pub fn build(ledger: &DeckLedger, catalog: &Catalog, rules: &CategoryRules) -> Self {
        let mut per_category: SmallVec<[CategoryCount; 4]> = rules
            .labels()
            .map(|label| CategoryCount {
                label: label.to_string(),
                count: 0,
            })
            .collect();
        let mut total = 0;
        let mut missing = Vec::new();

        for entry in ledger.entries() {
            let Some(card) = catalog.get(&entry.id) else {
                log::warn!("Deck entry {} not found in catalog, skipping", entry.id);
                missing.push(entry.id.clone());
                continue;
            };

            let label = rules.classify(&card.card_type);
            let quantity = u32::from(entry.quantity);
            if let Some(bucket) = per_category.iter_mut().find(|b| b.label == label) {
                bucket.count += quantity;
            }
            total += quantity;
        }

        Self {
            total,
            per_category,
            missing,
            target: ledger.target_size(),
        }
    }

    /// Count for a bucket label (0 when unknown).
    #[must_use]
    pub fn count(&self, label: &str) -> u32 {
        self.per_category
            .iter()
            .find(|b| b.label == label)
            .map_or(0, |b| b.count)
    }

    /// Cards still needed to reach the target.
    #[must_use]
    pub fn remaining(&self) -> u32 {
        self.target.saturating_sub(self.total)
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total >= self.target
    }
}

impl std::fmt::Display for DeckSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.total, self.target)?;
        for bucket in &self.per_category {
            write!(f, " | {}: {}", bucket.label, bucket.count)?;
        }
        Ok(())
    }
}
