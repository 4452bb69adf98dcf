//! Filter criteria as selected in the browser controls.
//!
//! Every field is independently optional. The controls use the literal
//! value `"all"` for "no constraint"; `FilterCriteria::from_controls` maps
//! those strings onto the typed criteria.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::cards::CardRecord;
use crate::core::error::FilterError;

use super::engine::Matcher;

/// Control value meaning "no constraint".
pub const ALL: &str = "all";

fn is_all(value: &str) -> bool {
    let value = value.trim();
    value.is_empty() || value.eq_ignore_ascii_case(ALL)
}

/// Cost constraint.
///
/// Cards with an unset cost never match `Exact` or `AtLeast`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CostFilter {
    /// No constraint.
    #[default]
    All,
    /// Cost equal to the value.
    Exact(i64),
    /// Cost greater than or equal to the value (`"4+"`).
    AtLeast(i64),
}

impl CostFilter {
    /// Check a card cost against the filter.
    #[must_use]
    pub fn matches(self, cost: Option<i64>) -> bool {
        match (self, cost) {
            (CostFilter::All, _) => true,
            (CostFilter::Exact(n), Some(cost)) => cost == n,
            (CostFilter::AtLeast(n), Some(cost)) => cost >= n,
            (_, None) => false,
        }
    }
}

impl FromStr for CostFilter {
    type Err = FilterError;

    /// Parse `"all"`, `"<n>"` or `"<n>+"`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        if is_all(value) {
            return Ok(CostFilter::All);
        }
        let trimmed = value.trim();
        let invalid = || FilterError::InvalidCost(value.to_string());
        match trimmed.strip_suffix('+') {
            Some(n) => n.trim().parse().map(CostFilter::AtLeast).map_err(|_| invalid()),
            None => trimmed.parse().map(CostFilter::Exact).map_err(|_| invalid()),
        }
    }
}

impl std::fmt::Display for CostFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CostFilter::All => f.write_str(ALL),
            CostFilter::Exact(n) => write!(f, "{n}"),
            CostFilter::AtLeast(n) => write!(f, "{n}+"),
        }
    }
}

/// Combined filter; a card must satisfy every active field.
///
/// ## Example
///
/// ```
/// use myl_deck::filter::{CostFilter, FilterCriteria};
///
/// let criteria = FilterCriteria::from_controls("zeus", "all", "aliado", "4+").unwrap();
///
/// assert_eq!(criteria.edition, None);
/// assert_eq!(criteria.cost, CostFilter::AtLeast(4));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    /// Case-insensitive substring of the name or ability. Empty matches all.
    pub text: String,

    /// Exact edition label.
    pub edition: Option<String>,

    /// Case-insensitive substring of the type label.
    pub category: Option<String>,

    pub cost: CostFilter,
}

impl FilterCriteria {
    /// Criteria matching every card.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build criteria from raw control values, where `"all"` (or an empty
    /// selection) disables a control.
    pub fn from_controls(
        text: &str,
        edition: &str,
        category: &str,
        cost: &str,
    ) -> Result<Self, FilterError> {
        let choice = |value: &str| (!is_all(value)).then(|| value.to_string());
        Ok(Self {
            text: text.to_string(),
            edition: choice(edition),
            category: choice(category),
            cost: cost.parse()?,
        })
    }

    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_cost(mut self, cost: CostFilter) -> Self {
        self.cost = cost;
        self
    }

    /// True when no field constrains the result.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
            && self.edition.is_none()
            && self.category.is_none()
            && self.cost == CostFilter::All
    }

    /// Check a single card.
    #[must_use]
    pub fn matches(&self, card: &CardRecord) -> bool {
        Matcher::new(self).matches(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cost() {
        assert_eq!("all".parse::<CostFilter>(), Ok(CostFilter::All));
        assert_eq!("".parse::<CostFilter>(), Ok(CostFilter::All));
        assert_eq!("4".parse::<CostFilter>(), Ok(CostFilter::Exact(4)));
        assert_eq!(" 0 ".parse::<CostFilter>(), Ok(CostFilter::Exact(0)));
        assert_eq!("4+".parse::<CostFilter>(), Ok(CostFilter::AtLeast(4)));
        assert_eq!(
            "cheap".parse::<CostFilter>(),
            Err(FilterError::InvalidCost("cheap".into()))
        );
        assert!("+".parse::<CostFilter>().is_err());
    }

    #[test]
    fn test_cost_display_round_trips_controls() {
        for control in ["all", "2", "4+"] {
            let parsed: CostFilter = control.parse().unwrap();
            assert_eq!(parsed.to_string(), control);
        }
    }

    #[test]
    fn test_cost_matching() {
        assert!(CostFilter::All.matches(None));
        assert!(CostFilter::Exact(4).matches(Some(4)));
        assert!(!CostFilter::Exact(4).matches(Some(5)));
        assert!(CostFilter::AtLeast(4).matches(Some(4)));
        assert!(CostFilter::AtLeast(4).matches(Some(7)));
        assert!(!CostFilter::AtLeast(4).matches(Some(3)));
    }

    #[test]
    fn test_unset_cost_never_matches_a_value() {
        assert!(!CostFilter::Exact(0).matches(None));
        assert!(!CostFilter::Exact(-1).matches(None));
        assert!(!CostFilter::AtLeast(0).matches(None));
    }

    #[test]
    fn test_from_controls() {
        let criteria = FilterCriteria::from_controls("", "Helenica", "all", "2").unwrap();
        assert_eq!(criteria.edition.as_deref(), Some("Helenica"));
        assert_eq!(criteria.category, None);
        assert_eq!(criteria.cost, CostFilter::Exact(2));
        assert!(!criteria.is_empty());

        let criteria = FilterCriteria::from_controls("", "all", "all", "all").unwrap();
        assert!(criteria.is_empty());
    }

    #[test]
    fn test_from_controls_rejects_bad_cost() {
        assert!(FilterCriteria::from_controls("", "all", "all", "x").is_err());
    }
}
