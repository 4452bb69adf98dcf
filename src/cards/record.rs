//! Card records: raw catalog entries and their normalized form.
//!
//! `RawCard` mirrors one object of the catalog file as loosely as the file
//! itself is written: identifiers may be numbers or strings, numeric fields
//! may be missing, `null`, or quoted. `CardRecord` is the normalized,
//! immutable form every other module works with.

use serde::{Deserialize, Deserializer, Serialize};

use crate::core::config::DEFAULT_UNCLASSIFIED_LABEL;

/// Effective cost of a card whose cost is unset.
pub const UNSET_COST: i64 = -1;

/// Canonical card identifier.
///
/// Identifiers are always compared as strings, so a catalog id `12` and a
/// deck key `"12"` refer to the same card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Identifier assigned to a record that has none: its load position.
    #[must_use]
    pub fn from_position(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Get the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<u32> for CardId {
    fn from(v: u32) -> Self {
        Self(v.to_string())
    }
}

impl From<i64> for CardId {
    fn from(v: i64) -> Self {
        Self(v.to_string())
    }
}

impl From<usize> for CardId {
    fn from(v: usize) -> Self {
        Self::from_position(v)
    }
}

/// Identifier as written in the catalog file.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Number(serde_json::Number),
    Text(String),
}

impl From<&RawId> for CardId {
    fn from(raw: &RawId) -> Self {
        match raw {
            RawId::Number(n) => CardId::new(canonical_number(n)),
            RawId::Text(s) => CardId::new(s.as_str()),
        }
    }
}

/// Integral numbers render without a fraction, so `5`, `5.0` and `"5"`
/// name the same card.
fn canonical_number(n: &serde_json::Number) -> String {
    if let Some(v) = n.as_i64() {
        return v.to_string();
    }
    if let Some(v) = n.as_u64() {
        return v.to_string();
    }
    match n.as_f64() {
        Some(v) if v.is_finite() && v.fract() == 0.0 => format!("{:.0}", v + 0.0),
        _ => n.to_string(),
    }
}

/// One catalog entry as loaded, before normalization.
///
/// Field names follow the catalog file (`nombre`, `tipo`, `coste`, ...);
/// English names are accepted as aliases.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCard {
    #[serde(default)]
    pub id: Option<RawId>,

    #[serde(default, rename = "nombre", alias = "name")]
    pub name: Option<String>,

    #[serde(default, rename = "tipo", alias = "type")]
    pub card_type: Option<String>,

    #[serde(default, rename = "coste", alias = "cost", deserialize_with = "loose_number")]
    pub cost: Option<i64>,

    #[serde(default, rename = "fuerza", alias = "strength", deserialize_with = "loose_number")]
    pub strength: Option<i64>,

    #[serde(default, rename = "habilidad", alias = "ability")]
    pub ability: Option<String>,

    #[serde(default, rename = "imagen", alias = "image")]
    pub image: Option<String>,

    /// Pre-computed grouping label, used when editions are not derived.
    #[serde(default, rename = "edicion", alias = "edition")]
    pub edition: Option<String>,
}

impl RawCard {
    /// Create a raw card with just a name (builder pattern).
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the identifier.
    #[must_use]
    pub fn with_id(mut self, id: RawId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the type label.
    #[must_use]
    pub fn with_type(mut self, card_type: impl Into<String>) -> Self {
        self.card_type = Some(card_type.into());
        self
    }

    /// Set the cost.
    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Set the image path.
    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    /// Set the pre-computed edition.
    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = Some(edition.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LooseNumber {
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl LooseNumber {
    fn into_int(self) -> Option<i64> {
        match self {
            LooseNumber::Int(v) => Some(v),
            LooseNumber::Float(v) if v.is_finite() && v.fract() == 0.0 => Some(v as i64),
            LooseNumber::Float(_) => None,
            LooseNumber::Text(s) => s.trim().parse().ok(),
            LooseNumber::Other(_) => None,
        }
    }
}

/// Numbers, integral floats and numeric strings become `Some`; anything
/// else is unset.
fn loose_number<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseNumber>::deserialize(deserializer)?;
    Ok(value.and_then(LooseNumber::into_int))
}

/// Normalized card record.
///
/// Created once by the normalizer and never modified afterwards.
///
/// ## Example
///
/// ```
/// use myl_deck::cards::{CardId, CardRecord};
///
/// let card = CardRecord::new(CardId::from(1u32), "Zeus", "Aliado")
///     .with_cost(4)
///     .with_edition("Helenica");
///
/// assert_eq!(card.effective_cost(), 4);
/// assert_eq!(card.ability_text(), "");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardRecord {
    pub id: CardId,
    pub name: String,
    /// Type label, possibly with a decorative prefix.
    pub card_type: String,
    pub cost: Option<i64>,
    pub strength: Option<i64>,
    pub ability: Option<String>,
    pub image: Option<String>,
    /// Grouping label.
    pub edition: String,
}

impl CardRecord {
    /// Create a record with no optional attributes.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            card_type: card_type.into(),
            cost: None,
            strength: None,
            ability: None,
            image: None,
            edition: DEFAULT_UNCLASSIFIED_LABEL.to_string(),
        }
    }

    #[must_use]
    pub fn with_cost(mut self, cost: i64) -> Self {
        self.cost = Some(cost);
        self
    }

    #[must_use]
    pub fn with_strength(mut self, strength: i64) -> Self {
        self.strength = Some(strength);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: impl Into<String>) -> Self {
        self.ability = Some(ability.into());
        self
    }

    #[must_use]
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        self.image = Some(image.into());
        self
    }

    #[must_use]
    pub fn with_edition(mut self, edition: impl Into<String>) -> Self {
        self.edition = edition.into();
        self
    }

    /// Cost used for comparisons; `UNSET_COST` when the card has none.
    #[must_use]
    pub fn effective_cost(&self) -> i64 {
        self.cost.unwrap_or(UNSET_COST)
    }

    /// Ability text, empty when absent.
    #[must_use]
    pub fn ability_text(&self) -> &str {
        self.ability.as_deref().unwrap_or("")
    }
}
