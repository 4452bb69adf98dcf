//! Engine configuration.
//!
//! One `EngineConfig` describes every variant of the browser: whether
//! editions are derived from image paths or read from the catalog, whether
//! deck tracking is available, and the deck-building constants.
//!
//! ```
//! use myl_deck::core::EngineConfig;
//!
//! let config = EngineConfig::default()
//!     .with_derive_editions(false)
//!     .with_target_deck_size(40);
//!
//! assert_eq!(config.copy_cap, 3);
//! assert!(config.validate().is_ok());
//! ```

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use crate::cards::{EditionResolver, Normalizer};
use crate::deck::CategoryRules;

/// Maximum copies of one card in a deck.
pub const DEFAULT_COPY_CAP: u8 = 3;

/// Advisory deck size, displayed but never enforced.
pub const DEFAULT_TARGET_DECK_SIZE: u32 = 50;

/// Path segment that precedes the edition folder in image references.
pub const DEFAULT_EDITION_MARKER: &str = "PRIMER_BLOQUE";

/// Grouping label for cards whose edition cannot be determined.
pub const DEFAULT_UNCLASSIFIED_LABEL: &str = "Otras";

/// Complete engine configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Maximum quantity of one distinct card in the deck.
    pub copy_cap: u8,

    /// Advisory deck size.
    pub target_deck_size: u32,

    /// Derive editions from image paths. When false the catalog's own
    /// `edicion` field is used.
    pub derive_editions: bool,

    /// Enable the deck ledger.
    pub deck_tracking: bool,

    /// Marker segment for edition derivation.
    pub edition_marker: String,

    /// Label for cards without a derivable edition.
    pub unclassified_label: String,

    /// Deck summary buckets.
    pub categories: CategoryRules,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            copy_cap: DEFAULT_COPY_CAP,
            target_deck_size: DEFAULT_TARGET_DECK_SIZE,
            derive_editions: true,
            deck_tracking: true,
            edition_marker: DEFAULT_EDITION_MARKER.to_string(),
            unclassified_label: DEFAULT_UNCLASSIFIED_LABEL.to_string(),
            categories: CategoryRules::default(),
        }
    }
}

impl EngineConfig {
    /// Parse a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    #[must_use]
    pub fn with_copy_cap(mut self, cap: u8) -> Self {
        self.copy_cap = cap;
        self
    }

    #[must_use]
    pub fn with_target_deck_size(mut self, size: u32) -> Self {
        self.target_deck_size = size;
        self
    }

    #[must_use]
    pub fn with_derive_editions(mut self, derive: bool) -> Self {
        self.derive_editions = derive;
        self
    }

    #[must_use]
    pub fn with_deck_tracking(mut self, enabled: bool) -> Self {
        self.deck_tracking = enabled;
        self
    }

    #[must_use]
    pub fn with_edition_marker(mut self, marker: impl Into<String>) -> Self {
        self.edition_marker = marker.into();
        self
    }

    #[must_use]
    pub fn with_unclassified_label(mut self, label: impl Into<String>) -> Self {
        self.unclassified_label = label.into();
        self
    }

    #[must_use]
    pub fn with_categories(mut self, categories: CategoryRules) -> Self {
        self.categories = categories;
        self
    }

    /// Check the configuration is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.copy_cap == 0 {
            return Err(ConfigError::ZeroCopyCap);
        }
        if self.derive_editions {
            self.edition_resolver()?;
        }
        Ok(())
    }

    /// Build the edition resolver for this configuration.
    pub fn edition_resolver(&self) -> Result<EditionResolver, ConfigError> {
        EditionResolver::new(&self.edition_marker, self.unclassified_label.as_str())
    }

    /// Build the catalog normalizer for this configuration.
    pub fn normalizer(&self) -> Result<Normalizer, ConfigError> {
        if self.derive_editions {
            Ok(Normalizer::deriving(self.edition_resolver()?))
        } else {
            Ok(Normalizer::passthrough(self.unclassified_label.as_str()))
        }
    }
}
