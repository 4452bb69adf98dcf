//! Catalog normalization and lookup.
//!
//! The `Normalizer` turns raw catalog entries into `CardRecord`s: it
//! assigns an identifier to every record and attaches its edition. The
//! `Catalog` holds the normalized records in load order and provides fast
//! lookup by `CardId`.

use std::fs;
use std::path::Path;

use std::hash::BuildHasherDefault;

use im::{HashMap as ImHashMap, Vector};
use rustc_hash::FxHasher;

use super::edition::EditionResolver;
use super::record::{CardId, CardRecord, RawCard};
use crate::core::error::CatalogError;

#[derive(Clone, Debug)]
enum EditionSource {
    /// Derive the edition from the image path.
    Derived(EditionResolver),
    /// Use the edition carried by the raw record.
    Provided { unclassified: String },
}

/// Converts raw catalog entries into normalized records.
#[derive(Clone, Debug)]
pub struct Normalizer {
    editions: EditionSource,
}

impl Normalizer {
    /// Normalizer that derives editions from image paths.
    #[must_use]
    pub fn deriving(resolver: EditionResolver) -> Self {
        Self {
            editions: EditionSource::Derived(resolver),
        }
    }

    /// Normalizer that keeps each record's own edition, falling back to
    /// `unclassified` when it has none.
    #[must_use]
    pub fn passthrough(unclassified: impl Into<String>) -> Self {
        Self {
            editions: EditionSource::Provided {
                unclassified: unclassified.into(),
            },
        }
    }

    /// Normalize a whole catalog.
    ///
    /// Order is preserved: a record without an identifier gets its
    /// zero-based position in `raw`.
    #[must_use]
    pub fn normalize(&self, raw: &[RawCard]) -> Vec<CardRecord> {
        raw.iter()
            .enumerate()
            .map(|(index, card)| self.normalize_one(index, card))
            .collect()
    }

    fn normalize_one(&self, index: usize, raw: &RawCard) -> CardRecord {
        let id = raw
            .id
            .as_ref()
            .map_or_else(|| CardId::from_position(index), CardId::from);

        let edition = match &self.editions {
            EditionSource::Derived(resolver) => resolver.resolve(raw.image.as_deref()),
            EditionSource::Provided { unclassified } => raw
                .edition
                .as_deref()
                .map(str::trim)
                .filter(|e| !e.is_empty())
                .unwrap_or(unclassified.as_str())
                .to_string(),
        };

        CardRecord {
            id,
            name: raw.name.clone().unwrap_or_default(),
            card_type: raw.card_type.clone().unwrap_or_default(),
            cost: raw.cost,
            strength: raw.strength,
            ability: raw.ability.clone(),
            image: raw.image.clone(),
            edition,
        }
    }
}

/// Normalized card catalog.
///
/// Records keep load order. Cloning shares both the record storage and
/// the id index.
///
/// ## Example
///
/// ```
/// use myl_deck::cards::{Catalog, CardId, CardRecord};
///
/// let catalog = Catalog::from_records(vec![
///     CardRecord::new(CardId::from(0u32), "Zeus", "Aliado"),
///     CardRecord::new(CardId::from(1u32), "Oro", "Oro"),
/// ]);
///
/// assert_eq!(catalog.len(), 2);
/// assert_eq!(catalog.get(&CardId::from("1")).unwrap().name, "Oro");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vector<CardRecord>,
    index: ImHashMap<CardId, usize, BuildHasherDefault<FxHasher>>,
}

impl Catalog {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from normalized records.
    ///
    /// A record whose id is already taken is skipped with a warning; the
    /// first record with that id stays.
    #[must_use]
    pub fn from_records(records: impl IntoIterator<Item = CardRecord>) -> Self {
        let mut catalog = Self::new();
        for record in records {
            if catalog.index.contains_key(&record.id) {
                log::warn!("Duplicate card id {}, skipping {:?}", record.id, record.name);
                continue;
            }
            catalog.index.insert(record.id.clone(), catalog.records.len());
            catalog.records.push_back(record);
        }
        catalog
    }

    /// Normalize raw entries and build a catalog.
    #[must_use]
    pub fn from_raw(raw: &[RawCard], normalizer: &Normalizer) -> Self {
        Self::from_records(normalizer.normalize(raw))
    }

    /// Parse a JSON array of raw entries and build a catalog.
    pub fn from_json_str(json: &str, normalizer: &Normalizer) -> Result<Self, CatalogError> {
        let raw: Vec<RawCard> = serde_json::from_str(json)?;
        Ok(Self::from_raw(&raw, normalizer))
    }

    /// Read a JSON catalog file and build a catalog.
    pub fn from_path(path: &Path, normalizer: &Normalizer) -> Result<Self, CatalogError> {
        let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json_str(&json, normalizer)?;
        log::info!("Loaded {} cards from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Get a record by ID.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&CardRecord> {
        self.index.get(id).and_then(|&i| self.records.get(i))
    }

    /// Check if a card ID is in the catalog.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.index.contains_key(id)
    }

    /// Get the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over records in load order.
    pub fn iter(&self) -> impl Iterator<Item = &CardRecord> {
        self.records.iter()
    }

    /// Find records matching a predicate, in load order.
    pub fn find<F>(&self, predicate: F) -> impl Iterator<Item = &CardRecord>
    where
        F: Fn(&CardRecord) -> bool,
    {
        self.records.iter().filter(move |c| predicate(c))
    }

    /// Distinct edition labels, sorted.
    #[must_use]
    pub fn editions(&self) -> Vec<&str> {
        let mut editions: Vec<&str> = self.records.iter().map(|c| c.edition.as_str()).collect();
        editions.sort_unstable();
        editions.dedup();
        editions
    }

    /// Distinct non-empty type labels, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut types: Vec<&str> = self
            .records
            .iter()
            .map(|c| c.card_type.trim())
            .filter(|t| !t.is_empty())
            .collect();
        types.sort_unstable();
        types.dedup();
        types
    }
}
