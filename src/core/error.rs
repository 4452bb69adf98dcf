//! Error types.
//!
//! Every failure the engine can report is a recoverable value. Nothing in
//! the library panics on catalog data or user input.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardId;

/// Failure while loading or building a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("copy cap must be at least 1")]
    ZeroCopyCap,
    #[error("edition marker must not be empty")]
    EmptyMarker,
    #[error("invalid edition marker: {0}")]
    InvalidMarker(#[from] regex::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Invalid filter control value.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("invalid cost filter {0:?} (expected \"all\", \"<n>\" or \"<n>+\")")]
    InvalidCost(String),
}

/// Deck mutation that could not be applied. State is unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DeckError {
    #[error("{id} is already at the copy limit of {cap}")]
    CopyCapReached { id: CardId, cap: u8 },
    #[error("{0} is not in the catalog")]
    UnknownCard(CardId),
    #[error("deck tracking is disabled for this session")]
    TrackingDisabled,
}
