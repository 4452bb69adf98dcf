//! Core engine types: configuration, errors, and the session.
//!
//! Variant behavior (edition derivation, deck tracking) is selected through
//! `EngineConfig` rather than separate code paths.

pub mod config;
pub mod error;
pub mod session;

pub use config::{
    EngineConfig, DEFAULT_COPY_CAP, DEFAULT_EDITION_MARKER, DEFAULT_TARGET_DECK_SIZE,
    DEFAULT_UNCLASSIFIED_LABEL,
};
pub use error::{CatalogError, ConfigError, DeckError, FilterError};
pub use session::Session;
