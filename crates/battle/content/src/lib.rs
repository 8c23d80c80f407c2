//! Data-driven content definitions and loaders.
//!
//! This crate houses static battle content and provides loaders for RON/TOML
//! data files:
//! - Creature statistic catalogs (data-driven via RON)
//! - Combat balance configuration (data-driven via TOML)
//!
//! A default roster and balance table ship with the crate under `data/`.
//! All loaders use battle-core types directly with serde for deserialization.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, CreatureCatalog, CreatureLoader, LoadResult};
