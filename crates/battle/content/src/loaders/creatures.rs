//! Creature catalog loader.

use std::path::Path;

use battle_core::CreatureStatistics;
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

const BUILTIN_CATALOG: &str = include_str!("../../data/creatures.ron");

/// Creature catalog structure for RON files.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatureCatalog {
    pub creatures: Vec<CreatureStatistics>,
}

impl CreatureCatalog {
    /// Looks up a creature type by name, ignoring ASCII case.
    pub fn get(&self, name: &str) -> Option<&CreatureStatistics> {
        self.creatures
            .iter()
            .find(|stats| stats.name.eq_ignore_ascii_case(name))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.creatures.iter().map(|stats| stats.name.as_str())
    }
}

/// Loader for creature catalogs from RON files.
pub struct CreatureLoader;

impl CreatureLoader {
    /// Load a creature catalog from a RON file.
    ///
    /// Every entry is validated; the first invalid one fails the whole load.
    pub fn load(path: &Path) -> LoadResult<CreatureCatalog> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a creature catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<CreatureCatalog> {
        let catalog: CreatureCatalog = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse creature catalog RON: {}", e))?;

        for stats in &catalog.creatures {
            stats
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid creature '{}': {}", stats.name, e))?;
        }

        tracing::debug!(count = catalog.creatures.len(), "creature catalog loaded");
        Ok(catalog)
    }

    /// The roster shipped with this crate.
    pub fn builtin() -> LoadResult<CreatureCatalog> {
        Self::parse(BUILTIN_CATALOG)
    }
}
