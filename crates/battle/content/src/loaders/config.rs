//! Combat configuration loader.

use std::path::Path;

use battle_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

const BUILTIN_CONFIG: &str = include_str!("../../data/combat.toml");

/// Loader for combat configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// Missing keys fall back to [`CombatConfig::default`].
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        Ok(config)
    }

    /// The balance table shipped with this crate.
    pub fn builtin() -> LoadResult<CombatConfig> {
        Self::parse(BUILTIN_CONFIG)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use battle_core::DamageTables;

    use super::*;

    #[test]
    fn builtin_matches_defaults() {
        assert_eq!(ConfigLoader::builtin().unwrap(), CombatConfig::default());
    }

    #[test]
    fn partial_tables_keep_defaults() {
        let config = ConfigLoader::parse("[damage]\nattack_cap = 20\n").unwrap();

        assert_eq!(config.damage.attack_cap, 20);
        assert_eq!(config.damage.armor_cap, DamageTables::DEFAULT_ARMOR_CAP);
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[damage]\narmor_reduction = 0.05").unwrap();

        let config = ConfigLoader::load(file.path()).unwrap();

        assert_eq!(config.damage.armor_reduction, 0.05);
    }

    #[test]
    fn reports_missing_file() {
        let error = ConfigLoader::load(Path::new("/nonexistent/combat.toml")).unwrap_err();
        assert!(error.to_string().contains("Failed to read file"));
    }
}
