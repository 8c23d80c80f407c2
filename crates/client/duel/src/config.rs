//! Duel configuration structures and loaders.
use std::env;
use std::path::PathBuf;

use battle_core::Ability;

/// Configuration for a single scripted duel.
#[derive(Clone, Debug)]
pub struct DuelConfig {
    pub seed: Option<u64>,
    pub creatures_path: Option<PathBuf>,
    pub combat_config_path: Option<PathBuf>,
    pub attacker: FighterConfig,
    pub defender: FighterConfig,
    pub max_rounds: u32,
}

/// One side of the duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FighterConfig {
    pub creature: String,
    pub amount: u32,
    pub abilities: Vec<Ability>,
}

impl FighterConfig {
    pub fn new(creature: impl Into<String>, amount: u32) -> Self {
        Self {
            creature: creature.into(),
            amount,
            abilities: Vec::new(),
        }
    }

    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }
}

impl Default for DuelConfig {
    fn default() -> Self {
        Self {
            seed: None,
            creatures_path: None,
            combat_config_path: None,
            attacker: FighterConfig::new("Swordsman", 5),
            defender: FighterConfig::new("Troll", 2),
            max_rounds: 20,
        }
    }
}

impl DuelConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `DUEL_SEED` - Seed for the damage rolls (default: entropy)
    /// - `DUEL_CREATURES` - RON creature catalog (default: built-in roster)
    /// - `DUEL_COMBAT_CONFIG` - TOML balance table (default: built-in table)
    /// - `DUEL_ATTACKER` / `DUEL_DEFENDER` - Creature names
    /// - `DUEL_ATTACKER_AMOUNT` / `DUEL_DEFENDER_AMOUNT` - Stack sizes
    /// - `DUEL_ATTACKER_ABILITIES` / `DUEL_DEFENDER_ABILITIES` - Comma-separated
    ///   ability names (e.g. `no_counter_attack,regeneration`)
    /// - `DUEL_MAX_ROUNDS` - Round limit before a draw (default: 20)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        config.seed = read_env::<u64>("DUEL_SEED");
        config.creatures_path = env::var("DUEL_CREATURES").ok().map(PathBuf::from);
        config.combat_config_path = env::var("DUEL_COMBAT_CONFIG").ok().map(PathBuf::from);

        read_fighter("DUEL_ATTACKER", &mut config.attacker);
        read_fighter("DUEL_DEFENDER", &mut config.defender);

        if let Some(rounds) = read_env::<u32>("DUEL_MAX_ROUNDS") {
            config.max_rounds = rounds.max(1);
        }

        config
    }
}

fn read_fighter(prefix: &str, fighter: &mut FighterConfig) {
    if let Ok(name) = env::var(prefix) {
        fighter.creature = name;
    }
    if let Some(amount) = read_env::<u32>(&format!("{prefix}_AMOUNT")) {
        fighter.amount = amount;
    }
    if let Ok(list) = env::var(format!("{prefix}_ABILITIES")) {
        fighter.abilities = parse_abilities(&list);
    }
}

/// Parses a comma-separated ability list, skipping unknown names.
pub fn parse_abilities(list: &str) -> Vec<Ability> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .filter_map(|name| match name.parse::<Ability>() {
            Ok(ability) => Some(ability),
            Err(_) => {
                tracing::warn!(name, "unknown ability ignored");
                None
            }
        })
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_ability_lists() {
        assert_eq!(
            parse_abilities(" no_counter_attack, regeneration ,,bogus"),
            vec![Ability::NoCounterAttack, Ability::Regeneration]
        );
        assert!(parse_abilities("").is_empty());
    }
}
