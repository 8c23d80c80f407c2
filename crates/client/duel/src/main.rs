//! Scripted duel entry point.
mod config;
mod duel;

use anyhow::{Context, Result};
use battle_content::{ConfigLoader, CreatureLoader};
use config::DuelConfig;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = DuelConfig::from_env();

    let catalog = match &config.creatures_path {
        Some(path) => CreatureLoader::load(path)?,
        None => CreatureLoader::builtin()?,
    };
    let combat = match &config.combat_config_path {
        Some(path) => ConfigLoader::load(path)?,
        None => ConfigLoader::builtin()?,
    };

    let outcome = duel::run_duel(&config, &catalog, &combat).context("duel aborted")?;

    println!(
        "winner: {}, rounds: {}, hp: {} vs {}",
        outcome
            .winner
            .map_or_else(|| "draw".to_string(), |side| side.to_string()),
        outcome.rounds,
        outcome.attacker_hp,
        outcome.defender_hp
    );
    Ok(())
}
