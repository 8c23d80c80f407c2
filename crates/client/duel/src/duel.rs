//! Runs a scripted duel between two configured stacks.
use std::rc::Rc;

use anyhow::{Context, Result};
use battle_content::CreatureCatalog;
use battle_core::{
    AbilityStack, Battle, CombatConfig, CombatUnit, Creature, DamageCalculator,
    DefaultDamageCalculator, Side,
};

use crate::config::{DuelConfig, FighterConfig};

/// Final state of a duel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DuelOutcome {
    pub winner: Option<Side>,
    pub rounds: u32,
    pub attacker_hp: i32,
    pub defender_hp: i32,
}

/// Fights until one side falls or the round limit is reached.
///
/// Each active unit attacks the first standing unit of the other side.
pub fn run_duel(
    config: &DuelConfig,
    catalog: &CreatureCatalog,
    combat: &CombatConfig,
) -> Result<DuelOutcome> {
    let calculator: Rc<dyn DamageCalculator> = match config.seed {
        Some(seed) => Rc::new(DefaultDamageCalculator::seeded(seed).with_tables(combat.damage)),
        None => Rc::new(DefaultDamageCalculator::from_entropy().with_tables(combat.damage)),
    };

    let attacker = build_fighter(&config.attacker, catalog, &calculator)?;
    let defender = build_fighter(&config.defender, catalog, &calculator)?;
    let mut battle = Battle::new(vec![attacker], vec![defender]);

    while battle.winner().is_none() && battle.round() <= config.max_rounds {
        let Some(active) = battle.active() else {
            break;
        };
        let Some(target) = battle.first_standing(active.side.opponent()) else {
            break;
        };

        battle
            .attack(active, target)
            .with_context(|| format!("{active} failed to attack {target}"))?;
        if battle.winner().is_some() {
            break;
        }
        battle.advance();
    }

    let hp = |side: Side| {
        battle
            .first_standing(side)
            .or_else(|| battle.unit_ids(side).next())
            .and_then(|id| battle.unit(id))
            .map_or(0, |unit| unit.current_hp())
    };

    let outcome = DuelOutcome {
        winner: battle.winner(),
        rounds: battle.round().min(config.max_rounds),
        attacker_hp: hp(Side::Left),
        defender_hp: hp(Side::Right),
    };

    match outcome.winner {
        Some(side) => tracing::info!(%side, rounds = outcome.rounds, "duel won"),
        None => tracing::info!(rounds = outcome.rounds, "duel ended in a draw"),
    }
    Ok(outcome)
}

fn build_fighter(
    fighter: &FighterConfig,
    catalog: &CreatureCatalog,
    calculator: &Rc<dyn DamageCalculator>,
) -> Result<Box<dyn CombatUnit>> {
    let stats = catalog.get(&fighter.creature).with_context(|| {
        format!(
            "creature '{}' not found in catalog (known: {})",
            fighter.creature,
            catalog.names().collect::<Vec<_>>().join(", ")
        )
    })?;

    let creature = Creature::builder(stats.clone())
        .shared_calculator(Rc::clone(calculator))
        .amount(fighter.amount)
        .build();

    tracing::info!(
        creature = %fighter.creature,
        amount = fighter.amount,
        abilities = ?fighter.abilities,
        "fighter ready"
    );

    Ok(AbilityStack::new(creature)
        .with_all(fighter.abilities.iter().copied())
        .build())
}
