//! Ability decorators.
//!
//! An ability wraps exactly one [`CombatUnit`] and overrides a few of its
//! behaviors while forwarding everything else unchanged. Decorators stack;
//! the outermost layer receives every command, so the stacking order decides
//! which override fires.
//!
//! # Ordering
//!
//! [`NoCounterAttack`] must be the outermost layer: a decorator wrapped around
//! it that resolves attacks itself reintroduces the counterattack it
//! suppresses. [`AbilityStack`] enforces this regardless of the order
//! abilities are added in. Hand-built chains must keep the order themselves.

use crate::creature::{CombatUnit, Creature};

/// Forwards the pass-through part of [`CombatUnit`] to a wrapped unit.
///
/// Decorators implement `attack` and `handle_turn_event` themselves.
macro_rules! forward_combat_unit {
    ($inner:ident) => {
        fn statistics(&self) -> &$crate::stats::CreatureStatistics {
            self.$inner.statistics()
        }

        fn stack_amount(&self) -> u32 {
            self.$inner.stack_amount()
        }

        fn current_hp(&self) -> i32 {
            self.$inner.current_hp()
        }

        fn counter_attack_budget(&self) -> u32 {
            self.$inner.counter_attack_budget()
        }

        fn calculator(&self) -> &dyn $crate::combat::DamageCalculator {
            self.$inner.calculator()
        }

        fn receive_damage(&mut self, damage: u32) {
            self.$inner.receive_damage(damage);
        }

        fn spend_counter_attack(&mut self) {
            self.$inner.spend_counter_attack();
        }

        fn heal(&mut self, amount: u32) {
            self.$inner.heal(amount);
        }

        fn restore_hp_to_max(&mut self) {
            self.$inner.restore_hp_to_max();
        }

        fn apply_artifact(
            &mut self,
            artifact: &$crate::artifact::Artifact,
        ) -> Result<(), $crate::artifact::ArtifactError> {
            self.$inner.apply_artifact(artifact)
        }
    };
}

mod no_counter;
mod regeneration;

pub use no_counter::NoCounterAttack;
pub use regeneration::Regeneration;

/// Tag naming an ability decorator.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Ability {
    /// Attacks never provoke a counterattack.
    NoCounterAttack,
    /// Heals to full at the end of every turn.
    Regeneration,
}

impl Ability {
    /// Whether this ability only works as the outermost layer.
    pub const fn requires_outermost(self) -> bool {
        matches!(self, Self::NoCounterAttack)
    }

    /// Wraps `inner` in the decorator this tag names.
    pub fn wrap(self, inner: Box<dyn CombatUnit>) -> Box<dyn CombatUnit> {
        match self {
            Self::NoCounterAttack => Box::new(NoCounterAttack::new(inner)),
            Self::Regeneration => Box::new(Regeneration::new(inner)),
        }
    }
}

/// Builds a decorator chain over a base creature.
///
/// Abilities are applied innermost-first in the order added, except that
/// abilities which require the outermost position are always applied last.
/// Adding the same ability twice has no further effect.
pub struct AbilityStack {
    base: Creature,
    abilities: Vec<Ability>,
}

impl AbilityStack {
    pub fn new(base: Creature) -> Self {
        Self {
            base,
            abilities: Vec::new(),
        }
    }

    pub fn with(mut self, ability: Ability) -> Self {
        if !self.abilities.contains(&ability) {
            self.abilities.push(ability);
        }
        self
    }

    pub fn with_all(self, abilities: impl IntoIterator<Item = Ability>) -> Self {
        abilities.into_iter().fold(self, Self::with)
    }

    /// Abilities from innermost to outermost, as [`AbilityStack::build`] will
    /// apply them.
    pub fn layers(&self) -> Vec<Ability> {
        let (outer, inner): (Vec<Ability>, Vec<Ability>) = self
            .abilities
            .iter()
            .partition(|ability| ability.requires_outermost());
        inner.into_iter().chain(outer).collect()
    }

    pub fn build(self) -> Box<dyn CombatUnit> {
        let layers = self.layers();
        layers
            .into_iter()
            .fold(Box::new(self.base) as Box<dyn CombatUnit>, |unit, ability| {
                ability.wrap(unit)
            })
    }
}
