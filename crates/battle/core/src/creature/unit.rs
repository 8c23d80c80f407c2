//! Capability interface shared by creatures and ability decorators.

use crate::artifact::{Artifact, ArtifactError};
use crate::combat::{AttackResult, DamageCalculator};
use crate::stats::{CombatProfile, CreatureStatistics};
use crate::turn::TurnEvent;

/// Everything a battle controller can ask of a combat unit.
///
/// Implemented by [`Creature`](super::Creature) and by every ability
/// decorator. A decorator overrides a documented subset of the behavioral
/// operations and forwards the rest to the unit it wraps, so callers must
/// always hold the **outermost** layer.
pub trait CombatUnit {
    // ===== reads =====

    fn statistics(&self) -> &CreatureStatistics;

    fn stack_amount(&self) -> u32;

    fn current_hp(&self) -> i32;

    fn counter_attack_budget(&self) -> u32;

    fn calculator(&self) -> &dyn DamageCalculator;

    fn name(&self) -> &str {
        &self.statistics().name
    }

    fn move_range(&self) -> u32 {
        self.statistics().move_range
    }

    /// A unit is alive while its stack holds at least one creature.
    fn is_alive(&self) -> bool {
        self.stack_amount() > 0
    }

    /// Whether this unit may strike back after being attacked.
    fn can_counter_attack(&self) -> bool {
        self.is_alive() && self.current_hp() > 0 && self.counter_attack_budget() > 0
    }

    fn profile(&self) -> CombatProfile {
        CombatProfile::of(self.statistics(), self.stack_amount())
    }

    // ===== behavior =====

    /// Attacks `defender`. See [`resolve_attack`](crate::combat::resolve_attack)
    /// for the base rules.
    fn attack(&mut self, defender: &mut dyn CombatUnit) -> AttackResult;

    /// Subtracts `damage` from current HP without clamping.
    fn receive_damage(&mut self, damage: u32);

    /// Records that a counterattack was taken against this unit this turn.
    fn spend_counter_attack(&mut self);

    /// Raises current HP by `amount`, never above max HP.
    fn heal(&mut self, amount: u32);

    fn restore_hp_to_max(&mut self);

    /// Reacts to a turn-phase signal. Only [`TurnEvent::EndOfTurn`] has an
    /// effect on a base creature.
    fn handle_turn_event(&mut self, event: &TurnEvent);

    fn on_turn_end(&mut self) {
        self.handle_turn_event(&TurnEvent::EndOfTurn);
    }

    /// Applies a primary artifact's effects to the underlying statistics.
    fn apply_artifact(&mut self, artifact: &Artifact) -> Result<(), ArtifactError>;
}

impl<U: CombatUnit + ?Sized> CombatUnit for Box<U> {
    fn statistics(&self) -> &CreatureStatistics {
        (**self).statistics()
    }

    fn stack_amount(&self) -> u32 {
        (**self).stack_amount()
    }

    fn current_hp(&self) -> i32 {
        (**self).current_hp()
    }

    fn counter_attack_budget(&self) -> u32 {
        (**self).counter_attack_budget()
    }

    fn calculator(&self) -> &dyn DamageCalculator {
        (**self).calculator()
    }

    fn name(&self) -> &str {
        (**self).name()
    }

    fn is_alive(&self) -> bool {
        (**self).is_alive()
    }

    fn can_counter_attack(&self) -> bool {
        (**self).can_counter_attack()
    }

    fn profile(&self) -> CombatProfile {
        (**self).profile()
    }

    fn attack(&mut self, defender: &mut dyn CombatUnit) -> AttackResult {
        (**self).attack(defender)
    }

    fn receive_damage(&mut self, damage: u32) {
        (**self).receive_damage(damage);
    }

    fn spend_counter_attack(&mut self) {
        (**self).spend_counter_attack();
    }

    fn heal(&mut self, amount: u32) {
        (**self).heal(amount);
    }

    fn restore_hp_to_max(&mut self) {
        (**self).restore_hp_to_max();
    }

    fn handle_turn_event(&mut self, event: &TurnEvent) {
        (**self).handle_turn_event(event);
    }

    fn on_turn_end(&mut self) {
        (**self).on_turn_end();
    }

    fn apply_artifact(&mut self, artifact: &Artifact) -> Result<(), ArtifactError> {
        (**self).apply_artifact(artifact)
    }
}
