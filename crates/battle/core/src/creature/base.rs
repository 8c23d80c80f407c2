use std::rc::Rc;

use super::{CombatUnit, CreatureBuilder};
use crate::artifact::{Artifact, ArtifactError};
use crate::combat::{AttackResult, DamageCalculator, resolve_attack};
use crate::config::CombatConfig;
use crate::stats::CreatureStatistics;
use crate::turn::TurnEvent;

/// A stack of identical creatures fighting as one unit.
///
/// Owns its statistics exclusively; artifacts mutate them only through
/// [`CombatUnit::apply_artifact`]. The calculator is shared and stateless
/// from the creature's point of view.
pub struct Creature {
    stats: CreatureStatistics,
    amount: u32,
    current_hp: i32,
    counter_attack_budget: u32,
    calculator: Rc<dyn DamageCalculator>,
}

impl Creature {
    /// Creates a creature at full health with a fresh counterattack budget.
    pub fn new(
        stats: CreatureStatistics,
        calculator: Rc<dyn DamageCalculator>,
        amount: u32,
    ) -> Self {
        let current_hp = hp_value(stats.max_hp);
        Self {
            stats,
            amount,
            current_hp,
            counter_attack_budget: CombatConfig::COUNTER_ATTACK_BUDGET,
            calculator,
        }
    }

    /// Creates a builder for a creature of the given type.
    pub fn builder(stats: CreatureStatistics) -> CreatureBuilder {
        CreatureBuilder::new(stats)
    }

    /// The shared calculator handle, for building more creatures on it.
    pub fn shared_calculator(&self) -> Rc<dyn DamageCalculator> {
        Rc::clone(&self.calculator)
    }

    fn max_hp(&self) -> i32 {
        hp_value(self.stats.max_hp)
    }
}

impl CombatUnit for Creature {
    fn statistics(&self) -> &CreatureStatistics {
        &self.stats
    }

    fn stack_amount(&self) -> u32 {
        self.amount
    }

    fn current_hp(&self) -> i32 {
        self.current_hp
    }

    fn counter_attack_budget(&self) -> u32 {
        self.counter_attack_budget
    }

    fn calculator(&self) -> &dyn DamageCalculator {
        self.calculator.as_ref()
    }

    fn attack(&mut self, defender: &mut dyn CombatUnit) -> AttackResult {
        resolve_attack(self, defender)
    }

    fn receive_damage(&mut self, damage: u32) {
        self.current_hp = self.current_hp.saturating_sub(hp_value(damage));
    }

    fn spend_counter_attack(&mut self) {
        self.counter_attack_budget = self.counter_attack_budget.saturating_sub(1);
    }

    fn heal(&mut self, amount: u32) {
        let max_hp = self.max_hp();
        if self.current_hp >= max_hp {
            return;
        }
        self.current_hp = self.current_hp.saturating_add(hp_value(amount)).min(max_hp);
    }

    fn restore_hp_to_max(&mut self) {
        self.current_hp = self.max_hp();
    }

    fn handle_turn_event(&mut self, event: &TurnEvent) {
        if let TurnEvent::EndOfTurn = event {
            self.counter_attack_budget = CombatConfig::COUNTER_ATTACK_BUDGET;
            tracing::debug!(creature = self.name(), "counterattack budget reset");
        }
    }

    fn apply_artifact(&mut self, artifact: &Artifact) -> Result<(), ArtifactError> {
        if let Err(error) = artifact.ensure_primary() {
            tracing::warn!(creature = self.name(), %error, "artifact rejected");
            return Err(error);
        }

        self.stats.apply_effects(artifact.effects())?;
        // A lowered maximum drags current HP down with it
        self.current_hp = self.current_hp.min(self.max_hp());

        tracing::debug!(
            creature = self.name(),
            artifact = artifact.name(),
            attack = self.stats.attack,
            armor = self.stats.armor,
            max_hp = self.stats.max_hp,
            "artifact applied"
        );
        Ok(())
    }
}

impl core::fmt::Debug for Creature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Creature")
            .field("stats", &self.stats)
            .field("amount", &self.amount)
            .field("current_hp", &self.current_hp)
            .field("counter_attack_budget", &self.counter_attack_budget)
            .finish_non_exhaustive()
    }
}

fn hp_value(value: u32) -> i32 {
    i32::try_from(value).unwrap_or(i32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::{ApplyingMode, ArtifactCategory, ArtifactEffect, ArtifactTarget};
    use crate::combat::FixedDamageCalculator;
    use crate::stats::DamageRange;

    fn creature(max_hp: u32, damage: u32) -> Creature {
        let stats =
            CreatureStatistics::new("Pikeman", max_hp, 4, 5, DamageRange::new(1, 3).unwrap(), 4)
                .unwrap();
        Creature::builder(stats)
            .calculator(FixedDamageCalculator(damage))
            .build()
    }

    #[test]
    fn starts_at_full_health_with_budget() {
        let pikeman = creature(10, 1);
        assert_eq!(pikeman.current_hp(), 10);
        assert_eq!(pikeman.counter_attack_budget(), 1);
        assert_eq!(pikeman.stack_amount(), 1);
        assert!(pikeman.is_alive());
    }

    #[test]
    fn heal_never_exceeds_max_hp() {
        let mut pikeman = creature(10, 1);
        pikeman.receive_damage(6);
        pikeman.heal(2);
        assert_eq!(pikeman.current_hp(), 6);

        pikeman.heal(50);
        assert_eq!(pikeman.current_hp(), 10);

        pikeman.heal(5);
        assert_eq!(pikeman.current_hp(), 10);
    }

    #[test]
    fn damage_is_not_clamped_to_zero() {
        let mut pikeman = creature(10, 1);
        pikeman.receive_damage(14);
        assert_eq!(pikeman.current_hp(), -4);
        // Health alone does not reduce the stack
        assert!(pikeman.is_alive());
        assert!(!pikeman.can_counter_attack());
    }

    #[test]
    fn empty_stack_cannot_attack() {
        let stats = CreatureStatistics::new("Husk", 10, 1, 1, DamageRange::fixed(3), 1).unwrap();
        let mut husk = Creature::builder(stats)
            .calculator(FixedDamageCalculator(3))
            .amount(0)
            .build();
        let mut target = creature(10, 1);

        let result = husk.attack(&mut target);

        assert!(result.is_skipped());
        assert_eq!(target.current_hp(), 10);
    }

    #[test]
    fn only_end_of_turn_resets_budget() {
        let mut attacker = creature(30, 2);
        let mut defender = creature(30, 2);
        attacker.attack(&mut defender);
        assert_eq!(attacker.counter_attack_budget(), 0);

        attacker.handle_turn_event(&TurnEvent::RoundStarted(2));
        assert_eq!(attacker.counter_attack_budget(), 0);

        attacker.on_turn_end();
        assert_eq!(attacker.counter_attack_budget(), 1);

        attacker.on_turn_end();
        assert_eq!(attacker.counter_attack_budget(), 1);
    }

    #[test]
    fn budget_never_goes_below_zero() {
        let mut attacker = creature(50, 1);
        let mut defender = creature(50, 1);

        attacker.attack(&mut defender);
        attacker.attack(&mut defender);

        assert_eq!(attacker.counter_attack_budget(), 0);
        // Defender still has its own budget and keeps retaliating
        assert_eq!(defender.counter_attack_budget(), 1);
        assert_eq!(attacker.current_hp(), 48);
    }

    #[test]
    fn lowering_max_hp_clamps_current_hp() {
        let mut pikeman = creature(20, 1);
        let cursed = Artifact::builder("Cursed Ring")
            .effect(ArtifactEffect::new(
                ArtifactTarget::Health,
                ApplyingMode::Multiply,
                0.5,
            ))
            .build();

        pikeman.apply_artifact(&cursed).unwrap();

        assert_eq!(pikeman.statistics().max_hp, 10);
        assert_eq!(pikeman.current_hp(), 10);
    }

    #[test]
    fn raising_max_hp_keeps_current_hp() {
        let mut pikeman = creature(20, 1);
        let vial = Artifact::builder("Vial of Lifeblood")
            .effect(ArtifactEffect::new(
                ArtifactTarget::Health,
                ApplyingMode::Add,
                5.0,
            ))
            .build();

        pikeman.apply_artifact(&vial).unwrap();

        assert_eq!(pikeman.statistics().max_hp, 25);
        assert_eq!(pikeman.current_hp(), 20);
    }

    #[test]
    fn non_primary_artifact_leaves_statistics_unchanged() {
        let mut pikeman = creature(20, 1);
        let before = pikeman.statistics().clone();
        let tome = Artifact::builder("Tome of Air")
            .category(ArtifactCategory::Skill)
            .effect(ArtifactEffect::new(
                ArtifactTarget::Attack,
                ApplyingMode::Add,
                5.0,
            ))
            .build();

        let result = pikeman.apply_artifact(&tome);

        assert!(matches!(result, Err(ArtifactError::InvalidArtifact { .. })));
        assert_eq!(pikeman.statistics(), &before);
    }
}
