use crate::combat::AttackResult;
use crate::creature::CombatUnit;
use crate::turn::TurnEvent;

/// Heals the wrapped unit to full at the end of every turn.
///
/// A unit whose health already dropped to zero or below is not revived.
#[derive(Debug)]
pub struct Regeneration<U> {
    inner: U,
}

impl<U: CombatUnit> Regeneration<U> {
    pub fn new(inner: U) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &U {
        &self.inner
    }

    pub fn into_inner(self) -> U {
        self.inner
    }
}

impl<U: CombatUnit> CombatUnit for Regeneration<U> {
    forward_combat_unit!(inner);

    fn attack(&mut self, defender: &mut dyn CombatUnit) -> AttackResult {
        self.inner.attack(defender)
    }

    fn handle_turn_event(&mut self, event: &TurnEvent) {
        self.inner.handle_turn_event(event);

        if matches!(event, TurnEvent::EndOfTurn)
            && self.inner.is_alive()
            && self.inner.current_hp() > 0
        {
            self.inner.restore_hp_to_max();
            tracing::debug!(creature = self.inner.name(), "regenerated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedDamageCalculator;
    use crate::creature::Creature;
    use crate::stats::{CreatureStatistics, DamageRange};

    fn troll() -> Regeneration<Creature> {
        let stats =
            CreatureStatistics::new("Troll", 40, 14, 7, DamageRange::new(10, 15).unwrap(), 7)
                .unwrap();
        Regeneration::new(
            Creature::builder(stats)
                .calculator(FixedDamageCalculator(8))
                .build(),
        )
    }

    #[test]
    fn restores_health_at_end_of_turn() {
        let mut unit = troll();
        unit.receive_damage(30);

        unit.handle_turn_event(&TurnEvent::RoundStarted(2));
        assert_eq!(unit.current_hp(), 10);

        unit.on_turn_end();
        assert_eq!(unit.current_hp(), 40);
    }

    #[test]
    fn does_not_revive_fallen_unit() {
        let mut unit = troll();
        unit.receive_damage(40);
        unit.on_turn_end();
        assert_eq!(unit.current_hp(), 0);
    }

    #[test]
    fn keeps_counterattack_rules_of_inner_unit() {
        let mut attacker = troll();
        let mut defender = troll();

        let result = attacker.attack(&mut defender);
        assert_eq!(result.retaliation, Some(8));
        assert_eq!(attacker.counter_attack_budget(), 0);

        attacker.on_turn_end();
        assert_eq!(attacker.counter_attack_budget(), 1);
        assert_eq!(attacker.current_hp(), 40);
    }
}
