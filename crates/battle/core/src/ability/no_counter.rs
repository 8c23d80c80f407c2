use crate::combat::{AttackResult, strike};
use crate::creature::CombatUnit;
use crate::turn::TurnEvent;

/// "Cannot be counterattacked": the defender never retaliates against an
/// attack delivered through this layer, whatever its own budget.
///
/// Damage is computed with the wrapped unit's calculator and statistics. The
/// attacker's counterattack budget is never touched. Must be the outermost
/// decorator of its chain.
#[derive(Debug)]
pub struct NoCounterAttack<U> {
    inner: U,
}

impl<U: CombatUnit> NoCounterAttack<U> {
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

impl<U: CombatUnit> CombatUnit for NoCounterAttack<U> {
    forward_combat_unit!(inner);

    fn attack(&mut self, defender: &mut dyn CombatUnit) -> AttackResult {
        if !self.inner.is_alive() {
            return AttackResult::skipped();
        }
        AttackResult::one_way(strike(&self.inner, defender))
    }

    fn handle_turn_event(&mut self, event: &TurnEvent) {
        self.inner.handle_turn_event(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combat::FixedDamageCalculator;
    use crate::creature::Creature;
    use crate::stats::{CreatureStatistics, DamageRange};

    fn hydra(amount: u32) -> Creature {
        let stats =
            CreatureStatistics::new("Hydra", 75, 16, 18, DamageRange::new(25, 45).unwrap(), 5)
                .unwrap();
        Creature::builder(stats)
            .calculator(FixedDamageCalculator(10))
            .amount(amount)
            .build()
    }

    #[test]
    fn defender_never_retaliates() {
        let mut attacker = NoCounterAttack::new(hydra(1));
        let mut defender = hydra(1);

        for _ in 0..3 {
            let result = attacker.attack(&mut defender);
            assert_eq!(result, AttackResult::one_way(10));
        }

        assert_eq!(defender.current_hp(), 45);
        assert_eq!(defender.counter_attack_budget(), 1);
        assert_eq!(attacker.current_hp(), 75);
        assert_eq!(attacker.counter_attack_budget(), 1);
    }

    #[test]
    fn dead_stack_does_nothing() {
        let mut attacker = NoCounterAttack::new(hydra(0));
        let mut defender = hydra(1);

        assert!(attacker.attack(&mut defender).is_skipped());
        assert_eq!(defender.current_hp(), 75);
    }

    #[test]
    fn wrapped_unit_still_counterattacks_when_defending() {
        let mut attacker = hydra(1);
        let mut defender = NoCounterAttack::new(hydra(1));

        let result = attacker.attack(&mut defender);

        assert_eq!(result.retaliation, Some(10));
        assert_eq!(attacker.current_hp(), 65);
        assert_eq!(attacker.counter_attack_budget(), 0);
    }

    #[test]
    fn reads_pass_through() {
        let mut wrapped = NoCounterAttack::new(hydra(3));
        wrapped.receive_damage(20);
        wrapped.heal(5);

        assert_eq!(wrapped.name(), "Hydra");
        assert_eq!(wrapped.stack_amount(), 3);
        assert_eq!(wrapped.current_hp(), 60);
        assert_eq!(wrapped.move_range(), 5);
        assert_eq!(wrapped.inner().current_hp(), 60);
    }
}
