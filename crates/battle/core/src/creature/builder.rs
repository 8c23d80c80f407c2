use std::rc::Rc;

use super::Creature;
use crate::combat::{DamageCalculator, DefaultDamageCalculator};
use crate::config::CombatConfig;
use crate::stats::CreatureStatistics;

/// Builder for constructing creatures.
///
/// Defaults: one creature in the stack and an entropy-seeded
/// [`DefaultDamageCalculator`].
pub struct CreatureBuilder {
    stats: CreatureStatistics,
    amount: u32,
    calculator: Option<Rc<dyn DamageCalculator>>,
}

impl CreatureBuilder {
    pub fn new(stats: CreatureStatistics) -> Self {
        Self {
            stats,
            amount: CombatConfig::DEFAULT_STACK_AMOUNT,
            calculator: None,
        }
    }

    /// Sets the stack size.
    pub fn amount(mut self, amount: u32) -> Self {
        self.amount = amount;
        self
    }

    /// Uses a calculator owned by this creature alone.
    pub fn calculator(mut self, calculator: impl DamageCalculator + 'static) -> Self {
        self.calculator = Some(Rc::new(calculator));
        self
    }

    /// Uses a calculator shared with other creatures.
    pub fn shared_calculator(mut self, calculator: Rc<dyn DamageCalculator>) -> Self {
        self.calculator = Some(calculator);
        self
    }

    pub fn build(self) -> Creature {
        let calculator = self
            .calculator
            .unwrap_or_else(|| Rc::new(DefaultDamageCalculator::from_entropy()));
        Creature::new(self.stats, calculator, self.amount)
    }
}
