//! Read-only combat view of a unit.

use super::statistics::{CreatureStatistics, DamageRange};

/// Snapshot of the numbers a damage calculator reads.
///
/// Taken at the moment a strike is resolved, so a calculator never observes a
/// half-mutated unit and never needs a reference into its owner.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CombatProfile {
    pub attack: u32,
    pub armor: u32,
    pub damage: DamageRange,
    pub stack_amount: u32,
}

impl CombatProfile {
    pub fn of(stats: &CreatureStatistics, stack_amount: u32) -> Self {
        Self {
            attack: stats.attack,
            armor: stats.armor,
            damage: stats.damage,
            stack_amount,
        }
    }
}
