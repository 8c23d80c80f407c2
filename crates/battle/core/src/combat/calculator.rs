//! Damage calculation strategies.

use core::cell::RefCell;

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::config::DamageTables;
use crate::stats::CombatProfile;

/// Computes the damage one strike deals.
///
/// Calculators are shared between creatures and must not depend on who holds
/// them. The result is never negative.
pub trait DamageCalculator {
    fn calculate_damage(&self, attacker: &CombatProfile, defender: &CombatProfile) -> u32;
}

/// Rolls from the attacker's damage range and scales by attack vs armor.
///
/// # Formula
///
/// ```text
/// roll     = uniform(damage.min ..= damage.max)
/// per_unit = roll × tables.factor(attacker.attack, defender.armor)
/// damage   = floor(per_unit × attacker.stack_amount)
/// ```
///
/// The random source sits behind a `RefCell` so one calculator can be shared
/// by several creatures within a single-threaded battle.
pub struct DefaultDamageCalculator<R = StdRng> {
    rng: RefCell<R>,
    tables: DamageTables,
}

impl DefaultDamageCalculator<StdRng> {
    /// Reproducible calculator for replays and tests.
    pub fn seeded(seed: u64) -> Self {
        Self::with_rng(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self::with_rng(StdRng::from_entropy())
    }
}

impl<R: RngCore> DefaultDamageCalculator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self {
            rng: RefCell::new(rng),
            tables: DamageTables::default(),
        }
    }

    pub fn with_tables(mut self, tables: DamageTables) -> Self {
        self.tables = tables;
        self
    }

    fn roll(&self, attacker: &CombatProfile) -> u32 {
        let range = attacker.damage;
        self.rng.borrow_mut().gen_range(range.min()..=range.max())
    }
}

impl<R: RngCore> DamageCalculator for DefaultDamageCalculator<R> {
    fn calculate_damage(&self, attacker: &CombatProfile, defender: &CombatProfile) -> u32 {
        let roll = self.roll(attacker);
        let per_unit = f64::from(roll) * self.tables.factor(attacker.attack, defender.armor);
        (per_unit * f64::from(attacker.stack_amount)).floor() as u32
    }
}

impl<R> core::fmt::Debug for DefaultDamageCalculator<R> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DefaultDamageCalculator")
            .field("tables", &self.tables)
            .finish_non_exhaustive()
    }
}

/// Always deals the same damage. Used for scripted fights and tests.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedDamageCalculator(pub u32);

impl DamageCalculator for FixedDamageCalculator {
    fn calculate_damage(&self, _attacker: &CombatProfile, _defender: &CombatProfile) -> u32 {
        self.0
    }
}
