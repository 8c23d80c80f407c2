//! Combat result types and attack resolution.

use crate::creature::CombatUnit;

/// Result of one attack command.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttackResult {
    /// Damage dealt to the defender (None if the attacker could not act).
    pub damage: Option<u32>,

    /// Damage the defender dealt back (None if no counterattack happened).
    pub retaliation: Option<u32>,
}

impl AttackResult {
    /// The attacker was not alive; nothing happened.
    pub const fn skipped() -> Self {
        Self {
            damage: None,
            retaliation: None,
        }
    }

    /// A strike with no counterattack.
    pub const fn one_way(damage: u32) -> Self {
        Self {
            damage: Some(damage),
            retaliation: None,
        }
    }

    pub const fn is_skipped(&self) -> bool {
        self.damage.is_none()
    }

    pub const fn was_retaliated(&self) -> bool {
        self.retaliation.is_some()
    }
}

/// Deals one strike from `attacker` to `defender` using the attacker's
/// calculator, without any counterattack.
///
/// Returns the damage dealt. Health is not clamped here.
pub fn strike(attacker: &dyn CombatUnit, defender: &mut dyn CombatUnit) -> u32 {
    let damage = attacker
        .calculator()
        .calculate_damage(&attacker.profile(), &defender.profile());
    defender.receive_damage(damage);

    tracing::debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        damage,
        defender_hp = defender.current_hp(),
        "strike"
    );

    damage
}

/// Resolves a full attack exchange: strike, then at most one counterattack.
///
/// # Rules
///
/// 1. Nothing happens if the attacker is not alive.
/// 2. The attacker strikes the defender.
/// 3. If the defender can still counterattack (alive, positive HP, budget
///    left) it strikes back once with its own calculator.
/// 4. The counterattack spends the **attacker's** budget; the defender's
///    budget is left as it was.
pub fn resolve_attack(
    attacker: &mut dyn CombatUnit,
    defender: &mut dyn CombatUnit,
) -> AttackResult {
    if !attacker.is_alive() {
        return AttackResult::skipped();
    }

    let damage = strike(&*attacker, defender);

    if !defender.can_counter_attack() {
        return AttackResult::one_way(damage);
    }

    let retaliation = strike(&*defender, attacker);
    attacker.spend_counter_attack();

    tracing::debug!(
        attacker = attacker.name(),
        defender = defender.name(),
        retaliation,
        attacker_budget = attacker.counter_attack_budget(),
        "counterattack"
    );

    AttackResult {
        damage: Some(damage),
        retaliation: Some(retaliation),
    }
}
