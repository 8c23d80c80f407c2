/// Balance parameters for the default damage formula.
///
/// ```text
/// diff >= 0: factor = 1 + min(diff, attack_cap) * attack_bonus
/// diff <  0: factor = 1 - min(-diff, armor_cap) * armor_reduction
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DamageTables {
    /// Largest attack-over-armor difference that still adds damage.
    pub attack_cap: u32,
    /// Largest armor-over-attack difference that still removes damage.
    pub armor_cap: u32,
    /// Damage gained per point of attack above armor.
    pub attack_bonus: f64,
    /// Damage lost per point of armor above attack.
    pub armor_reduction: f64,
}

impl DamageTables {
    pub const DEFAULT_ATTACK_CAP: u32 = 60;
    pub const DEFAULT_ARMOR_CAP: u32 = 12;
    pub const DEFAULT_ATTACK_BONUS: f64 = 0.05;
    pub const DEFAULT_ARMOR_REDUCTION: f64 = 0.025;

    pub const fn new() -> Self {
        Self {
            attack_cap: Self::DEFAULT_ATTACK_CAP,
            armor_cap: Self::DEFAULT_ARMOR_CAP,
            attack_bonus: Self::DEFAULT_ATTACK_BONUS,
            armor_reduction: Self::DEFAULT_ARMOR_REDUCTION,
        }
    }

    /// Multiplier applied to the rolled damage for an attack/armor pair.
    ///
    /// Never negative.
    pub fn factor(&self, attack: u32, armor: u32) -> f64 {
        let factor = if attack >= armor {
            let points = (attack - armor).min(self.attack_cap);
            1.0 + f64::from(points) * self.attack_bonus
        } else {
            let points = (armor - attack).min(self.armor_cap);
            1.0 - f64::from(points) * self.armor_reduction
        };
        factor.max(0.0)
    }
}

impl Default for DamageTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Combat configuration and tunable parameters.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    pub damage: DamageTables,
}

impl CombatConfig {
    // ===== rule constants =====
    /// Counterattack budget granted at creation and after every end of turn.
    pub const COUNTER_ATTACK_BUDGET: u32 = 1;
    /// Default stack size for creatures built without an explicit amount.
    pub const DEFAULT_STACK_AMOUNT: u32 = 1;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_attack_and_armor_is_neutral() {
        let tables = DamageTables::new();
        assert_eq!(tables.factor(7, 7), 1.0);
    }

    #[test]
    fn attack_advantage_is_capped() {
        let tables = DamageTables::new();
        // 10 points over armor: 1 + 10 × 0.05
        assert!((tables.factor(10, 0) - 1.5).abs() < f64::EPSILON);
        // Cap at 60 points: 1 + 60 × 0.05 = 4
        assert!((tables.factor(200, 0) - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn armor_advantage_is_capped_and_never_negative() {
        let tables = DamageTables::new();
        // Cap at 12 points: 1 - 12 × 0.025 = 0.7
        assert!((tables.factor(0, 50) - 0.7).abs() < 1e-9);

        let harsh = DamageTables {
            armor_reduction: 1.0,
            ..DamageTables::new()
        };
        assert_eq!(harsh.factor(0, 50), 0.0);
    }
}
