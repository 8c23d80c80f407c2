//! Base statistics of a creature type.

use crate::artifact::{ArtifactEffect, ArtifactError, ArtifactTarget};
use crate::error::{ErrorSeverity, GameError};

/// Errors raised while constructing statistics.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("max hp must be greater than zero")]
    ZeroMaxHp,

    #[error("invalid damage range: min {min} exceeds max {max}")]
    InvalidDamageRange { min: u32, max: u32 },
}

impl GameError for StatsError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroMaxHp => "STATS_ZERO_MAX_HP",
            Self::InvalidDamageRange { .. } => "STATS_INVALID_DAMAGE_RANGE",
        }
    }
}

/// Inclusive damage range `[min, max]` rolled once per strike.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    min: u32,
    max: u32,
}

impl DamageRange {
    pub fn new(min: u32, max: u32) -> Result<Self, StatsError> {
        if min > max {
            return Err(StatsError::InvalidDamageRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// A range that always rolls `value`.
    pub const fn fixed(value: u32) -> Self {
        Self {
            min: value,
            max: value,
        }
    }

    pub const fn min(&self) -> u32 {
        self.min
    }

    pub const fn max(&self) -> u32 {
        self.max
    }
}

/// The numbers that define a creature type.
///
/// Owned by exactly one creature. Artifact effects rewrite `attack`, `armor`
/// and `max_hp` in place through [`CreatureStatistics::apply_effects`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CreatureStatistics {
    pub name: String,
    pub max_hp: u32,
    pub attack: u32,
    pub armor: u32,
    pub damage: DamageRange,
    pub move_range: u32,
}

impl CreatureStatistics {
    pub fn new(
        name: impl Into<String>,
        max_hp: u32,
        attack: u32,
        armor: u32,
        damage: DamageRange,
        move_range: u32,
    ) -> Result<Self, StatsError> {
        let stats = Self {
            name: name.into(),
            max_hp,
            attack,
            armor,
            damage,
            move_range,
        };
        stats.validate()?;
        Ok(stats)
    }

    /// Re-checks invariants on values that bypassed [`CreatureStatistics::new`]
    /// (deserialized catalogs, direct field edits).
    pub fn validate(&self) -> Result<(), StatsError> {
        if self.max_hp == 0 {
            return Err(StatsError::ZeroMaxHp);
        }
        if self.damage.min > self.damage.max {
            return Err(StatsError::InvalidDamageRange {
                min: self.damage.min,
                max: self.damage.max,
            });
        }
        Ok(())
    }

    /// Applies a set of artifact effects atomically.
    ///
    /// Every effect's mode is checked before the first one is applied, so an
    /// error leaves the statistics untouched.
    pub fn apply_effects(&mut self, effects: &[ArtifactEffect]) -> Result<(), ArtifactError> {
        for effect in effects {
            effect.mode().ensure_supported()?;
        }

        for effect in effects {
            match effect.target() {
                ArtifactTarget::Attack => self.attack = effect.apply(self.attack)?,
                ArtifactTarget::Defence => self.armor = effect.apply(self.armor)?,
                // max_hp stays positive
                ArtifactTarget::Health => self.max_hp = effect.apply(self.max_hp)?.max(1),
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::artifact::ApplyingMode;

    fn knight() -> CreatureStatistics {
        CreatureStatistics::new("Knight", 30, 10, 6, DamageRange::fixed(5), 4).unwrap()
    }

    #[test]
    fn rejects_inverted_damage_range() {
        assert_eq!(
            DamageRange::new(10, 5),
            Err(StatsError::InvalidDamageRange { min: 10, max: 5 })
        );
    }

    #[test]
    fn rejects_zero_max_hp() {
        let result = CreatureStatistics::new("Ghost", 0, 1, 1, DamageRange::fixed(1), 1);
        assert_eq!(result, Err(StatsError::ZeroMaxHp));
    }

    #[test]
    fn stats_errors_are_validation_errors() {
        let error = StatsError::InvalidDamageRange { min: 4, max: 2 };
        assert_eq!(error.severity(), ErrorSeverity::Validation);
        assert_eq!(error.error_code(), "STATS_INVALID_DAMAGE_RANGE");
        assert_eq!(StatsError::ZeroMaxHp.error_code(), "STATS_ZERO_MAX_HP");
    }

    #[test]
    fn defence_effect_scales_armor_not_attack() {
        let mut stats = knight();
        stats
            .apply_effects(&[ArtifactEffect::new(
                ArtifactTarget::Defence,
                ApplyingMode::Multiply,
                2.0,
            )])
            .unwrap();

        assert_eq!(stats.armor, 12);
        assert_eq!(stats.attack, 10);
    }

    #[test]
    fn multiply_floors_fractional_results() {
        let mut stats = knight();
        stats
            .apply_effects(&[ArtifactEffect::new(
                ArtifactTarget::Health,
                ApplyingMode::Multiply,
                1.55,
            )])
            .unwrap();

        // 30 × 1.55 = 46.5
        assert_eq!(stats.max_hp, 46);
    }

    #[test]
    fn negative_add_saturates_at_zero() {
        let mut stats = knight();
        stats
            .apply_effects(&[ArtifactEffect::new(
                ArtifactTarget::Attack,
                ApplyingMode::Add,
                -25.0,
            )])
            .unwrap();

        assert_eq!(stats.attack, 0);
    }

    #[test]
    fn health_never_drops_below_one() {
        let mut stats = knight();
        stats
            .apply_effects(&[ArtifactEffect::new(
                ArtifactTarget::Health,
                ApplyingMode::Multiply,
                0.0,
            )])
            .unwrap();

        assert_eq!(stats.max_hp, 1);
    }

    #[test]
    fn unsupported_mode_leaves_earlier_effects_unapplied() {
        let mut stats = knight();
        let result = stats.apply_effects(&[
            ArtifactEffect::new(ArtifactTarget::Attack, ApplyingMode::Add, 5.0),
            ArtifactEffect::new(ArtifactTarget::Defence, ApplyingMode::Replace, 99.0),
        ]);

        assert_eq!(
            result,
            Err(ArtifactError::UnsupportedEffectMode {
                mode: ApplyingMode::Replace
            })
        );
        assert_eq!(stats, knight());
    }
}
