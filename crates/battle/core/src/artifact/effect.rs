//! Single stat-changing rules carried by artifacts.

use core::hash::{Hash, Hasher};

use super::ArtifactError;

/// Statistic an effect rewrites.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactTarget {
    /// Writes `attack`.
    Attack,
    /// Writes `armor`.
    Defence,
    /// Writes `max_hp`.
    Health,
}

/// How an effect combines its value with the current statistic.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ApplyingMode {
    /// `floor(old × value)`
    Multiply,
    /// `floor(old + value)`
    Add,
    /// Overwrites the statistic. Only meaningful for hero-level effects;
    /// creature statistics reject it.
    Replace,
}

impl ApplyingMode {
    /// Fails unless this mode can be applied to creature statistics.
    pub fn ensure_supported(self) -> Result<(), ArtifactError> {
        match self {
            Self::Multiply | Self::Add => Ok(()),
            Self::Replace => Err(ArtifactError::UnsupportedEffectMode { mode: self }),
        }
    }
}

/// A `(target, mode, value)` rule that permanently rescales or offsets one
/// statistic.
///
/// Equality and hashing compare `value` bit for bit, so effects can be
/// collected into sets.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactEffect {
    target: ArtifactTarget,
    mode: ApplyingMode,
    value: f64,
}

impl ArtifactEffect {
    pub const fn new(target: ArtifactTarget, mode: ApplyingMode, value: f64) -> Self {
        Self {
            target,
            mode,
            value,
        }
    }

    pub const fn target(&self) -> ArtifactTarget {
        self.target
    }

    pub const fn mode(&self) -> ApplyingMode {
        self.mode
    }

    pub const fn value(&self) -> f64 {
        self.value
    }

    /// Computes the new value of a statistic currently equal to `current`.
    ///
    /// Results are floored and saturate into `u32`.
    pub fn apply(&self, current: u32) -> Result<u32, ArtifactError> {
        let result = match self.mode {
            ApplyingMode::Multiply => f64::from(current) * self.value,
            ApplyingMode::Add => f64::from(current) + self.value,
            ApplyingMode::Replace => {
                return Err(ArtifactError::UnsupportedEffectMode { mode: self.mode });
            }
        };
        Ok(result.floor() as u32)
    }
}

impl PartialEq for ArtifactEffect {
    fn eq(&self, other: &Self) -> bool {
        self.target == other.target
            && self.mode == other.mode
            && self.value.to_bits() == other.value.to_bits()
    }
}

impl Eq for ArtifactEffect {}

impl Hash for ArtifactEffect {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.target.hash(state);
        self.mode.hash(state);
        self.value.to_bits().hash(state);
    }
}
