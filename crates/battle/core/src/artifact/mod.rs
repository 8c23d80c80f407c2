//! Artifacts and the effects they apply to creature statistics.
//!
//! An [`Artifact`] is an immutable value supplied by the shop/economy layer.
//! Only [`ArtifactCategory::Primary`] artifacts may change a creature; their
//! effects are applied atomically through
//! [`CreatureStatistics::apply_effects`](crate::stats::CreatureStatistics::apply_effects).

pub mod effect;
pub mod error;

pub use effect::{ApplyingMode, ArtifactEffect, ArtifactTarget};
pub use error::ArtifactError;

/// Rarity tier of an artifact.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactRank {
    #[default]
    Treasure,
    Minor,
    Major,
    Relic,
}

/// Equip slot an artifact occupies.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactPlacement {
    Head,
    Neck,
    Torso,
    Shoulders,
    RightHand,
    LeftHand,
    Feet,
    Ring,
    #[default]
    Misc,
}

/// Category deciding what an artifact may act on.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ArtifactCategory {
    /// Equippable; effects rewrite creature statistics.
    #[default]
    Primary,
    /// Modifies hero skills.
    Skill,
    /// Grants or empowers spells.
    Spell,
}

/// An equippable item carrying a set of effects.
///
/// Deserialized artifacts go through [`ArtifactBuilder`], so duplicate
/// effects in the data collapse just as they do when built in code.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "ArtifactRecord"))]
pub struct Artifact {
    rank: ArtifactRank,
    placement: ArtifactPlacement,
    category: ArtifactCategory,
    name: String,
    description: String,
    price: f64,
    effects: Vec<ArtifactEffect>,
}

impl Artifact {
    /// Creates a builder for constructing an artifact.
    pub fn builder(name: impl Into<String>) -> ArtifactBuilder {
        ArtifactBuilder::new(name)
    }

    pub fn rank(&self) -> ArtifactRank {
        self.rank
    }

    pub fn placement(&self) -> ArtifactPlacement {
        self.placement
    }

    pub fn category(&self) -> ArtifactCategory {
        self.category
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    /// Distinct effects in the order they were first added.
    pub fn effects(&self) -> &[ArtifactEffect] {
        &self.effects
    }

    /// Fails with [`ArtifactError::InvalidArtifact`] unless the artifact is primary.
    pub fn ensure_primary(&self) -> Result<(), ArtifactError> {
        if self.category != ArtifactCategory::Primary {
            return Err(ArtifactError::InvalidArtifact {
                name: self.name.clone(),
                category: self.category,
            });
        }
        Ok(())
    }
}

/// Builder for constructing artifacts.
///
/// Effects equal by value are stored once.
#[derive(Clone, Debug)]
pub struct ArtifactBuilder {
    rank: ArtifactRank,
    placement: ArtifactPlacement,
    category: ArtifactCategory,
    name: String,
    description: String,
    price: f64,
    effects: Vec<ArtifactEffect>,
}

impl ArtifactBuilder {
    fn new(name: impl Into<String>) -> Self {
        Self {
            rank: ArtifactRank::default(),
            placement: ArtifactPlacement::default(),
            category: ArtifactCategory::default(),
            name: name.into(),
            description: String::new(),
            price: 0.0,
            effects: Vec::new(),
        }
    }

    pub fn rank(mut self, rank: ArtifactRank) -> Self {
        self.rank = rank;
        self
    }

    pub fn placement(mut self, placement: ArtifactPlacement) -> Self {
        self.placement = placement;
        self
    }

    pub fn category(mut self, category: ArtifactCategory) -> Self {
        self.category = category;
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn effect(mut self, effect: ArtifactEffect) -> Self {
        if !self.effects.contains(&effect) {
            self.effects.push(effect);
        }
        self
    }

    pub fn effects(self, effects: impl IntoIterator<Item = ArtifactEffect>) -> Self {
        effects.into_iter().fold(self, Self::effect)
    }

    pub fn build(self) -> Artifact {
        Artifact {
            rank: self.rank,
            placement: self.placement,
            category: self.category,
            name: self.name,
            description: self.description,
            price: self.price,
            effects: self.effects,
        }
    }
}

/// Artifact fields as written in data files.
#[cfg(feature = "serde")]
#[derive(Default, serde::Deserialize)]
#[serde(default)]
struct ArtifactRecord {
    rank: ArtifactRank,
    placement: ArtifactPlacement,
    category: ArtifactCategory,
    name: String,
    description: String,
    price: f64,
    effects: Vec<ArtifactEffect>,
}

#[cfg(feature = "serde")]
impl From<ArtifactRecord> for Artifact {
    fn from(record: ArtifactRecord) -> Self {
        Artifact::builder(record.name)
            .rank(record.rank)
            .placement(record.placement)
            .category(record.category)
            .description(record.description)
            .price(record.price)
            .effects(record.effects)
            .build()
    }
}
