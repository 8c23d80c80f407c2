//! Combat rules for creature stacks in a turn-based strategy game.
//!
//! `battle-core` defines how stacks damage each other, how ability
//! decorators change that exchange, how artifacts permanently rewrite
//! statistics, and how the turn phase resets counterattacks. Everything is
//! single-threaded and synchronous; the only non-determinism is the random
//! source injected into [`combat::DefaultDamageCalculator`].
//!
//! All commands flow through the [`creature::CombatUnit`] interface, usually
//! driven by a [`battle::Battle`].
pub mod ability;
pub mod artifact;
pub mod battle;
pub mod combat;
pub mod config;
pub mod creature;
pub mod error;
pub mod stats;
pub mod turn;

pub use ability::{Ability, AbilityStack, NoCounterAttack, Regeneration};
pub use artifact::{
    ApplyingMode, Artifact, ArtifactBuilder, ArtifactCategory, ArtifactEffect, ArtifactError,
    ArtifactPlacement, ArtifactRank, ArtifactTarget,
};
pub use battle::{Battle, BattleError};
pub use combat::{
    AttackResult, DamageCalculator, DefaultDamageCalculator, FixedDamageCalculator,
    resolve_attack, strike,
};
pub use config::{CombatConfig, DamageTables};
pub use creature::{CombatUnit, Creature, CreatureBuilder};
pub use error::{ErrorSeverity, GameError};
pub use stats::{CombatProfile, CreatureStatistics, DamageRange, StatsError};
pub use turn::{Side, TurnEvent, TurnQueue, UnitId};
