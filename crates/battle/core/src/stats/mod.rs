//! Creature statistics and the combat snapshot derived from them.
//!
//! [`CreatureStatistics`] is the single source of truth for a creature type's
//! numbers; [`CombatProfile`] is the read-only copy handed to damage
//! calculators.

pub mod profile;
pub mod statistics;

pub use profile::CombatProfile;
pub use statistics::{CreatureStatistics, DamageRange, StatsError};
