//! Creatures and the capability interface every combat unit implements.

mod base;
mod builder;
mod unit;

pub use base::Creature;
pub use builder::CreatureBuilder;
pub use unit::CombatUnit;
