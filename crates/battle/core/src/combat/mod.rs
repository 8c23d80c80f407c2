//! Combat resolution system.
//!
//! # Core Functions
//!
//! - `resolve_attack`: strike plus optional counterattack
//! - `strike`: a single one-way hit
//! - [`DamageCalculator`]: pluggable damage strategy shared by creatures

pub mod calculator;
pub mod result;

pub use calculator::{DamageCalculator, DefaultDamageCalculator, FixedDamageCalculator};
pub use result::{AttackResult, resolve_attack, strike};
