//! Turn-phase signals and the queue that produces them.
//!
//! Units never subscribe to anything: the battle controller takes the events
//! returned by [`TurnQueue::advance`] and hands each one to every unit through
//! [`CombatUnit::handle_turn_event`](crate::creature::CombatUnit::handle_turn_event).

mod queue;

pub use queue::TurnQueue;

/// Side of the battlefield a unit fights for.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const fn opponent(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Address of a unit inside a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId {
    pub side: Side,
    pub index: usize,
}

impl UnitId {
    pub const fn new(side: Side, index: usize) -> Self {
        Self { side, index }
    }

    pub const fn left(index: usize) -> Self {
        Self::new(Side::Left, index)
    }

    pub const fn right(index: usize) -> Self {
        Self::new(Side::Right, index)
    }
}

impl core::fmt::Display for UnitId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}#{}", self.side, self.index)
    }
}

/// Signals delivered by the turn phase.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnEvent {
    /// Every unit in the queue has acted; counterattack budgets reset.
    EndOfTurn,
    /// A new round began (1-based round number).
    RoundStarted(u32),
    /// The given unit is now the one to act.
    ActiveUnitChanged(UnitId),
}
