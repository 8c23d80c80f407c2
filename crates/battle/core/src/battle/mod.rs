//! Battle controller: owns both sides and drives the turn phase.
//!
//! The controller is the only caller of `attack`, `heal` and
//! `apply_artifact`, and it always holds the outermost decorator of each
//! unit. Turn-phase events returned by the [`TurnQueue`] are delivered
//! synchronously to every unit.
//!
//! A unit is **standing** while it is alive and has positive HP. The
//! controller uses this to pick who may act and to decide the winner; it
//! never converts lost health into stack losses.

mod error;

pub use error::BattleError;

use crate::artifact::Artifact;
use crate::combat::AttackResult;
use crate::creature::CombatUnit;
use crate::turn::{Side, TurnEvent, TurnQueue, UnitId};

/// One-on-one or stack-vs-stack battle between two sides.
pub struct Battle {
    left: Vec<Box<dyn CombatUnit>>,
    right: Vec<Box<dyn CombatUnit>>,
    queue: TurnQueue,
}

impl Battle {
    /// Creates a battle and activates the first unit.
    ///
    /// Turn order alternates sides by index: left 0, right 0, left 1, ...
    pub fn new(left: Vec<Box<dyn CombatUnit>>, right: Vec<Box<dyn CombatUnit>>) -> Self {
        let longest = left.len().max(right.len());
        let order = (0..longest)
            .flat_map(|index| {
                let l = (index < left.len()).then(|| UnitId::left(index));
                let r = (index < right.len()).then(|| UnitId::right(index));
                l.into_iter().chain(r)
            })
            .collect();

        let mut battle = Self {
            left,
            right,
            queue: TurnQueue::new(order),
        };
        battle.advance();
        battle
    }

    /// The unit whose turn it is.
    pub fn active(&self) -> Option<UnitId> {
        self.queue.current()
    }

    pub fn round(&self) -> u32 {
        self.queue.round()
    }

    pub fn unit(&self, id: UnitId) -> Option<&dyn CombatUnit> {
        self.side(id.side).get(id.index).map(|unit| &**unit)
    }

    /// Ids of a side's units, standing or not.
    pub fn unit_ids(&self, side: Side) -> impl Iterator<Item = UnitId> + '_ {
        (0..self.side(side).len()).map(move |index| UnitId::new(side, index))
    }

    pub fn is_standing(&self, id: UnitId) -> bool {
        self.unit(id).is_some_and(is_standing)
    }

    /// First standing unit of `side`, if any.
    pub fn first_standing(&self, side: Side) -> Option<UnitId> {
        self.unit_ids(side).find(|id| self.is_standing(*id))
    }

    /// The winning side once the other has no standing units.
    pub fn winner(&self) -> Option<Side> {
        let left = self.first_standing(Side::Left).is_some();
        let right = self.first_standing(Side::Right).is_some();
        match (left, right) {
            (true, false) => Some(Side::Left),
            (false, true) => Some(Side::Right),
            _ => None,
        }
    }

    /// Resolves one attack command between units of opposite sides.
    pub fn attack(
        &mut self,
        attacker: UnitId,
        defender: UnitId,
    ) -> Result<AttackResult, BattleError> {
        if attacker.side == defender.side {
            return Err(BattleError::PreconditionViolated(
                "attacker and defender must be on opposite sides",
            ));
        }
        if !self.is_standing(attacker) {
            self.unit(attacker).ok_or(BattleError::UnknownUnit(attacker))?;
            return Err(BattleError::PreconditionViolated(
                "attacker is no longer standing",
            ));
        }
        if !self.is_standing(defender) {
            self.unit(defender).ok_or(BattleError::UnknownUnit(defender))?;
            return Err(BattleError::PreconditionViolated(
                "defender is no longer standing",
            ));
        }

        let (attacking, defending) = self.pair_mut(attacker, defender)?;
        let result = attacking.attack(&mut **defending);

        tracing::info!(
            %attacker,
            %defender,
            damage = ?result.damage,
            retaliation = ?result.retaliation,
            "attack resolved"
        );
        Ok(result)
    }

    pub fn heal(&mut self, id: UnitId, amount: u32) -> Result<(), BattleError> {
        self.unit_mut(id)?.heal(amount);
        Ok(())
    }

    pub fn apply_artifact(&mut self, id: UnitId, artifact: &Artifact) -> Result<(), BattleError> {
        self.unit_mut(id)?.apply_artifact(artifact)?;
        Ok(())
    }

    /// Delivers `event` to every unit on both sides.
    pub fn broadcast(&mut self, event: &TurnEvent) {
        for unit in self.left.iter_mut().chain(self.right.iter_mut()) {
            unit.handle_turn_event(event);
        }
    }

    /// Signals end of turn to every unit without moving the queue.
    pub fn end_turn(&mut self) {
        self.broadcast(&TurnEvent::EndOfTurn);
    }

    /// Passes the turn to the next standing unit and broadcasts the turn
    /// events this produced. Returns the new active unit.
    pub fn advance(&mut self) -> Option<UnitId> {
        let (left, right) = (&self.left, &self.right);
        let events = self.queue.advance(|id| {
            let units = match id.side {
                Side::Left => left,
                Side::Right => right,
            };
            units
                .get(id.index)
                .is_some_and(|unit| is_standing(&**unit))
        });

        for event in &events {
            if let TurnEvent::RoundStarted(round) = event {
                tracing::info!(round, "round started");
            }
            self.broadcast(event);
        }
        self.queue.current()
    }

    fn side(&self, side: Side) -> &Vec<Box<dyn CombatUnit>> {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    fn unit_mut(&mut self, id: UnitId) -> Result<&mut Box<dyn CombatUnit>, BattleError> {
        let units = match id.side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        units.get_mut(id.index).ok_or(BattleError::UnknownUnit(id))
    }

    fn pair_mut(
        &mut self,
        attacker: UnitId,
        defender: UnitId,
    ) -> Result<(&mut Box<dyn CombatUnit>, &mut Box<dyn CombatUnit>), BattleError> {
        let (attackers, defenders) = match attacker.side {
            Side::Left => (&mut self.left, &mut self.right),
            Side::Right => (&mut self.right, &mut self.left),
        };
        let attacking = attackers
            .get_mut(attacker.index)
            .ok_or(BattleError::UnknownUnit(attacker))?;
        let defending = defenders
            .get_mut(defender.index)
            .ok_or(BattleError::UnknownUnit(defender))?;
        Ok((attacking, defending))
    }
}

fn is_standing(unit: &dyn CombatUnit) -> bool {
    unit.is_alive() && unit.current_hp() > 0
}
