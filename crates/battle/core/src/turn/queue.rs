use std::collections::VecDeque;

use super::{TurnEvent, UnitId};

/// Round-robin queue of units.
///
/// Each unit acts once per round in the fixed order given at construction.
/// Units that can no longer act are skipped. When the round is exhausted the
/// queue emits [`TurnEvent::EndOfTurn`] followed by
/// [`TurnEvent::RoundStarted`] and refills.
#[derive(Clone, Debug)]
pub struct TurnQueue {
    order: Vec<UnitId>,
    pending: VecDeque<UnitId>,
    current: Option<UnitId>,
    round: u32,
}

impl TurnQueue {
    pub fn new(order: Vec<UnitId>) -> Self {
        let pending = order.iter().copied().collect();
        Self {
            order,
            pending,
            current: None,
            round: 1,
        }
    }

    /// The unit currently acting, if any.
    pub fn current(&self) -> Option<UnitId> {
        self.current
    }

    /// Current round (1-based).
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Moves to the next unit for which `can_act` holds and returns the
    /// events this produced, in order.
    ///
    /// At most one round boundary is crossed per call. If no unit can act
    /// after a refill, `current` becomes `None`.
    pub fn advance(&mut self, can_act: impl Fn(UnitId) -> bool) -> Vec<TurnEvent> {
        let mut events = Vec::new();
        let mut refilled = false;

        loop {
            match self.pending.pop_front() {
                Some(id) if can_act(id) => {
                    self.current = Some(id);
                    events.push(TurnEvent::ActiveUnitChanged(id));
                    return events;
                }
                Some(_) => continue,
                None if refilled || self.order.is_empty() => {
                    self.current = None;
                    return events;
                }
                None => {
                    self.round += 1;
                    events.push(TurnEvent::EndOfTurn);
                    events.push(TurnEvent::RoundStarted(self.round));
                    self.pending = self.order.iter().copied().collect();
                    refilled = true;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids() -> Vec<UnitId> {
        vec![UnitId::left(0), UnitId::right(0), UnitId::left(1)]
    }

    #[test]
    fn visits_units_in_order() {
        let mut queue = TurnQueue::new(ids());

        assert_eq!(
            queue.advance(|_| true),
            vec![TurnEvent::ActiveUnitChanged(UnitId::left(0))]
        );
        assert_eq!(
            queue.advance(|_| true),
            vec![TurnEvent::ActiveUnitChanged(UnitId::right(0))]
        );
        assert_eq!(queue.current(), Some(UnitId::right(0)));
        assert_eq!(queue.round(), 1);
    }

    #[test]
    fn emits_one_end_of_turn_per_round() {
        let mut queue = TurnQueue::new(ids());
        let events: Vec<TurnEvent> = (0..6).flat_map(|_| queue.advance(|_| true)).collect();

        let ends = events
            .iter()
            .filter(|event| **event == TurnEvent::EndOfTurn)
            .count();
        assert_eq!(ends, 1);
        assert_eq!(queue.round(), 2);
        assert!(events.contains(&TurnEvent::RoundStarted(2)));
        assert_eq!(queue.current(), Some(UnitId::left(1)));
    }

    #[test]
    fn skips_units_that_cannot_act() {
        let mut queue = TurnQueue::new(ids());
        let events = queue.advance(|id| id != UnitId::left(0));

        assert_eq!(events, vec![TurnEvent::ActiveUnitChanged(UnitId::right(0))]);
    }

    #[test]
    fn stops_when_nobody_can_act() {
        let mut queue = TurnQueue::new(ids());
        let events = queue.advance(|_| false);

        assert_eq!(
            events,
            vec![TurnEvent::EndOfTurn, TurnEvent::RoundStarted(2)]
        );
        assert_eq!(queue.current(), None);
    }

    #[test]
    fn empty_queue_produces_nothing() {
        let mut queue = TurnQueue::new(Vec::new());
        assert!(queue.advance(|_| true).is_empty());
        assert_eq!(queue.round(), 1);
    }
}
