//! Logical timers with generation-stamped handles.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// The three delayed transitions a match can have pending.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerKind {
    /// Pause between a terminal board and the next round starting.
    RoundSettle,
    /// Reaction delay before the computer opponent moves.
    ComputerMove,
    /// Cosmetic match-winner display timeout.
    Celebration,
}

impl TimerKind {
    fn slot(self) -> usize {
        match self {
            TimerKind::RoundSettle => 0,
            TimerKind::ComputerMove => 1,
            TimerKind::Celebration => 2,
        }
    }
}

/// Handle identifying one armed timer instance.
///
/// The generation distinguishes a timer from any earlier armed instance
/// of the same kind; a superseded or cancelled generation can never
/// fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimerHandle {
    /// Which delayed transition this instance drives.
    pub kind: TimerKind,
    /// Monotonic arming counter.
    pub generation: u64,
}

#[derive(Clone, Copy, Debug)]
struct Pending {
    due_at: u64,
    generation: u64,
}

/// Single-threaded logical-clock scheduler.
///
/// One pending slot per [`TimerKind`]; arming replaces the slot, so
/// stale instances are structurally unable to fire. The match machine
/// still re-validates preconditions when a timer does fire, which turns
/// any timer that outlived its state into a no-op.
///
/// ## Example
///
/// ```
/// use ttt_engine::{Scheduler, TimerKind};
///
/// let mut scheduler = Scheduler::new();
/// scheduler.arm(TimerKind::RoundSettle, 1200);
///
/// assert!(scheduler.advance(1199).is_empty());
/// let fired = scheduler.advance(1);
/// assert_eq!(fired[0].kind, TimerKind::RoundSettle);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Scheduler {
    now: u64,
    next_generation: u64,
    pending: [Option<Pending>; 3],
}

impl Scheduler {
    /// Create a scheduler at logical time zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current logical time.
    #[must_use]
    pub fn now(&self) -> u64 {
        self.now
    }

    /// Arm a timer to fire after `delay` time units.
    ///
    /// Supersedes any pending timer of the same kind.
    pub fn arm(&mut self, kind: TimerKind, delay: u64) -> TimerHandle {
        let generation = self.next_generation;
        self.next_generation += 1;

        self.pending[kind.slot()] = Some(Pending {
            due_at: self.now.saturating_add(delay),
            generation,
        });

        TimerHandle { kind, generation }
    }

    /// Cancel any pending timer of the given kind.
    pub fn cancel(&mut self, kind: TimerKind) {
        self.pending[kind.slot()] = None;
    }

    /// Check whether a timer of the given kind is pending.
    #[must_use]
    pub fn is_armed(&self, kind: TimerKind) -> bool {
        self.pending[kind.slot()].is_some()
    }

    /// Advance time and collect fired timers, earliest due first.
    ///
    /// Fired timers are removed from their slots before being returned.
    pub fn advance(&mut self, elapsed: u64) -> SmallVec<[TimerHandle; 3]> {
        self.now = self.now.saturating_add(elapsed);

        let kinds = [
            TimerKind::RoundSettle,
            TimerKind::ComputerMove,
            TimerKind::Celebration,
        ];

        let mut fired: SmallVec<[(u64, TimerHandle); 3]> = SmallVec::new();
        for kind in kinds {
            if let Some(pending) = self.pending[kind.slot()] {
                if pending.due_at <= self.now {
                    self.pending[kind.slot()] = None;
                    fired.push((
                        pending.due_at,
                        TimerHandle {
                            kind,
                            generation: pending.generation,
                        },
                    ));
                }
            }
        }

        fired.sort_by_key(|&(due_at, _)| due_at);
        fired.into_iter().map(|(_, handle)| handle).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_at_deadline() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TimerKind::RoundSettle, 100);

        assert!(scheduler.advance(99).is_empty());
        assert!(scheduler.is_armed(TimerKind::RoundSettle));

        let fired = scheduler.advance(1);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, TimerKind::RoundSettle);
        assert!(!scheduler.is_armed(TimerKind::RoundSettle));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TimerKind::ComputerMove, 50);
        scheduler.cancel(TimerKind::ComputerMove);

        assert!(scheduler.advance(1000).is_empty());
    }

    #[test]
    fn test_rearm_supersedes() {
        let mut scheduler = Scheduler::new();
        let first = scheduler.arm(TimerKind::ComputerMove, 10);
        let second = scheduler.arm(TimerKind::ComputerMove, 100);

        assert_ne!(first.generation, second.generation);

        // The first instance's deadline passes without firing.
        assert!(scheduler.advance(50).is_empty());

        let fired = scheduler.advance(50);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].generation, second.generation);
    }

    #[test]
    fn test_independent_kinds() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TimerKind::RoundSettle, 100);
        scheduler.arm(TimerKind::Celebration, 30);

        let fired = scheduler.advance(30);
        assert_eq!(fired.len(), 1);
        assert_eq!(fired[0].kind, TimerKind::Celebration);
        assert!(scheduler.is_armed(TimerKind::RoundSettle));
    }

    #[test]
    fn test_fired_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TimerKind::Celebration, 40);
        scheduler.arm(TimerKind::RoundSettle, 20);

        let fired = scheduler.advance(100);
        assert_eq!(fired.len(), 2);
        assert_eq!(fired[0].kind, TimerKind::RoundSettle);
        assert_eq!(fired[1].kind, TimerKind::Celebration);
    }

    #[test]
    fn test_time_accumulates() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TimerKind::RoundSettle, 100);

        assert!(scheduler.advance(40).is_empty());
        assert!(scheduler.advance(40).is_empty());
        assert_eq!(scheduler.now(), 80);

        let fired = scheduler.advance(40);
        assert_eq!(fired.len(), 1);
    }

    #[test]
    fn test_zero_delay_fires_on_next_advance() {
        let mut scheduler = Scheduler::new();
        scheduler.arm(TimerKind::ComputerMove, 0);

        let fired = scheduler.advance(0);
        assert_eq!(fired.len(), 1);
    }
}
