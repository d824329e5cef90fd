//! Timer state

use std::collections::HashMap;

use dote_core::traits::Id;
use parking_lot::RwLock;

#[derive(Debug, Default, Clone, Copy)]
struct TimerState {
    running: bool,
    seconds: u64,
}

/// Running flags and accumulated seconds, one slot per piece.
///
/// Timers are independent: any number can run at once, each with its own
/// counter. State for a piece exists from the first `start` until `discard`.
#[derive(Default)]
pub struct TimeTracker {
    timers: RwLock<HashMap<Id, TimerState>>,
}

impl TimeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start the piece's timer. Starting an already-running timer has no
    /// effect.
    pub fn start(&self, piece_id: &str) {
        self.timers
            .write()
            .entry(piece_id.to_string())
            .or_default()
            .running = true;
    }

    /// Pause the piece's timer, keeping its accumulated seconds. Returns
    /// whether the timer was actually running.
    pub fn pause(&self, piece_id: &str) -> bool {
        let mut timers = self.timers.write();
        match timers.get_mut(piece_id) {
            Some(state) if state.running => {
                state.running = false;
                true
            }
            _ => false,
        }
    }

    /// Advance every running timer by one second. The check and the
    /// increments happen under one lock, so a concurrent pause lands either
    /// wholly before this tick or wholly after it.
    pub fn tick(&self) {
        let mut timers = self.timers.write();
        if !timers.values().any(|t| t.running) {
            return;
        }
        for state in timers.values_mut() {
            if state.running {
                state.seconds += 1;
            }
        }
    }

    pub fn elapsed(&self, piece_id: &str) -> u64 {
        self.timers.read().get(piece_id).map_or(0, |t| t.seconds)
    }

    pub fn is_running(&self, piece_id: &str) -> bool {
        self.timers.read().get(piece_id).is_some_and(|t| t.running)
    }

    /// Drop timer state for removed pieces so nothing keeps accruing for
    /// them
    pub fn discard<'a>(&self, piece_ids: impl IntoIterator<Item = &'a str>) {
        let mut timers = self.timers.write();
        for id in piece_ids {
            timers.remove(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_tick_pause_accumulates_and_freezes() {
        let tracker = TimeTracker::new();
        tracker.start("p1");
        for _ in 0..3 {
            tracker.tick();
        }
        assert!(tracker.pause("p1"));
        assert_eq!(tracker.elapsed("p1"), 3);

        // Frozen after the pause
        tracker.tick();
        tracker.tick();
        assert_eq!(tracker.elapsed("p1"), 3);
        assert!(!tracker.is_running("p1"));
    }

    #[test]
    fn timers_run_independently() {
        let tracker = TimeTracker::new();
        tracker.start("a");
        tracker.start("b");
        for _ in 0..5 {
            tracker.tick();
        }
        assert!(tracker.pause("a"));
        for _ in 0..2 {
            tracker.tick();
        }

        assert_eq!(tracker.elapsed("a"), 5);
        assert_eq!(tracker.elapsed("b"), 7);
        assert!(tracker.is_running("b"));
    }

    #[test]
    fn start_is_idempotent() {
        let tracker = TimeTracker::new();
        tracker.start("p1");
        tracker.tick();
        tracker.start("p1");
        assert_eq!(tracker.elapsed("p1"), 1);
        assert!(tracker.is_running("p1"));
    }

    #[test]
    fn pausing_an_idle_timer_reports_false() {
        let tracker = TimeTracker::new();
        assert!(!tracker.pause("never-started"));

        tracker.start("p1");
        assert!(tracker.pause("p1"));
        assert!(!tracker.pause("p1"));
    }

    #[test]
    fn tick_with_nothing_running_changes_nothing() {
        let tracker = TimeTracker::new();
        tracker.start("p1");
        tracker.pause("p1");
        tracker.tick();
        assert_eq!(tracker.elapsed("p1"), 0);
    }

    #[test]
    fn discard_drops_state() {
        let tracker = TimeTracker::new();
        tracker.start("p1");
        tracker.tick();
        tracker.discard(["p1"]);

        assert_eq!(tracker.elapsed("p1"), 0);
        assert!(!tracker.is_running("p1"));
    }
}
