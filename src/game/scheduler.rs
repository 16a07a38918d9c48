use std::time::{Duration, Instant};

/// A one-shot timer that the game re-arms after every tick.  At most one
/// deadline is pending at a time; the interval is supplied anew on each
/// `start()`, so changes in speed take effect from the next tick onwards.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) struct Scheduler {
    next_tick: Option<Instant>,
}

impl Scheduler {
    pub(crate) fn new() -> Scheduler {
        Scheduler::default()
    }

    /// Arm the timer to fire `interval` after `now`, replacing any pending
    /// deadline
    pub(crate) fn start(&mut self, now: Instant, interval: Duration) {
        self.next_tick = Some(now + interval);
    }

    /// Cancel the pending deadline, if any
    pub(crate) fn stop(&mut self) {
        self.next_tick = None;
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        self.next_tick
    }

    pub(crate) fn is_due(&self, now: Instant) -> bool {
        self.deadline().is_some_and(|when| when <= now)
    }

    /// How long until the timer fires, or `None` if it is not armed
    pub(crate) fn time_until(&self, now: Instant) -> Option<Duration> {
        self.deadline()
            .map(|when| when.saturating_duration_since(now))
    }
}
