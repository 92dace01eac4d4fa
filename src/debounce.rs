// src/debounce.rs
//
// Trailing-edge debounce over an injectable clock. Scheduling a value cancels
// whatever was pending; the value is released once the window has passed
// without another schedule. Nothing runs on its own: the owner polls.

use std::cell::Cell;
use std::time::{Duration, Instant};

pub trait Clock {
    fn now(&self) -> Instant;
}

#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant { Instant::now() }
}

/// Virtual time for tests: starts at construction and only moves on `advance`.
#[derive(Debug)]
pub struct ManualClock {
    origin: Instant,
    offset: Cell<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { origin: Instant::now(), offset: Cell::new(Duration::ZERO) }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }
}

impl Default for ManualClock {
    fn default() -> Self { Self::new() }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant { self.origin + self.offset.get() }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Instant { (**self).now() }
}

#[derive(Debug)]
pub struct Debouncer<T> {
    window: Duration,
    pending: Option<(T, Instant)>,
}

impl<T> Debouncer<T> {
    pub fn new(window: Duration) -> Self {
        Self { window, pending: None }
    }

    pub fn window(&self) -> Duration { self.window }

    /// Replace any pending value; fires at `now + window`.
    pub fn schedule(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now + self.window));
    }

    /// Drop the pending value, if any.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(v, _)| v)
    }

    pub fn is_pending(&self) -> bool { self.pending.is_some() }

    /// Time left until the pending value is due; `None` when idle.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending.as_ref().map(|(_, due)| due.saturating_duration_since(now))
    }

    /// Release the pending value if its deadline has passed.
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        match &self.pending {
            Some((_, due)) if now >= *due => self.cancel(),
            _ => None,
        }
    }

    /// Release the pending value regardless of its deadline.
    pub fn flush(&mut self) -> Option<T> {
        self.cancel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: Duration = Duration::from_millis(300);

    #[test]
    fn only_last_value_within_window_fires() {
        let clock = ManualClock::new();
        let mut d = Debouncer::new(WINDOW);

        d.schedule("c", clock.now());
        clock.advance(Duration::from_millis(100));
        d.schedule("ca", clock.now());
        clock.advance(Duration::from_millis(250));
        assert_eq!(d.poll(clock.now()), None, "restarted by second keystroke");
        d.schedule("cai", clock.now());
        clock.advance(Duration::from_millis(299));
        assert_eq!(d.poll(clock.now()), None);
        assert_eq!(d.remaining(clock.now()), Some(Duration::from_millis(1)));

        clock.advance(Duration::from_millis(1));
        assert_eq!(d.poll(clock.now()), Some("cai"));
        assert_eq!(d.poll(clock.now()), None, "fires once");
        assert!(!d.is_pending());
    }

    #[test]
    fn cancel_and_flush() {
        let clock = ManualClock::new();
        let mut d = Debouncer::new(WINDOW);
        d.schedule(1, clock.now());
        assert_eq!(d.cancel(), Some(1));
        clock.advance(WINDOW * 2);
        assert_eq!(d.poll(clock.now()), None);

        d.schedule(2, clock.now());
        assert_eq!(d.flush(), Some(2));
        assert_eq!(d.remaining(clock.now()), None);
    }
}
