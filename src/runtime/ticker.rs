//! Host-driven periodic ticker.
//!
//! The core never spawns threads or timers. A [`Ticker`] only tracks when the
//! next tick is due; the host event loop calls [`Ticker::poll`] (or sleeps for
//! [`Ticker::time_until_due`]) and runs the work itself.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    /// Start ticking; the first tick is due one interval from now.
    /// Has no effect while already running.
    pub fn start(&mut self) {
        if self.next_due.is_none() {
            self.next_due = Some(Instant::now() + self.interval);
        }
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn restart(&mut self) {
        self.stop();
        self.start();
    }

    /// True if running and a tick is due at `now`; schedules the next one
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, `None` when stopped
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
