//! Repaint timer
//!
//! egui has no timer objects, only "repaint after". `RepaintTimer` keeps the
//! deadline explicitly and the host polls it once per frame.

use std::time::{Duration, Instant};

/// Repeating timer owned by whoever starts and stops it
#[derive(Debug, Clone)]
pub struct RepaintTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl RepaintTimer {
    /// Create a stopped timer. A zero interval is raised to one millisecond.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval: interval.max(Duration::from_millis(1)),
            next_due: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Start or restart the timer; the first tick is one interval from `now`
    pub fn start(&mut self, now: Instant) {
        self.next_due = Some(now + self.interval);
    }

    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Number of ticks that fell due up to `now`.
    ///
    /// The deadline advances by whole intervals so a late poll does not
    /// drift the schedule, and always lands after `now`.
    pub fn poll(&mut self, now: Instant) -> u64 {
        let Some(due) = self.next_due else {
            return 0;
        };
        if now < due {
            return 0;
        }

        let interval = self.interval.as_nanos();
        let elapsed = now.duration_since(due).as_nanos() / interval + 1;
        let next = u64::try_from(elapsed * interval)
            .ok()
            .and_then(|nanos| due.checked_add(Duration::from_nanos(nanos)));
        self.next_due = Some(next.unwrap_or(now + self.interval));
        u64::try_from(elapsed).unwrap_or(u64::MAX)
    }

    /// Time until the next tick, zero if already due, `None` if stopped
    pub fn time_until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}
