//! Restartable single-shot idle timer.
//!
//! The timer never sleeps or spawns. It holds at most one pending deadline,
//! and the host reports the passage of time through [`ActivityTimer::poll`].
//! Re-arming replaces the pending deadline, so a burst of scroll events keeps
//! exactly one deadline alive: the one belonging to the latest event.

use std::time::{Duration, Instant};
use tracing::trace;

pub const DEFAULT_IDLE_WINDOW: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone)]
pub struct ActivityTimer {
    idle_window: Duration,
    deadline: Option<Instant>,
    arms: u64,
    cancellations: u64,
    expirations: u64,
}

impl Default for ActivityTimer {
    fn default() -> Self {
        Self::new(DEFAULT_IDLE_WINDOW)
    }
}

impl ActivityTimer {
    pub fn new(idle_window: Duration) -> Self {
        Self {
            idle_window,
            deadline: None,
            arms: 0,
            cancellations: 0,
            expirations: 0,
        }
    }

    pub fn idle_window(&self) -> Duration {
        self.idle_window
    }

    /// Schedules expiry one idle window after `now`, cancelling any pending
    /// deadline first. Returns whether a pending deadline was replaced.
    pub fn arm(&mut self, now: Instant) -> bool {
        let replaced = self.cancel();
        self.deadline = Some(now + self.idle_window);
        self.arms += 1;
        trace!(arms = self.arms, replaced, "Activity timer armed");
        replaced
    }

    pub fn cancel(&mut self) -> bool {
        if self.deadline.take().is_some() {
            self.cancellations += 1;
            true
        } else {
            false
        }
    }

    /// Returns `true` exactly once per armed deadline.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.expirations += 1;
                trace!(expirations = self.expirations, "Activity timer expired");
                true
            }
            _ => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    pub fn arms(&self) -> u64 {
        self.arms
    }

    pub fn cancellations(&self) -> u64 {
        self.cancellations
    }

    pub fn expirations(&self) -> u64 {
        self.expirations
    }
}
