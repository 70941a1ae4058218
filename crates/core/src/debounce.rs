//! Cooldown gate that keeps a held gesture from firing every frame.

use crate::types::Timestamp;
use std::time::Duration;

/// Minimum time between two accepted gestures.
pub const GESTURE_COOLDOWN: Duration = Duration::from_secs(1);

/// Tracks when a gesture was last accepted.
#[derive(Debug, Clone)]
pub struct DebounceGate {
    cooldown: Duration,
    last_accepted: Option<Timestamp>,
}

impl Default for DebounceGate {
    fn default() -> Self {
        Self {
            cooldown: GESTURE_COOLDOWN,
            last_accepted: None,
        }
    }
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a gesture at `now` if the cooldown has elapsed, recording `now`.
    ///
    /// The first call always succeeds. A `now` earlier than the last accepted
    /// time is rejected.
    pub fn try_accept(&mut self, now: Timestamp) -> bool {
        let ready = match self.last_accepted {
            None => true,
            Some(last) => now >= last && now - last >= self.cooldown,
        };

        if ready {
            self.last_accepted = Some(now);
        }
        ready
    }

    /// Time of the last accepted gesture.
    pub fn last_accepted(&self) -> Option<Timestamp> {
        self.last_accepted
    }

    pub fn cooldown(&self) -> Duration {
        self.cooldown
    }
}
