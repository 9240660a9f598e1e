//! Cancellable power pellet countdown
//!
//! The countdown is plain state: an optional deadline on the game clock. The
//! tick loop polls it, so arming, re-arming and cancelling are all ordinary
//! mutations with no callback left behind.

use serde::{Deserialize, Serialize};

/// At most one pending expiry
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PowerTimer {
    deadline_ms: Option<f64>,
}

impl PowerTimer {
    /// Arm for `duration_ms` from `now_ms`, replacing any pending deadline
    pub fn arm(&mut self, now_ms: f64, duration_ms: f64) {
        self.deadline_ms = Some(now_ms + duration_ms);
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline(&self) -> Option<f64> {
        self.deadline_ms
    }

    /// Milliseconds left, zero when disarmed or overdue
    pub fn remaining(&self, now_ms: f64) -> f64 {
        self.deadline_ms
            .map(|deadline| (deadline - now_ms).max(0.0))
            .unwrap_or(0.0)
    }

    /// Fire if the deadline has passed
    ///
    /// Returns true exactly once per arming; the timer is disarmed when it fires.
    pub fn poll(&mut self, now_ms: f64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }
}
