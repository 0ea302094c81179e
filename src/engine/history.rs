use std::time::{Duration, Instant};

use crate::config::constants::{HISTORY_CAPACITY, cadence};
use crate::data::RollingBuffer;
use crate::engine::throttle::UpdateThrottle;
use crate::models::ScoreHistoryPoint;

/// Fire-and-forget score telemetry: throttled, capacity-bounded, no retry.
/// A record that arrives while the gate is closed is dropped outright, not
/// queued — at most one point per gap interval.
pub struct ScoreHistory {
    points: RollingBuffer<ScoreHistoryPoint>,
    gate: UpdateThrottle,
}

impl ScoreHistory {
    pub fn new() -> Self {
        Self::with_limits(HISTORY_CAPACITY, cadence::HISTORY_MIN_GAP)
    }

    pub fn with_limits(capacity: usize, min_gap: Duration) -> Self {
        Self {
            points: RollingBuffer::new(capacity),
            gate: UpdateThrottle::new(min_gap),
        }
    }

    /// Returns whether the observation was actually stored.
    pub fn record(&mut self, now: Instant, time: String, score: f64) -> bool {
        if !self.gate.allow(now) {
            return false;
        }
        self.points.push(ScoreHistoryPoint { time, score });
        true
    }

    pub fn snapshot(&self) -> Vec<ScoreHistoryPoint> {
        self.points.snapshot()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl Default for ScoreHistory {
    fn default() -> Self {
        Self::new()
    }
}
