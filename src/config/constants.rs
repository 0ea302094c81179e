use std::time::Duration;

// Top Level Constants
pub const BASELINE_PRICE: f64 = 100.0;
pub const PRICE_FLOOR: f64 = 50.0;
// Full width of the per-tick price step, i.e. the step is uniform(-v/2, v/2).
pub const PRICE_VOLATILITY: f64 = 5.0;
// Added to sentiment when a tick closes above the previous price. Upticks only.
pub const MOMENTUM_BIAS: f64 = 0.3;

pub const SAMPLE_CAPACITY: usize = 300;
pub const HISTORY_CAPACITY: usize = 60;

pub mod cadence {
    use std::time::Duration;

    /// One new sample per tick.
    pub const SAMPLE_TICK: Duration = Duration::from_millis(500);
    /// Aggregation shares the emitter schedule but self-throttles to this.
    pub const METRICS_MIN_GAP: Duration = Duration::from_millis(1000);
    /// How often a publish is attempted.
    pub const PUBLISH_POLL: Duration = Duration::from_millis(300);
    /// Minimum gap between publishes that actually take effect.
    pub const PUBLISH_MIN_GAP: Duration = Duration::from_millis(300);
    /// Score history drops observations closer together than this.
    pub const HISTORY_MIN_GAP: Duration = Duration::from_millis(500);
}

pub mod pulse {
    pub const SCORE_MIN: f64 = 1.0;
    pub const SCORE_MAX: f64 = 10.0;
    /// Score walk is uniform(-SCORE_STEP, SCORE_STEP) per recomputation.
    pub const SCORE_STEP: f64 = 0.5;
    pub const BULLISH_ABOVE: f64 = 6.0;
    pub const BEARISH_BELOW: f64 = 4.0;
    pub const PHRASE_COUNT: usize = 5;
    pub const INITIAL_SCORE: f64 = 5.0;
}

/// Default cadence for remote polls (performance, influencers).
pub const REMOTE_POLL: Duration = Duration::from_millis(5000);
