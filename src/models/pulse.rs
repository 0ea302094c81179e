use serde::{Deserialize, Serialize};

use crate::config::DEMO;
use crate::config::constants::pulse;

/// Crowd verdict derived purely from score thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, strum_macros::Display)]
pub enum Consensus {
    Bullish,
    Bearish,
    Neutral,
}

impl Consensus {
    pub fn from_score(score: f64) -> Self {
        if score > pulse::BULLISH_ABOVE {
            Consensus::Bullish
        } else if score < pulse::BEARISH_BELOW {
            Consensus::Bearish
        } else {
            Consensus::Neutral
        }
    }
}

/// The coarse dashboard snapshot: score in [1,10] at 1dp, up to 5 distinct
/// trending phrases, and the threshold consensus. Recomputed from the
/// previous snapshot by the aggregator only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PulseMetrics {
    pub score: f64,
    pub phrases: Vec<String>,
    pub consensus: Consensus,
}

impl Default for PulseMetrics {
    /// Placeholder shown until the first aggregation fires.
    fn default() -> Self {
        Self {
            score: pulse::INITIAL_SCORE,
            phrases: vec![DEMO.resources.initial_phrase.to_string()],
            consensus: Consensus::Neutral,
        }
    }
}

/// One throttled score observation for the history sparkline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreHistoryPoint {
    pub time: String,
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_consensus_thresholds() {
        assert_eq!(Consensus::from_score(6.1), Consensus::Bullish);
        assert_eq!(Consensus::from_score(6.0), Consensus::Neutral);
        assert_eq!(Consensus::from_score(4.0), Consensus::Neutral);
        assert_eq!(Consensus::from_score(3.9), Consensus::Bearish);
        assert_eq!(Consensus::from_score(1.0), Consensus::Bearish);
        assert_eq!(Consensus::from_score(10.0), Consensus::Bullish);
    }

    #[test]
    fn test_default_is_waiting_placeholder() {
        let m = PulseMetrics::default();
        assert_eq!(m.score, 5.0);
        assert_eq!(m.consensus, Consensus::Neutral);
        assert_eq!(m.phrases, vec!["waiting for signal...".to_string()]);
    }
}
