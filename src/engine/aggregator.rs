use rand::Rng;
use rand::seq::SliceRandom;

use crate::config::DEMO;
use crate::config::constants::pulse;
use crate::models::{Consensus, PulseMetrics};
use crate::utils::maths_utils::round_1dp;

/// Recomputes the pulse snapshot from the previous one: bounded score walk,
/// fresh phrase draw, threshold consensus. Cadence is controlled by the
/// caller (the engine self-throttles aggregation against a slower gate).
pub struct PulseAggregator {
    vocabulary: Vec<&'static str>,
}

impl PulseAggregator {
    pub fn new() -> Self {
        Self {
            vocabulary: DEMO.resources.phrases.to_vec(),
        }
    }

    pub fn next_metrics<R: Rng>(&self, rng: &mut R, prev: &PulseMetrics) -> PulseMetrics {
        let step = rng.gen_range(-pulse::SCORE_STEP..=pulse::SCORE_STEP);
        let score = round_1dp((prev.score + step).clamp(pulse::SCORE_MIN, pulse::SCORE_MAX));

        // Shuffle-then-take: no phrase repeats within one snapshot, but a
        // phrase is free to reappear in the next one.
        let mut deck = self.vocabulary.clone();
        deck.shuffle(rng);
        let phrases = deck
            .iter()
            .take(pulse::PHRASE_COUNT)
            .map(|s| s.to_string())
            .collect();

        PulseMetrics {
            score,
            phrases,
            consensus: Consensus::from_score(score),
        }
    }
}

impl Default for PulseAggregator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_score_stays_clamped_over_many_ticks() {
        let agg = PulseAggregator::new();
        let mut rng = StdRng::seed_from_u64(5);

        let mut metrics = PulseMetrics::default();
        for _ in 0..2000 {
            metrics = agg.next_metrics(&mut rng, &metrics);
            assert!((1.0..=10.0).contains(&metrics.score), "score {}", metrics.score);
            // 1dp rounding is part of the contract
            assert!((metrics.score * 10.0 - (metrics.score * 10.0).round()).abs() < 1e-9);
        }
    }

    #[test]
    fn test_five_distinct_phrases_per_snapshot() {
        let agg = PulseAggregator::new();
        let mut rng = StdRng::seed_from_u64(6);

        let mut metrics = PulseMetrics::default();
        for _ in 0..100 {
            metrics = agg.next_metrics(&mut rng, &metrics);
            assert_eq!(metrics.phrases.len(), 5);
            let unique: HashSet<&String> = metrics.phrases.iter().collect();
            assert_eq!(unique.len(), 5);
        }
    }

    #[test]
    fn test_consensus_tracks_score() {
        let agg = PulseAggregator::new();
        let mut rng = StdRng::seed_from_u64(8);

        let mut metrics = PulseMetrics::default();
        for _ in 0..500 {
            metrics = agg.next_metrics(&mut rng, &metrics);
            assert_eq!(metrics.consensus, Consensus::from_score(metrics.score));
        }
    }
}
