use rand::Rng;

use crate::config::DEMO;
use crate::models::{Influencer, LatencyStats, PerformanceMetrics, ThroughputStats};
use crate::utils::TimeUtils;

/// Stateful stand-in for `/api/performance` when the backend is out of
/// reach. Latency numbers are fresh noise each refresh; `total_messages`
/// and uptime only ever grow.
pub struct SyntheticPerformance {
    started_ms: i64,
    total_messages: u64,
}

impl SyntheticPerformance {
    pub fn new() -> Self {
        Self {
            started_ms: TimeUtils::now_timestamp_ms(),
            total_messages: 0,
        }
    }

    pub fn next<R: Rng>(&mut self, rng: &mut R) -> PerformanceMetrics {
        self.total_messages += rng.gen_range(1..=5);
        let uptime = (TimeUtils::now_timestamp_ms() - self.started_ms) as f64 / 1000.0;

        PerformanceMetrics {
            latency: LatencyStats {
                avg_ms: 50.0 + rng.gen_range(0.0..100.0),
                min_ms: 20.0 + rng.gen_range(0.0..30.0),
                max_ms: 100.0 + rng.gen_range(0.0..200.0),
                p95_ms: 80.0 + rng.gen_range(0.0..150.0),
                p99_ms: 150.0 + rng.gen_range(0.0..200.0),
                warnings_count: if rng.gen_bool(0.05) { 1 } else { 0 },
            },
            throughput: ThroughputStats {
                current_mps: 2.0 + rng.gen_range(0.0..8.0),
                total_messages: self.total_messages,
                overall_avg_mps: self.total_messages as f64 / uptime.max(1.0),
            },
            timestamp: TimeUtils::now_iso(),
            uptime_seconds: uptime,
        }
    }
}

impl Default for SyntheticPerformance {
    fn default() -> Self {
        Self::new()
    }
}

/// Jittered leaderboard built from the fixed demo roster. Re-sorted after
/// jitter so the descending-influence contract of the real API still holds.
pub fn simulated_influencers<R: Rng>(rng: &mut R, limit: usize) -> Vec<Influencer> {
    let now = TimeUtils::now_iso();

    let mut out: Vec<Influencer> = DEMO
        .resources
        .influencers
        .iter()
        .take(limit)
        .map(|base| {
            let engagement = base.base_engagement + rng.gen_range(-500..500);
            Influencer {
                author_id: base.author_id.to_string(),
                followers: base.followers,
                engagement,
                influence_score: base.followers as f64 * 0.6 + engagement as f64 * 0.4,
                sentiment: rng.gen_range(-0.5..0.8),
                message_count: rng.gen_range(5..50),
                last_updated: now.clone(),
            }
        })
        .collect();

    out.sort_by(|a, b| {
        b.influence_score
            .partial_cmp(&a.influence_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    out
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn test_total_messages_is_monotone() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut synth = SyntheticPerformance::new();

        let mut last = 0;
        for _ in 0..50 {
            let metrics = synth.next(&mut rng);
            assert!(metrics.throughput.total_messages > last);
            last = metrics.throughput.total_messages;
        }
    }

    #[test]
    fn test_latency_noise_stays_in_band() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut synth = SyntheticPerformance::new();

        for _ in 0..100 {
            let m = synth.next(&mut rng);
            assert!(m.latency.avg_ms >= 50.0 && m.latency.avg_ms < 150.0);
            assert!(m.latency.p99_ms >= 150.0 && m.latency.p99_ms < 350.0);
            assert!(m.latency.warnings_count <= 1);
        }
    }

    #[test]
    fn test_influencers_respect_limit_and_ordering() {
        let mut rng = StdRng::seed_from_u64(3);
        let influencers = simulated_influencers(&mut rng, 5);

        assert_eq!(influencers.len(), 5);
        for pair in influencers.windows(2) {
            assert!(pair[0].influence_score >= pair[1].influence_score);
        }
        for inf in &influencers {
            assert!(inf.sentiment >= -0.5 && inf.sentiment < 0.8);
            assert!((5..50).contains(&inf.message_count));
        }
    }

    #[test]
    fn test_influencer_limit_larger_than_roster() {
        let mut rng = StdRng::seed_from_u64(4);
        let influencers = simulated_influencers(&mut rng, 100);
        // Roster is the hard ceiling.
        assert_eq!(influencers.len(), 10);
    }
}
