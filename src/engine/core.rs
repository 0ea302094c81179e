use std::time::Instant;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DF;
use crate::config::constants::{SAMPLE_CAPACITY, cadence};
use crate::data::RollingBuffer;
use crate::engine::aggregator::PulseAggregator;
use crate::engine::generator::{SampleGenerator, WalkConfig};
use crate::engine::history::ScoreHistory;
use crate::engine::throttle::UpdateThrottle;
use crate::models::{PulseMetrics, Sample, ScoreHistoryPoint};
use crate::utils::TimeUtils;

/// Single-owner state for the simulated pipeline: the sample window, the
/// current pulse snapshot, the throttled score history and the publish gate.
/// All mutation funnels through the tick entry points on one task; everyone
/// else gets snapshots.
pub struct PulseCore {
    samples: RollingBuffer<Sample>,
    metrics: PulseMetrics,
    history: ScoreHistory,
    generator: SampleGenerator,
    aggregator: PulseAggregator,
    /// Aggregation shares the emitter schedule but self-throttles to the
    /// slower cadence.
    metrics_gate: UpdateThrottle,
    publish_gate: UpdateThrottle,
    rng: StdRng,
}

impl PulseCore {
    pub fn new(seed: u64) -> Self {
        Self::with_walk(seed, WalkConfig::default())
    }

    pub fn with_walk(seed: u64, walk: WalkConfig) -> Self {
        Self {
            samples: RollingBuffer::new(SAMPLE_CAPACITY),
            metrics: PulseMetrics::default(),
            history: ScoreHistory::new(),
            generator: SampleGenerator::new(walk),
            aggregator: PulseAggregator::new(),
            metrics_gate: UpdateThrottle::new(cadence::METRICS_MIN_GAP),
            publish_gate: UpdateThrottle::new(cadence::PUBLISH_MIN_GAP),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Fast-cadence tick: append one sample, then recompute metrics if the
    /// slower gate has reopened. Also feeds the score history (which applies
    /// its own throttle on top).
    pub fn tick(&mut self, now: Instant) {
        let label = TimeUtils::clock_label();

        let last = self.samples.last().map(|s| s.price);
        let sample = self.generator.next_sample(&mut self.rng, last, label.clone());

        #[cfg(debug_assertions)]
        if DF.log_sample_ticks {
            log::debug!(
                "[tick] {} price={:.2} sentiment={:.2}",
                sample.time,
                sample.price,
                sample.sentiment
            );
        }

        self.samples.push(sample);

        if self.metrics_gate.allow(now) {
            self.metrics = self.aggregator.next_metrics(&mut self.rng, &self.metrics);
            self.history.record(now, label, self.metrics.score);

            #[cfg(debug_assertions)]
            if DF.log_metric_updates {
                log::debug!(
                    "[pulse] score={:.1} consensus={} phrases={:?}",
                    self.metrics.score,
                    self.metrics.consensus,
                    self.metrics.phrases
                );
            }
        }
    }

    /// One publish attempt from the UI poll loop. Returns the buffer
    /// snapshot only when the gate allows a re-publish; suppressed attempts
    /// return None and cost nothing.
    pub fn try_publish(&mut self, now: Instant) -> Option<Vec<Sample>> {
        if !self.publish_gate.allow(now) {
            #[cfg(debug_assertions)]
            if DF.log_publish_gate {
                log::trace!("[publish] suppressed");
            }
            return None;
        }
        Some(self.samples.snapshot())
    }

    pub fn metrics(&self) -> &PulseMetrics {
        &self.metrics
    }

    pub fn samples(&self) -> Vec<Sample> {
        self.samples.snapshot()
    }

    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    pub fn score_history(&self) -> Vec<ScoreHistoryPoint> {
        self.history.snapshot()
    }
}
