use serde::{Deserialize, Serialize};

use crate::utils::TimeUtils;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LatencyStats {
    pub avg_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
    pub p95_ms: f64,
    pub p99_ms: f64,
    pub warnings_count: u32,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ThroughputStats {
    pub current_mps: f64,
    pub total_messages: u64,
    pub overall_avg_mps: f64,
}

/// Backend health as reported by `/api/performance` (or synthesized when the
/// backend is out of reach). Fully replaced on every update; only
/// `total_messages` and `uptime_seconds` are monotone, and only in the
/// synthetic generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceMetrics {
    pub latency: LatencyStats,
    pub throughput: ThroughputStats,
    pub timestamp: String,
    pub uptime_seconds: f64,
}

impl Default for PerformanceMetrics {
    fn default() -> Self {
        Self {
            latency: LatencyStats::default(),
            throughput: ThroughputStats::default(),
            timestamp: TimeUtils::now_iso(),
            uptime_seconds: 0.0,
        }
    }
}
