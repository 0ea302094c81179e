mod chat;
mod influencer;
mod performance;
mod pulse;
mod sample;

pub use {
    chat::{QueryAnswer, QueryRequest},
    influencer::{Influencer, InfluencerPayload},
    performance::{LatencyStats, PerformanceMetrics, ThroughputStats},
    pulse::{Consensus, PulseMetrics, ScoreHistoryPoint},
    sample::Sample,
};
