mod fallback;
mod provider;
mod rolling_buffer;
mod synthetic;

pub use {
    fallback::{ConnectionStatus, FetchError, FetchOutcome},
    provider::{HttpMetricsProvider, MetricsProvider},
    rolling_buffer::RollingBuffer,
    synthetic::{SyntheticPerformance, simulated_influencers},
};
