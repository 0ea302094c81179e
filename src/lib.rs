#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod config;
pub mod data;
pub mod engine;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate (for main.rs and tests)
pub use data::{ConnectionStatus, FetchError, FetchOutcome, HttpMetricsProvider, MetricsProvider, RollingBuffer};
pub use engine::{PulseCore, PulseEngine};
pub use models::{Consensus, Influencer, PerformanceMetrics, PulseMetrics, Sample};

// CLI argument parsing
use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Override the metrics API base URL (otherwise ECHO_API_URL, then the built-in default)
    #[arg(long)]
    pub api_url: Option<String>,

    /// How many influencers to request per leaderboard refresh
    #[arg(long, default_value_t = 10)]
    pub limit: usize,

    /// Skip the remote API entirely and run purely on synthetic data
    #[arg(long, default_value_t = false)]
    pub offline: bool,

    /// Fix the random-walk seed (reproducible demo runs)
    #[arg(long)]
    pub seed: Option<u64>,
}
