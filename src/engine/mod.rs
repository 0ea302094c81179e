mod aggregator;
mod core;
mod generator;
mod history;
mod poller;
mod scheduler;
mod throttle;

pub use {
    aggregator::PulseAggregator,
    core::PulseCore,
    generator::{SampleGenerator, WalkConfig},
    history::ScoreHistory,
    scheduler::{PulseEngine, TaskSet},
    throttle::UpdateThrottle,
};
