use std::sync::{Arc, Mutex};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::DF;
use crate::data::{
    ConnectionStatus, FetchError, FetchOutcome, MetricsProvider, SyntheticPerformance,
    simulated_influencers,
};
use crate::models::{Influencer, PerformanceMetrics};

pub(crate) type Shared<T> = Arc<Mutex<T>>;

/// Polls `/api/performance`, substituting synthetic metrics on any failure.
/// Every cycle decides success/fallback from scratch; a single good poll
/// flips the status straight back to Connected.
pub(crate) async fn performance_loop(
    provider: Option<Arc<dyn MetricsProvider>>,
    slot: Shared<FetchOutcome<PerformanceMetrics>>,
    status: Shared<ConnectionStatus>,
    poll_interval: Duration,
    seed: u64,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut synth = SyntheticPerformance::new();
    let mut ticker = tokio::time::interval(poll_interval);

    loop {
        ticker.tick().await;
        *status.lock().unwrap() = ConnectionStatus::Connecting;

        let outcome = match provider.as_deref() {
            Some(p) => match p.fetch_performance().await {
                Ok(metrics) => FetchOutcome::Live(metrics),
                Err(reason) => FetchOutcome::Demo(synth.next(&mut rng), reason),
            },
            None => FetchOutcome::Demo(synth.next(&mut rng), FetchError::Offline),
        };

        *status.lock().unwrap() = if outcome.is_demo() {
            ConnectionStatus::Disconnected
        } else {
            ConnectionStatus::Connected
        };

        #[cfg(debug_assertions)]
        if DF.log_remote_polls {
            match outcome.reason() {
                Some(reason) => log::info!("performance poll: demo data ({reason})"),
                None => log::info!("performance poll: live"),
            }
        }

        *slot.lock().unwrap() = outcome;
    }
}

/// Same degrade-gracefully loop for the influencer leaderboard.
pub(crate) async fn influencer_loop(
    provider: Option<Arc<dyn MetricsProvider>>,
    slot: Shared<FetchOutcome<Vec<Influencer>>>,
    status: Shared<ConnectionStatus>,
    poll_interval: Duration,
    limit: usize,
    seed: u64,
) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut ticker = tokio::time::interval(poll_interval);

    loop {
        ticker.tick().await;
        *status.lock().unwrap() = ConnectionStatus::Connecting;

        let outcome = match provider.as_deref() {
            Some(p) => match p.fetch_influencers(limit).await {
                Ok(list) => FetchOutcome::Live(list),
                Err(reason) => FetchOutcome::Demo(simulated_influencers(&mut rng, limit), reason),
            },
            None => FetchOutcome::Demo(simulated_influencers(&mut rng, limit), FetchError::Offline),
        };

        *status.lock().unwrap() = if outcome.is_demo() {
            ConnectionStatus::Disconnected
        } else {
            ConnectionStatus::Connected
        };

        #[cfg(debug_assertions)]
        if DF.log_remote_polls {
            match outcome.reason() {
                Some(reason) => log::info!("influencer poll: demo data ({reason})"),
                None => log::info!("influencer poll: live ({} entries)", outcome.data().len()),
            }
        }

        *slot.lock().unwrap() = outcome;
    }
}
