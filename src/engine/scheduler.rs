use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Instant;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::Cli;
use crate::config::{ApiConfig, DEMO, constants::cadence};
use crate::data::{ConnectionStatus, FetchError, FetchOutcome, HttpMetricsProvider, MetricsProvider};
use crate::engine::core::PulseCore;
use crate::engine::poller;
use crate::models::{Influencer, PerformanceMetrics, PulseMetrics, Sample, ScoreHistoryPoint};
use crate::utils::TimeUtils;

/// Owns every periodic task spawned by the engine so teardown is one call.
/// Nothing keeps ticking after `shutdown`; the abort also cancels whatever
/// fetch happens to be in flight.
pub struct TaskSet {
    handles: Vec<JoinHandle<()>>,
}

impl TaskSet {
    pub fn new() -> Self {
        Self {
            handles: Vec::new(),
        }
    }

    pub fn spawn<F>(&mut self, fut: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.handles.push(tokio::spawn(fut));
    }

    pub fn len(&self) -> usize {
        self.handles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handles.is_empty()
    }

    pub async fn shutdown(mut self) {
        for handle in &self.handles {
            handle.abort();
        }
        // Wait the aborts out so no task outlives the set.
        let _ = futures::future::join_all(self.handles.drain(..)).await;
    }
}

impl Default for TaskSet {
    fn default() -> Self {
        Self::new()
    }
}

/// The running dashboard engine: spawns the sample emitter, the UI publish
/// loop and the two remote pollers, and hands out snapshots of whatever
/// they produced last. Consumers never see live references.
pub struct PulseEngine {
    core: Arc<Mutex<PulseCore>>,
    published: Arc<Mutex<Vec<Sample>>>,
    performance: Arc<Mutex<FetchOutcome<PerformanceMetrics>>>,
    influencers: Arc<Mutex<FetchOutcome<Vec<Influencer>>>>,
    perf_status: Arc<Mutex<ConnectionStatus>>,
    influencer_status: Arc<Mutex<ConnectionStatus>>,
    provider: Option<Arc<dyn MetricsProvider>>,
    tasks: TaskSet,
}

impl PulseEngine {
    pub fn spawn(args: &Cli, config: ApiConfig) -> Result<Self> {
        let provider: Option<Arc<dyn MetricsProvider>> = if args.offline {
            None
        } else {
            Some(Arc::new(HttpMetricsProvider::new(&config)?))
        };

        let seed = args
            .seed
            .unwrap_or_else(|| TimeUtils::now_timestamp_ms() as u64);

        let core = Arc::new(Mutex::new(PulseCore::new(seed)));
        let published = Arc::new(Mutex::new(Vec::new()));
        let performance = Arc::new(Mutex::new(FetchOutcome::Demo(
            PerformanceMetrics::default(),
            FetchError::Offline,
        )));
        let influencers: Arc<Mutex<FetchOutcome<Vec<Influencer>>>> =
            Arc::new(Mutex::new(FetchOutcome::Demo(Vec::new(), FetchError::Offline)));
        let perf_status = Arc::new(Mutex::new(ConnectionStatus::Disconnected));
        let influencer_status = Arc::new(Mutex::new(ConnectionStatus::Disconnected));

        let mut tasks = TaskSet::new();

        // 1. Sample emitter (fast cadence; aggregation self-throttles inside)
        {
            let core = core.clone();
            tasks.spawn(async move {
                let mut ticker = tokio::time::interval(cadence::SAMPLE_TICK);
                loop {
                    ticker.tick().await;
                    core.lock().unwrap().tick(Instant::now());
                }
            });
        }

        // 2. UI publish loop. Polls faster than it publishes; the gate
        // inside the core drops the redundant attempts.
        {
            let core = core.clone();
            let published = published.clone();
            tasks.spawn(async move {
                let mut ticker = tokio::time::interval(cadence::PUBLISH_POLL);
                loop {
                    ticker.tick().await;
                    if let Some(snapshot) = core.lock().unwrap().try_publish(Instant::now()) {
                        *published.lock().unwrap() = snapshot;
                    }
                }
            });
        }

        // 3. Remote pollers (performance + influencers)
        tasks.spawn(poller::performance_loop(
            provider.clone(),
            performance.clone(),
            perf_status.clone(),
            config.poll_interval,
            seed.wrapping_add(1),
        ));
        tasks.spawn(poller::influencer_loop(
            provider.clone(),
            influencers.clone(),
            influencer_status.clone(),
            config.poll_interval,
            args.limit,
            seed.wrapping_add(2),
        ));

        Ok(Self {
            core,
            published,
            performance,
            influencers,
            perf_status,
            influencer_status,
            provider,
            tasks,
        })
    }

    /// Latest snapshot that made it through the publish gate.
    pub fn published_samples(&self) -> Vec<Sample> {
        self.published.lock().unwrap().clone()
    }

    pub fn metrics(&self) -> PulseMetrics {
        self.core.lock().unwrap().metrics().clone()
    }

    pub fn score_history(&self) -> Vec<ScoreHistoryPoint> {
        self.core.lock().unwrap().score_history()
    }

    pub fn sample_count(&self) -> usize {
        self.core.lock().unwrap().sample_count()
    }

    pub fn performance(&self) -> FetchOutcome<PerformanceMetrics> {
        self.performance.lock().unwrap().clone()
    }

    pub fn influencers(&self) -> FetchOutcome<Vec<Influencer>> {
        self.influencers.lock().unwrap().clone()
    }

    pub fn performance_status(&self) -> ConnectionStatus {
        *self.perf_status.lock().unwrap()
    }

    pub fn influencer_status(&self) -> ConnectionStatus {
        *self.influencer_status.lock().unwrap()
    }

    /// Chat question through the same degrade-gracefully path: a canned
    /// demo answer stands in whenever the backend can't be asked.
    pub async fn ask(&self, question: &str) -> FetchOutcome<String> {
        match self.provider.as_deref() {
            Some(p) => match p.ask(question).await {
                Ok(answer) => FetchOutcome::Live(answer),
                Err(reason) => {
                    FetchOutcome::Demo(DEMO.resources.chat_answer.to_string(), reason)
                }
            },
            None => FetchOutcome::Demo(DEMO.resources.chat_answer.to_string(), FetchError::Offline),
        }
    }

    /// Cancels every periodic task. Call on teardown; nothing leaks.
    pub async fn shutdown(self) {
        self.tasks.shutdown().await;
    }
}
