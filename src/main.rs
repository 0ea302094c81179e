use std::time::Duration;

use clap::Parser;
use tabled::{Table, Tabled};

use echo_pulse::config::ApiConfig;
use echo_pulse::utils::maths_utils::format_compact_count;
use echo_pulse::{Cli, ConnectionStatus, FetchOutcome, PulseEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (global_level, my_code_level) = if cfg!(debug_assertions) {
        (log::LevelFilter::Warn, log::LevelFilter::Info)
    } else {
        (log::LevelFilter::Error, log::LevelFilter::Warn)
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, global_level)
        .filter(Some("echo_pulse"), my_code_level)
        .init();

    let args = Cli::parse();

    let mut config = ApiConfig::from_env();
    if let Some(url) = &args.api_url {
        config.base_url = url.clone();
    }

    log::info!(
        "Starting pulse engine against {} (offline={})",
        config.base_url,
        args.offline
    );

    let engine = PulseEngine::spawn(&args, config)?;

    let mut render = tokio::time::interval(Duration::from_secs(1));
    loop {
        tokio::select! {
            _ = render.tick() => render_dashboard(&engine),
            _ = tokio::signal::ctrl_c() => break,
        }
    }

    println!("\nShutting down...");
    engine.shutdown().await;
    Ok(())
}

#[derive(Tabled)]
struct LeaderboardRow {
    #[tabled(rename = "#")]
    rank: usize,
    author: String,
    followers: String,
    posts: u32,
    sentiment: String,
    influence: String,
}

fn render_dashboard(engine: &PulseEngine) {
    let samples = engine.published_samples();
    let metrics = engine.metrics();

    if let Some(latest) = samples.last() {
        println!(
            "[{}] price {:.2} | sentiment {:+.2} | window {} samples",
            latest.time,
            latest.price,
            latest.sentiment,
            samples.len()
        );
    } else {
        println!("waiting for first samples...");
    }

    println!(
        "pulse {:.1}/10 ({}) | {}",
        metrics.score,
        metrics.consensus,
        metrics.phrases.join(" / ")
    );

    // Performance line, flagged when the numbers are synthetic.
    let perf = engine.performance();
    let tag = perf_tag(&perf, engine.performance_status());
    let p = perf.data();
    println!(
        "backend{}: avg {:.0}ms p99 {:.0}ms | {:.1} msg/s | {} total | up {:.0}s",
        tag,
        p.latency.avg_ms,
        p.latency.p99_ms,
        p.throughput.current_mps,
        p.throughput.total_messages,
        p.uptime_seconds
    );

    // Leaderboard refreshes on the remote cadence; print whatever is current.
    let influencers = engine.influencers();
    if !influencers.data().is_empty() {
        let rows: Vec<LeaderboardRow> = influencers
            .data()
            .iter()
            .enumerate()
            .map(|(i, inf)| LeaderboardRow {
                rank: i + 1,
                author: format!("@{}", inf.author_id),
                followers: format_compact_count(inf.followers),
                posts: inf.message_count,
                sentiment: format!("{:.0}% {}", inf.sentiment * 100.0, inf.sentiment_label()),
                influence: format!("{:.0}", inf.influence_score),
            })
            .collect();

        let label = if influencers.is_demo() { " (Demo Data)" } else { "" };
        println!("influencers{}:\n{}", label, Table::new(rows));
    }
    println!();
}

fn perf_tag<T>(outcome: &FetchOutcome<T>, status: ConnectionStatus) -> String {
    if outcome.is_demo() {
        " (demo data)".to_string()
    } else {
        format!(" ({status})")
    }
}
