//! gaugekit agent
//!
//! Periodically collects every gauge and gauge function into a payload and
//! logs it. Submission to a monitoring agent is left to the embedding
//! application; this binary exists to exercise the flush cycle.
//!
//! Usage: `gaugekit-agent [config-path]` (default `gaugekit.yaml`).

use std::time::{Duration, Instant};

use tracing_subscriber::{fmt, EnvFilter};

use gaugekit_client::{config, Flusher, GaugeMetrics};
use gaugekit_core::Result;

#[tokio::main]
async fn main() -> Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let path = std::env::args().nth(1).unwrap_or_else(|| "gaugekit.yaml".to_string());
    let cfg = config::load_or_default(&path)?;
    let tags = cfg.stream_tags();

    let metrics = GaugeMetrics::new();
    let started = Instant::now();
    metrics.set_gauge_func_with_tags("gaugekit.agent.uptime_seconds", &tags, move || {
        i64::try_from(started.elapsed().as_secs()).unwrap_or(i64::MAX)
    });

    let flusher = Flusher::new(cfg.flush.isolate_panics);
    let mut ticker = tokio::time::interval(Duration::from_millis(cfg.flush.interval_ms));

    tracing::info!(interval_ms = cfg.flush.interval_ms, "gaugekit-agent starting");

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("gaugekit-agent stopping");
                return Ok(());
            }
        }

        let report = flusher.collect(&metrics);
        let body = if cfg.flush.pretty {
            report.to_json_pretty()?
        } else {
            report.to_json()?
        };
        tracing::info!(
            gauges = report.gauges,
            functions = report.functions,
            failed = report.failed_functions.len(),
            payload = %body,
            "flush"
        );

        metrics.add_gauge_with_tags("gaugekit.agent.flushes", &tags, 1u64)?;
        metrics.set_gauge_with_tags(
            "gaugekit.agent.last_flush_metrics",
            &tags,
            report.payload.len(),
        );
    }
}
