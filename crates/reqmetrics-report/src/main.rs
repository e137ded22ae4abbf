//! reqmetrics demo
//!
//! Simulates one request lifecycle and logs its metrics.
//! - Profiling on if `REQMETRICS_ENABLE_PROFILING` is set or `reqmetrics.yaml` enables it
//! - Latency line on target `reqmetrics::latency` (try `RUST_LOG=info`)

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use tracing_subscriber::{fmt, EnvFilter};

use reqmetrics_core::{Field, ProfilingConfig, RequestMetrics};
use reqmetrics_report::{config, LoggingReporter};

const CONFIG_PATH: &str = "reqmetrics.yaml";

fn main() {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let profiling = config::resolve_profiling(CONFIG_PATH, ProfilingConfig::from_env())
        .expect("config load failed");
    tracing::info!(enabled = profiling.enabled, "reqmetrics-demo starting");

    let mut metrics = RequestMetrics::new(profiling, Arc::new(LoggingReporter));
    metrics.add_property(Field::ServiceName.as_str(), "S3");
    metrics.add_property(Field::ServiceEndpoint.as_str(), "https://s3.amazonaws.com");

    metrics.start_event(Field::ClientExecuteTime.as_str());
    metrics.start_event(Field::RequestMarshallTime.as_str());
    thread::sleep(Duration::from_millis(2));
    metrics.end_event(Field::RequestMarshallTime.as_str()).expect("marshall event started");

    for attempt in 1..=2u64 {
        metrics.increment_counter(Field::AttemptCount.as_str());
        metrics.start_event(Field::HttpRequestTime.as_str());
        thread::sleep(Duration::from_millis(5 * attempt));
        metrics.end_event(Field::HttpRequestTime.as_str()).expect("http event started");
    }
    metrics.add_property(Field::StatusCode.as_str(), 200u16);
    metrics.set_counter(Field::BytesProcessed.as_str(), 1024);

    metrics.end_event(Field::ClientExecuteTime.as_str()).expect("execute event started");
    metrics.log();
}
