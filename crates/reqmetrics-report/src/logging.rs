//! Single-line latency reporter.
//!
//! Renders properties, then counters, then sub-measurements as
//! `key=value, ` pairs (trailing separator kept) and emits the line at INFO
//! on the `reqmetrics::latency` target. Maps are key-sorted, so order within
//! each group is deterministic.

use std::fmt::{Display, Write};

use reqmetrics_core::{MetricsReporter, RequestMetrics};

/// Tracing target for latency lines.
pub const LATENCY_TARGET: &str = "reqmetrics::latency";

const KEY_VALUE_SEPARATOR: &str = "=";
const PAIR_SEPARATOR: &str = ", ";

#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingReporter;

impl LoggingReporter {
    /// Build the line that `report` would emit.
    pub fn format_line(metrics: &RequestMetrics) -> String {
        let mut out = String::new();
        for (k, v) in metrics.properties() {
            push_pair(&mut out, k, &render_list(v));
        }
        for (k, v) in metrics.timing_info().all_counters() {
            push_pair(&mut out, k, v);
        }
        for (k, v) in metrics.timing_info().sub_measurements_by_name() {
            push_pair(&mut out, k, &render_list(v));
        }
        out
    }
}

impl MetricsReporter for LoggingReporter {
    fn report(&self, metrics: &RequestMetrics) {
        let line = Self::format_line(metrics);
        tracing::info!(target: LATENCY_TARGET, "{}", line);
    }
}

fn push_pair(out: &mut String, key: &str, value: &dyn Display) {
    let _ = write!(out, "{key}{KEY_VALUE_SEPARATOR}{value}{PAIR_SEPARATOR}");
}

/// One element renders bare; otherwise `[a, b, ...]`.
fn render_list<T: Display>(items: &[T]) -> String {
    match items {
        [single] => single.to_string(),
        _ => {
            let joined = items.iter().map(ToString::to_string).collect::<Vec<_>>().join(", ");
            format!("[{joined}]")
        }
    }
}
