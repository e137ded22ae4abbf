#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::io;
use std::sync::{Arc, Mutex};

use reqmetrics_core::{ProfilingConfig, RequestMetrics, TimingInfo};
use reqmetrics_report::LoggingReporter;

/// Writer that appends everything into a shared buffer.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

fn capture(f: impl FnOnce()) -> String {
    let out = Captured::default();
    let writer = out.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_ansi(false)
        .with_max_level(tracing::Level::INFO)
        .finish();
    tracing::subscriber::with_default(subscriber, f);
    out.text()
}

fn logging_metrics(enabled: bool) -> RequestMetrics {
    RequestMetrics::new(ProfilingConfig { enabled }, Arc::new(LoggingReporter))
}

#[test]
fn service_and_retries_appear_in_line() {
    let mut m = logging_metrics(true);
    m.add_property("Service", "S3");
    m.increment_counter("Retries");
    m.increment_counter("Retries");

    let logged = capture(|| m.log());
    assert!(logged.contains("Service=S3, "), "got: {logged}");
    assert!(logged.contains("Retries=2, "), "got: {logged}");
    assert!(logged.contains("reqmetrics::latency"), "got: {logged}");
    assert!(logged.contains("INFO"), "got: {logged}");
    assert_eq!(logged.lines().count(), 1);
}

#[test]
fn disabled_accumulator_logs_nothing() {
    let mut m = logging_metrics(false);
    m.add_property("Service", "S3");
    m.increment_counter("Retries");

    let logged = capture(|| m.log());
    assert!(logged.is_empty(), "got: {logged}");
}

#[test]
fn line_groups_properties_then_counters_then_timings() {
    let mut m = logging_metrics(true);
    m.add_property("Zeta", "p");
    m.set_counter("Alpha", 3);
    m.start_event("Middle");
    m.end_event("Middle").unwrap();

    let line = LoggingReporter::format_line(&m);
    let prop = line.find("Zeta=p, ").unwrap();
    let counter = line.find("Alpha=3, ").unwrap();
    let timing = line.find("Middle=").unwrap();
    assert!(prop < counter && counter < timing, "got: {line}");
    assert!(line.ends_with(", "));
}

#[test]
fn repeated_values_render_as_list() {
    let mut m = logging_metrics(true);
    m.add_property("Exception", "timeout");
    m.add_property("Exception", 503u16);
    m.start_event("Http");
    m.end_event("Http").unwrap();
    m.start_event("Http");
    m.end_event("Http").unwrap();

    let line = LoggingReporter::format_line(&m);
    assert!(line.contains("Exception=[timeout, 503], "), "got: {line}");
    assert!(line.contains("Http=["), "got: {line}");
}

#[test]
fn sub_measurement_renders_millis() {
    let t = TimingInfo::closed(0, 1_250_000).unwrap();
    assert_eq!(t.to_string(), "1.250");
}

#[test]
fn empty_metrics_render_empty_line() {
    let m = logging_metrics(true);
    assert_eq!(LoggingReporter::format_line(&m), "");
}
