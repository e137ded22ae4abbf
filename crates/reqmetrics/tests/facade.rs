#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqmetrics::prelude::*;

#[test]
fn logging_metrics_follows_profiling_switch() {
    let mut on = reqmetrics::logging_metrics(ProfilingConfig::enabled());
    on.add_property(Field::ServiceName.as_str(), "S3");
    on.increment_counter(Field::AttemptCount.as_str());
    assert!(on.is_enabled());
    let line = LoggingReporter::format_line(&on);
    assert!(line.contains("ServiceName=S3, "), "got: {line}");
    assert!(line.contains("AttemptCount=1, "), "got: {line}");

    let mut off = reqmetrics::logging_metrics(ProfilingConfig::disabled());
    off.increment_counter(Field::AttemptCount.as_str());
    assert!(!off.is_enabled());
    assert!(off.timing_info().all_counters().is_empty());
}
