//! Top-level facade crate for reqmetrics.
//!
//! `core` and `report` re-export the two member crates whole. `prelude`
//! carries what a request pipeline needs to time a request and log it.

pub mod core {
    pub use reqmetrics_core::*;
}

pub mod report {
    pub use reqmetrics_report::*;
}

pub mod prelude {
    pub use reqmetrics_core::{
        Field, MetricsError, MetricsReporter, NullReporter, ProfilingConfig, RequestMetrics,
    };
    pub use reqmetrics_report::LoggingReporter;
}

use std::sync::Arc;

/// Accumulator wired to the latency-line reporter.
pub fn logging_metrics(config: reqmetrics_core::ProfilingConfig) -> reqmetrics_core::RequestMetrics {
    reqmetrics_core::RequestMetrics::new(config, Arc::new(reqmetrics_report::LoggingReporter))
}
