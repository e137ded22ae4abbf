//! reqmetrics reporting library.
//!
//! Ships the tracing-backed `LoggingReporter` and the YAML loader for the
//! profiling switch. Used by the demo binary (`main.rs`) and by integration
//! tests.

pub mod config;
pub mod logging;

pub use logging::{LoggingReporter, LATENCY_TARGET};
