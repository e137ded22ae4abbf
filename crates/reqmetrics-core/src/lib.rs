//! reqmetrics core: the request-scoped metrics model.
//!
//! This crate holds the timing model (intervals and nested timing records),
//! the per-request accumulator, the reporter contract, and the error surface
//! shared by the reporting crate. It carries no logging backend or config
//! file format so it can be embedded in any client pipeline.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here. The one fallible
//! operation on the hot path (`RequestMetrics::end_event`) surfaces its
//! failure as `MetricsError::IllegalState`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod accumulator;
pub mod clock;
pub mod config;
pub mod error;
pub mod field;
pub mod reporter;
pub mod timing;
pub mod value;

/// Shared result type.
pub use error::{MetricsError, Result};

pub use accumulator::RequestMetrics;
pub use clock::{Clock, MonotonicClock};
pub use config::ProfilingConfig;
pub use field::Field;
pub use reporter::{MetricsReporter, NullReporter};
pub use timing::{TimingInfo, TimingInterval};
pub use value::PropertyValue;
