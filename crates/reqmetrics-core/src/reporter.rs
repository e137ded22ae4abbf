//! Reporter contract: the single hand-off point for accumulated metrics.

use crate::accumulator::RequestMetrics;

/// Receives a request's metrics once, at the end of the request.
pub trait MetricsReporter: Send + Sync {
    fn report(&self, metrics: &RequestMetrics);
}

/// Discards everything. Installed whenever profiling is off.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullReporter;

impl MetricsReporter for NullReporter {
    fn report(&self, _metrics: &RequestMetrics) {}
}
