//! Per-request metrics accumulator.
//!
//! One `RequestMetrics` lives for one request. The pipeline brackets phases
//! with `start_event`/`end_event`, bumps counters, attaches properties, and
//! calls `log` once at the end to hand everything to the reporter.
//!
//! Timing and counters only record when profiling was enabled at
//! construction. Properties always record.
//!
//! # Known limitation
//! Events do not nest under the same name: a second `start_event(name)`
//! before `end_event(name)` replaces the first start. Sequential
//! start/end cycles under one name are all kept, in call order.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use crate::clock::{Clock, MonotonicClock};
use crate::config::ProfilingConfig;
use crate::error::{MetricsError, Result};
use crate::reporter::{MetricsReporter, NullReporter};
use crate::timing::TimingInfo;
use crate::value::PropertyValue;

pub struct RequestMetrics {
    enabled: bool,
    timing: TimingInfo,
    properties: BTreeMap<String, Vec<PropertyValue>>,
    in_flight: HashMap<String, i64>,
    reporter: Arc<dyn MetricsReporter>,
    clock: Box<dyn Clock>,
}

impl RequestMetrics {
    /// Build an accumulator on the monotonic clock. When profiling is off the
    /// supplied reporter is replaced by `NullReporter`.
    pub fn new(config: ProfilingConfig, reporter: Arc<dyn MetricsReporter>) -> Self {
        Self::with_clock(config, reporter, Box::new(MonotonicClock))
    }

    pub fn with_clock(
        config: ProfilingConfig,
        reporter: Arc<dyn MetricsReporter>,
        clock: Box<dyn Clock>,
    ) -> Self {
        let enabled = config.enabled;
        let reporter: Arc<dyn MetricsReporter> =
            if enabled { reporter } else { Arc::new(NullReporter) };
        let timing = TimingInfo::start(clock.now_nanos());
        Self {
            enabled,
            timing,
            properties: BTreeMap::new(),
            in_flight: HashMap::new(),
            reporter,
            clock,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a start timestamp for `name`, replacing any unfinished start.
    pub fn start_event(&mut self, name: &str) {
        if !self.enabled {
            return;
        }
        let now = self.clock.now_nanos();
        if let Some(prev) = self.in_flight.insert(name.to_string(), now) {
            tracing::debug!(event = name, discarded_start = prev, "event restarted before end");
        }
    }

    /// Close the in-flight event `name` and append it as a sub-measurement.
    ///
    /// Ending an event that was never started is a caller bug and returns
    /// `MetricsError::IllegalState`. An end timestamp earlier than the start
    /// (a clock stepping backwards) is clamped to the start.
    pub fn end_event(&mut self, name: &str) -> Result<()> {
        if !self.enabled {
            return Ok(());
        }
        let start = self.in_flight.remove(name).ok_or_else(|| {
            MetricsError::IllegalState(format!(
                "trying to end an event which was never started: {name}"
            ))
        })?;
        let end = self.clock.now_nanos().max(start);
        let child = TimingInfo::closed(start, end)?;
        self.timing.add_sub_measurement(name, child);
        Ok(())
    }

    pub fn increment_counter(&mut self, name: &str) {
        if self.enabled {
            self.timing.increment_counter(name);
        }
    }

    pub fn set_counter(&mut self, name: &str, value: i64) {
        if self.enabled {
            self.timing.set_counter(name, value);
        }
    }

    /// Append `value` under `name`. Records regardless of the profiling switch.
    pub fn add_property(&mut self, name: &str, value: impl Into<PropertyValue>) {
        self.properties.entry(name.to_string()).or_default().push(value.into());
    }

    /// Hand the accumulated metrics to the configured reporter.
    pub fn log(&self) {
        self.reporter.report(self);
    }

    pub fn timing_info(&self) -> &TimingInfo {
        &self.timing
    }

    pub fn properties(&self) -> &BTreeMap<String, Vec<PropertyValue>> {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&[PropertyValue]> {
        self.properties.get(name).map(Vec::as_slice)
    }
}
