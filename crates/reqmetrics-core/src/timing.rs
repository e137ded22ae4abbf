//! Timing model: closed intervals and nested timing records.
//!
//! A `TimingInfo` owns a root interval, a counter map, and named lists of
//! child `TimingInfo` records. Child lists keep insertion order and are never
//! empty once a name is present. Maps are key-sorted so rendered output is
//! stable.

use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::error::{MetricsError, Result};

/// Start/end timestamp pair in nanoseconds. `end` is `None` until closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimingInterval {
    start_nanos: i64,
    end_nanos: Option<i64>,
}

impl TimingInterval {
    pub fn open(start_nanos: i64) -> Self {
        Self { start_nanos, end_nanos: None }
    }

    pub fn closed(start_nanos: i64, end_nanos: i64) -> Result<Self> {
        Self::open(start_nanos).close(end_nanos)
    }

    /// Return a closed copy. Fails if `end_nanos` precedes the start.
    pub fn close(self, end_nanos: i64) -> Result<Self> {
        if end_nanos < self.start_nanos {
            return Err(MetricsError::InvalidInterval { start: self.start_nanos, end: end_nanos });
        }
        Ok(Self { start_nanos: self.start_nanos, end_nanos: Some(end_nanos) })
    }

    pub fn start_nanos(&self) -> i64 {
        self.start_nanos
    }

    pub fn end_nanos(&self) -> Option<i64> {
        self.end_nanos
    }

    pub fn is_closed(&self) -> bool {
        self.end_nanos.is_some()
    }

    /// Elapsed time, or `None` while open.
    pub fn elapsed(&self) -> Option<Duration> {
        self.end_nanos
            .map(|end| Duration::from_nanos(end.saturating_sub(self.start_nanos) as u64))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimingInfo {
    interval: TimingInterval,
    counters: BTreeMap<String, i64>,
    sub_measurements: BTreeMap<String, Vec<TimingInfo>>,
}

impl TimingInfo {
    /// Open-ended record starting at `start_nanos`.
    pub fn start(start_nanos: i64) -> Self {
        Self::from_interval(TimingInterval::open(start_nanos))
    }

    pub fn closed(start_nanos: i64, end_nanos: i64) -> Result<Self> {
        Ok(Self::from_interval(TimingInterval::closed(start_nanos, end_nanos)?))
    }

    pub fn from_interval(interval: TimingInterval) -> Self {
        Self { interval, counters: BTreeMap::new(), sub_measurements: BTreeMap::new() }
    }

    /// Close the root interval.
    pub fn end_timing(&mut self, end_nanos: i64) -> Result<()> {
        self.interval = self.interval.close(end_nanos)?;
        Ok(())
    }

    pub fn interval(&self) -> &TimingInterval {
        &self.interval
    }

    pub fn elapsed(&self) -> Option<Duration> {
        self.interval.elapsed()
    }

    pub fn time_taken_millis(&self) -> Option<f64> {
        self.elapsed().map(|d| d.as_secs_f64() * 1_000.0)
    }

    pub fn add_sub_measurement(&mut self, name: &str, child: TimingInfo) {
        self.sub_measurements.entry(name.to_string()).or_default().push(child);
    }

    pub fn sub_measurements(&self, name: &str) -> Option<&[TimingInfo]> {
        self.sub_measurements.get(name).map(Vec::as_slice)
    }

    pub fn sub_measurement(&self, name: &str, index: usize) -> Option<&TimingInfo> {
        self.sub_measurements.get(name).and_then(|list| list.get(index))
    }

    pub fn last_sub_measurement(&self, name: &str) -> Option<&TimingInfo> {
        self.sub_measurements.get(name).and_then(|list| list.last())
    }

    pub fn sub_measurements_by_name(&self) -> &BTreeMap<String, Vec<TimingInfo>> {
        &self.sub_measurements
    }

    /// Add 1, starting from 0 if absent. Saturates at `i64::MAX`.
    pub fn increment_counter(&mut self, name: &str) {
        let c = self.counters.entry(name.to_string()).or_insert(0);
        *c = c.saturating_add(1);
    }

    pub fn set_counter(&mut self, name: &str, value: i64) {
        self.counters.insert(name.to_string(), value);
    }

    pub fn counter(&self, name: &str) -> Option<i64> {
        self.counters.get(name).copied()
    }

    pub fn all_counters(&self) -> &BTreeMap<String, i64> {
        &self.counters
    }
}

/// Elapsed milliseconds with three decimals, or `open`.
impl fmt::Display for TimingInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.time_taken_millis() {
            Some(ms) => write!(f, "{ms:.3}"),
            None => f.write_str("open"),
        }
    }
}
