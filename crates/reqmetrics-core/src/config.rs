//! Profiling switch consulted once per accumulator.

use serde::Deserialize;

/// Environment variable whose presence enables profiling.
pub const PROFILING_ENV_VAR: &str = "REQMETRICS_ENABLE_PROFILING";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProfilingConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl ProfilingConfig {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Read the process-wide switch. Any value (even empty) counts as set.
    pub fn from_env() -> Self {
        Self { enabled: std::env::var_os(PROFILING_ENV_VAR).is_some() }
    }
}
