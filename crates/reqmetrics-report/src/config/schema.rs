use serde::Deserialize;
use reqmetrics_core::error::{MetricsError, Result};
use reqmetrics_core::ProfilingConfig;

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetricsConfig {
    pub version: u32,

    #[serde(default)]
    pub profiling: ProfilingConfig,
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(MetricsError::UnsupportedVersion);
        }
        Ok(())
    }
}
