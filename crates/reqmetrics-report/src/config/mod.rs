//! Profiling config: strict YAML file merged with the environment switch.

pub mod schema;

use std::fs;
use std::path::Path;

use reqmetrics_core::error::{MetricsError, Result};
use reqmetrics_core::ProfilingConfig;

pub use schema::MetricsConfig;

pub fn load_from_file(path: impl AsRef<Path>) -> Result<MetricsConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path).map_err(|e| {
        MetricsError::Config(format!("read config {} failed: {e}", path.display()))
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<MetricsConfig> {
    let cfg: MetricsConfig = serde_yaml::from_str(s)
        .map_err(|e| MetricsError::Config(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}

/// Effective profiling switch: on if either the env switch or the config
/// file (when present) turns it on. A missing file is not an error; a
/// malformed one is.
pub fn resolve_profiling(path: impl AsRef<Path>, env: ProfilingConfig) -> Result<ProfilingConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(env);
    }
    let file = load_from_file(path)?.profiling;
    let enabled = env.enabled || file.enabled;
    tracing::debug!(
        path = %path.display(),
        env = env.enabled,
        file = file.enabled,
        enabled,
        "profiling switch resolved"
    );
    Ok(ProfilingConfig { enabled })
}
