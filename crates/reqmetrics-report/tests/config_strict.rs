#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use reqmetrics_core::ProfilingConfig;
use reqmetrics_report::config;

#[test]
fn deny_unknown_fields_nested() {
    let bad = r#"
version: 1
profiling:
  enabeld: true # typo should fail
"#;

    let err = config::load_from_str(bad).expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

#[test]
fn rejects_unknown_version() {
    let err = config::load_from_str("version: 2\n").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "UNSUPPORTED_VERSION");
}

#[test]
fn ok_minimal_config_defaults_disabled() {
    let cfg = config::load_from_str("version: 1\n").expect("must parse");
    assert_eq!(cfg.version, 1);
    assert!(!cfg.profiling.enabled);
}

#[test]
fn ok_enabled_config() {
    let ok = r#"
version: 1
profiling:
  enabled: true
"#;
    let cfg = config::load_from_str(ok).expect("must parse");
    assert!(cfg.profiling.enabled);
}

#[test]
fn missing_file_is_config_error() {
    let err = config::load_from_file("/nonexistent/reqmetrics.yaml").expect_err("must fail");
    assert_eq!(err.kind().as_str(), "CONFIG");
}

fn write_config(name: &str, body: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("reqmetrics-{}-{name}.yaml", std::process::id()));
    std::fs::write(&path, body).unwrap();
    path
}

#[test]
fn resolve_without_file_uses_env_switch() {
    let missing = std::env::temp_dir().join("reqmetrics-does-not-exist.yaml");
    let on = config::resolve_profiling(&missing, ProfilingConfig::enabled()).unwrap();
    let off = config::resolve_profiling(&missing, ProfilingConfig::disabled()).unwrap();
    assert!(on.enabled);
    assert!(!off.enabled);
}

#[test]
fn resolve_file_can_enable_when_env_is_off() {
    let path = write_config("enable", "version: 1\nprofiling:\n  enabled: true\n");
    let cfg = config::resolve_profiling(&path, ProfilingConfig::disabled()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(cfg.enabled);
}

#[test]
fn resolve_env_wins_over_disabled_file() {
    let path = write_config("disable", "version: 1\nprofiling:\n  enabled: false\n");
    let cfg = config::resolve_profiling(&path, ProfilingConfig::enabled()).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert!(cfg.enabled);
}

#[test]
fn resolve_rejects_malformed_file() {
    let path = write_config("bad", "version: 3\n");
    let err = config::resolve_profiling(&path, ProfilingConfig::enabled()).expect_err("must fail");
    std::fs::remove_file(&path).unwrap();
    assert_eq!(err.kind().as_str(), "UNSUPPORTED_VERSION");
}
