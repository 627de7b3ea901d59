//! Test utilities shared by the integration suites

use patterns_core::{AirstripConfig, EpisodeMode};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

static CONFIG_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Install a test-writer subscriber once per test binary
pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("debug")
        .try_init();
}

/// Airstrip section with the given runways and flights
pub fn airstrip(runways: &[&str], flights: &[&str], mode: EpisodeMode) -> AirstripConfig {
    AirstripConfig {
        runways: runways.iter().map(|r| r.to_string()).collect(),
        flights: flights.iter().map(|f| f.to_string()).collect(),
        mode,
        ..AirstripConfig::default()
    }
}

/// Write `contents` to a fresh file in the temp directory
pub fn write_config(contents: &str) -> PathBuf {
    let n = CONFIG_COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!(
        "patterns-integration-{}-{}.toml",
        std::process::id(),
        n
    ));
    std::fs::write(&path, contents).expect("write temp config");
    path
}
