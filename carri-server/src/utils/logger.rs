//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to every
//! target. Output always goes to stdout; with an existing log directory it is
//! also written to a daily rolling file.

use std::path::Path;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LEVEL: &str = "info";
const LOG_FILE_PREFIX: &str = "carri-server";

/// Initialize the logger writing to stdout
pub fn init_logger(log_level: Option<&str>) {
    init_logger_with_file(log_level, None);
}

/// Build the filter from `RUST_LOG`, falling back to `log_level`, then `info`
pub fn build_filter(log_level: Option<&str>) -> EnvFilter {
    let from_env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    resolve_filter(from_env.as_deref(), log_level)
}

/// First of `env`, `log_level` that is non-empty and parses
fn resolve_filter(env: Option<&str>, log_level: Option<&str>) -> EnvFilter {
    [env, log_level]
        .into_iter()
        .flatten()
        .filter(|directives| !directives.trim().is_empty())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LEVEL))
}

/// Initialize the logger with optional file output
pub fn init_logger_with_file(log_level: Option<&str>, log_dir: Option<&str>) {
    let stdout_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stdout);

    let file_layer = log_dir.map(Path::new).filter(|path| path.is_dir()).map(|path| {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(tracing_appender::rolling::daily(path, LOG_FILE_PREFIX))
    });

    // A subscriber may already be installed (tests, repeated setup)
    let _ = tracing_subscriber::registry()
        .with(build_filter(log_level))
        .with(stdout_layer)
        .with(file_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_level_applies_without_env() {
        let filter = resolve_filter(None, Some("carri_server=debug"));
        assert_eq!(filter.to_string(), "carri_server=debug");
    }

    #[test]
    fn test_env_wins_over_configured_level() {
        let filter = resolve_filter(Some("warn"), Some("debug"));
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn test_invalid_levels_fall_back_to_info() {
        let filter = resolve_filter(None, Some("carri_server=ruidoso"));
        assert_eq!(filter.to_string(), "info");

        let filter = resolve_filter(Some("tower_http=verboso"), None);
        assert_eq!(filter.to_string(), "info");

        let filter = resolve_filter(Some("  "), None);
        assert_eq!(filter.to_string(), "info");
    }

    #[test]
    fn test_invalid_env_falls_back_to_configured_level() {
        let filter = resolve_filter(Some("carri_server=fuerte"), Some("debug"));
        assert_eq!(filter.to_string(), "debug");
    }
}
