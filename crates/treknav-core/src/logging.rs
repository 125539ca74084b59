//! File logging through tracing
//!
//! stdout belongs to the TUI (or to NDJSON in headless mode), so every log
//! line goes to a daily rolling file instead: `trek-nav.log.YYYY-MM-DD`.

use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Error, Result};

const LOG_FILE_PREFIX: &str = "trek-nav.log";

/// Filter directive variable, e.g. `TREKNAV_LOG=treknav_app=trace`
pub const LOG_FILTER_ENV: &str = "TREKNAV_LOG";

/// Overrides the log directory
pub const LOG_DIR_ENV: &str = "TREKNAV_LOG_DIR";

const DEFAULT_FILTER: &str = "trek_nav=info,treknav_app=info,treknav_tui=info,warn";

/// Install the global subscriber.
///
/// Keep the returned guard alive until exit; dropping it flushes the
/// background writer.
pub fn init() -> Result<WorkerGuard> {
    let log_dir = log_directory(std::env::var_os(LOG_DIR_ENV).map(PathBuf::from))
        .ok_or_else(|| Error::config("no data directory for logs; set TREKNAV_LOG_DIR"))?;
    std::fs::create_dir_all(&log_dir)?;

    let appender = RollingFileAppender::new(Rotation::DAILY, &log_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let env_filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_line_number(true)
                .with_timer(fmt::time::ChronoLocal::new(
                    "%Y-%m-%d %H:%M:%S%.3f".to_string(),
                )),
        )
        .try_init()
        .map_err(|e| Error::config(format!("logging already initialised: {e}")))?;

    tracing::info!("Trek Nav {} logging to {}", env!("CARGO_PKG_VERSION"), log_dir.display());
    Ok(guard)
}

/// Where log files go: the override if set, else `<data dir>/trek-nav/logs`.
fn log_directory(override_dir: Option<PathBuf>) -> Option<PathBuf> {
    override_dir
        .filter(|dir| !dir.as_os_str().is_empty())
        .or_else(|| dirs::data_local_dir().map(|base| base.join("trek-nav").join("logs")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_override_wins() {
        let dir = log_directory(Some(PathBuf::from("/tmp/trek-logs")));
        assert_eq!(dir, Some(PathBuf::from("/tmp/trek-logs")));
    }

    #[test]
    fn test_empty_override_is_ignored() {
        let dir = log_directory(Some(PathBuf::new()));
        assert_eq!(dir, log_directory(None));
    }

    #[test]
    fn test_default_lives_under_data_dir() {
        if let Some(dir) = log_directory(None) {
            assert!(dir.ends_with("trek-nav/logs"));
        }
    }
}
