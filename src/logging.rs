//! Log output for the timer.
//!
//! Logs go to stderr, keeping stdout for the status line, and to
//! `fractal.log` in the config dir, rotated at 10 MB with one backup.
//! `DEBUG_LOGGING` (any value) turns on debug output for the timer crates.

use rolling_file::{BasicRollingFileAppender, RollingConditionBasic};
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE: &str = "fractal.log";
const MAX_LOG_BYTES: u64 = 10 * 1024 * 1024;
const KEPT_LOG_FILES: usize = 1;

/// Where and how verbosely to log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Directory holding the log file; `None` logs to stderr only
    pub dir: Option<PathBuf>,
    pub debug: bool,
}

impl LogSettings {
    pub fn from_env() -> Self {
        Self {
            dir: dirs::config_dir().map(|config| config.join("fractal-timer")),
            debug: std::env::var_os("DEBUG_LOGGING").is_some(),
        }
    }

    pub fn log_path(&self) -> Option<PathBuf> {
        self.dir.as_ref().map(|dir| dir.join(LOG_FILE))
    }

    pub fn directive(&self) -> &'static str {
        if self.debug {
            "info,fractal_timer=debug,fractal_core=debug"
        } else {
            "info"
        }
    }

    fn open_appender(&self) -> Result<Option<BasicRollingFileAppender>, String> {
        let (Some(dir), Some(path)) = (&self.dir, self.log_path()) else {
            return Ok(None);
        };
        std::fs::create_dir_all(dir)
            .map_err(|e| format!("cannot create log directory {}: {e}", dir.display()))?;
        BasicRollingFileAppender::new(
            &path,
            RollingConditionBasic::new().max_size(MAX_LOG_BYTES),
            KEPT_LOG_FILES,
        )
        .map(Some)
        .map_err(|e| format!("cannot open log file {}: {e}", path.display()))
    }
}

/// Install the global subscriber.
///
/// Hold the returned guard until exit so buffered file output is flushed.
/// `None` means only stderr is receiving logs.
pub fn init() -> Option<WorkerGuard> {
    init_with(&LogSettings::from_env())
}

pub fn init_with(settings: &LogSettings) -> Option<WorkerGuard> {
    // The subscriber is not installed yet, so problems go straight to stderr
    let appender = settings.open_appender().unwrap_or_else(|e| {
        eprintln!("{e}, logging to stderr only");
        None
    });

    let (file_layer, guard) = match appender {
        Some(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(file_layer)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::new(settings.directive()))
        .init();

    tracing::info!(
        log_file = ?guard.as_ref().and(settings.log_path()),
        debug = settings.debug,
        "Logging initialized"
    );
    guard
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_follows_debug_flag() {
        let quiet = LogSettings { dir: None, debug: false };
        let verbose = LogSettings { dir: None, debug: true };
        assert_eq!(quiet.directive(), "info");
        assert!(verbose.directive().contains("fractal_core=debug"));
        assert!(EnvFilter::try_new(verbose.directive()).is_ok());
    }

    #[test]
    fn test_no_dir_means_no_file() {
        let settings = LogSettings { dir: None, debug: false };
        assert_eq!(settings.log_path(), None);
        assert!(settings.open_appender().unwrap().is_none());
    }

    #[test]
    fn test_appender_creates_log_directory() {
        let dir = tempfile::tempdir().unwrap();
        let settings = LogSettings {
            dir: Some(dir.path().join("logs")),
            debug: false,
        };
        assert!(settings.open_appender().unwrap().is_some());
        assert!(dir.path().join("logs").is_dir());
        assert_eq!(settings.log_path(), Some(dir.path().join("logs").join(LOG_FILE)));
    }
}
