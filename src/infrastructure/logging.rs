use std::fs;
use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use crate::domain::{DomainError, LoggingConfig};

const LOG_PREFIX: &str = "settingview";

/// Build the filter directive for this crate at `level`.
fn filter_directive(level: &str, others: Option<&str>) -> String {
    match others {
        Some(others) => format!("{}={},{}", LOG_PREFIX, level, others),
        None => format!("{}={}", LOG_PREFIX, level),
    }
}

/// Initialize the logging system with console output and optional file rotation.
///
/// Returns a guard that must be kept alive while file logging is wanted.
/// When the guard is dropped, any remaining logs are flushed. Calling this
/// more than once leaves the first subscriber in place.
pub fn init_logging(
    logs_dir: &Path,
    config: &LoggingConfig,
) -> Result<Option<WorkerGuard>, DomainError> {
    let level = config.level.as_str();

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(level, Some("warn"))));

    let console_layer = tracing_subscriber::fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(FmtSpan::NONE)
        .with_filter(env_filter);

    if config.file_logging {
        fs::create_dir_all(logs_dir)?;

        let file_appender = RollingFileAppender::builder()
            .rotation(Rotation::DAILY)
            .filename_prefix(LOG_PREFIX)
            .filename_suffix("log")
            .max_log_files(config.max_files.max(1))
            .build(logs_dir)
            .map_err(|e| DomainError::Io(format!("Failed to create log appender: {}", e)))?;

        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking)
            .with_ansi(false)
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(EnvFilter::new(filter_directive(level, None)));

        if tracing_subscriber::registry()
            .with(console_layer)
            .with(file_layer)
            .try_init()
            .is_ok()
        {
            tracing::info!(
                logs_dir = ?logs_dir,
                level = level,
                "Logging initialized with file output"
            );
        }

        Ok(Some(guard))
    } else {
        let _ = tracing_subscriber::registry()
            .with(console_layer)
            .try_init();

        tracing::info!(level = level, "Logging initialized (console only)");

        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    #[test]
    fn test_filter_directive() {
        assert_eq!(filter_directive("debug", Some("warn")), "settingview=debug,warn");
        assert_eq!(filter_directive("info", None), "settingview=info");
    }

    #[test]
    fn test_console_logging_is_idempotent() {
        let temp_dir = env::temp_dir().join("settingview_log_test");
        let config = LoggingConfig::default();

        assert!(init_logging(&temp_dir, &config).unwrap().is_none());
        assert!(init_logging(&temp_dir, &config).unwrap().is_none());
        assert!(!temp_dir.join("never-created").exists());
    }
}
