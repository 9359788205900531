//! Logging setup on top of the `tracing` ecosystem.
//!
//! Two entry points:
//!
//! - [`init_minimal_logging()`]: stderr only, filtered by `RUST_LOG`. For tests,
//!   early startup, and fallback when the configuration cannot be loaded.
//! - [`init_logging()`]: stdout layer plus an optional daily-rolling file layer,
//!   both configured from [`LoggingConfig`].

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the non-blocking file writer alive so buffered lines get flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal stderr logger.
///
/// Honours `RUST_LOG`, defaulting to `info`. Errors (e.g. a global subscriber is
/// already installed) are ignored, so this is safe to call repeatedly.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Maps a configured level name onto a `tracing` level (case-insensitive).
pub fn parse_level(level: &str) -> Result<Level, CoreError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid_level => Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
            "Invalid log level in config: {}",
            invalid_level
        )))),
    }
}

/// Builds a filter from a level or directive string.
fn level_filter(directives: &str) -> Result<EnvFilter, CoreError> {
    EnvFilter::try_new(directives).map_err(|e| {
        CoreError::Logging(LoggingError::FilterError(format!("{}: {}", directives, e)))
    })
}

/// Builds the file layer: daily rotation, text or JSON, no ANSI colors.
///
/// The parent directory is created when missing.
fn create_file_layer(
    log_path: &Path,
    format: &str,
) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    if let Some(parent) = log_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            utils::fs::ensure_dir_exists(parent)?;
        }
    }

    let file_appender = tracing_appender::rolling::daily(
        log_path.parent().unwrap_or_else(|| Path::new(".")),
        log_path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("expose.log")),
    );
    let (non_blocking_writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = match format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
        _ => fmt::layer()
            .with_writer(non_blocking_writer)
            .with_ansi(false)
            .boxed(),
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload == true`, an already installed subscriber is not an error: the
/// previous subscriber stays active and only the file guard is swapped.
///
/// # Errors
///
/// [`LoggingError::InitializationFailure`] for an invalid level, or when the
/// global subscriber is already set and this is not a reload.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = parse_level(&config.level)?.to_string();

    let stdout_filter = level_filter(&level)?;
    let stdout_layer: BoxedLayer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        new_file_guard = Some(guard);
        layers.push(file_layer.with_filter(level_filter(&level)?).boxed());
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = new_file_guard,
        Err(poisoned) => *poisoned.into_inner() = new_file_guard,
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            tracing::info!(
                "Logging re-initialization requested; previous subscriber remains active: {}",
                e
            );
            Ok(())
        }
        Err(e) => Err(CoreError::Logging(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        )))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use tempfile::TempDir;

    #[rstest]
    #[case("trace", Level::TRACE)]
    #[case("DEBUG", Level::DEBUG)]
    #[case("Info", Level::INFO)]
    #[case("warn", Level::WARN)]
    #[case("error", Level::ERROR)]
    fn parse_level_accepts_known_levels(#[case] name: &str, #[case] expected: Level) {
        assert_eq!(parse_level(name).unwrap(), expected);
    }

    #[test]
    fn parse_level_rejects_unknown_level() {
        match parse_level("supertrace") {
            Err(CoreError::Logging(LoggingError::InitializationFailure(msg))) => {
                assert!(msg.contains("Invalid log level in config: supertrace"))
            }
            other => panic!("Unexpected result: {:?}", other),
        }
    }

    #[test]
    fn level_filter_accepts_levels() {
        assert!(level_filter("debug").is_ok());
    }

    #[test]
    fn level_filter_rejects_malformed_directive() {
        match level_filter("expose=loudest") {
            Err(CoreError::Logging(LoggingError::FilterError(msg))) => {
                assert!(msg.starts_with("expose=loudest"), "{}", msg)
            }
            other => panic!("Expected FilterError, got {:?}", other),
        }
    }

    #[test]
    fn init_logging_invalid_level_fails_before_installing() {
        let config = LoggingConfig {
            level: "loud".to_string(),
            file_path: None,
            format: "text".to_string(),
        };
        assert!(init_logging(&config, false).is_err());
    }

    #[test]
    fn init_minimal_logging_can_be_called_twice() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("minimal logging active");
    }

    #[test]
    fn init_logging_reload_never_errors() {
        let config = LoggingConfig::default();
        assert!(init_logging(&config, true).is_ok());
        assert!(init_logging(&config, true).is_ok());
    }

    #[rstest]
    #[case("text")]
    #[case("json")]
    fn create_file_layer_creates_parent_directory(#[case] format: &str) {
        let temp_dir = TempDir::new().unwrap();
        let log_path = temp_dir.path().join("nested/dir/expose.log");
        assert!(!log_path.parent().unwrap().exists());

        let (_layer, _guard) = create_file_layer(&log_path, format).unwrap();
        assert!(log_path.parent().unwrap().is_dir());
    }
}
