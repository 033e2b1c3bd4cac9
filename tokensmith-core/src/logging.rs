//! Logging setup for Tokensmith.
//!
//! Built on the `tracing` ecosystem: a console layer that is always present
//! and an optional rolling file layer, each in text or JSON format, filtered
//! by the level in [`LoggingConfig`].

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
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
    Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Installs a minimal `stderr` subscriber.
///
/// Meant for tests and for the window before the configuration is loaded.
/// Honors `RUST_LOG`, defaulting to `info`. Errors (e.g. a subscriber is
/// already installed) are ignored.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Builds the daily-rolling file layer and returns it with its flush guard.
///
/// The parent directory of `log_path` is created when missing.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    utils::fs::ensure_dir_exists(directory)?;

    let file_name = log_path
        .file_name()
        .unwrap_or_else(|| std::ffi::OsStr::new("tokensmith.log"));
    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer: BoxedLayer = if format.eq_ignore_ascii_case("json") {
        fmt::layer().json().with_writer(writer).with_ansi(false).boxed()
    } else {
        fmt::layer().with_writer(writer).with_ansi(false).boxed()
    };
    Ok((layer, guard))
}

/// Keeps the file writer's guard alive so buffered lines are flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

fn level_directive(level: &str) -> Result<Level, LoggingError> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        invalid => Err(LoggingError::InitializationError(format!(
            "Invalid log level in config: {}",
            invalid
        ))),
    }
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, a failure to replace an already installed subscriber
/// is reported on stderr and treated as success; the file guard is still
/// swapped so a changed `file_path` takes effect for the new writer.
///
/// # Errors
///
/// Returns `CoreError::LoggingInitialization` for an invalid level, or when a
/// subscriber is already installed and `is_reload` is false.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let level = level_directive(&config.level)?.to_string();

    let stdout_filter = EnvFilter::new(level.clone());
    let stdout_layer: BoxedLayer = if config.format.eq_ignore_ascii_case("json") {
        fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(stdout_filter)
            .boxed()
    } else {
        fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(stdout_filter)
            .boxed()
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_file_guard: Option<WorkerGuard> = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        new_file_guard = Some(guard);
        layers.push(file_layer.with_filter(EnvFilter::new(level)).boxed());
    }

    let result = Registry::default().with(layers).try_init();

    match LOG_WORKER_GUARD.lock() {
        Ok(mut slot) => *slot = new_file_guard,
        Err(e) => eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.", e),
    }

    match result {
        Ok(()) => Ok(()),
        Err(e) if is_reload => {
            eprintln!("[INFO] Logging re-initialization attempted; previous subscriber persists: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationError(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}
