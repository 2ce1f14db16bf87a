// src/logging.rs

//! Structured logging setup
//!
//! Desktop builds log through `tracing-subscriber` with an optional console
//! layer and an optional daily-rolling file layer. Browser builds forward
//! `tracing` events to the developer console through `tracing-wasm`.

use crate::config::LoggingConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::error::{Error, Result, ResultExt};

#[cfg(not(target_arch = "wasm32"))]
use tracing_appender::non_blocking::WorkerGuard;
#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt, layer::Identity, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
    Registry,
};

/// Keeps the background log writers alive. Dropping it flushes pending lines.
#[derive(Debug, Default)]
pub struct LoggingGuard {
    #[cfg(not(target_arch = "wasm32"))]
    _guards: Vec<WorkerGuard>,
}

#[cfg(not(target_arch = "wasm32"))]
fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&config.level).map_err(|e| {
            Error::config(format!("Invalid log level '{}': {}", config.level, e))
        }),
    }
}

/// Builds the subscriber without installing it
#[cfg(not(target_arch = "wasm32"))]
pub fn build_subscriber(
    config: &LoggingConfig,
) -> Result<(impl tracing::Subscriber + Send + Sync + 'static, LoggingGuard)> {
    use crate::config::LogFormat;

    let mut guard = LoggingGuard::default();
    let registry = Registry::default().with(build_filter(config)?);

    let registry = if config.console.enabled {
        let console_layer = match config.format {
            LogFormat::Json => fmt::layer().json().with_target(true).boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_ansi(config.console.colored)
                .with_target(true)
                .boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_ansi(config.console.colored)
                .with_target(true)
                .with_line_number(true)
                .with_file(true)
                .boxed(),
        };
        registry.with(console_layer)
    } else {
        registry.with(Identity::new().boxed())
    };

    let registry = if let Some(file_config) = &config.file {
        let directory = file_config
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| std::path::Path::new("."));
        let file_name = file_config
            .path
            .file_name()
            .unwrap_or_else(|| std::ffi::OsStr::new("freshveg.log"));

        std::fs::create_dir_all(directory).map_err(|e| {
            Error::from(e).caused_by(format!(
                "Failed to create log directory: {}",
                directory.display()
            ))
        })?;

        let file_appender = tracing_appender::rolling::daily(directory, file_name);
        let (non_blocking, worker_guard) = tracing_appender::non_blocking(file_appender);
        guard._guards.push(worker_guard);

        let file_layer = match config.format {
            LogFormat::Json => fmt::layer().json().with_writer(non_blocking).boxed(),
            LogFormat::Pretty => fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed(),
            LogFormat::Compact => fmt::layer()
                .compact()
                .with_ansi(false)
                .with_writer(non_blocking)
                .boxed(),
        };
        registry.with(file_layer)
    } else {
        registry.with(Identity::new().boxed())
    };

    Ok((registry, guard))
}

/// Installs the global subscriber. Keep the returned guard alive for the
/// lifetime of the process.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(config: &LoggingConfig) -> Result<LoggingGuard> {
    let (subscriber, guard) = build_subscriber(config)?;
    subscriber
        .try_init()
        .with_context(|| "Failed to install log subscriber".to_string())?;

    tracing::debug!(level = %config.level, file = config.file.is_some(), "Logging initialized");
    Ok(guard)
}

/// Routes `tracing` output to the browser console. Safe to call twice.
#[cfg(target_arch = "wasm32")]
pub fn init(_config: &LoggingConfig) -> LoggingGuard {
    // A second call only fails because a subscriber is already set
    let _ = tracing_wasm::try_set_as_global_default();
    LoggingGuard::default()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use crate::config::{ConsoleLogConfig, FileLogConfig, LogFormat};
    use crate::error::ErrorKind;

    fn quiet_config() -> LoggingConfig {
        LoggingConfig {
            level: "debug".to_string(),
            format: LogFormat::Compact,
            console: ConsoleLogConfig {
                enabled: false,
                colored: false,
            },
            file: None,
        }
    }

    #[test]
    fn test_invalid_level_is_a_config_error() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let mut config = quiet_config();
        config.level = "freshveg=[[".to_string();

        let err = build_filter(&config).unwrap_err();
        assert!(matches!(err.kind, ErrorKind::Configuration { .. }));
    }

    #[test]
    fn test_file_layer_writes_to_rolling_file() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = quiet_config();
        config.format = LogFormat::Json;
        config.file = Some(FileLogConfig {
            path: dir.path().join("store").join("freshveg.log"),
        });

        let (subscriber, guard) = build_subscriber(&config).unwrap();
        tracing::subscriber::with_default(subscriber, || {
            tracing::info!(product_id = "1", "added to cart");
        });
        drop(guard);

        let written: Vec<_> = std::fs::read_dir(dir.path().join("store"))
            .unwrap()
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_name().to_string_lossy().starts_with("freshveg.log"))
            .collect();
        assert_eq!(written.len(), 1);

        let content = std::fs::read_to_string(written[0].path()).unwrap();
        assert!(content.contains("added to cart"));
    }
}
