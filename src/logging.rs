//! Logging initialization: console output plus optional daily-rotated file.

use std::fs;
use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use crate::error::Result;

/// Logging configuration
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,
    /// Directory for rotated log files; `None` disables file output
    pub log_dir: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: None,
        }
    }
}

impl LogConfig {
    /// Derive the logging configuration from the server configuration
    pub fn from_server_config(server: &crate::config::ServerConfig) -> Self {
        let mut config = Self::default();

        if let Some(ref level) = server.log_level {
            config.level = level.clone();
        }

        if let Some(ref dir) = server.log_dir {
            config.log_dir = Some(PathBuf::from(dir));
        }

        config
    }
}

/// Initialize the tracing subscriber.
///
/// When file output is enabled the returned guard must be held for the life of
/// the process so buffered log lines are flushed on shutdown.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_new(&config.level).unwrap_or_else(|_| EnvFilter::new("info"));

    match &config.log_dir {
        Some(dir) => {
            ensure_log_dir(dir)?;

            let file_appender = rolling::daily(dir, "blogsmith.log");
            let (writer, guard) = non_blocking(file_appender);

            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr.and(writer))
                .with_target(true)
                .init();

            tracing::info!("Logging to console and {}", dir.display());
            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(true)
                .init();

            Ok(None)
        }
    }
}

fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
