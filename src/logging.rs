use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;

/// Base name of the rolling log file.
pub const LOG_FILE_NAME: &str = "content-studio.log";

/// Logging setup
#[derive(Debug, Clone)]
pub struct LogConfig {
    /// EnvFilter directive (trace, debug, info, warn, error)
    pub level: String,
    pub log_dir: PathBuf,
    pub rotation: LogRotation,
    pub console_enabled: bool,
    pub file_enabled: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogRotation {
    #[default]
    Daily,
    Hourly,
    Never,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            log_dir: PathBuf::from("logs"),
            rotation: LogRotation::Daily,
            console_enabled: true,
            file_enabled: false,
        }
    }
}

impl LogConfig {
    pub fn from_server_config(server_config: &ServerConfig) -> Self {
        Self {
            level: server_config.log_level.clone(),
            log_dir: PathBuf::from(&server_config.log_dir),
            rotation: server_config.log_rotation,
            console_enabled: true,
            file_enabled: server_config.file_logging,
        }
    }

    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    pub fn with_log_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.log_dir = dir.into();
        self
    }

    pub fn with_rotation(mut self, rotation: LogRotation) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_console(mut self, enabled: bool) -> Self {
        self.console_enabled = enabled;
        self
    }

    pub fn with_file(mut self, enabled: bool) -> Self {
        self.file_enabled = enabled;
        self
    }

    /// Filter built from `level`, falling back to `info` on a bad directive.
    pub fn env_filter(&self) -> EnvFilter {
        EnvFilter::try_new(&self.level).unwrap_or_else(|_| EnvFilter::new("info"))
    }
}

fn ensure_log_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

fn file_appender(config: &LogConfig) -> rolling::RollingFileAppender {
    match config.rotation {
        LogRotation::Daily => rolling::daily(&config.log_dir, LOG_FILE_NAME),
        LogRotation::Hourly => rolling::hourly(&config.log_dir, LOG_FILE_NAME),
        LogRotation::Never => rolling::never(&config.log_dir, LOG_FILE_NAME),
    }
}

/// Install the global subscriber.
///
/// When file output is enabled the returned guard flushes the background
/// writer on drop; hold it for the life of the process.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let env_filter = config.env_filter();

    let guard = match (config.console_enabled, config.file_enabled) {
        (true, true) => {
            ensure_log_dir(&config.log_dir)?;
            let (writer, guard) = non_blocking(file_appender(config));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr.and(writer))
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true)
                .try_init()
                .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
            Some(guard)
        }
        (false, true) => {
            ensure_log_dir(&config.log_dir)?;
            let (writer, guard) = non_blocking(file_appender(config));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .try_init()
                .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
            Some(guard)
        }
        (true, false) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(true)
                .try_init()
                .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
            None
        }
        (false, false) => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .try_init()
                .map_err(|e| anyhow!("Failed to install subscriber: {}", e))?;
            None
        }
    };

    tracing::info!("📝 Logging initialized (level: {})", config.level);
    if config.file_enabled {
        tracing::info!("📂 Log directory: {}", config.log_dir.display());
    }

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_server_config() {
        let server = ServerConfig {
            log_level: "debug".to_string(),
            log_dir: "/tmp/cs-logs".to_string(),
            file_logging: true,
            log_rotation: LogRotation::Never,
            ..Default::default()
        };
        let config = LogConfig::from_server_config(&server);
        assert_eq!(config.level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/cs-logs"));
        assert_eq!(config.rotation, LogRotation::Never);
        assert!(config.file_enabled);
        assert!(config.console_enabled);
    }

    #[test]
    fn test_builders() {
        let config = LogConfig::default()
            .with_level("warn")
            .with_console(false)
            .with_file(true)
            .with_rotation(LogRotation::Hourly)
            .with_log_dir("var/log");
        assert_eq!(config.level, "warn");
        assert!(!config.console_enabled);
        assert!(config.file_enabled);
        assert_eq!(config.rotation, LogRotation::Hourly);
        assert_eq!(config.log_dir, PathBuf::from("var/log"));
    }

    #[test]
    fn test_file_logging_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("nested").join("logs");
        ensure_log_dir(&log_dir).unwrap();
        assert!(log_dir.is_dir());
    }

    #[test]
    fn test_quiet_mode_honors_configured_level() {
        let config = LogConfig::default()
            .with_level("debug")
            .with_console(false)
            .with_file(false);
        let guard = init_logging(&config).unwrap();
        assert!(guard.is_none());
        assert!(tracing::enabled!(tracing::Level::DEBUG));
        assert!(!tracing::enabled!(tracing::Level::TRACE));
    }
}
