//! Service configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional TOML
//! file, then `CONTENT_STUDIO__*` environment variables, then the legacy
//! `BIND_ADDR` variable.

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::logging::LogRotation;

/// Files probed, in order, when no explicit path is given.
pub const DEFAULT_CONFIG_PATHS: &[&str] = &["content-studio", "config/content-studio"];

/// Prefix for environment overrides, e.g. `CONTENT_STUDIO__SERVER__BIND_ADDR`.
pub const ENV_PREFIX: &str = "CONTENT_STUDIO";

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// EnvFilter directive (trace, debug, info, warn, error, or per-target)
    pub log_level: String,
    pub log_dir: String,
    pub file_logging: bool,
    pub log_rotation: LogRotation,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8080".to_string(),
            log_level: "info".to_string(),
            log_dir: "logs".to_string(),
            file_logging: false,
            log_rotation: LogRotation::Daily,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CorsConfig {
    /// Answer preflight requests and attach CORS headers to every response
    pub enabled: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl AppConfig {
    /// Load from `path` (or the default locations) with environment overrides.
    pub fn load(path: Option<&str>) -> Result<Self> {
        ConfigLoader::new().load_from_file(path).load_from_env().build()
    }

    /// Annotated sample configuration file.
    pub fn sample_toml() -> Result<String> {
        let body = toml::to_string_pretty(&AppConfig::default())
            .map_err(|e| {
                Error::Config(format!("Failed to serialize default configuration: {}", e))
            })?;

        Ok(format!(
            r#"# content-studio configuration
#
# Save as content-studio.toml or config/content-studio.toml, or pass --config.
# Environment variables override file values, e.g.
#   CONTENT_STUDIO__SERVER__BIND_ADDR=0.0.0.0:8080
#   CONTENT_STUDIO__SERVER__LOG_LEVEL=debug

{}
# [server]
# bind_addr    = listen address for the HTTP API
# log_level    = tracing filter (trace, debug, info, warn, error)
# log_dir      = directory for rolling log files
# file_logging = also write logs to log_dir
# log_rotation = daily, hourly or never
#
# [cors]
# enabled = answer browser preflight requests from any origin
"#,
            body
        ))
    }
}

/// Configuration loader with builder pattern
pub struct ConfigLoader {
    config_file: Option<String>,
    load_env: bool,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self {
            config_file: None,
            load_env: false,
        }
    }

    /// Use an explicit file instead of probing the default locations.
    /// An explicit file must exist.
    pub fn load_from_file(mut self, path: Option<&str>) -> Self {
        self.config_file = path.map(String::from);
        self
    }

    pub fn load_from_env(mut self) -> Self {
        self.load_env = true;
        self
    }

    pub fn build(self) -> Result<AppConfig> {
        let defaults = Config::try_from(&AppConfig::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);

        if let Some(config_path) = &self.config_file {
            builder = builder.add_source(File::with_name(config_path).required(true));
        } else {
            for candidate in DEFAULT_CONFIG_PATHS {
                builder = builder.add_source(File::with_name(candidate).required(false));
            }
        }

        if self.load_env {
            builder = builder.add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );
        }

        let mut config: AppConfig = builder
            .build()
            .map_err(config_error)?
            .try_deserialize()
            .map_err(config_error)?;

        if self.load_env {
            if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
                config.server.bind_addr = bind_addr;
            }
        }

        Ok(config)
    }
}

fn config_error(e: ConfigError) -> Error {
    Error::Config(e.to_string())
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.bind_addr, "127.0.0.1:8080");
        assert_eq!(config.server.log_level, "info");
        assert!(!config.server.file_logging);
        assert!(config.cors.enabled);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[server]\nbind_addr = \"0.0.0.0:9000\"\nlog_rotation = \"hourly\"\n\n[cors]\nenabled = false"
        )
        .unwrap();

        let config = ConfigLoader::new()
            .load_from_file(file.path().to_str())
            .build()
            .unwrap();

        assert_eq!(config.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(config.server.log_rotation, LogRotation::Hourly);
        assert_eq!(config.server.log_level, "info");
        assert!(!config.cors.enabled);
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = ConfigLoader::new()
            .load_from_file(Some("/nonexistent/content-studio.toml"))
            .build();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_environment_layers() {
        let saved_bind = std::env::var("BIND_ADDR").ok();
        std::env::remove_var("BIND_ADDR");
        std::env::set_var("CONTENT_STUDIO__SERVER__BIND_ADDR", "0.0.0.0:7100");
        std::env::set_var("CONTENT_STUDIO__SERVER__LOG_DIR", "/var/log/content-studio-env");

        let from_prefix = ConfigLoader::new().load_from_env().build();

        std::env::set_var("BIND_ADDR", "127.0.0.1:7200");
        let from_legacy = ConfigLoader::new().load_from_env().build();
        let without_env = ConfigLoader::new().build();

        std::env::remove_var("CONTENT_STUDIO__SERVER__BIND_ADDR");
        std::env::remove_var("CONTENT_STUDIO__SERVER__LOG_DIR");
        match saved_bind {
            Some(value) => std::env::set_var("BIND_ADDR", value),
            None => std::env::remove_var("BIND_ADDR"),
        }

        let from_prefix = from_prefix.unwrap();
        assert_eq!(from_prefix.server.bind_addr, "0.0.0.0:7100");
        assert_eq!(from_prefix.server.log_dir, "/var/log/content-studio-env");

        let from_legacy = from_legacy.unwrap();
        assert_eq!(from_legacy.server.bind_addr, "127.0.0.1:7200");
        assert_eq!(from_legacy.server.log_dir, "/var/log/content-studio-env");

        assert_eq!(without_env.unwrap(), AppConfig::default());
    }

    #[test]
    fn test_sample_round_trips() {
        let sample = AppConfig::sample_toml().unwrap();
        let parsed: AppConfig = toml::from_str(&sample).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }
}
