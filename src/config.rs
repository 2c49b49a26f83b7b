//! Service configuration: defaults, optional TOML file, environment overrides.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

#[derive(Debug, Deserialize, Serialize)]
pub struct BlogsmithConfig {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ServerConfig {
    pub bind_addr: Option<String>,
    pub log_level: Option<String>,
    /// Directory for rotated log files; unset disables file logging
    pub log_dir: Option<String>,
}

impl Default for BlogsmithConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                bind_addr: Some("127.0.0.1:8080".to_string()),
                log_level: Some("info".to_string()),
                log_dir: None,
            },
        }
    }
}

impl BlogsmithConfig {
    /// Load configuration, layering defaults, an optional TOML file, and
    /// environment variables (`BLOGSMITH_SERVER_*`, plus `BIND_ADDR` for
    /// compatibility with container setups).
    pub fn load(path: Option<&str>) -> Result<Self> {
        let mut settings = config::Config::builder();

        settings = settings.add_source(
            config::Config::try_from(&BlogsmithConfig::default())
                .map_err(|e| Error::Config(e.to_string()))?,
        );

        if let Some(path) = path {
            settings = settings.add_source(config::File::with_name(path));
        } else {
            let config_paths = ["blogsmith.toml", "config.toml", "config/blogsmith.toml"];
            for candidate in &config_paths {
                if std::path::Path::new(candidate).exists() {
                    settings = settings.add_source(config::File::with_name(candidate));
                    break;
                }
            }
        }

        settings = settings.add_source(
            config::Environment::with_prefix("BLOGSMITH")
                .separator("_")
                .try_parsing(true),
        );

        let mut config: BlogsmithConfig = settings
            .build()
            .and_then(|built| built.try_deserialize())
            .map_err(|e| Error::Config(e.to_string()))?;

        if let Ok(bind_addr) = std::env::var("BIND_ADDR") {
            config.server.bind_addr = Some(bind_addr);
        }

        Ok(config)
    }
}
