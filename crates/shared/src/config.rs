//! Application configuration management.

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// In-memory data configuration.
    #[serde(default)]
    pub data: DataConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

/// In-memory data configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Seed every collection with the sample rows at startup.
    #[serde(default = "default_seed_sample_data")]
    pub seed_sample_data: bool,
    /// Take-limit applied to the audit log listing when the caller gives none.
    #[serde(default = "default_audit_log_limit")]
    pub audit_log_default_limit: usize,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            seed_sample_data: default_seed_sample_data(),
            audit_log_default_limit: default_audit_log_limit(),
        }
    }
}

fn default_seed_sample_data() -> bool {
    true
}

fn default_audit_log_limit() -> usize {
    100
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// Sources, lowest precedence first: `config/default`, `config/{RUN_MODE}`,
    /// then `WEBADMIN__SECTION__KEY` environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix("WEBADMIN")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}
