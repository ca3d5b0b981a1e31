// Layered configuration: defaults, then redressal.toml, then REDRESSAL__* env vars

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Plain,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Postgres URL. Without one the in-memory adapters are used.
    #[serde(default)]
    pub database_url: Option<String>,
    pub max_connections: u32,
    pub log_level: String,
    pub log_format: LogFormat,
    pub session_ttl_hours: i64,
    /// Session token to resume on launch, as a stored client session would.
    #[serde(default)]
    pub restore_session_token: Option<String>,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        Self::builder()?
            .add_source(File::with_name("redressal").required(false))
            .add_source(Environment::with_prefix("REDRESSAL").separator("__"))
            .build()?
            .try_deserialize()
    }

    fn builder() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        Config::builder()
            .set_default("max_connections", 5)?
            .set_default("log_level", "info")?
            .set_default("log_format", "plain")?
            .set_default("session_ttl_hours", 24 * 7)
    }

    pub fn uses_database(&self) -> bool {
        self.database_url.as_deref().is_some_and(|url| !url.trim().is_empty())
    }
}
