use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub artsy: ArtsySettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtsySettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    pub client_id: String,
    pub client_secret: String,
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String { crate::services::DEFAULT_BASE_URL.to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "compact".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with GALLERY_)
    /// 4. `ARTSY_CLIENT_ID` / `ARTSY_CLIENT_SECRET`
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            .add_source(File::with_name("config/default").required(false))
            // Local overrides for development, not checked in
            .add_source(File::with_name("config/local").required(false))
            // e.g., GALLERY__SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("GALLERY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = apply_credentials(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("GALLERY")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        apply_credentials(settings)?.try_deserialize()
    }
}

/// Let the conventional credential variables override the config tree
fn apply_credentials(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let client_id = env::var("ARTSY_CLIENT_ID").ok();
    let client_secret = env::var("ARTSY_CLIENT_SECRET").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(id) = client_id {
        builder = builder.set_override("artsy.client_id", id)?;
    }
    if let Some(secret) = client_secret {
        builder = builder.set_override("artsy.client_secret", secret)?;
    }

    builder.build()
}
