use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub store: StoreSettings,
    pub collection: CollectionSettings,
    pub notifier: NotifierSettings,
    pub matching: MatchingSettings,
    pub scoring: ScoringSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Connection details for the platform's document store API
#[derive(Debug, Clone, Deserialize)]
pub struct StoreSettings {
    pub endpoint: String,
    pub api_key: String,
    pub project_id: String,
    pub database_id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CollectionSettings {
    pub lost_items: String,
    pub found_items: String,
}

/// Notification intake endpoint for match alerts
#[derive(Debug, Clone, Deserialize)]
pub struct NotifierSettings {
    pub endpoint: String,
    pub api_key: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MatchingSettings {
    pub candidate_limit: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeightsConfig {
    #[serde(default = "default_category_weight")]
    pub category: f64,
    #[serde(default = "default_location_weight")]
    pub location: f64,
    #[serde(default = "default_date_weight")]
    pub date: f64,
    #[serde(default = "default_description_weight")]
    pub description: f64,
    #[serde(default = "default_name_weight")]
    pub name: f64,
    #[serde(default = "default_color_weight")]
    pub color: f64,
    #[serde(default = "default_brand_weight")]
    pub brand: f64,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            category: default_category_weight(),
            location: default_location_weight(),
            date: default_date_weight(),
            description: default_description_weight(),
            name: default_name_weight(),
            color: default_color_weight(),
            brand: default_brand_weight(),
        }
    }
}

fn default_category_weight() -> f64 { 30.0 }
fn default_location_weight() -> f64 { 20.0 }
fn default_date_weight() -> f64 { 20.0 }
fn default_description_weight() -> f64 { 30.0 }
fn default_name_weight() -> f64 { 10.0 }
fn default_color_weight() -> f64 { 5.0 }
fn default_brand_weight() -> f64 { 5.0 }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with FINDER_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with FINDER_)
            // e.g., FINDER_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("FINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        // Apply credential overrides from the environment
        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("FINDER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Apply store and notifier credentials from environment variables
///
/// Secrets normally arrive through the environment rather than config files.
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let store_endpoint = env::var("FINDER_STORE__ENDPOINT").ok();
    // APPWRITE_API_KEY is the conventional name in platform deployments
    let store_api_key = env::var("FINDER_STORE__API_KEY")
        .or_else(|_| env::var("APPWRITE_API_KEY"))
        .ok();
    let store_project_id = env::var("FINDER_STORE__PROJECT_ID").ok();
    let store_database_id = env::var("FINDER_STORE__DATABASE_ID").ok();
    let notifier_endpoint = env::var("FINDER_NOTIFIER__ENDPOINT").ok();
    let notifier_api_key = env::var("FINDER_NOTIFIER__API_KEY").ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(endpoint) = store_endpoint {
        builder = builder.set_override("store.endpoint", endpoint)?;
    }
    if let Some(api_key) = store_api_key {
        builder = builder.set_override("store.api_key", api_key)?;
    }
    if let Some(project_id) = store_project_id {
        builder = builder.set_override("store.project_id", project_id)?;
    }
    if let Some(database_id) = store_database_id {
        builder = builder.set_override("store.database_id", database_id)?;
    }
    if let Some(endpoint) = notifier_endpoint {
        builder = builder.set_override("notifier.endpoint", endpoint)?;
    }
    if let Some(api_key) = notifier_api_key {
        builder = builder.set_override("notifier.api_key", api_key)?;
    }

    builder.build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights() {
        let weights = WeightsConfig::default();
        assert_eq!(weights.category, 30.0);
        assert_eq!(weights.location, 20.0);
        assert_eq!(weights.date, 20.0);
        assert_eq!(weights.description, 30.0);
        assert_eq!(weights.name, 10.0);
        assert_eq!(weights.color, 5.0);
        assert_eq!(weights.brand, 5.0);
    }

    #[test]
    fn test_default_logging() {
        let level = default_log_level();
        let format = default_log_format();
        assert_eq!(level, "info");
        assert_eq!(format, "json");
    }
}
