use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub catalog: CatalogConfig,
    pub export: ExportConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct CatalogConfig {
    /// Path of the route catalog CSV (BusNo,Source,Destination,Time,Fare).
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ExportConfig {
    /// Destination path for the booking snapshot CSV.
    pub path: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Row cap for the recent-bookings and recent-logs listings.
    #[serde(default = "default_recent_limit")]
    pub recent_limit: i64,
}

fn default_recent_limit() -> i64 {
    20
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `FAREBOX__DATABASE__URL=...` overrides database.url
            .add_source(config::Environment::with_prefix("FAREBOX").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
