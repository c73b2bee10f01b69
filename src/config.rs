use std::env;

/// Settings read from the process environment after `.env` is loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub log_level: String,
    pub database_url: Option<String>,
}

impl AppConfig {
    pub fn load() -> Self {
        dotenvy::dotenv().ok();
        Self::from_env()
    }

    pub fn from_env() -> Self {
        let log_level = env::var("MAVERICK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
        let database_url = env::var("DATABASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty());

        Self {
            log_level,
            database_url,
        }
    }
}
