use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_DATABASE_URL: &str = "sqlite://holocron.db?mode=rwc";
const DEFAULT_PORT: u16 = 3000;

pub struct Config {
    pub database_url: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let port = match std::env::var("PORT") {
            Ok(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidEnvVar("PORT".to_string()))?,
            Err(_) => DEFAULT_PORT,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            port,
        })
    }

    /// Socket address the HTTP listener binds to.
    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
