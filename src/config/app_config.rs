use crate::error::{AppError, Result};
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub login: Option<LoginConfig>,
}

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

#[derive(Debug, Clone)]
pub struct LoginConfig {
    pub email: String,
    pub password: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        let login = match (env::var("STORE_EMAIL"), env::var("STORE_PASSWORD")) {
            (Ok(email), Ok(password)) => Some(LoginConfig { email, password }),
            _ => None,
        };

        Ok(Self {
            api: ApiConfig {
                base_url: env::var("API_BASE_URL")
                    .map_err(|_| AppError::ConfigError("API_BASE_URL not set".to_string()))?,
                timeout_secs: env::var("API_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .map_err(|_| {
                        AppError::ConfigError("Invalid API_TIMEOUT_SECS value".to_string())
                    })?,
            },
            login,
        })
    }
}
