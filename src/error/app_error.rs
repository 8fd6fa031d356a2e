use std::fmt;

#[derive(Debug)]
pub enum AppError {
    ConfigError(String),
    Validation(String),
    Network(reqwest::Error),
    Api { status: u16, message: String },
    Unauthorized(String),
    Decode(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AppError::Validation(msg) => write!(f, "{}", msg),
            AppError::Network(e) => write!(f, "Network error: {}", e),
            AppError::Api { status, message } => {
                write!(f, "Request failed ({}): {}", status, message)
            }
            AppError::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            AppError::Decode(msg) => write!(f, "Unexpected response format: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Network(err)
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

impl AppError {
    /// By the time a caller sees this variant the session has already been
    /// cleared; the only recovery is signing in again.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, AppError::Unauthorized(_))
    }
}
