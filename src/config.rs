use crate::error::{config::ConfigError, AppError};

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// Application configuration loaded from environment variables.
pub struct Config {
    pub database_url: String,

    pub google_client_id: String,
    pub google_client_secret: String,
    pub google_redirect_url: String,

    pub google_auth_url: String,
    pub google_token_url: String,

    /// Origin allowed by CORS, the frontend consuming this API.
    pub frontend_url: String,

    /// Address the HTTP server binds to, e.g. `0.0.0.0:3000`.
    pub bind_address: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            google_client_id: std::env::var("GOOGLE_CLIENT_ID")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_ID".to_string()))?,
            google_client_secret: std::env::var("GOOGLE_CLIENT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_CLIENT_SECRET".to_string()))?,
            google_redirect_url: std::env::var("GOOGLE_REDIRECT_URL")
                .map_err(|_| ConfigError::MissingEnvVar("GOOGLE_REDIRECT_URL".to_string()))?,
            google_auth_url: GOOGLE_AUTH_URL.to_string(),
            google_token_url: GOOGLE_TOKEN_URL.to_string(),
            frontend_url: std::env::var("FRONTEND_URL")
                .map_err(|_| ConfigError::MissingEnvVar("FRONTEND_URL".to_string()))?,
            bind_address: std::env::var("BIND_ADDRESS")
                .unwrap_or_else(|_| "0.0.0.0:3000".to_string()),
        })
    }
}
