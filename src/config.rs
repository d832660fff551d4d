use crate::error::{config::ConfigError, AppError};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_JWT_EXPIRE_SECS: i64 = 86_400;
const DEFAULT_PROVINCE_API_URL: &str = "https://vietnamlabs.com/api/vietnamprovince";

pub struct Config {
    pub database_url: String,
    pub listen_addr: String,

    pub jwt_secret: String,
    pub jwt_expire_secs: i64,

    pub smtp_host: String,
    pub smtp_username: String,
    pub smtp_password: String,
    pub smtp_from: String,

    pub province_api_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            listen_addr: std::env::var("LISTEN_ADDR")
                .unwrap_or_else(|_| DEFAULT_LISTEN_ADDR.to_string()),
            jwt_secret: std::env::var("JWT_SECRET")
                .map_err(|_| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?,
            jwt_expire_secs: match std::env::var("JWT_EXPIRE_SECS") {
                Ok(value) => value
                    .parse()
                    .map_err(|_| ConfigError::InvalidEnvVar("JWT_EXPIRE_SECS".to_string()))?,
                Err(_) => DEFAULT_JWT_EXPIRE_SECS,
            },
            smtp_host: std::env::var("SMTP_HOST")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_HOST".to_string()))?,
            smtp_username: std::env::var("SMTP_USERNAME")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_USERNAME".to_string()))?,
            smtp_password: std::env::var("SMTP_PASSWORD")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_PASSWORD".to_string()))?,
            smtp_from: std::env::var("SMTP_FROM")
                .map_err(|_| ConfigError::MissingEnvVar("SMTP_FROM".to_string()))?,
            province_api_url: std::env::var("PROVINCE_API_URL")
                .unwrap_or_else(|_| DEFAULT_PROVINCE_API_URL.to_string()),
        })
    }
}
