use std::env;

use crate::error::AppError;

/// Listen address for the HTTP server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    /// `HOST` (default `0.0.0.0`) and `PORT` (default `8080`).
    pub fn from_env() -> Result<Self, AppError> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = match env::var("PORT") {
            Ok(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| AppError::config(format!("PORT must be a valid port number, got '{raw}'")))?,
            Err(_) => 8080,
        };
        Ok(Self { host, port })
    }
}
