//! Configuration management for Spottr
//!
//! Handles environment variables and application settings.

use serde::{Deserialize, Serialize};
use std::env;
use tracing::info;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Environment (development, production)
    pub environment: String,

    /// Log level
    pub log_level: String,

    /// CORS origins (empty means allow all)
    pub cors_origins: Vec<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Enable request logging
    pub enable_request_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "development".to_string(),
            log_level: "info".to_string(),
            cors_origins: vec![],
            request_timeout: 30,
            enable_request_logging: true,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Server configuration
        if let Ok(host) = env::var("SPOTTR_HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("SPOTTR_PORT") {
            config.port = port.parse().map_err(|_| ConfigError::InvalidPort(port))?;
        }

        // Environment
        if let Ok(environment) = env::var("SPOTTR_ENVIRONMENT") {
            config.environment = environment;
        }

        // Logging
        if let Ok(log_level) = env::var("SPOTTR_LOG_LEVEL") {
            config.log_level = log_level;
        }

        // CORS origins
        if let Ok(cors_origins) = env::var("SPOTTR_CORS_ORIGINS") {
            config.cors_origins = cors_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
        }

        // Request timeout
        if let Ok(timeout) = env::var("SPOTTR_REQUEST_TIMEOUT") {
            config.request_timeout = timeout
                .parse()
                .map_err(|_| ConfigError::InvalidRequestTimeout(timeout))?;
        }

        // Feature flags
        if let Ok(enable_logging) = env::var("SPOTTR_ENABLE_REQUEST_LOGGING") {
            config.enable_request_logging = enable_logging
                .parse()
                .map_err(|_| ConfigError::InvalidBool(enable_logging))?;
        }

        // Validate configuration
        config.validate()?;

        Ok(config)
    }

    /// Validate configuration values
    fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port.to_string()));
        }

        if self.request_timeout == 0 {
            return Err(ConfigError::InvalidRequestTimeout(
                self.request_timeout.to_string(),
            ));
        }

        if self.environment != "development" && self.environment != "production" {
            return Err(ConfigError::InvalidEnvironment(self.environment.clone()));
        }

        Ok(())
    }

    /// Get server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get server URL
    pub fn server_url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    /// Check if running in development mode
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Check if running in production mode
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Get request timeout in milliseconds
    pub fn request_timeout_ms(&self) -> u64 {
        self.request_timeout * 1000
    }

    /// Log configuration
    pub fn log_config(&self) {
        info!("Configuration loaded:");
        info!("  Environment: {}", self.environment);
        info!("  Bind address: {}", self.bind_address());
        info!("  Log level: {}", self.log_level);
        info!("  CORS origins: {:?}", self.cors_origins);
        info!("  Request timeout: {}s", self.request_timeout);
        info!("  Request logging: {}", self.enable_request_logging);
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),

    #[error("Invalid request timeout: {0}")]
    InvalidRequestTimeout(String),

    #[error("Invalid boolean value: {0}")]
    InvalidBool(String),

    #[error("Invalid environment: {0}")]
    InvalidEnvironment(String),
}
