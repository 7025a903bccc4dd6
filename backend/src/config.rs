//! Configuration management for the Herb Trace Platform
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (development.toml, production.toml)
//! 3. Environment variable overrides with HTR_ prefix

use config::{ConfigError, Environment, File};
use serde::Deserialize;

/// Secret used when no JWT secret is configured; refused in production
pub const DEVELOPMENT_JWT_SECRET: &str = "development-secret-key";

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Current environment (development, production)
    pub environment: String,

    /// Server configuration
    pub server: ServerConfig,

    /// Viewer token configuration
    pub auth: AuthConfig,

    /// Seed data configuration
    pub data: DataConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Server port
    pub port: u16,

    /// Server host
    pub host: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Secret key for verifying viewer JWT tokens
    pub jwt_secret: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DataConfig {
    /// Path to the JSON file holding farms, plants, packages and applications
    pub seed_path: String,
}

impl Config {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment = std::env::var("HTR_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("server.port", 3000)?
            .set_default("server.host", "0.0.0.0")?
            .set_default("auth.jwt_secret", DEVELOPMENT_JWT_SECRET)?
            .set_default("data.seed_path", "data/seed.json")?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (HTR_ prefix)
            .add_source(
                Environment::with_prefix("HTR")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Reject settings that are only acceptable during development
    pub fn validate(&self) -> Result<(), String> {
        if self.is_production() && self.auth.jwt_secret == DEVELOPMENT_JWT_SECRET {
            return Err("auth.jwt_secret must be set in production".to_string());
        }
        if self.auth.jwt_secret.is_empty() {
            return Err("auth.jwt_secret must not be empty".to_string());
        }
        Ok(())
    }

    /// Configuration for tests and local tooling
    pub fn development(seed_path: impl Into<String>) -> Self {
        Self {
            environment: "development".to_string(),
            server: ServerConfig::default(),
            auth: AuthConfig {
                jwt_secret: DEVELOPMENT_JWT_SECRET.to_string(),
            },
            data: DataConfig {
                seed_path: seed_path.into(),
            },
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            host: "0.0.0.0".to_string(),
        }
    }
}
