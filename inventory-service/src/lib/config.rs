use std::env;

use config::Config as ConfigBuilder;
use config::ConfigError;
use config::Environment;
use config::File;
use serde::Deserialize;

/// Application configuration for inventory-service.
///
/// Loaded from configuration files with environment variable overrides.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub jwt: JwtConfig,
    #[serde(default)]
    pub password: PasswordConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub http_port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub expiration_minutes: i64,
}

/// Argon2 cost parameters. Defaults match the argon2 crate defaults.
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            memory_kib: 19 * 1024,
            iterations: 2,
            parallelism: 1,
        }
    }
}

/// Longest accepted token lifetime: one year.
const MAX_EXPIRATION_MINUTES: i64 = 366 * 24 * 60;

fn default_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from files with environment variable overrides
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (DATABASE__URL, JWT__SECRET, etc.)
    /// 2. Environment-specific config file (config/{environment}.toml)
    /// 3. Default config file (config/default.toml)
    pub fn load() -> Result<Self, ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let configuration = ConfigBuilder::builder()
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // Example: JWT__SECRET=... overrides jwt.secret
            .add_source(Environment::with_prefix("").separator("__"))
            .build()?;

        let config: Config = configuration.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    /// Reject settings the service cannot run safely with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jwt.secret.is_empty() {
            return Err(ConfigError::Message("jwt.secret must not be empty".to_string()));
        }

        if !(1..=MAX_EXPIRATION_MINUTES).contains(&self.jwt.expiration_minutes) {
            return Err(ConfigError::Message(format!(
                "jwt.expiration_minutes must be between 1 and {}, got {}",
                MAX_EXPIRATION_MINUTES, self.jwt.expiration_minutes
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(secret: &str, expiration_minutes: i64) -> Config {
        Config {
            database: DatabaseConfig {
                url: "postgresql://localhost/inventory".to_string(),
                max_connections: default_max_connections(),
            },
            server: ServerConfig { http_port: 3000 },
            jwt: JwtConfig {
                secret: secret.to_string(),
                expiration_minutes,
            },
            password: PasswordConfig::default(),
        }
    }

    #[test]
    fn test_validate_accepts_sane_config() {
        assert!(config("a-secret", 60).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_secret() {
        assert!(config("", 60).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_positive_expiration() {
        assert!(config("a-secret", 0).validate().is_err());
    }

    #[test]
    fn test_validate_rejects_excessive_expiration() {
        assert!(config("a-secret", MAX_EXPIRATION_MINUTES).validate().is_ok());
        assert!(config("a-secret", MAX_EXPIRATION_MINUTES + 1).validate().is_err());
        assert!(config("a-secret", 1_000_000_000_000).validate().is_err());
    }
}
