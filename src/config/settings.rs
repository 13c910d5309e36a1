//! Configuration settings structures.
//!
//! All settings can be loaded from TOML files and overridden through
//! `SHAREBNB_*` environment variables.

use serde::{Deserialize, Serialize};

use crate::config::error::ConfigError;

// ============================================================================
// Default value functions
// ============================================================================

fn default_app_name() -> String {
    "sharebnb".to_string()
}

fn default_app_version() -> String {
    crate::pkg_version().to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_connection_timeout() -> u64 {
    30
}

fn default_jwt_secret() -> String {
    String::new()
}

fn default_token_expiration() -> i64 {
    24 // hours
}

fn default_storage_region() -> String {
    "us-east-1".to_string()
}

fn default_upload_timeout() -> u64 {
    30
}

fn default_upload_retries() -> u32 {
    2
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "compact".to_string()
}

// ============================================================================
// Application
// ============================================================================

/// Application identity settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationConfig {
    /// Application name used in logs
    #[serde(default = "default_app_name")]
    pub name: String,

    /// Application version (defaults to the built crate version)
    #[serde(default = "default_app_version")]
    pub version: String,
}

impl Default for ApplicationConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
            version: default_app_version(),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind host
    #[serde(default = "default_host")]
    pub host: String,

    /// Bind port
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// The `host:port` string the listener binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Validate server settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::validation("server.host", "Host cannot be empty"));
        }
        if self.port == 0 {
            return Err(ConfigError::validation("server.port", "Port cannot be 0"));
        }
        Ok(())
    }
}

// ============================================================================
// Database
// ============================================================================

/// Database connection settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// PostgreSQL connection URL
    #[serde(default)]
    pub url: String,

    /// Maximum pool size
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,

    /// Minimum idle connections kept in the pool
    #[serde(default = "default_min_connections")]
    pub min_connections: u32,

    /// Seconds to wait for a free connection
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: String::new(),
            max_connections: default_max_connections(),
            min_connections: default_min_connections(),
            connection_timeout: default_connection_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Validate database settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.trim().is_empty() {
            return Err(ConfigError::validation(
                "database.url",
                "Database URL must be configured",
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::validation(
                "database.max_connections",
                "Pool size must be positive",
            ));
        }
        if self.min_connections > self.max_connections {
            return Err(ConfigError::validation(
                "database.min_connections",
                "Minimum connections cannot exceed maximum connections",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// JWT
// ============================================================================

/// Token issuance settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtConfig {
    /// Symmetric signing secret
    #[serde(default = "default_jwt_secret")]
    pub secret: String,

    /// Token validity in hours
    #[serde(default = "default_token_expiration")]
    pub token_expiration: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: default_jwt_secret(),
            token_expiration: default_token_expiration(),
        }
    }
}

impl JwtConfig {
    /// Validate JWT settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.secret.len() < 32 {
            return Err(ConfigError::validation(
                "jwt.secret",
                "JWT secret must be at least 32 characters",
            ));
        }
        if self.token_expiration <= 0 {
            return Err(ConfigError::validation(
                "jwt.token_expiration",
                "Token expiration must be positive",
            ));
        }
        Ok(())
    }
}

// ============================================================================
// Object storage
// ============================================================================

/// Object storage settings.
///
/// Credentials are resolved by the AWS SDK from the standard environment
/// variables and are intentionally absent here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Bucket receiving uploaded images
    #[serde(default)]
    pub bucket: String,

    /// Bucket region
    #[serde(default = "default_storage_region")]
    pub region: String,

    /// Custom endpoint for S3-compatible stores (MinIO, localstack)
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Public base URL override; defaults to the S3 virtual-host convention
    #[serde(default)]
    pub public_base_url: Option<String>,

    /// Seconds before an in-flight upload is abandoned
    #[serde(default = "default_upload_timeout")]
    pub upload_timeout: u64,

    /// Retries after a failed object-store write
    #[serde(default = "default_upload_retries")]
    pub upload_retries: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            bucket: String::new(),
            region: default_storage_region(),
            endpoint: None,
            public_base_url: None,
            upload_timeout: default_upload_timeout(),
            upload_retries: default_upload_retries(),
        }
    }
}

impl StorageConfig {
    /// Validate storage settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bucket.trim().is_empty() {
            return Err(ConfigError::validation(
                "storage.bucket",
                "Storage bucket must be configured",
            ));
        }
        if self.upload_timeout == 0 {
            return Err(ConfigError::validation(
                "storage.upload_timeout",
                "Upload timeout must be positive",
            ));
        }
        Ok(())
    }

    /// Base URL objects are publicly served from.
    pub fn public_base(&self) -> String {
        match &self.public_base_url {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("https://{}.s3.{}.amazonaws.com", self.bucket, self.region),
        }
    }
}

// ============================================================================
// Logger
// ============================================================================

/// Logger configuration settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Log level: "trace", "debug", "info", "warn", "error"
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Log format: "compact", "pretty", or "json"
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggerConfig {
    /// Validate logger settings.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self.level.to_lowercase().as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            other => {
                return Err(ConfigError::validation(
                    "logger.level".to_string(),
                    format!("Invalid log level '{}'", other),
                ));
            }
        }
        match self.format.to_lowercase().as_str() {
            "compact" | "pretty" | "json" => Ok(()),
            other => Err(ConfigError::validation(
                "logger.format".to_string(),
                format!("Invalid log format '{}'", other),
            )),
        }
    }
}

// ============================================================================
// Settings root
// ============================================================================

/// Root settings aggregate deserialized from the layered configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Settings {
    /// Application identity
    #[serde(default)]
    pub application: ApplicationConfig,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Database settings
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Token issuance settings
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Object storage settings
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logger settings
    #[serde(default)]
    pub logger: LoggerConfig,
}

impl Settings {
    /// Validate every configuration section.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.server.validate()?;
        self.database.validate()?;
        self.jwt.validate()?;
        self.storage.validate()?;
        self.logger.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_settings() -> Settings {
        let mut settings = Settings::default();
        settings.database.url = "postgres://localhost/sharebnb_test".to_string();
        settings.jwt.secret = "0123456789abcdef0123456789abcdef".to_string();
        settings.storage.bucket = "sharebnb-media".to_string();
        settings
    }

    #[test]
    fn defaults_fill_every_section() {
        let settings = Settings::default();
        assert_eq!(settings.server.port, 3000);
        assert_eq!(settings.database.max_connections, 10);
        assert_eq!(settings.jwt.token_expiration, 24);
        assert_eq!(settings.storage.region, "us-east-1");
        assert_eq!(settings.logger.level, "info");
    }

    #[test]
    fn valid_settings_pass_validation() {
        assert!(valid_settings().validate().is_ok());
    }

    #[test]
    fn rejects_zero_port() {
        let mut settings = valid_settings();
        settings.server.port = 0;
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_missing_database_url() {
        let mut settings = valid_settings();
        settings.database.url = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_short_jwt_secret() {
        let mut settings = valid_settings();
        settings.jwt.secret = "too-short".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_missing_bucket() {
        let mut settings = valid_settings();
        settings.storage.bucket = String::new();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_unknown_log_format() {
        let mut settings = valid_settings();
        settings.logger.format = "xml".to_string();
        assert!(settings.validate().is_err());
    }

    #[test]
    fn public_base_uses_s3_convention_by_default() {
        let mut storage = StorageConfig::default();
        storage.bucket = "sharebnb-media".to_string();
        storage.region = "us-east-1".to_string();

        assert_eq!(
            storage.public_base(),
            "https://sharebnb-media.s3.us-east-1.amazonaws.com"
        );
    }

    #[test]
    fn public_base_override_strips_trailing_slash() {
        let mut storage = StorageConfig::default();
        storage.bucket = "media".to_string();
        storage.public_base_url = Some("https://cdn.sharebnb.dev/".to_string());

        assert_eq!(storage.public_base(), "https://cdn.sharebnb.dev");
    }

    #[test]
    fn address_joins_host_and_port() {
        let server = ServerConfig {
            host: "0.0.0.0".to_string(),
            port: 8080,
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
    }
}
