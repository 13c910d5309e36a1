//! Configuration loader.
//!
//! Provides the `ConfigLoader` struct that handles loading configuration
//! from multiple sources with proper precedence.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};

use crate::config::environment::Environment as AppEnvironment;
use crate::config::error::ConfigError;
use crate::config::settings::Settings;

/// Environment variable for configuration directory
const CONFIG_DIR_ENV: &str = "SHAREBNB_CONFIG_DIR";

/// Default configuration directory
const DEFAULT_CONFIG_DIR: &str = "config";

/// Environment variable prefix for configuration overrides
const ENV_PREFIX: &str = "SHAREBNB";

/// Separator for nested configuration keys in environment variables
const ENV_SEPARATOR: &str = "__";

/// Configuration loader that handles layered configuration loading.
///
/// Sources, in order of priority:
/// 1. `default.toml` - base configuration (optional; struct defaults apply)
/// 2. `{environment}.toml` - environment-specific configuration (optional)
/// 3. `local.toml` - local development overrides (optional)
/// 4. `SHAREBNB_*` environment variables (highest priority)
#[derive(Debug)]
pub struct ConfigLoader {
    /// Configuration directory path
    config_dir: PathBuf,
    /// Current application environment
    environment: AppEnvironment,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    ///
    /// Reads `SHAREBNB_CONFIG_DIR` for the configuration directory and
    /// `SHAREBNB_APP_ENV` for the active environment.
    pub fn new() -> Self {
        let config_dir = std::env::var(CONFIG_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_DIR));

        Self {
            config_dir,
            environment: AppEnvironment::from_env(),
        }
    }

    /// Create a loader rooted at an explicit directory.
    pub fn with_config_dir(config_dir: impl Into<PathBuf>) -> Self {
        Self {
            config_dir: config_dir.into(),
            environment: AppEnvironment::from_env(),
        }
    }

    /// Get the current application environment
    pub fn environment(&self) -> AppEnvironment {
        self.environment
    }

    /// Load and validate configuration from all sources.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing or validation fails.
    pub fn load(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        let settings: Settings = config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })?;

        settings.validate()?;

        Ok(settings)
    }

    /// Load configuration without running validation.
    ///
    /// Used by the CLI so overrides can be merged before validating.
    pub fn load_unvalidated(&self) -> Result<Settings, ConfigError> {
        let config = self.build_config()?;
        config.try_deserialize().map_err(|e| {
            ConfigError::ParseError(format!("Failed to deserialize configuration: {}", e))
        })
    }

    fn build_config(&self) -> Result<Config, ConfigError> {
        let mut builder = Config::builder();

        // 1. default.toml
        builder = Self::add_file_source(builder, &self.config_dir.join("default.toml"));

        // 2. {environment}.toml
        builder = Self::add_file_source(
            builder,
            &self
                .config_dir
                .join(format!("{}.toml", self.environment.as_str())),
        );

        // 3. local.toml
        builder = Self::add_file_source(builder, &self.config_dir.join("local.toml"));

        // 4. SHAREBNB_SERVER__PORT -> server.port
        let builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator(ENV_SEPARATOR)
                .ignore_empty(true)
                .try_parsing(true),
        );

        builder.build().map_err(ConfigError::from)
    }

    fn add_file_source(
        builder: config::ConfigBuilder<config::builder::DefaultState>,
        path: &Path,
    ) -> config::ConfigBuilder<config::builder::DefaultState> {
        builder.add_source(
            File::new(path.to_str().unwrap_or_default(), FileFormat::Toml).required(false),
        )
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn setup_config_dir(files: &[(&str, &str)]) -> TempDir {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        for (name, content) in files {
            fs::write(temp_dir.path().join(name), content).expect("Failed to write config file");
        }
        temp_dir
    }

    #[test]
    fn loads_settings_from_default_toml() {
        let dir = setup_config_dir(&[(
            "default.toml",
            r#"
            [server]
            host = "0.0.0.0"
            port = 8080

            [database]
            url = "postgres://localhost/sharebnb_test"

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"

            [storage]
            bucket = "sharebnb-media"
            "#,
        )]);

        let loader = ConfigLoader::with_config_dir(dir.path());
        let settings = loader.load().expect("configuration should load");

        assert_eq!(settings.server.address(), "0.0.0.0:8080");
        assert_eq!(settings.storage.bucket, "sharebnb-media");
    }

    #[test]
    fn local_toml_overrides_default() {
        let dir = setup_config_dir(&[
            (
                "default.toml",
                r#"
                [server]
                port = 8080

                [database]
                url = "postgres://localhost/sharebnb_test"

                [jwt]
                secret = "0123456789abcdef0123456789abcdef"

                [storage]
                bucket = "sharebnb-media"
                "#,
            ),
            (
                "local.toml",
                r#"
                [server]
                port = 9090
                "#,
            ),
        ]);

        let loader = ConfigLoader::with_config_dir(dir.path());
        let settings = loader.load().expect("configuration should load");

        assert_eq!(settings.server.port, 9090);
    }

    #[test]
    fn missing_files_fall_back_to_struct_defaults() {
        let dir = TempDir::new().unwrap();
        let loader = ConfigLoader::with_config_dir(dir.path());

        // No TOML files at all: defaults deserialize, validation then
        // reports the unset database URL.
        let settings = loader.load_unvalidated().expect("defaults should apply");
        assert_eq!(settings.server.port, 3000);
        assert!(loader.load().is_err());
    }

    #[test]
    fn validation_failure_surfaces_field() {
        let dir = setup_config_dir(&[(
            "default.toml",
            r#"
            [database]
            url = "postgres://localhost/sharebnb_test"

            [jwt]
            secret = "short"

            [storage]
            bucket = "sharebnb-media"
            "#,
        )]);

        let loader = ConfigLoader::with_config_dir(dir.path());
        let error = loader.load().unwrap_err();

        assert!(error.to_string().contains("jwt.secret"));
    }
}
