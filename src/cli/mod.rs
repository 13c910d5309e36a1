//! CLI module
//!
//! Argument parsing with clap, configuration loading with CLI
//! overrides, and command execution.

pub mod executor;
pub mod parser;

pub use executor::execute_command;
pub use parser::{Cli, Commands};

use crate::config::{ConfigLoader, Settings};

/// Loads settings and applies CLI overrides.
///
/// Overrides, in increasing priority over the file/env layers:
/// `--host`/`--port` on `serve`, and `--verbose`/`--quiet` for the log
/// level. Validation runs after the overrides so the merged result is
/// what gets checked.
pub fn load_settings(cli: &Cli) -> anyhow::Result<Settings> {
    let loader = match &cli.config_dir {
        Some(dir) => ConfigLoader::with_config_dir(dir.clone()),
        None => ConfigLoader::new(),
    };

    let mut settings = loader.load_unvalidated()?;

    if let Some(Commands::Serve { host, port, .. }) = &cli.command {
        if let Some(host) = host {
            settings.server.host = host.clone();
        }
        if let Some(port) = port {
            settings.server.port = *port;
        }
    }

    if cli.verbose {
        settings.logger.level = "debug".to_string();
    } else if cli.quiet {
        settings.logger.level = "error".to_string();
    }

    settings.validate()?;

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::fs;
    use tempfile::TempDir;

    fn write_valid_config(dir: &TempDir) {
        fs::write(
            dir.path().join("default.toml"),
            r#"
            [database]
            url = "postgres://localhost/sharebnb_test"

            [jwt]
            secret = "0123456789abcdef0123456789abcdef"

            [storage]
            bucket = "sharebnb-media"
            "#,
        )
        .unwrap();
    }

    #[test]
    fn serve_overrides_take_priority() {
        let dir = TempDir::new().unwrap();
        write_valid_config(&dir);

        let cli = Cli::parse_from([
            "sharebnb",
            "--config-dir",
            dir.path().to_str().unwrap(),
            "serve",
            "--port",
            "9999",
        ]);

        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.server.port, 9999);
    }

    #[test]
    fn verbose_raises_log_level() {
        let dir = TempDir::new().unwrap();
        write_valid_config(&dir);

        let cli = Cli::parse_from([
            "sharebnb",
            "--config-dir",
            dir.path().to_str().unwrap(),
            "--verbose",
        ]);

        let settings = load_settings(&cli).unwrap();
        assert_eq!(settings.logger.level, "debug");
    }

    #[test]
    fn invalid_merged_settings_fail() {
        let dir = TempDir::new().unwrap();
        write_valid_config(&dir);

        let cli = Cli::parse_from([
            "sharebnb",
            "--config-dir",
            dir.path().to_str().unwrap(),
            "serve",
            "--port",
            "0",
        ]);

        assert!(load_settings(&cli).is_err());
    }
}
