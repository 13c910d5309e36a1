//! CLI argument parsing with clap
//!
//! Defines the command-line interface structure, including all
//! commands, arguments, and their documentation.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Backend for the ShareBNB listing marketplace
#[derive(Parser, Debug)]
#[command(name = "sharebnb")]
#[command(about = "Backend API server for the ShareBNB listing marketplace")]
#[command(long_about = "
ShareBNB is a listing marketplace backend: users sign up, authenticate,
manage listings, exchange direct messages, and attach images stored in
an object-storage bucket.

EXAMPLES:
    # Start the server with default configuration
    sharebnb serve

    # Start server on custom host and port
    sharebnb serve --host 0.0.0.0 --port 8080

    # Use a custom configuration directory
    sharebnb --config-dir /etc/sharebnb serve

    # Check configuration without starting the server
    sharebnb serve --dry-run

    # Run database migrations
    sharebnb migrate
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    /// Subcommand to execute; defaults to `serve`
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Configuration directory
    ///
    /// Directory holding default.toml / {environment}.toml / local.toml.
    #[arg(short, long, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    /// Enable verbose logging (debug level)
    ///
    /// Cannot be used with --quiet.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    ///
    /// Cannot be used with --verbose.
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the web server (default)
    Serve {
        /// Override the configured bind host
        #[arg(long, value_name = "HOST")]
        host: Option<String>,

        /// Override the configured bind port
        #[arg(long, value_name = "PORT")]
        port: Option<u16>,

        /// Validate configuration and exit without starting the server
        #[arg(long)]
        dry_run: bool,
    },

    /// Run pending database migrations
    Migrate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_serve_with_overrides() {
        let cli = Cli::parse_from(["sharebnb", "serve", "--host", "0.0.0.0", "--port", "8080"]);
        match cli.command {
            Some(Commands::Serve { host, port, dry_run }) => {
                assert_eq!(host.as_deref(), Some("0.0.0.0"));
                assert_eq!(port, Some(8080));
                assert!(!dry_run);
            }
            other => panic!("Expected serve command, got: {:?}", other),
        }
    }

    #[test]
    fn defaults_to_no_subcommand() {
        let cli = Cli::parse_from(["sharebnb"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn verbose_and_quiet_conflict() {
        let result = Cli::try_parse_from(["sharebnb", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }
}
