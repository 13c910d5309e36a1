//! Command execution
//!
//! Dispatches parsed CLI commands to the server or migration runner.

use crate::cli::parser::{Cli, Commands};
use crate::config::Settings;
use crate::db::run_pending_migrations;
use crate::server::Server;

/// Executes the selected command.
///
/// No subcommand means `serve`.
pub async fn execute_command(cli: Cli, settings: Settings) -> anyhow::Result<()> {
    match cli.command {
        Some(Commands::Serve { dry_run, .. }) if dry_run => validate_only(&settings),
        Some(Commands::Serve { .. }) | None => Server::new(settings).run().await,
        Some(Commands::Migrate) => migrate(&settings).await,
    }
}

/// Validates configuration and reports what `serve` would do.
fn validate_only(settings: &Settings) -> anyhow::Result<()> {
    settings.validate()?;

    println!("Configuration is valid");
    println!("Server would bind to: {}", settings.server.address());
    println!("Storage bucket: {}", settings.storage.bucket);
    println!("Dry run completed successfully");

    Ok(())
}

/// Runs pending migrations and reports what was applied.
async fn migrate(settings: &Settings) -> anyhow::Result<()> {
    tracing::info!("Running pending migrations...");
    let applied = run_pending_migrations(&settings.database.url).await?;

    if applied.is_empty() {
        tracing::info!("Database is up to date");
    } else {
        for version in &applied {
            tracing::info!(version = %version, "Applied migration");
        }
        tracing::info!(count = applied.len(), "Migrations complete");
    }

    Ok(())
}
