use clap::Parser;

use sharebnb::cli::{self, Cli};
use sharebnb::logger::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let settings = cli::load_settings(&cli)?;
    init_logger(&settings.logger)?;

    cli::execute_command(cli, settings).await
}
