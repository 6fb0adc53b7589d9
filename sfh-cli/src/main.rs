//! SFH CLI - Command line tool for the Smart Farm Hub backend.

use clap::Parser;

#[derive(Parser)]
#[command(name = "sfh-cli", version, about = "Smart Farm Hub toolkit")]
struct Cli {
    /// Backend base URL
    #[arg(long, env = "SFH_BASE_URL", default_value = "http://localhost:5000")]
    base_url: String,

    #[command(subcommand)]
    command: sfh_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    log::debug!("Using backend at {}", cli.base_url);
    sfh_cmd::run(cli.command, &cli.base_url).await
}
