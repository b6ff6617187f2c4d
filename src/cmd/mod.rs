use crate::{
    pkg::server::{handlers::probes::probe, listen, state::db_pool},
    prelude::Result,
};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(about = "job board REST service")]
struct Cmd {
    #[command(subcommand)]
    command: Option<SubCommandType>,
}

#[derive(Subcommand)]
enum SubCommandType {
    /// Serve the HTTP API (default)
    Listen,
    /// Verify the database is reachable and exit
    Check,
}

pub async fn run() -> Result<()> {
    let args = Cmd::parse();
    match args.command {
        Some(SubCommandType::Listen) | None => {
            listen().await?;
        }
        Some(SubCommandType::Check) => {
            probe(&db_pool()?).await?;
        }
    }
    Ok(())
}
