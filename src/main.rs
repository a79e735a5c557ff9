//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Context;
use clap::Parser;
use nhl_stats::{
    cli::{Commands, NhlCli},
    commands::{handle_game, handle_player, handle_team, render},
    StatsApi, LOG_ENV_VAR,
};
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
    let default_directive = match verbose {
        0 => "warn",
        1 => "nhl_stats=debug",
        _ => "nhl_stats=trace",
    };
    let filter =
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(default_directive));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let app = NhlCli::parse();
    init_tracing(app.verbose);

    let api = StatsApi::from_env().context("failed to configure the NHL stats client")?;

    let output = match app.command {
        Commands::Team { team, cmd } => handle_team(&api, &team, cmd)
            .await
            .with_context(|| format!("team command failed for {:?}", team))?,
        Commands::Player { player, cmd } => handle_player(&api, player, cmd)
            .await
            .with_context(|| format!("player command failed for {}", player))?,
        Commands::Game { game, cmd } => handle_game(&api, game, cmd)
            .await
            .with_context(|| format!("game command failed for {}", game))?,
    };

    println!("{}", render(&output)?);
    Ok(())
}
