//! `player` subcommands

use serde_json::Value;

use super::to_output;
use crate::{cli::PlayerCmd, nhl::StatsApi, PlayerId, Result};

pub async fn handle_player(api: &StatsApi, player: PlayerId, cmd: PlayerCmd) -> Result<Value> {
    let client = api.player(player);

    match cmd {
        PlayerCmd::Info => to_output(&client.get_info().await?),
        PlayerCmd::Stats { season, split } => to_output(&client.get_stats(season, split).await?),
        PlayerCmd::Stat { name, season } => to_output(&client.get_stat(&name, season).await?),
    }
}
