//! `team` subcommands

use serde_json::Value;
use tracing::info;

use super::to_output;
use crate::{cli::TeamCmd, nhl::StatsApi, Result};

/// Resolve `team` (name or id) and run one team subcommand.
pub async fn handle_team(api: &StatsApi, team: &str, cmd: TeamCmd) -> Result<Value> {
    let client = api.team_by_name(team)?;
    info!(team = %client.id(), url = %client.resource().url, "team resolved");

    match cmd {
        TeamCmd::Roster { season } => to_output(&client.get_roster(season).await?),
        TeamCmd::Stats { season } => to_output(&client.get_stats(season).await?),
        TeamCmd::NextGame => to_output(&client.get_next_game().await?),
        TeamCmd::PrevGame => to_output(&client.get_prev_game().await?),
        TeamCmd::GameIds { season } => to_output(&client.get_game_ids(season).await?),
        TeamCmd::GamesAgainst { opponent, season } => {
            to_output(&client.get_games_against(opponent, season).await?)
        }
        TeamCmd::Stat { name, season } => to_output(&client.get_stat(&name, season).await?),
    }
}
