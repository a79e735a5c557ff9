//! `game` subcommands

use serde_json::Value;

use super::to_output;
use crate::{cli::GameCmd, nhl::StatsApi, GameId, Result};

pub async fn handle_game(api: &StatsApi, game: GameId, cmd: GameCmd) -> Result<Value> {
    let client = api.game(game);

    match cmd {
        GameCmd::Boxscore => to_output(&client.get_boxscore().await?),
        GameCmd::Teams => to_output(&client.get_teams().await?),
        GameCmd::Players { away } => to_output(&client.get_players(!away).await?),
        GameCmd::Coaches { away } => to_output(&client.get_coaches(!away).await?),
    }
}
