//! Team resource: `teams/{id}` and the team-filtered `schedule`.

use std::sync::Arc;

use futures::stream::{self, StreamExt, TryStreamExt};
use tracing::{debug, trace};

use crate::cli::types::{GameId, Season, TeamId};
use crate::core::http::{Handle, Query};
use crate::error::{NhlError, Result};
use crate::nhl::game::GameClient;
use crate::nhl::types::{Schedule, StatValue, Team, TeamsEnvelope};
use crate::nhl::{GameHandle, TeamHandle};

#[cfg(test)]
mod tests;

const EXPAND_ROSTER: &str = "team.roster";
const EXPAND_STATS: &str = "team.stats";
const EXPAND_NEXT_GAME: &str = "team.schedule.next";
const EXPAND_PREVIOUS_GAME: &str = "team.schedule.previous";

/// `expand=<expand>[&season=<season>]`
pub fn expand_query(expand: &str, season: Option<Season>) -> Query {
    let mut params: Query = vec![("expand", expand.to_string())];
    if let Some(season) = season {
        params.push(("season", season.to_string()));
    }
    params
}

/// `teamId=<id>&season=<season>`
pub fn schedule_query(team: TeamId, season: Season) -> Query {
    vec![("teamId", team.to_string()), ("season", season.to_string())]
}

pub struct TeamClient {
    handle: Arc<Handle>,
    resource: TeamHandle,
    concurrency: usize,
}

impl TeamClient {
    pub fn new(handle: Arc<Handle>, resource: TeamHandle, concurrency: usize) -> Self {
        Self {
            handle,
            resource,
            concurrency: concurrency.max(1),
        }
    }

    pub fn id(&self) -> TeamId {
        self.resource.id
    }

    pub fn resource(&self) -> &TeamHandle {
        &self.resource
    }

    async fn fetch(&self, expand: &str, season: Option<Season>) -> Result<TeamsEnvelope> {
        self.handle
            .fetch_json(&self.resource.url, &expand_query(expand, season))
            .await
    }

    /// Team with its roster expanded, for `season` or the current one.
    pub async fn get_roster(&self, season: Option<Season>) -> Result<Team> {
        self.fetch(EXPAND_ROSTER, season).await?.into_team()
    }

    /// Team with its stat blocks expanded, for `season` or the current one.
    pub async fn get_stats(&self, season: Option<Season>) -> Result<Team> {
        self.fetch(EXPAND_STATS, season).await?.into_team()
    }

    /// Upstream omits `nextGameSchedule` entirely when there is no next game
    /// (off-season). That comes back as an empty schedule rather than an
    /// `UnexpectedShape` error.
    pub async fn get_next_game(&self) -> Result<Schedule> {
        let team = self.fetch(EXPAND_NEXT_GAME, None).await?.into_team()?;
        Ok(team.next_game_schedule.unwrap_or_default())
    }

    /// Like [`get_next_game`](Self::get_next_game), a missing
    /// `previousGameSchedule` (no game played yet) is an empty schedule
    /// rather than an `UnexpectedShape` error.
    pub async fn get_prev_game(&self) -> Result<Schedule> {
        let team = self.fetch(EXPAND_PREVIOUS_GAME, None).await?.into_team()?;
        Ok(team.previous_game_schedule.unwrap_or_default())
    }

    /// Ids of every game this team plays in `season`, in schedule order.
    pub async fn get_game_ids(&self, season: Season) -> Result<Vec<GameId>> {
        let schedule: Schedule = self
            .handle
            .get_json("schedule", &schedule_query(self.resource.id, season))
            .await?;

        let ids = schedule.game_ids();
        debug!(team = %self.resource.id, %season, games = ids.len(), "schedule loaded");
        Ok(ids)
    }

    /// Subset of [`get_game_ids`](Self::get_game_ids) played against `opponent`.
    ///
    /// One boxscore request per scheduled game, at most `concurrency` in
    /// flight. The result keeps schedule order and the first failed request
    /// fails the call.
    pub async fn get_games_against(&self, opponent: TeamId, season: Season) -> Result<Vec<GameId>> {
        let game_ids = self.get_game_ids(season).await?;

        let checked: Vec<(GameId, bool)> = stream::iter(game_ids)
            .map(|game_id| {
                let game = GameClient::new(
                    self.handle.clone(),
                    GameHandle::new(&self.handle, "game", game_id),
                );
                async move {
                    let boxscore = game.get_boxscore().await?;
                    let side = boxscore.side_of(opponent);
                    trace!(game = %game_id, %opponent, ?side, "checked opponent");
                    Ok::<_, NhlError>((game_id, side.is_some()))
                }
            })
            .buffered(self.concurrency)
            .try_collect()
            .await?;

        Ok(checked
            .into_iter()
            .filter_map(|(game_id, against)| against.then_some(game_id))
            .collect())
    }

    /// A single field of the first stat split, e.g. `wins` or `goalsPerGame`.
    pub async fn get_stat(&self, stat: &str, season: Option<Season>) -> Result<StatValue> {
        if stat.trim().is_empty() {
            return Err(NhlError::UnknownStat {
                name: stat.to_string(),
            });
        }

        self.fetch(EXPAND_STATS, season).await?.stat(stat)
    }
}
