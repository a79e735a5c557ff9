//! Player resource: `people/{id}` and `people/{id}/stats`.

use std::sync::Arc;

use crate::cli::types::{PlayerId, Season, StatSplit};
use crate::core::http::{Handle, Query};
use crate::error::{NhlError, Result};
use crate::nhl::types::{PeopleEnvelope, Person, StatValue, StatsEnvelope};
use crate::nhl::PlayerHandle;

#[cfg(test)]
mod tests;

/// Which split `get_stats` asks for.
///
/// An explicit split always wins. Without one, a season selects
/// `statsSingleSeason` and no season selects `yearByYear`: leaving the
/// season out changes the aggregation, not only the filter.
pub fn resolve_split(season: Option<Season>, split: Option<StatSplit>) -> StatSplit {
    match (split, season) {
        (Some(split), _) => split,
        (None, Some(_)) => StatSplit::StatsSingleSeason,
        (None, None) => StatSplit::YearByYear,
    }
}

/// `stats=<split>[&season=<season>]`
pub fn stats_query(split: StatSplit, season: Option<Season>) -> Query {
    let mut params: Query = vec![("stats", split.to_string())];
    if let Some(season) = season {
        params.push(("season", season.to_string()));
    }
    params
}

pub struct PlayerClient {
    handle: Arc<Handle>,
    resource: PlayerHandle,
}

impl PlayerClient {
    pub fn new(handle: Arc<Handle>, resource: PlayerHandle) -> Self {
        Self { handle, resource }
    }

    pub fn id(&self) -> PlayerId {
        self.resource.id
    }

    pub fn resource(&self) -> &PlayerHandle {
        &self.resource
    }

    pub async fn get_info(&self) -> Result<Person> {
        let envelope: PeopleEnvelope = self.handle.fetch_json(&self.resource.url, &[]).await?;
        envelope.into_person()
    }

    async fn fetch_stats(&self, split: StatSplit, season: Option<Season>) -> Result<StatsEnvelope> {
        let url = format!("{}/stats", self.resource.url);
        self.handle
            .fetch_json(&url, &stats_query(split, season))
            .await
    }

    /// Stats for `split`, defaulting per [`resolve_split`].
    pub async fn get_stats(
        &self,
        season: Option<Season>,
        split: Option<StatSplit>,
    ) -> Result<StatsEnvelope> {
        self.fetch_stats(resolve_split(season, split), season).await
    }

    /// Always `statsSingleSeason`; without a season upstream answers with
    /// the current one.
    pub async fn get_single_season_stats(&self, season: Option<Season>) -> Result<StatsEnvelope> {
        self.fetch_stats(StatSplit::StatsSingleSeason, season).await
    }

    /// Always `yearByYear`: one split per season played.
    pub async fn get_year_by_year_stats(&self) -> Result<StatsEnvelope> {
        self.fetch_stats(StatSplit::YearByYear, None).await
    }

    /// A single `statsSingleSeason` field for `season`, e.g. `goals`.
    pub async fn get_stat(&self, stat: &str, season: Season) -> Result<StatValue> {
        if stat.trim().is_empty() {
            return Err(NhlError::UnknownStat {
                name: stat.to_string(),
            });
        }

        self.get_stats(Some(season), None).await?.stat(stat)
    }
}
