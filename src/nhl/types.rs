//! Typed payloads for the NHL stats API.
//!
//! Only the fields the clients navigate are typed; everything else on teams
//! and people is kept in `extra` so nothing upstream sends is dropped.

use crate::cli::types::{GameId, Season, StatSplit, TeamId};
use crate::error::{NhlError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;


/// One stat field. Upstream mixes integers, decimals and strings
/// (`"1234:56"` time on ice, `"28th"` rankings) inside the same map.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum StatValue {
    Integer(i64),
    Decimal(f64),
    Text(String),
}

impl StatValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            StatValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            StatValue::Integer(n) => Some(*n as f64),
            StatValue::Decimal(n) => Some(*n),
            StatValue::Text(s) => s.parse().ok(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StatValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Integer(n) => write!(f, "{}", n),
            StatValue::Decimal(n) => write!(f, "{}", n),
            StatValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for StatValue {
    fn from(n: i64) -> Self {
        StatValue::Integer(n)
    }
}

impl From<f64> for StatValue {
    fn from(n: f64) -> Self {
        StatValue::Decimal(n)
    }
}

pub type StatMap = BTreeMap<String, StatValue>;

/// `{ "id": 1, "name": "New Jersey Devils", "link": "/api/v1/teams/1" }`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TeamRef {
    pub id: TeamId,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub link: Option<String>,
}

/// A person reference as embedded in rosters and coaching staffs.
/// Coaches come without an id.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PersonRef {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(default)]
    pub link: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub code: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub abbreviation: String,
}

// ---------------------------------------------------------------------------
// teams/{id}
// ---------------------------------------------------------------------------

/// Top-level envelope for `teams/{id}` with any `expand`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamsEnvelope {
    pub teams: Vec<Team>,
}

impl TeamsEnvelope {
    pub fn into_team(self) -> Result<Team> {
        self.teams
            .into_iter()
            .next()
            .ok_or_else(|| NhlError::shape("teams[0]"))
    }

    /// `teams[0].teamStats[0].splits[0].stat[name]`
    pub fn stat(&self, name: &str) -> Result<StatValue> {
        let team = self.teams.first().ok_or_else(|| NhlError::shape("teams[0]"))?;
        team.stat(name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(default)]
    pub roster: Option<Roster>,
    #[serde(rename = "teamStats", default, skip_serializing_if = "Option::is_none")]
    pub team_stats: Option<Vec<StatBlock>>,
    #[serde(rename = "nextGameSchedule", default, skip_serializing_if = "Option::is_none")]
    pub next_game_schedule: Option<Schedule>,
    #[serde(rename = "previousGameSchedule", default, skip_serializing_if = "Option::is_none")]
    pub previous_game_schedule: Option<Schedule>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl Team {
    pub fn roster_entries(&self) -> Result<&[RosterEntry]> {
        self.roster
            .as_ref()
            .map(|r| r.roster.as_slice())
            .ok_or_else(|| NhlError::shape("teams[0].roster"))
    }

    pub fn stat(&self, name: &str) -> Result<StatValue> {
        let blocks = self
            .team_stats
            .as_ref()
            .ok_or_else(|| NhlError::shape("teams[0].teamStats"))?;
        let block = blocks
            .first()
            .ok_or_else(|| NhlError::shape("teams[0].teamStats[0]"))?;
        let split = block
            .splits
            .first()
            .ok_or_else(|| NhlError::shape("teams[0].teamStats[0].splits[0]"))?;
        split.stat(name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Roster {
    #[serde(default)]
    pub roster: Vec<RosterEntry>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RosterEntry {
    pub person: PersonRef,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<String>,
    pub position: Position,
}

// ---------------------------------------------------------------------------
// stats blocks (team and player)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatBlock {
    #[serde(rename = "type")]
    pub kind: StatType,
    #[serde(default)]
    pub splits: Vec<StatSplitEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatType {
    #[serde(rename = "displayName")]
    pub display_name: String,
}

impl StatType {
    /// The split this block answers, when upstream names a known one.
    pub fn split(&self) -> Option<StatSplit> {
        self.display_name.parse().ok()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatSplitEntry {
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub stat: StatMap,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl StatSplitEntry {
    pub fn stat(&self, name: &str) -> Result<StatValue> {
        self.stat.get(name).cloned().ok_or_else(|| NhlError::UnknownStat {
            name: name.to_string(),
        })
    }
}

// ---------------------------------------------------------------------------
// people/{id} and people/{id}/stats
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PeopleEnvelope {
    pub people: Vec<Person>,
}

impl PeopleEnvelope {
    pub fn into_person(self) -> Result<Person> {
        self.people
            .into_iter()
            .next()
            .ok_or_else(|| NhlError::shape("people[0]"))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Person {
    pub id: u64,
    #[serde(rename = "fullName")]
    pub full_name: String,
    #[serde(rename = "primaryNumber", default)]
    pub primary_number: Option<String>,
    #[serde(rename = "currentTeam", default)]
    pub current_team: Option<TeamRef>,
    #[serde(rename = "primaryPosition", default)]
    pub primary_position: Option<Position>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Envelope for `people/{id}/stats`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StatsEnvelope {
    pub stats: Vec<StatBlock>,
}

impl StatsEnvelope {
    /// `stats[0].splits[0].stat[name]`
    pub fn stat(&self, name: &str) -> Result<StatValue> {
        let block = self.stats.first().ok_or_else(|| NhlError::shape("stats[0]"))?;
        let split = block
            .splits
            .first()
            .ok_or_else(|| NhlError::shape("stats[0].splits[0]"))?;
        split.stat(name)
    }
}

// ---------------------------------------------------------------------------
// schedule
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Schedule {
    #[serde(default)]
    pub dates: Vec<ScheduleDate>,
}

impl Schedule {
    /// Game ids in schedule order: by date, then by position within the date.
    pub fn game_ids(&self) -> Vec<GameId> {
        self.dates
            .iter()
            .flat_map(|date| date.games.iter().map(|game| game.game_pk))
            .collect()
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduleDate {
    pub date: String,
    #[serde(default)]
    pub games: Vec<ScheduledGame>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScheduledGame {
    #[serde(rename = "gamePk")]
    pub game_pk: GameId,
    #[serde(rename = "gameDate", default)]
    pub game_date: Option<String>,
    #[serde(default)]
    pub season: Option<Season>,
    #[serde(default)]
    pub teams: Option<Value>,
}

// ---------------------------------------------------------------------------
// game/{id}/boxscore
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

impl Side {
    pub fn from_home(home: bool) -> Self {
        if home {
            Side::Home
        } else {
            Side::Away
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Home => f.write_str("home"),
            Side::Away => f.write_str("away"),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Boxscore {
    pub teams: BoxscoreTeams,
    #[serde(default)]
    pub officials: Vec<Value>,
}

impl Boxscore {
    pub fn side(&self, side: Side) -> &BoxscoreTeam {
        self.teams.side(side)
    }

    pub fn into_side(self, side: Side) -> BoxscoreTeam {
        match side {
            Side::Home => self.teams.home,
            Side::Away => self.teams.away,
        }
    }

    /// Which side `team` played on, if any.
    pub fn side_of(&self, team: TeamId) -> Option<Side> {
        if self.teams.home.team.id == team {
            Some(Side::Home)
        } else if self.teams.away.team.id == team {
            Some(Side::Away)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoxscoreTeams {
    pub home: BoxscoreTeam,
    pub away: BoxscoreTeam,
}

impl BoxscoreTeams {
    pub fn side(&self, side: Side) -> &BoxscoreTeam {
        match side {
            Side::Home => &self.home,
            Side::Away => &self.away,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoxscoreTeam {
    pub team: TeamRef,
    #[serde(rename = "teamStats", default)]
    pub team_stats: Value,
    /// Keyed as upstream sends them, e.g. `ID8471724`.
    #[serde(default)]
    pub players: BTreeMap<String, BoxscorePlayer>,
    #[serde(default)]
    pub goalies: Vec<u64>,
    #[serde(default)]
    pub skaters: Vec<u64>,
    #[serde(default)]
    pub scratches: Vec<u64>,
    #[serde(default)]
    pub coaches: Vec<Coach>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BoxscorePlayer {
    pub person: PersonRef,
    #[serde(rename = "jerseyNumber", default)]
    pub jersey_number: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub stats: Value,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Coach {
    pub person: PersonRef,
    pub position: Position,
}
