//! Stat split (aggregation mode) names understood by the NHL API.

use crate::error::{NhlError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

macro_rules! stat_splits {
    ($($variant:ident => $wire:literal),+ $(,)?) => {
        /// Upstream statistical aggregation mode, sent as `stats=<split>`.
        ///
        /// `Display` and `FromStr` use the exact upstream spelling.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum StatSplit {
            $($variant,)+
        }

        impl StatSplit {
            pub const ALL: &'static [StatSplit] = &[$(StatSplit::$variant,)+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $(StatSplit::$variant => $wire,)+
                }
            }
        }

        impl FromStr for StatSplit {
            type Err = NhlError;

            fn from_str(s: &str) -> Result<Self> {
                match s.trim() {
                    $($wire => Ok(StatSplit::$variant),)+
                    other => Err(NhlError::InvalidSplit {
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

stat_splits! {
    StatsSingleSeason => "statsSingleSeason",
    StatsSingleSeasonPlayoffs => "statsSingleSeasonPlayoffs",
    YearByYear => "yearByYear",
    YearByYearRank => "yearByYearRank",
    YearByYearPlayoffs => "yearByYearPlayoffs",
    CareerRegularSeason => "careerRegularSeason",
    CareerPlayoffs => "careerPlayoffs",
    GameLog => "gameLog",
    PlayoffGameLog => "playoffGameLog",
    VsTeam => "vsTeam",
    VsTeamPlayoffs => "vsTeamPlayoffs",
    VsDivision => "vsDivision",
    VsDivisionPlayoffs => "vsDivisionPlayoffs",
    VsConference => "vsConference",
    VsConferencePlayoffs => "vsConferencePlayoffs",
    ByMonth => "byMonth",
    ByMonthPlayoffs => "byMonthPlayoffs",
    ByDayOfWeek => "byDayOfWeek",
    ByDayOfWeekPlayoffs => "byDayOfWeekPlayoffs",
    HomeAndAway => "homeAndAway",
    HomeAndAwayPlayoffs => "homeAndAwayPlayoffs",
    WinLoss => "winLoss",
    WinLossPlayoffs => "winLossPlayoffs",
    OnPaceRegularSeason => "onPaceRegularSeason",
    RegularSeasonStatRankings => "regularSeasonStatRankings",
    PlayoffStatRankings => "playoffStatRankings",
    GoalsByGameSituation => "goalsByGameSituation",
}

impl Default for StatSplit {
    fn default() -> Self {
        StatSplit::StatsSingleSeason
    }
}

impl fmt::Display for StatSplit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StatSplit {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for StatSplit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
