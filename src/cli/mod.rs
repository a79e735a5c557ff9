//! CLI argument definitions and parsing.

pub mod types;

use clap::{Parser, Subcommand};
use types::{GameId, PlayerId, Season, StatSplit, TeamId};

#[derive(Debug, Parser)]
#[clap(name = "nhl-stats", about = "Query the NHL stats API")]
pub struct NhlCli {
    /// Log requests (-v debug, -vv trace). `NHL_STATS_LOG` overrides.
    #[clap(long, short, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Team roster, stats and schedule
    Team {
        /// Team name ("New Jersey Devils") or numeric id (1).
        #[clap(long, short)]
        team: String,

        #[clap(subcommand)]
        cmd: TeamCmd,
    },

    /// Player info and statistics
    Player {
        /// Player id, e.g. 8471724.
        #[clap(long, short)]
        player: PlayerId,

        #[clap(subcommand)]
        cmd: PlayerCmd,
    },

    /// Game boxscore and its projections
    Game {
        /// Game id, e.g. 2017020001.
        #[clap(long, short)]
        game: GameId,

        #[clap(subcommand)]
        cmd: GameCmd,
    },
}

#[derive(Debug, Subcommand)]
pub enum TeamCmd {
    /// Team with its roster (`expand=team.roster`).
    Roster {
        /// Season as YYYYYYYY (e.g. 20162017); current season when omitted.
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Team with its stat splits (`expand=team.stats`).
    Stats {
        #[clap(long, short)]
        season: Option<Season>,
    },

    /// Next scheduled game.
    NextGame,

    /// Most recently played game.
    PrevGame,

    /// Every game id of a season, in schedule order.
    GameIds {
        #[clap(long, short)]
        season: Season,
    },

    /// Game ids of a season played against one opponent.
    GamesAgainst {
        /// Opponent team id.
        #[clap(long, short)]
        opponent: TeamId,

        #[clap(long, short)]
        season: Season,
    },

    /// One stat field, e.g. `wins` or `goalsPerGame`.
    Stat {
        name: String,

        #[clap(long, short)]
        season: Option<Season>,
    },
}

#[derive(Debug, Subcommand)]
pub enum PlayerCmd {
    /// Biographical info.
    Info,

    /// Stat splits. Without --season and --split, year-by-year totals.
    Stats {
        #[clap(long, short)]
        season: Option<Season>,

        /// Upstream split name, e.g. homeAndAway, byMonth, vsTeam.
        #[clap(long)]
        split: Option<StatSplit>,
    },

    /// One single-season stat field, e.g. `goals`.
    Stat {
        name: String,

        #[clap(long, short)]
        season: Season,
    },
}

#[derive(Debug, Subcommand)]
pub enum GameCmd {
    /// Full boxscore.
    Boxscore,

    /// Home and away team summaries.
    Teams,

    /// Players dressed for one side.
    Players {
        /// Away side instead of home.
        #[clap(long)]
        away: bool,
    },

    /// Coaching staff of one side.
    Coaches {
        #[clap(long)]
        away: bool,
    },
}
