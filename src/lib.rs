//! NHL Stats API Client Library
//!
//! A thin, typed client for the public NHL statistics API, exposing per-team,
//! per-player and per-game data through convenience accessors.
//!
//! ## Features
//!
//! - **Teams**: roster, stats, next/previous game, season schedule, head-to-head games
//! - **Players**: biographical info and split statistics
//! - **Games**: boxscore with per-side teams, players and coaching staff
//! - **Single-stat lookups**: `wins`, `goalsPerGame`, `goals`, ... read straight
//!   out of the first stat split
//! - **Typed errors**: unknown teams, upstream failures and unexpected payload
//!   shapes are distinct [`NhlError`] variants
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nhl_stats::{ClientConfig, PlayerId, Season, StatsApi, TeamId};
//!
//! # async fn example() -> nhl_stats::Result<()> {
//! let api = StatsApi::new(ClientConfig::default())?;
//! let season: Season = "20162017".parse()?;
//!
//! let wins = api.team(TeamId::new(1)).get_stat("wins", Some(season)).await?;
//! let goals = api.player(PlayerId::new(8471724)).get_stat("goals", season).await?;
//!
//! println!("Devils won {} games, Letang scored {} goals", wins, goals);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NHL_STATS_BASE_URL=https://statsapi.web.nhl.com/api/v1
//! export NHL_STATS_TIMEOUT_SECS=10
//! export NHL_STATS_TEAMS_FILE=~/teams.json
//! ```

pub mod cli;
pub mod commands;
pub mod core;
pub mod error;
pub mod nhl;

// Re-export commonly used types
pub use cli::types::{GameId, PlayerId, Season, StatSplit, TeamId};
pub use crate::core::{ClientConfig, TeamDirectory};
pub use error::{NhlError, Result};
pub use nhl::types::StatValue;
pub use nhl::{GameClient, PlayerClient, StatsApi, TeamClient};

pub const BASE_URL_ENV_VAR: &str = "NHL_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NHL_STATS_TIMEOUT_SECS";
pub const CONCURRENCY_ENV_VAR: &str = "NHL_STATS_CONCURRENCY";
pub const TEAMS_FILE_ENV_VAR: &str = "NHL_STATS_TEAMS_FILE";
pub const LOG_ENV_VAR: &str = "NHL_STATS_LOG";
