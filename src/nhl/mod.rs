//! Clients for the NHL stats API.
//!
//! [`StatsApi`] owns the connection pool and the team directory and hands
//! out per-resource clients:
//!
//! - [`TeamClient`]: roster, stats, next/previous game, schedule, head-to-head
//! - [`PlayerClient`]: info and split statistics
//! - [`GameClient`]: boxscore projections
//!
//! Every client is a cheap view holding an `Arc` of the shared [`Handle`].

pub mod game;
pub mod player;
pub mod team;
pub mod types;

use std::fmt;
use std::sync::Arc;

use crate::cli::types::{GameId, PlayerId, TeamId};
use crate::core::{ClientConfig, Handle, TeamDirectory};
use crate::error::Result;

pub use game::GameClient;
pub use player::PlayerClient;
pub use team::TeamClient;

/// An identifier plus the request URL derived from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceHandle<I> {
    pub id: I,
    pub url: String,
}

impl<I: fmt::Display> ResourceHandle<I> {
    fn new(handle: &Handle, collection: &str, id: I) -> Self {
        let url = handle.url(&format!("{}/{}", collection, id));
        Self { id, url }
    }
}

pub type TeamHandle = ResourceHandle<TeamId>;
pub type PlayerHandle = ResourceHandle<PlayerId>;
pub type GameHandle = ResourceHandle<GameId>;

/// Entry point to the API.
#[derive(Debug, Clone)]
pub struct StatsApi {
    handle: Arc<Handle>,
    teams: Arc<TeamDirectory>,
    concurrency: usize,
}

impl StatsApi {
    /// Client with the bundled team directory.
    pub fn new(config: ClientConfig) -> Result<Self> {
        Self::with_directory(config, TeamDirectory::bundled())
    }

    pub fn with_directory(config: ClientConfig, teams: TeamDirectory) -> Result<Self> {
        let handle = Handle::new(&config)?;
        Ok(Self {
            handle: Arc::new(handle),
            teams: Arc::new(teams),
            concurrency: config.concurrency.max(1),
        })
    }

    /// Config and team directory both taken from the environment.
    pub fn from_env() -> Result<Self> {
        Self::with_directory(ClientConfig::from_env()?, TeamDirectory::load_default()?)
    }

    pub fn directory(&self) -> &TeamDirectory {
        &self.teams
    }

    pub fn base_url(&self) -> &str {
        self.handle.base_url()
    }

    /// Resolve a team name or numeric id to its resource handle.
    pub fn resolve_team(&self, identifier: &str) -> Result<TeamHandle> {
        let id = self.teams.resolve_identifier(identifier)?;
        Ok(TeamHandle::new(&self.handle, "teams", id))
    }

    pub fn team(&self, id: TeamId) -> TeamClient {
        TeamClient::new(
            self.handle.clone(),
            TeamHandle::new(&self.handle, "teams", id),
            self.concurrency,
        )
    }

    /// Team client by name or numeric id.
    pub fn team_by_name(&self, identifier: &str) -> Result<TeamClient> {
        let resource = self.resolve_team(identifier)?;
        Ok(TeamClient::new(
            self.handle.clone(),
            resource,
            self.concurrency,
        ))
    }

    pub fn player(&self, id: PlayerId) -> PlayerClient {
        PlayerClient::new(
            self.handle.clone(),
            PlayerHandle::new(&self.handle, "people", id),
        )
    }

    pub fn game(&self, id: GameId) -> GameClient {
        GameClient::new(
            self.handle.clone(),
            GameHandle::new(&self.handle, "game", id),
        )
    }
}
