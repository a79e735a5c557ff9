//! Game resource: `game/{id}/boxscore` and its projections.

use std::collections::BTreeMap;
use std::sync::Arc;

use crate::cli::types::GameId;
use crate::core::http::Handle;
use crate::error::Result;
use crate::nhl::types::{Boxscore, BoxscorePlayer, BoxscoreTeams, Coach, Side};
use crate::nhl::GameHandle;

pub struct GameClient {
    handle: Arc<Handle>,
    resource: GameHandle,
}

impl GameClient {
    pub fn new(handle: Arc<Handle>, resource: GameHandle) -> Self {
        Self { handle, resource }
    }

    pub fn id(&self) -> GameId {
        self.resource.id
    }

    pub fn resource(&self) -> &GameHandle {
        &self.resource
    }

    pub async fn get_boxscore(&self) -> Result<Boxscore> {
        let url = format!("{}/boxscore", self.resource.url);
        self.handle.fetch_json(&url, &[]).await
    }

    pub async fn get_teams(&self) -> Result<BoxscoreTeams> {
        Ok(self.get_boxscore().await?.teams)
    }

    /// Players dressed for one side, keyed `ID<player id>`.
    pub async fn get_players(&self, home: bool) -> Result<BTreeMap<String, BoxscorePlayer>> {
        let side = self.get_boxscore().await?.into_side(Side::from_home(home));
        Ok(side.players)
    }

    pub async fn get_coaches(&self, home: bool) -> Result<Vec<Coach>> {
        let side = self.get_boxscore().await?.into_side(Side::from_home(home));
        Ok(side.coaches)
    }
}
