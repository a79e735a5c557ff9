//! Team name → id directory.
//!
//! Names are matched after trimming, Unicode lowercasing and folding of Latin
//! accents, so `MONTRÉAL CANADIENS` and `Montreal Canadiens` resolve alike.
//! A directory is a plain value handed to the clients that need it; there is
//! no global table.

use serde::{Deserialize, Serialize};
use std::{
    collections::BTreeMap,
    fs,
    io::Write,
    path::{Path, PathBuf},
};
use tracing::debug;

use crate::cli::types::TeamId;
use crate::error::{NhlError, Result};
use crate::TEAMS_FILE_ENV_VAR;


/// Franchises known to the stats API, keyed by full name.
const BUNDLED_TEAMS: &[(&str, u32)] = &[
    ("New Jersey Devils", 1),
    ("New York Islanders", 2),
    ("New York Rangers", 3),
    ("Philadelphia Flyers", 4),
    ("Pittsburgh Penguins", 5),
    ("Boston Bruins", 6),
    ("Buffalo Sabres", 7),
    ("Montréal Canadiens", 8),
    ("Ottawa Senators", 9),
    ("Toronto Maple Leafs", 10),
    ("Carolina Hurricanes", 12),
    ("Florida Panthers", 13),
    ("Tampa Bay Lightning", 14),
    ("Washington Capitals", 15),
    ("Chicago Blackhawks", 16),
    ("Detroit Red Wings", 17),
    ("Nashville Predators", 18),
    ("St. Louis Blues", 19),
    ("Calgary Flames", 20),
    ("Colorado Avalanche", 21),
    ("Edmonton Oilers", 22),
    ("Vancouver Canucks", 23),
    ("Anaheim Ducks", 24),
    ("Dallas Stars", 25),
    ("Los Angeles Kings", 26),
    ("San Jose Sharks", 28),
    ("Columbus Blue Jackets", 29),
    ("Minnesota Wild", 30),
    ("Winnipeg Jets", 52),
    ("Arizona Coyotes", 53),
    ("Vegas Golden Knights", 54),
    ("Seattle Kraken", 55),
];

/// Mapping from team name to [`TeamId`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TeamDirectory {
    teams: BTreeMap<String, TeamId>,
}

impl TeamDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of current NHL franchises.
    pub fn bundled() -> Self {
        BUNDLED_TEAMS
            .iter()
            .map(|(name, id)| (name.to_string(), TeamId::new(*id)))
            .collect()
    }

    /// Load a JSON object of `{ "Team Name": id }` from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        Self::from_json(&raw).map_err(|e| NhlError::TeamDirectory {
            message: format!("{}: {}", path.display(), e),
        })
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let teams: BTreeMap<String, TeamId> = serde_json::from_str(raw)?;
        Ok(teams.into_iter().collect())
    }

    /// Directory named by `NHL_STATS_TEAMS_FILE`, else the user's
    /// `teams.json` under the config dir, else [`bundled`](Self::bundled).
    pub fn load_default() -> Result<Self> {
        if let Ok(path) = std::env::var(TEAMS_FILE_ENV_VAR) {
            debug!(path = %path, "loading team directory from env");
            return Self::from_path(Path::new(&path));
        }

        let path = default_teams_path();
        if path.is_file() {
            debug!(path = %path.display(), "loading team directory");
            return Self::from_path(&path);
        }

        Ok(Self::bundled())
    }

    /// Write the directory as pretty JSON, creating parent dirs.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let mut f = fs::File::create(path)?;
        f.write_all(serde_json::to_string_pretty(self)?.as_bytes())?;
        Ok(())
    }

    /// Add or replace a team. Any existing name that folds to the same key
    /// is replaced, and its id returned.
    pub fn insert(&mut self, name: impl Into<String>, id: TeamId) -> Option<TeamId> {
        let name = name.into().trim().to_string();
        let key = fold_name(&name);
        let existing = self
            .teams
            .keys()
            .find(|known| fold_name(known) == key)
            .cloned();

        let previous = existing.and_then(|known| self.teams.remove(&known));
        self.teams.insert(name, id);
        previous
    }

    /// Look a team up by name.
    pub fn resolve(&self, name: &str) -> Result<TeamId> {
        let wanted = fold_name(name);
        self.teams
            .iter()
            .find(|(known, _)| !wanted.is_empty() && fold_name(known) == wanted)
            .map(|(_, id)| *id)
            .ok_or_else(|| NhlError::UnknownTeam {
                name: name.to_string(),
            })
    }

    /// Numeric text is taken as an id as-is; anything else is a name.
    pub fn resolve_identifier(&self, identifier: &str) -> Result<TeamId> {
        match identifier.trim().parse::<u32>() {
            Ok(id) => Ok(TeamId::new(id)),
            Err(_) => self.resolve(identifier),
        }
    }

    pub fn name_of(&self, id: TeamId) -> Option<&str> {
        self.teams
            .iter()
            .find(|(_, known)| **known == id)
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, TeamId)> + '_ {
        self.teams.iter().map(|(name, id)| (name.as_str(), *id))
    }
}

impl FromIterator<(String, TeamId)> for TeamDirectory {
    fn from_iter<I: IntoIterator<Item = (String, TeamId)>>(iter: I) -> Self {
        let mut directory = Self::new();
        for (name, id) in iter {
            directory.insert(name, id);
        }
        directory
    }
}

/// Comparison key for team names.
fn fold_name(name: &str) -> String {
    name.trim()
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| match c {
            'à' | 'á' | 'â' | 'ã' | 'ä' | 'å' => 'a',
            'ç' => 'c',
            'è' | 'é' | 'ê' | 'ë' => 'e',
            'ì' | 'í' | 'î' | 'ï' => 'i',
            'ñ' => 'n',
            'ò' | 'ó' | 'ô' | 'õ' | 'ö' => 'o',
            'ù' | 'ú' | 'û' | 'ü' => 'u',
            'ý' | 'ÿ' => 'y',
            other => other,
        })
        .collect()
}

/// Path: ~/.config/nhl-stats/teams.json
pub fn default_teams_path() -> PathBuf {
    let base = dirs::config_dir().unwrap_or_else(|| {
        let mut home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        home.push(".config");
        home
    });
    base.join("nhl-stats").join("teams.json")
}
