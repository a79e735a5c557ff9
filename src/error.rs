//! Error types for the NHL stats client

use thiserror::Error;


pub type Result<T> = std::result::Result<T, NhlError>;

#[derive(Error, Debug)]
pub enum NhlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse identifier: {0}")]
    InvalidId(#[from] std::num::ParseIntError),

    #[error("Unknown team: {name}")]
    UnknownTeam { name: String },

    #[error("NHL API unavailable: {url} returned {status}")]
    Upstream {
        status: reqwest::StatusCode,
        url: String,
    },

    #[error("Unexpected response shape: missing {path}")]
    UnexpectedShape { path: String },

    #[error("Unknown stat: {name}")]
    UnknownStat { name: String },

    #[error("Invalid season {value:?}, expected YYYYYYYY (e.g. 20162017)")]
    InvalidSeason { value: String },

    #[error("Invalid stat split: {value}")]
    InvalidSplit { value: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },

    #[error("Team directory error: {message}")]
    TeamDirectory { message: String },
}

impl NhlError {
    pub(crate) fn shape(path: impl Into<String>) -> Self {
        NhlError::UnexpectedShape { path: path.into() }
    }
}
