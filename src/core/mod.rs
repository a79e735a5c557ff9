//! Core utilities for the NHL stats client
//!
//! - `config`: client settings and their environment overrides
//! - `http`: the shared request handle and status policy
//! - `teams`: team name → id directory

pub mod config;
pub mod http;
pub mod teams;

// Re-export commonly used items for convenience
pub use config::{ClientConfig, NHL_BASE_URL};
pub use http::{default_header_map, Handle};
pub use teams::{default_teams_path, TeamDirectory};
