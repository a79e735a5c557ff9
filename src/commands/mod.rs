//! Command implementations for the NHL stats CLI.
//!
//! Each handler runs one client call and returns the result as JSON so the
//! binary only has to print it.

pub mod game;
pub mod player;
pub mod team;

use serde::Serialize;
use serde_json::Value;

use crate::Result;

pub use game::handle_game;
pub use player::handle_player;
pub use team::handle_team;

pub(crate) fn to_output<T: Serialize>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Render handler output: bare strings and numbers as-is, the rest as
/// pretty JSON.
pub fn render(value: &Value) -> Result<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        other => Ok(serde_json::to_string_pretty(other)?),
    }
}
