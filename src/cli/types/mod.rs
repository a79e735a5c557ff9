//! Type-safe wrappers and enums for NHL API identifiers and query parameters.

pub mod ids;
pub mod split;
pub mod time;


pub use ids::{GameId, PlayerId, TeamId};
pub use split::StatSplit;
pub use time::Season;
