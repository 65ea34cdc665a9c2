//! Player and PlayerStanding data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque player identifier (used in matches, games and rankings).
pub type PlayerId = String;

/// A registered player: identity only. Results live in the tournament's matches.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
}

impl Player {
    /// Create a new player with a freshly generated id.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
        }
    }

    /// Create a player with a caller-chosen id (imports, tests).
    pub fn with_id(id: impl Into<PlayerId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// One row of the standings table (for API / display).
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct PlayerStanding {
    pub player_id: PlayerId,
    pub name: String,
    pub wins: u32,
    pub losses: u32,
    pub point_diff: i64,
    pub games_won: u32,
    pub games_lost: u32,
    /// False once the player has been left out of future pairings.
    pub active: bool,
}
