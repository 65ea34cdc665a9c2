//! Opponent slot of a match: a real player, a bye, or the not-yet-known play-in winner.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of [`Slot::Bye`].
pub const BYE: &str = "BYE";
/// Wire value of [`Slot::PlayInWinner`].
pub const PLAY_IN_WINNER: &str = "PLAY_IN_WINNER";

/// Who occupies one side of a match.
///
/// Serialized as a plain string so stored records keep the `"BYE"` / `"PLAY_IN_WINNER"` sentinels.
#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Slot {
    Player(PlayerId),
    Bye,
    PlayInWinner,
}

impl Slot {
    pub fn player(id: impl Into<PlayerId>) -> Self {
        Slot::Player(id.into())
    }

    /// The player id, if this slot holds a real player.
    pub fn player_id(&self) -> Option<&PlayerId> {
        match self {
            Slot::Player(id) => Some(id),
            Slot::Bye | Slot::PlayInWinner => None,
        }
    }

    pub fn is_bye(&self) -> bool {
        matches!(self, Slot::Bye)
    }

    pub fn is_player(&self, id: &str) -> bool {
        matches!(self, Slot::Player(p) if p == id)
    }
}

impl From<String> for Slot {
    fn from(value: String) -> Self {
        match value.as_str() {
            BYE => Slot::Bye,
            PLAY_IN_WINNER => Slot::PlayInWinner,
            _ => Slot::Player(value),
        }
    }
}

impl From<&str> for Slot {
    fn from(value: &str) -> Self {
        Slot::from(value.to_string())
    }
}

impl From<Slot> for String {
    fn from(slot: Slot) -> Self {
        match slot {
            Slot::Player(id) => id,
            Slot::Bye => BYE.to_string(),
            Slot::PlayInWinner => PLAY_IN_WINNER.to_string(),
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Slot::Player(id) => write!(f, "{id}"),
            Slot::Bye => write!(f, "{BYE}"),
            Slot::PlayInWinner => write!(f, "{PLAY_IN_WINNER}"),
        }
    }
}
