//! A single game (one contest to 11) inside a match.

use crate::models::matches::MatchId;
use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a game.
pub type GameId = Uuid;

/// One completed game. Immutable apart from its two score fields.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub match_id: Option<MatchId>,
    pub player_1: PlayerId,
    pub player_2: PlayerId,
    pub score_1: u32,
    pub score_2: u32,
    pub played_at: DateTime<Utc>,
}

impl Game {
    pub fn new(
        match_id: Option<MatchId>,
        player_1: impl Into<PlayerId>,
        player_2: impl Into<PlayerId>,
        score_1: u32,
        score_2: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            match_id,
            player_1: player_1.into(),
            player_2: player_2.into(),
            score_1,
            score_2,
            played_at: Utc::now(),
        }
    }

    /// The side with the higher score. None only for a tie, which validation never lets through.
    pub fn winner(&self) -> Option<&PlayerId> {
        if self.score_1 > self.score_2 {
            Some(&self.player_1)
        } else if self.score_2 > self.score_1 {
            Some(&self.player_2)
        } else {
            None
        }
    }

    /// Points scored minus points conceded for `player` (0 if they did not play this game).
    pub fn point_diff_for(&self, player: &str) -> i64 {
        let (s1, s2) = (i64::from(self.score_1), i64::from(self.score_2));
        if self.player_1 == player {
            s1 - s2
        } else if self.player_2 == player {
            s2 - s1
        } else {
            0
        }
    }
}
