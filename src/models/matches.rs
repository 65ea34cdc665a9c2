//! Match (best-of-N series between two slots) and RoundType.

use crate::models::game::Game;
use crate::models::player::PlayerId;
use crate::models::slot::Slot;
use crate::models::tournament::TournamentId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = Uuid;

/// Phase of the tournament this match belongs to.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundType {
    RoundRobin,
    Bracket,
}

/// A pairing that produces up to `best_of` games.
///
/// `bracket_round` is the round number: round robin rounds start at 1, bracket round 0 is the play-in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub tournament_id: TournamentId,
    pub player_1: Slot,
    pub player_2: Slot,
    pub round: RoundType,
    pub bracket_round: u32,
    pub best_of: u32,
    pub games: Vec<Game>,
    /// None until the series is decided. Always one of the two players.
    pub winner: Option<PlayerId>,
}

impl Match {
    pub fn new(
        tournament_id: TournamentId,
        player_1: Slot,
        player_2: Slot,
        round: RoundType,
        bracket_round: u32,
        best_of: u32,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            tournament_id,
            player_1,
            player_2,
            round,
            bracket_round,
            best_of,
            games: Vec::new(),
            winner: None,
        }
    }

    /// An auto-won match: `player` against a bye, already decided, no games.
    pub fn bye(
        tournament_id: TournamentId,
        player: PlayerId,
        round: RoundType,
        bracket_round: u32,
        best_of: u32,
    ) -> Self {
        Self {
            winner: Some(player.clone()),
            ..Self::new(
                tournament_id,
                Slot::Player(player),
                Slot::Bye,
                round,
                bracket_round,
                best_of,
            )
        }
    }

    pub fn is_bye(&self) -> bool {
        self.player_1.is_bye() || self.player_2.is_bye()
    }

    pub fn is_play_in(&self) -> bool {
        self.round == RoundType::Bracket && self.bracket_round == 0
    }

    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }

    /// No games recorded and no winner: safe to re-pair.
    pub fn is_untouched(&self) -> bool {
        self.games.is_empty() && self.winner.is_none()
    }

    pub fn involves(&self, player: &str) -> bool {
        self.player_1.is_player(player) || self.player_2.is_player(player)
    }

    /// Game wins needed to take the series: ceil(best_of / 2).
    pub fn required_wins(&self) -> u32 {
        self.best_of.div_ceil(2)
    }

    /// Both real player ids, or None while a side is a bye or the pending play-in winner.
    pub fn players(&self) -> Option<(&PlayerId, &PlayerId)> {
        Some((self.player_1.player_id()?, self.player_2.player_id()?))
    }
}
