//! Data structures for the table tennis tournament: players, games, matches, tournament state.

mod game;
mod matches;
mod player;
mod slot;
mod tournament;

pub use game::{Game, GameId};
pub use matches::{Match, MatchId, RoundType};
pub use player::{Player, PlayerId, PlayerStanding};
pub use slot::{Slot, BYE, PLAY_IN_WINNER};
pub use tournament::{
    BracketRoundConfig, ScoreError, SwapScope, Tournament, TournamentConfig, TournamentError,
    TournamentId, TournamentStatus,
};
