//! Table tennis tournament: library with models and the tournament-progression engine.

pub mod logic;
pub mod models;

pub use logic::{
    advance_bracket, delete_game, edit_game, generate_round_robin_round, import_players_csv,
    pair_round_robin, play_in_fed_round_started, play_in_winner, rank_players, record_game,
    recompute_winner, seed_bracket, series_winner, standings, start_tournament, swap_players,
    sync_play_in, tally_results, validate_scores, BracketAdvance, BracketSeed, PairingOrder, Tally,
};
pub use models::{
    BracketRoundConfig, Game, GameId, Match, MatchId, Player, PlayerId, PlayerStanding,
    RoundType, ScoreError, Slot, SwapScope, Tournament, TournamentConfig, TournamentError,
    TournamentId, TournamentStatus, BYE, PLAY_IN_WINNER,
};
