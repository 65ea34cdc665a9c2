//! Tournament business logic: scoring, round robin, ranking, bracket, swaps.

mod advance;
mod play_in;
mod ranking;
mod round_robin;
mod scoring;
mod seeding;
mod series;
mod setup;
mod swap;

pub use advance::{advance_bracket, BracketAdvance};
pub use play_in::{play_in_fed_round_started, play_in_winner, sync_play_in};
pub use ranking::{rank_players, standings, tally_results, Tally};
pub use round_robin::{generate_round_robin_round, pair_round_robin, PairingOrder};
pub use scoring::{validate_scores, DEUCE_MARGIN, WINNING_SCORE};
pub use seeding::{seed_bracket, BracketSeed};
pub use series::{delete_game, edit_game, record_game, recompute_winner, series_winner};
pub use setup::{import_players_csv, start_tournament};
pub use swap::swap_players;
