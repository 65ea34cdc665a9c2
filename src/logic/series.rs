//! Match series: recording games and recomputing the series winner.

use crate::logic::play_in::{play_in_fed_round_started, sync_play_in};
use crate::logic::scoring::validate_scores;
use crate::models::{Game, GameId, Match, MatchId, PlayerId, Tournament, TournamentError};

/// Winner of the series from its games, or None while neither side has enough game wins.
///
/// Bye matches keep their auto-winner.
pub fn series_winner(m: &Match) -> Option<PlayerId> {
    if m.is_bye() {
        return m
            .player_1
            .player_id()
            .or_else(|| m.player_2.player_id())
            .cloned();
    }
    let (p1, p2) = m.players()?;
    let required = m.required_wins();

    let mut p1_wins = 0;
    let mut p2_wins = 0;
    for g in &m.games {
        match g.winner() {
            Some(w) if w == p1 => p1_wins += 1,
            Some(w) if w == p2 => p2_wins += 1,
            _ => {}
        }
    }

    if p1_wins >= required {
        Some(p1.clone())
    } else if p2_wins >= required {
        Some(p2.clone())
    } else {
        None
    }
}

/// Copy of `m` with `winner` recomputed from its games. Clears a stale winner.
pub fn recompute_winner(m: &Match) -> Match {
    let mut next = m.clone();
    next.winner = series_winner(m);
    next
}

/// Validate and append a game to a match, then recompute the winner. Returns the new game's id.
///
/// Score 1 belongs to the match's player 1.
pub fn record_game(
    tournament: &mut Tournament,
    match_id: MatchId,
    score_1: u32,
    score_2: u32,
) -> Result<GameId, TournamentError> {
    validate_scores(score_1, score_2)?;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if m.is_decided() {
        return Err(TournamentError::MatchDecided);
    }
    let (p1, p2) = m.players().ok_or(TournamentError::UnresolvedOpponent)?;
    let game = Game::new(Some(match_id), p1.clone(), p2.clone(), score_1, score_2);
    let id = game.id;
    m.games.push(game);
    m.winner = series_winner(m);
    let is_play_in = m.is_play_in();
    if is_play_in {
        sync_play_in(&mut tournament.matches);
    }
    Ok(id)
}

/// Replace the scores of a recorded game, then recompute the winner.
///
/// Play-in games are locked once the round 1 match they feed has started.
pub fn edit_game(
    tournament: &mut Tournament,
    match_id: MatchId,
    game_id: GameId,
    score_1: u32,
    score_2: u32,
) -> Result<(), TournamentError> {
    validate_scores(score_1, score_2)?;
    let is_play_in = check_play_in_open(tournament, match_id)?;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let game = m
        .games
        .iter_mut()
        .find(|g| g.id == game_id)
        .ok_or(TournamentError::GameNotFound(game_id))?;
    game.score_1 = score_1;
    game.score_2 = score_2;
    m.winner = series_winner(m);
    if is_play_in {
        sync_play_in(&mut tournament.matches);
    }
    Ok(())
}

/// Remove a recorded game, then recompute the winner.
///
/// Play-in games are locked once the round 1 match they feed has started.
pub fn delete_game(
    tournament: &mut Tournament,
    match_id: MatchId,
    game_id: GameId,
) -> Result<(), TournamentError> {
    let is_play_in = check_play_in_open(tournament, match_id)?;
    let m = tournament
        .get_match_mut(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    let idx = m
        .games
        .iter()
        .position(|g| g.id == game_id)
        .ok_or(TournamentError::GameNotFound(game_id))?;
    m.games.remove(idx);
    m.winner = series_winner(m);
    if is_play_in {
        sync_play_in(&mut tournament.matches);
    }
    Ok(())
}

/// Whether `match_id` is the play-in; errors if its result already reached a started round 1 match.
fn check_play_in_open(tournament: &Tournament, match_id: MatchId) -> Result<bool, TournamentError> {
    let m = tournament
        .get_match(match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !m.is_play_in() {
        return Ok(false);
    }
    if play_in_fed_round_started(&tournament.matches) {
        return Err(TournamentError::PlayInLocked);
    }
    Ok(true)
}
