//! Player swaps on unplayed matches, cascading the displaced player through the round.

use crate::models::{Match, MatchId, RoundType, Slot, SwapScope, TournamentError};
use std::collections::HashMap;

impl SwapScope {
    /// Whether players of `m` may be changed under this scope.
    fn admits(self, m: &Match) -> bool {
        match self {
            SwapScope::RoundRobin => m.round == RoundType::RoundRobin,
            SwapScope::BracketRoundOne => m.round == RoundType::Bracket && m.bracket_round == 1,
        }
    }
}

/// Put `new_player_1` / `new_player_2` into match `match_id` and return the updated match list.
///
/// Checks, in order: the match exists, it is in `scope`, it has no games, the new players differ.
///
/// Each player removed from the target takes the place of an incoming player (paired by position)
/// in the other unplayed matches of the same round, so everyone still plays once per round.
/// Matches with games, or decided other than by a bye, are never changed. The input is left as is.
pub fn swap_players(
    matches: &[Match],
    match_id: MatchId,
    new_player_1: Slot,
    new_player_2: Slot,
    scope: SwapScope,
) -> Result<Vec<Match>, TournamentError> {
    let target = matches
        .iter()
        .find(|m| m.id == match_id)
        .ok_or(TournamentError::MatchNotFound(match_id))?;
    if !scope.admits(target) {
        return Err(TournamentError::PlayersLocked(scope));
    }
    if !target.games.is_empty() {
        return Err(TournamentError::GamesAlreadyPlayed);
    }
    if new_player_1 == new_player_2 {
        return Err(TournamentError::SamePlayerTwice);
    }

    let old = [target.player_1.clone(), target.player_2.clone()];
    let new = [new_player_1, new_player_2];
    let displaced = old.iter().filter(|s| !new.contains(s));
    let incoming = new.iter().filter(|s| !old.contains(s));
    let moves: HashMap<&Slot, &Slot> = incoming.zip(displaced).collect();
    let round = target.bracket_round;

    Ok(matches
        .iter()
        .map(|m| {
            let mut m = m.clone();
            if m.id == match_id {
                m.player_1 = new[0].clone();
                m.player_2 = new[1].clone();
                settle_bye(&mut m);
            } else if scope.admits(&m) && m.bracket_round == round && is_repairable(&m) {
                let mut moved = false;
                if let Some(&to) = moves.get(&m.player_1) {
                    m.player_1 = to.clone();
                    moved = true;
                }
                if let Some(&to) = moves.get(&m.player_2) {
                    m.player_2 = to.clone();
                    moved = true;
                }
                if moved {
                    settle_bye(&mut m);
                }
            }
            m
        })
        .collect())
}

/// No games yet, and any winner only comes from a bye, so it can be re-derived.
fn is_repairable(m: &Match) -> bool {
    m.games.is_empty() && (m.winner.is_none() || m.is_bye())
}

/// A re-paired match has no games: it is either an auto-won bye (bye kept in slot 2) or undecided.
fn settle_bye(m: &mut Match) {
    if m.player_1.is_bye() {
        std::mem::swap(&mut m.player_1, &mut m.player_2);
    }
    m.winner = match m.player_2 {
        Slot::Bye => m.player_1.player_id().cloned(),
        _ => None,
    };
}
