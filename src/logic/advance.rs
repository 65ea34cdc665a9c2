//! Bracket advancement: build the next round from the winners of the current one.

use crate::models::{Match, PlayerId, RoundType, Slot, Tournament, TournamentStatus};
use std::collections::HashSet;

/// Result of advancing: the next round's matches, or `completed` once a champion is known.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BracketAdvance {
    pub matches: Vec<Match>,
    pub completed: bool,
}

impl BracketAdvance {
    pub fn apply(self, tournament: &mut Tournament) {
        if self.completed {
            tournament.status = TournamentStatus::Completed;
        }
        tournament.matches.extend(self.matches);
    }
}

/// Advance the bracket by one round.
///
/// Only bracket rounds >= 1 are considered; the play-in feeds round 1 through its slot instead.
/// Returns an empty result while the highest round has undecided matches, and `completed`
/// when that round leaves fewer than 2 winners.
///
/// Winners are ordered by the stored ranking. If the two top seeds both had round 1 byes,
/// seeds 2 and 3 trade places so they do not meet straight away. An odd number of winners
/// out of round 1 gives the lowest seed a Bo1 bye; later rounds pair as-is and an odd last
/// winner is left unpaired.
pub fn advance_bracket(tournament: &Tournament) -> BracketAdvance {
    let bracket: Vec<&Match> = tournament
        .matches
        .iter()
        .filter(|m| m.round == RoundType::Bracket && m.bracket_round > 0)
        .collect();
    let Some(current_round) = bracket.iter().map(|m| m.bracket_round).max() else {
        return BracketAdvance::default();
    };

    let current: Vec<&Match> = bracket
        .iter()
        .copied()
        .filter(|m| m.bracket_round == current_round)
        .collect();
    if current.iter().any(|m| !m.is_decided()) {
        return BracketAdvance::default();
    }

    let mut winners: Vec<PlayerId> = current.iter().filter_map(|m| m.winner.clone()).collect();
    if winners.len() < 2 {
        log::debug!("Tournament {} completed", tournament.id);
        return BracketAdvance {
            matches: Vec::new(),
            completed: true,
        };
    }

    let next_round = current_round + 1;
    let best_of = next_round_best_of(tournament, winners.len() / 2);

    if let Some(ranking) = &tournament.player_ranking {
        winners.sort_by_key(|w| ranking.iter().position(|r| r == w).unwrap_or(usize::MAX));
    }
    if winners.len() >= 3 {
        let bye_recipients: HashSet<&PlayerId> = bracket
            .iter()
            .filter(|m| m.bracket_round == 1 && m.is_bye())
            .filter_map(|m| m.winner.as_ref())
            .collect();
        if bye_recipients.contains(&winners[0]) && bye_recipients.contains(&winners[1]) {
            winners.swap(1, 2);
        }
    }

    let mut matches = Vec::new();
    if winners.len() % 2 == 1 && current_round == 1 {
        if let Some(lowest) = winners.pop() {
            matches.push(Match::bye(tournament.id, lowest, RoundType::Bracket, next_round, 1));
        }
    }
    matches.extend(winners.chunks_exact(2).map(|pair| {
        Match::new(
            tournament.id,
            Slot::Player(pair[0].clone()),
            Slot::Player(pair[1].clone()),
            RoundType::Bracket,
            next_round,
            best_of,
        )
    }));

    log::debug!(
        "Advanced tournament {} to bracket round {} ({} matches)",
        tournament.id,
        next_round,
        matches.len()
    );
    BracketAdvance {
        matches,
        completed: false,
    }
}

/// Series length for a round of `matches` matches: exact config entry, else the last entry, else 1.
fn next_round_best_of(tournament: &Tournament, matches: usize) -> u32 {
    tournament
        .bracket_best_of(matches)
        .or_else(|| tournament.bracket_rounds.last().map(|c| c.best_of))
        .unwrap_or(1)
}
