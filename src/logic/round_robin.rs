//! Round robin stage: pairing a round and generating the next one.

use crate::logic::ranking::rank_players;
use crate::models::{
    Match, PlayerId, RoundType, Slot, Tournament, TournamentError, TournamentId, TournamentStatus,
};
use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// How players are ordered before pairing.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PairingOrder {
    /// Shuffle the active players.
    #[default]
    Random,
    /// Order by current standings so leaders meet each other.
    TopVsTop,
}

/// Pair one round robin round from `players` in the order given.
///
/// With an odd count the last player gets an auto-won bye match. Remaining players are
/// paired two at a time: (0, 1), (2, 3), ...
pub fn pair_round_robin(
    players: &[PlayerId],
    tournament_id: TournamentId,
    round_number: u32,
    best_of: u32,
) -> Vec<Match> {
    let (paired, bye) = match players.split_last() {
        Some((last, rest)) if players.len() % 2 == 1 => (rest, Some(last)),
        _ => (players, None),
    };

    let mut matches: Vec<Match> = paired
        .chunks_exact(2)
        .map(|pair| {
            Match::new(
                tournament_id,
                Slot::Player(pair[0].clone()),
                Slot::Player(pair[1].clone()),
                RoundType::RoundRobin,
                round_number,
                best_of,
            )
        })
        .collect();

    if let Some(player) = bye {
        matches.push(Match::bye(
            tournament_id,
            player.clone(),
            RoundType::RoundRobin,
            round_number,
            best_of,
        ));
    }

    log::debug!(
        "Paired round robin round {} for {} players ({} matches)",
        round_number,
        players.len(),
        matches.len()
    );
    matches
}

/// Generate the next round robin round for the active players.
///
/// 1. Tournament must still be in round robin with rounds left to play.
/// 2. Every match of the latest round must have a winner.
/// 3. Order active players per `order`, then pair with [`pair_round_robin`].
///
/// Returns the new matches; the caller appends them to the tournament.
pub fn generate_round_robin_round<R>(
    tournament: &Tournament,
    order: PairingOrder,
    rng: &mut R,
) -> Result<Vec<Match>, TournamentError>
where
    R: Rng + ?Sized,
{
    if tournament.status != TournamentStatus::RoundRobin {
        return Err(TournamentError::InvalidState);
    }

    let current = tournament.current_round_robin_round();
    if current >= tournament.round_robin_rounds {
        return Err(TournamentError::NoRoundsRemaining(tournament.round_robin_rounds));
    }
    let incomplete = tournament
        .matches
        .iter()
        .any(|m| {
            m.round == RoundType::RoundRobin && m.bracket_round == current && !m.is_decided()
        });
    if incomplete {
        return Err(TournamentError::IncompleteRound);
    }

    let mut players = tournament.active_player_ids();
    if players.len() < 2 {
        return Err(TournamentError::NotEnoughPlayers);
    }
    match order {
        PairingOrder::Random => players.shuffle(rng),
        PairingOrder::TopVsTop => players = rank_players(&players, &tournament.matches, rng),
    }

    Ok(pair_round_robin(
        &players,
        tournament.id,
        current + 1,
        tournament.round_robin_best_of,
    ))
}
