//! Bracket seeding: rank the active players and build the play-in and first bracket round.

use crate::logic::ranking::rank_players;
use crate::models::{Match, PlayerId, RoundType, Slot, Tournament, TournamentStatus};
use rand::Rng;

/// Result of seeding: new matches plus the ranking used to build them.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct BracketSeed {
    pub matches: Vec<Match>,
    /// Empty when seeding was a no-op.
    pub ranking: Vec<PlayerId>,
}

impl BracketSeed {
    /// Store the ranking and the new matches on the tournament; move it into the bracket phase.
    pub fn apply(self, tournament: &mut Tournament) {
        if !self.ranking.is_empty() {
            tournament.player_ranking = Some(self.ranking);
        }
        if !self.matches.is_empty() {
            tournament.status = TournamentStatus::Bracket;
            tournament.matches.extend(self.matches);
        }
    }
}

/// Seed the single-elimination bracket.
///
/// No-op when bracket round 1 already exists or fewer than 2 players are active.
///
/// 1. Rank the active players by round robin wins, then point differential (ties random).
/// 2. Odd pool: the two lowest seeds play a Bo1 play-in (bracket round 0). With
///    `with_main_bracket`, round 1 is built from the rest plus the `PlayInWinner` slot.
/// 3. Even pool: round 1 padded to a power of two; top seeds receive the byes.
///
/// If a play-in was seeded earlier, the stored ranking is reused and no second play-in is made.
pub fn seed_bracket<R>(tournament: &Tournament, with_main_bracket: bool, rng: &mut R) -> BracketSeed
where
    R: Rng + ?Sized,
{
    let is_seeded = tournament
        .matches
        .iter()
        .any(|m| m.round == RoundType::Bracket && m.bracket_round >= 1);
    if is_seeded {
        return BracketSeed::default();
    }

    let pool = tournament.active_player_ids();
    if pool.len() < 2 {
        return BracketSeed::default();
    }

    let has_play_in = tournament.matches.iter().any(Match::is_play_in);
    let ranking = match (&tournament.player_ranking, has_play_in) {
        (Some(stored), true) => stored.clone(),
        _ => {
            let round_robin = tournament
                .matches
                .iter()
                .filter(|m| m.round == RoundType::RoundRobin);
            rank_players(&pool, round_robin, rng)
        }
    };

    let mut matches = Vec::new();
    let n = ranking.len();
    if n % 2 == 1 {
        if !has_play_in {
            matches.push(Match::new(
                tournament.id,
                Slot::Player(ranking[n - 2].clone()),
                Slot::Player(ranking[n - 1].clone()),
                RoundType::Bracket,
                0,
                1,
            ));
        }
        if with_main_bracket {
            let mut entrants: Vec<Slot> = ranking[..n - 2].iter().cloned().map(Slot::Player).collect();
            entrants.push(Slot::PlayInWinner);
            matches.extend(first_round(tournament, &entrants));
        }
    } else {
        let entrants: Vec<Slot> = ranking.iter().cloned().map(Slot::Player).collect();
        matches.extend(first_round(tournament, &entrants));
    }

    log::debug!(
        "Seeded bracket for tournament {} with {} players ({} matches)",
        tournament.id,
        n,
        matches.len()
    );
    BracketSeed { matches, ranking }
}

/// Bracket round 1 from seed-ordered entrants (even count).
///
/// The field is padded to the next power of two: the top `size - n` seeds get bye matches,
/// the rest are paired rank-adjacent. Series length is looked up by the round's match count.
fn first_round(tournament: &Tournament, entrants: &[Slot]) -> Vec<Match> {
    let size = entrants.len().next_power_of_two();
    let num_byes = size - entrants.len();
    let best_of = tournament.bracket_best_of(size / 2).unwrap_or(1);

    let byes = entrants[..num_byes]
        .iter()
        .filter_map(Slot::player_id)
        .map(|id| Match::bye(tournament.id, id.clone(), RoundType::Bracket, 1, 1));

    let pairs = entrants[num_byes..].chunks_exact(2).map(|pair| {
        Match::new(
            tournament.id,
            pair[0].clone(),
            pair[1].clone(),
            RoundType::Bracket,
            1,
            best_of,
        )
    });

    byes.chain(pairs).collect()
}
