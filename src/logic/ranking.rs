//! Player ranking and standings: wins first, point differential second.

use crate::models::{Match, PlayerId, PlayerStanding, Tournament};
use rand::Rng;
use std::cmp::Reverse;
use std::collections::HashMap;

/// Accumulated results for one player.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
    pub point_diff: i64,
    pub games_won: u32,
    pub games_lost: u32,
}

/// Tally wins/losses (from match winners, byes included) and points (from games) per player.
pub fn tally_results<'a>(matches: impl IntoIterator<Item = &'a Match>) -> HashMap<PlayerId, Tally> {
    let mut tallies: HashMap<PlayerId, Tally> = HashMap::new();
    for m in matches {
        if let Some(winner) = &m.winner {
            tallies.entry(winner.clone()).or_default().wins += 1;
            for loser in [&m.player_1, &m.player_2]
                .into_iter()
                .filter_map(|s| s.player_id())
                .filter(|id| *id != winner)
            {
                tallies.entry(loser.clone()).or_default().losses += 1;
            }
        }
        for g in &m.games {
            for player in [&g.player_1, &g.player_2] {
                let t = tallies.entry(player.clone()).or_default();
                t.point_diff += g.point_diff_for(player);
                match g.winner() {
                    Some(w) if w == player => t.games_won += 1,
                    Some(_) => t.games_lost += 1,
                    None => {}
                }
            }
        }
    }
    tallies
}

/// Order `players` by wins (desc), then point differential (desc).
///
/// Results from every match passed in count, including those of players outside `players`.
/// Exact ties are broken by a random key drawn from `rng`.
pub fn rank_players<'a, R>(
    players: &[PlayerId],
    matches: impl IntoIterator<Item = &'a Match>,
    rng: &mut R,
) -> Vec<PlayerId>
where
    R: Rng + ?Sized,
{
    let tallies = tally_results(matches);
    let mut with_tiebreak: Vec<(PlayerId, Tally, u32)> = players
        .iter()
        .map(|id| {
            let t = tallies.get(id).copied().unwrap_or_default();
            (id.clone(), t, rng.gen::<u32>())
        })
        .collect();
    with_tiebreak.sort_by_key(|(_, t, tiebreak)| (Reverse(t.wins), Reverse(t.point_diff), *tiebreak));
    with_tiebreak.into_iter().map(|(id, _, _)| id).collect()
}

/// Standings table over every player and every recorded match.
///
/// Sorted like [`rank_players`], with exact ties listed by name so the table is stable between reads.
pub fn standings(tournament: &Tournament) -> Vec<PlayerStanding> {
    let tallies = tally_results(&tournament.matches);
    let mut rows: Vec<PlayerStanding> = tournament
        .players
        .iter()
        .map(|p| {
            let t = tallies.get(&p.id).copied().unwrap_or_default();
            PlayerStanding {
                player_id: p.id.clone(),
                name: p.name.clone(),
                wins: t.wins,
                losses: t.losses,
                point_diff: t.point_diff,
                games_won: t.games_won,
                games_lost: t.games_lost,
                active: tournament.is_active(&p.id),
            }
        })
        .collect();
    rows.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(b.point_diff.cmp(&a.point_diff))
            .then_with(|| a.name.cmp(&b.name))
    });
    rows
}
