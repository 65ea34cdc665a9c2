//! Play-in resolution: keep the bracket round 1 slot fed by the play-in in line with its result.

use crate::models::{Match, PlayerId, RoundType, Slot};

/// Winner of the play-in match (bracket round 0), if it has been decided.
pub fn play_in_winner(matches: &[Match]) -> Option<&PlayerId> {
    matches
        .iter()
        .find(|m| m.is_play_in())
        .and_then(|m| m.winner.as_ref())
}

/// Whether a bracket round 1 match holding a play-in player has started (games or a winner).
pub fn play_in_fed_round_started(matches: &[Match]) -> bool {
    let Some((a, b)) = play_in_players(matches) else {
        return false;
    };
    matches
        .iter()
        .filter(|m| is_round_one(m) && !m.is_untouched())
        .any(|m| m.involves(&a) || m.involves(&b))
}

/// Point the round 1 slot fed by the play-in at its current result.
///
/// The slot is the one reading `PlayInWinner` or either play-in player. It gets the play-in
/// winner, or goes back to `PlayInWinner` while the play-in is undecided. Only unplayed round 1
/// matches are changed. Returns true if a slot changed.
pub fn sync_play_in(matches: &mut [Match]) -> bool {
    let Some((a, b)) = play_in_players(matches) else {
        return false;
    };
    let fill = match play_in_winner(matches) {
        Some(winner) => Slot::Player(winner.clone()),
        None => Slot::PlayInWinner,
    };

    let mut changed = false;
    for m in matches
        .iter_mut()
        .filter(|m| is_round_one(m) && m.is_untouched())
    {
        for slot in [&mut m.player_1, &mut m.player_2] {
            let fed = *slot == Slot::PlayInWinner || slot.is_player(&a) || slot.is_player(&b);
            if fed && *slot != fill {
                *slot = fill.clone();
                changed = true;
            }
        }
    }
    if changed {
        log::debug!("Play-in slot in bracket round 1 set to {}", fill);
    }
    changed
}

fn play_in_players(matches: &[Match]) -> Option<(PlayerId, PlayerId)> {
    let play_in = matches.iter().find(|m| m.is_play_in())?;
    play_in.players().map(|(a, b)| (a.clone(), b.clone()))
}

fn is_round_one(m: &Match) -> bool {
    m.round == RoundType::Bracket && m.bracket_round == 1
}
