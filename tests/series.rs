//! Integration tests for match winners and game recording.

use table_tennis_tournament::{
    delete_game, edit_game, record_game, recompute_winner, series_winner, Game, Match, Player,
    RoundType, ScoreError, Slot, Tournament, TournamentConfig, TournamentError,
};
use uuid::Uuid;

fn series(best_of: u32, results: &[(u32, u32)]) -> Match {
    let mut m = Match::new(
        Uuid::new_v4(),
        Slot::player("p1"),
        Slot::player("p2"),
        RoundType::RoundRobin,
        1,
        best_of,
    );
    for &(s1, s2) in results {
        m.games.push(Game::new(Some(m.id), "p1", "p2", s1, s2));
    }
    m
}

fn tournament_with(m: Match) -> Tournament {
    let players = vec![Player::with_id("p1", "Ann"), Player::with_id("p2", "Bo")];
    let mut t = Tournament::new(TournamentConfig::new("Club night"), players);
    t.matches.push(Match { tournament_id: t.id, ..m });
    t
}

#[test]
fn best_of_three_two_nil() {
    let m = series(3, &[(11, 5), (11, 8)]);
    assert_eq!(series_winner(&m), Some("p1".to_string()));
}

#[test]
fn best_of_three_one_all_is_undecided() {
    let m = series(3, &[(11, 5), (9, 11)]);
    assert_eq!(series_winner(&m), None);
}

#[test]
fn best_of_five_decided_in_game_five() {
    let m = series(5, &[(11, 5), (11, 8), (7, 11), (10, 12), (6, 11)]);
    assert_eq!(series_winner(&m), Some("p2".to_string()));
}

#[test]
fn game_orientation_does_not_matter() {
    let mut m = series(1, &[]);
    m.games.push(Game::new(Some(m.id), "p2", "p1", 11, 3));
    assert_eq!(series_winner(&m), Some("p2".to_string()));
}

#[test]
fn recompute_is_idempotent_and_clears_stale_winner() {
    let m = series(3, &[(11, 5), (11, 8)]);
    let once = recompute_winner(&m);
    let twice = recompute_winner(&once);
    assert_eq!(once.winner, Some("p1".to_string()));
    assert_eq!(once, twice);

    let mut edited = twice.clone();
    edited.games.pop();
    let cleared = recompute_winner(&edited);
    assert_eq!(cleared.winner, None);
    // The input is not touched.
    assert_eq!(edited.winner, Some("p1".to_string()));
}

#[test]
fn bye_match_keeps_its_winner() {
    let m = Match::bye(Uuid::new_v4(), "p3".to_string(), RoundType::RoundRobin, 1, 3);
    assert_eq!(recompute_winner(&m).winner, Some("p3".to_string()));
}

#[test]
fn record_game_validates_before_mutating() {
    let mut t = tournament_with(series(3, &[]));
    let match_id = t.matches[0].id;
    assert_eq!(
        record_game(&mut t, match_id, 12, 11),
        Err(TournamentError::InvalidScore(ScoreError::MustWinByTwo))
    );
    assert!(t.matches[0].games.is_empty());

    record_game(&mut t, match_id, 11, 4).unwrap();
    record_game(&mut t, match_id, 13, 11).unwrap();
    assert_eq!(t.matches[0].games.len(), 2);
    assert_eq!(t.matches[0].winner, Some("p1".to_string()));
    assert_eq!(t.matches[0].games[0].match_id, Some(match_id));

    assert_eq!(
        record_game(&mut t, match_id, 11, 4),
        Err(TournamentError::MatchDecided)
    );
}

#[test]
fn record_game_needs_two_real_players() {
    let mut m = series(1, &[]);
    m.player_2 = Slot::PlayInWinner;
    let mut t = tournament_with(m);
    let match_id = t.matches[0].id;
    assert_eq!(
        record_game(&mut t, match_id, 11, 4),
        Err(TournamentError::UnresolvedOpponent)
    );

    let missing = Uuid::new_v4();
    assert_eq!(
        record_game(&mut t, missing, 11, 4),
        Err(TournamentError::MatchNotFound(missing))
    );
}

#[test]
fn editing_and_deleting_games_recomputes_winner() {
    let mut t = tournament_with(series(1, &[]));
    let match_id = t.matches[0].id;
    let game_id = record_game(&mut t, match_id, 11, 6).unwrap();
    assert_eq!(t.matches[0].winner, Some("p1".to_string()));

    edit_game(&mut t, match_id, game_id, 9, 11).unwrap();
    assert_eq!(t.matches[0].winner, Some("p2".to_string()));
    assert_eq!(t.matches[0].games[0].score_1, 9);

    assert!(matches!(
        edit_game(&mut t, match_id, game_id, 10, 8),
        Err(TournamentError::InvalidScore(ScoreError::BelowEleven))
    ));

    delete_game(&mut t, match_id, game_id).unwrap();
    assert!(t.matches[0].games.is_empty());
    assert_eq!(t.matches[0].winner, None);

    assert_eq!(
        delete_game(&mut t, match_id, game_id),
        Err(TournamentError::GameNotFound(game_id))
    );
}
