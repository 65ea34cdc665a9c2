//! End-to-end: round robin round, recorded games, bracket seeding and a full bracket run.

use rand::rngs::StdRng;
use rand::SeedableRng;
use table_tennis_tournament::{
    advance_bracket, pair_round_robin, record_game, seed_bracket, standings, Player, RoundType,
    Slot, Tournament, TournamentConfig, TournamentStatus,
};

#[test]
fn four_player_tournament_from_round_robin_to_champion() {
    let players = ["p1", "p2", "p3", "p4"]
        .into_iter()
        .map(|id| Player::with_id(id, id.to_uppercase()))
        .collect();
    let mut t = Tournament::new(TournamentConfig::new("Friday open"), players);
    let ids: Vec<String> = t.players.iter().map(|p| p.id.clone()).collect();
    let round_one = pair_round_robin(&ids, t.id, 1, 1);
    t.matches.extend(round_one);

    let (m1, m2) = (t.matches[0].id, t.matches[1].id);
    assert_eq!(t.matches[0].player_1, Slot::player("p1"));
    assert_eq!(t.matches[1].player_1, Slot::player("p3"));
    record_game(&mut t, m1, 11, 5).unwrap();
    record_game(&mut t, m2, 11, 9).unwrap();

    let table = standings(&t);
    assert_eq!(table[0].player_id, "p1");
    assert_eq!(table[0].point_diff, 6);
    assert_eq!(table[1].player_id, "p3");
    assert_eq!(table[1].point_diff, 2);

    let mut rng = StdRng::seed_from_u64(2024);
    let seed = seed_bracket(&t, true, &mut rng);
    assert_eq!(seed.ranking, vec!["p1", "p3", "p4", "p2"]);
    seed.apply(&mut t);
    assert_eq!(t.status, TournamentStatus::Bracket);

    let bracket: Vec<_> = t
        .matches
        .iter()
        .filter(|m| m.round == RoundType::Bracket && m.bracket_round == 1)
        .map(|m| m.id)
        .collect();
    assert_eq!(bracket.len(), 2);
    assert_eq!(t.get_match(bracket[0]).unwrap().player_1, Slot::player("p1"));
    assert_eq!(t.get_match(bracket[0]).unwrap().player_2, Slot::player("p3"));
    assert_eq!(t.get_match(bracket[1]).unwrap().player_1, Slot::player("p4"));
    assert_eq!(t.get_match(bracket[1]).unwrap().player_2, Slot::player("p2"));

    record_game(&mut t, bracket[0], 8, 11).unwrap();
    record_game(&mut t, bracket[1], 11, 7).unwrap();
    advance_bracket(&t).apply(&mut t);

    // Final is ordered by seed: p3 (seed 2) before p4 (seed 3).
    let final_id = t.matches.last().unwrap().id;
    assert_eq!(t.get_match(final_id).unwrap().bracket_round, 2);
    assert_eq!(t.get_match(final_id).unwrap().player_1, Slot::player("p3"));
    assert_eq!(t.get_match(final_id).unwrap().player_2, Slot::player("p4"));
    record_game(&mut t, final_id, 10, 12).unwrap();

    let done = advance_bracket(&t);
    assert!(done.completed);
    done.apply(&mut t);
    assert_eq!(t.status, TournamentStatus::Completed);
    assert_eq!(t.get_match(final_id).unwrap().winner.as_deref(), Some("p4"));
}
