//! Integration tests for round planning: byes, pairing and court assignment.

use americano_tournament::{
    have_partnered, past_partners_of, plan_round, Court, LeftoverPolicy, Player, Round, Settings,
    TournamentError,
};
use std::collections::HashSet;

fn players(ids: &[&str]) -> Vec<Player> {
    ids.iter().map(|id| Player::with_id(*id, *id)).collect()
}

fn pair(a: &str, b: &str) -> [String; 2] {
    [a.to_string(), b.to_string()]
}

fn assert_no_double_booking(round: &Round) {
    let mut seen = HashSet::new();
    for id in round.player_ids() {
        assert!(seen.insert(id.clone()), "{id} booked twice");
    }
}

#[test]
fn eight_players_two_courts_fill_both_courts() {
    let ps = players(&["A", "B", "C", "D", "E", "F", "G", "H"]);
    let round = plan_round(&ps, &[], &Settings::new(2, 11)).unwrap();

    assert_eq!(round.courts.len(), 2);
    assert!(round.byes.is_empty());
    assert_no_double_booking(&round);
    let used: HashSet<&String> = round.player_ids().collect();
    assert_eq!(used.len(), 8);
    for c in &round.courts {
        assert_eq!((c.score_home, c.score_away), (0, 0));
    }
}

#[test]
fn strongest_pairs_land_on_highest_court() {
    let mut ps = players(&["p7", "p6", "p5", "p4", "p3", "p2", "p1", "p0"]);
    for (i, p) in ps.iter_mut().enumerate() {
        p.wins = i as u32;
    }
    let round = plan_round(&ps, &[], &Settings::new(2, 11)).unwrap();

    // best-first: p0 (7 wins) .. p7 (0 wins)
    let top = round.court(2).unwrap();
    assert_eq!(top.home, pair("p0", "p1"));
    assert_eq!(top.away, pair("p2", "p3"));
    let second = round.court(1).unwrap();
    assert_eq!(second.home, pair("p4", "p5"));
    assert_eq!(second.away, pair("p6", "p7"));
}

#[test]
fn total_points_break_ties_in_seeding() {
    let mut ps = players(&["A", "B", "C", "D"]);
    ps[3].total_points = 20;
    ps[2].total_points = 10;
    let round = plan_round(&ps, &[], &Settings::new(1, 11)).unwrap();
    assert_eq!(round.courts[0].home, pair("D", "C"));
    assert_eq!(round.courts[0].away, pair("A", "B"));
}

#[test]
fn nine_players_two_courts_one_bye_by_bye_count() {
    let mut ps = players(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    for p in ps.iter_mut() {
        p.bye_count = 1;
    }
    ps[4].bye_count = 0;
    ps[4].wins = 5;
    let round = plan_round(&ps, &[], &Settings::new(2, 11)).unwrap();

    assert_eq!(round.byes, vec!["E".to_string()]);
    assert_eq!(round.courts.len(), 2);
    assert!(!round.courts.iter().any(|c| c.player_ids().any(|id| id == "E")));
    assert_no_double_booking(&round);
}

#[test]
fn bye_ties_go_to_fewest_wins_then_fewest_points() {
    let mut ps = players(&["A", "B", "C", "D", "E", "F", "G", "H", "I"]);
    for p in ps.iter_mut() {
        p.wins = 2;
        p.total_points = 30;
    }
    ps[1].wins = 1;
    ps[1].total_points = 40;
    ps[6].wins = 1;
    ps[6].total_points = 25;
    let round = plan_round(&ps, &[], &Settings::new(2, 11)).unwrap();
    assert_eq!(round.byes, vec!["G".to_string()]);
}

#[test]
fn permanent_break_players_are_never_planned() {
    let mut ps = players(&["A", "B", "C", "D", "E"]);
    ps[0].permanent_break = true;
    let round = plan_round(&ps, &[], &Settings::new(1, 11)).unwrap();

    assert_eq!(round.courts.len(), 1);
    assert!(round.byes.is_empty());
    assert!(!round.involves("A"));
}

#[test]
fn avoids_previous_partners() {
    let ps = players(&["A", "B", "C", "D"]);
    let history = vec![Round::new(vec![Court::new(1, pair("A", "B"), pair("C", "D"))], vec![])];
    let round = plan_round(&ps, &history, &Settings::new(1, 11)).unwrap();

    let c = &round.courts[0];
    assert_eq!(c.home, pair("A", "C"));
    assert_eq!(c.away, pair("B", "D"));
}

#[test]
fn repeats_a_partner_only_when_forced() {
    let ps = players(&["A", "B", "C", "D"]);
    let history = vec![
        Round::new(vec![Court::new(1, pair("A", "B"), pair("C", "D"))], vec![]),
        Round::new(vec![Court::new(1, pair("A", "C"), pair("B", "D"))], vec![]),
        Round::new(vec![Court::new(1, pair("A", "D"), pair("B", "C"))], vec![]),
    ];
    let round = plan_round(&ps, &history, &Settings::new(1, 11)).unwrap();

    // A has partnered everyone: falls back to the next in line.
    let c = &round.courts[0];
    assert_eq!(c.home, pair("A", "B"));
    assert_eq!(c.away, pair("C", "D"));
}

#[test]
fn new_partners_are_used_while_any_remain() {
    let ids: Vec<String> = (0..8).map(|i| format!("p{i}")).collect();
    let refs: Vec<&str> = ids.iter().map(String::as_str).collect();
    let ps = players(&refs);
    let settings = Settings::new(2, 11);
    let mut rounds: Vec<Round> = Vec::new();

    // With 8 players there are 7 rounds' worth of distinct partners.
    for _ in 0..3 {
        let history = past_partners_of(&rounds);
        let round = plan_round(&ps, &rounds, &settings).unwrap();
        for c in &round.courts {
            for team in [&c.home, &c.away] {
                assert!(
                    !have_partnered(&history, &team[0], &team[1]),
                    "{} and {} repeated",
                    team[0],
                    team[1]
                );
            }
        }
        rounds.push(round);
    }
}

#[test]
fn zero_courts_is_invalid_configuration() {
    let ps = players(&["A", "B", "C", "D"]);
    let err = plan_round(&ps, &[], &Settings::new(0, 11)).unwrap_err();
    assert!(matches!(err, TournamentError::InvalidConfiguration { .. }));
}

#[test]
fn fewer_than_four_players_gives_empty_round() {
    let ps = players(&["A", "B", "C"]);
    let round = plan_round(&ps, &[], &Settings::new(2, 11)).unwrap();
    assert!(round.courts.is_empty());
    assert!(round.byes.is_empty());
    assert!(!round.id.is_empty());
}

#[test]
fn leftover_players_are_dropped_by_default() {
    let ps = players(&["A", "B", "C", "D", "E", "F", "G"]);
    let round = plan_round(&ps, &[], &Settings::new(2, 11)).unwrap();

    // 7 players: three pairs and a single; only one court can be filled.
    assert_eq!(round.courts.len(), 1);
    assert!(round.byes.is_empty());
    assert_eq!(round.player_ids().count(), 4);
}

#[test]
fn leftover_players_can_be_moved_to_bye() {
    let ps = players(&["A", "B", "C", "D", "E", "F", "G"]);
    let settings = Settings {
        leftover: LeftoverPolicy::Bye,
        ..Settings::new(2, 11)
    };
    let round = plan_round(&ps, &[], &settings).unwrap();

    assert_eq!(round.courts.len(), 1);
    assert_eq!(round.byes, vec!["E".to_string(), "F".to_string(), "G".to_string()]);
    assert_eq!(round.player_ids().count(), 7);
    assert_no_double_booking(&round);
}

#[test]
fn planning_does_not_touch_inputs() {
    let ps = players(&["A", "B", "C", "D", "E"]);
    let before = ps.clone();
    plan_round(&ps, &[], &Settings::new(1, 11)).unwrap();
    assert_eq!(ps, before);
}

#[test]
fn repeated_player_records_are_booked_once() {
    let ps = players(&["x", "x", "y", "z", "w"]);
    let round = plan_round(&ps, &[], &Settings::new(1, 11)).unwrap();

    assert_no_double_booking(&round);
    assert_eq!(round.courts.len(), 1);
    assert_eq!(round.courts[0].home, pair("x", "y"));
    assert_eq!(round.courts[0].away, pair("z", "w"));
    assert!(round.byes.is_empty());
}
