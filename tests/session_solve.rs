//! End-to-end solve scenarios over the public API.

use shuttle_rota::{solve, Player, ScheduleError, Session, SolvedSchedule};

fn roster(permanent: usize, casual: usize) -> Vec<Player> {
    let mut players: Vec<Player> = (0..permanent)
        .map(|i| Player::permanent(format!("P{i:02}")))
        .collect();
    players.extend((0..casual).map(|i| Player::casual(format!("C{i:02}"))));
    players
}

fn assert_invariants_hold(schedule: &SolvedSchedule) {
    let violations = schedule.violations();
    assert!(violations.is_empty(), "invariant violations: {violations:?}");
}

/// Four players, one round, one court, everyone plays exactly once:
/// the only degree of freedom is who partners whom.
#[test]
fn minimal_session_solves() {
    let session = Session::new(roster(4, 0), 1, 1).with_game_bounds(1, 1);
    let schedule = solve(&session).expect("session is satisfiable");

    assert_invariants_hold(&schedule);
    assert!(schedule.players_on_break(0).is_empty());

    // The two teams partition the roster.
    let mut everyone = schedule.players_in_slot(0, 0, 0);
    everyone.extend(schedule.players_in_slot(0, 0, 1));
    everyone.sort();
    assert_eq!(everyone, ["P00", "P01", "P02", "P03"]);
}

/// Three players cannot seat a 2v2 court; rejected by counting before
/// any model is built, never "solved" with duplicate players.
#[test]
fn undersized_roster_is_a_configuration_error() {
    let session = Session::new(roster(3, 0), 1, 1).with_game_bounds(0, 1);
    let err = solve(&session).unwrap_err();
    assert!(matches!(err, ScheduleError::InvalidConfiguration(_)));
}

/// Eight players rotating over one court for five rounds, two or three
/// games each: exercises breaks, streaks, pairing uniqueness, and game
/// bounds together.
#[test]
fn rotating_session_honors_all_invariants() {
    let session = Session::new(roster(8, 0), 5, 1).with_game_bounds(2, 3);
    let schedule = solve(&session).expect("session is satisfiable");

    assert_invariants_hold(&schedule);
    for round in 0..schedule.rounds() {
        // One court seats four of eight players; four sit out.
        assert_eq!(schedule.players_on_break(round).len(), 4);
    }
    let total_games: usize = (0..8).map(|p| schedule.games_played(p)).sum();
    assert_eq!(total_games, 5 * 4);
}

/// The cross-class fairness rule keeps every permanent member's
/// cumulative game count at or above every casual member's, round by
/// round.
#[test]
fn class_fairness_orders_cumulative_play() {
    let session = Session::new(roster(6, 2), 4, 1)
        .with_game_bounds(1, 3)
        .with_class_fairness();
    let schedule = solve(&session).expect("session is satisfiable");

    assert_invariants_hold(&schedule);
    let cumulative = |player: usize, through: usize| -> usize {
        (0..=through)
            .filter(|&r| !schedule.players_on_break(r).contains(&schedule.players()[player].name))
            .count()
    };
    for permanent in 0..6 {
        for casual in 6..8 {
            for round in 0..4 {
                assert!(
                    cumulative(permanent, round) >= cumulative(casual, round),
                    "permanent {permanent} behind casual {casual} at round {round}"
                );
            }
        }
    }
}

/// The shipped club configuration: 22 players (18 permanent, 4 casual),
/// 9 rounds, 4 courts, 6-7 games each. Multi-minute MIP; run explicitly
/// with `cargo test -- --ignored`.
#[test]
#[ignore = "full-size session solve"]
fn full_club_session_regression() {
    let session = Session::new(roster(18, 4), 9, 4).with_game_bounds(6, 7);
    let schedule = solve(&session).expect("shipped configuration is satisfiable");

    assert_invariants_hold(&schedule);
    for round in 0..schedule.rounds() {
        // 16 of 22 players seated each round.
        assert_eq!(schedule.players_on_break(round).len(), 6);
        for court in schedule.round_courts(round) {
            assert_eq!(court.teams.len(), 2);
            for team in &court.teams {
                assert_eq!(team.len(), 2);
            }
        }
    }
    for player in 0..22 {
        let games = schedule.games_played(player);
        assert!((6..=7).contains(&games));
    }
}
