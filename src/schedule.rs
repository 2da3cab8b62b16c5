//! Solved-schedule model and query surface.
//!
//! A [`SolvedSchedule`] is the read-only 0/1 outcome of one successful
//! solve: which player holds which seat in which round. It is created by
//! the solve orchestrator, queried any number of times, and never
//! mutated. Queries are pure projections in round-then-court order,
//! shaped for a tabular renderer.
//!
//! [`SolvedSchedule::violations`] re-checks the six schedule invariants
//! against the resolved values, so tests and downstream consumers can
//! audit a schedule without re-deriving the rules.

use std::collections::HashMap;

use good_lp::Solution;
use serde::{Deserialize, Serialize};

use crate::constraints::{BREAK_WINDOW, STREAK_LIMIT, STREAK_WINDOW};
use crate::models::{Player, Session, PLAYERS_PER_TEAM};
use crate::variables::{AssignmentKey, VariableSpace};

/// Terminal solver status of a successful solve.
///
/// With no objective declared, any satisfying assignment is vacuously
/// optimal; `Feasible` exists for backends that stop at a budget with an
/// incumbent they have not proven optimal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveStatus {
    /// The assignment is proven optimal (here: proven satisfying).
    Optimal,
    /// A satisfying assignment without an optimality proof.
    Feasible,
}

/// Player-name lists for one court of one round, in team order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourtAssignment {
    /// Court index.
    pub court: usize,
    /// One name list per team on the court.
    pub teams: Vec<Vec<String>>,
}

/// A violated schedule invariant found by [`SolvedSchedule::violations`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Violation {
    /// Which invariant is violated.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

/// The six auditable schedule invariants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// A seat does not hold exactly two players.
    TeamSize,
    /// A player holds more than one seat in a round.
    DoubleBooking,
    /// Two players are teammates more than once.
    RepeatedPairing,
    /// A player sits out three consecutive rounds.
    BreakLimit,
    /// A player plays four consecutive rounds.
    StreakLimit,
    /// A player's session total is outside the game bounds.
    GameCount,
}

impl Violation {
    fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// The resolved assignment of one session.
#[derive(Debug, Clone)]
pub struct SolvedSchedule {
    status: SolveStatus,
    players: Vec<Player>,
    rounds: usize,
    courts: usize,
    teams_per_court: usize,
    min_games: usize,
    max_games: usize,
    assignments: HashMap<AssignmentKey, bool>,
}

impl SolvedSchedule {
    /// Reads every assignment variable out of a solver solution.
    pub(crate) fn from_solution(
        session: &Session,
        space: &VariableSpace,
        solution: &impl Solution,
    ) -> Self {
        let mut assignments = HashMap::with_capacity(space.assignment_count());
        for player in 0..session.player_count() {
            for round in 0..session.rounds {
                for court in 0..session.courts {
                    for team in 0..session.teams_per_court {
                        let value = solution.value(space.assignment(player, round, court, team));
                        assignments.insert(
                            AssignmentKey {
                                player,
                                round,
                                court,
                                team,
                            },
                            value > 0.5,
                        );
                    }
                }
            }
        }
        Self {
            status: SolveStatus::Optimal,
            players: session.players.clone(),
            rounds: session.rounds,
            courts: session.courts,
            teams_per_court: session.teams_per_court,
            min_games: session.min_games,
            max_games: session.max_games,
            assignments,
        }
    }

    /// Terminal solver status.
    pub fn status(&self) -> SolveStatus {
        self.status
    }

    /// Number of rounds in the schedule.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Number of courts per round.
    pub fn courts(&self) -> usize {
        self.courts
    }

    /// The roster the schedule was solved for, in order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Whether a player holds one specific seat. Out-of-range tuples
    /// read as unassigned.
    pub fn is_assigned(&self, player: usize, round: usize, court: usize, team: usize) -> bool {
        self.assignments
            .get(&AssignmentKey {
                player,
                round,
                court,
                team,
            })
            .copied()
            .unwrap_or(false)
    }

    /// Names of the players on one team seat, in roster order. Exactly
    /// two entries on any schedule honoring the team-size rule.
    pub fn players_in_slot(&self, round: usize, court: usize, team: usize) -> Vec<String> {
        self.players
            .iter()
            .enumerate()
            .filter(|(p, _)| self.is_assigned(*p, round, court, team))
            .map(|(_, player)| player.name.clone())
            .collect()
    }

    /// Names of the players sitting out one round, in roster order.
    pub fn players_on_break(&self, round: usize) -> Vec<String> {
        self.players
            .iter()
            .enumerate()
            .filter(|(p, _)| !self.plays_in_round(*p, round))
            .map(|(_, player)| player.name.clone())
            .collect()
    }

    /// Games one player plays across the session.
    pub fn games_played(&self, player: usize) -> usize {
        (0..self.rounds)
            .filter(|&r| self.plays_in_round(player, r))
            .count()
    }

    /// Per-court team lists of one round, in court order. Together with
    /// [`Self::players_on_break`] this is the full renderer contract for
    /// a round.
    pub fn round_courts(&self, round: usize) -> Vec<CourtAssignment> {
        (0..self.courts)
            .map(|court| CourtAssignment {
                court,
                teams: (0..self.teams_per_court)
                    .map(|team| self.players_in_slot(round, court, team))
                    .collect(),
            })
            .collect()
    }

    fn plays_in_round(&self, player: usize, round: usize) -> bool {
        (0..self.courts).any(|c| {
            (0..self.teams_per_court).any(|t| self.is_assigned(player, round, c, t))
        })
    }

    /// Audits the schedule against the six invariants the model encodes.
    ///
    /// Returns every violation found; empty for any schedule produced by
    /// a correct solve.
    pub fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        self.check_team_sizes(&mut out);
        self.check_double_booking(&mut out);
        self.check_repeated_pairings(&mut out);
        self.check_break_limit(&mut out);
        self.check_streak_limit(&mut out);
        self.check_game_counts(&mut out);
        out
    }

    fn check_team_sizes(&self, out: &mut Vec<Violation>) {
        for round in 0..self.rounds {
            for court in 0..self.courts {
                for team in 0..self.teams_per_court {
                    let size = self.players_in_slot(round, court, team).len();
                    if size != PLAYERS_PER_TEAM {
                        out.push(Violation::new(
                            ViolationKind::TeamSize,
                            format!(
                                "round {round}, court {court}, team {team} holds {size} players"
                            ),
                        ));
                    }
                }
            }
        }
    }

    fn check_double_booking(&self, out: &mut Vec<Violation>) {
        for (p, player) in self.players.iter().enumerate() {
            for round in 0..self.rounds {
                let seats: usize = (0..self.courts)
                    .flat_map(|c| (0..self.teams_per_court).map(move |t| (c, t)))
                    .filter(|&(c, t)| self.is_assigned(p, round, c, t))
                    .count();
                if seats > 1 {
                    out.push(Violation::new(
                        ViolationKind::DoubleBooking,
                        format!("{} holds {seats} seats in round {round}", player.name),
                    ));
                }
            }
        }
    }

    fn check_repeated_pairings(&self, out: &mut Vec<Violation>) {
        for p1 in 0..self.players.len() {
            for p2 in (p1 + 1)..self.players.len() {
                let shared = (0..self.rounds)
                    .flat_map(|r| {
                        (0..self.courts).flat_map(move |c| {
                            (0..self.teams_per_court).map(move |t| (r, c, t))
                        })
                    })
                    .filter(|&(r, c, t)| {
                        self.is_assigned(p1, r, c, t) && self.is_assigned(p2, r, c, t)
                    })
                    .count();
                if shared > 1 {
                    out.push(Violation::new(
                        ViolationKind::RepeatedPairing,
                        format!(
                            "{} and {} are teammates {shared} times",
                            self.players[p1].name, self.players[p2].name
                        ),
                    ));
                }
            }
        }
    }

    fn check_break_limit(&self, out: &mut Vec<Violation>) {
        if self.rounds < BREAK_WINDOW {
            return;
        }
        for (p, player) in self.players.iter().enumerate() {
            for start in 0..=(self.rounds - BREAK_WINDOW) {
                let games = (start..start + BREAK_WINDOW)
                    .filter(|&r| self.plays_in_round(p, r))
                    .count();
                if games == 0 {
                    out.push(Violation::new(
                        ViolationKind::BreakLimit,
                        format!(
                            "{} sits out rounds {start}..{}",
                            player.name,
                            start + BREAK_WINDOW
                        ),
                    ));
                }
            }
        }
    }

    fn check_streak_limit(&self, out: &mut Vec<Violation>) {
        if self.rounds < STREAK_WINDOW {
            return;
        }
        for (p, player) in self.players.iter().enumerate() {
            for start in 0..=(self.rounds - STREAK_WINDOW) {
                let games = (start..start + STREAK_WINDOW)
                    .filter(|&r| self.plays_in_round(p, r))
                    .count();
                if games > STREAK_LIMIT {
                    out.push(Violation::new(
                        ViolationKind::StreakLimit,
                        format!(
                            "{} plays {games} games in rounds {start}..{}",
                            player.name,
                            start + STREAK_WINDOW
                        ),
                    ));
                }
            }
        }
    }

    fn check_game_counts(&self, out: &mut Vec<Violation>) {
        for (p, player) in self.players.iter().enumerate() {
            let games = self.games_played(p);
            if games < self.min_games || games > self.max_games {
                out.push(Violation::new(
                    ViolationKind::GameCount,
                    format!(
                        "{} plays {games} games, outside {}..={}",
                        player.name, self.min_games, self.max_games
                    ),
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Hand-built schedule for query tests: 5 players, 2 rounds, 1 court.
    /// Round 0: (A, B) vs (C, D), E on break.
    /// Round 1: (A, C) vs (B, E), D on break.
    fn sample() -> SolvedSchedule {
        let names = ["A", "B", "C", "D", "E"];
        let seats = [
            [(0, 0), (1, 0), (2, 1), (3, 1)],
            [(0, 0), (2, 0), (1, 1), (4, 1)],
        ];

        let mut assignments = HashMap::new();
        for (round, round_seats) in seats.iter().enumerate() {
            for p in 0..names.len() {
                for team in 0..2 {
                    let held = round_seats.contains(&(p, team));
                    assignments.insert(
                        AssignmentKey {
                            player: p,
                            round,
                            court: 0,
                            team,
                        },
                        held,
                    );
                }
            }
        }

        SolvedSchedule {
            status: SolveStatus::Optimal,
            players: names.iter().map(|n| Player::permanent(*n)).collect(),
            rounds: 2,
            courts: 1,
            teams_per_court: 2,
            min_games: 1,
            max_games: 2,
            assignments,
        }
    }

    #[test]
    fn test_players_in_slot() {
        let schedule = sample();
        assert_eq!(schedule.players_in_slot(0, 0, 0), ["A", "B"]);
        assert_eq!(schedule.players_in_slot(0, 0, 1), ["C", "D"]);
        assert_eq!(schedule.players_in_slot(1, 0, 1), ["B", "E"]);
    }

    #[test]
    fn test_players_on_break() {
        let schedule = sample();
        assert_eq!(schedule.players_on_break(0), ["E"]);
        assert_eq!(schedule.players_on_break(1), ["D"]);
    }

    #[test]
    fn test_games_played() {
        let schedule = sample();
        assert_eq!(schedule.games_played(0), 2); // A
        assert_eq!(schedule.games_played(4), 1); // E
    }

    #[test]
    fn test_round_courts_shape() {
        let schedule = sample();
        let courts = schedule.round_courts(1);
        assert_eq!(courts.len(), 1);
        assert_eq!(courts[0].court, 0);
        assert_eq!(courts[0].teams, [vec!["A", "C"], vec!["B", "E"]]);
    }

    #[test]
    fn test_out_of_range_reads_as_unassigned() {
        let schedule = sample();
        assert!(!schedule.is_assigned(99, 0, 0, 0));
        assert!(schedule.players_in_slot(7, 0, 0).is_empty());
    }

    #[test]
    fn test_clean_schedule_has_no_violations() {
        assert!(sample().violations().is_empty());
    }

    #[test]
    fn test_violations_flag_each_broken_invariant() {
        let mut schedule = sample();

        // Put A on both teams in round 0: breaks team size (3 on team 0
        // is not modeled here, but the duplicated seat is) and booking.
        schedule.assignments.insert(
            AssignmentKey {
                player: 0,
                round: 0,
                court: 0,
                team: 1,
            },
            true,
        );
        let violations = schedule.violations();
        assert!(violations
            .iter()
            .any(|v| v.kind == ViolationKind::DoubleBooking));
        assert!(violations.iter().any(|v| v.kind == ViolationKind::TeamSize));
    }

    #[test]
    fn test_game_count_violation() {
        let mut schedule = sample();
        schedule.min_games = 2;
        let violations = schedule.violations();
        // D and E each play once.
        assert_eq!(
            violations
                .iter()
                .filter(|v| v.kind == ViolationKind::GameCount)
                .count(),
            2
        );
    }
}
