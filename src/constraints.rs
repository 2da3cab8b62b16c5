//! The scheduling rule set, posted as linear constraints.
//!
//! Each rule is an independent function from `(&Session, &VariableSpace)`
//! to the constraints it contributes; [`build_all`] concatenates them.
//! Posting order affects solver performance only, never correctness.
//!
//! The model is a pure feasibility problem — every rule is hard, and no
//! objective ranks one satisfying schedule over another.
//!
//! # Reference
//! Williams (2013), "Model Building in Mathematical Programming", Ch. 9
//! (logical conditions as 0/1 constraints)

use good_lp::{constraint, Constraint, Expression, Variable};

use crate::models::{Session, PLAYERS_PER_TEAM};
use crate::variables::VariableSpace;

/// Window length for the break rule: no player sits out this many
/// consecutive rounds.
pub const BREAK_WINDOW: usize = 3;

/// Window length for the streak rule.
pub const STREAK_WINDOW: usize = 4;

/// Maximum games inside one streak window: no player plays
/// [`STREAK_WINDOW`] rounds in a row.
pub const STREAK_LIMIT: usize = 3;

fn sum(vars: impl IntoIterator<Item = Variable>) -> Expression {
    vars.into_iter()
        .fold(Expression::from(0.0), |acc, v| acc + v)
}

/// Links an indicator variable to the AND of two binaries:
/// `indicator = a ∧ b`.
///
/// The two inequalities `2·ind ≤ a + b` and `2·ind ≥ a + b − 1` pin the
/// indicator for all four combinations of `a, b ∈ {0, 1}`. Keep this as
/// the single source of the encoding — a sign or offset slip here
/// silently corrupts every rule built on top of the indicators.
pub fn and_linkage(indicator: Variable, a: Variable, b: Variable) -> [Constraint; 2] {
    [
        constraint!(2.0 * indicator <= a + b),
        constraint!(2.0 * indicator >= a + b - 1.0),
    ]
}

/// Rule 1 — team size: every seat holds exactly [`PLAYERS_PER_TEAM`]
/// players. Never relaxed; infeasibility here means the roster cannot
/// fill the court layout.
pub fn team_size(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let team = PLAYERS_PER_TEAM as f64;
    let mut out = Vec::new();
    for r in 0..session.rounds {
        for c in 0..session.courts {
            for t in 0..session.teams_per_court {
                let seat = sum(space.slot_vars(r, c, t));
                out.push(constraint!(seat == team));
            }
        }
    }
    out
}

/// Rule 2 — single allocation: a player plays at most once per round
/// (zero seats means a break).
pub fn single_allocation(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let mut out = Vec::new();
    for p in 0..session.player_count() {
        for r in 0..session.rounds {
            let seats = sum(space.player_round_vars(p, r));
            out.push(constraint!(seats <= 1.0));
        }
    }
    out
}

/// Rule 3 — co-assignment linkage: each pair variable equals the AND of
/// its two players' variables for that seat.
pub fn pair_linkage(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (p1, p2) in space.player_pairs() {
        for r in 0..session.rounds {
            for c in 0..session.courts {
                for t in 0..session.teams_per_court {
                    out.extend(and_linkage(
                        space.pair(p1, p2, r, c, t),
                        space.assignment(p1, r, c, t),
                        space.assignment(p2, r, c, t),
                    ));
                }
            }
        }
    }
    out
}

/// Rule 4 — pairing uniqueness: no two players are teammates more than
/// once across the whole session.
pub fn pairing_uniqueness(_session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let mut out = Vec::new();
    for (p1, p2) in space.player_pairs() {
        let together = sum(space.pair_vars(p1, p2));
        out.push(constraint!(together <= 1.0));
    }
    out
}

/// Rule 5 — break limit: every [`BREAK_WINDOW`]-round window contains at
/// least one game per player, i.e. at most two consecutive breaks.
///
/// Sessions shorter than the window contribute no constraints.
pub fn break_limit(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let mut out = Vec::new();
    if session.rounds < BREAK_WINDOW {
        return out;
    }
    for p in 0..session.player_count() {
        for start in 0..=(session.rounds - BREAK_WINDOW) {
            let games = sum(
                (start..start + BREAK_WINDOW).flat_map(|r| space.player_round_vars(p, r)),
            );
            out.push(constraint!(games >= 1.0));
        }
    }
    out
}

/// Rule 6 — play-streak limit: every [`STREAK_WINDOW`]-round window
/// contains at most [`STREAK_LIMIT`] games per player, i.e. no one plays
/// four rounds in a row.
///
/// Sessions shorter than the window contribute no constraints.
pub fn play_streak_limit(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let limit = STREAK_LIMIT as f64;
    let mut out = Vec::new();
    if session.rounds < STREAK_WINDOW {
        return out;
    }
    for p in 0..session.player_count() {
        for start in 0..=(session.rounds - STREAK_WINDOW) {
            let games = sum(
                (start..start + STREAK_WINDOW).flat_map(|r| space.player_round_vars(p, r)),
            );
            out.push(constraint!(games <= limit));
        }
    }
    out
}

/// Rule 7 — game count: each player's session total lies in
/// `[min_games, max_games]`.
pub fn game_count(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let min = session.min_games as f64;
    let max = session.max_games as f64;
    let mut out = Vec::new();
    for p in 0..session.player_count() {
        let total = sum(space.player_vars(p));
        let lower = total.clone();
        out.push(constraint!(lower >= min));
        out.push(constraint!(total <= max));
    }
    out
}

/// Rule 8 — cross-class fairness (toggled by `session.class_fairness`):
/// at every round boundary, each permanent player's cumulative game
/// count is at least each casual player's. Prefix dominance, not just a
/// final-total comparison. Vacuous when either class is empty.
pub fn class_fairness(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let mut out = Vec::new();
    if !session.class_fairness {
        return out;
    }
    let casual: Vec<usize> = session.casual_players().collect();
    for p in session.permanent_players() {
        for &q in &casual {
            for r in 0..session.rounds {
                let ahead = sum((0..=r).flat_map(|r1| space.player_round_vars(p, r1)));
                let behind = sum((0..=r).flat_map(|r1| space.player_round_vars(q, r1)));
                out.push(constraint!(ahead >= behind));
            }
        }
    }
    out
}

/// Posts every rule of the session in a fixed order.
pub fn build_all(session: &Session, space: &VariableSpace) -> Vec<Constraint> {
    let mut out = Vec::new();
    out.extend(team_size(session, space));
    out.extend(single_allocation(session, space));
    out.extend(pair_linkage(session, space));
    out.extend(pairing_uniqueness(session, space));
    out.extend(break_limit(session, space));
    out.extend(play_streak_limit(session, space));
    out.extend(game_count(session, space));
    out.extend(class_fairness(session, space));
    out
}
