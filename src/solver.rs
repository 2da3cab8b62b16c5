//! Solve orchestration.
//!
//! Validates the session, builds the variable space and the full rule
//! set, hands the model to the external solver in one blocking call, and
//! maps the outcome onto the crate's error taxonomy. Model construction
//! is deterministic, so nothing here retries: an infeasible session is
//! infeasible on every attempt, and an indeterminate outcome is for the
//! caller to retry with relaxed limits or a larger budget. A caller that
//! needs cancellation should impose its own wall-clock budget around
//! this call and treat a timeout as indeterminate.

use std::time::Instant;

use good_lp::{default_solver, Expression, ProblemVariables, ResolutionError, SolverModel};
use tracing::{debug, info};

use crate::constraints;
use crate::error::ScheduleError;
use crate::models::Session;
use crate::schedule::SolvedSchedule;
use crate::validation::validate_session;
use crate::variables::VariableSpace;

/// Solves one session and returns its schedule.
///
/// Statically invalid sessions are rejected before any model is built
/// ([`ScheduleError::InvalidConfiguration`]). A solver-proven empty
/// solution space surfaces as [`ScheduleError::Infeasible`]; a solver
/// that gives up without proof surfaces as
/// [`ScheduleError::Indeterminate`].
pub fn solve(session: &Session) -> Result<SolvedSchedule, ScheduleError> {
    validate_session(session).map_err(ScheduleError::InvalidConfiguration)?;

    let mut vars = ProblemVariables::new();
    let space = VariableSpace::build(session, &mut vars);
    let rules = constraints::build_all(session, &space);
    info!(
        players = session.player_count(),
        rounds = session.rounds,
        assignment_vars = space.assignment_count(),
        pair_vars = space.pair_count(),
        constraints = rules.len(),
        "assignment model built"
    );

    // Pure feasibility: a zero objective makes any satisfying assignment
    // optimal.
    let mut problem = vars.minimise(Expression::from(0.0)).using(default_solver);
    for rule in rules {
        problem = problem.with(rule);
    }

    let started = Instant::now();
    match problem.solve() {
        Ok(solution) => {
            let schedule = SolvedSchedule::from_solution(session, &space, &solution);
            info!(
                wall_time_ms = started.elapsed().as_millis() as u64,
                status = ?schedule.status(),
                "schedule solved"
            );
            Ok(schedule)
        }
        Err(ResolutionError::Infeasible) => {
            debug!(
                wall_time_ms = started.elapsed().as_millis() as u64,
                "solver proved infeasibility"
            );
            Err(ScheduleError::Infeasible)
        }
        Err(other) => Err(ScheduleError::Indeterminate(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Player;

    #[test]
    fn test_invalid_session_is_rejected_before_solving() {
        let session = Session::new(vec![Player::permanent("A")], 1, 1);
        let err = solve(&session).unwrap_err();
        assert!(matches!(err, ScheduleError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_forced_repeat_pairings_are_infeasible() {
        // Four players filling one court every round for four rounds:
        // passes every counting check, but only three distinct 2v2
        // partitions of four players exist, so pairing uniqueness (and
        // the play-streak limit) cannot hold.
        let roster = ["A", "B", "C", "D"]
            .iter()
            .map(|n| Player::permanent(*n))
            .collect();
        let session = Session::new(roster, 4, 1).with_game_bounds(4, 4);
        let err = solve(&session).unwrap_err();
        assert!(matches!(err, ScheduleError::Infeasible));
    }
}
