//! Error taxonomy for the scheduling boundary.
//!
//! Constraint posting itself never fails; everything that can go wrong
//! is either a malformed session (caught before model construction) or
//! a solver outcome. Infeasibility is terminal — the model is
//! deterministic, so retrying with identical input cannot help. An
//! indeterminate outcome is the one caller-driven retry path (relax the
//! limits or grant the solver a larger budget).

use thiserror::Error;

use crate::validation::ValidationError;

/// Errors surfaced by [`crate::solver::solve`].
#[derive(Debug, Error)]
pub enum ScheduleError {
    /// The session shape is structurally invalid; no model was built.
    #[error("invalid session configuration: {}", .0.iter().map(|e| e.message.as_str()).collect::<Vec<_>>().join("; "))]
    InvalidConfiguration(Vec<ValidationError>),

    /// The solver proved that no satisfying assignment exists.
    #[error("no feasible schedule exists for this session")]
    Infeasible,

    /// The solver stopped without proving feasibility or infeasibility.
    #[error("solver stopped without a feasibility proof: {0}")]
    Indeterminate(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::{ValidationError, ValidationErrorKind};

    #[test]
    fn test_configuration_display_joins_messages() {
        let err = ScheduleError::InvalidConfiguration(vec![
            ValidationError {
                kind: ValidationErrorKind::EmptyDimension,
                message: "session has zero rounds".into(),
            },
            ValidationError {
                kind: ValidationErrorKind::InvertedGameBounds,
                message: "min_games (3) exceeds max_games (1)".into(),
            },
        ]);
        let text = err.to_string();
        assert!(text.contains("zero rounds"));
        assert!(text.contains("max_games"));
    }
}
