//! Input validation for scheduling sessions.
//!
//! Checks structural integrity of a session before any model is built.
//! Detects:
//! - Zero-sized dimensions (rounds, courts, teams)
//! - Inverted or unreachable game bounds
//! - Rosters too small for the court layout
//! - Seat counts that no assignment can absorb (counting argument)
//! - Duplicate player names
//!
//! Everything statically detectable is rejected here, so the solver only
//! ever reports infeasibility for genuinely combinatorial reasons.

use std::collections::HashSet;

use crate::models::{Session, PLAYERS_PER_TEAM};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// Rounds, courts, or teams-per-court is zero.
    EmptyDimension,
    /// `min_games > max_games`.
    InvertedGameBounds,
    /// `min_games` exceeds the round count (a player sits at most one
    /// seat per round, so games are capped at `rounds`).
    UnreachableGameCount,
    /// Fewer players than seats in a single round.
    RosterTooSmall,
    /// Total seats cannot be absorbed within the per-player game bounds.
    SeatCountMismatch,
    /// Two roster entries share a name.
    DuplicatePlayerName,
}

impl ValidationError {
    fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates a session's shape ahead of model construction.
///
/// Checks:
/// 1. `rounds`, `courts`, `teams_per_court` are all ≥ 1
/// 2. `min_games ≤ max_games` and `min_games ≤ rounds`
/// 3. The roster can fill every seat of a round without repeats
/// 4. Counting bound: total seats lie in `[players·min_games, players·max_games]`
/// 5. Player names are unique
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_session(session: &Session) -> ValidationResult {
    let mut errors = Vec::new();

    if session.rounds == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "session has zero rounds",
        ));
    }
    if session.courts == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "session has zero courts",
        ));
    }
    if session.teams_per_court == 0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyDimension,
            "session has zero teams per court",
        ));
    }

    if session.min_games > session.max_games {
        errors.push(ValidationError::new(
            ValidationErrorKind::InvertedGameBounds,
            format!(
                "min_games ({}) exceeds max_games ({})",
                session.min_games, session.max_games
            ),
        ));
    }

    if session.min_games > session.rounds {
        errors.push(ValidationError::new(
            ValidationErrorKind::UnreachableGameCount,
            format!(
                "min_games ({}) exceeds round count ({}): a player plays at most once per round",
                session.min_games, session.rounds
            ),
        ));
    }

    if session.player_count() < session.seats_per_round() {
        errors.push(ValidationError::new(
            ValidationErrorKind::RosterTooSmall,
            format!(
                "{} players cannot fill {} seats per round ({} courts × {} teams × {} players)",
                session.player_count(),
                session.seats_per_round(),
                session.courts,
                session.teams_per_court,
                PLAYERS_PER_TEAM,
            ),
        ));
    }

    // Counting argument over the whole session: every seat is one game for
    // one player, so total seats must fit between the aggregate bounds.
    let total_seats = session.total_seats();
    let min_supply = session.player_count() * session.min_games;
    let max_supply = session.player_count() * session.max_games;
    if total_seats > max_supply {
        errors.push(ValidationError::new(
            ValidationErrorKind::SeatCountMismatch,
            format!(
                "{total_seats} seats exceed the {max_supply} games the roster may play \
                 ({} players × max {} games)",
                session.player_count(),
                session.max_games
            ),
        ));
    }
    if total_seats < min_supply {
        errors.push(ValidationError::new(
            ValidationErrorKind::SeatCountMismatch,
            format!(
                "{total_seats} seats cannot satisfy the {min_supply} games the roster must play \
                 ({} players × min {} games)",
                session.player_count(),
                session.min_games
            ),
        ));
    }

    let mut names = HashSet::new();
    for player in &session.players {
        if !names.insert(player.name.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicatePlayerName,
                format!("duplicate player name: {}", player.name),
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
