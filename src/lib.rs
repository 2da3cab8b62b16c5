//! Doubles badminton session scheduling as a 0/1 integer model.
//!
//! Builds a multi-round playing schedule for a fixed roster, court
//! layout, and round count by posting fairness and variety rules as
//! linear constraints over binary `(player, round, court, team)`
//! assignment variables, then delegating search to an external MILP
//! solver (`good_lp`). The rules: fixed team sizes, one seat per player
//! per round, at most two consecutive breaks, no four games in a row,
//! per-player game bounds, teammate-pair uniqueness, and an optional
//! cumulative-play ordering between permanent and casual members.
//!
//! # Modules
//!
//! - **`models`**: `Player` and `Session` value objects
//! - **`validation`**: eager structural checks on a session
//! - **`variables`**: tuple-keyed binary decision-variable registries
//! - **`constraints`**: the rule set, one function per rule
//! - **`solver`**: the single blocking solve call and status mapping
//! - **`schedule`**: read-only queries over a solved assignment
//!
//! # Example
//!
//! ```no_run
//! use shuttle_rota::{Player, Session};
//!
//! let roster = vec![
//!     Player::permanent("Ana"),
//!     Player::permanent("Ben"),
//!     Player::casual("Caro"),
//!     Player::casual("Dev"),
//! ];
//! let session = Session::new(roster, 1, 1).with_game_bounds(1, 1);
//!
//! let schedule = shuttle_rota::solve(&session)?;
//! for round in 0..schedule.rounds() {
//!     for court in schedule.round_courts(round) {
//!         println!("round {round}, court {}: {:?}", court.court, court.teams);
//!     }
//!     println!("on break: {:?}", schedule.players_on_break(round));
//! }
//! # Ok::<(), shuttle_rota::ScheduleError>(())
//! ```

pub mod constraints;
pub mod error;
pub mod models;
pub mod schedule;
pub mod solver;
pub mod validation;
pub mod variables;

pub use error::ScheduleError;
pub use models::{Player, Session, PLAYERS_PER_TEAM};
pub use schedule::{CourtAssignment, SolveStatus, SolvedSchedule, Violation, ViolationKind};
pub use solver::solve;
