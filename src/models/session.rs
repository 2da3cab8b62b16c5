//! Session configuration model.
//!
//! A session is the static shape of one scheduling problem: the roster,
//! the round/court layout, and per-player game bounds. It is an immutable
//! value object — build it once, then hand it to the solver.

use serde::{Deserialize, Serialize};

use super::Player;

/// Players per team slot. Doubles badminton: always two.
pub const PLAYERS_PER_TEAM: usize = 2;

/// One scheduling session.
///
/// Captures everything the constraint model needs: who plays, how many
/// rounds and courts are available, and how many games each player must
/// end up with. `teams_per_court` is 2 under current rules (one game per
/// court per round).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    /// Roster, in fixed order. Components refer to players by index here.
    pub players: Vec<Player>,
    /// Number of rounds in the session.
    pub rounds: usize,
    /// Number of courts available each round.
    pub courts: usize,
    /// Teams per court (2: one game per court).
    pub teams_per_court: usize,
    /// Minimum games each player must play across the session.
    pub min_games: usize,
    /// Maximum games each player may play across the session.
    pub max_games: usize,
    /// Whether the cross-class fairness rule is posted (permanent players
    /// never behind casual players in cumulative games). Off by default.
    pub class_fairness: bool,
}

impl Session {
    /// Creates a session with default game bounds (0 to `rounds`) and
    /// fairness disabled.
    pub fn new(players: Vec<Player>, rounds: usize, courts: usize) -> Self {
        Self {
            players,
            rounds,
            courts,
            teams_per_court: 2,
            min_games: 0,
            max_games: rounds,
            class_fairness: false,
        }
    }

    /// Sets the per-player game-count bounds.
    pub fn with_game_bounds(mut self, min_games: usize, max_games: usize) -> Self {
        self.min_games = min_games;
        self.max_games = max_games;
        self
    }

    /// Sets the number of teams per court.
    pub fn with_teams_per_court(mut self, teams_per_court: usize) -> Self {
        self.teams_per_court = teams_per_court;
        self
    }

    /// Enables the cross-class fairness rule.
    pub fn with_class_fairness(mut self) -> Self {
        self.class_fairness = true;
        self
    }

    /// Roster size.
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Seats filled per round: `courts × teams_per_court × 2`.
    pub fn seats_per_round(&self) -> usize {
        self.courts * self.teams_per_court * PLAYERS_PER_TEAM
    }

    /// Seats filled across the whole session.
    pub fn total_seats(&self) -> usize {
        self.rounds * self.seats_per_round()
    }

    /// Roster indices of permanent members.
    pub fn permanent_players(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_permanent)
            .map(|(i, _)| i)
    }

    /// Roster indices of casual drop-ins.
    pub fn casual_players(&self) -> impl Iterator<Item = usize> + '_ {
        self.players
            .iter()
            .enumerate()
            .filter(|(_, p)| !p.is_permanent)
            .map(|(i, _)| i)
    }
}
