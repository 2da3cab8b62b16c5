//! Decision-variable space for the assignment model.
//!
//! One binary variable exists per `(player, round, court, team)` tuple —
//! "this player occupies this team seat in this round" — and one derived
//! binary per `(p1 < p2, round, court, team)` — "these two players share
//! this exact team seat". Variables are keyed by the tuple itself in
//! associative maps, so any component can reconstruct the identity of a
//! seat from its coordinates without depending on allocation order.
//!
//! # Sizing
//!
//! The pairwise registry dominates: its size is
//! O(players² · rounds · courts · teams), against O(players · rounds ·
//! courts · teams) for the primary registry. Callers sizing large rosters
//! should budget for the quadratic term — 22 players over 9 rounds and
//! 4 courts already yields ~16k pair variables.

use std::collections::HashMap;

use good_lp::{variable, ProblemVariables, Variable};

use crate::models::Session;

/// Key of a primary assignment variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AssignmentKey {
    /// Roster index.
    pub player: usize,
    /// Round index.
    pub round: usize,
    /// Court index.
    pub court: usize,
    /// Team index on the court.
    pub team: usize,
}

/// Key of a pairwise co-assignment variable. `first < second` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PairKey {
    /// Lower roster index of the pair.
    pub first: usize,
    /// Higher roster index of the pair.
    pub second: usize,
    /// Round index.
    pub round: usize,
    /// Court index.
    pub court: usize,
    /// Team index on the court.
    pub team: usize,
}

impl PairKey {
    /// Builds a key, normalizing the player order.
    pub fn new(p1: usize, p2: usize, round: usize, court: usize, team: usize) -> Self {
        let (first, second) = if p1 <= p2 { (p1, p2) } else { (p2, p1) };
        Self {
            first,
            second,
            round,
            court,
            team,
        }
    }
}

/// The full registry of decision variables for one session.
///
/// Built once per solve, owned by that solve, and discarded with it.
/// Registration is deterministic: the same session always yields the
/// same key set.
#[derive(Debug)]
pub struct VariableSpace {
    players: usize,
    rounds: usize,
    courts: usize,
    teams: usize,
    assignments: HashMap<AssignmentKey, Variable>,
    pairs: HashMap<PairKey, Variable>,
}

impl VariableSpace {
    /// Registers every assignment and co-assignment variable for the
    /// session in `vars`.
    pub fn build(session: &Session, vars: &mut ProblemVariables) -> Self {
        let players = session.player_count();
        let rounds = session.rounds;
        let courts = session.courts;
        let teams = session.teams_per_court;

        let mut assignments = HashMap::with_capacity(players * rounds * courts * teams);
        for p in 0..players {
            for r in 0..rounds {
                for c in 0..courts {
                    for t in 0..teams {
                        let var = vars.add(variable().binary().name(format!("x_{p}_{r}_{c}_{t}")));
                        assignments.insert(
                            AssignmentKey {
                                player: p,
                                round: r,
                                court: c,
                                team: t,
                            },
                            var,
                        );
                    }
                }
            }
        }

        let pair_count = players.saturating_sub(1) * players / 2;
        let mut pairs = HashMap::with_capacity(pair_count * rounds * courts * teams);
        for p1 in 0..players {
            for p2 in (p1 + 1)..players {
                for r in 0..rounds {
                    for c in 0..courts {
                        for t in 0..teams {
                            let var = vars
                                .add(variable().binary().name(format!("x_{p1}x{p2}_{r}_{c}_{t}")));
                            pairs.insert(PairKey::new(p1, p2, r, c, t), var);
                        }
                    }
                }
            }
        }

        Self {
            players,
            rounds,
            courts,
            teams,
            assignments,
            pairs,
        }
    }

    /// The assignment variable for one `(player, round, court, team)` tuple.
    ///
    /// # Panics
    /// If any index is outside the session's dimensions.
    pub fn assignment(&self, player: usize, round: usize, court: usize, team: usize) -> Variable {
        self.assignments[&AssignmentKey {
            player,
            round,
            court,
            team,
        }]
    }

    /// The co-assignment variable for two players on one seat. Argument
    /// order of the players does not matter.
    ///
    /// # Panics
    /// If `p1 == p2` or any index is outside the session's dimensions.
    pub fn pair(&self, p1: usize, p2: usize, round: usize, court: usize, team: usize) -> Variable {
        self.pairs[&PairKey::new(p1, p2, round, court, team)]
    }

    /// All player variables for one seat (used by the team-size rule).
    pub fn slot_vars(
        &self,
        round: usize,
        court: usize,
        team: usize,
    ) -> impl Iterator<Item = Variable> + '_ {
        (0..self.players).map(move |p| self.assignment(p, round, court, team))
    }

    /// One player's variables across every seat of one round.
    pub fn player_round_vars(
        &self,
        player: usize,
        round: usize,
    ) -> impl Iterator<Item = Variable> + '_ {
        (0..self.courts).flat_map(move |c| {
            (0..self.teams).map(move |t| self.assignment(player, round, c, t))
        })
    }

    /// One player's variables across the whole session.
    pub fn player_vars(&self, player: usize) -> impl Iterator<Item = Variable> + '_ {
        (0..self.rounds).flat_map(move |r| self.player_round_vars(player, r))
    }

    /// One pair's co-assignment variables across the whole session.
    pub fn pair_vars(&self, p1: usize, p2: usize) -> impl Iterator<Item = Variable> + '_ {
        (0..self.rounds).flat_map(move |r| {
            (0..self.courts).flat_map(move |c| {
                (0..self.teams).map(move |t| self.pair(p1, p2, r, c, t))
            })
        })
    }

    /// Every unordered player pair `(p1 < p2)`.
    pub fn player_pairs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.players).flat_map(move |p1| ((p1 + 1)..self.players).map(move |p2| (p1, p2)))
    }

    /// Number of primary assignment variables.
    pub fn assignment_count(&self) -> usize {
        self.assignments.len()
    }

    /// Number of pairwise co-assignment variables.
    pub fn pair_count(&self) -> usize {
        self.pairs.len()
    }
}
