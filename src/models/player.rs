//! Player (roster member) model.
//!
//! Players are immutable once a session starts. Every other component
//! refers to a player by roster index, never by owning the value.

use serde::{Deserialize, Serialize};

/// A player in a badminton session.
///
/// The `is_permanent` flag splits the roster into two fairness classes:
/// permanent members are entitled to cumulative play parity or advantage
/// over casual drop-ins when the cross-class fairness rule is enabled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Display name, used in schedule output.
    pub name: String,
    /// Whether this player is a permanent member (vs casual drop-in).
    pub is_permanent: bool,
}

impl Player {
    /// Creates a player with an explicit class flag.
    pub fn new(name: impl Into<String>, is_permanent: bool) -> Self {
        Self {
            name: name.into(),
            is_permanent,
        }
    }

    /// Creates a permanent member.
    pub fn permanent(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }

    /// Creates a casual drop-in.
    pub fn casual(name: impl Into<String>) -> Self {
        Self::new(name, false)
    }
}
