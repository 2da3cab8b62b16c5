//! Domain models for session scheduling.
//!
//! A [`Session`] is the static shape of one scheduling problem: a fixed
//! roster of [`Player`]s plus the round/court layout and game bounds.
//! Both are immutable value objects; the rest of the crate refers to
//! players by roster index.

mod player;
mod session;

pub use player::Player;
pub use session::{Session, PLAYERS_PER_TEAM};
