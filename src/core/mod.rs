//! Core types: ball identity, players, match state, configuration, errors.
//!
//! Everything here is plain data. Rule decisions live in `rules`.

pub mod ball;
pub mod player;
pub mod config;
pub mod error;
pub mod state;

pub use ball::{BallGroup, BallKind, BallNumber};
pub use player::{Player, PlayerPair, PlayerSlot};
pub use config::{GroupAssignment, MatchConfig};
pub use error::RulesError;
pub use state::Match;
