//! # eight-ball
//!
//! Turn and rule-resolution engine for two-player eight-ball.
//!
//! The host application owns physics, rendering and input. This crate owns
//! the decisions: whose turn it is, fouls and extra turns, and who won.
//!
//! ## Design Principles
//!
//! 1. **Explicit state**: a match is an owned [`Match`] value passed by
//!    reference into the rules. No globals.
//!
//! 2. **Events in, effects out**: the host reports pocketed balls and the
//!    end of ball motion; the engine answers with [`HostEffect`]s for the UI.
//!
//! 3. **Total rules**: nothing in `rules` can fail. Integers from the host
//!    are validated once into [`BallNumber`]; after the 8-ball every call is
//!    a no-op.
//!
//! ## Turn Order
//!
//! Pocketing events only record flags. Turn order is decided once per shot,
//! when motion settles: a cue-ball foul hands the table over and banks an
//! extra turn for the opponent; an own ball keeps the table; anything else
//! switches players. A foul always beats an extra turn.
//!
//! ## Modules
//!
//! - `core`: ball numbers and groups, players, match state, configuration
//! - `rules`: pocketing handler, round resolver, win check
//! - `events`: inbound table events, outbound host effects, motion edge detection
//! - `referee`: host-facing driver tying the above to a frame loop
//!
//! ## Logging
//!
//! State transitions are logged through the `log` facade. The crate never
//! installs a logger; hosts pick one.

pub mod core;
pub mod rules;
pub mod events;
pub mod referee;

// Re-export commonly used types
pub use crate::core::{
    BallGroup, BallKind, BallNumber,
    Player, PlayerPair, PlayerSlot,
    GroupAssignment, MatchConfig,
    Match, RulesError,
};

pub use crate::rules::{
    assess_round, on_ball_pocketed, all_group_balls_pocketed,
    BallOwnership, GroupTable, TableView, BallRack,
    IgnoreReason, MatchOutcome, PocketOutcome, RoundOutcome,
};

pub use crate::events::{Effects, HostEffect, MotionDetector, Presenter, TableEvent};

pub use crate::referee::Referee;
