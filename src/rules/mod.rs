//! Eight-ball rules.
//!
//! Two entry points drive a match:
//! - [`on_ball_pocketed`]: once per ball leaving play
//! - [`assess_round`]: once per motion-settled edge
//!
//! Both take the `Match` by mutable reference and return plain outcome
//! values. Neither can fail; after the 8-ball both are no-ops.
//!
//! Collaborators are expressed as traits:
//! - [`TableView`]: which balls are still in play
//! - [`BallOwnership`]: which balls count as a player's own

mod outcome;
mod ownership;
mod pocketing;
mod resolver;
mod table;

pub use outcome::{IgnoreReason, MatchOutcome, PocketOutcome, RoundOutcome};
pub use ownership::{BallOwnership, GroupTable};
pub use pocketing::on_ball_pocketed;
pub use resolver::assess_round;
pub use table::{all_group_balls_pocketed, BallRack, TableView};
