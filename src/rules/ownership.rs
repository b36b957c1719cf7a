//! Ball ownership: which object balls count as a player's own.
//!
//! Hosts can swap in their own rule table by implementing
//! [`BallOwnership`]. The default, [`GroupTable`], reads the player's
//! assigned group.

use crate::core::{BallNumber, Player};

/// Decides whether pocketing `ball` counts for `player`.
///
/// On an open table it is asked right after the claiming ball has assigned
/// the groups.
pub trait BallOwnership {
    /// True if `ball` belongs to `player`'s group.
    fn is_own_ball(&self, player: &Player, ball: BallNumber) -> bool;
}

/// Ownership by assigned group. A player without a group owns nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct GroupTable;

impl BallOwnership for GroupTable {
    fn is_own_ball(&self, player: &Player, ball: BallNumber) -> bool {
        player
            .assigned_group()
            .is_some_and(|group| group.contains(ball))
    }
}
