//! Read-only view of which balls are still in play.
//!
//! The physics subsystem owns the balls; the rules only ask whether a ball
//! is still active. [`BallRack`] is a plain in-memory implementation for
//! hosts that track pocketed balls themselves, and for tests.

use serde::{Deserialize, Serialize};

use crate::core::{BallGroup, BallNumber};

/// Answers "is this ball still on the table?".
pub trait TableView {
    /// True while `ball` has not been pocketed.
    fn is_ball_active(&self, ball: BallNumber) -> bool;
}

impl<F> TableView for F
where
    F: Fn(BallNumber) -> bool,
{
    fn is_ball_active(&self, ball: BallNumber) -> bool {
        self(ball)
    }
}

/// True iff none of the seven balls in `group` is still active.
pub fn all_group_balls_pocketed(table: &impl TableView, group: BallGroup) -> bool {
    group.balls().all(|ball| !table.is_ball_active(ball))
}

/// Active/inactive flags for all sixteen balls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BallRack {
    active: [bool; 16],
}

impl BallRack {
    /// A full rack: every ball active.
    #[must_use]
    pub fn new() -> Self {
        Self { active: [true; 16] }
    }

    /// A rack with the given balls already pocketed.
    #[must_use]
    pub fn with_pocketed(balls: impl IntoIterator<Item = BallNumber>) -> Self {
        let mut rack = Self::new();
        for ball in balls {
            rack.pocket(ball);
        }
        rack
    }

    /// Mark a ball as pocketed.
    pub fn pocket(&mut self, ball: BallNumber) {
        self.active[usize::from(ball.raw())] = false;
    }

    /// Put a ball back in play (cue ball respot).
    pub fn respot(&mut self, ball: BallNumber) {
        self.active[usize::from(ball.raw())] = true;
    }

    /// Balls still in play within a group.
    #[must_use]
    pub fn remaining(&self, group: BallGroup) -> usize {
        group.balls().filter(|&b| self.is_ball_active(b)).count()
    }
}

impl Default for BallRack {
    fn default() -> Self {
        Self::new()
    }
}

impl TableView for BallRack {
    fn is_ball_active(&self, ball: BallNumber) -> bool {
        self.active[usize::from(ball.raw())]
    }
}
