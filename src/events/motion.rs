//! Motion-settled edge detection.
//!
//! The host samples ball speeds every frame. The rules want a single
//! "everything stopped" event per shot, so the detector turns the
//! continuous feed into an edge: it fires once on the transition from
//! "some ball moving" to "no ball moving" and stays quiet while the table
//! is still.

use serde::{Deserialize, Serialize};

/// Edge detector for the end of ball motion.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MotionDetector {
    /// Speed at or below which a ball counts as at rest.
    threshold: f32,
    /// Whether any ball was moving at the last sample.
    in_motion: bool,
}

impl MotionDetector {
    /// Create a detector. The table starts at rest.
    #[must_use]
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            in_motion: false,
        }
    }

    /// Whether a single ball speed counts as moving.
    #[must_use]
    pub fn is_moving(&self, speed: f32) -> bool {
        speed > self.threshold
    }

    /// Feed one frame's "any ball moving" sample.
    ///
    /// Returns true exactly once per moving → at-rest transition.
    pub fn observe(&mut self, any_moving: bool) -> bool {
        let settled = self.in_motion && !any_moving;
        self.in_motion = any_moving;
        settled
    }

    /// Feed one frame's speeds of every ball still in play.
    pub fn observe_speeds(&mut self, speeds: impl IntoIterator<Item = f32>) -> bool {
        let any_moving = speeds.into_iter().any(|s| self.is_moving(s));
        self.observe(any_moving)
    }

    /// Mark the table at rest without firing.
    pub fn reset(&mut self) {
        self.in_motion = false;
    }

    /// Whether the last sample had a ball moving.
    #[must_use]
    pub fn in_motion(&self) -> bool {
        self.in_motion
    }
}
