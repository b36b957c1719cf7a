//! Match configuration.
//!
//! Hosts configure a match at startup:
//! - `GroupAssignment`: how players get their seven-ball group
//! - message durations for the presentation layer
//! - intro delay before the first round
//! - the speed below which a ball counts as at rest

use serde::{Deserialize, Serialize};

use super::ball::BallGroup;
use super::error::RulesError;
use super::player::PlayerSlot;

/// How ball groups are handed to players.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GroupAssignment {
    /// Player one owns solids and player two owns stripes from the break.
    #[default]
    Fixed,
    /// Both players start unassigned. The first object ball pocketed by the
    /// shooter claims its group for them and the opposite group for the
    /// opponent.
    OpenTable,
}

impl GroupAssignment {
    /// Group a player starts the match with.
    #[must_use]
    pub fn initial_group(self, slot: PlayerSlot) -> Option<BallGroup> {
        match (self, slot) {
            (GroupAssignment::Fixed, PlayerSlot::One) => Some(BallGroup::Solids),
            (GroupAssignment::Fixed, PlayerSlot::Two) => Some(BallGroup::Stripes),
            (GroupAssignment::OpenTable, _) => None,
        }
    }
}

/// Complete match configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Group assignment policy.
    pub group_assignment: GroupAssignment,

    /// Seconds a round message (penalty, extra turn, switch) stays up.
    pub message_secs: f32,

    /// Seconds before the first round starts (tutorial overlay time).
    pub intro_delay_secs: f32,

    /// A ball slower than this counts as at rest.
    pub rest_speed_threshold: f32,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            group_assignment: GroupAssignment::Fixed,
            message_secs: 2.0,
            intro_delay_secs: 5.0,
            rest_speed_threshold: 0.001,
        }
    }
}

impl MatchConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the group assignment policy.
    #[must_use]
    pub fn with_group_assignment(mut self, policy: GroupAssignment) -> Self {
        self.group_assignment = policy;
        self
    }

    /// Set the round message duration.
    #[must_use]
    pub fn with_message_secs(mut self, secs: f32) -> Self {
        self.message_secs = secs;
        self
    }

    /// Set the intro delay. Zero starts the first round on the first clock tick.
    #[must_use]
    pub fn with_intro_delay(mut self, secs: f32) -> Self {
        self.intro_delay_secs = secs;
        self
    }

    /// Set the at-rest speed threshold.
    #[must_use]
    pub fn with_rest_speed_threshold(mut self, speed: f32) -> Self {
        self.rest_speed_threshold = speed;
        self
    }

    /// Reject negative or non-finite durations and thresholds.
    pub fn validate(&self) -> Result<(), RulesError> {
        let fields = [
            ("message_secs", self.message_secs),
            ("intro_delay_secs", self.intro_delay_secs),
            ("rest_speed_threshold", self.rest_speed_threshold),
        ];

        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(RulesError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        Ok(())
    }

    /// Replace every field `validate` would reject with its default.
    #[must_use]
    pub fn sanitized(self) -> Self {
        let defaults = Self::default();
        let fix = |value: f32, default: f32| {
            if value.is_finite() && value >= 0.0 {
                value
            } else {
                default
            }
        };

        Self {
            group_assignment: self.group_assignment,
            message_secs: fix(self.message_secs, defaults.message_secs),
            intro_delay_secs: fix(self.intro_delay_secs, defaults.intro_delay_secs),
            rest_speed_threshold: fix(self.rest_speed_threshold, defaults.rest_speed_threshold),
        }
    }
}
