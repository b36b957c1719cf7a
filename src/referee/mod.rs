//! Host-facing referee.
//!
//! The `Referee` owns a [`Match`] and wires the rules to the host's frame
//! loop:
//!
//! - counts down the intro before the first round
//! - turns per-frame motion samples into settle edges
//! - dispatches table events to the pocketing handler and round resolver
//! - translates outcomes into [`HostEffect`]s
//!
//! Every call is synchronous and returns the effects it produced. Once the
//! match is over every call returns nothing and leaves the match alone.
//!
//! ## Example
//!
//! ```
//! use eight_ball::core::{BallNumber, MatchConfig, PlayerSlot};
//! use eight_ball::events::{HostEffect, Presenter};
//! use eight_ball::referee::Referee;
//! use eight_ball::rules::BallRack;
//!
//! let mut referee = Referee::new(MatchConfig::default());
//! let mut rack = BallRack::new();
//! let mut ui: Vec<HostEffect> = Vec::new();
//!
//! ui.present_all(referee.begin());
//! assert_eq!(referee.current_player(), Some(PlayerSlot::One));
//!
//! // Player one sinks the cue ball.
//! ui.present_all(referee.observe_motion(true));
//! rack.pocket(BallNumber::CUE);
//! ui.present_all(referee.ball_pocketed(BallNumber::CUE, &rack));
//! ui.present_all(referee.observe_motion(false));
//!
//! assert_eq!(referee.current_player(), Some(PlayerSlot::Two));
//! ```

use log::{debug, warn};

use crate::core::{BallNumber, Match, MatchConfig, PlayerSlot, RulesError};
use crate::events::{Effects, HostEffect, MotionDetector, TableEvent};
use crate::rules::{
    assess_round, on_ball_pocketed, BallOwnership, GroupTable, PocketOutcome, RoundOutcome,
    TableView,
};

/// Drives one match for the host.
#[derive(Clone, Debug)]
pub struct Referee<O = GroupTable> {
    config: MatchConfig,
    state: Match,
    ownership: O,
    motion: MotionDetector,
    /// Seconds left before the first round; `None` once it has started.
    intro_remaining: Option<f32>,
}

impl Referee<GroupTable> {
    /// Start a match with group-based ownership.
    #[must_use]
    pub fn new(config: MatchConfig) -> Self {
        Self::with_ownership(config, GroupTable)
    }

    /// Start a match, rejecting an invalid configuration.
    pub fn try_new(config: MatchConfig) -> Result<Self, RulesError> {
        config.validate()?;
        Ok(Self::new(config))
    }
}

impl<O: BallOwnership> Referee<O> {
    /// Start a match with a custom ball ownership rule.
    ///
    /// Invalid durations or thresholds fall back to their defaults; use
    /// [`Referee::try_new`] to reject them instead.
    pub fn with_ownership(config: MatchConfig, ownership: O) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                warn!("{e}, using defaults for invalid fields");
                config.sanitized()
            }
        };

        Self {
            state: Match::with_assignment(config.group_assignment),
            motion: MotionDetector::new(config.rest_speed_threshold),
            intro_remaining: Some(config.intro_delay_secs),
            ownership,
            config,
        }
    }

    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The match being refereed.
    #[must_use]
    pub fn state(&self) -> &Match {
        &self.state
    }

    #[must_use]
    pub fn current_player(&self) -> Option<PlayerSlot> {
        self.state.current_player()
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    /// Whether the shooter may aim: the first round has begun, the match is
    /// live, and nothing is rolling.
    #[must_use]
    pub fn controls_enabled(&self) -> bool {
        !self.state.is_game_over()
            && self.state.current_player().is_some()
            && !self.motion.in_motion()
    }

    /// Advance the intro countdown. Starts the first round when it expires.
    ///
    /// Negative or non-finite steps are ignored.
    pub fn advance_clock(&mut self, dt_secs: f32) -> Effects {
        let Some(remaining) = self.intro_remaining.as_mut() else {
            return Effects::new();
        };

        if !dt_secs.is_finite() || dt_secs < 0.0 {
            warn!("ignoring clock step of {dt_secs}s");
            return Effects::new();
        }

        *remaining -= dt_secs;
        if *remaining > 0.0 {
            return Effects::new();
        }

        self.begin()
    }

    /// Start the first round now, skipping whatever is left of the intro.
    ///
    /// Only the first call has any effect.
    pub fn begin(&mut self) -> Effects {
        if self.intro_remaining.take().is_none() {
            return Effects::new();
        }

        debug!("intro finished, starting first round");
        self.motion_settled()
    }

    /// Feed one frame's "any ball moving" sample.
    ///
    /// Assesses the round on the moving → at-rest edge.
    pub fn observe_motion(&mut self, any_moving: bool) -> Effects {
        if self.state.is_game_over() {
            return Effects::new();
        }

        // During the intro the table settles without starting a round.
        if self.motion.observe(any_moving) && self.intro_remaining.is_none() {
            debug!("all balls have stopped");
            self.motion_settled()
        } else {
            Effects::new()
        }
    }

    /// Feed one frame's ball speeds. See [`observe_motion`](Self::observe_motion).
    pub fn observe_speeds(&mut self, speeds: impl IntoIterator<Item = f32>) -> Effects {
        let any_moving = speeds.into_iter().any(|s| self.motion.is_moving(s));
        self.observe_motion(any_moving)
    }

    /// Dispatch one table event.
    pub fn handle(&mut self, event: TableEvent, table: &impl TableView) -> Effects {
        match event {
            TableEvent::BallPocketed(ball) => self.ball_pocketed(ball, table),
            TableEvent::MotionSettled => self.motion_settled(),
        }
    }

    /// A ball left play.
    pub fn ball_pocketed(&mut self, ball: BallNumber, table: &impl TableView) -> Effects {
        let mut effects = Effects::new();

        if let PocketOutcome::MatchEnded(outcome) =
            on_ball_pocketed(&mut self.state, ball, table, &self.ownership)
        {
            effects.push(HostEffect::persistent_message(outcome.message()));
            effects.push(HostEffect::MatchEnded {
                winner: outcome.winner,
                in_sequence: outcome.in_sequence,
            });
        }

        effects
    }

    /// Every ball has come to rest: assess the round.
    pub fn motion_settled(&mut self) -> Effects {
        let mut effects = Effects::new();
        // A host-reported settle closes the shot the detector was tracking.
        self.motion.reset();

        let Some(outcome) = assess_round(&mut self.state) else {
            return effects;
        };

        if let Some(text) = outcome.message() {
            effects.push(HostEffect::message(text, self.config.message_secs));
        }
        if outcome.changes_player() {
            effects.push(HostEffect::player_changed(outcome.next_player()));
        }
        if let RoundOutcome::FirstRound { .. } = outcome {
            // The host may have started the match without the intro clock.
            self.intro_remaining = None;
        }

        effects
    }
}
