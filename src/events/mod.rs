//! Events exchanged with the host.
//!
//! ## Inbound
//!
//! [`TableEvent`] carries what the physics subsystem reports: a ball left
//! play, or every ball came to rest. The at-rest event is an edge; hosts
//! that only have per-frame speeds use [`MotionDetector`] to derive it.
//!
//! ## Outbound
//!
//! [`HostEffect`] is what the presentation layer should do in response:
//! show a message, relabel the current player, or announce the end of the
//! match. Engine calls return effects in an [`Effects`] buffer; hosts hand
//! them to a [`Presenter`].

mod motion;

pub use motion::MotionDetector;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::core::{BallNumber, PlayerSlot, RulesError};

/// Something the physics subsystem reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TableEvent {
    /// A ball left play.
    BallPocketed(BallNumber),
    /// All balls have just come to rest.
    MotionSettled,
}

impl TableEvent {
    /// Build a pocketing event from the host's raw ball number.
    pub fn pocketed(number: i32) -> Result<Self, RulesError> {
        Ok(TableEvent::BallPocketed(BallNumber::try_from(number)?))
    }
}

/// Something the presentation layer should do.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum HostEffect {
    /// Show `text` for `duration_secs`. Zero means keep it until replaced.
    DisplayMessage { text: String, duration_secs: f32 },
    /// The active player changed; `label` is e.g. `PLAYER 2`.
    CurrentPlayerChanged { label: String },
    /// The match is over.
    MatchEnded {
        winner: PlayerSlot,
        in_sequence: bool,
    },
}

impl HostEffect {
    /// A message that stays up for `duration_secs`.
    pub fn message(text: impl Into<String>, duration_secs: f32) -> Self {
        HostEffect::DisplayMessage {
            text: text.into(),
            duration_secs,
        }
    }

    /// A message that stays up until replaced.
    pub fn persistent_message(text: impl Into<String>) -> Self {
        Self::message(text, 0.0)
    }

    /// Relabel the current player.
    #[must_use]
    pub fn player_changed(slot: PlayerSlot) -> Self {
        HostEffect::CurrentPlayerChanged { label: slot.label() }
    }

    /// Message text, if this is a message.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self {
            HostEffect::DisplayMessage { text, .. } => Some(text.as_str()),
            _ => None,
        }
    }
}

/// Effects produced by one engine call. Rarely more than three.
pub type Effects = SmallVec<[HostEffect; 4]>;

/// Sink for outbound effects: the host's UI layer.
pub trait Presenter {
    /// Apply one effect.
    fn present(&mut self, effect: HostEffect);

    /// Apply effects in order.
    fn present_all(&mut self, effects: impl IntoIterator<Item = HostEffect>)
    where
        Self: Sized,
    {
        for effect in effects {
            self.present(effect);
        }
    }
}

/// Records every effect, in order.
impl Presenter for Vec<HostEffect> {
    fn present(&mut self, effect: HostEffect) {
        self.push(effect);
    }
}
