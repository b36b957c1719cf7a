//! Results of pocketing events and round assessments.
//!
//! Outcomes are plain data. The resolver and pocketing handler return them;
//! the referee turns them into host effects. User-facing text is produced
//! here so every host shows the same wording.

use serde::{Deserialize, Serialize};

use crate::core::{BallGroup, PlayerSlot};

/// How the match ended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    /// The player who won.
    pub winner: PlayerSlot,
    /// The player who lost.
    pub loser: PlayerSlot,
    /// True when the winner cleared their group before sinking the 8-ball.
    /// False when the loser sank it out of sequence.
    pub in_sequence: bool,
}

impl MatchOutcome {
    /// `shooter` cleared their group and sank the 8-ball.
    #[must_use]
    pub fn in_sequence(shooter: PlayerSlot) -> Self {
        Self {
            winner: shooter,
            loser: shooter.other(),
            in_sequence: true,
        }
    }

    /// `shooter` sank the 8-ball early; the opponent wins.
    #[must_use]
    pub fn out_of_sequence(shooter: PlayerSlot) -> Self {
        Self {
            winner: shooter.other(),
            loser: shooter,
            in_sequence: false,
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, slot: PlayerSlot) -> bool {
        self.winner == slot
    }

    /// Terminal message for the presentation layer.
    #[must_use]
    pub fn message(&self) -> String {
        let winner = self.winner.number();
        if self.in_sequence {
            format!("Player {winner} pocketed all their balls and the 8-ball. Player {winner} wins!")
        } else {
            format!(
                "Player {} pocketed the 8-ball out of sequence. Player {winner} wins!",
                self.loser.number()
            )
        }
    }
}

/// Why a pocketing event changed nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// The 8-ball already ended the match.
    MatchOver,
    /// No round has started yet, so nobody is shooting.
    NoActivePlayer,
}

/// Effect of a single pocketing event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PocketOutcome {
    /// The event was dropped without touching the match.
    Ignored(IgnoreReason),
    /// Shooter pocketed the cue ball; a penalty is pending.
    Penalty(PlayerSlot),
    /// Shooter pocketed one of their own balls; an extra turn is pending.
    ExtraTurn(PlayerSlot),
    /// Shooter claimed a group on an open table. `extra_turn` is whatever
    /// the ownership rule says about the claiming ball.
    GroupsAssigned {
        shooter: PlayerSlot,
        group: BallGroup,
        extra_turn: bool,
    },
    /// An opponent's ball went down. No modeled effect.
    NoEffect,
    /// The 8-ball ended the match.
    MatchEnded(MatchOutcome),
}

/// Result of assessing a round once all balls are at rest.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    /// First round of the match; player one takes the table.
    FirstRound { to: PlayerSlot },
    /// `penalized` sank the cue ball; `to` takes the table with an extra
    /// turn banked.
    Penalty {
        penalized: PlayerSlot,
        to: PlayerSlot,
    },
    /// `player` keeps the table.
    ExtraTurn { player: PlayerSlot },
    /// Normal end of turn.
    Switch { from: PlayerSlot, to: PlayerSlot },
}

impl RoundOutcome {
    /// Who shoots next.
    #[must_use]
    pub fn next_player(&self) -> PlayerSlot {
        match *self {
            RoundOutcome::FirstRound { to }
            | RoundOutcome::Penalty { to, .. }
            | RoundOutcome::Switch { to, .. } => to,
            RoundOutcome::ExtraTurn { player } => player,
        }
    }

    /// Whether the active player changed.
    #[must_use]
    pub fn changes_player(&self) -> bool {
        !matches!(self, RoundOutcome::ExtraTurn { .. })
    }

    /// Round message for the presentation layer. The first round has none.
    #[must_use]
    pub fn message(&self) -> Option<String> {
        match *self {
            RoundOutcome::FirstRound { .. } => None,
            RoundOutcome::Penalty { to, .. } => Some(format!(
                "You pocketed the cue ball!\nPlayer {} gets an extra turn.",
                to.number()
            )),
            RoundOutcome::ExtraTurn { .. } => Some("You get another turn!".to_string()),
            RoundOutcome::Switch { to, .. } => Some(format!("Switching to player {}.", to.number())),
        }
    }
}
