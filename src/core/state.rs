//! Match state.
//!
//! A `Match` is an explicitly owned value: the host keeps it and passes it
//! by reference to the pocketing handler and round resolver. Nothing here
//! is global.
//!
//! ## Lifecycle
//!
//! - `current_player`: `None` at start, `Some(One)` after the first round,
//!   then toggled by the resolver.
//! - `game_over`: `false` until the eight-ball drops, then `true` forever.
//!   Once set, no operation mutates the match again.

use serde::{Deserialize, Serialize};

use super::config::GroupAssignment;
use super::player::{Player, PlayerPair, PlayerSlot};
use crate::rules::MatchOutcome;

/// The whole game.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Match {
    players: PlayerPair<Player>,
    current_player: Option<PlayerSlot>,
    game_over: bool,
    outcome: Option<MatchOutcome>,
    /// Rounds assessed so far, including the first.
    rounds: u32,
}

impl Match {
    /// Start a match with fixed groups (player one solids, player two stripes).
    #[must_use]
    pub fn start() -> Self {
        Self::with_assignment(GroupAssignment::Fixed)
    }

    /// Start a match using the given group assignment policy.
    #[must_use]
    pub fn with_assignment(policy: GroupAssignment) -> Self {
        let players = PlayerPair::new(|slot| match policy.initial_group(slot) {
            Some(group) => Player::with_group(slot, group),
            None => Player::new(slot),
        });

        Self {
            players,
            current_player: None,
            game_over: false,
            outcome: None,
            rounds: 0,
        }
    }

    /// The player not equal to `slot`.
    #[must_use]
    pub fn other_player(&self, slot: PlayerSlot) -> PlayerSlot {
        slot.other()
    }

    /// Whose turn it is; `None` before the first round.
    #[must_use]
    pub fn current_player(&self) -> Option<PlayerSlot> {
        self.current_player
    }

    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot]
    }

    #[must_use]
    pub fn players(&self) -> &PlayerPair<Player> {
        &self.players
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Final result, set together with `game_over`.
    #[must_use]
    pub fn outcome(&self) -> Option<&MatchOutcome> {
        self.outcome.as_ref()
    }

    /// Number of rounds assessed so far.
    #[must_use]
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    // === Rule-only mutation ===

    pub(crate) fn player_mut(&mut self, slot: PlayerSlot) -> &mut Player {
        &mut self.players[slot]
    }

    pub(crate) fn players_mut(&mut self) -> &mut PlayerPair<Player> {
        &mut self.players
    }

    pub(crate) fn set_current_player(&mut self, slot: PlayerSlot) {
        self.current_player = Some(slot);
        self.rounds += 1;
    }

    /// Count a round in which the current player keeps the table.
    pub(crate) fn repeat_round(&mut self) {
        self.rounds += 1;
    }

    pub(crate) fn finish(&mut self, outcome: MatchOutcome) {
        debug_assert!(!self.game_over, "match finished twice");
        self.game_over = true;
        self.outcome = Some(outcome);
    }
}

impl Default for Match {
    fn default() -> Self {
        Self::start()
    }
}
