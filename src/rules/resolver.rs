//! Round resolver.
//!
//! Runs once each time every ball has come to rest. Rules are checked in
//! order and the first match wins:
//!
//! 1. No current player yet: player one takes the table.
//! 2. Penalty pending: clear it, bank an extra turn for the opponent, and
//!    hand them the table.
//! 3. Extra turn pending: clear it and keep the table.
//! 4. Otherwise: hand the table to the opponent.
//!
//! A penalty always beats an extra turn. Flags left over after a round
//! (an extra turn that lost to a penalty, or one banked for the opponent)
//! are ordinary data and are evaluated again on the next call.

use log::debug;

use crate::core::{Match, PlayerSlot};

use super::outcome::RoundOutcome;

/// Assess the round that just ended.
///
/// Returns `None` without touching the match once the game is over.
pub fn assess_round(m: &mut Match) -> Option<RoundOutcome> {
    if m.is_game_over() {
        debug!("round assessment after match end, ignoring");
        return None;
    }

    let Some(current) = m.current_player() else {
        debug!("first round, {} to shoot", PlayerSlot::One);
        m.set_current_player(PlayerSlot::One);
        return Some(RoundOutcome::FirstRound { to: PlayerSlot::One });
    };

    let other = m.other_player(current);

    let outcome = if m.player_mut(current).take_penalty() {
        debug!("{current} fouled on the cue ball, {other} gets an extra turn");
        m.player_mut(other).set_extra_turn();
        RoundOutcome::Penalty {
            penalized: current,
            to: other,
        }
    } else if m.player_mut(current).take_extra_turn() {
        debug!("{current} shoots again");
        m.repeat_round();
        return Some(RoundOutcome::ExtraTurn { player: current });
    } else {
        RoundOutcome::Switch {
            from: current,
            to: other,
        }
    };

    m.set_current_player(other);
    debug!("round {}: {other} to shoot", m.rounds());
    Some(outcome)
}
