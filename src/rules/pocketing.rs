//! Pocketing event handler.
//!
//! Called once per ball leaving play, at any point during a shot. It only
//! records flags or ends the match; turn order is decided later by the
//! round resolver once motion settles.

use log::{debug, info, warn};

use crate::core::{BallKind, BallNumber, Match};

use super::outcome::{IgnoreReason, MatchOutcome, PocketOutcome};
use super::ownership::BallOwnership;
use super::table::{all_group_balls_pocketed, TableView};

/// Apply a pocketing event to the match.
///
/// - cue ball: the shooter gets a pending penalty
/// - 8-ball: ends the match, in or out of sequence
/// - own ball: the shooter gets a pending extra turn
/// - opponent's ball: nothing
///
/// On an open table (neither player has a group) the first object ball
/// claims its group for the shooter. Whether that ball then earns an extra
/// turn is still up to `ownership`.
///
/// Once the match is over every call is a no-op.
pub fn on_ball_pocketed(
    m: &mut Match,
    ball: BallNumber,
    table: &impl TableView,
    ownership: &impl BallOwnership,
) -> PocketOutcome {
    if m.is_game_over() {
        debug!("{ball} pocketed after match end, ignoring");
        return PocketOutcome::Ignored(IgnoreReason::MatchOver);
    }

    let Some(shooter) = m.current_player() else {
        warn!("{ball} pocketed before the first round, ignoring");
        return PocketOutcome::Ignored(IgnoreReason::NoActivePlayer);
    };

    match ball.kind() {
        BallKind::Cue => {
            debug!("{shooter} pocketed the cue ball, penalty pending");
            m.player_mut(shooter).set_penalty();
            PocketOutcome::Penalty(shooter)
        }
        BallKind::Eight => {
            let cleared = m
                .player(shooter)
                .assigned_group()
                .is_some_and(|group| all_group_balls_pocketed(table, group));

            let outcome = if cleared {
                MatchOutcome::in_sequence(shooter)
            } else {
                MatchOutcome::out_of_sequence(shooter)
            };

            info!(
                "8-ball pocketed by {shooter} ({}), {} wins",
                if cleared { "in sequence" } else { "out of sequence" },
                outcome.winner
            );
            m.finish(outcome.clone());
            PocketOutcome::MatchEnded(outcome)
        }
        BallKind::Object(group) => {
            if table_is_open(m) {
                let (own, opponent) = m.players_mut().split_mut(shooter);
                own.assign_group(group);
                opponent.assign_group(group.opposite());
                debug!("{shooter} claims {group} with {ball}");

                let extra_turn = ownership.is_own_ball(m.player(shooter), ball);
                if extra_turn {
                    m.player_mut(shooter).set_extra_turn();
                }
                return PocketOutcome::GroupsAssigned {
                    shooter,
                    group,
                    extra_turn,
                };
            }

            if ownership.is_own_ball(m.player(shooter), ball) {
                debug!("{shooter} pocketed own {ball}, extra turn pending");
                m.player_mut(shooter).set_extra_turn();
                PocketOutcome::ExtraTurn(shooter)
            } else {
                debug!("{shooter} pocketed opponent's {ball}");
                PocketOutcome::NoEffect
            }
        }
    }
}

fn table_is_open(m: &Match) -> bool {
    m.players().iter().all(|(_, p)| p.assigned_group().is_none())
}
