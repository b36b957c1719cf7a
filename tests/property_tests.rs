//! Property tests over arbitrary event sequences.
//!
//! A match is driven by a random interleaving of pocketing events and
//! settle edges. Whatever the order, the invariants below must hold.

use proptest::prelude::*;

use eight_ball::core::{BallNumber, GroupAssignment, Match, PlayerSlot};
use eight_ball::rules::{
    assess_round, on_ball_pocketed, BallRack, GroupTable, IgnoreReason, PocketOutcome,
    RoundOutcome,
};

#[derive(Clone, Copy, Debug)]
enum Step {
    Pocket(u8),
    Settle,
}

fn step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0u8..=15).prop_map(Step::Pocket),
        2 => Just(Step::Settle),
    ]
}

fn policy() -> impl Strategy<Value = GroupAssignment> {
    prop_oneof![Just(GroupAssignment::Fixed), Just(GroupAssignment::OpenTable)]
}

/// Apply one step, keeping the rack in sync. The cue ball is respotted.
fn apply(m: &mut Match, rack: &mut BallRack, step: Step) {
    match step {
        Step::Pocket(n) => {
            let ball = BallNumber::new(n).unwrap();
            rack.pocket(ball);
            on_ball_pocketed(m, ball, rack, &GroupTable);
            if ball == BallNumber::CUE {
                rack.respot(ball);
            }
        }
        Step::Settle => {
            assess_round(m);
        }
    }
}

proptest! {
    /// Property: `current_player` is `None` exactly until the first assessment.
    #[test]
    fn prop_current_player_set_after_first_round(
        policy in policy(),
        steps in prop::collection::vec(step(), 0..80)
    ) {
        let mut m = Match::with_assignment(policy);
        let mut rack = BallRack::new();
        let mut assessed = false;

        for step in steps {
            apply(&mut m, &mut rack, step);
            assessed |= matches!(step, Step::Settle);
            prop_assert_eq!(m.current_player().is_some(), assessed);
        }
    }

    /// Property: the first assessment always picks player one.
    #[test]
    fn prop_first_round_is_player_one(
        pockets in prop::collection::vec(0u8..=15, 0..10)
    ) {
        let mut m = Match::start();
        let mut rack = BallRack::new();

        for n in pockets {
            apply(&mut m, &mut rack, Step::Pocket(n));
        }
        let outcome = assess_round(&mut m);

        prop_assert_eq!(outcome, Some(RoundOutcome::FirstRound { to: PlayerSlot::One }));
        prop_assert_eq!(m.current_player(), Some(PlayerSlot::One));
    }

    /// Property: once the match is over nothing changes it.
    #[test]
    fn prop_game_over_is_frozen(
        policy in policy(),
        before in prop::collection::vec(step(), 0..40),
        after in prop::collection::vec(step(), 1..40)
    ) {
        let mut m = Match::with_assignment(policy);
        let mut rack = BallRack::new();

        assess_round(&mut m);
        for step in before {
            apply(&mut m, &mut rack, step);
        }
        apply(&mut m, &mut rack, Step::Pocket(8));
        prop_assert!(m.is_game_over());

        let finished = m.clone();
        for step in after {
            if let Step::Pocket(n) = step {
                let outcome = on_ball_pocketed(&mut m, BallNumber::new(n).unwrap(), &rack, &GroupTable);
                prop_assert_eq!(outcome, PocketOutcome::Ignored(IgnoreReason::MatchOver));
            } else {
                prop_assert_eq!(assess_round(&mut m), None);
            }
        }
        prop_assert_eq!(m, finished);
    }

    /// Property: the round outcome follows the shooter's flags, penalty first.
    #[test]
    fn prop_resolver_priority(
        policy in policy(),
        steps in prop::collection::vec(step(), 0..60)
    ) {
        let mut m = Match::with_assignment(policy);
        let mut rack = BallRack::new();
        assess_round(&mut m);

        for step in steps {
            if m.is_game_over() {
                break;
            }

            if let Step::Settle = step {
                let shooter = m.current_player().unwrap();
                let penalty = m.player(shooter).penalty_pending();
                let extra = m.player(shooter).extra_turn_pending();

                let outcome = assess_round(&mut m).unwrap();

                if penalty {
                    prop_assert_eq!(
                        outcome,
                        RoundOutcome::Penalty { penalized: shooter, to: shooter.other() }
                    );
                    prop_assert!(m.player(shooter.other()).extra_turn_pending());
                    prop_assert!(!m.player(shooter).penalty_pending());
                    // A losing extra turn is left untouched.
                    prop_assert_eq!(m.player(shooter).extra_turn_pending(), extra);
                } else if extra {
                    prop_assert_eq!(outcome, RoundOutcome::ExtraTurn { player: shooter });
                    prop_assert!(!m.player(shooter).extra_turn_pending());
                    prop_assert_eq!(m.current_player(), Some(shooter));
                } else {
                    prop_assert_eq!(
                        outcome,
                        RoundOutcome::Switch { from: shooter, to: shooter.other() }
                    );
                }
            } else {
                apply(&mut m, &mut rack, step);
            }
        }
    }

    /// Property: the 8-ball winner is the shooter iff their group is cleared.
    #[test]
    fn prop_eight_ball_winner(
        shooter_is_two in any::<bool>(),
        pocketed in prop::collection::vec(1u8..=15, 0..20)
    ) {
        let mut m = Match::start();
        assess_round(&mut m);
        if shooter_is_two {
            assess_round(&mut m);
        }
        let shooter = m.current_player().unwrap();

        let rack = BallRack::with_pocketed(
            pocketed.iter().filter(|&&n| n != 8).map(|&n| BallNumber::new(n).unwrap()),
        );
        let group = m.player(shooter).assigned_group().unwrap();
        let cleared = rack.remaining(group) == 0;

        on_ball_pocketed(&mut m, BallNumber::EIGHT, &rack, &GroupTable);
        let outcome = m.outcome().unwrap();

        prop_assert_eq!(outcome.in_sequence, cleared);
        prop_assert_eq!(outcome.winner == shooter, cleared);
        prop_assert_eq!(outcome.loser, outcome.winner.other());
    }
}
