//! Player identification and per-player data storage.
//!
//! ## PlayerSlot
//!
//! Exactly two seats, `One` and `Two`. Slots are never created or
//! destroyed; `other()` is a total lookup.
//!
//! ## PlayerPair
//!
//! Fixed two-entry storage indexed by `PlayerSlot`.
//!
//! ## Player
//!
//! One contestant: identity, assigned group, and the two pending flags the
//! round resolver consumes.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

use super::ball::BallGroup;

/// One of the two seats at the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    One,
    Two,
}

impl PlayerSlot {
    /// Both slots, in turn order.
    pub const ALL: [PlayerSlot; 2] = [PlayerSlot::One, PlayerSlot::Two];

    /// The opposing slot.
    ///
    /// ```
    /// use eight_ball::core::PlayerSlot;
    ///
    /// assert_eq!(PlayerSlot::One.other(), PlayerSlot::Two);
    /// assert_eq!(PlayerSlot::Two.other(), PlayerSlot::One);
    /// ```
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            PlayerSlot::One => PlayerSlot::Two,
            PlayerSlot::Two => PlayerSlot::One,
        }
    }

    /// 1-based player number, as shown to users.
    #[must_use]
    pub const fn number(self) -> u8 {
        match self {
            PlayerSlot::One => 1,
            PlayerSlot::Two => 2,
        }
    }

    /// 0-based storage index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.number() as usize - 1
    }

    /// Turn label for the UI, e.g. `PLAYER 1`.
    #[must_use]
    pub fn label(self) -> String {
        format!("PLAYER {}", self.number())
    }
}

impl std::fmt::Display for PlayerSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.number())
    }
}

/// Per-player storage with exactly two entries.
///
/// ## Example
///
/// ```
/// use eight_ball::core::{PlayerPair, PlayerSlot};
///
/// let mut fouls: PlayerPair<u32> = PlayerPair::with_default();
/// fouls[PlayerSlot::Two] += 1;
///
/// assert_eq!(fouls[PlayerSlot::One], 0);
/// assert_eq!(fouls[PlayerSlot::Two], 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerPair<T> {
    data: [T; 2],
}

impl<T> PlayerPair<T> {
    /// Create a pair with values from a factory function.
    pub fn new(factory: impl Fn(PlayerSlot) -> T) -> Self {
        Self {
            data: [factory(PlayerSlot::One), factory(PlayerSlot::Two)],
        }
    }

    /// Create a pair with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a player's data.
    #[must_use]
    pub fn get(&self, slot: PlayerSlot) -> &T {
        &self.data[slot.index()]
    }

    /// Get a mutable reference to a player's data.
    pub fn get_mut(&mut self, slot: PlayerSlot) -> &mut T {
        &mut self.data[slot.index()]
    }

    /// Borrow both entries mutably, `slot` first.
    pub fn split_mut(&mut self, slot: PlayerSlot) -> (&mut T, &mut T) {
        let [one, two] = &mut self.data;
        match slot {
            PlayerSlot::One => (one, two),
            PlayerSlot::Two => (two, one),
        }
    }

    /// Iterate over (PlayerSlot, &T) pairs.
    pub fn iter(&self) -> impl Iterator<Item = (PlayerSlot, &T)> {
        PlayerSlot::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<PlayerSlot> for PlayerPair<T> {
    type Output = T;

    fn index(&self, slot: PlayerSlot) -> &Self::Output {
        self.get(slot)
    }
}

impl<T> IndexMut<PlayerSlot> for PlayerPair<T> {
    fn index_mut(&mut self, slot: PlayerSlot) -> &mut Self::Output {
        self.get_mut(slot)
    }
}

/// One contestant.
///
/// Flags are written only by the pocketing handler and the round resolver.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    slot: PlayerSlot,
    assigned_group: Option<BallGroup>,
    penalty_pending: bool,
    extra_turn_pending: bool,
}

impl Player {
    /// Create a player with no group and no pending flags.
    #[must_use]
    pub fn new(slot: PlayerSlot) -> Self {
        Self {
            slot,
            assigned_group: None,
            penalty_pending: false,
            extra_turn_pending: false,
        }
    }

    /// Create a player with a group already assigned.
    #[must_use]
    pub fn with_group(slot: PlayerSlot, group: BallGroup) -> Self {
        Self {
            assigned_group: Some(group),
            ..Self::new(slot)
        }
    }

    #[must_use]
    pub fn slot(&self) -> PlayerSlot {
        self.slot
    }

    /// The group this player must clear, `None` while the table is open.
    #[must_use]
    pub fn assigned_group(&self) -> Option<BallGroup> {
        self.assigned_group
    }

    /// Set when this player pocketed the cue ball during their turn.
    #[must_use]
    pub fn penalty_pending(&self) -> bool {
        self.penalty_pending
    }

    /// Set when this player pocketed one of their own balls, or was
    /// handed a turn by the opponent's foul.
    #[must_use]
    pub fn extra_turn_pending(&self) -> bool {
        self.extra_turn_pending
    }

    pub(crate) fn assign_group(&mut self, group: BallGroup) {
        self.assigned_group = Some(group);
    }

    pub(crate) fn set_penalty(&mut self) {
        self.penalty_pending = true;
    }

    pub(crate) fn set_extra_turn(&mut self) {
        self.extra_turn_pending = true;
    }

    /// Clear the penalty flag, returning whether it was set.
    pub(crate) fn take_penalty(&mut self) -> bool {
        std::mem::take(&mut self.penalty_pending)
    }

    /// Clear the extra-turn flag, returning whether it was set.
    pub(crate) fn take_extra_turn(&mut self) -> bool {
        std::mem::take(&mut self.extra_turn_pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_slot_basics() {
        assert_eq!(PlayerSlot::One.number(), 1);
        assert_eq!(PlayerSlot::Two.number(), 2);
        assert_eq!(PlayerSlot::One.index(), 0);
        assert_eq!(PlayerSlot::Two.index(), 1);
        assert_eq!(format!("{}", PlayerSlot::Two), "Player 2");
        assert_eq!(PlayerSlot::One.label(), "PLAYER 1");
    }

    #[test]
    fn test_other_is_involution() {
        for slot in PlayerSlot::ALL {
            assert_ne!(slot.other(), slot);
            assert_eq!(slot.other().other(), slot);
        }
    }

    #[test]
    fn test_player_pair_new() {
        let pair = PlayerPair::new(|s| s.number() * 10);

        assert_eq!(pair[PlayerSlot::One], 10);
        assert_eq!(pair[PlayerSlot::Two], 20);
    }

    #[test]
    fn test_player_pair_split_mut() {
        let mut pair: PlayerPair<i32> = PlayerPair::with_default();

        let (current, other) = pair.split_mut(PlayerSlot::Two);
        *current = 2;
        *other = 1;

        assert_eq!(pair[PlayerSlot::One], 1);
        assert_eq!(pair[PlayerSlot::Two], 2);
    }

    #[test]
    fn test_player_pair_iter() {
        let pair = PlayerPair::new(|s| s.index());
        let pairs: Vec<_> = pair.iter().collect();

        assert_eq!(pairs, vec![(PlayerSlot::One, &0), (PlayerSlot::Two, &1)]);
    }

    #[test]
    fn test_player_flags() {
        let mut player = Player::new(PlayerSlot::One);
        assert!(!player.penalty_pending());
        assert!(!player.extra_turn_pending());
        assert_eq!(player.assigned_group(), None);

        player.set_penalty();
        player.set_penalty();
        assert!(player.take_penalty());
        assert!(!player.take_penalty());

        player.set_extra_turn();
        assert!(player.take_extra_turn());
        assert!(!player.extra_turn_pending());
    }

    #[test]
    fn test_player_with_group() {
        let mut player = Player::with_group(PlayerSlot::Two, BallGroup::Stripes);
        assert_eq!(player.slot(), PlayerSlot::Two);
        assert_eq!(player.assigned_group(), Some(BallGroup::Stripes));

        player.assign_group(BallGroup::Solids);
        assert_eq!(player.assigned_group(), Some(BallGroup::Solids));
    }

    #[test]
    fn test_player_serialization() {
        let player = Player::with_group(PlayerSlot::One, BallGroup::Solids);
        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
