//! Ball identity.
//!
//! Balls are numbered the way the physics subsystem reports them:
//!
//! | Number | Ball |
//! |--------|------|
//! | 0      | cue ball |
//! | 1-7    | solids |
//! | 8      | eight-ball |
//! | 9-15   | stripes |
//!
//! The numbering is a fixed contract with the host. Raw integers are
//! validated once, at the boundary, into [`BallNumber`].

use serde::{Deserialize, Serialize};

use super::error::RulesError;

/// Validated ball number in `[0, 15]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct BallNumber(u8);

impl BallNumber {
    /// The cue ball.
    pub const CUE: BallNumber = BallNumber(0);

    /// The eight-ball.
    pub const EIGHT: BallNumber = BallNumber(8);

    /// Highest ball number on the table.
    pub const MAX: u8 = 15;

    /// Create a ball number, rejecting anything outside `[0, 15]`.
    pub fn new(number: u8) -> Result<Self, RulesError> {
        if number <= Self::MAX {
            Ok(Self(number))
        } else {
            Err(RulesError::InvalidBallNumber(i64::from(number)))
        }
    }

    /// Get the raw number.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Classify the ball.
    #[must_use]
    pub const fn kind(self) -> BallKind {
        match self.0 {
            0 => BallKind::Cue,
            8 => BallKind::Eight,
            1..=7 => BallKind::Object(BallGroup::Solids),
            _ => BallKind::Object(BallGroup::Stripes),
        }
    }

    /// The group this ball belongs to, if it is an object ball.
    #[must_use]
    pub const fn group(self) -> Option<BallGroup> {
        match self.kind() {
            BallKind::Object(group) => Some(group),
            BallKind::Cue | BallKind::Eight => None,
        }
    }

    /// Iterate over every ball on the table, cue ball first.
    pub fn all() -> impl Iterator<Item = BallNumber> {
        (0..=Self::MAX).map(BallNumber)
    }
}

impl TryFrom<u8> for BallNumber {
    type Error = RulesError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i32> for BallNumber {
    type Error = RulesError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .map_err(|_| RulesError::InvalidBallNumber(i64::from(value)))
            .and_then(Self::new)
    }
}

impl From<BallNumber> for u8 {
    fn from(ball: BallNumber) -> Self {
        ball.0
    }
}

impl std::fmt::Display for BallNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind() {
            BallKind::Cue => write!(f, "cue ball"),
            BallKind::Eight => write!(f, "8-ball"),
            BallKind::Object(_) => write!(f, "ball {}", self.0),
        }
    }
}

/// What a ball means to the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallKind {
    /// Ball 0. Pocketing it is a foul.
    Cue,
    /// Ball 8. Pocketing it ends the match.
    Eight,
    /// A numbered object ball belonging to one of the two groups.
    Object(BallGroup),
}

/// One of the two seven-ball ranges a player must clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BallGroup {
    /// Balls 1-7.
    Solids,
    /// Balls 9-15.
    Stripes,
}

impl BallGroup {
    /// Number of balls in each group.
    pub const SIZE: usize = 7;

    /// The other group.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            BallGroup::Solids => BallGroup::Stripes,
            BallGroup::Stripes => BallGroup::Solids,
        }
    }

    /// Iterate over the seven balls of this group in ascending order.
    pub fn balls(self) -> impl Iterator<Item = BallNumber> {
        let first = match self {
            BallGroup::Solids => 1,
            BallGroup::Stripes => 9,
        };
        (first..first + Self::SIZE as u8).map(BallNumber)
    }

    /// Check whether a ball belongs to this group.
    #[must_use]
    pub fn contains(self, ball: BallNumber) -> bool {
        ball.group() == Some(self)
    }
}

impl std::fmt::Display for BallGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BallGroup::Solids => write!(f, "solids"),
            BallGroup::Stripes => write!(f, "stripes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ball(n: u8) -> BallNumber {
        BallNumber::new(n).unwrap()
    }

    #[test]
    fn test_ball_number_range() {
        assert!(BallNumber::new(0).is_ok());
        assert!(BallNumber::new(15).is_ok());
        assert_eq!(BallNumber::new(16), Err(RulesError::InvalidBallNumber(16)));
    }

    #[test]
    fn test_ball_number_from_i32() {
        assert_eq!(BallNumber::try_from(8i32), Ok(BallNumber::EIGHT));
        assert_eq!(BallNumber::try_from(-1i32), Err(RulesError::InvalidBallNumber(-1)));
        assert_eq!(BallNumber::try_from(300i32), Err(RulesError::InvalidBallNumber(300)));
    }

    #[test]
    fn test_ball_kind() {
        assert_eq!(ball(0).kind(), BallKind::Cue);
        assert_eq!(ball(8).kind(), BallKind::Eight);
        assert_eq!(ball(1).kind(), BallKind::Object(BallGroup::Solids));
        assert_eq!(ball(7).kind(), BallKind::Object(BallGroup::Solids));
        assert_eq!(ball(9).kind(), BallKind::Object(BallGroup::Stripes));
        assert_eq!(ball(15).kind(), BallKind::Object(BallGroup::Stripes));
    }

    #[test]
    fn test_group_balls() {
        let solids: Vec<u8> = BallGroup::Solids.balls().map(BallNumber::raw).collect();
        let stripes: Vec<u8> = BallGroup::Stripes.balls().map(BallNumber::raw).collect();

        assert_eq!(solids, vec![1, 2, 3, 4, 5, 6, 7]);
        assert_eq!(stripes, vec![9, 10, 11, 12, 13, 14, 15]);
    }

    #[test]
    fn test_group_contains() {
        assert!(BallGroup::Solids.contains(ball(3)));
        assert!(!BallGroup::Solids.contains(ball(11)));
        assert!(!BallGroup::Solids.contains(BallNumber::CUE));
        assert!(!BallGroup::Stripes.contains(BallNumber::EIGHT));
        assert_eq!(BallGroup::Solids.opposite(), BallGroup::Stripes);
    }

    #[test]
    fn test_all_balls() {
        assert_eq!(BallNumber::all().count(), 16);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", BallNumber::CUE), "cue ball");
        assert_eq!(format!("{}", BallNumber::EIGHT), "8-ball");
        assert_eq!(format!("{}", ball(12)), "ball 12");
    }

    #[test]
    fn test_ball_serialization() {
        let json = serde_json::to_string(&ball(10)).unwrap();
        assert_eq!(json, "10");
        let back: BallNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ball(10));
        assert!(serde_json::from_str::<BallNumber>("16").is_err());
    }
}
