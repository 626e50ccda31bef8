//! The two sides of a duel.

use serde::{Deserialize, Serialize};

/// One of the two players.
///
/// `First` starts in the top-left corner and conventionally moves first;
/// `Second` starts in the bottom-right corner and is the side the
/// evaluation function scores positively. Either side can be driven by a
/// search engine, a script, or a human frontend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Top-left side.
    First,
    /// Bottom-right side, the evaluation's maximizer.
    Second,
}

impl Player {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::First => write!(f, "first"),
            Player::Second => write!(f, "second"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_is_involutive() {
        assert_eq!(Player::First.opponent(), Player::Second);
        assert_eq!(Player::Second.opponent(), Player::First);
        assert_eq!(Player::First.opponent().opponent(), Player::First);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Player::First), "first");
        assert_eq!(format!("{}", Player::Second), "second");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Player::Second).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::Second);
    }
}
