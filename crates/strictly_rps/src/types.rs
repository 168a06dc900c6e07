//! Core domain types for rock-paper-scissors.

use serde::{Deserialize, Serialize};

/// A hand shape thrown by either side.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum Move {
    /// Crushes scissors.
    #[strum(serialize = "rock", serialize = "r", to_string = "Rock")]
    Rock,
    /// Covers rock.
    #[strum(serialize = "paper", serialize = "p", to_string = "Paper")]
    Paper,
    /// Cuts paper.
    #[strum(serialize = "scissors", serialize = "s", to_string = "Scissors")]
    Scissors,
}

impl Move {
    /// All moves, in a fixed order.
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Returns the move this one defeats.
    pub fn defeats(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Scissors => Move::Paper,
            Move::Paper => Move::Rock,
        }
    }

    /// Returns true if this move beats `other`.
    pub fn beats(self, other: Move) -> bool {
        self.defeats() == other
    }

    /// Emoji shown next to the move.
    pub fn emoji(self) -> &'static str {
        match self {
            Move::Rock => "🪨",
            Move::Paper => "📄",
            Move::Scissors => "✂️",
        }
    }
}

/// Result of a single round, from the player's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The player's move beat the computer's.
    PlayerWin,
    /// The computer's move beat the player's.
    ComputerWin,
    /// Both sides threw the same move.
    Tie,
}

impl Outcome {
    /// Short label used in history listings.
    pub fn label(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "Player",
            Outcome::ComputerWin => "Computer",
            Outcome::Tie => "Tie",
        }
    }

    /// Colored marker used in history listings.
    pub fn marker(self) -> &'static str {
        match self {
            Outcome::PlayerWin => "🟢",
            Outcome::ComputerWin => "🔴",
            Outcome::Tie => "🟡",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_move_beats_exactly_one_other() {
        for m in Move::iter() {
            let beaten: Vec<_> = Move::iter().filter(|other| m.beats(*other)).collect();
            assert_eq!(beaten, vec![m.defeats()]);
            assert!(!m.beats(m));
        }
    }

    #[test]
    fn test_parse_names_and_aliases() {
        assert_eq!(Move::from_str("rock").unwrap(), Move::Rock);
        assert_eq!(Move::from_str("PAPER").unwrap(), Move::Paper);
        assert_eq!(Move::from_str("Scissors").unwrap(), Move::Scissors);
        assert_eq!(Move::from_str("r").unwrap(), Move::Rock);
        assert_eq!(Move::from_str("S").unwrap(), Move::Scissors);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Move::from_str("lizard").is_err());
        assert!(Move::from_str("").is_err());
    }

    #[test]
    fn test_display_uses_title_case() {
        assert_eq!(Move::Rock.to_string(), "Rock");
        assert_eq!(Move::Scissors.to_string(), "Scissors");
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Paper).unwrap(), "\"paper\"");
        assert_eq!(
            serde_json::to_string(&Outcome::ComputerWin).unwrap(),
            "\"computer_win\""
        );
        let parsed: Move = serde_json::from_str("\"scissors\"").unwrap();
        assert_eq!(parsed, Move::Scissors);
    }
}
