use std::fmt;

use super::Player;

/// Final result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

impl GameOutcome {
    /// The winning player, or `None` for a draw.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(p) => Some(p),
            GameOutcome::Draw => None,
        }
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Winner(p) => write!(f, "{p} wins"),
            GameOutcome::Draw => f.write_str("Draw"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_winner() {
        assert_eq!(GameOutcome::Winner(Player::Red).winner(), Some(Player::Red));
        assert_eq!(GameOutcome::Draw.winner(), None);
    }

    #[test]
    fn test_outcome_display() {
        assert_eq!(GameOutcome::Winner(Player::Yellow).to_string(), "Yellow wins");
        assert_eq!(GameOutcome::Draw.to_string(), "Draw");
    }
}
