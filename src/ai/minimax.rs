use std::time::Duration;

use crate::error::SearchError;
use crate::game::Board;

use super::agent::Agent;
use super::search::Minimax;

/// Search settings for the minimax player.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MinimaxConfig {
    /// Plies searched per move.
    pub depth: usize,
    /// Pause before moving, applied only when `depth <= delay_max_depth`.
    pub think_delay_ms: u64,
    pub delay_max_depth: usize,
}

impl Default for MinimaxConfig {
    fn default() -> Self {
        MinimaxConfig {
            depth: 5,
            think_delay_ms: 500,
            delay_max_depth: 3,
        }
    }
}

/// Agent that plays the column chosen by a depth-limited minimax search.
pub struct MinimaxAgent {
    search: Minimax,
    think_delay: Duration,
    name: String,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            search: Minimax::new(depth),
            think_delay: Duration::ZERO,
            name: format!("Minimax (depth {depth})"),
        }
    }

    pub fn from_config(config: &MinimaxConfig) -> Self {
        let agent = Self::new(config.depth);
        if config.depth <= config.delay_max_depth {
            agent.with_think_delay(Duration::from_millis(config.think_delay_ms))
        } else {
            agent
        }
    }

    /// Pause before answering. Shallow searches return almost instantly,
    /// which makes their moves hard to follow on screen.
    pub fn with_think_delay(mut self, delay: Duration) -> Self {
        self.think_delay = delay;
        self
    }

    pub fn depth(&self) -> usize {
        self.search.depth()
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, SearchError> {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        self.search.search(board).map(|outcome| outcome.column)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, Player};

    fn play_out(red: &mut dyn Agent, yellow: &mut dyn Agent) -> Board {
        let mut board = Board::new(Player::Red);
        while board.winner().is_none() {
            let col = match board.side_to_move() {
                Player::Red => red.select_action(&board).unwrap(),
                Player::Yellow => yellow.select_action(&board).unwrap(),
            };
            board.apply_move(col).unwrap();
        }
        board
    }

    #[test]
    fn selects_legal_action() {
        let mut agent = MinimaxAgent::new(4);
        let board = Board::default();
        let action = agent.select_action(&board).unwrap();
        assert!(board.is_legal_move(action), "Action {action} is not legal");
    }

    #[test]
    fn prefers_win_over_block() {
        // Red on the bottom row 0..=2, Yellow on the row above. Both threaten
        // column 3 and Red moves first.
        let board = Board::from_moves(Player::Red, &[0, 0, 1, 1, 2, 2]).unwrap();
        let mut agent = MinimaxAgent::new(4);
        assert_eq!(agent.select_action(&board).unwrap(), 3);
    }

    #[test]
    fn full_game_vs_self_completes() {
        let mut agent1 = MinimaxAgent::new(3);
        let mut agent2 = MinimaxAgent::new(3);
        let board = play_out(&mut agent1, &mut agent2);
        assert!(board.winner().is_some(), "Game should complete");
    }

    #[test]
    fn beats_random_agent() {
        let games_per_color = 10;
        let mut minimax_wins = 0;

        for seed in 0..games_per_color {
            let mut minimax = MinimaxAgent::new(4);
            let mut random = RandomAgent::seeded(seed);
            let board = play_out(&mut minimax, &mut random);
            if board.winner() == Some(GameOutcome::Winner(Player::Red)) {
                minimax_wins += 1;
            }
        }

        for seed in 0..games_per_color {
            let mut random = RandomAgent::seeded(100 + seed);
            let mut minimax = MinimaxAgent::new(4);
            let board = play_out(&mut random, &mut minimax);
            if board.winner() == Some(GameOutcome::Winner(Player::Yellow)) {
                minimax_wins += 1;
            }
        }

        let total = games_per_color * 2;
        assert!(
            minimax_wins as f64 / total as f64 > 0.8,
            "Minimax should beat random >80% of the time, got {minimax_wins}/{total}"
        );
    }

    #[test]
    fn name_includes_depth() {
        let agent = MinimaxAgent::new(5);
        assert_eq!(agent.name(), "Minimax (depth 5)");
        assert_eq!(agent.depth(), 5);
    }

    #[test]
    fn from_config_delays_only_shallow_searches() {
        let shallow = MinimaxAgent::from_config(&MinimaxConfig {
            depth: 2,
            think_delay_ms: 250,
            delay_max_depth: 3,
        });
        assert_eq!(shallow.think_delay, Duration::from_millis(250));

        let deep = MinimaxAgent::from_config(&MinimaxConfig {
            depth: 5,
            ..MinimaxConfig::default()
        });
        assert_eq!(deep.think_delay, Duration::ZERO);
        assert_eq!(deep.depth(), 5);
    }

    #[test]
    fn finished_game_is_an_error() {
        let board = Board::from_moves(Player::Red, &[0, 0, 1, 1, 2, 2, 3]).unwrap();
        let mut agent = MinimaxAgent::new(2);
        assert_eq!(agent.select_action(&board), Err(SearchError::NoLegalMove));
    }
}
