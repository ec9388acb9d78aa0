use std::time::Duration;

use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::error::SearchError;
use crate::game::Board;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
    delay: Duration,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
            delay: Duration::ZERO,
        }
    }

    /// Deterministic agent for reproducible games.
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
            delay: Duration::ZERO,
        }
    }

    /// Wait `delay` before each move.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_action(&mut self, board: &Board) -> Result<usize, SearchError> {
        let actions = board.legal_moves();
        if actions.is_empty() || board.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        let idx = self.rng.random_range(0..actions.len());
        Ok(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Player, DRAWN_GAME};

    #[test]
    fn test_random_agent_selects_legal_action() {
        let mut agent = RandomAgent::new();
        let board = Board::from_moves(Player::Red, &[2, 2, 2, 2, 2, 2]).unwrap();

        for _ in 0..100 {
            let action = agent.select_action(&board).unwrap();
            assert!(board.is_legal_move(action), "Action {} is not legal", action);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::seeded(1);
        let mut agent2 = RandomAgent::seeded(2);
        let mut board = Board::default();

        let mut turn = 0;
        while board.winner().is_none() {
            let action = if turn % 2 == 0 {
                agent1.select_action(&board).unwrap()
            } else {
                agent2.select_action(&board).unwrap()
            };
            board.apply_move(action).unwrap();
            turn += 1;
        }

        assert!(board.is_terminal());
        assert_eq!(board.plies_played(), turn);
    }

    #[test]
    fn test_seeded_agents_repeat() {
        let board = Board::default();
        let mut a = RandomAgent::seeded(42);
        let mut b = RandomAgent::seeded(42);
        let picks_a: Vec<usize> = (0..20).map(|_| a.select_action(&board).unwrap()).collect();
        let picks_b: Vec<usize> = (0..20).map(|_| b.select_action(&board).unwrap()).collect();
        assert_eq!(picks_a, picks_b);
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_moves(Player::Red, &DRAWN_GAME).unwrap();
        let mut agent = RandomAgent::seeded(0);
        assert_eq!(agent.select_action(&board), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
