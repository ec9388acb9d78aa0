use crate::game::{Board, Cell, GameOutcome, Player, CENTRE_COL, ROWS, WINDOW};

/// Four of the perspective player's pieces in one window. Large enough to
/// outweigh every other term on the board combined.
pub const FOUR_IN_A_ROW_SCORE: i64 = 10_000_000_000;
pub const THREE_IN_A_ROW_SCORE: i64 = 5;
pub const TWO_IN_A_ROW_SCORE: i64 = 2;
pub const CENTRE_PIECE_WORTH: i64 = 3;

pub const OPPONENT_FOUR_IN_A_ROW_SCORE: i64 = -FOUR_IN_A_ROW_SCORE;
pub const OPPONENT_THREE_IN_A_ROW_SCORE: i64 = -4;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic {
    fn evaluate(&self, board: &Board, perspective: Player) -> i64;
}

/// Default heuristic: scores every 4-cell window plus a centre-column bonus.
///
/// Windows overlap and the same pieces are counted by several of them (a
/// four also shows up as threes and twos in neighbouring windows). Positions
/// with several overlapping near-wins therefore score higher, which is how
/// forks are recognised.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowHeuristic;

impl WindowHeuristic {
    fn score_window(window: &[Cell; WINDOW], own_cell: Cell, opp_cell: Cell) -> i64 {
        let own = window.iter().filter(|&&c| c == own_cell).count();
        let opp = window.iter().filter(|&&c| c == opp_cell).count();
        let empty = WINDOW - own - opp;

        let mut score = 0;
        if own == 4 {
            score += FOUR_IN_A_ROW_SCORE;
        } else if own == 3 && empty == 1 {
            score += THREE_IN_A_ROW_SCORE;
        } else if own == 2 && empty == 2 {
            score += TWO_IN_A_ROW_SCORE;
        }

        // Opponent twos are deliberately not scored.
        if opp == 4 {
            score += OPPONENT_FOUR_IN_A_ROW_SCORE;
        } else if opp == 3 && empty == 1 {
            score += OPPONENT_THREE_IN_A_ROW_SCORE;
        }

        score
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board, perspective: Player) -> i64 {
        if board.winner() == Some(GameOutcome::Draw) {
            return 0;
        }

        let own_cell = perspective.to_cell();
        let opp_cell = perspective.other().to_cell();

        let centre_pieces = (0..ROWS)
            .filter(|&row| board.get(row, CENTRE_COL) == own_cell)
            .count() as i64;
        let mut score = CENTRE_PIECE_WORTH * centre_pieces;

        for window in board.windows() {
            score += Self::score_window(&window, own_cell, opp_cell);
        }

        score
    }
}
