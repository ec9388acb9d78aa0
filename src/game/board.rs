use std::fmt;

use smallvec::SmallVec;

use super::{Cell, GameOutcome, Player};
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;
pub const CENTRE_COL: usize = COLS / 2;

/// Length of a winning line.
pub const WINDOW: usize = 4;

/// Ascending list of playable columns.
pub type LegalColumns = SmallVec<[usize; COLS]>;

type WindowCoords = [(usize, usize); WINDOW];

/// A complete game that fills the board without anyone connecting four.
#[cfg(test)]
pub(crate) const DRAWN_GAME: [usize; ROWS * COLS] = [
    0, 0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 1, 4, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3, 3, 4, 4, 4, 4, 4, 5,
    5, 5, 5, 5, 6, 6, 6, 6, 6, 6, 5,
];

/// A Connect Four position: the grid, whose turn it is and how many plies
/// have been played. Row 0 is the bottom row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    side_to_move: Player,
    plies_played: usize,
    legal_columns: LegalColumns,
}

impl Board {
    /// Create an empty board with `starting_side` to move.
    pub fn new(starting_side: Player) -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            side_to_move: starting_side,
            plies_played: 0,
            legal_columns: (0..COLS).collect(),
        }
    }

    /// Replay `moves` on an empty board, stopping at the first illegal one.
    pub fn from_moves(starting_side: Player, moves: &[usize]) -> Result<Self, MoveError> {
        let mut board = Board::new(starting_side);
        for &col in moves {
            board.apply_move(col)?;
        }
        Ok(board)
    }

    /// Get the cell at a specific position (row 0 is the bottom).
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn side_to_move(&self) -> Player {
        self.side_to_move
    }

    pub fn plies_played(&self) -> usize {
        self.plies_played
    }

    /// Read-only view of the grid, row-major, row 0 at the bottom.
    pub fn board_snapshot(&self) -> &[[Cell; COLS]; ROWS] {
        &self.cells
    }

    /// True iff `column` is on the board and its top cell is empty.
    pub fn is_legal_move(&self, column: usize) -> bool {
        column < COLS && self.cells[ROWS - 1][column] == Cell::Empty
    }

    /// Playable columns in ascending order.
    pub fn legal_moves(&self) -> &[usize] {
        &self.legal_columns
    }

    pub fn is_full(&self) -> bool {
        self.plies_played == ROWS * COLS
    }

    /// Drop the side to move's piece into `column`, returning the row where
    /// it landed. The board is untouched on error.
    pub fn apply_move(&mut self, column: usize) -> Result<usize, MoveError> {
        if column >= COLS {
            return Err(MoveError::InvalidColumn(column));
        }
        let row = (0..ROWS)
            .find(|&row| self.cells[row][column] == Cell::Empty)
            .ok_or(MoveError::ColumnFull(column))?;

        self.cells[row][column] = self.side_to_move.to_cell();
        self.side_to_move = self.side_to_move.other();
        self.plies_played += 1;
        self.refresh_legal_columns();
        Ok(row)
    }

    /// Apply `column` to an independent copy, leaving `self` untouched.
    pub fn apply_move_to_copy(&self, column: usize) -> Result<Board, MoveError> {
        let mut next = self.clone();
        next.apply_move(column)?;
        Ok(next)
    }

    /// Current result, or `None` while the game is still going.
    ///
    /// The whole grid is scanned, so the answer does not depend on having
    /// checked after every move. A win outranks a full board. If both sides
    /// somehow own a line, the side that moved last is reported.
    pub fn winner(&self) -> Option<GameOutcome> {
        let last_mover = self.side_to_move.other();
        for player in [last_mover, self.side_to_move] {
            if self.has_four(player) {
                return Some(GameOutcome::Winner(player));
            }
        }
        if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }

    /// Check if the game is over
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some()
    }

    /// Every 4-cell line of the board: horizontal, vertical, then both
    /// diagonals. Overlapping windows are all yielded.
    pub fn windows(&self) -> impl Iterator<Item = [Cell; WINDOW]> + '_ {
        window_coords().map(move |coords| coords.map(|(row, col)| self.cells[row][col]))
    }

    fn has_four(&self, player: Player) -> bool {
        let cell = player.to_cell();
        self.windows().any(|window| window.iter().all(|&c| c == cell))
    }

    fn refresh_legal_columns(&mut self) {
        let legal = (0..COLS).filter(|&col| self.is_legal_move(col)).collect();
        self.legal_columns = legal;
    }
}

fn window_coords() -> impl Iterator<Item = WindowCoords> {
    let horizontal = (0..ROWS).flat_map(|row| {
        (0..=COLS - WINDOW).map(move |col| -> WindowCoords {
            std::array::from_fn(|i| (row, col + i))
        })
    });
    let vertical = (0..=ROWS - WINDOW).flat_map(|row| {
        (0..COLS).map(move |col| -> WindowCoords { std::array::from_fn(|i| (row + i, col)) })
    });
    // "/" going up and to the right
    let diagonal_up = (0..=ROWS - WINDOW).flat_map(|row| {
        (0..=COLS - WINDOW).map(move |col| -> WindowCoords {
            std::array::from_fn(|i| (row + i, col + i))
        })
    });
    // "\" going down and to the right
    let diagonal_down = (WINDOW - 1..ROWS).flat_map(|row| {
        (0..=COLS - WINDOW).map(move |col| -> WindowCoords {
            std::array::from_fn(|i| (row - i, col + i))
        })
    });

    horizontal
        .chain(vertical)
        .chain(diagonal_up)
        .chain(diagonal_down)
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Player::Red)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            let line: Vec<String> = self.cells[row]
                .iter()
                .map(|cell| cell.symbol().to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        let labels: Vec<String> = (1..=COLS).map(|c| c.to_string()).collect();
        write!(f, "{}", labels.join(" "))
    }
}
