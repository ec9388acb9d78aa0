use crate::error::SearchError;
use crate::game::Board;

/// Anything that can pick a column for the side to move.
pub trait Agent {
    /// Select a column for the side to move on `board`. The column must
    /// satisfy [`Board::is_legal_move`].
    fn select_action(&mut self, board: &Board) -> Result<usize, SearchError>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
