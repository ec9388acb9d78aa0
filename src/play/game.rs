use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{Board, GameOutcome, Player};

/// A finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub starting_side: Player,
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
    pub final_board: Board,
}

impl GameRecord {
    pub fn length(&self) -> usize {
        self.moves.len()
    }
}

/// Play one game between two agents until it is won or drawn.
pub fn play_game(
    red: &mut dyn Agent,
    yellow: &mut dyn Agent,
    starting_side: Player,
) -> Result<GameRecord, PlayError> {
    let mut board = Board::new(starting_side);
    let mut moves = Vec::new();

    let outcome = loop {
        if let Some(outcome) = board.winner() {
            break outcome;
        }

        let agent: &mut dyn Agent = match board.side_to_move() {
            Player::Red => &mut *red,
            Player::Yellow => &mut *yellow,
        };
        let column = agent.select_action(&board)?;
        if board.apply_move(column).is_err() {
            return Err(PlayError::IllegalAction {
                agent: agent.name().to_string(),
                column,
                legal: board.legal_moves().to_vec(),
            });
        }
        log::trace!("{} played column {}", board.side_to_move().other(), column);
        moves.push(column);
    };

    Ok(GameRecord {
        starting_side,
        moves,
        outcome,
        final_board: board,
    })
}

/// Apply a column picked by a human. On an illegal pick the board is left
/// as it was and `previous_move` is returned, so the caller can ask again.
pub fn apply_user_move(
    board: &mut Board,
    previous_move: Option<usize>,
    column: usize,
) -> Option<usize> {
    match board.apply_move(column) {
        Ok(_) => Some(column),
        Err(e) => {
            log::debug!("rejected move: {e}");
            previous_move
        }
    }
}
