//! Core Connect Four rules: board representation, player types, legality and
//! terminal-state detection.

mod board;
mod outcome;
mod player;

#[cfg(test)]
pub(crate) use board::DRAWN_GAME;
pub use board::{Board, LegalColumns, CENTRE_COL, COLS, ROWS, WINDOW};
pub use outcome::GameOutcome;
pub use player::{Cell, Player};
