//! Running games on top of the engine: agent-vs-agent games, human input
//! handling, and multi-game series with result tallies.

mod game;
pub mod series;

pub use game::{apply_user_move, play_game, GameRecord};
pub use series::{run_series, SeriesConfig, SeriesSummary};
