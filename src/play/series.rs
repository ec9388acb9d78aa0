use crate::ai::Agent;
use crate::error::PlayError;
use crate::game::{GameOutcome, Player};

use super::game::{play_game, GameRecord};

/// Settings for a series of minimax-vs-opponent games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SeriesConfig {
    pub games: usize,
    /// Whether the opponent (Red) makes the first move of each game.
    pub random_starts: bool,
    /// Pause before each random move.
    pub random_delay_ms: u64,
}

impl Default for SeriesConfig {
    fn default() -> Self {
        SeriesConfig {
            games: 10,
            random_starts: false,
            random_delay_ms: 500,
        }
    }
}

/// Tally of a finished series. The minimax agent always plays Yellow.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
pub struct SeriesSummary {
    pub minimax: String,
    pub opponent: String,
    pub games: usize,
    pub minimax_wins: usize,
    pub opponent_wins: usize,
    pub draws: usize,
    pub total_moves: usize,
}

impl SeriesSummary {
    pub fn record(&mut self, record: &GameRecord) {
        self.games += 1;
        self.total_moves += record.length();
        match record.outcome {
            GameOutcome::Winner(Player::Yellow) => self.minimax_wins += 1,
            GameOutcome::Winner(Player::Red) => self.opponent_wins += 1,
            GameOutcome::Draw => self.draws += 1,
        }
    }

    /// Share of games won by the minimax agent.
    pub fn minimax_win_rate(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.minimax_wins as f32 / self.games as f32
    }

    pub fn average_game_length(&self) -> f32 {
        if self.games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.games as f32
    }
}

/// Play `config.games` games of `minimax` (Yellow) against `opponent` (Red).
pub fn run_series(
    config: &SeriesConfig,
    minimax: &mut dyn Agent,
    opponent: &mut dyn Agent,
) -> Result<SeriesSummary, PlayError> {
    let starting_side = if config.random_starts {
        Player::Red
    } else {
        Player::Yellow
    };
    let mut summary = SeriesSummary {
        minimax: minimax.name().to_string(),
        opponent: opponent.name().to_string(),
        ..SeriesSummary::default()
    };

    log::info!(
        "Starting series of {} games: {} (Yellow) vs {} (Red), {} moves first",
        config.games,
        summary.minimax,
        summary.opponent,
        starting_side
    );

    for game in 1..=config.games {
        let record = play_game(opponent, minimax, starting_side)?;
        match record.outcome {
            GameOutcome::Winner(Player::Yellow) => {
                log::info!("Game {game} winner: {}", summary.minimax)
            }
            GameOutcome::Winner(Player::Red) => {
                log::info!("Game {game} winner: {}", summary.opponent)
            }
            GameOutcome::Draw => log::info!("Game {game} ended in a draw"),
        }
        summary.record(&record);
    }

    log::info!(
        "{} won {} games, {} won {} games, {} draws (avg length {:.1})",
        summary.minimax,
        summary.minimax_wins,
        summary.opponent,
        summary.opponent_wins,
        summary.draws,
        summary.average_game_length()
    );

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::{MinimaxAgent, RandomAgent};
    use crate::game::Board;

    fn record(outcome: GameOutcome, length: usize) -> GameRecord {
        GameRecord {
            starting_side: Player::Red,
            moves: vec![0; length],
            outcome,
            final_board: Board::default(),
        }
    }

    #[test]
    fn test_summary_tallies_outcomes() {
        let mut summary = SeriesSummary::default();
        summary.record(&record(GameOutcome::Winner(Player::Yellow), 10));
        summary.record(&record(GameOutcome::Winner(Player::Yellow), 20));
        summary.record(&record(GameOutcome::Winner(Player::Red), 9));
        summary.record(&record(GameOutcome::Draw, 42));

        assert_eq!(summary.games, 4);
        assert_eq!(summary.minimax_wins, 2);
        assert_eq!(summary.opponent_wins, 1);
        assert_eq!(summary.draws, 1);
        assert!((summary.minimax_win_rate() - 0.5).abs() < 1e-6);
        assert!((summary.average_game_length() - 20.25).abs() < 1e-6);
    }

    #[test]
    fn test_empty_summary_rates_are_zero() {
        let summary = SeriesSummary::default();
        assert_eq!(summary.minimax_win_rate(), 0.0);
        assert_eq!(summary.average_game_length(), 0.0);
    }

    #[test]
    fn test_run_series_plays_every_game() {
        let config = SeriesConfig {
            games: 4,
            random_starts: true,
            random_delay_ms: 0,
        };
        let mut minimax = MinimaxAgent::new(3);
        let mut random = RandomAgent::seeded(9);
        let summary = run_series(&config, &mut minimax, &mut random).unwrap();

        assert_eq!(summary.games, 4);
        assert_eq!(
            summary.minimax_wins + summary.opponent_wins + summary.draws,
            4
        );
        assert_eq!(summary.minimax, "Minimax (depth 3)");
        assert_eq!(summary.opponent, "Random");
    }

    #[test]
    fn test_summary_serializes_to_json() {
        let summary = SeriesSummary {
            minimax: "Minimax (depth 4)".to_string(),
            opponent: "Random".to_string(),
            games: 2,
            minimax_wins: 2,
            ..SeriesSummary::default()
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["minimax_wins"], 2);
        assert_eq!(json["opponent"], "Random");
    }
}
