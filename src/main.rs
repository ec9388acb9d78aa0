use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use minimax_connect_four::ai::{Agent, MinimaxAgent, RandomAgent};
use minimax_connect_four::config::AppConfig;
use minimax_connect_four::game::{Board, GameOutcome, Player, COLS};
use minimax_connect_four::logging::setup_logging;
use minimax_connect_four::play::{apply_user_move, run_series};

/// Play Connect Four against a minimax AI.
#[derive(Parser)]
#[command(name = "connect-four", about = "Play Connect Four against a minimax AI")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "connect_four.toml")]
    config: PathBuf,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Play as Red against the minimax AI (Yellow)
    Play {
        /// Override search depth
        #[arg(long)]
        depth: Option<usize>,

        /// Let Red (you) move first
        #[arg(long)]
        red_starts: bool,
    },
    /// Watch the minimax AI (Yellow) play a random AI (Red)
    Series {
        /// Override number of games
        #[arg(long)]
        games: Option<usize>,

        /// Override search depth
        #[arg(long)]
        depth: Option<usize>,

        /// Let the random AI move first
        #[arg(long)]
        random_starts: bool,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
    /// Two humans sharing one terminal
    TwoPlayer {
        /// Let Red move first
        #[arg(long)]
        red_starts: bool,
    },
    /// Print the default configuration as TOML
    PrintConfig,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = setup_logging(&cli.log_level).context("starting logger")?;

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    match cli.command {
        Command::Play { depth, red_starts } => {
            if let Some(depth) = depth {
                config.search.depth = depth;
            }
            config.validate().context("invalid options")?;
            play_vs_ai(&config, starting_side(red_starts))
        }
        Command::Series {
            games,
            depth,
            random_starts,
            json,
        } => {
            if let Some(games) = games {
                config.series.games = games;
            }
            if let Some(depth) = depth {
                config.search.depth = depth;
            }
            config.series.random_starts |= random_starts;
            config.validate().context("invalid options")?;
            series(&config, json)
        }
        Command::TwoPlayer { red_starts } => play_two_player(starting_side(red_starts)),
        Command::PrintConfig => {
            print!("{}", AppConfig::default_toml().context("serializing defaults")?);
            Ok(())
        }
    }
}

fn starting_side(red_starts: bool) -> Player {
    if red_starts {
        Player::Red
    } else {
        Player::Yellow
    }
}

fn play_vs_ai(config: &AppConfig, starting_side: Player) -> Result<()> {
    let mut ai = MinimaxAgent::from_config(&config.search);
    let mut board = Board::new(starting_side);
    let mut lines = io::stdin().lock().lines();
    let mut previous_move = None;

    println!("You are Red (R). {} plays Yellow (Y).", ai.name());
    while board.winner().is_none() {
        println!("\n{board}\n");
        match board.side_to_move() {
            Player::Red => match read_column(&mut lines, Player::Red)? {
                Some(col) => previous_move = human_turn(&mut board, previous_move, col),
                None => {
                    println!("Game abandoned.");
                    return Ok(());
                }
            },
            Player::Yellow => {
                let col = ai.select_action(&board).context("AI failed to move")?;
                board.apply_move(col).context("AI chose an illegal move")?;
                println!("{} plays column {}", ai.name(), col + 1);
                previous_move = Some(col);
            }
        }
    }

    println!("\n{board}\n");
    report_outcome(&board);
    Ok(())
}

fn play_two_player(starting_side: Player) -> Result<()> {
    let mut board = Board::new(starting_side);
    let mut lines = io::stdin().lock().lines();
    let mut previous_move = None;

    while board.winner().is_none() {
        println!("\n{board}\n");
        match read_column(&mut lines, board.side_to_move())? {
            Some(col) => previous_move = human_turn(&mut board, previous_move, col),
            None => {
                println!("Game abandoned.");
                return Ok(());
            }
        }
    }

    println!("\n{board}\n");
    report_outcome(&board);
    Ok(())
}

fn series(config: &AppConfig, json: bool) -> Result<()> {
    let mut minimax = MinimaxAgent::from_config(&config.search);
    let mut random =
        RandomAgent::new().with_delay(Duration::from_millis(config.series.random_delay_ms));

    let summary = run_series(&config.series, &mut minimax, &mut random)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{} won: {} games.", summary.minimax, summary.minimax_wins);
        println!("{} won: {} games.", summary.opponent, summary.opponent_wins);
        println!("{} games ended in a draw.", summary.draws);
    }
    Ok(())
}

/// Apply a human's column, telling them when it was refused.
fn human_turn(board: &mut Board, previous_move: Option<usize>, col: usize) -> Option<usize> {
    let plies = board.plies_played();
    let result = apply_user_move(board, previous_move, col);
    if board.plies_played() == plies {
        println!("Column {} is not available, pick another.", col + 1);
    }
    result
}

/// Prompt until the player types a column number, or `q` to quit. Returns
/// the zero-based column, which may still be full.
fn read_column(
    lines: &mut impl Iterator<Item = io::Result<String>>,
    player: Player,
) -> Result<Option<usize>> {
    loop {
        print!("{player}, choose a column (1-{COLS}, q to quit): ");
        io::stdout().flush().context("flushing stdout")?;

        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line.context("reading input")?;
        let input = line.trim();

        if input.eq_ignore_ascii_case("q") {
            return Ok(None);
        }
        match input.parse::<usize>() {
            Ok(n) if (1..=COLS).contains(&n) => return Ok(Some(n - 1)),
            _ => println!("'{input}' is not a column between 1 and {COLS}."),
        }
    }
}

fn report_outcome(board: &Board) {
    match board.winner() {
        Some(GameOutcome::Winner(player)) => println!("{player} wins!"),
        Some(GameOutcome::Draw) => println!("The game is a draw."),
        None => {}
    }
}
