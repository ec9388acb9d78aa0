//! # Minimax Connect Four
//!
//! A Connect Four engine with a computer player that searches the game tree
//! with minimax and alpha-beta pruning.
//!
//! ## Modules
//!
//! - [`game`] — Board engine: grid, legality, move application, win/draw detection
//! - [`ai`] — Search engine (tree, pruning, heuristic) and move-selecting agents
//! - [`play`] — Agent-vs-agent games, human input handling, game series
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types
//! - [`logging`] — Logger setup for binaries

pub mod ai;
pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod play;
