//! Move selection: the minimax search engine, its heuristic, and the agents
//! that drive games.

mod agent;
pub mod heuristic;
mod minimax;
mod random;
pub mod search;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::{MinimaxAgent, MinimaxConfig};
pub use random::RandomAgent;
pub use search::{choose_move, Minimax, NodeMove, NodeState, SearchNode, SearchOutcome, SearchStats};
