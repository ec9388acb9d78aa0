//! Minimax search with alpha-beta pruning over an owned tree of positions.
//!
//! Every node owns its own copy of the board, so sibling branches never
//! share state. The tree is built fresh for each call and dropped when the
//! call returns.

use crate::error::SearchError;
use crate::game::{Board, Player};

use super::heuristic::{Heuristic, WindowHeuristic};

/// How a node was reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeMove {
    Root,
    Column(usize),
}

impl NodeMove {
    pub fn column(self) -> Option<usize> {
        match self {
            NodeMove::Root => None,
            NodeMove::Column(col) => Some(col),
        }
    }
}

/// Lifecycle of a node within one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Not reached by the search yet.
    Unvisited,
    /// Scored by the heuristic (depth limit or finished game).
    Leaf,
    /// Scored from its children.
    Internal,
}

/// One position in the search tree, scored from the perspective player's
/// point of view.
#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    move_that_led_here: NodeMove,
    perspective: Player,
    score: Option<i64>,
    children: Vec<SearchNode>,
}

impl SearchNode {
    fn root(board: Board, perspective: Player) -> Self {
        SearchNode {
            board,
            move_that_led_here: NodeMove::Root,
            perspective,
            score: None,
            children: Vec::new(),
        }
    }

    fn child(board: Board, column: usize, perspective: Player) -> Self {
        SearchNode {
            board,
            move_that_led_here: NodeMove::Column(column),
            perspective,
            score: None,
            children: Vec::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn move_that_led_here(&self) -> NodeMove {
        self.move_that_led_here
    }

    pub fn perspective(&self) -> Player {
        self.perspective
    }

    pub fn score(&self) -> Option<i64> {
        self.score
    }

    /// Explored children in ascending column order.
    pub fn children(&self) -> &[SearchNode] {
        &self.children
    }

    pub fn state(&self) -> NodeState {
        match (self.score, self.children.is_empty()) {
            (None, _) => NodeState::Unvisited,
            (Some(_), true) => NodeState::Leaf,
            (Some(_), false) => NodeState::Internal,
        }
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn subtree_size(&self) -> usize {
        1 + self.children.iter().map(SearchNode::subtree_size).sum::<usize>()
    }

    /// Column of the first child whose score equals this node's score.
    fn best_column(&self) -> Option<usize> {
        let score = self.score?;
        self.children
            .iter()
            .find(|child| child.score == Some(score))
            .and_then(|child| child.move_that_led_here.column())
    }
}

/// Node counters for one search call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes created, root included.
    pub nodes: usize,
    /// Nodes scored by the heuristic.
    pub leaves: usize,
    /// Times the remaining columns of a node were skipped.
    pub cutoffs: usize,
}

/// Result of a search: the chosen column and the root's score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOutcome {
    pub column: usize,
    pub score: i64,
    pub stats: SearchStats,
}

/// Depth-limited minimax search.
pub struct Minimax {
    depth: usize,
    pruning: bool,
    heuristic: Box<dyn Heuristic>,
}

impl Minimax {
    pub fn new(depth: usize) -> Self {
        Minimax {
            depth,
            pruning: true,
            heuristic: Box::new(WindowHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        Minimax {
            depth,
            pruning: true,
            heuristic,
        }
    }

    /// Disable alpha-beta cutoffs and search the full tree. Picks the same
    /// column as the pruned search, only slower.
    pub fn without_pruning(mut self) -> Self {
        self.pruning = false;
        self
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Pick a column for the side to move on `board`.
    pub fn search(&self, board: &Board) -> Result<SearchOutcome, SearchError> {
        self.search_as(board, board.side_to_move())
    }

    /// Pick a column for `perspective`, who must be the side to move.
    pub fn search_as(
        &self,
        board: &Board,
        perspective: Player,
    ) -> Result<SearchOutcome, SearchError> {
        let (root, stats) = self.search_tree(board, perspective)?;
        let score = root.score.ok_or(SearchError::NoLegalMove)?;
        let column = root.best_column().ok_or(SearchError::NoLegalMove)?;

        if log::log_enabled!(log::Level::Trace) {
            let scores: Vec<(Option<usize>, Option<i64>)> = root
                .children
                .iter()
                .map(|c| (c.move_that_led_here.column(), c.score))
                .collect();
            log::trace!("root children (column, score): {scores:?}");
        }
        log::debug!(
            "minimax depth {} for {}: column {} score {} ({} nodes, {} leaves, {} cutoffs)",
            self.depth,
            perspective,
            column,
            score,
            stats.nodes,
            stats.leaves,
            stats.cutoffs
        );

        Ok(SearchOutcome {
            column,
            score,
            stats,
        })
    }

    /// Build and score the search tree rooted at a copy of `board`.
    pub fn search_tree(
        &self,
        board: &Board,
        perspective: Player,
    ) -> Result<(SearchNode, SearchStats), SearchError> {
        if self.depth == 0 {
            return Err(SearchError::ZeroDepth);
        }
        if perspective != board.side_to_move() {
            return Err(SearchError::WrongPerspective {
                perspective,
                to_move: board.side_to_move(),
            });
        }
        if board.legal_moves().is_empty() || board.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }

        let mut root = SearchNode::root(board.clone(), perspective);
        let mut stats = SearchStats {
            nodes: 1,
            ..SearchStats::default()
        };
        self.expand(&mut root, self.depth, i64::MIN, i64::MAX, true, &mut stats);
        Ok((root, stats))
    }

    /// Score `node`, exploring up to `depth` more plies. `i64::MIN` and
    /// `i64::MAX` stand in for -inf and +inf; no board evaluates to them.
    fn expand(
        &self,
        node: &mut SearchNode,
        depth: usize,
        mut alpha: i64,
        mut beta: i64,
        maximizing: bool,
        stats: &mut SearchStats,
    ) -> i64 {
        if depth == 0 || node.board.is_terminal() {
            let score = self.heuristic.evaluate(&node.board, node.perspective);
            node.score = Some(score);
            stats.leaves += 1;
            return score;
        }

        let mut best = if maximizing { i64::MIN } else { i64::MAX };

        for &col in node.board.legal_moves() {
            let next = match node.board.apply_move_to_copy(col) {
                Ok(next) => next,
                Err(e) => unreachable!("legal column {col} was rejected: {e}"),
            };
            let mut child = SearchNode::child(next, col, node.perspective);
            stats.nodes += 1;

            let child_score = self.expand(&mut child, depth - 1, alpha, beta, !maximizing, stats);
            node.children.push(child);

            if maximizing {
                best = best.max(child_score);
                alpha = alpha.max(best);
            } else {
                best = best.min(child_score);
                beta = beta.min(best);
            }

            if self.pruning && alpha >= beta {
                stats.cutoffs += 1;
                break;
            }
        }

        node.score = Some(best);
        best
    }
}

/// Choose a column for `perspective` on `board` searching `depth` plies.
pub fn choose_move(board: &Board, perspective: Player, depth: usize) -> Result<usize, SearchError> {
    Minimax::new(depth)
        .search_as(board, perspective)
        .map(|outcome| outcome.column)
}
