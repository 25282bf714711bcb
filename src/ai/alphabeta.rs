use crate::game::{Board, Player};

use super::montecarlo::MonteCarloEvaluator;

/// Magnitude of a full leaf evaluation; also the rollout count per leaf.
pub const TOP_VALUE: i32 = 200;

/// Value of a position already decided by four in a row. Kept outside the
/// `[-TOP_VALUE, TOP_VALUE]` leaf range so a genuine win always outranks
/// any heuristic estimate.
pub const WIN_VALUE: i32 = 2 * TOP_VALUE;

/// Trait for scoring an undecided board position from a player's
/// perspective.
pub trait Evaluator {
    fn evaluate(&mut self, board: &Board, player: Player) -> i32;
}

/// Result of a root search.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// The chosen column, or `None` when the position is already decided
    /// or has no move to make.
    pub column: Option<usize>,
    /// The search value of the position for the calling player.
    pub value: i32,
    /// The explored value of every immediate candidate, in exploration
    /// order, for diagnostic display.
    pub root_scores: Vec<(usize, i32)>,
}

/// Fixed-depth alpha-beta search with pluggable leaf evaluation.
///
/// Values are always oriented to the calling player, with an explicit
/// maximizing flag flipping at each ply; the player who places a piece at
/// a ply is inferred from the flag. The search mutates the caller's board
/// through apply/undo pairs and restores it exactly before returning.
pub struct AlphaBetaSearch {
    evaluator: Box<dyn Evaluator>,
}

impl AlphaBetaSearch {
    pub fn new() -> Self {
        AlphaBetaSearch {
            evaluator: Box::new(MonteCarloEvaluator::new()),
        }
    }

    pub fn with_evaluator(evaluator: Box<dyn Evaluator>) -> Self {
        AlphaBetaSearch { evaluator }
    }

    /// Search `depth` plies ahead and pick a column for `player`.
    ///
    /// Candidates are explored in the board's move order (highest column
    /// first) and only a strictly better value replaces the incumbent, so
    /// ties keep the highest tied column.
    pub fn choose_move(&mut self, board: &mut Board, depth: usize, player: Player) -> SearchResult {
        if let Some(winner) = board.winner() {
            let value = if winner == player { WIN_VALUE } else { -WIN_VALUE };
            return SearchResult {
                column: None,
                value,
                root_scores: Vec::new(),
            };
        }
        if depth == 0 || board.is_full() {
            return SearchResult {
                column: None,
                value: self.evaluator.evaluate(board, player),
                root_scores: Vec::new(),
            };
        }

        let mut alpha = i32::MIN;
        let mut best_value = i32::MIN;
        let mut best_move = None;
        let mut root_scores = Vec::new();

        // beta stays unbounded at the root, so no cutoff fires here and
        // every candidate gets an explored value
        for col in board.available_moves() {
            board
                .apply_move(player, col)
                .expect("available move must be playable");
            let value = self.search(board, depth - 1, alpha, i32::MAX, player, false);
            board
                .undo_last_move()
                .expect("a just-applied move must be undoable");

            root_scores.push((col, value));
            if value > best_value {
                best_value = value;
                best_move = Some(col);
            }
            alpha = alpha.max(value);
        }

        SearchResult {
            column: best_move,
            value: best_value,
            root_scores,
        }
    }

    fn search(
        &mut self,
        board: &mut Board,
        depth: usize,
        mut alpha: i32,
        mut beta: i32,
        player: Player,
        maximizing: bool,
    ) -> i32 {
        // terminal check comes first: a decided board cannot be searched
        // further regardless of remaining depth
        if let Some(winner) = board.winner() {
            return if winner == player { WIN_VALUE } else { -WIN_VALUE };
        }
        if depth == 0 || board.is_full() {
            return self.evaluator.evaluate(board, player);
        }

        let mover = if maximizing { player } else { player.other() };
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in board.available_moves() {
            board
                .apply_move(mover, col)
                .expect("available move must be playable");
            let value = self.search(board, depth - 1, alpha, beta, player, !maximizing);
            board
                .undo_last_move()
                .expect("a just-applied move must be undoable");

            if maximizing {
                if value > best {
                    best = value;
                }
                alpha = alpha.max(value);
                if alpha >= beta {
                    break;
                }
            } else {
                if value < best {
                    best = value;
                }
                beta = beta.min(value);
                if beta <= alpha {
                    break;
                }
            }
        }

        best
    }
}

impl Default for AlphaBetaSearch {
    fn default() -> Self {
        Self::new()
    }
}
