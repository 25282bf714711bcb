//! Adversarial search and evaluation: alpha-beta tree search over the
//! mutable board, with Monte-Carlo rollouts as the leaf heuristic.

mod alphabeta;
mod montecarlo;

pub use alphabeta::{AlphaBetaSearch, Evaluator, SearchResult, TOP_VALUE, WIN_VALUE};
pub use montecarlo::{random_playout, MonteCarloEvaluator};
