use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::game::{Board, GameOutcome, Player};

use super::alphabeta::{Evaluator, TOP_VALUE};

/// Play the position out with uniformly random legal moves until it is
/// decided or the board fills.
///
/// Runs on a private clone; the caller's board is never touched. The
/// first mover is the opponent of whoever made the board's most recent
/// move, so play continues from whoever's turn it logically is (Player
/// One opens an untouched board). Each placement removes an empty cell,
/// so the playout ends within `cols * height` steps.
pub fn random_playout<R: Rng>(board: &Board, rng: &mut R) -> GameOutcome {
    let mut board = board.clone();
    let mut side = board.last_player().map_or(Player::One, Player::other);

    while !board.is_full() {
        let moves = board.available_moves();
        let col = moves[rng.random_range(0..moves.len())];
        board
            .apply_move(side, col)
            .expect("available move must be playable");
        if let Some(winner) = board.winner() {
            return GameOutcome::Winner(winner);
        }
        side = side.other();
    }
    GameOutcome::Draw
}

/// Leaf evaluator that scores a position by Monte-Carlo sampling.
///
/// Runs a fixed number of independent playouts from the position and
/// returns wins minus losses for the asked-about player, draws counting
/// for neither side. The estimate is unbiased but stochastic; repeated
/// evaluation of the same position can return different values within
/// `[-TOP_VALUE, TOP_VALUE]`.
pub struct MonteCarloEvaluator {
    rollouts: i32,
    rng: StdRng,
}

impl MonteCarloEvaluator {
    pub fn new() -> Self {
        MonteCarloEvaluator {
            rollouts: TOP_VALUE,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Evaluator with a fixed seed, for reproducible results in tests.
    pub fn with_seed(seed: u64) -> Self {
        MonteCarloEvaluator {
            rollouts: TOP_VALUE,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for MonteCarloEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator for MonteCarloEvaluator {
    fn evaluate(&mut self, board: &Board, player: Player) -> i32 {
        let mut wins = 0;
        let mut losses = 0;
        for _ in 0..self.rollouts {
            match random_playout(board, &mut self.rng) {
                GameOutcome::Winner(winner) if winner == player => wins += 1,
                GameOutcome::Winner(_) => losses += 1,
                GameOutcome::Draw => {}
            }
        }
        wins - losses
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn playout_does_not_mutate_the_input_board() {
        let mut board = Board::new(7, 6).unwrap();
        board.apply_move(Player::One, 3).unwrap();
        let before = board.clone();

        let mut rng = rng();
        for _ in 0..20 {
            random_playout(&board, &mut rng);
        }

        assert_eq!(board, before);
    }

    #[test]
    fn playout_always_terminates_with_an_outcome() {
        let board = Board::new(5, 4).unwrap();
        let mut rng = rng();

        for _ in 0..100 {
            match random_playout(&board, &mut rng) {
                GameOutcome::Winner(Player::One)
                | GameOutcome::Winner(Player::Two)
                | GameOutcome::Draw => {}
            }
        }
    }

    /// 4x4 board with a single empty cell at the top of column 3. X made
    /// the last move, so O is to move, and the only legal move completes
    /// O's vertical four in column 3.
    fn forced_win_position() -> Board {
        let mut board = Board::new(4, 4).unwrap();
        for player in [Player::One, Player::Two, Player::One, Player::Two] {
            board.apply_move(player, 0).unwrap();
        }
        for player in [Player::One, Player::One, Player::Two, Player::Two] {
            board.apply_move(player, 1).unwrap();
        }
        for player in [Player::Two, Player::Two, Player::Two] {
            board.apply_move(player, 3).unwrap();
        }
        for player in [Player::Two, Player::One, Player::One, Player::One] {
            board.apply_move(player, 2).unwrap();
        }
        board
    }

    #[test]
    fn playout_alternates_from_the_opponent_of_the_last_mover() {
        let board = forced_win_position();
        assert_eq!(board.winner(), None);
        assert_eq!(board.last_player(), Some(Player::One));

        let mut rng = rng();
        assert_eq!(
            random_playout(&board, &mut rng),
            GameOutcome::Winner(Player::Two)
        );
    }

    #[test]
    fn playout_reports_a_draw_when_the_board_fills() {
        // 4x2 board one cell short of XXOO / OOXX; the last placement
        // completes no line for either player
        let mut board = Board::new(4, 2).unwrap();
        for col in 0..2 {
            board.apply_move(Player::One, col).unwrap();
            board.apply_move(Player::Two, col).unwrap();
        }
        board.apply_move(Player::Two, 2).unwrap();
        board.apply_move(Player::One, 2).unwrap();
        board.apply_move(Player::Two, 3).unwrap();

        let mut rng = rng();
        assert_eq!(random_playout(&board, &mut rng), GameOutcome::Draw);
    }

    #[test]
    fn evaluate_counts_forced_wins() {
        // every playout is the single forced move: O completes column 3,
        // so wins minus losses saturates in O's favor
        let board = forced_win_position();

        let mut evaluator = MonteCarloEvaluator::with_seed(7);
        assert_eq!(evaluator.evaluate(&board, Player::Two), TOP_VALUE);
        assert_eq!(evaluator.evaluate(&board, Player::One), -TOP_VALUE);
    }

    #[test]
    fn evaluate_stays_within_the_leaf_range() {
        let mut board = Board::new(7, 6).unwrap();
        board.apply_move(Player::One, 3).unwrap();

        let mut evaluator = MonteCarloEvaluator::with_seed(99);
        let score = evaluator.evaluate(&board, Player::Two);
        assert!((-TOP_VALUE..=TOP_VALUE).contains(&score));
    }

    #[test]
    fn seeded_evaluation_is_reproducible() {
        let mut board = Board::new(7, 6).unwrap();
        board.apply_move(Player::One, 2).unwrap();
        board.apply_move(Player::Two, 4).unwrap();

        let mut a = MonteCarloEvaluator::with_seed(123);
        let mut b = MonteCarloEvaluator::with_seed(123);
        assert_eq!(
            a.evaluate(&board, Player::One),
            b.evaluate(&board, Player::One)
        );
    }
}
