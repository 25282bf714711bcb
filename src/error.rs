/// Errors that can occur when constructing or mutating a board.
///
/// The mutation variants signal contract violations by the caller. The
/// board refuses the operation and leaves its state untouched, so the
/// apply/undo symmetry the search relies on is never silently broken.
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("board dimensions must be positive (got {cols} columns of height {height})")]
    InvalidDimensions { cols: usize, height: usize },

    #[error("column {col} is out of range (board has {cols} columns)")]
    ColumnOutOfRange { col: usize, cols: usize },

    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("no moves to undo")]
    NoMoveToUndo,
}
