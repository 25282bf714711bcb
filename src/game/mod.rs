//! Core Connect Four game logic: board representation with incremental
//! move application and undo, player types, and last-move-anchored win
//! detection.

mod board;
mod player;

pub use board::{Board, Cell, GameOutcome};
pub use player::Player;
