//! # MC Connect Four
//!
//! A Connect-Four-style game on a configurable grid (N columns, fixed
//! column height, four in a row wins) with an AI opponent. The AI explores
//! the board with a fixed-depth alpha-beta search and scores undecided
//! leaf positions by aggregating Monte-Carlo rollouts of uniformly random
//! play.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, incremental move
//!   application and undo, win detection anchored at the last move
//! - [`ai`] — Alpha-beta search, random playouts, Monte-Carlo leaf
//!   evaluation
//! - [`error`] — Structured error types

pub mod ai;
pub mod error;
pub mod game;
