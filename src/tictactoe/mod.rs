//! Tic-Tac-Toe: 3×3 grid, three in a line wins.
//!
//! Optimal play is proven, not heuristic: the solver runs backward
//! induction over the full reachable state DAG (depth ≤ 9, branching ≤ 9)
//! with memoization keyed by board plus turn, so each distinct position is
//! evaluated at most once.

pub mod board;
pub mod game;
pub mod solver;

pub use board::{CellIdx, Mark, Outcome, TttState, CELL_COUNT};
pub use game::{TicTacToe, TicTacToeBuilder};
pub use solver::Solver;
