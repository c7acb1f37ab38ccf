//! Nim: remove stones from piles, last move wins.
//!
//! Optimal play is closed-form via the nim-sum (XOR of all pile sizes):
//! a zero nim-sum is a forced loss for the player to move, and from any
//! nonzero nim-sum there is a move that restores zero.

pub mod game;
pub mod state;

pub use game::{Nim, NimBuilder};
pub use state::{NimMove, NimState, PILE_COUNT, STANDARD_PILES};
