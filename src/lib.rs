//! # turnwise
//!
//! Turn-based, perfect-information game engines behind a uniform async
//! contract, built to sit underneath a conversational driver (a chat bot,
//! a CLI, a web session handler) that knows nothing about any particular
//! game.
//!
//! ## Design Principles
//!
//! 1. **Opaque values**: each engine binds its own strongly-typed `State`
//!    and `Move`. The driver never inspects them, it only passes them back
//!    to the engine that produced them.
//!
//! 2. **Immutable states**: `add_move` returns a new state and never
//!    mutates its input. Abandoning a session needs no cleanup.
//!
//! 3. **Injected randomness**: tie-breaking among equally optimal moves
//!    draws from a seedable RNG owned by the engine, so tests substitute a
//!    fixed seed and replay exact move sequences.
//!
//! 4. **Suspendable boundary**: contract operations are `async` so a
//!    concurrent driver can interleave many sessions; the engines
//!    themselves do no I/O and never block.
//!
//! ## Engines
//!
//! - [`nim::Nim`]: closed-form optimal play via the nim-sum (XOR) strategy.
//! - [`tictactoe::TicTacToe`]: exhaustive backward induction with
//!   memoization over the full reachable state DAG.
//!
//! ## Modules
//!
//! - `core`: errors, winner conventions, RNG
//! - `game`: the `Game` contract every engine implements
//! - `nim`, `tictactoe`: the concrete engines
//! - `registry`: fixed ordered engine list with enum dispatch for drivers
//!   that hold heterogeneous games

pub mod core;
pub mod game;
pub mod nim;
pub mod registry;
pub mod tictactoe;

// Re-export commonly used types
pub use crate::core::{GameError, MoveRng, Side, Winner};
pub use crate::game::{Game, MoveList};
pub use crate::nim::{Nim, NimBuilder, NimMove, NimState};
pub use crate::registry::{AnyGame, AnyMove, AnyState, GameSet};
pub use crate::tictactoe::{CellIdx, Mark, Outcome, Solver, TicTacToe, TicTacToeBuilder, TttState};
