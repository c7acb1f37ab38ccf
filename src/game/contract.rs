//! The `Game` trait: the only boundary between engines and the driver.
//!
//! A driver session holds one selected engine and one opaque state value.
//! Each round it parses user text into a move, checks membership in
//! `legal_moves`, applies it, checks terminality, and interleaves one
//! engine-generated counter-move. The engines trust this sequencing; they
//! validate individual calls, not call order.

use std::fmt::{Debug, Display};
use std::hash::Hash;

use async_trait::async_trait;
use smallvec::SmallVec;

use crate::core::{GameError, Winner};

/// Legal-move list, stack-allocated for the small branching factors here
/// (at most 16 moves in either shipped engine).
pub type MoveList<M> = SmallVec<[M; 16]>;

/// A two-player, perfect-information, turn-based game.
///
/// Operations are `async` so an implementation embedded in a concurrent
/// request-handling driver can interleave many independent sessions; the
/// engines perform no I/O and never block internally.
///
/// ## Implementation Notes
///
/// - States and moves are immutable values. `add_move` constructs a new
///   state; the input remains valid afterwards.
/// - `parse_move` is syntactic only. A successfully parsed move may still
///   be illegal in the current state; legality is the business of
///   `legal_moves` and `add_move`.
/// - Engines may cache internally but must be safe to query repeatedly
///   with the same input.
#[async_trait]
pub trait Game: Send + Sync {
    type State: Clone + Eq + Hash + Debug + Send + Sync;
    type Move: Clone + Eq + Hash + Debug + Display + Send + Sync;

    /// Stable identifier, non-empty.
    fn name(&self) -> &str;

    /// Stable human-readable summary.
    fn description(&self) -> &str;

    /// The starting position for a fresh game.
    async fn initial_state(&self) -> Self::State;

    /// All moves applicable to `state`. Deterministic content per state;
    /// empty exactly on terminal states.
    async fn legal_moves(&self, state: &Self::State) -> MoveList<Self::Move>;

    /// The state after applying `mv`, leaving `state` untouched.
    ///
    /// Errors when `mv` is not in `legal_moves(state)`: an occupied cell,
    /// an out-of-range pile, an oversized take. That is a driver bug, not
    /// a user-facing condition; the driver must pre-validate.
    async fn add_move(&self, state: &Self::State, mv: &Self::Move)
        -> Result<Self::State, GameError>;

    /// One move judged optimal for the player to move in `state`.
    ///
    /// Errors with [`GameError::TerminalState`] when the game is already
    /// over; calling this on a terminal state is a contract violation.
    async fn generate_best_move(&self, state: &Self::State) -> Result<Self::Move, GameError>;

    /// True iff no further play is possible (win or draw).
    async fn is_terminal(&self, state: &Self::State) -> bool;

    /// The result of a finished game; `None` while play continues.
    async fn winner(&self, state: &Self::State) -> Option<Winner>;

    /// Human-readable board rendering. Pure function of the state.
    async fn format_state(&self, state: &Self::State) -> String;

    /// Convert free-form user text into a move, or `None` if the text is
    /// not syntactically a move for this game.
    async fn parse_move(&self, text: &str) -> Option<Self::Move>;
}
