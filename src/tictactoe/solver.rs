//! Exhaustive backward induction with memoization.

use std::sync::RwLock;

use log::trace;
use rustc_hash::FxHashMap;

use super::board::{Outcome, TttState};

/// Forced-outcome evaluator over the Tic-Tac-Toe state DAG.
///
/// `outcome(state)` is the result the player to move can force under
/// optimal play by both sides: a win beats a draw beats a loss. The state
/// graph under alternating play is a finite DAG (each move fills a cell),
/// so the recursion terminates without cycle detection; memoization keyed
/// by the full state (cells plus turn) evaluates each distinct position
/// at most once.
///
/// The table is owned by the solver instance, not process-global, so
/// tests get a fresh cache. It is populated lazily and never evicted; the
/// whole space is a few thousand entries. Concurrent games sharing one
/// solver may race to compute the same entry, which is benign: both
/// arrive at the same value, and the map keeps exactly one.
#[derive(Debug, Default)]
pub struct Solver {
    memo: RwLock<FxHashMap<TttState, Outcome>>,
}

impl Solver {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The outcome both sides can force from `state`.
    pub fn outcome(&self, state: &TttState) -> Outcome {
        {
            let memo = self.memo.read().unwrap_or_else(|poison| poison.into_inner());
            if let Some(&hit) = memo.get(state) {
                trace!("tictactoe: memo hit for {state:?}");
                return hit;
            }
        }

        let result = self.evaluate(state);
        self.memo
            .write()
            .unwrap_or_else(|poison| poison.into_inner())
            .insert(*state, result);
        result
    }

    fn evaluate(&self, state: &TttState) -> Outcome {
        if let Some(outcome) = state.terminal_outcome() {
            return outcome;
        }

        let mover = state.to_move();
        let mut found_draw = false;
        for mv in state.legal_moves() {
            match self.outcome(&state.place(mv)) {
                Outcome::Win(mark) if mark == mover => return Outcome::Win(mover),
                Outcome::Draw => found_draw = true,
                Outcome::Win(_) => {}
            }
        }

        if found_draw {
            Outcome::Draw
        } else {
            // Every reply hands the opponent a forced win.
            Outcome::Win(mover.opponent())
        }
    }

    /// Number of positions memoized so far.
    #[must_use]
    pub fn cached_states(&self) -> usize {
        self.memo
            .read()
            .unwrap_or_else(|poison| poison.into_inner())
            .len()
    }
}
