//! The Tic-Tac-Toe engine behind the `Game` contract.

use std::hash::{Hash, Hasher};
use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;
use rustc_hash::FxHasher;

use super::board::{CellIdx, TttState};
use super::solver::Solver;
use crate::core::{GameError, MoveRng, Winner};
use crate::game::{Game, MoveList};

/// Tic-Tac-Toe engine.
///
/// Every move it plays is provably optimal: the target outcome comes from
/// the memoized backward-induction solver, and the engine picks among the
/// moves whose child position carries that same outcome. Tie-breaking is
/// uniformly random by default; in deterministic mode the pick is indexed
/// by a stable hash of the state, which makes games reproducible without
/// an RNG at all.
#[derive(Debug)]
pub struct TicTacToe {
    solver: Solver,
    rng: Mutex<MoveRng>,
    deterministic: bool,
}

/// Builder for a Tic-Tac-Toe engine with a fixed seed or deterministic
/// tie-breaking.
#[derive(Clone, Debug, Default)]
pub struct TicTacToeBuilder {
    seed: Option<u64>,
    deterministic: bool,
}

impl TicTacToeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fix the RNG seed for reproducible tie-breaking.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Break ties by a stable hash of the state instead of the RNG.
    pub fn deterministic(mut self, deterministic: bool) -> Self {
        self.deterministic = deterministic;
        self
    }

    pub fn build(self) -> TicTacToe {
        let rng = match self.seed {
            Some(seed) => MoveRng::new(seed),
            None => MoveRng::from_entropy(),
        };
        TicTacToe {
            solver: Solver::new(),
            rng: Mutex::new(rng),
            deterministic: self.deterministic,
        }
    }
}

impl TicTacToe {
    pub const NAME: &'static str = "tictactoe";

    /// Standard engine: entropy-seeded RNG, random tie-breaking.
    #[must_use]
    pub fn new() -> Self {
        TicTacToeBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> TicTacToeBuilder {
        TicTacToeBuilder::new()
    }

    /// The solver backing this engine, exposed for analysis and tests.
    #[must_use]
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    fn best_move(&self, state: &TttState) -> Result<CellIdx, GameError> {
        if state.terminal_outcome().is_some() {
            return Err(GameError::TerminalState);
        }

        let target = self.solver.outcome(state);
        let options: MoveList<CellIdx> = state
            .legal_moves()
            .into_iter()
            .filter(|&mv| self.solver.outcome(&state.place(mv)) == target)
            .collect();
        // The target outcome is derived from the children, so at least
        // one child carries it.
        debug_assert!(!options.is_empty());

        let pick = if self.deterministic {
            stable_hash(state) as usize % options.len()
        } else {
            let mut rng = self.rng.lock().unwrap_or_else(|poison| poison.into_inner());
            rng.gen_index(0..options.len())
        };
        let mv = options[pick];
        debug!(
            "tictactoe: {} optimal move(s) toward {target:?}, playing {mv}",
            options.len()
        );
        Ok(mv)
    }
}

impl Default for TicTacToe {
    fn default() -> Self {
        Self::new()
    }
}

fn stable_hash(state: &TttState) -> u64 {
    // FxHasher is stable across runs and platforms, unlike the std
    // default hasher's randomized keys.
    let mut hasher = FxHasher::default();
    state.hash(&mut hasher);
    hasher.finish()
}

#[async_trait]
impl Game for TicTacToe {
    type State = TttState;
    type Move = CellIdx;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "A classic notebook game. Players take turns placing Xs and Os. \
         First player to place 3 in a line wins."
    }

    async fn initial_state(&self) -> TttState {
        TttState::new()
    }

    async fn legal_moves(&self, state: &TttState) -> MoveList<CellIdx> {
        state.legal_moves()
    }

    async fn add_move(&self, state: &TttState, mv: &CellIdx) -> Result<TttState, GameError> {
        state.apply(*mv)
    }

    async fn generate_best_move(&self, state: &TttState) -> Result<CellIdx, GameError> {
        self.best_move(state)
    }

    async fn is_terminal(&self, state: &TttState) -> bool {
        state.terminal_outcome().is_some()
    }

    async fn winner(&self, state: &TttState) -> Option<Winner> {
        state.terminal_outcome().map(|outcome| outcome.winner())
    }

    async fn format_state(&self, state: &TttState) -> String {
        state.render()
    }

    async fn parse_move(&self, text: &str) -> Option<CellIdx> {
        let idx: u8 = text.trim().parse().ok()?;
        CellIdx::new(idx)
    }
}
