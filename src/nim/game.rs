//! The Nim engine: nim-sum optimal play behind the `Game` contract.

use std::sync::Mutex;

use async_trait::async_trait;
use log::debug;

use super::state::{NimMove, NimState, PILE_COUNT, STANDARD_PILES};
use crate::core::{GameError, MoveRng, Winner};
use crate::game::{Game, MoveList};

/// Nim engine.
///
/// From a nonzero nim-sum there is always a move that drives the nim-sum
/// back to zero; that is the winning invariant. From a zero nim-sum no
/// such move exists, so the engine plays an arbitrary legal move drawn
/// from its injected RNG (a tie-break policy, not a correctness matter:
/// every move is equally losing against optimal opposition).
#[derive(Debug)]
pub struct Nim {
    initial: [u32; PILE_COUNT],
    rng: Mutex<MoveRng>,
}

/// Builder for a Nim engine with non-standard piles or a fixed seed.
#[derive(Clone, Debug)]
pub struct NimBuilder {
    piles: [u32; PILE_COUNT],
    seed: Option<u64>,
}

impl Default for NimBuilder {
    fn default() -> Self {
        Self {
            piles: STANDARD_PILES,
            seed: None,
        }
    }
}

impl NimBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starting pile sizes for every fresh game.
    pub fn piles(mut self, piles: [u32; PILE_COUNT]) -> Self {
        self.piles = piles;
        self
    }

    /// Fix the RNG seed for reproducible tie-breaking.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> Nim {
        let rng = match self.seed {
            Some(seed) => MoveRng::new(seed),
            None => MoveRng::from_entropy(),
        };
        Nim {
            initial: self.piles,
            rng: Mutex::new(rng),
        }
    }
}

impl Nim {
    pub const NAME: &'static str = "Nim";

    /// Standard engine: piles (1, 3, 5, 7), entropy-seeded RNG.
    #[must_use]
    pub fn new() -> Self {
        NimBuilder::new().build()
    }

    #[must_use]
    pub fn builder() -> NimBuilder {
        NimBuilder::new()
    }

    fn best_move(&self, state: &NimState) -> Result<NimMove, GameError> {
        if state.is_terminal() {
            return Err(GameError::TerminalState);
        }

        if let Some(mv) = zeroing_move(state) {
            debug!("nim: winning move {mv} restores zero nim-sum");
            return Ok(mv);
        }

        // Zero nim-sum: a lost position, every reply is equally poor.
        let moves = state.legal_moves();
        let mut rng = self.rng.lock().unwrap_or_else(|poison| poison.into_inner());
        let mv = moves[rng.gen_index(0..moves.len())];
        debug!("nim: lost position, playing {mv} at random");
        Ok(mv)
    }
}

impl Default for Nim {
    fn default() -> Self {
        Self::new()
    }
}

/// The lowest-indexed move that leaves a zero nim-sum, or `None` when the
/// nim-sum is already zero.
fn zeroing_move(state: &NimState) -> Option<NimMove> {
    let nim_sum = state.nim_sum();
    if nim_sum == 0 {
        return None;
    }
    for (pile, &count) in state.piles().iter().enumerate() {
        let target = count ^ nim_sum;
        if target < count {
            return Some(NimMove {
                pile,
                take: count - target,
            });
        }
    }
    // nim_sum has a highest set bit; the pile contributing it shrinks
    // under XOR, so the loop always finds a move.
    None
}

#[async_trait]
impl Game for Nim {
    type State = NimState;
    type Move = NimMove;

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> &str {
        "Remove stones from piles. Last move wins."
    }

    async fn initial_state(&self) -> NimState {
        NimState::new(self.initial)
    }

    async fn legal_moves(&self, state: &NimState) -> MoveList<NimMove> {
        state.legal_moves()
    }

    async fn add_move(&self, state: &NimState, mv: &NimMove) -> Result<NimState, GameError> {
        state.apply(*mv)
    }

    async fn generate_best_move(&self, state: &NimState) -> Result<NimMove, GameError> {
        self.best_move(state)
    }

    async fn is_terminal(&self, state: &NimState) -> bool {
        state.is_terminal()
    }

    async fn winner(&self, state: &NimState) -> Option<Winner> {
        state.winner()
    }

    async fn format_state(&self, state: &NimState) -> String {
        state
            .piles()
            .iter()
            .enumerate()
            .map(|(i, &pile)| format!("Pile {}: {} ({})", i, "●".repeat(pile as usize), pile))
            .collect::<Vec<_>>()
            .join("\n")
    }

    async fn parse_move(&self, text: &str) -> Option<NimMove> {
        NimMove::parse(text)
    }
}
