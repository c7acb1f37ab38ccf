//! Fixed ordered set of engines, enum-dispatched for heterogeneous drivers.
//!
//! The `Game` trait binds concrete `State`/`Move` types per engine, which a
//! driver offering several games cannot name. `AnyGame`/`AnyState`/`AnyMove`
//! close the set: the driver holds these as opaque handles and only ever
//! passes a value back to the engine that produced it. Handing a value to
//! the wrong engine is a contract violation, not a silent misplay.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Winner};
use crate::game::{Game, MoveList};
use crate::nim::{Nim, NimMove, NimState};
use crate::tictactoe::{CellIdx, TicTacToe, TttState};

/// One of the shipped engines.
#[derive(Debug)]
pub enum AnyGame {
    TicTacToe(TicTacToe),
    Nim(Nim),
}

/// A state from one of the shipped engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyState {
    TicTacToe(TttState),
    Nim(NimState),
}

/// A move from one of the shipped engines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnyMove {
    TicTacToe(CellIdx),
    Nim(NimMove),
}

impl AnyState {
    fn game_name(&self) -> &'static str {
        match self {
            AnyState::TicTacToe(_) => TicTacToe::NAME,
            AnyState::Nim(_) => Nim::NAME,
        }
    }
}

impl AnyMove {
    fn game_name(&self) -> &'static str {
        match self {
            AnyMove::TicTacToe(_) => TicTacToe::NAME,
            AnyMove::Nim(_) => Nim::NAME,
        }
    }
}

impl fmt::Display for AnyMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnyMove::TicTacToe(mv) => fmt::Display::fmt(mv, f),
            AnyMove::Nim(mv) => fmt::Display::fmt(mv, f),
        }
    }
}

impl AnyGame {
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            AnyGame::TicTacToe(_) => TicTacToe::NAME,
            AnyGame::Nim(_) => Nim::NAME,
        }
    }

    #[must_use]
    pub fn description(&self) -> &str {
        match self {
            AnyGame::TicTacToe(game) => game.description(),
            AnyGame::Nim(game) => game.description(),
        }
    }

    pub async fn initial_state(&self) -> AnyState {
        match self {
            AnyGame::TicTacToe(game) => AnyState::TicTacToe(game.initial_state().await),
            AnyGame::Nim(game) => AnyState::Nim(game.initial_state().await),
        }
    }

    pub async fn legal_moves(&self, state: &AnyState) -> Result<MoveList<AnyMove>, GameError> {
        match (self, state) {
            (AnyGame::TicTacToe(game), AnyState::TicTacToe(s)) => Ok(game
                .legal_moves(s)
                .await
                .into_iter()
                .map(AnyMove::TicTacToe)
                .collect()),
            (AnyGame::Nim(game), AnyState::Nim(s)) => Ok(game
                .legal_moves(s)
                .await
                .into_iter()
                .map(AnyMove::Nim)
                .collect()),
            _ => Err(self.mismatch(state.game_name())),
        }
    }

    pub async fn add_move(&self, state: &AnyState, mv: &AnyMove) -> Result<AnyState, GameError> {
        match (self, state, mv) {
            (AnyGame::TicTacToe(game), AnyState::TicTacToe(s), AnyMove::TicTacToe(m)) => {
                Ok(AnyState::TicTacToe(game.add_move(s, m).await?))
            }
            (AnyGame::Nim(game), AnyState::Nim(s), AnyMove::Nim(m)) => {
                Ok(AnyState::Nim(game.add_move(s, m).await?))
            }
            (_, state, mv) => {
                let got = if state.game_name() != self.name() {
                    state.game_name()
                } else {
                    mv.game_name()
                };
                Err(self.mismatch(got))
            }
        }
    }

    pub async fn generate_best_move(&self, state: &AnyState) -> Result<AnyMove, GameError> {
        match (self, state) {
            (AnyGame::TicTacToe(game), AnyState::TicTacToe(s)) => {
                Ok(AnyMove::TicTacToe(game.generate_best_move(s).await?))
            }
            (AnyGame::Nim(game), AnyState::Nim(s)) => {
                Ok(AnyMove::Nim(game.generate_best_move(s).await?))
            }
            _ => Err(self.mismatch(state.game_name())),
        }
    }

    pub async fn is_terminal(&self, state: &AnyState) -> Result<bool, GameError> {
        match (self, state) {
            (AnyGame::TicTacToe(game), AnyState::TicTacToe(s)) => Ok(game.is_terminal(s).await),
            (AnyGame::Nim(game), AnyState::Nim(s)) => Ok(game.is_terminal(s).await),
            _ => Err(self.mismatch(state.game_name())),
        }
    }

    pub async fn winner(&self, state: &AnyState) -> Result<Option<Winner>, GameError> {
        match (self, state) {
            (AnyGame::TicTacToe(game), AnyState::TicTacToe(s)) => Ok(game.winner(s).await),
            (AnyGame::Nim(game), AnyState::Nim(s)) => Ok(game.winner(s).await),
            _ => Err(self.mismatch(state.game_name())),
        }
    }

    pub async fn format_state(&self, state: &AnyState) -> Result<String, GameError> {
        match (self, state) {
            (AnyGame::TicTacToe(game), AnyState::TicTacToe(s)) => Ok(game.format_state(s).await),
            (AnyGame::Nim(game), AnyState::Nim(s)) => Ok(game.format_state(s).await),
            _ => Err(self.mismatch(state.game_name())),
        }
    }

    pub async fn parse_move(&self, text: &str) -> Option<AnyMove> {
        match self {
            AnyGame::TicTacToe(game) => game.parse_move(text).await.map(AnyMove::TicTacToe),
            AnyGame::Nim(game) => game.parse_move(text).await.map(AnyMove::Nim),
        }
    }

    fn mismatch(&self, got: &'static str) -> GameError {
        GameError::GameMismatch {
            expected: self.name(),
            got,
        }
    }
}

/// The fixed ordered list of engines a driver offers to the user.
#[derive(Debug)]
pub struct GameSet {
    games: Vec<AnyGame>,
}

impl GameSet {
    /// The standard line-up, in presentation order.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            games: vec![
                AnyGame::TicTacToe(TicTacToe::new()),
                AnyGame::Nim(Nim::new()),
            ],
        }
    }

    /// A custom line-up, e.g. seeded engines for tests.
    #[must_use]
    pub fn with_games(games: Vec<AnyGame>) -> Self {
        Self { games }
    }

    #[must_use]
    pub fn games(&self) -> &[AnyGame] {
        &self.games
    }

    /// Resolve a user's game selection by exact name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&AnyGame> {
        self.games.iter().find(|game| game.name() == name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.games.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameSet {
    fn default() -> Self {
        Self::standard()
    }
}
