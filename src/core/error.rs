//! Error taxonomy for contract violations.
//!
//! These are caller errors, not user-facing recoverable conditions: the
//! driver is expected to pre-validate user input against `legal_moves`
//! before applying it, so any of these surfacing at runtime indicates a
//! driver bug. Malformed user text is not an error at all; `parse_move`
//! returns `None` for it.

use thiserror::Error;

/// Contract violations surfaced by the engines.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GameError {
    /// A move targets a Tic-Tac-Toe cell that already holds a mark.
    #[error("cell {cell} is already occupied")]
    CellOccupied { cell: usize },

    /// A Nim move names a pile the board does not have.
    #[error("pile {pile} is out of range (expected 0-{max})")]
    PileOutOfRange { pile: usize, max: usize },

    /// A Nim move removes zero stones or more stones than the pile holds.
    #[error("cannot take {take} stones from pile {pile} holding {available}")]
    InvalidTake {
        pile: usize,
        take: u32,
        available: u32,
    },

    /// `generate_best_move` was called on a finished game.
    #[error("best move requested on a terminal position")]
    TerminalState,

    /// A state or move from one game was handed to another engine.
    #[error("{got} value passed to the '{expected}' engine")]
    GameMismatch {
        expected: &'static str,
        got: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_violation() {
        let err = GameError::CellOccupied { cell: 4 };
        assert_eq!(err.to_string(), "cell 4 is already occupied");

        let err = GameError::InvalidTake {
            pile: 2,
            take: 9,
            available: 5,
        };
        assert_eq!(
            err.to_string(),
            "cannot take 9 stones from pile 2 holding 5"
        );

        let err = GameError::GameMismatch {
            expected: "nim",
            got: "tictactoe",
        };
        assert_eq!(err.to_string(), "tictactoe value passed to the 'nim' engine");
    }
}
