//! Board value types and terminal detection.
//!
//! Cells are indexed 0-8 row-major. Any assignment of marks to cells is
//! representable; the operations behave correctly even on boards that are
//! unreachable from the initial position.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Side, Winner};
use crate::game::MoveList;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// The eight winning lines: three rows, three columns, two diagonals.
const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark. X is the human side and moves first; O is the bot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark.
    #[must_use]
    pub const fn opponent(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Which participant plays this mark.
    #[must_use]
    pub const fn side(self) -> Side {
        match self {
            Mark::X => Side::Human,
            Mark::O => Side::Bot,
        }
    }

    /// Display glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Mark::X => '❌',
            Mark::O => '⭕',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Index of a board cell, row-major in `[0, 9)`.
///
/// The bound is enforced at construction, so an out-of-range move is
/// unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellIdx(u8);

impl CellIdx {
    /// Create a cell index, or `None` when out of range.
    #[must_use]
    pub fn new(idx: u8) -> Option<CellIdx> {
        (usize::from(idx) < CELL_COUNT).then_some(CellIdx(idx))
    }

    #[must_use]
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// All nine cells in order.
    pub fn all() -> impl Iterator<Item = CellIdx> {
        (0..CELL_COUNT as u8).map(CellIdx)
    }
}

impl fmt::Display for CellIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Terminal result of a position: a completed line for one mark, or a
/// full board with no line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Mark),
    Draw,
}

impl Outcome {
    /// Map onto the driver-facing winner convention.
    #[must_use]
    pub fn winner(self) -> Winner {
        match self {
            Outcome::Win(mark) => mark.side().into(),
            Outcome::Draw => Winner::Draw,
        }
    }
}

/// An immutable Tic-Tac-Toe position: nine cells plus whose mark is
/// placed next.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TttState {
    cells: [Option<Mark>; CELL_COUNT],
    to_move: Mark,
}

impl TttState {
    /// The empty board with X to move.
    #[must_use]
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
            to_move: Mark::X,
        }
    }

    /// An arbitrary position. Useful for analysis and tests; the engine
    /// does not require reachability from the initial position.
    #[must_use]
    pub fn with_cells(cells: [Option<Mark>; CELL_COUNT], to_move: Mark) -> Self {
        Self { cells, to_move }
    }

    #[must_use]
    pub fn cell(&self, idx: CellIdx) -> Option<Mark> {
        self.cells[idx.index()]
    }

    #[must_use]
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// The mark holding a completed line, if any. Linear in the eight
    /// fixed lines, effectively constant time.
    #[must_use]
    pub fn line_winner(&self) -> Option<Mark> {
        for line in &WIN_LINES {
            if let Some(mark) = self.cells[line[0]] {
                if self.cells[line[1]] == Some(mark) && self.cells[line[2]] == Some(mark) {
                    return Some(mark);
                }
            }
        }
        None
    }

    /// Terminal result: a win if a line is complete, a draw if the board
    /// is full, `None` while play continues.
    #[must_use]
    pub fn terminal_outcome(&self) -> Option<Outcome> {
        if let Some(mark) = self.line_winner() {
            return Some(Outcome::Win(mark));
        }
        if self.cells.iter().all(Option::is_some) {
            return Some(Outcome::Draw);
        }
        None
    }

    /// Every empty cell, in index order. Empty exactly on terminal
    /// positions (a completed line also ends the game, so callers check
    /// [`TttState::terminal_outcome`] first).
    #[must_use]
    pub fn legal_moves(&self) -> MoveList<CellIdx> {
        if self.line_winner().is_some() {
            return MoveList::new();
        }
        CellIdx::all()
            .filter(|idx| self.cells[idx.index()].is_none())
            .collect()
    }

    /// Apply a move, returning the position with the mover's mark placed
    /// and the turn flipped. `self` is untouched.
    pub fn apply(&self, mv: CellIdx) -> Result<TttState, GameError> {
        if self.cells[mv.index()].is_some() {
            return Err(GameError::CellOccupied { cell: mv.index() });
        }
        Ok(self.place(mv))
    }

    /// Place on a cell the caller already knows is empty.
    pub(crate) fn place(&self, mv: CellIdx) -> TttState {
        debug_assert!(self.cells[mv.index()].is_none());
        let mut cells = self.cells;
        cells[mv.index()] = Some(self.to_move);
        TttState {
            cells,
            to_move: self.to_move.opponent(),
        }
    }

    /// Render three rows: occupied cells show the mark glyph, empty cells
    /// show their index so the user knows what to type.
    #[must_use]
    pub fn render(&self) -> String {
        (0..3)
            .map(|row| {
                (row * 3..(row + 1) * 3)
                    .map(|i| match self.cells[i] {
                        Some(mark) => mark.to_string(),
                        None => format!(" {i}"),
                    })
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for TttState {
    fn default() -> Self {
        Self::new()
    }
}
