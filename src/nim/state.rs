//! Nim value types: positions and moves.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::{GameError, Side, Winner};
use crate::game::MoveList;

/// Number of piles on the board.
pub const PILE_COUNT: usize = 4;

/// The standard starting configuration.
pub const STANDARD_PILES: [u32; PILE_COUNT] = [1, 3, 5, 7];

/// One Nim move: take `take` stones from pile `pile`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimMove {
    pub pile: usize,
    pub take: u32,
}

impl NimMove {
    /// Parse the `"<pile> <take>"` form a user types.
    ///
    /// Syntactic only: the pile must index a pile and the take must be at
    /// least one stone. Whether the pile actually holds that many stones
    /// is a legality question answered against a concrete state.
    #[must_use]
    pub fn parse(text: &str) -> Option<NimMove> {
        let mut tokens = text.split_whitespace();
        let pile: usize = tokens.next()?.parse().ok()?;
        let take: u32 = tokens.next()?.parse().ok()?;
        if tokens.next().is_some() {
            return None;
        }
        if pile >= PILE_COUNT || take == 0 {
            return None;
        }
        Some(NimMove { pile, take })
    }
}

impl fmt::Display for NimMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.pile, self.take)
    }
}

/// An immutable Nim position: pile sizes plus whose turn it is.
///
/// The side marker exists for winner attribution: the last player to move
/// wins, so a terminal position is won by whichever side is *not* to move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NimState {
    piles: [u32; PILE_COUNT],
    to_move: Side,
}

impl NimState {
    /// A fresh position with the given piles and the human to move.
    #[must_use]
    pub fn new(piles: [u32; PILE_COUNT]) -> Self {
        Self {
            piles,
            to_move: Side::Human,
        }
    }

    #[must_use]
    pub fn piles(&self) -> &[u32; PILE_COUNT] {
        &self.piles
    }

    #[must_use]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// XOR of all pile sizes. Zero characterizes a forced loss for the
    /// player to move under optimal opposition.
    #[must_use]
    pub fn nim_sum(&self) -> u32 {
        self.piles.iter().fold(0, |acc, &pile| acc ^ pile)
    }

    /// True iff every pile is empty.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        self.piles.iter().all(|&pile| pile == 0)
    }

    /// Every legal move: for each non-empty pile, every take from one
    /// stone up to the whole pile. Count equals the sum of pile sizes.
    #[must_use]
    pub fn legal_moves(&self) -> MoveList<NimMove> {
        let mut moves = MoveList::new();
        for (pile, &count) in self.piles.iter().enumerate() {
            for take in 1..=count {
                moves.push(NimMove { pile, take });
            }
        }
        moves
    }

    /// Apply a move, returning the successor position with the turn
    /// flipped. `self` is untouched.
    pub fn apply(&self, mv: NimMove) -> Result<NimState, GameError> {
        if mv.pile >= PILE_COUNT {
            return Err(GameError::PileOutOfRange {
                pile: mv.pile,
                max: PILE_COUNT - 1,
            });
        }
        let available = self.piles[mv.pile];
        if mv.take == 0 || mv.take > available {
            return Err(GameError::InvalidTake {
                pile: mv.pile,
                take: mv.take,
                available,
            });
        }

        let mut piles = self.piles;
        piles[mv.pile] -= mv.take;
        Ok(NimState {
            piles,
            to_move: self.to_move.opponent(),
        })
    }

    /// Winner under the last-player-to-move-wins rule: the side not to
    /// move at a terminal position just emptied the last pile. `None`
    /// while stones remain.
    #[must_use]
    pub fn winner(&self) -> Option<Winner> {
        if self.is_terminal() {
            Some(self.to_move.opponent().into())
        } else {
            None
        }
    }
}

impl Default for NimState {
    fn default() -> Self {
        Self::new(STANDARD_PILES)
    }
}
