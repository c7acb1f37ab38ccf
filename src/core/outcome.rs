//! Side and winner conventions shared by every engine.
//!
//! The driver-facing convention is numeric: `+1` when the human wins,
//! `-1` when the engine wins, `0` for a draw. Inside the crate both are
//! typed enums; `Winner::score` produces the numeric form at the boundary.

use serde::{Deserialize, Serialize};

/// One of the two participants in a session.
///
/// The human always moves first in every shipped engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Human,
    Bot,
}

impl Side {
    /// The other participant.
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Human => Side::Bot,
            Side::Bot => Side::Human,
        }
    }
}

/// Result of a finished game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Winner {
    Human,
    Bot,
    Draw,
}

impl Winner {
    /// Numeric convention: `+1` human, `-1` bot, `0` draw.
    #[must_use]
    pub const fn score(self) -> i8 {
        match self {
            Winner::Human => 1,
            Winner::Bot => -1,
            Winner::Draw => 0,
        }
    }
}

impl From<Side> for Winner {
    fn from(side: Side) -> Winner {
        match side {
            Side::Human => Winner::Human,
            Side::Bot => Winner::Bot,
        }
    }
}
