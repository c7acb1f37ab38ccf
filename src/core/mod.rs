//! Game-agnostic building blocks: errors, winner conventions, RNG.
//!
//! Nothing in this module knows about a particular game. Engines build on
//! these types; the driver sees them through the contract in `crate::game`.

pub mod error;
pub mod outcome;
pub mod rng;

pub use error::GameError;
pub use outcome::{Side, Winner};
pub use rng::MoveRng;
