//! The uniform contract every game implements.
//!
//! The driver runs arbitrary games through this one surface: it never
//! contains game-specific code, and the engines never learn about the
//! driver, the transport, or each other.

pub mod contract;

pub use contract::{Game, MoveList};
