//! `flux-othello` is a Reversi/Othello rules engine for embedding inside
//! players, search code and UIs.
//!
//! The crate has two levels of abstraction:
//!
//!  - [`bitboard`] holds the raw mask operations: legal-move generation and
//!    flip computation as pure functions over [`bitboard::Bitboard`] pairs.
//!    These are fast and unchecked; hot-loop code may use them directly.
//!  - [`Board`] is the authoritative game state: color masks, side to move,
//!    consecutive-pass counter and an incrementally-maintained Zobrist hash,
//!    mutated only through all-or-nothing operations.
//!
//! [`GameRecord`] covers the text record/replay contract, and
//! [`test_utils`] holds the perft harness used by tests and benchmarks.

pub mod bitboard;
pub mod test_utils;
pub mod zobrist;

mod board;
mod position;
mod record;
mod utils;

pub use board::*;
pub use position::*;
pub use record::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
