//! Zobrist keys for position fingerprinting.
//!
//! One 64-bit key per (square, color) pair, generated at compile time from a
//! fixed seed so that hashes are reproducible across runs and across
//! independently-constructed boards that reach the same position. Because
//! XOR is its own inverse, toggling a square's key twice restores the prior
//! hash; this is what makes the incremental maintenance in
//! [`Board::make_move`](crate::Board::make_move) exact.

use crate::bitboard::Bitboard;
use crate::{Color, NUM_SPACES};

/// Fixed seed for the key table (the 64-bit golden-ratio constant).
const SEED: u64 = 0x9e37_79b9_7f4a_7c15;

// Knuth's MMIX linear congruential generator.
const LCG_MULTIPLIER: u64 = 6364136223846793005;
const LCG_INCREMENT: u64 = 1442695040888963407;

/// The key table: one entry per square, per color.
static PIECE_KEYS: [[u64; 2]; NUM_SPACES] = {
    let mut keys = [[0u64; 2]; NUM_SPACES];
    let mut state = SEED;

    let mut square = 0;
    while square < NUM_SPACES {
        let mut color = 0;
        while color < 2 {
            state = state
                .wrapping_mul(LCG_MULTIPLIER)
                .wrapping_add(LCG_INCREMENT);
            keys[square][color] = state;
            color += 1;
        }
        square += 1;
    }

    keys
};

/// The key for a piece of `color` on the square at `index`.
#[inline]
pub fn piece_key(index: u8, color: Color) -> u64 {
    PIECE_KEYS[index as usize][color as usize]
}

/// Recompute a position's hash from scratch: the XOR of the keys for every
/// occupied square. The incrementally-maintained board hash must always
/// equal this value.
pub fn position_hash(black: Bitboard, white: Bitboard) -> u64 {
    let mut hash = 0;
    for index in black.indices() {
        hash ^= piece_key(index, Color::Black);
    }
    for index in white.indices() {
        hash ^= piece_key(index, Color::White);
    }
    hash
}
