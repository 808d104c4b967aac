//! Uniform-random strategy.
//!
//! Selects uniformly from the legal moves; primarily used for diagnostics,
//! integration testing and as a baseline opponent.

use crate::Player;
use flux_othello::{Board, Move, Position};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

pub struct RandomPlayer {
    rng: StdRng,
}

impl RandomPlayer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// A reproducible player for tests and rating runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for RandomPlayer {
    fn choose_move(&mut self, board: &Board) -> Move {
        let moves: Vec<Position> = board.get_moves().collect();
        match moves.choose(&mut self.rng) {
            Some(&pos) => Move::Place(pos),
            None => Move::Pass,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flux_othello::bitboard::Bitboard;
    use flux_othello::Color;

    #[test]
    fn chooses_a_legal_move() {
        let mut player = RandomPlayer::from_seed(1);
        let board = Board::new();

        for _ in 0..32 {
            match player.choose_move(&board) {
                Move::Place(pos) => assert!(board.is_legal(pos)),
                Move::Pass => panic!("start position has legal moves"),
            }
        }
    }

    #[test]
    fn passes_without_legal_moves() {
        let mut player = RandomPlayer::from_seed(1);
        let board = Board::from_masks(Bitboard::from(1u64), Bitboard::from(0u64), Color::Black);
        assert_eq!(player.choose_move(&board), Move::Pass);
    }

    #[test]
    fn seeded_players_agree() {
        let mut a = RandomPlayer::from_seed(42);
        let mut b = RandomPlayer::from_seed(42);
        let board = Board::new();

        for _ in 0..8 {
            assert_eq!(a.choose_move(&board), b.choose_move(&board));
        }
    }
}
