//! One-ply heuristic strategy.
//!
//! Plays the move whose resulting position scores best under the shared
//! positional weights. Strong enough to punish careless play near corners,
//! blind to everything deeper.

use crate::{eval, Player};
use flux_othello::{Board, Move};

pub struct GreedyPlayer;

impl GreedyPlayer {
    pub fn new() -> Self {
        Self
    }
}

impl Default for GreedyPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl Player for GreedyPlayer {
    fn choose_move(&mut self, board: &Board) -> Move {
        let me = board.to_move();

        board
            .get_moves()
            .filter_map(|pos| {
                board
                    .child(Move::Place(pos))
                    .map(|child| (eval::evaluate(&child, me), pos))
            })
            .max_by_key(|&(score, _)| score)
            .map(|(_, pos)| Move::Place(pos))
            .unwrap_or(Move::Pass)
    }
}
