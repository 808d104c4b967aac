//! Fixed-depth minimax with alpha-beta pruning.
//!
//! A negamax window search over copy-on-move child boards. Children are
//! visited best-first by the static evaluation, which tightens the window
//! early; forced passes recurse without consuming depth (safe, because a
//! position dead for both sides is terminal).

use crate::{eval, Player};
use arrayvec::ArrayVec;
use flux_othello::{Board, Move};

const INFINITY: i32 = 1_000_000_000;

pub struct MinimaxPlayer {
    depth: u8,
}

impl MinimaxPlayer {
    /// A player searching `depth` plies deep. Depth 1 is one lookahead ply
    /// (equivalent to the greedy player with extra steps).
    pub fn new(depth: u8) -> Self {
        Self { depth }
    }
}

impl Player for MinimaxPlayer {
    fn choose_move(&mut self, board: &Board) -> Move {
        let mut alpha = -INFINITY;
        let mut best = None;

        for pos in board.get_moves() {
            let child = match board.child(Move::Place(pos)) {
                Some(child) => child,
                None => continue,
            };

            let score = -negamax(&child, self.depth.saturating_sub(1), -INFINITY, -alpha);
            if best.is_none() || score > alpha {
                alpha = score;
                best = Some(pos);
            }
        }

        match best {
            Some(pos) => Move::Place(pos),
            None => Move::Pass,
        }
    }
}

fn negamax(board: &Board, depth: u8, mut alpha: i32, beta: i32) -> i32 {
    if depth == 0 || board.is_finished() {
        return eval::evaluate(board, board.to_move());
    }

    let moves = board.get_moves();
    if moves.is_empty() {
        // Forced pass: the turn flips, the position stays, the ply is free.
        let mut passed = *board;
        passed.pass();
        return -negamax(&passed, depth, -beta, -alpha);
    }

    // Visit children best-first for the side to move.
    let mut children: ArrayVec<[Board; 64]> = moves
        .filter_map(|pos| board.child(Move::Place(pos)))
        .collect();
    children.sort_unstable_by_key(|child| -eval::evaluate(child, board.to_move()));

    for child in &children {
        let score = -negamax(child, depth - 1, -beta, -alpha);

        // Fail high: the opponent will never allow this line.
        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}
