//! Static position evaluation shared by the heuristic strategies.

use flux_othello::bitboard::Bitboard;
use flux_othello::{Board, Color};

/// Classic corner-heavy square weights: corners dominate, the squares
/// adjacent to an empty corner are liabilities, edges are mildly good.
pub const SQUARE_WEIGHTS: [i32; 64] = [
    120, -20, 20, 5, 5, 20, -20, 120, //
    -20, -40, -5, -5, -5, -5, -40, -20, //
    20, -5, 15, 3, 3, 15, -5, 20, //
    5, -5, 3, 3, 3, 3, -5, 5, //
    5, -5, 3, 3, 3, 3, -5, 5, //
    20, -5, 15, 3, 3, 15, -5, 20, //
    -20, -40, -5, -5, -5, -5, -40, -20, //
    120, -20, 20, 5, 5, 20, -20, 120,
];

/// Scale factor putting terminal disc differences far above any weighted sum.
const TERMINAL_WEIGHT: i32 = 10_000;

/// Score `board` from `color`'s point of view: positive is good for `color`.
///
/// Finished games are scored by disc difference alone, scaled past every
/// reachable weighted sum so a won endgame always outranks a pretty middle
/// game.
pub fn evaluate(board: &Board, color: Color) -> i32 {
    if board.is_finished() {
        let (black, white) = board.count_pieces();
        let diff = black as i32 - white as i32;
        return match color {
            Color::Black => diff * TERMINAL_WEIGHT,
            Color::White => -diff * TERMINAL_WEIGHT,
        };
    }

    weighted(board.pieces(color)) - weighted(board.pieces(color.opposite()))
}

fn weighted(mask: Bitboard) -> i32 {
    mask.indices()
        .map(|index| SQUARE_WEIGHTS[index as usize])
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, Color::Black), 0);
        assert_eq!(evaluate(&board, Color::White), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::new();
        assert!(board.make_move("d3".parse().unwrap()));
        assert_eq!(
            evaluate(&board, Color::Black),
            -evaluate(&board, Color::White)
        );
    }

    #[test]
    fn terminal_positions_score_by_discs() {
        // Lone black piece, no white: terminal, black up one disc.
        let board = Board::from_masks(Bitboard::from(1u64), Bitboard::from(0u64), Color::Black);
        assert_eq!(evaluate(&board, Color::Black), TERMINAL_WEIGHT);
        assert_eq!(evaluate(&board, Color::White), -TERMINAL_WEIGHT);
    }
}
