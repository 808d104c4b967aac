//! Interactive driving loop: alternates two players over one game, prints
//! the board as it evolves and the record line at the end.
//!
//! Usage: `play [BLACK] [WHITE]` where each side is one of
//! `human`, `random`, `greedy`, `minimax`. Defaults: `human minimax`.

use flux_othello::{Board, Color, GameRecord, GameResult, Move};
use flux_player::{GreedyPlayer, MinimaxPlayer, Player, RandomPlayer};
use std::io::Write;

/// Prompts on stdin until it gets a parseable, legal move.
struct HumanPlayer;

impl Player for HumanPlayer {
    fn choose_move(&mut self, board: &Board) -> Move {
        loop {
            print!("Enter a move: ");
            std::io::stdout().flush().unwrap();

            let mut input_line = String::new();
            if std::io::stdin().read_line(&mut input_line).unwrap() == 0 {
                // Stdin closed; concede the turn.
                return Move::Pass;
            }

            let mv = match input_line.trim().parse::<Move>() {
                Ok(mv) => mv,
                Err(_) => {
                    println!("Cannot parse move.");
                    continue;
                }
            };

            match mv {
                Move::Pass if board.get_moves().is_empty() => return Move::Pass,
                Move::Pass => {
                    println!("You have legal moves: {}", board.get_moves());
                }
                Move::Place(pos) if board.is_legal(pos) => return mv,
                Move::Place(_) if board.get_moves().is_empty() => {
                    println!("Invalid move. Please enter 'pass'.");
                }
                Move::Place(_) => {
                    println!("Invalid move. Legal moves: {}", board.get_moves());
                }
            }
        }
    }
}

fn player_for(kind: &str) -> Option<Box<dyn Player>> {
    match kind {
        "human" => Some(Box::new(HumanPlayer)),
        "random" => Some(Box::new(RandomPlayer::new())),
        "greedy" => Some(Box::new(GreedyPlayer::new())),
        "minimax" => Some(Box::new(MinimaxPlayer::new(5))),
        _ => None,
    }
}

fn player_or_exit(kind: &str) -> Box<dyn Player> {
    player_for(kind).unwrap_or_else(|| {
        eprintln!(
            "Unknown player kind {:?} (expected human, random, greedy or minimax).",
            kind
        );
        std::process::exit(2);
    })
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let black_kind = args.get(1).map(String::as_str).unwrap_or("human");
    let white_kind = args.get(2).map(String::as_str).unwrap_or("minimax");

    let mut black = player_or_exit(black_kind);
    let mut white = player_or_exit(white_kind);

    let mut board = Board::new();
    let mut moves = Vec::new();

    while !board.is_finished() {
        println!("\n{}\n", board);
        println!("{} to move.", board.to_move());

        let mv = match board.to_move() {
            Color::Black => black.choose_move(&board),
            Color::White => white.choose_move(&board),
        };

        let mover = board.to_move();
        if board.apply(mv) {
            println!("{} plays {}.", mover, mv);
            moves.push(mv);
        } else {
            // A broken strategy; treat it as a pass rather than looping.
            eprintln!("{} produced the illegal move {}; passing.", mover, mv);
            board.pass();
            moves.push(Move::Pass);
        }
    }

    println!("\n{}\n", board);
    let (black_count, white_count) = board.count_pieces();
    println!("Final score: Black {} - White {}.", black_count, white_count);
    match board.winner() {
        Some(color) => println!("Winner: {}.", color),
        None => println!("Draw."),
    }

    let record = GameRecord::new(moves, GameResult::from_board(&board));
    println!("Record: {}", record);
}
