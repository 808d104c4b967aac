//! Text game records and replay.
//!
//! A record is the ordered list of move tokens of one game — algebraic
//! squares or the literal `pass` — followed by a result tag (`black`,
//! `white` or `draw`), joined by whitespace:
//!
//! ```text
//! d3 c3 b3 b2 ... black
//! ```
//!
//! Replaying a record against a fresh starting board reproduces the exact
//! masks, turn and hash of direct sequential play.

use crate::board::{Board, Color, Move};
use std::fmt::{self, Display, Formatter};

/// The terminal result tag of a recorded game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    BlackWin,
    WhiteWin,
    Draw,
}

impl GameResult {
    /// The result tag matching a board's piece counts.
    pub fn from_board(board: &Board) -> Self {
        match board.winner() {
            Some(Color::Black) => GameResult::BlackWin,
            Some(Color::White) => GameResult::WhiteWin,
            None => GameResult::Draw,
        }
    }
}

impl Display for GameResult {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::BlackWin => f.write_str("black"),
            GameResult::WhiteWin => f.write_str("white"),
            GameResult::Draw => f.write_str("draw"),
        }
    }
}

impl std::str::FromStr for GameResult {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("black") {
            Ok(GameResult::BlackWin)
        } else if s.eq_ignore_ascii_case("white") {
            Ok(GameResult::WhiteWin)
        } else if s.eq_ignore_ascii_case("draw") {
            Ok(GameResult::Draw)
        } else {
            Err(ParseRecordError::BadResult(s.to_string()))
        }
    }
}

/// A parse failure for the record text format.
#[derive(Debug, PartialEq)]
pub enum ParseRecordError {
    /// The input held no tokens at all.
    Empty,
    /// A move token was neither a square nor "pass".
    BadMove(String),
    /// The final token was not a result tag.
    BadResult(String),
}

impl Display for ParseRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ParseRecordError::Empty => write!(f, "empty game record"),
            ParseRecordError::BadMove(token) => write!(f, "invalid move token {:?}", token),
            ParseRecordError::BadResult(token) => write!(f, "invalid result tag {:?}", token),
        }
    }
}

impl std::error::Error for ParseRecordError {}

/// A recorded move was illegal when replayed.
#[derive(Debug, PartialEq)]
pub struct ReplayError {
    /// Zero-based index of the offending move in the record.
    pub ply: usize,
    pub mv: Move,
}

impl Display for ReplayError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "illegal move {} at ply {}", self.mv, self.ply)
    }
}

impl std::error::Error for ReplayError {}

/// An ordered move list plus a terminal result tag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameRecord {
    moves: Vec<Move>,
    result: GameResult,
}

impl GameRecord {
    pub fn new(moves: Vec<Move>, result: GameResult) -> Self {
        Self { moves, result }
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    /// Replay the record against a fresh starting board, validating every
    /// placement, and return the final state.
    pub fn replay(&self) -> Result<Board, ReplayError> {
        let mut board = Board::new();
        for (ply, &mv) in self.moves.iter().enumerate() {
            if !board.apply(mv) {
                return Err(ReplayError { ply, mv });
            }
        }
        Ok(board)
    }
}

impl Display for GameRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        for mv in &self.moves {
            write!(f, "{} ", mv)?;
        }
        self.result.fmt(f)
    }
}

impl std::str::FromStr for GameRecord {
    type Err = ParseRecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        let (result_token, move_tokens) = tokens.split_last().ok_or(ParseRecordError::Empty)?;

        let result: GameResult = result_token.parse()?;
        let moves = move_tokens
            .iter()
            .map(|token| {
                token
                    .parse::<Move>()
                    .map_err(|_| ParseRecordError::BadMove(token.to_string()))
            })
            .collect::<Result<Vec<Move>, ParseRecordError>>()?;

        Ok(Self { moves, result })
    }
}
