//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Wire token for this mark.
    pub fn token(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A square on the tic-tac-toe board.
///
/// On the wire an empty square is `""` (a bare `0` is also accepted when
/// reading), an occupied one is the mark token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Wire token for this square.
    pub fn token(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(player) => player.token(),
        }
    }

    /// Reads a string token. Only `""`, `"X"` and `"O"` are squares.
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "" => Some(Square::Empty),
            "X" => Some(Square::Occupied(Player::X)),
            "O" => Some(Square::Occupied(Player::O)),
            _ => None,
        }
    }
}

impl Serialize for Square {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.token())
    }
}

struct SquareVisitor;

impl Visitor<'_> for SquareVisitor {
    type Value = Square;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(r#"one of "", 0, "X" or "O""#)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Square, E> {
        Square::from_token(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Square, E> {
        match v {
            0 => Ok(Square::Empty),
            _ => Err(E::invalid_value(de::Unexpected::Unsigned(v), &self)),
        }
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Square, E> {
        match v {
            0 => Ok(Square::Empty),
            _ => Err(E::invalid_value(de::Unexpected::Signed(v), &self)),
        }
    }
}

impl<'de> Deserialize<'de> for Square {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SquareVisitor)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Serializes as three rows of three square tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(from = "[[Square; 3]; 3]", into = "[[Square; 3]; 3]")]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from three rows.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut squares = [Square::Empty; 9];
        for (row, cells) in rows.iter().enumerate() {
            squares[row * 3..row * 3 + 3].copy_from_slice(cells);
        }
        Self { squares }
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Square; 3]; 3] {
        [
            [self.squares[0], self.squares[1], self.squares[2]],
            [self.squares[3], self.squares[4], self.squares[5]],
            [self.squares[6], self.squares[7], self.squares[8]],
        ]
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Number of occupied squares.
    pub fn occupied(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their `row,col` coordinate so a player can read
    /// off the move to type.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (row, cells) in self.rows().iter().enumerate() {
            for (col, square) in cells.iter().enumerate() {
                let symbol = match square {
                    Square::Empty => format!("{},{}", row, col),
                    Square::Occupied(player) => format!(" {} ", player),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n---+---+---\n");
            }
        }
        result
    }
}

impl From<[[Square; 3]; 3]> for Board {
    fn from(rows: [[Square; 3]; 3]) -> Self {
        Self::from_rows(rows)
    }
}

impl From<Board> for [[Square; 3]; 3] {
    fn from(board: Board) -> Self {
        board.rows()
    }
}

/// Outcome of a board, always derived from its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameOutcome {
    /// No line complete and at least one empty square.
    Ongoing,
    /// A player completed a line.
    Win(Player),
    /// Every square is occupied and no line is complete.
    Draw,
}

impl GameOutcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameOutcome::Win(player) => Some(*player),
            GameOutcome::Ongoing | GameOutcome::Draw => None,
        }
    }

    /// Returns true once no further moves are accepted.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Ongoing => write!(f, "Ongoing"),
            GameOutcome::Win(player) => write!(f, "Player {} wins", player),
            GameOutcome::Draw => write!(f, "Draw"),
        }
    }
}
