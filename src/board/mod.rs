//! Board representation for Reversi

pub mod geometry;
pub mod piece;
pub mod state;


// Re-exports
pub use geometry::{Direction, Geometry, DIRECTIONS};
pub use piece::{Piece, PieceState};
pub use state::GameState;

/// Standard board width
pub const BOARD_WIDTH: usize = 8;
/// Standard board height
pub const BOARD_HEIGHT: usize = 8;
pub const TOTAL_CELLS: usize = BOARD_WIDTH * BOARD_HEIGHT; // 64

/// Cell contents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    #[inline]
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Character used by the text board format
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::White => 'W',
            Cell::Black => 'B',
        }
    }

    pub fn from_symbol(c: char) -> Option<Cell> {
        match c {
            '.' => Some(Cell::Empty),
            'W' | 'w' => Some(Cell::White),
            'B' | 'b' => Some(Cell::Black),
            _ => None,
        }
    }
}

/// Side to move. Never empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Player {
    #[value(alias = "w")]
    White,
    #[value(alias = "b")]
    Black,
}

impl Player {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Player {
        match self {
            Player::White => Player::Black,
            Player::Black => Player::White,
        }
    }

    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            Player::White => Cell::White,
            Player::Black => Cell::Black,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Player::White => f.write_str("white"),
            Player::Black => f.write_str("black"),
        }
    }
}

/// A move: the (column, row) of the empty cell being claimed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    #[inline]
    pub fn to_index(self, width: usize) -> usize {
        self.row as usize * width + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize, width: usize) -> Self {
        Self {
            col: (idx % width) as u8,
            row: (idx / width) as u8,
        }
    }
}

impl std::fmt::Display for Pos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
