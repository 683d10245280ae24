//! Piece collaborator: anything that can report what occupies a square

use super::Cell;

/// State reported by a board piece.
///
/// `Move` marks a square highlighted as a candidate move; for search purposes
/// it is an empty square.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceState {
    Board,
    Move,
    White,
    Black,
}

impl PieceState {
    #[inline]
    pub fn cell(self) -> Cell {
        match self {
            PieceState::Board | PieceState::Move => Cell::Empty,
            PieceState::White => Cell::White,
            PieceState::Black => Cell::Black,
        }
    }
}

/// A square on the caller's board
pub trait Piece {
    fn state(&self) -> PieceState;
}

impl Piece for PieceState {
    fn state(&self) -> PieceState {
        *self
    }
}

impl Piece for Cell {
    fn state(&self) -> PieceState {
        match self {
            Cell::Empty => PieceState::Board,
            Cell::White => PieceState::White,
            Cell::Black => PieceState::Black,
        }
    }
}
