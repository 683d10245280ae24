//! Immutable game state explored by the search

use std::fmt;
use std::sync::Arc;

use super::{Cell, Geometry, Piece, Player, Pos};
use crate::error::EngineError;
use crate::rules::{self, CaptureRule};

/// Side to move plus the flat row-major cell array.
///
/// States are never mutated once built: every transition produces a new
/// state, so a parent can be shared freely while its children are explored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    to_move: Player,
    cells: Arc<[Cell]>,
    geometry: Geometry,
}

impl GameState {
    /// Build a state from explicit cells. Fails if the cell count does not
    /// match the geometry.
    pub fn new(geometry: Geometry, to_move: Player, cells: Vec<Cell>) -> Result<Self, EngineError> {
        if cells.len() != geometry.cells() {
            return Err(EngineError::InvalidBoard(format!(
                "expected {} cells for a {}x{} board, got {}",
                geometry.cells(),
                geometry.width,
                geometry.height,
                cells.len()
            )));
        }
        Ok(Self::from_parts(geometry, to_move, cells))
    }

    /// Build a state from the caller's piece collection (row-major)
    pub fn from_pieces<P: Piece>(
        geometry: Geometry,
        to_move: Player,
        pieces: &[P],
    ) -> Result<Self, EngineError> {
        let cells = pieces.iter().map(|p| p.state().cell()).collect();
        Self::new(geometry, to_move, cells)
    }

    /// The four-disc opening: White on the main diagonal of the centre
    /// square, Black on the anti-diagonal.
    pub fn opening(geometry: Geometry, to_move: Player) -> Self {
        let mut cells = vec![Cell::Empty; geometry.cells()];
        let (cx, cy) = (geometry.width / 2, geometry.height / 2);
        let w = geometry.width;
        cells[(cy - 1) * w + cx - 1] = Cell::White;
        cells[(cy - 1) * w + cx] = Cell::Black;
        cells[cy * w + cx - 1] = Cell::Black;
        cells[cy * w + cx] = Cell::White;
        Self::from_parts(geometry, to_move, cells)
    }

    /// Parse the text board format: `.` empty, `W` white, `B` black, one
    /// row per line; whitespace is ignored.
    pub fn parse(geometry: Geometry, to_move: Player, text: &str) -> Result<Self, EngineError> {
        let cells = text
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| {
                Cell::from_symbol(c)
                    .ok_or_else(|| EngineError::InvalidBoard(format!("unexpected character '{c}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(geometry, to_move, cells)
    }

    pub(crate) fn from_parts(geometry: Geometry, to_move: Player, cells: Vec<Cell>) -> Self {
        debug_assert_eq!(cells.len(), geometry.cells());
        Self {
            to_move,
            cells: cells.into(),
            geometry,
        }
    }

    #[inline]
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    #[inline]
    pub fn geometry(&self) -> Geometry {
        self.geometry
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.cells[pos.to_index(self.geometry.width)]
    }

    /// Number of cells holding `cell`
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// Same cells with the other side to move
    pub fn with_turn(&self, to_move: Player) -> Self {
        Self {
            to_move,
            cells: Arc::clone(&self.cells),
            geometry: self.geometry,
        }
    }

    /// Play `pos` for the side to move, rejecting moves not produced by the
    /// move generator.
    pub fn play(&self, pos: Pos, rule: CaptureRule) -> Result<Self, EngineError> {
        if !rules::legal_moves(self, self.to_move).contains(&pos) {
            return Err(EngineError::IllegalMove { pos });
        }
        Ok(rules::apply_move(self, pos, rule))
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.geometry.width) {
            let line: String = row.iter().map(|c| c.symbol()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
