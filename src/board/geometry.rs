//! Grid dimensions, the eight line directions, and the boundary predicate

use super::{BOARD_HEIGHT, BOARD_WIDTH};

/// A single step on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

/// The four diagonal and four orthogonal steps, scanned in this order
pub const DIRECTIONS: [Direction; 8] = [
    Direction { dx: -1, dy: -1 },
    Direction { dx: 0, dy: -1 },
    Direction { dx: 1, dy: -1 },
    Direction { dx: -1, dy: 0 },
    Direction { dx: 1, dy: 0 },
    Direction { dx: -1, dy: 1 },
    Direction { dx: 0, dy: 1 },
    Direction { dx: 1, dy: 1 },
];

/// Board dimensions. The standard game uses [`Geometry::STANDARD`]; smaller
/// grids are used for exhaustive search tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Geometry {
    pub width: usize,
    pub height: usize,
}

impl Geometry {
    pub const STANDARD: Geometry = Geometry {
        width: BOARD_WIDTH,
        height: BOARD_HEIGHT,
    };

    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    #[inline]
    pub const fn cells(&self) -> usize {
        self.width * self.height
    }

    /// Flat index offset of one step in `dir`
    #[inline]
    pub fn offset(&self, dir: Direction) -> isize {
        dir.dy as isize * self.width as isize + dir.dx as isize
    }

    /// True when stepping from `index` by `dir` would leave the grid or wrap
    /// across a row edge.
    #[inline]
    pub fn is_boundary_overrun(&self, index: usize, dir: Direction) -> bool {
        if index >= self.cells() {
            return true;
        }
        let col = (index % self.width) as isize + dir.dx as isize;
        let row = (index / self.width) as isize + dir.dy as isize;
        col < 0 || col >= self.width as isize || row < 0 || row >= self.height as isize
    }

    /// Index one step from `index` in `dir`, or `None` past the edge
    #[inline]
    pub fn step(&self, index: usize, dir: Direction) -> Option<usize> {
        if self.is_boundary_overrun(index, dir) {
            None
        } else {
            Some((index as isize + self.offset(dir)) as usize)
        }
    }

    /// Indices of the four corners: top-left, top-right, bottom-left, bottom-right
    pub const fn corners(&self) -> [usize; 4] {
        [
            0,
            self.width - 1,
            (self.height - 1) * self.width,
            self.width * self.height - 1,
        ]
    }
}

impl Default for Geometry {
    fn default() -> Self {
        Self::STANDARD
    }
}
