//! Signal weights for Reversi evaluation
//!
//! Each signal is clamped to {-1, 0, +1} (corners to [-4, 4]) before
//! weighting, so the score range is fixed regardless of board size.

/// Evaluation weights
pub struct Weights;

impl Weights {
    /// Disc-count lead
    pub const COUNT: f64 = 2.0;
    /// Mobility lead (number of legal moves)
    pub const MOBILITY: f64 = 1.5;
    /// Per-corner contribution
    pub const CORNER: f64 = 0.5;

    /// Largest magnitude a symmetric evaluation can reach
    pub const MAX_SCORE: f64 = Self::COUNT + Self::MOBILITY + 4.0 * Self::CORNER;
}
