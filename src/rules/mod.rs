//! Reversi move rules
//!
//! This module implements the two rule primitives the search is built on:
//! - Move generation (capture-line scan outward from the mover's discs)
//! - State transition (placing a disc and flipping lines)

pub mod capture;
pub mod moves;

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

// Re-exports for convenient access
pub use capture::apply_move;
pub use moves::{is_terminal, legal_moves, mobility, scan_ray};

/// How a placed disc flips the lines radiating from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum CaptureRule {
    /// Flip every occupied cell along each direction up to the first empty
    /// cell or the board edge, whoever owns it.
    #[default]
    FlipToEmpty,
    /// Conventional Othello: flip a run of opponent discs only when it is
    /// closed off by one of the mover's own discs.
    Bracketed,
}

impl fmt::Display for CaptureRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaptureRule::FlipToEmpty => f.write_str("flip-to-empty"),
            CaptureRule::Bracketed => f.write_str("bracketed"),
        }
    }
}
