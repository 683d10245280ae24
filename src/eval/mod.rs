//! Evaluation module for Reversi positions
//!
//! The score of a cutoff node combines three bounded signals:
//! - Disc count lead
//! - Mobility lead
//! - Corner ownership

pub mod heuristic;
pub mod weights;

pub use heuristic::{corner_signal, evaluate, CornerTerm};
pub use weights::Weights;
