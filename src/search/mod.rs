//! Search module for Reversi AI
//!
//! Contains:
//! - Alpha-Beta search with a depth and wall-clock cutoff
//! - The clock abstraction the cutoff reads

pub mod alphabeta;
pub mod clock;

pub use alphabeta::{AlphaBeta, SearchOutcome};
pub use clock::{Clock, FixedClock, SystemClock};
