//! Reversi AI Engine
//!
//! A move-selection engine for 8x8 Reversi:
//! - Flat 64-cell board, three cell states
//! - Capture-line move generation over eight directions
//! - Alpha-beta minimax with a wall-clock and depth cutoff
//! - Count / mobility / corner heuristic at cutoff nodes
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Cells, geometry and the immutable game state
//! - [`rules`]: Move generation and state transition
//! - [`eval`]: Position evaluation
//! - [`search`]: Alpha-beta search and its clock
//! - [`engine`]: Engine construction from caller pieces
//! - [`config`]: TOML configuration
//!
//! # Quick Start
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use reversi::{Engine, GameState, Geometry, Player};
//!
//! let board = GameState::opening(Geometry::STANDARD, Player::Black);
//! let engine = Engine::new(Arc::new(Mutex::new(())), 0.1, board.cells(), Player::Black).unwrap();
//!
//! match engine.select_move() {
//!     Ok(pos) => println!("AI plays at {pos}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```
//!
//! # Rule variants
//!
//! Flipping follows [`CaptureRule::FlipToEmpty`] unless configured
//! otherwise: every occupied cell from the placed disc up to the first empty
//! cell changes colour. [`CaptureRule::Bracketed`] gives the conventional
//! Othello rule.

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Cell, GameState, Geometry, Piece, PieceState, Player, Pos, BOARD_WIDTH, BOARD_HEIGHT};
pub use config::EngineConfig;
pub use engine::{Engine, SharedLock};
pub use error::{ConfigError, EngineError};
pub use eval::CornerTerm;
pub use rules::CaptureRule;
pub use search::SearchOutcome;
