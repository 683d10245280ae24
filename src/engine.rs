//! Main AI Engine: builds the root position from the caller's pieces and
//! runs the alpha-beta search on it.
//!
//! # Example
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use reversi::{Cell, Engine, GameState, Geometry, Player};
//!
//! let opening = GameState::opening(Geometry::STANDARD, Player::Black);
//! let lock = Arc::new(Mutex::new(()));
//! let engine = Engine::new(lock, 0.05, opening.cells(), Player::Black).unwrap();
//!
//! let pos = engine.select_move().unwrap();
//! assert_eq!(opening.get(pos), Cell::Empty);
//! ```

use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::board::{GameState, Geometry, Piece, Player, Pos};
use crate::config::EngineConfig;
use crate::error::EngineError;
use crate::search::{AlphaBeta, Clock, SearchOutcome, SystemClock};

/// Lock handed to the engine by its caller.
///
/// The search never takes it. It travels with the engine so a UI thread and
/// a search thread can agree on who may touch the caller's pieces.
pub type SharedLock = Arc<Mutex<()>>;

/// Main AI Engine for Reversi.
///
/// The root position is captured at construction; [`Engine::select_move`]
/// takes `&self` and keeps all per-search state on its own stack, so one
/// engine may be shared across threads.
pub struct Engine {
    lock: SharedLock,
    root: GameState,
    searcher: AlphaBeta,
    time_budget: Duration,
    clock: Arc<dyn Clock>,
}

impl Engine {
    /// Create an engine on the standard board with default rules.
    ///
    /// # Arguments
    ///
    /// * `lock` - Caller's coordination lock, carried but never taken
    /// * `time_budget_secs` - Wall-clock budget per search, in seconds
    /// * `pieces` - 64 pieces in row-major order
    /// * `first_player` - Colour to move; the search maximizes for it
    pub fn new<P: Piece>(
        lock: SharedLock,
        time_budget_secs: f64,
        pieces: &[P],
        first_player: Player,
    ) -> Result<Self, EngineError> {
        let config = EngineConfig {
            time_budget_secs,
            ..EngineConfig::default()
        };
        Self::with_config(lock, pieces, first_player, config)
    }

    /// Create an engine on the standard board with explicit configuration.
    pub fn with_config<P: Piece>(
        lock: SharedLock,
        pieces: &[P],
        first_player: Player,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        let root = GameState::from_pieces(Geometry::STANDARD, first_player, pieces)?;
        Self::from_state(lock, root, config)
    }

    /// Create an engine for an already-built position of any geometry.
    pub fn from_state(
        lock: SharedLock,
        root: GameState,
        config: EngineConfig,
    ) -> Result<Self, EngineError> {
        config.validate()?;
        Ok(Self {
            lock,
            root,
            searcher: AlphaBeta::from_config(&config),
            time_budget: config.time_budget(),
            clock: Arc::new(SystemClock),
        })
    }

    /// Replace the time source used for the deadline.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[inline]
    pub fn lock(&self) -> &SharedLock {
        &self.lock
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.root
    }

    /// The colour the search maximizes for
    #[inline]
    pub fn first_player(&self) -> Player {
        self.root.to_move()
    }

    #[inline]
    pub fn time_budget(&self) -> Duration {
        self.time_budget
    }

    #[inline]
    pub fn searcher(&self) -> &AlphaBeta {
        &self.searcher
    }

    /// Best move for the first player.
    ///
    /// Returns [`EngineError::NoLegalMoves`] when the first player has
    /// nothing to play; whether that means a pass or the end of the game is
    /// for the caller to decide.
    pub fn select_move(&self) -> Result<Pos, EngineError> {
        self.select_move_with_stats().map(|outcome| outcome.best_move)
    }

    /// Best move plus search statistics.
    pub fn select_move_with_stats(&self) -> Result<SearchOutcome, EngineError> {
        self.searcher
            .search(&self.root, self.time_budget, self.clock.as_ref())
    }
}

impl std::fmt::Debug for Engine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Engine")
            .field("root", &self.root)
            .field("searcher", &self.searcher)
            .field("time_budget", &self.time_budget)
            .finish_non_exhaustive()
    }
}
