//! Alpha-Beta search with a wall-clock and depth cutoff
//!
//! This module implements the core search algorithm for the Reversi AI.
//! It is a plain two-function minimax (separate max and min layers) with
//! alpha-beta pruning. There is no move ordering, no transposition table and
//! no iterative deepening: the tree is walked depth-first until a node fails
//! the cutoff test, where the heuristic evaluation is substituted.
//!
//! # Perspectives
//!
//! The side to move at the root is the *first* player. Max layers are the
//! first player's turns and score cutoff nodes from the first player's point
//! of view. Min layers are the opponent's turns and score cutoff nodes from
//! the opponent's point of view.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use reversi::board::{GameState, Geometry, Player};
//! use reversi::search::{AlphaBeta, SystemClock};
//!
//! let searcher = AlphaBeta::default();
//! let state = GameState::opening(Geometry::STANDARD, Player::Black);
//!
//! let outcome = searcher
//!     .search(&state, Duration::from_millis(50), &SystemClock)
//!     .unwrap();
//! println!("Best move: {}", outcome.best_move);
//! ```

use std::time::{Duration, Instant};

use crate::board::{GameState, Player, Pos};
use crate::config::{EngineConfig, DEFAULT_MAX_DEPTH};
use crate::error::EngineError;
use crate::eval::{evaluate, CornerTerm};
use crate::rules::{apply_move, legal_moves, CaptureRule};

use super::Clock;

/// Infinity score for alpha-beta bounds. A node with no moves backs up the
/// identity of its layer, so it can reach the root.
const INF: f64 = f64::INFINITY;

/// Result of one root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Chosen root move
    pub best_move: Pos,
    /// Backed-up value of the chosen move
    pub score: f64,
    /// Backed-up value of every root move, in generation order
    pub root_scores: Vec<(Pos, f64)>,
    /// Max and min nodes visited
    pub nodes: u64,
    /// Nodes scored by the heuristic instead of being expanded
    pub cutoffs: u64,
    /// Time spent, as measured by the search clock
    pub elapsed: Duration,
}

/// Per-call search state. Threaded through the recursion so the searcher
/// itself stays immutable and one searcher can serve concurrent calls.
struct SearchContext<'a> {
    clock: &'a dyn Clock,
    /// `None` when the budget overflows `Instant`
    deadline: Option<Instant>,
    first: Player,
    second: Player,
    nodes: u64,
    cutoffs: u64,
}

impl SearchContext<'_> {
    #[inline]
    fn out_of_time(&self) -> bool {
        match self.deadline {
            Some(deadline) => self.clock.now() > deadline,
            None => false,
        }
    }
}

/// Alpha-beta searcher.
///
/// Holds only configuration; every call to [`AlphaBeta::search`] is self
/// contained.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlphaBeta {
    max_depth: u32,
    capture_rule: CaptureRule,
    corner_term: CornerTerm,
}

impl Default for AlphaBeta {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DEPTH, CaptureRule::default(), CornerTerm::default())
    }
}

impl AlphaBeta {
    #[must_use]
    pub fn new(max_depth: u32, capture_rule: CaptureRule, corner_term: CornerTerm) -> Self {
        Self {
            max_depth,
            capture_rule,
            corner_term,
        }
    }

    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self::new(config.max_depth, config.capture_rule, config.corner_term)
    }

    #[inline]
    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    #[inline]
    pub fn capture_rule(&self) -> CaptureRule {
        self.capture_rule
    }

    #[inline]
    pub fn corner_term(&self) -> CornerTerm {
        self.corner_term
    }

    /// Choose a move for the side to move in `root`.
    ///
    /// The deadline is fixed once, before the root moves are generated, and
    /// shared by every root move: a slow early move leaves less time for the
    /// later ones. Each root move is valued as a min node searched with a
    /// full window. Ties go to the move generated first.
    ///
    /// Fails with [`EngineError::NoLegalMoves`] without searching when the
    /// side to move has nothing to play.
    pub fn search(
        &self,
        root: &GameState,
        budget: Duration,
        clock: &dyn Clock,
    ) -> Result<SearchOutcome, EngineError> {
        let start = clock.now();
        let first = root.to_move();
        let mut ctx = SearchContext {
            clock,
            deadline: start.checked_add(budget),
            first,
            second: first.opponent(),
            nodes: 0,
            cutoffs: 0,
        };

        let actions = legal_moves(root, first);
        if actions.is_empty() {
            return Err(EngineError::NoLegalMoves { player: first });
        }

        let mut root_scores = Vec::with_capacity(actions.len());
        let mut best: Option<(Pos, f64)> = None;
        for action in actions {
            let child = apply_move(root, action, self.capture_rule);
            let value = self.min_value(&mut ctx, 0, &child, -INF, INF);
            log::debug!("root move {action}: {value}");

            root_scores.push((action, value));
            if best.map_or(true, |(_, v)| value > v) {
                best = Some((action, value));
            }
        }

        let (best_move, score) = best.ok_or(EngineError::NoLegalMoves { player: first })?;
        let end = clock.now();
        let elapsed = end.saturating_duration_since(start);

        if let Some(deadline) = ctx.deadline {
            if end > deadline {
                log::warn!(
                    "search overran its budget by {:?}",
                    end.saturating_duration_since(deadline)
                );
            }
        }
        log::info!(
            "{first} plays {best_move} (score {score}, nodes {}, cutoffs {}, empties {}, {:?})",
            ctx.nodes,
            ctx.cutoffs,
            crate::eval::heuristic::empties(root),
            elapsed
        );

        Ok(SearchOutcome {
            best_move,
            score,
            root_scores,
            nodes: ctx.nodes,
            cutoffs: ctx.cutoffs,
            elapsed,
        })
    }

    /// Depth or time exhausted. Checked once per node, never mid-expansion.
    #[inline]
    fn cutoff_test(&self, ctx: &SearchContext<'_>, depth: u32) -> bool {
        depth > self.max_depth || ctx.out_of_time()
    }

    fn max_value(
        &self,
        ctx: &mut SearchContext<'_>,
        depth: u32,
        state: &GameState,
        mut alpha: f64,
        beta: f64,
    ) -> f64 {
        ctx.nodes += 1;
        if self.cutoff_test(ctx, depth) {
            ctx.cutoffs += 1;
            return evaluate(state, ctx.first, self.corner_term);
        }

        let mut value = -INF;
        for action in legal_moves(state, state.to_move()) {
            let child = apply_move(state, action, self.capture_rule);
            value = value.max(self.min_value(ctx, depth + 1, &child, alpha, beta));
            if value >= beta {
                return value;
            }
            alpha = alpha.max(value);
        }

        value
    }

    fn min_value(
        &self,
        ctx: &mut SearchContext<'_>,
        depth: u32,
        state: &GameState,
        alpha: f64,
        mut beta: f64,
    ) -> f64 {
        ctx.nodes += 1;
        if self.cutoff_test(ctx, depth) {
            ctx.cutoffs += 1;
            return evaluate(state, ctx.second, self.corner_term);
        }

        let mut value = INF;
        for action in legal_moves(state, state.to_move()) {
            let child = apply_move(state, action, self.capture_rule);
            value = value.min(self.max_value(ctx, depth + 1, &child, alpha, beta));
            if value <= alpha {
                return value;
            }
            beta = beta.min(value);
        }

        value
    }
}
