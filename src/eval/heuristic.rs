//! Heuristic evaluation function for Reversi positions
//!
//! This module provides the evaluation used at cutoff nodes of the search.
//! It never inspects move history; the score is a pure function of the cell
//! counts, both sides' mobility, and who holds the corners.

use std::fmt;

use clap::ValueEnum;
use serde::Deserialize;

use crate::board::{Cell, GameState, Player};
use crate::rules::mobility;

use super::Weights;

/// How opponent-held corners are scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
#[value(rename_all = "kebab-case")]
pub enum CornerTerm {
    /// +1 for each corner held by the player, -1 for each held by the opponent.
    #[default]
    Symmetric,
    /// Player corners count +1. An opponent on the top-left corner counts -1,
    /// but an opponent on any of the other three corners counts +1.
    Legacy,
}

impl fmt::Display for CornerTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CornerTerm::Symmetric => f.write_str("symmetric"),
            CornerTerm::Legacy => f.write_str("legacy"),
        }
    }
}

/// -1, 0 or +1 depending on which side of the comparison is larger
#[inline]
fn sign(a: usize, b: usize) -> i32 {
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => 1,
        std::cmp::Ordering::Equal => 0,
        std::cmp::Ordering::Less => -1,
    }
}

/// Sum of the four corner contributions for `player`
pub fn corner_signal(state: &GameState, player: Player, term: CornerTerm) -> i32 {
    let own = player.cell();
    let opponent = player.opponent().cell();
    let cells = state.cells();

    state
        .geometry()
        .corners()
        .iter()
        .enumerate()
        .map(|(i, &idx)| match cells[idx] {
            c if c == own => 1,
            c if c == opponent => match term {
                CornerTerm::Symmetric => -1,
                CornerTerm::Legacy if i == 0 => -1,
                CornerTerm::Legacy => 1,
            },
            _ => 0,
        })
        .sum()
}

/// Evaluate `state` from the perspective of `player`.
///
/// Returns `2 * count + 1.5 * mobility + 0.5 * corners`, where count and
/// mobility are the signs of `player`'s lead. Positive values favour
/// `player`. With [`CornerTerm::Symmetric`] the result lies in
/// `[-Weights::MAX_SCORE, Weights::MAX_SCORE]` and
/// `evaluate(s, p) == -evaluate(s, p.opponent())`.
#[must_use]
pub fn evaluate(state: &GameState, player: Player, term: CornerTerm) -> f64 {
    let opponent = player.opponent();

    let count = sign(state.count(player.cell()), state.count(opponent.cell()));
    let moves = sign(mobility(state, player), mobility(state, opponent));
    let corners = corner_signal(state, player, term);

    f64::from(count) * Weights::COUNT
        + f64::from(moves) * Weights::MOBILITY
        + f64::from(corners) * Weights::CORNER
}

/// Number of empty cells, used in search diagnostics
#[inline]
pub(crate) fn empties(state: &GameState) -> usize {
    state.count(Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Geometry;

    fn board(geometry: Geometry, text: &str) -> GameState {
        GameState::parse(geometry, Player::White, text).unwrap()
    }

    #[test]
    fn test_evaluate_opening_is_zero() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        assert_eq!(evaluate(&state, Player::White, CornerTerm::Symmetric), 0.0);
        assert_eq!(evaluate(&state, Player::Black, CornerTerm::Symmetric), 0.0);
    }

    #[test]
    fn test_evaluate_count_lead() {
        // White has more discs; neither side can move
        let state = board(Geometry::new(4, 1), ".WW.");
        assert_eq!(evaluate(&state, Player::White, CornerTerm::Symmetric), 2.0);
        assert_eq!(evaluate(&state, Player::Black, CornerTerm::Symmetric), -2.0);
    }

    #[test]
    fn test_evaluate_mobility_lead() {
        // Equal discs, no corners; black's discs are pinned against white
        // discs on the edge so only white can move
        let state = board(
            Geometry::new(4, 4),
            "....
             WB..
             WB..
             ....",
        );
        assert_eq!(mobility(&state, Player::White), 4);
        assert_eq!(mobility(&state, Player::Black), 0);
        assert_eq!(evaluate(&state, Player::White, CornerTerm::Symmetric), 1.5);
        assert_eq!(evaluate(&state, Player::Black, CornerTerm::Symmetric), -1.5);
    }

    #[test]
    fn test_corner_signal_symmetric() {
        let state = board(
            Geometry::new(4, 4),
            "W..B
             ....
             ....
             B..W",
        );
        assert_eq!(corner_signal(&state, Player::White, CornerTerm::Symmetric), 0);

        let state = board(
            Geometry::new(4, 4),
            "W..W
             ....
             ....
             B..W",
        );
        assert_eq!(corner_signal(&state, Player::White, CornerTerm::Symmetric), 2);
        assert_eq!(corner_signal(&state, Player::Black, CornerTerm::Symmetric), -2);
    }

    #[test]
    fn test_corner_signal_legacy() {
        // Black holds every corner
        let state = board(
            Geometry::new(4, 4),
            "B..B
             ....
             ....
             B..B",
        );
        assert_eq!(corner_signal(&state, Player::White, CornerTerm::Symmetric), -4);
        // Top-left counts against white, the other three count for white
        assert_eq!(corner_signal(&state, Player::White, CornerTerm::Legacy), 2);
        assert_eq!(corner_signal(&state, Player::Black, CornerTerm::Legacy), 4);
    }

    #[test]
    fn test_evaluate_antisymmetric() {
        let texts = [
            "W..B\n.WB.\n.BB.\nB..W",
            "....\n.WWW\n.BW.\n....",
            "BBBB\nWWW.\n....\n...W",
        ];
        for text in texts {
            let state = board(Geometry::new(4, 4), text);
            let w = evaluate(&state, Player::White, CornerTerm::Symmetric);
            let b = evaluate(&state, Player::Black, CornerTerm::Symmetric);
            assert_eq!(w, -b, "asymmetric score for\n{state}");
        }
    }

    #[test]
    fn test_evaluate_bounded() {
        let state = board(
            Geometry::new(4, 4),
            "W..W
             .WB.
             .WW.
             W..W",
        );
        let score = evaluate(&state, Player::White, CornerTerm::Symmetric);
        assert!(score <= Weights::MAX_SCORE);
        assert!(score >= -Weights::MAX_SCORE);
    }

    #[test]
    fn test_empties() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        assert_eq!(empties(&state), 60);
    }
}
