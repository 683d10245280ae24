//! Legal move generation
//!
//! A move is legal when, walking from one of the mover's discs in some
//! direction, the walk crosses one or more opponent discs and then lands on
//! an empty cell. That empty cell is the move.

use crate::board::{Cell, Direction, GameState, Geometry, Player, Pos, DIRECTIONS};

/// Walk one ray from `start` in `dir` and return the empty cell that closes
/// a run of `opponent` discs, if any.
///
/// Returns `None` when the first step is already off the board, when the
/// first cell is not an opponent disc, or when the run ends on the board
/// edge or a non-empty cell.
#[inline]
pub fn scan_ray(
    cells: &[Cell],
    geometry: Geometry,
    opponent: Cell,
    start: usize,
    dir: Direction,
) -> Option<usize> {
    let mut tile = geometry.step(start, dir)?;
    if cells[tile] != opponent {
        return None;
    }

    while cells[tile] == opponent {
        match geometry.step(tile, dir) {
            Some(next) => tile = next,
            None => break,
        }
    }

    cells[tile].is_empty().then_some(tile)
}

/// All legal moves for `player` in scan order (board index, then direction),
/// without duplicates.
///
/// `player` need not be the side to move: the evaluator uses this for the
/// opponent's mobility as well.
pub fn legal_moves(state: &GameState, player: Player) -> Vec<Pos> {
    let geometry = state.geometry();
    let cells = state.cells();
    let own = player.cell();
    let opponent = player.opponent().cell();

    let mut moves = Vec::new();
    for (tile, &cell) in cells.iter().enumerate() {
        if cell != own {
            continue;
        }
        for &dir in &DIRECTIONS {
            if let Some(dest) = scan_ray(cells, geometry, opponent, tile, dir) {
                let pos = Pos::from_index(dest, geometry.width);
                if !moves.contains(&pos) {
                    moves.push(pos);
                }
            }
        }
    }
    moves
}

/// Number of legal moves available to `player`
#[inline]
pub fn mobility(state: &GameState, player: Player) -> usize {
    legal_moves(state, player).len()
}

/// True when the side to move has nothing to play
#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    legal_moves(state, state.to_move()).is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(geometry: Geometry, to_move: Player, text: &str) -> GameState {
        GameState::parse(geometry, to_move, text).unwrap()
    }

    #[test]
    fn test_opening_moves_white() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        let moves = legal_moves(&state, Player::White);
        assert_eq!(
            moves,
            vec![
                Pos::new(5, 3),
                Pos::new(3, 5),
                Pos::new(4, 2),
                Pos::new(2, 4),
            ]
        );
    }

    #[test]
    fn test_opening_moves_black() {
        let state = GameState::opening(Geometry::STANDARD, Player::Black);
        let mut moves = legal_moves(&state, Player::Black);
        moves.sort_by_key(|p| p.to_index(8));
        assert_eq!(
            moves,
            vec![
                Pos::new(3, 2),
                Pos::new(2, 3),
                Pos::new(5, 4),
                Pos::new(4, 5),
            ]
        );
    }

    #[test]
    fn test_no_discs_no_moves() {
        let state = board(
            Geometry::new(4, 4),
            Player::White,
            "....
             .BB.
             .BB.
             ....",
        );
        assert!(legal_moves(&state, Player::White).is_empty());
        assert!(is_terminal(&state));
    }

    #[test]
    fn test_adjacent_empty_is_not_a_move() {
        // White next to an empty cell, no opponent in between
        let state = board(Geometry::new(4, 1), Player::White, "W..B");
        assert!(legal_moves(&state, Player::White).is_empty());
    }

    #[test]
    fn test_run_ending_on_edge_is_not_a_move() {
        let state = board(Geometry::new(4, 1), Player::White, ".WBB");
        assert!(legal_moves(&state, Player::White).is_empty());
        // Black can still play at the far end
        assert_eq!(legal_moves(&state, Player::Black), vec![Pos::new(0, 0)]);
    }

    #[test]
    fn test_run_ending_on_own_disc_is_not_a_move() {
        let state = board(Geometry::new(5, 1), Player::White, "WBW..");
        assert!(legal_moves(&state, Player::White).is_empty());
    }

    #[test]
    fn test_long_run() {
        let state = board(Geometry::new(6, 1), Player::White, "WBBBB.");
        assert_eq!(legal_moves(&state, Player::White), vec![Pos::new(5, 0)]);
    }

    #[test]
    fn test_scan_does_not_wrap_rows() {
        // Row 0 ends with W B, row 1 starts with an empty cell. Without the
        // boundary check the walk east would wrap into row 1.
        let state = board(
            Geometry::new(4, 2),
            Player::White,
            "..WB
             ....",
        );
        assert!(legal_moves(&state, Player::White).is_empty());
    }

    #[test]
    fn test_duplicate_destinations_collapse() {
        // Both white discs reach the middle cell through a black disc
        let state = board(Geometry::new(5, 1), Player::White, "WB.BW");
        assert_eq!(legal_moves(&state, Player::White), vec![Pos::new(2, 0)]);
    }

    #[test]
    fn test_scan_ray_first_step_off_board() {
        let state = board(Geometry::new(3, 1), Player::White, "WB.");
        let west = Direction { dx: -1, dy: 0 };
        let east = Direction { dx: 1, dy: 0 };
        assert_eq!(scan_ray(state.cells(), state.geometry(), Cell::Black, 0, west), None);
        assert_eq!(scan_ray(state.cells(), state.geometry(), Cell::Black, 0, east), Some(2));
    }

    #[test]
    fn test_mobility_counts_both_sides() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        assert_eq!(mobility(&state, Player::White), 4);
        assert_eq!(mobility(&state, Player::Black), 4);
    }
}
