//! State transition: place a disc and flip the lines radiating from it
//!
//! Two flipping rules are supported (see [`CaptureRule`]):
//!
//! - `FlipToEmpty`: from the placed disc, every occupied cell in each
//!   direction is turned to the mover's colour until the walk reaches an
//!   empty cell (left untouched) or the board edge.
//! - `Bracketed`: a run of opponent discs is flipped only when it is closed
//!   by one of the mover's discs.

use crate::board::{Cell, Direction, GameState, Geometry, Pos, DIRECTIONS};

use super::CaptureRule;

/// Apply `pos` for the side to move and return the child state with the turn
/// passed to the opponent.
///
/// `pos` must be one of [`legal_moves`](super::legal_moves) for `state`.
/// Passing anything else is a contract violation; only the destination
/// being empty is checked, and only in debug builds.
#[must_use]
pub fn apply_move(state: &GameState, pos: Pos, rule: CaptureRule) -> GameState {
    let geometry = state.geometry();
    let player = state.to_move();
    let own = player.cell();
    let dest = pos.to_index(geometry.width);

    let mut cells = state.cells().to_vec();
    debug_assert!(cells[dest].is_empty(), "move {pos} targets an occupied cell");
    cells[dest] = own;

    for &dir in &DIRECTIONS {
        match rule {
            CaptureRule::FlipToEmpty => flip_to_empty(&mut cells, geometry, dest, dir, own),
            CaptureRule::Bracketed => flip_bracketed(&mut cells, geometry, dest, dir, own),
        }
    }

    GameState::from_parts(geometry, player.opponent(), cells)
}

fn flip_to_empty(cells: &mut [Cell], geometry: Geometry, dest: usize, dir: Direction, own: Cell) {
    let Some(mut tile) = geometry.step(dest, dir) else {
        return;
    };

    while !cells[tile].is_empty() {
        cells[tile] = own;
        match geometry.step(tile, dir) {
            Some(next) => tile = next,
            None => break,
        }
    }
}

fn flip_bracketed(cells: &mut [Cell], geometry: Geometry, dest: usize, dir: Direction, own: Cell) {
    let mut run = Vec::new();
    let mut cursor = geometry.step(dest, dir);

    while let Some(tile) = cursor {
        match cells[tile] {
            Cell::Empty => return,
            c if c == own => {
                for &t in &run {
                    cells[t] = own;
                }
                return;
            }
            _ => run.push(tile),
        }
        cursor = geometry.step(tile, dir);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Player;
    use crate::rules::legal_moves;

    fn board(geometry: Geometry, to_move: Player, text: &str) -> GameState {
        GameState::parse(geometry, to_move, text).unwrap()
    }

    #[test]
    fn test_opening_move_flips_one_disc() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        let next = apply_move(&state, Pos::new(5, 3), CaptureRule::FlipToEmpty);

        assert_eq!(next.to_move(), Player::Black);
        assert_eq!(next.get(Pos::new(5, 3)), Cell::White);
        assert_eq!(next.get(Pos::new(4, 3)), Cell::White);
        assert_eq!(next.count(Cell::White), 4);
        assert_eq!(next.count(Cell::Black), 1);
    }

    #[test]
    fn test_parent_state_untouched() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        let before = state.clone();
        let _ = apply_move(&state, Pos::new(5, 3), CaptureRule::FlipToEmpty);
        assert_eq!(state, before);
    }

    #[test]
    fn test_flip_to_empty_passes_through_own_discs() {
        // W places at 0: B W B are all flipped until the empty cell at 4
        let state = board(Geometry::new(6, 1), Player::White, ".BWB.B");
        let next = apply_move(&state, Pos::new(0, 0), CaptureRule::FlipToEmpty);
        assert_eq!(next.to_string(), "WWWW.B\n");
    }

    #[test]
    fn test_flip_to_empty_stops_at_edge() {
        let state = board(Geometry::new(4, 1), Player::White, ".BBB");
        let next = apply_move(&state, Pos::new(0, 0), CaptureRule::FlipToEmpty);
        assert_eq!(next.to_string(), "WWWW\n");
    }

    #[test]
    fn test_flip_to_empty_does_not_wrap_rows() {
        let state = board(
            Geometry::new(3, 2),
            Player::White,
            "WB.
             BB.",
        );
        let next = apply_move(&state, Pos::new(2, 0), CaptureRule::FlipToEmpty);
        // West flips (1,0); south-west flips (1,1); nothing wraps into row 1 from the east
        assert_eq!(next.to_string(), "WWW\nBW.\n");
    }

    #[test]
    fn test_bracketed_only_flips_closed_runs() {
        let state = board(Geometry::new(7, 1), Player::White, "WBB.BB.");
        let next = apply_move(&state, Pos::new(3, 0), CaptureRule::Bracketed);
        // West run closed by W at 0, east run ends on an empty cell
        assert_eq!(next.to_string(), "WWWWBB.\n");
    }

    #[test]
    fn test_bracketed_ignores_run_to_edge() {
        let state = board(Geometry::new(4, 1), Player::White, ".BBB");
        let next = apply_move(&state, Pos::new(0, 0), CaptureRule::Bracketed);
        assert_eq!(next.to_string(), "WBBB\n");
    }

    #[test]
    fn test_rules_agree_on_simple_capture() {
        let state = GameState::opening(Geometry::STANDARD, Player::Black);
        for pos in legal_moves(&state, Player::Black) {
            let a = apply_move(&state, pos, CaptureRule::FlipToEmpty);
            let b = apply_move(&state, pos, CaptureRule::Bracketed);
            assert_eq!(a, b, "rules diverge on opening move {pos}");
        }
    }

    #[test]
    fn test_every_move_sets_destination_and_switches_turn() {
        let mut state = GameState::opening(Geometry::STANDARD, Player::White);
        for _ in 0..10 {
            let mover = state.to_move();
            let Some(&pos) = legal_moves(&state, mover).first() else {
                break;
            };
            state = apply_move(&state, pos, CaptureRule::FlipToEmpty);
            assert_eq!(state.get(pos), mover.cell());
            assert_eq!(state.to_move(), mover.opponent());
        }
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let state = GameState::opening(Geometry::STANDARD, Player::White);
        let err = state.play(Pos::new(0, 0), CaptureRule::FlipToEmpty).unwrap_err();
        assert_eq!(err.to_string(), "illegal move (0, 0)");
        assert!(state.play(Pos::new(5, 3), CaptureRule::FlipToEmpty).is_ok());
    }
}
