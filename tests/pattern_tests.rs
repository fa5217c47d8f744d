use std::collections::BTreeSet;

use flipsos::{apply_move, find_patterns, Board, Bonus, GameState, Move, Owner, Pattern};

fn idx(r: u8, c: u8) -> u8 {
    Move::new(r, c).idx()
}

fn cells(p: &Pattern) -> [u8; 3] {
    p.cells
}

/// A at (2,2) flips (1,1) and (1,3) diagonally; (1,2) stays O, so the row
/// (1,1)-(1,2)-(1,3) reads S-O-S and is reachable from both flipped cells.
fn shared_pattern_board() -> Board {
    "\
S---S---
-OOO----
--------
--------
--------
--------
--------
--------"
        .parse()
        .expect("board")
}

#[test]
fn placed_tile_between_two_opponents_forms_oso() {
    // A plays (0,2): captures (1,2) down to the anchor at (2,2).
    // Row 0 then reads O-S-O across (0,1)-(0,2)-(0,3).
    let text = "\
-O-O----
--O-----
--S-----
--------
--------
--------
--------
--------";
    let mut board: Board = text.parse().expect("board");
    let cap = apply_move(&mut board, Move::new(0, 2), Owner::A);
    assert_eq!(cap.flipped, vec![idx(1, 2)]);

    let found = find_patterns(&board, cap.touched());
    assert_eq!(found.len(), 1);
    assert_eq!(cells(&found[0]), [idx(0, 1), idx(0, 2), idx(0, 3)]);
}

#[test]
fn pattern_seen_from_two_touched_cells_counts_once() {
    let mut board = shared_pattern_board();
    let cap = apply_move(&mut board, Move::new(2, 2), Owner::A);

    let flipped: BTreeSet<u8> = cap.flipped.iter().copied().collect();
    assert_eq!(flipped, BTreeSet::from([idx(1, 1), idx(1, 3)]));

    let found = find_patterns(&board, cap.touched());
    assert_eq!(found.len(), 1);
    assert_eq!(cells(&found[0]), [idx(1, 1), idx(1, 2), idx(1, 3)]);
}

#[test]
fn detection_is_idempotent_for_fixed_input() {
    let mut board = shared_pattern_board();
    let cap = apply_move(&mut board, Move::new(2, 2), Owner::A);

    let first: BTreeSet<Pattern> = find_patterns(&board, cap.touched()).into_iter().collect();
    let second: BTreeSet<Pattern> = find_patterns(&board, cap.touched()).into_iter().collect();
    assert_eq!(first, second);
}

#[test]
fn untouched_patterns_are_not_reported() {
    // S-O-S already on row 7, nowhere near the touched cell
    let text = "\
--------
--------
--------
--------
--------
--------
--------
SOS-----";
    let board: Board = text.parse().expect("board");
    assert!(find_patterns(&board, [idx(0, 0)]).is_empty());
    assert_eq!(find_patterns(&board, [idx(7, 1)]).len(), 1);
}

#[test]
fn windows_must_be_fully_occupied_and_alternating() {
    let text = "\
SOO-----
S-------
O-------
S-------
--------
--------
--------
--------";
    let board: Board = text.parse().expect("board");
    // Row 0 reads S-O-O, column 0 reads S-S-O then S-O-S lower down
    let found = find_patterns(&board, [idx(0, 0), idx(0, 1), idx(0, 2)]);
    assert!(found.is_empty());
    let found = find_patterns(&board, [idx(2, 0)]);
    assert_eq!(found.len(), 1);
    assert_eq!(cells(&found[0]), [idx(1, 0), idx(2, 0), idx(3, 0)]);
}

#[test]
fn session_bonus_accumulates_once_per_move() {
    let mut state = GameState::from_board(shared_pattern_board(), Owner::A, Bonus::default());
    let report = state.play(Move::new(2, 2));
    assert_eq!(report.patterns.len(), 1);
    assert_eq!(state.bonus.of(Owner::A), 1);
    assert_eq!(state.bonus.of(Owner::B), 0);

    // Re-running detection is a pure query; the counter does not move
    let again = find_patterns(&state.board, report.capture.touched());
    assert_eq!(again.len(), 1);
    assert_eq!(state.bonus.of(Owner::A), 1);
    assert_eq!(state.combined_score(Owner::A), state.board.count_tiles().a as u32 + 1);
}

#[test]
fn existing_pattern_is_not_recounted_by_later_moves() {
    let mut state = GameState::from_board(shared_pattern_board(), Owner::A, Bonus::default());
    state.play(Move::new(2, 2));
    assert_eq!(state.bonus.of(Owner::A), 1);
    assert_eq!(find_patterns(&state.board, [idx(1, 1)]).len(), 1);

    // A second A move far from the pattern leaves the bonus unchanged
    let mut board = state.board;
    board.set(idx(6, 6), Some(Owner::B));
    board.set(idx(6, 5), Some(Owner::A));
    let mut state = GameState::from_board(board, Owner::A, state.bonus);
    let report = state.play(Move::new(6, 7));
    assert!(report.patterns.is_empty());
    assert_eq!(state.bonus.of(Owner::A), 1);
}
