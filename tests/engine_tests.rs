use flipsos::{
    apply_move, clickable_cells, legal_moves, random_position, rng_for_game, swappable_tiles, Board,
    GameState, Move, Owner,
};

fn idx(r: u8, c: u8) -> u8 {
    Move::new(r, c).idx()
}

#[test]
fn opening_moves_in_scan_order() {
    let board = Board::new();
    let moves = legal_moves(&board, Owner::A);
    assert_eq!(
        moves,
        vec![Move::new(2, 3), Move::new(3, 2), Move::new(4, 5), Move::new(5, 4)]
    );

    let moves_b = legal_moves(&board, Owner::B);
    assert_eq!(
        moves_b,
        vec![Move::new(2, 4), Move::new(3, 5), Move::new(4, 2), Move::new(5, 3)]
    );
}

#[test]
fn opening_capture_flips_center_tile() {
    let mut board = Board::new();
    let cap = apply_move(&mut board, Move::new(2, 3), Owner::A);

    assert_eq!(cap.placed, idx(2, 3));
    assert_eq!(cap.flipped, vec![idx(3, 3)]);

    let counts = board.count_tiles();
    assert_eq!(counts.a, 4);
    assert_eq!(counts.b, 1);
    assert_eq!(flipsos::score(&board), 3);
    assert_eq!(board.get_rc(3, 3), Some(Owner::A));
    assert_eq!(board.get_rc(4, 4), Some(Owner::B));
}

#[test]
fn clickable_is_superset_of_legal() {
    let board = Board::new();
    let clickable = clickable_cells(&board, Owner::A);
    assert!(clickable.len() > 4);
    for mv in legal_moves(&board, Owner::A) {
        assert!(clickable.contains(&mv));
    }
    // (2,2) touches (3,3) but brackets nothing
    assert!(clickable.contains(&Move::new(2, 2)));
    assert!(swappable_tiles(&board, idx(2, 2), Owner::A).is_empty());
}

#[test]
fn line_ending_on_empty_or_edge_is_discarded() {
    // Row 0: - O O - ; row 1: S O - -
    let text = "\
-OO-----
SO------
--------
--------
--------
--------
--------
--------";
    let board: Board = text.parse().expect("board");

    // Walking right from (0,0): O O then empty -> nothing
    // Walking down-right from (0,0): (1,1) O then (2,2) empty -> nothing
    assert!(swappable_tiles(&board, idx(0, 0), Owner::A).is_empty());

    // (0,3) walking left: O O then the empty corner -> nothing
    assert!(swappable_tiles(&board, idx(0, 3), Owner::A).is_empty());

    // (1,2) walking left: O then S anchor
    assert_eq!(swappable_tiles(&board, idx(1, 2), Owner::A), vec![idx(1, 1)]);

    // B at (2,0): the S above is backed by an empty corner, the O diagonal is its own
    assert!(swappable_tiles(&board, idx(2, 0), Owner::B).is_empty());
}

#[test]
fn multi_direction_capture_unions_lines() {
    let text = "\
S-S-S---
-OOO----
SO-OS---
-OOO----
S-S-S---
--------
--------
--------";
    let board: Board = text.parse().expect("board");
    let mut flipped = swappable_tiles(&board, idx(2, 2), Owner::A);
    flipped.sort_unstable();
    let mut expected = vec![
        idx(1, 1),
        idx(1, 2),
        idx(1, 3),
        idx(2, 1),
        idx(2, 3),
        idx(3, 1),
        idx(3, 2),
        idx(3, 3),
    ];
    expected.sort_unstable();
    assert_eq!(flipped, expected);
    assert!(legal_moves(&board, Owner::A).contains(&Move::new(2, 2)));
}

#[test]
fn swappable_symmetric_under_colour_swap() {
    for game_id in 0..20u64 {
        let mut rng = rng_for_game(0xF11B_505u64, game_id);
        let state = random_position(&mut rng, 6 + (game_id as usize) * 2);
        let board = state.board;
        let inverted = board.inverted();
        for cell in 0..64u8 {
            if !board.is_empty(cell) {
                continue;
            }
            for player in [Owner::A, Owner::B] {
                assert_eq!(
                    swappable_tiles(&board, cell, player),
                    swappable_tiles(&inverted, cell, player.other()),
                    "game {game_id} cell {cell} player {player:?}"
                );
            }
        }
    }
}

#[test]
fn legal_moves_are_exactly_the_capturing_cells() {
    for game_id in 0..20u64 {
        let mut rng = rng_for_game(7, game_id);
        let state = random_position(&mut rng, 10 + game_id as usize);
        for player in [Owner::A, Owner::B] {
            let legal = legal_moves(&state.board, player);
            for cell in 0..64u8 {
                let captures = state.board.is_empty(cell)
                    && !swappable_tiles(&state.board, cell, player).is_empty();
                assert_eq!(legal.contains(&Move::from_idx(cell)), captures);
            }
            let mut sorted = legal.clone();
            sorted.sort();
            assert_eq!(legal, sorted, "legal moves must be in row-major order");
        }
    }
}

#[test]
fn tile_counts_always_partition_board() {
    for game_id in 0..10u64 {
        let mut rng = rng_for_game(42, game_id);
        let mut state = GameState::new();
        for _ in 0..70 {
            let counts = state.board.count_tiles();
            assert!(counts.total() <= 64);
            assert_eq!(counts.a as usize + counts.b as usize + state.board.empty_count() as usize, 64);
            if state.is_over() {
                break;
            }
            let moves = state.legal_moves();
            let mv = moves[rand::Rng::gen_range(&mut rng, 0..moves.len())];
            state.advance(mv);
        }
    }
}

#[test]
fn apply_then_undo_restores_random_positions() {
    for game_id in 0..10u64 {
        let mut rng = rng_for_game(99, game_id);
        let state = random_position(&mut rng, 20);
        let mut board = state.board;
        for mv in legal_moves(&board, state.next) {
            let before = board;
            let cap = apply_move(&mut board, mv, state.next);
            assert_eq!(
                board.count_tiles().of(state.next),
                before.count_tiles().of(state.next) + 1 + cap.flipped.len() as u8
            );
            cap.undo(&mut board);
            assert_eq!(board, before);
        }
    }
}
