use crate::board::Board;
use crate::state::Move;
use crate::types::{offset, Dir, Owner, BOARD_SIDE, CELLS};

const fn on_board_mask(idx: usize) -> u8 {
    let r = (idx / BOARD_SIDE as usize) as i8;
    let c = (idx % BOARD_SIDE as usize) as i8;
    let max = BOARD_SIDE as i8 - 1;
    // Same clockwise order as Dir::all()
    let deltas: [(i8, i8); 8] = [(-1, 0), (-1, 1), (0, 1), (1, 1), (1, 0), (1, -1), (0, -1), (-1, -1)];
    let mut mask = 0u8;
    let mut k = 0;
    while k < 8 {
        let (dr, dc) = deltas[k];
        let nr = r + dr;
        let nc = c + dc;
        if nr >= 0 && nr <= max && nc >= 0 && nc <= max {
            mask |= 1 << k;
        }
        k += 1;
    }
    mask
}

const fn build_direction_masks() -> [u8; CELLS] {
    let mut masks = [0u8; CELLS];
    let mut i = 0;
    while i < CELLS {
        masks[i] = on_board_mask(i);
        i += 1;
    }
    masks
}

/// Bit k set when `Dir::all()[k]` stays on the board from that cell.
static DIRECTION_MASKS: [u8; CELLS] = build_direction_masks();

/// Directions that stay on-board from `idx`, clockwise from Up. No wraparound.
#[inline]
pub fn neighbor_directions(idx: u8) -> impl Iterator<Item = Dir> {
    let mask = DIRECTION_MASKS[idx as usize];
    Dir::all()
        .into_iter()
        .enumerate()
        .filter(move |(k, _)| (mask >> *k) & 1 == 1)
        .map(|(_, d)| d)
}

/// Opponent cells bracketed by a tile placed at `idx` for `player`.
///
/// Each direction is walked outward collecting opponent tiles. The run is kept
/// only when it ends on one of `player`'s tiles; hitting an empty cell or the
/// edge first discards it. Lines are concatenated in direction order, each in
/// outward order. The cell at `idx` itself is not inspected.
pub fn swappable_tiles(board: &Board, idx: u8, player: Owner) -> Vec<u8> {
    let opponent = player.other();
    let mut swappable = Vec::new();

    for dir in neighbor_directions(idx) {
        let delta = dir.delta();
        let mut line: Vec<u8> = Vec::new();
        let mut cursor = offset(idx, delta, 1);
        let mut anchored = false;

        while let Some(cell) = cursor {
            match board.get(cell) {
                Some(o) if o == opponent => line.push(cell),
                Some(_) => {
                    anchored = true;
                    break;
                }
                None => break,
            }
            cursor = offset(cell, delta, 1);
        }

        if anchored {
            swappable.extend(line);
        }
    }
    swappable
}

/// Empty cells with at least one opponent tile among their eight neighbours.
/// Cheap pre-filter for `legal_moves`, row-major order.
pub fn clickable_cells(board: &Board, player: Owner) -> Vec<Move> {
    let opponent = player.other();
    (0..CELLS as u8)
        .filter(|&idx| board.is_empty(idx))
        .filter(|&idx| {
            neighbor_directions(idx)
                .filter_map(|d| offset(idx, d.delta(), 1))
                .any(|n| board.get(n) == Some(opponent))
        })
        .map(Move::from_idx)
        .collect()
}

/// Legal moves for `player` in row-major scan order.
pub fn legal_moves(board: &Board, player: Owner) -> Vec<Move> {
    clickable_cells(board, player)
        .into_iter()
        .filter(|mv| !swappable_tiles(board, mv.idx(), player).is_empty())
        .collect()
}

/// True when `player` has at least one legal move. Stops at the first one found.
pub fn has_legal_move(board: &Board, player: Owner) -> bool {
    clickable_cells(board, player)
        .into_iter()
        .any(|mv| !swappable_tiles(board, mv.idx(), player).is_empty())
}

#[inline]
pub fn is_legal(board: &Board, mv: Move, player: Owner) -> bool {
    mv.row < BOARD_SIDE
        && mv.col < BOARD_SIDE
        && board.is_empty(mv.idx())
        && !swappable_tiles(board, mv.idx(), player).is_empty()
}

/// Occupied cells adjacent to at least one empty cell, per owner `(own, opp)`.
pub fn frontier_counts(board: &Board, own: Owner) -> (u32, u32) {
    let mut own_front = 0;
    let mut opp_front = 0;
    for (idx, cell) in board.iter() {
        let Some(o) = cell else { continue };
        let exposed = neighbor_directions(idx)
            .filter_map(|d| offset(idx, d.delta(), 1))
            .any(|n| board.is_empty(n));
        if exposed {
            if o == own {
                own_front += 1;
            } else {
                opp_front += 1;
            }
        }
    }
    (own_front, opp_front)
}
