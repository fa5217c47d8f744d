use crate::board::Board;
use crate::engine::score::Bonus;
use crate::rules::{frontier_counts, legal_moves};
use crate::types::{idx_to_rc, offset, Dir, Owner, CORNERS};

use super::weights::Weights;

/// Unweighted evaluation terms, each in [-100, 100] from `own`'s point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Terms {
    pub static_value: i32,
    pub tile_diff: i32,
    pub frontier: i32,
    pub mobility: i32,
    pub corner_occupancy: i32,
    pub corner_adjacency: i32,
    pub pattern_diff: i32,
}

impl Terms {
    pub fn weighted(&self, w: &Weights) -> i32 {
        self.static_value * w.static_value
            + self.tile_diff * w.tile_diff
            + self.frontier * w.frontier
            + self.mobility * w.mobility
            + self.corner_occupancy * w.corner_occupancy
            + self.corner_adjacency * w.corner_adjacency
            + self.pattern_diff * w.pattern_diff
    }
}

/// `100 * (own - opp) / (own + opp)`, 0 when both are 0.
#[inline]
fn ratio(own: i64, opp: i64) -> i32 {
    let total = own + opp;
    if total == 0 {
        0
    } else {
        (100 * (own - opp) / total) as i32
    }
}

/// Cells next to a corner: the two orthogonal neighbours and the diagonal one.
#[inline]
fn corner_neighbors(corner: u8) -> impl Iterator<Item = u8> {
    Dir::all()
        .into_iter()
        .filter_map(move |d| offset(corner, d.delta(), 1))
}

pub fn terms(board: &Board, own: Owner, bonus: Bonus, table: &[[i32; 8]; 8]) -> Terms {
    let opp = own.other();

    let mut own_value: i64 = 0;
    let mut opp_value: i64 = 0;
    let mut occupied_weight: i64 = 0;
    for (idx, cell) in board.iter() {
        let Some(o) = cell else { continue };
        let (r, c) = idx_to_rc(idx);
        let w = table[r as usize][c as usize] as i64;
        occupied_weight += w.abs();
        if o == own {
            own_value += w;
        } else {
            opp_value += w;
        }
    }
    let static_value = if occupied_weight == 0 {
        0
    } else {
        (100 * (own_value - opp_value) / occupied_weight) as i32
    };

    let counts = board.count_tiles();
    let tile_diff = ratio(counts.of(own) as i64, counts.of(opp) as i64);

    let own_moves = legal_moves(board, own).len() as i64;
    let opp_moves = legal_moves(board, opp).len() as i64;
    let mobility = ratio(own_moves, opp_moves);

    // Fewer own frontier tiles is better, hence the swapped arguments.
    let (own_front, opp_front) = frontier_counts(board, own);
    let frontier = ratio(opp_front as i64, own_front as i64);

    let mut own_corners = 0;
    let mut opp_corners = 0;
    let mut own_adjacent = 0;
    let mut opp_adjacent = 0;
    for corner in CORNERS {
        match board.get(corner) {
            Some(o) if o == own => own_corners += 1,
            Some(_) => opp_corners += 1,
            None => {
                for n in corner_neighbors(corner) {
                    match board.get(n) {
                        Some(o) if o == own => own_adjacent += 1,
                        Some(_) => opp_adjacent += 1,
                        None => {}
                    }
                }
            }
        }
    }
    let corner_occupancy = 25 * (own_corners - opp_corners);
    // 12.5 per cell; up to 12 cells can touch open corners.
    let corner_adjacency = (25 * (opp_adjacent - own_adjacent) / 2).clamp(-100, 100);

    let pattern_diff = ratio(bonus.of(own) as i64, bonus.of(opp) as i64);

    Terms {
        static_value,
        tile_diff,
        frontier,
        mobility,
        corner_occupancy,
        corner_adjacency,
        pattern_diff,
    }
}

/// Static evaluation of `board` for `own`, using branch-local pattern bonuses.
pub fn evaluate(board: &Board, own: Owner, bonus: Bonus, weights: &Weights) -> i32 {
    terms(board, own, bonus, &weights.value_table).weighted(weights)
}
