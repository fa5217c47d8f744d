use std::collections::BTreeSet;

use crate::board::Board;
use crate::types::{offset, Axis};

/// Three adjacent colinear cells reading S-O-S or O-S-O.
/// `cells` is kept sorted so the same three cells always compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    pub cells: [u8; 3],
}

impl Pattern {
    #[inline]
    fn new(mut cells: [u8; 3]) -> Self {
        cells.sort_unstable();
        Self { cells }
    }
}

/// True when the three cells alternate between the two players.
#[inline]
fn is_alternating(board: &Board, window: [u8; 3]) -> bool {
    match (board.get(window[0]), board.get(window[1]), board.get(window[2])) {
        (Some(x), Some(y), Some(z)) => x == z && y == x.other(),
        _ => false,
    }
}

/// The three on-board windows along `axis` that contain `idx`.
fn windows_through(idx: u8, axis: Axis) -> impl Iterator<Item = [u8; 3]> {
    let step = axis.step();
    (-2i8..=0).filter_map(move |start| {
        let a = offset(idx, step, start)?;
        let b = offset(idx, step, start + 1)?;
        let c = offset(idx, step, start + 2)?;
        Some([a, b, c])
    })
}

/// Patterns formed through any of `touched`, each counted once.
///
/// Only windows containing a touched cell are examined, so patterns that
/// already existed elsewhere on the board are not reported again. Results come
/// back in discovery order (touched cell, then axis, then window offset).
pub fn find_patterns<I>(board: &Board, touched: I) -> Vec<Pattern>
where
    I: IntoIterator<Item = u8>,
{
    let mut seen: BTreeSet<Pattern> = BTreeSet::new();
    let mut found = Vec::new();

    for idx in touched {
        for axis in Axis::all() {
            for window in windows_through(idx, axis) {
                if !is_alternating(board, window) {
                    continue;
                }
                let pattern = Pattern::new(window);
                if seen.insert(pattern) {
                    found.push(pattern);
                }
            }
        }
    }
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::rc_to_idx;

    #[test]
    fn edge_cell_has_fewer_windows() {
        let corner = rc_to_idx(0, 0).unwrap();
        assert_eq!(windows_through(corner, Axis::Horizontal).count(), 1);
        assert_eq!(windows_through(corner, Axis::AntiDiagonal).count(), 0);
        let mid = rc_to_idx(4, 4).unwrap();
        for axis in Axis::all() {
            assert_eq!(windows_through(mid, axis).count(), 3);
        }
    }

    #[test]
    fn pattern_cells_are_canonical() {
        assert_eq!(Pattern::new([9, 1, 5]), Pattern::new([5, 9, 1]));
        assert_eq!(Pattern::new([9, 1, 5]).cells, [1, 5, 9]);
    }
}
