use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::types::{offset, rc_to_idx, Dir, Owner, BOARD_SIDE, CELLS};

/// Per-player tile counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TileCounts {
    pub a: u8,
    pub b: u8,
}

impl TileCounts {
    #[inline]
    pub fn of(&self, owner: Owner) -> u8 {
        match owner {
            Owner::A => self.a,
            Owner::B => self.b,
        }
    }

    #[inline]
    pub fn total(&self) -> u8 {
        self.a + self.b
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    // Cells 0..64 laid out row-major (r*8 + c)
    cells: [Option<Owner>; CELLS],
}

impl Default for Board {
    /// Standard starting position: B on (3,3),(4,4), A on (3,4),(4,3).
    fn default() -> Self {
        let mut b = Self::empty();
        b.set_rc(3, 3, Some(Owner::B));
        b.set_rc(3, 4, Some(Owner::A));
        b.set_rc(4, 4, Some(Owner::B));
        b.set_rc(4, 3, Some(Owner::A));
        b
    }
}

impl Board {
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Board with no tiles at all. Useful for building synthetic positions.
    #[inline]
    pub fn empty() -> Self {
        Self { cells: [None; CELLS] }
    }

    #[inline]
    pub fn get(&self, idx: u8) -> Option<Owner> {
        self.cells[idx as usize]
    }

    #[inline]
    pub fn set(&mut self, idx: u8, owner: Option<Owner>) {
        self.cells[idx as usize] = owner;
    }

    /// Coordinates must be on-board; callers bounds-check first.
    #[inline]
    pub fn get_rc(&self, r: u8, c: u8) -> Option<Owner> {
        debug_assert!(r < BOARD_SIDE && c < BOARD_SIDE);
        self.cells[(r * BOARD_SIDE + c) as usize]
    }

    #[inline]
    pub fn set_rc(&mut self, r: u8, c: u8, owner: Option<Owner>) {
        debug_assert!(r < BOARD_SIDE && c < BOARD_SIDE);
        self.cells[(r * BOARD_SIDE + c) as usize] = owner;
    }

    #[inline]
    pub fn is_empty(&self, idx: u8) -> bool {
        self.cells[idx as usize].is_none()
    }

    pub fn count_tiles(&self) -> TileCounts {
        let mut counts = TileCounts::default();
        for cell in self.cells.iter().flatten() {
            match cell {
                Owner::A => counts.a += 1,
                Owner::B => counts.b += 1,
            }
        }
        counts
    }

    #[inline]
    pub fn filled_count(&self) -> u8 {
        self.cells.iter().filter(|c| c.is_some()).count() as u8
    }

    #[inline]
    pub fn empty_count(&self) -> u8 {
        CELLS as u8 - self.filled_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.filled_count() as usize == CELLS
    }

    /// Same position with every tile's owner swapped.
    pub fn inverted(&self) -> Self {
        let mut cells = self.cells;
        for cell in cells.iter_mut() {
            *cell = cell.map(Owner::other);
        }
        Self { cells }
    }

    /// Occupied-or-not neighbours in all eight directions, clockwise from Up.
    /// `None` means off-board.
    #[inline]
    pub fn neighbors(&self, idx: u8) -> [Option<u8>; 8] {
        Dir::all().map(|d| offset(idx, d.delta(), 1))
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Option<Owner>)> + '_ {
        self.cells.iter().enumerate().map(|(i, c)| (i as u8, *c))
    }
}

/// Console form: one line per row, `S`/`O` for tiles and `-` for empty cells.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..BOARD_SIDE {
            for c in 0..BOARD_SIDE {
                let ch = self.get_rc(r, c).map_or('-', Owner::mark);
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .collect();
        if rows.len() != BOARD_SIDE as usize {
            return Err(Error::BadRowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (r, line) in rows.iter().enumerate() {
            let chars: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if chars.len() != BOARD_SIDE as usize {
                return Err(Error::BadRowLength { row: r, len: chars.len() });
            }
            for (c, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    '-' | '.' => None,
                    _ => Some(Owner::from_mark(ch).ok_or(Error::BadCell { row: r, col: c, ch })?),
                };
                // r, c < 8 by the checks above
                if let Some(idx) = rc_to_idx(r as u8, c as u8) {
                    board.set(idx, cell);
                }
            }
        }
        Ok(board)
    }
}
