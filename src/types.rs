use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Side length of the square board.
pub const BOARD_SIDE: u8 = 8;
/// Total number of cells.
pub const CELLS: usize = (BOARD_SIDE as usize) * (BOARD_SIDE as usize);

/// A player. `A` plays the "S" marks and moves first, `B` plays the "O" marks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    A,
    B,
}

impl Owner {
    #[inline]
    pub fn other(self) -> Self {
        match self {
            Owner::A => Owner::B,
            Owner::B => Owner::A,
        }
    }

    /// Slot used for per-player arrays such as `[u32; 2]`.
    #[inline]
    pub fn index(self) -> usize {
        match self {
            Owner::A => 0,
            Owner::B => 1,
        }
    }

    /// Mark drawn on the board for this player.
    #[inline]
    pub fn mark(self) -> char {
        match self {
            Owner::A => 'S',
            Owner::B => 'O',
        }
    }

    #[inline]
    pub fn from_mark(ch: char) -> Option<Self> {
        match ch {
            'S' | 's' => Some(Owner::A),
            'O' | 'o' => Some(Owner::B),
            _ => None,
        }
    }
}

impl std::str::FromStr for Owner {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "a" | "s" => Ok(Owner::A),
            "b" | "o" => Ok(Owner::B),
            _ => Err(Error::UnknownSide(s.to_string())),
        }
    }
}

/// The eight compass directions, clockwise from Up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    UpRight,
    Right,
    DownRight,
    Down,
    DownLeft,
    Left,
    UpLeft,
}

impl Dir {
    #[inline]
    pub fn all() -> [Dir; 8] {
        [
            Dir::Up,
            Dir::UpRight,
            Dir::Right,
            Dir::DownRight,
            Dir::Down,
            Dir::DownLeft,
            Dir::Left,
            Dir::UpLeft,
        ]
    }

    /// (row delta, col delta)
    #[inline]
    pub fn delta(self) -> (i8, i8) {
        match self {
            Dir::Up => (-1, 0),
            Dir::UpRight => (-1, 1),
            Dir::Right => (0, 1),
            Dir::DownRight => (1, 1),
            Dir::Down => (1, 0),
            Dir::DownLeft => (1, -1),
            Dir::Left => (0, -1),
            Dir::UpLeft => (-1, -1),
        }
    }
}

/// Lines along which an SOS pattern can be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    #[inline]
    pub fn all() -> [Axis; 4] {
        [Axis::Horizontal, Axis::Vertical, Axis::Diagonal, Axis::AntiDiagonal]
    }

    /// Step from one window cell to the next.
    #[inline]
    pub fn step(self) -> (i8, i8) {
        match self {
            Axis::Horizontal => Dir::Right.delta(),
            Axis::Vertical => Dir::Down.delta(),
            Axis::Diagonal => Dir::DownRight.delta(),
            Axis::AntiDiagonal => Dir::DownLeft.delta(),
        }
    }
}

/// Board indexing helpers (8x8 board, row-major)
#[inline]
pub fn idx_to_rc(idx: u8) -> (u8, u8) {
    debug_assert!((idx as usize) < CELLS);
    (idx / BOARD_SIDE, idx % BOARD_SIDE)
}

#[inline]
pub fn rc_to_idx(r: u8, c: u8) -> Option<u8> {
    if r < BOARD_SIDE && c < BOARD_SIDE {
        Some(r * BOARD_SIDE + c)
    } else {
        None
    }
}

/// Offset a cell by `steps` multiples of `(dr, dc)`; `None` once off-board.
#[inline]
pub fn offset(idx: u8, (dr, dc): (i8, i8), steps: i8) -> Option<u8> {
    let (r, c) = idx_to_rc(idx);
    let nr = r as i16 + dr as i16 * steps as i16;
    let nc = c as i16 + dc as i16 * steps as i16;
    if (0..BOARD_SIDE as i16).contains(&nr) && (0..BOARD_SIDE as i16).contains(&nc) {
        rc_to_idx(nr as u8, nc as u8)
    } else {
        None
    }
}

/// Indices of the four corners.
pub const CORNERS: [u8; 4] = [0, 7, 56, 63];
