use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::types::Owner;

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Winner(Owner),
    Draw,
}

/// Pattern bonus accumulated per player, indexed by `Owner::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Bonus(pub [u32; 2]);

impl Bonus {
    #[inline]
    pub fn of(&self, owner: Owner) -> u32 {
        self.0[owner.index()]
    }

    #[inline]
    pub fn add(&mut self, owner: Owner, n: u32) {
        self.0[owner.index()] += n;
    }

    /// Component-wise sum, e.g. session bonus plus a search branch's delta.
    #[inline]
    pub fn plus(self, other: Bonus) -> Bonus {
        Bonus([self.0[0] + other.0[0], self.0[1] + other.0[1]])
    }
}

/// Tile count plus pattern bonus.
#[inline]
pub fn combined_score(board: &Board, bonus: Bonus, owner: Owner) -> u32 {
    board.count_tiles().of(owner) as u32 + bonus.of(owner)
}

/// Compare combined scores; the strictly higher side wins.
pub fn winner(board: &Board, bonus: Bonus) -> Outcome {
    let a = combined_score(board, bonus, Owner::A);
    let b = combined_score(board, bonus, Owner::B);
    match a.cmp(&b) {
        std::cmp::Ordering::Greater => Outcome::Winner(Owner::A),
        std::cmp::Ordering::Less => Outcome::Winner(Owner::B),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// Tile differential (#A) - (#B), ignoring bonuses.
#[inline]
pub fn score(board: &Board) -> i8 {
    let counts = board.count_tiles();
    counts.a as i8 - counts.b as i8
}
