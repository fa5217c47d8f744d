use crate::board::Board;
use crate::rules::{is_legal, swappable_tiles};
use crate::state::Move;
use crate::types::Owner;

/// Result of placing a tile: the placed cell and the opponent tiles it flipped.
/// Doubles as the undo record for that placement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Capture {
    pub placed: u8,
    pub owner: Owner,
    pub flipped: Vec<u8>,
}

impl Capture {
    /// Cells whose value changed: the placed cell followed by the flipped tiles.
    pub fn touched(&self) -> impl Iterator<Item = u8> + '_ {
        std::iter::once(self.placed).chain(self.flipped.iter().copied())
    }

    /// Restore `board` to its state before this capture was applied.
    /// Must be called on the board produced by the matching `apply_move`,
    /// with no other change in between.
    pub fn undo(&self, board: &mut Board) {
        debug_assert_eq!(board.get(self.placed), Some(self.owner));
        board.set(self.placed, None);
        let opponent = Some(self.owner.other());
        for &idx in &self.flipped {
            board.set(idx, opponent);
        }
    }
}

/// Place `player`'s tile at `mv` and flip every bracketed opponent tile.
///
/// Legality is the caller's responsibility (`legal_moves` membership); only a
/// debug assertion guards it here.
pub fn apply_move(board: &mut Board, mv: Move, player: Owner) -> Capture {
    debug_assert!(is_legal(board, mv, player), "apply_move on illegal move {mv:?}");
    let placed = mv.idx();
    let flipped = swappable_tiles(board, placed, player);

    board.set(placed, Some(player));
    for &idx in &flipped {
        board.set(idx, Some(player));
    }

    Capture { placed, owner: player, flipped }
}
