use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::engine::apply::{apply_move, Capture};
use crate::engine::patterns::{find_patterns, Pattern};
use crate::engine::score::{combined_score, winner, Bonus, Outcome};
use crate::error::Error;
use crate::rules;
use crate::types::{idx_to_rc, rc_to_idx, Owner, BOARD_SIDE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    pub row: u8, // 0..=7
    pub col: u8, // 0..=7
}

impl Move {
    #[inline]
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub fn from_idx(idx: u8) -> Self {
        let (row, col) = idx_to_rc(idx);
        Self { row, col }
    }

    /// Row-major cell index. Only meaningful for on-board moves.
    #[inline]
    pub fn idx(self) -> u8 {
        debug_assert!(self.row < BOARD_SIDE && self.col < BOARD_SIDE);
        self.row * BOARD_SIDE + self.col
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    InProgress,
    GameOver(Outcome),
}

/// What a single `play` did to the board and the mover's bonus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveReport {
    pub capture: Capture,
    pub patterns: Vec<Pattern>,
}

/// Live game: board, side to move and the incrementally accumulated pattern bonus.
#[derive(Debug, Clone)]
pub struct GameState {
    pub board: Board,
    pub next: Owner,
    pub bonus: Bonus,
    pub status: Status,
    pub last_move: Option<Move>,
    /// Set by the last `switch_player` when a side had to pass.
    pub last_skipped: bool,
    both_skipped: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Starting position, A to move.
    #[inline]
    pub fn new() -> Self {
        Self::from_board(Board::new(), Owner::A, Bonus::default())
    }

    /// Arbitrary position, e.g. for analysis or tests.
    #[inline]
    pub fn from_board(board: Board, next: Owner, bonus: Bonus) -> Self {
        Self {
            board,
            next,
            bonus,
            status: Status::InProgress,
            last_move: None,
            last_skipped: false,
            both_skipped: false,
        }
    }

    /// Back to the starting position with bonuses cleared.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    #[inline]
    pub fn legal_moves(&self) -> Vec<Move> {
        rules::legal_moves(&self.board, self.next)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self.status, Status::GameOver(_))
    }

    /// Tile count plus accumulated bonus for `owner`.
    #[inline]
    pub fn combined_score(&self, owner: Owner) -> u32 {
        combined_score(&self.board, self.bonus, owner)
    }

    /// Apply `mv` for the side to move and credit any new patterns to it.
    /// Does not pass the turn; call `switch_player` afterwards.
    ///
    /// `mv` must come from `legal_moves()`.
    pub fn play(&mut self, mv: Move) -> MoveReport {
        let mover = self.next;
        let capture = apply_move(&mut self.board, mv, mover);
        let patterns = find_patterns(&self.board, capture.touched());
        self.bonus.add(mover, patterns.len() as u32);
        self.last_move = Some(mv);
        debug!(
            "{:?} played ({}, {}): flipped {}, new patterns {}",
            mover,
            mv.row,
            mv.col,
            capture.flipped.len(),
            patterns.len()
        );
        MoveReport { capture, patterns }
    }

    /// Checked variant of `play` for host input.
    pub fn try_play(&mut self, mv: Move) -> Result<MoveReport, Error> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if rc_to_idx(mv.row, mv.col).is_none() || !rules::is_legal(&self.board, mv, self.next) {
            return Err(Error::IllegalMove { row: mv.row, col: mv.col });
        }
        Ok(self.play(mv))
    }

    /// Pass the turn. If the new side has no legal move the turn comes straight
    /// back; returns true in that case. When neither side can move the game is
    /// flagged for `check_game_over`. A full board ends the game without
    /// reporting a skip.
    pub fn switch_player(&mut self) -> bool {
        self.next = self.next.other();
        self.last_skipped = false;

        if self.board.is_full() {
            return false;
        }
        if !rules::has_legal_move(&self.board, self.next) {
            debug!("{:?} has no legal move, turn skipped", self.next);
            self.next = self.next.other();
            self.last_skipped = true;
            if !rules::has_legal_move(&self.board, self.next) {
                debug!("{:?} has no legal move either", self.next);
                self.both_skipped = true;
            }
        }
        self.last_skipped
    }

    /// Enter the terminal state when the board is full or both sides were
    /// skipped, deciding the winner on combined score.
    pub fn check_game_over(&mut self) -> Status {
        if self.is_over() {
            return self.status;
        }
        if self.both_skipped || self.board.is_full() {
            let outcome = winner(&self.board, self.bonus);
            info!(
                "game over: {:?} (A {} vs B {})",
                outcome,
                self.combined_score(Owner::A),
                self.combined_score(Owner::B)
            );
            self.status = Status::GameOver(outcome);
        }
        self.status
    }

    /// Full turn: play, pass the turn, then check for the end of the game.
    pub fn advance(&mut self, mv: Move) -> (MoveReport, Status) {
        let report = self.play(mv);
        self.switch_player();
        let status = self.check_game_over();
        (report, status)
    }
}

/// Free-function form of `GameState::is_over`.
#[inline]
pub fn is_terminal(state: &GameState) -> bool {
    state.is_over()
}
