use log::{debug, info};
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::engine::apply::apply_move;
use crate::engine::patterns::find_patterns;
use crate::engine::score::Bonus;
use crate::rules::legal_moves;
use crate::state::{is_terminal, GameState, Move};
use crate::types::Owner;

pub mod eval;
pub mod minimax;
pub mod weights;

pub use eval::{evaluate, Terms};
pub use minimax::{Side, TERMINAL_REWARD};
pub use weights::Weights;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchLimits {
    /// Plies searched, counting the root move.
    pub max_depth: u8,
    /// Stop starting new root moves once this many nodes have been visited.
    pub node_budget: Option<u64>,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            max_depth: 4,
            node_budget: None, // no budget by default
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    /// Score of `best_move` from the searching player's side; 0 without a move.
    pub value: i32,
    pub nodes: u64,
    pub depth: u8,
    pub pruned: bool,
}

/// Computer player: fixed-depth minimax over hypothetical futures of a board.
#[derive(Debug, Clone)]
pub struct Solver {
    pub player: Owner,
    pub opponent: Owner,
    pub limits: SearchLimits,
    pub weights: Weights,
    // Session bonuses at the root, added to branch deltas for terminal rewards.
    existing: Bonus,
    nodes: u64,
}

impl Solver {
    #[inline]
    pub fn new(player: Owner, max_depth: u8) -> Self {
        Self::with_config(
            player,
            SearchLimits { max_depth, ..SearchLimits::default() },
            Weights::default(),
        )
    }

    #[inline]
    pub fn with_config(player: Owner, limits: SearchLimits, weights: Weights) -> Self {
        debug_assert!(
            weights.max_magnitude() < TERMINAL_REWARD as i64,
            "heuristic range must stay below the terminal reward"
        );
        Self {
            player,
            opponent: player.other(),
            limits,
            weights,
            existing: Bonus::default(),
            nodes: 0,
        }
    }

    /// Nodes visited by the last search.
    #[inline]
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Plain minimax over every branch.
    pub fn best_move(&mut self, board: &Board, existing: Bonus) -> SearchResult {
        self.search_root(board, existing, false)
    }

    /// Same choice as `best_move`, visiting no more nodes.
    pub fn best_move_alpha_beta(&mut self, board: &Board, existing: Bonus) -> SearchResult {
        self.search_root(board, existing, true)
    }

    /// Search the live position of a session for this solver's side.
    /// A finished game has no move to offer and is not searched.
    pub fn search(&mut self, state: &GameState, prune: bool) -> SearchResult {
        if is_terminal(state) {
            self.nodes = 0;
            return SearchResult {
                best_move: None,
                value: 0,
                nodes: 0,
                depth: self.limits.max_depth,
                pruned: prune,
            };
        }
        if state.next != self.player {
            debug!("searching for {:?} while {:?} is to move", self.player, state.next);
        }
        self.search_root(&state.board, state.bonus, prune)
    }

    fn search_root(&mut self, board: &Board, existing: Bonus, prune: bool) -> SearchResult {
        self.nodes = 0;
        self.existing = existing;

        let mut board = *board;
        let mut best: Option<(Move, i32)> = None;

        for mv in legal_moves(&board, self.player) {
            if let (Some(budget), Some(_)) = (self.limits.node_budget, best) {
                if self.nodes >= budget {
                    debug!("node budget {} spent, stopping before {:?}", budget, mv);
                    break;
                }
            }

            let capture = apply_move(&mut board, mv, self.player);
            let mut delta = Bonus::default();
            delta.add(self.player, find_patterns(&board, capture.touched()).len() as u32);

            // Root is a max node; later moves only matter if they beat the best so far.
            let window = prune.then(|| (best.map_or(i32::MIN, |(_, v)| v), i32::MAX));
            let score = self.value(&mut board, 1, delta, Side::Min, window);
            capture.undo(&mut board);

            debug!("root move ({}, {}) scored {}", mv.row, mv.col, score);
            // Strictly greater: the first maximal move wins ties.
            let improves = match best {
                None => true,
                Some((_, v)) => score > v,
            };
            if improves {
                best = Some((mv, score));
            }
        }

        let result = SearchResult {
            best_move: best.map(|(mv, _)| mv),
            value: best.map_or(0, |(_, v)| v),
            nodes: self.nodes,
            depth: self.limits.max_depth,
            pruned: prune,
        };
        match result.best_move {
            Some(mv) => info!(
                "{:?} best move ({}, {}) value {} nodes {}{}",
                self.player,
                mv.row,
                mv.col,
                result.value,
                result.nodes,
                if prune { " (alpha-beta)" } else { "" }
            ),
            None => info!("{:?} has no legal move", self.player),
        }
        result
    }
}
