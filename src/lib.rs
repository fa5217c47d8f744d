#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod error;
pub mod board;
pub mod rules;
pub mod state;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod patterns;
    pub mod score;
}

pub mod solver;

// Re-exports: stable minimal API surface for external callers
pub use crate::board::{Board, TileCounts};
pub use crate::engine::apply::{apply_move, Capture};
pub use crate::engine::patterns::{find_patterns, Pattern};
pub use crate::engine::score::{combined_score, score, winner, Bonus, Outcome};
pub use crate::error::Error;
pub use crate::rng::{random_position, rng_for_game};
pub use crate::rules::{clickable_cells, has_legal_move, legal_moves, neighbor_directions, swappable_tiles};
pub use crate::solver::{SearchLimits, SearchResult, Solver, Weights};
pub use crate::state::{is_terminal, GameState, Move, MoveReport, Status};
pub use crate::types::{Dir, Owner};
