use std::cmp::Ordering;

use crate::board::Board;
use crate::engine::apply::apply_move;
use crate::engine::patterns::find_patterns;
use crate::engine::score::{combined_score, Bonus};
use crate::rules::{has_legal_move, legal_moves};

use super::eval::evaluate;
use super::Solver;

/// Reward for a finished game; larger than any heuristic value.
pub const TERMINAL_REWARD: i32 = 100_000;

/// Whose turn it is at a search node, relative to the solver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// The solver's player moves and the node takes the maximum.
    Max,
    /// The opponent moves and the node takes the minimum.
    Min,
}

impl Side {
    #[inline]
    pub fn flip(self) -> Self {
        match self {
            Side::Max => Side::Min,
            Side::Min => Side::Max,
        }
    }
}

impl Solver {
    /// +reward when the solver's combined score is strictly ahead, -reward when
    /// behind, 0 on a tie. Combined scores include the session bonus at the root.
    pub(crate) fn terminal_reward(&self, board: &Board, delta: Bonus) -> i32 {
        let bonus = self.existing.plus(delta);
        let own = combined_score(board, bonus, self.player);
        let opp = combined_score(board, bonus, self.opponent);
        match own.cmp(&opp) {
            Ordering::Greater => TERMINAL_REWARD,
            Ordering::Less => -TERMINAL_REWARD,
            Ordering::Equal => 0,
        }
    }

    /// Value of `board` with `side` to move, `depth` plies below the root.
    ///
    /// `delta` holds the pattern bonus gained inside this branch only.
    /// With `window = Some((alpha, beta))` the search prunes; with `None` it
    /// visits every child. The board is mutated in place and restored before
    /// returning.
    pub(crate) fn value(
        &mut self,
        board: &mut Board,
        depth: u8,
        delta: Bonus,
        side: Side,
        window: Option<(i32, i32)>,
    ) -> i32 {
        self.nodes += 1;

        if board.is_full() {
            return self.terminal_reward(board, delta);
        }
        if depth >= self.limits.max_depth {
            return evaluate(board, self.player, delta, &self.weights);
        }

        let mover = match side {
            Side::Max => self.player,
            Side::Min => self.opponent,
        };
        let moves = legal_moves(board, mover);
        if moves.is_empty() {
            if !has_legal_move(board, mover.other()) {
                return self.terminal_reward(board, delta);
            }
            // Pass: the other side moves on the same board one ply deeper.
            return self.value(board, depth + 1, delta, side.flip(), window);
        }

        let (mut alpha, mut beta) = window.unwrap_or((i32::MIN, i32::MAX));
        let mut best = match side {
            Side::Max => i32::MIN,
            Side::Min => i32::MAX,
        };

        for mv in moves {
            let capture = apply_move(board, mv, mover);
            let mut child_delta = delta;
            child_delta.add(mover, find_patterns(board, capture.touched()).len() as u32);
            let child_window = window.map(|_| (alpha, beta));
            let score = self.value(board, depth + 1, child_delta, side.flip(), child_window);
            capture.undo(board);

            match side {
                Side::Max => {
                    best = best.max(score);
                    if window.is_some() {
                        if best >= beta {
                            break;
                        }
                        alpha = alpha.max(best);
                    }
                }
                Side::Min => {
                    best = best.min(score);
                    if window.is_some() {
                        if best <= alpha {
                            break;
                        }
                        beta = beta.min(best);
                    }
                }
            }
        }
        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Owner;

    #[test]
    fn terminal_reward_counts_existing_bonus() {
        // 32 tiles each: a tie on tiles alone
        let mut board = Board::empty();
        for idx in 0..64u8 {
            board.set(idx, Some(if idx % 2 == 0 { Owner::A } else { Owner::B }));
        }
        let mut solver = Solver::new(Owner::B, 2);
        assert_eq!(solver.terminal_reward(&board, Bonus::default()), 0);

        solver.existing = Bonus([0, 1]);
        assert_eq!(solver.terminal_reward(&board, Bonus::default()), TERMINAL_REWARD);
        assert_eq!(solver.terminal_reward(&board, Bonus([2, 0])), -TERMINAL_REWARD);
    }

    #[test]
    fn full_board_node_is_terminal_before_depth_cutoff() {
        let mut board = Board::empty();
        for idx in 0..64u8 {
            board.set(idx, Some(if idx < 40 { Owner::A } else { Owner::B }));
        }
        let mut solver = Solver::new(Owner::A, 1);
        let v = solver.value(&mut board, 5, Bonus::default(), Side::Max, None);
        assert_eq!(v, TERMINAL_REWARD);
        assert_eq!(solver.nodes(), 1);
    }
}
