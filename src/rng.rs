use rand::seq::SliceRandom;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

use crate::state::{GameState, Status};

/// Deterministic RNG factory for a given (seed, game_id) pair.
///
/// Derives a per-game 64-bit seed as `seed ^ game_id.rotate_left(32)` and feeds
/// it to PCG64, so equal inputs reproduce the same sequence across runs.
#[inline]
pub fn rng_for_game(seed: u64, game_id: u64) -> impl Rng {
    let derived: u64 = seed ^ game_id.rotate_left(32);
    Pcg64::seed_from_u64(derived)
}

/// Play up to `plies` uniformly random legal moves from the starting position.
/// Stops early if the game ends.
pub fn random_position<R: Rng>(rng: &mut R, plies: usize) -> GameState {
    let mut state = GameState::new();
    for _ in 0..plies {
        let moves = state.legal_moves();
        let Some(&mv) = moves.choose(rng) else { break };
        if let (_, Status::GameOver(_)) = state.advance(mv) {
            break;
        }
    }
    state
}
