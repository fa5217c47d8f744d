use clap::{Parser, ValueEnum};
use log::{info, warn};
use rand::seq::SliceRandom;

use flipsos::{rng_for_game, GameState, Outcome, Owner, SearchLimits, Solver, Status, Weights};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Opponent {
    /// B is another computer player
    Computer,
    /// B picks uniformly random legal moves
    Random,
}

#[derive(Debug, Parser)]
#[command(name = "selfplay", about = "FlipSOS computer-vs-computer matches")]
struct Args {
    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u64,

    /// Search depth (plies) for player A
    #[arg(long, default_value_t = 4)]
    depth_a: u8,

    /// Search depth (plies) for player B when it is a computer
    #[arg(long, default_value_t = 2)]
    depth_b: u8,

    /// Who plays B
    #[arg(long, value_enum, default_value_t = Opponent::Computer)]
    opponent: Opponent,

    /// Use plain minimax instead of alpha-beta
    #[arg(long)]
    no_prune: bool,

    /// Stop expanding root moves after this many nodes
    #[arg(long)]
    node_budget: Option<u64>,

    /// Seed for the random opponent (deterministic per game)
    #[arg(long, default_value_t = 0x00C0FFEEu64)]
    seed: u64,

    /// Print the final board of each game
    #[arg(long)]
    show_board: bool,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "info")]
    log_level: log::Level,
}

fn solver_for(player: Owner, depth: u8, node_budget: Option<u64>) -> Solver {
    let limits = SearchLimits { max_depth: depth, node_budget };
    Solver::with_config(player, limits, Weights::default())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let prune = !args.no_prune;
    let mut solver_a = solver_for(Owner::A, args.depth_a, args.node_budget);
    let mut solver_b = solver_for(Owner::B, args.depth_b, args.node_budget);

    let mut wins_a = 0u64;
    let mut wins_b = 0u64;
    let mut draws = 0u64;

    for game_id in 0..args.games {
        let mut rng = rng_for_game(args.seed, game_id);
        let mut state = GameState::new();
        let mut plies = 0u32;

        let outcome = loop {
            let mv = match (state.next, args.opponent) {
                (Owner::A, _) => solver_a.search(&state, prune).best_move,
                (Owner::B, Opponent::Computer) => solver_b.search(&state, prune).best_move,
                (Owner::B, Opponent::Random) => state.legal_moves().choose(&mut rng).copied(),
            };
            let Some(mv) = mv else {
                // switch_player never hands the turn to a side without moves
                warn!("{:?} to move without a legal move; ending game", state.next);
                break flipsos::winner(&state.board, state.bonus);
            };
            plies += 1;
            let (_, status) = state.advance(mv);
            if state.last_skipped {
                info!("game {}: {:?} passes", game_id, state.next.other());
            }
            if let Status::GameOver(outcome) = status {
                break outcome;
            }
        };

        match outcome {
            Outcome::Winner(Owner::A) => wins_a += 1,
            Outcome::Winner(Owner::B) => wins_b += 1,
            Outcome::Draw => draws += 1,
        }
        println!(
            "[selfplay] game {}: {:?} after {} plies (A {} = {} tiles + {} bonus, B {} = {} tiles + {} bonus)",
            game_id,
            outcome,
            plies,
            state.combined_score(Owner::A),
            state.board.count_tiles().a,
            state.bonus.of(Owner::A),
            state.combined_score(Owner::B),
            state.board.count_tiles().b,
            state.bonus.of(Owner::B),
        );
        if args.show_board {
            print!("{}", state.board);
        }
    }

    println!(
        "[selfplay] {} games: A won {}, B won {}, draws {}",
        args.games, wins_a, wins_b, draws
    );
    Ok(())
}
