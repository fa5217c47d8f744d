use std::io::Read;
use std::path::PathBuf;

use clap::Parser;

use flipsos::{Board, Bonus, Owner, SearchLimits, Solver, Weights};

#[derive(Debug, Parser)]
#[command(name = "bestmove", about = "Pick the computer's move for a FlipSOS board")]
struct Args {
    /// Board file in console form (8 rows of S/O/-); '-' reads stdin
    #[arg(long, default_value = "-")]
    board: PathBuf,

    /// Side to search for: A/S or B/O
    #[arg(long, default_value = "B")]
    side: String,

    /// Search depth in plies
    #[arg(long, default_value_t = 4)]
    depth: u8,

    /// Use plain minimax instead of alpha-beta
    #[arg(long)]
    no_prune: bool,

    /// Stop expanding root moves after this many nodes
    #[arg(long)]
    node_budget: Option<u64>,

    /// Pattern bonus already banked by A
    #[arg(long, default_value_t = 0)]
    bonus_a: u32,

    /// Pattern bonus already banked by B
    #[arg(long, default_value_t = 0)]
    bonus_b: u32,

    /// Log level for diagnostics on stderr
    #[arg(long, default_value = "warn")]
    log_level: log::Level,
}

fn read_board(path: &PathBuf) -> Result<String, std::io::Error> {
    if path.as_os_str() == "-" {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf)?;
        Ok(buf)
    } else {
        std::fs::read_to_string(path)
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    simple_logger::init_with_level(args.log_level)?;

    let text = read_board(&args.board).map_err(|e| format!("Board read error: {e}"))?;
    let board: Board = text.parse().map_err(|e| format!("Board parse error: {e}"))?;
    let side: Owner = args.side.parse()?;

    let limits = SearchLimits { max_depth: args.depth, node_budget: args.node_budget };
    let mut solver = Solver::with_config(side, limits, Weights::default());
    let bonus = Bonus([args.bonus_a, args.bonus_b]);

    let result = if args.no_prune {
        solver.best_move(&board, bonus)
    } else {
        solver.best_move_alpha_beta(&board, bonus)
    };

    if result.best_move.is_none() {
        eprintln!("[bestmove] {:?} has no legal move on this board", side);
    }
    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
