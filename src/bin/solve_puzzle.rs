use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::heuristics::HeuristicKind;
use eight_puzzle::utils::{init_logger, load_puzzle_file};
use eight_puzzle::{SolveOutcome, Solver};
use log::warn;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Heuristic: 1 = misplaced tiles, 2 = Manhattan distance, 3 = Nilsson sequence score
    #[clap(short = 'H', long, default_value_t = 1)]
    heuristic: u8,

    /// Print the report as JSON instead of the text trace
    #[clap(long)]
    json: bool,

    /// Log specification, e.g. "info" or "eight_puzzle=debug"
    #[clap(long, default_value = "info")]
    log_level: String,

    /// Path to the puzzle definition file (start and goal boards)
    puzzle_file: PathBuf,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = init_logger(&args.log_level).context("Failed to start logger")?;

    let heuristic = HeuristicKind::try_from(args.heuristic)?;
    let puzzle = load_puzzle_file(&args.puzzle_file).with_context(|| {
        format!(
            "Failed to read puzzle from file: {}",
            args.puzzle_file.display()
        )
    })?;

    if !puzzle.start.is_solvable_from(&puzzle.goal) {
        warn!("start and goal boards have different parity; the search will exhaust");
    }

    match Solver::new(puzzle.goal, heuristic).solve(&puzzle.start) {
        SolveOutcome::Solved(report) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                println!("Solution found: \n");
                println!("{}", report);
            }
        }
        SolveOutcome::NoSolution(stats) => {
            if args.json {
                let value = serde_json::json!({ "solved": false, "stats": stats });
                println!("{}", serde_json::to_string_pretty(&value)?);
            } else {
                println!("No solution was found.");
                println!("Number of nodes created: {}", stats.nodes_created);
                println!("Number of nodes explored: {}", stats.nodes_explored);
            }
        }
    }
    Ok(())
}
