use anyhow::{Context, Result};
use clap::Parser;
use eight_puzzle::engine::Board;
use eight_puzzle::heuristics::HeuristicKind;
use eight_puzzle::{SolveOutcome, Solver};
use eight_puzzle::utils::init_logger;
use log::{info, warn};
use std::collections::HashMap;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Compare the heuristics on seeded scrambles of the clockwise goal", long_about = None)]
struct Args {
    /// Number of scrambled boards to evaluate
    #[clap(long, default_value_t = 20)]
    boards: usize,

    /// Random slides applied to the goal to build each start board
    #[clap(long, default_value_t = 40)]
    scramble: usize,

    /// Seed of the first board; board `i` uses `seed + i`
    #[clap(long, default_value_t = 0)]
    seed: u64,

    /// Log specification, e.g. "warn" or "eight_puzzle=debug"
    #[clap(long, default_value = "warn")]
    log_level: String,
}

#[derive(Default)]
struct Totals {
    depth: usize,
    created: usize,
    explored: usize,
    solved: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let _logger = init_logger(&args.log_level).context("Failed to start logger")?;

    let goal = Board::clockwise_goal();
    let solvers: Vec<Solver> = HeuristicKind::ALL
        .iter()
        .map(|&kind| Solver::new(goal, kind))
        .collect();
    let mut totals: HashMap<HeuristicKind, Totals> = HashMap::new();

    println!("Starting heuristic evaluation for {} boards...", args.boards);

    for board_idx in 0..args.boards {
        let current_seed = args.seed + board_idx as u64;
        let start = goal.scramble_with_seed(args.scramble, current_seed);
        info!("board {} (seed {}):\n{}", board_idx, current_seed, start);

        println!("\nEvaluating Board {} (Seed: {})", board_idx, current_seed);

        let mut optimal_depth: Option<usize> = None;
        for solver in &solvers {
            let kind = solver.heuristic();
            let entry = totals.entry(kind).or_default();
            match solver.solve(&start) {
                SolveOutcome::Solved(report) => {
                    println!(
                        "  Heuristic: {:<24}, Depth: {:<4}, Created: {:<8}, Explored: {}",
                        kind.to_string(),
                        report.depth,
                        report.stats.nodes_created,
                        report.stats.nodes_explored
                    );
                    if kind.is_consistent() {
                        match optimal_depth {
                            Some(depth) if depth != report.depth => warn!(
                                "{} found depth {} but another consistent heuristic found {}",
                                kind, report.depth, depth
                            ),
                            _ => optimal_depth = Some(report.depth),
                        }
                    }
                    entry.depth += report.depth;
                    entry.created += report.stats.nodes_created;
                    entry.explored += report.stats.nodes_explored;
                    entry.solved += 1;
                }
                SolveOutcome::NoSolution(stats) => {
                    warn!(
                        "{} exhausted the search on a reachable board ({} nodes explored)",
                        kind, stats.nodes_explored
                    );
                }
            }
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of boards evaluated: {}", args.boards);
    println!("\n--- Averages ---");

    for kind in HeuristicKind::ALL {
        let Some(t) = totals.get(&kind).filter(|t| t.solved > 0) else {
            println!("Heuristic {}: No solutions recorded.", kind);
            continue;
        };
        let n = t.solved as f64;
        println!(
            "Heuristic {:<24}: Depth = {:.2}, Created = {:.1}, Explored = {:.1}",
            kind.to_string(),
            t.depth as f64 / n,
            t.created as f64 / n,
            t.explored as f64 / n
        );
    }
    Ok(())
}
