//! A* search driver with path-max correction.
use crate::engine::Board;
use crate::error::Result;
use crate::explored::ClosedSet;
use crate::frontier::Frontier;
use crate::heuristics::{nilsson_breakdown, Goal, HeuristicKind, NilssonBreakdown};
use crate::node::{NodeArena, NodeId};
use log::{info, trace};
use serde::Serialize;
use std::fmt;

/// Counters collected over one search run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// Every node built, including the root and nodes later discarded.
    pub nodes_created: usize,
    /// Successful extractions from the frontier.
    pub nodes_explored: usize,
}

/// One board on the solution path with its evaluation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SolutionStep {
    pub board: Board,
    pub f: u32,
    pub g: u32,
    pub h: u32,
    /// Present when the search used the Nilsson heuristic.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nilsson: Option<NilssonBreakdown>,
}

/// A path from the start board to the goal board.
#[derive(Clone, Debug, Serialize)]
pub struct SolutionReport {
    pub heuristic: HeuristicKind,
    /// Boards from start to goal.
    pub steps: Vec<SolutionStep>,
    /// Number of moves, `steps.len() - 1`.
    pub depth: usize,
    pub stats: SearchStats,
}

impl SolutionReport {
    pub fn boards(&self) -> impl Iterator<Item = &Board> + '_ {
        self.steps.iter().map(|step| &step.board)
    }
}

/// Terminal state of a search run.
#[derive(Clone, Debug)]
pub enum SolveOutcome {
    Solved(SolutionReport),
    /// The frontier emptied without reaching the goal.
    NoSolution(SearchStats),
}

impl SolveOutcome {
    pub fn stats(&self) -> SearchStats {
        match self {
            SolveOutcome::Solved(report) => report.stats,
            SolveOutcome::NoSolution(stats) => *stats,
        }
    }

    pub fn solution(&self) -> Option<&SolutionReport> {
        match self {
            SolveOutcome::Solved(report) => Some(report),
            SolveOutcome::NoSolution(_) => None,
        }
    }
}

/// Searches for a shortest sequence of blank slides to a fixed goal.
#[derive(Clone, Debug)]
pub struct Solver {
    goal: Goal,
    heuristic: HeuristicKind,
}

/// State owned by a single call to [`Solver::solve`].
struct SearchRun {
    arena: NodeArena,
    frontier: Frontier,
    closed: ClosedSet,
}

impl Solver {
    pub fn new(goal: Board, heuristic: HeuristicKind) -> Self {
        Solver {
            goal: Goal::new(goal),
            heuristic,
        }
    }

    pub fn goal(&self) -> &Goal {
        &self.goal
    }

    pub fn heuristic(&self) -> HeuristicKind {
        self.heuristic
    }

    /// Runs A* from `start`.
    ///
    /// Each call starts from empty open and closed sets and zeroed counters. The
    /// nodes list is kept until the run ends so the path can be rebuilt from the goal.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// use eight_puzzle::heuristics::HeuristicKind;
    /// use eight_puzzle::solver::Solver;
    ///
    /// let start = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
    /// let goal = Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap();
    /// let outcome = Solver::new(goal, HeuristicKind::Manhattan).solve(&start);
    /// assert_eq!(outcome.solution().unwrap().depth, 2);
    /// ```
    pub fn solve(&self, start: &Board) -> SolveOutcome {
        let mut run = SearchRun {
            arena: NodeArena::new(),
            frontier: Frontier::new(),
            closed: ClosedSet::new(),
        };
        info!("searching with {} heuristic", self.heuristic);

        let root_h = self.heuristic.evaluate(start, &self.goal);
        let root = run.arena.make_node(*start, 0, root_h, None);
        run.frontier.insert_or_improve(root, run.arena.get(root));

        while let Some(current) = run.frontier.extract_best() {
            run.closed.insert(&run.arena, current);

            let node = run.arena.get(current);
            if node.board() == self.goal.board() {
                let report = self.build_report(&run, current);
                info!(
                    "solved at depth {} ({} nodes created, {} explored)",
                    report.depth, report.stats.nodes_created, report.stats.nodes_explored
                );
                return SolveOutcome::Solved(report);
            }

            let (board, g) = (*node.board(), node.g());
            trace!("expanding node {} (f={}, g={})", current, node.f(), g);

            for child_board in board.generate_moves() {
                let h = self.heuristic.evaluate(&child_board, &self.goal);
                let child = run.arena.make_node(child_board, g + 1, h, Some(current));

                if run.closed.contains(&child_board) {
                    run.closed.reconsider(&run.arena, child, &mut run.frontier);
                } else {
                    run.frontier.insert_or_improve(child, run.arena.get(child));
                }
            }
        }

        let stats = Self::stats(&run);
        info!(
            "no solution found ({} nodes created, {} explored)",
            stats.nodes_created, stats.nodes_explored
        );
        SolveOutcome::NoSolution(stats)
    }

    fn stats(run: &SearchRun) -> SearchStats {
        SearchStats {
            nodes_created: run.arena.len(),
            nodes_explored: run.frontier.extracted(),
        }
    }

    fn build_report(&self, run: &SearchRun, goal_node: NodeId) -> SolutionReport {
        let steps: Vec<SolutionStep> = run
            .arena
            .path_to(goal_node)
            .into_iter()
            .map(|id| {
                let node = run.arena.get(id);
                SolutionStep {
                    board: *node.board(),
                    f: node.f(),
                    g: node.g(),
                    h: node.h(),
                    nilsson: (self.heuristic == HeuristicKind::Nilsson)
                        .then(|| nilsson_breakdown(node.board(), &self.goal)),
                }
            })
            .collect();

        SolutionReport {
            heuristic: self.heuristic,
            depth: steps.len() - 1,
            steps,
            stats: Self::stats(run),
        }
    }
}

/// Solves `start` → `goal` using the numeric heuristic selector `heuristic_option`
/// (1 = misplaced tiles, 2 = Manhattan distance, 3 = Nilsson sequence score).
///
/// # Errors
/// `Error::InvalidHeuristicOption` before any search is attempted.
pub fn solve(start: &Board, goal: &Board, heuristic_option: u8) -> Result<SolveOutcome> {
    let heuristic = HeuristicKind::try_from(heuristic_option)?;
    Ok(Solver::new(*goal, heuristic).solve(start))
}

impl fmt::Display for SolutionReport {
    /// The solution trace: each board with `F(n)`, `G(n)`, `H(n)` (and `P(n)`, `S(n)`
    /// for the Nilsson heuristic), followed by the search statistics.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            writeln!(f, "{}", step.board)?;
            writeln!(f, "F(n) = {}", step.f)?;
            writeln!(f, "G(n) = {}", step.g)?;
            writeln!(f, "H(n) = {}", step.h)?;
            if let Some(breakdown) = step.nilsson {
                writeln!(f, "P(n) = {}", breakdown.manhattan)?;
                writeln!(f, "S(n) = {}", breakdown.sequence)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "Depth of solution: {}", self.depth)?;
        writeln!(f, "Number of nodes created: {}", self.stats.nodes_created)?;
        write!(f, "Number of nodes explored: {}", self.stats.nodes_explored)
    }
}
