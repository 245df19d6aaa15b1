//! # Eight Puzzle Solver Library
//!
//! This library finds minimum-move solutions to the 3×3 sliding-tile puzzle with
//! A* search, guided by one of three heuristics and corrected with the path-max rule
//! so that an inconsistent heuristic still gives non-decreasing `f` along every path.
//!
//! It is used by two binaries:
//! - `solve_puzzle`: reads a start/goal puzzle definition file and prints the
//!   solution trace with per-step `f`, `g`, `h` values and search statistics.
//! - `heuristic_evaluator`: compares the three heuristics on seeded scrambles.
//!
//! ## Modules
//! - `engine`: the board model (`Board`, `Move`), validation and move generation.
//! - `heuristics`: misplaced tiles, Manhattan distance and Nilsson sequence score,
//!   selected through `HeuristicKind`.
//! - `node`: search nodes and the arena that owns them for one run.
//! - `frontier`: the open set, a binary heap with duplicate-board reconciliation.
//! - `explored`: the closed set, with reopening of boards reached more cheaply.
//! - `solver`: the search driver (`Solver`, `solve`) and its report types.
//! - `utils`: puzzle definition parsing and logger setup.
//! - `error`: the crate `Error` type.

pub mod engine;
pub mod error;
pub mod explored;
pub mod frontier;
pub mod heuristics;
pub mod node;
pub mod solver;
pub mod utils;

pub use error::{Error, Result};
pub use solver::{solve, SearchStats, SolutionReport, SolveOutcome, Solver};
