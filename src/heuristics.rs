//! Heuristic estimators for the remaining number of slides to the goal.
//!
//! Every estimator is a pure function of a board and a fixed [`Goal`]; none of them
//! looks at search state.
use crate::engine::{Board, BLANK, BOARD_SIZE, CELL_COUNT};
use crate::error::{Error, Result};
use serde::Serialize;
use std::fmt;

/// Border cells in clockwise order, starting at the top-left corner.
const CLOCKWISE_RING: [(usize, usize); 8] = [
    (0, 0),
    (0, 1),
    (0, 2),
    (1, 2),
    (2, 2),
    (2, 1),
    (2, 0),
    (1, 0),
];

const CENTRE: (usize, usize) = (1, 1);

/// A goal board together with the lookup tables the heuristics need.
///
/// Built once per search run.
#[derive(Clone, Debug)]
pub struct Goal {
    board: Board,
    /// Goal `(row, col)` of each tile value.
    positions: [(usize, usize); CELL_COUNT],
    /// The value that follows each tile clockwise around the goal border.
    /// `None` for the tile sitting in the goal centre.
    successors: [Option<u8>; CELL_COUNT],
}

impl Goal {
    pub fn new(board: Board) -> Self {
        let mut positions = [(0, 0); CELL_COUNT];
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                positions[board.get_tile(r, c) as usize] = (r, c);
            }
        }

        let mut successors = [None; CELL_COUNT];
        for (k, &(r, c)) in CLOCKWISE_RING.iter().enumerate() {
            let (nr, nc) = CLOCKWISE_RING[(k + 1) % CLOCKWISE_RING.len()];
            successors[board.get_tile(r, c) as usize] = Some(board.get_tile(nr, nc));
        }

        Goal {
            board,
            positions,
            successors,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Goal position of `tile`.
    pub fn position_of(&self, tile: u8) -> (usize, usize) {
        self.positions[tile as usize]
    }

    fn centre_tile(&self) -> u8 {
        self.board.get_tile(CENTRE.0, CENTRE.1)
    }
}

/// Selects one of the three estimators. The discriminants are the numeric
/// options accepted on the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum HeuristicKind {
    MisplacedTiles = 1,
    Manhattan = 2,
    Nilsson = 3,
}

impl HeuristicKind {
    pub const ALL: [HeuristicKind; 3] = [
        HeuristicKind::MisplacedTiles,
        HeuristicKind::Manhattan,
        HeuristicKind::Nilsson,
    ];

    /// Numeric selector for this heuristic.
    pub fn option(&self) -> u8 {
        *self as u8
    }

    /// Estimates the remaining cost from `board` to `goal`.
    pub fn evaluate(&self, board: &Board, goal: &Goal) -> u32 {
        match self {
            HeuristicKind::MisplacedTiles => misplaced_tiles(board, goal),
            HeuristicKind::Manhattan => manhattan_distance(board, goal),
            HeuristicKind::Nilsson => nilsson_score(board, goal),
        }
    }

    /// Whether the estimator never overestimates and satisfies the triangle inequality.
    pub fn is_consistent(&self) -> bool {
        !matches!(self, HeuristicKind::Nilsson)
    }
}

impl TryFrom<u8> for HeuristicKind {
    type Error = Error;

    fn try_from(option: u8) -> Result<Self> {
        match option {
            1 => Ok(HeuristicKind::MisplacedTiles),
            2 => Ok(HeuristicKind::Manhattan),
            3 => Ok(HeuristicKind::Nilsson),
            _ => Err(Error::InvalidHeuristicOption { option }),
        }
    }
}

impl fmt::Display for HeuristicKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HeuristicKind::MisplacedTiles => "misplaced tiles",
            HeuristicKind::Manhattan => "Manhattan distance",
            HeuristicKind::Nilsson => "Nilsson sequence score",
        };
        write!(f, "{}", s)
    }
}

/// Returns the heuristic value of `board` for the numeric selector `option`
/// (1 = misplaced tiles, 2 = Manhattan distance, 3 = Nilsson sequence score).
///
/// # Errors
/// `Error::InvalidHeuristicOption` for any other selector.
///
/// # Examples
/// ```
/// use eight_puzzle::engine::Board;
/// use eight_puzzle::heuristics::{heuristic, Goal};
///
/// let goal = Goal::new(Board::clockwise_goal());
/// assert_eq!(heuristic(&Board::clockwise_goal(), &goal, 3).unwrap(), 0);
/// assert!(heuristic(&Board::clockwise_goal(), &goal, 4).is_err());
/// ```
pub fn heuristic(board: &Board, goal: &Goal, option: u8) -> Result<u32> {
    let kind = HeuristicKind::try_from(option)?;
    Ok(kind.evaluate(board, goal))
}

/// Counts the non-blank cells whose tile differs from the goal's tile at that cell.
/// Admissible and consistent.
pub fn misplaced_tiles(board: &Board, goal: &Goal) -> u32 {
    board
        .cells()
        .zip(goal.board().cells())
        .filter(|&(tile, target)| tile != BLANK && tile != target)
        .count() as u32
}

/// Sums, over all non-blank tiles, the row and column distance between the tile's
/// current cell and its goal cell. Admissible and consistent.
pub fn manhattan_distance(board: &Board, goal: &Goal) -> u32 {
    let mut total = 0;
    for r in 0..BOARD_SIZE {
        for c in 0..BOARD_SIZE {
            let tile = board.get_tile(r, c);
            if tile != BLANK {
                let (goal_r, goal_c) = goal.position_of(tile);
                total += (r.abs_diff(goal_r) + c.abs_diff(goal_c)) as u32;
            }
        }
    }
    total
}

/// The two components of the Nilsson score for one board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NilssonBreakdown {
    /// Sequence score `S(n)`.
    pub sequence: u32,
    /// Manhattan distance `P(n)`.
    pub manhattan: u32,
}

impl NilssonBreakdown {
    /// `3 × S + P`.
    pub fn total(&self) -> u32 {
        3 * self.sequence + self.manhattan
    }
}

/// Nilsson's sequence score `S(n)`.
///
/// Reading the border clockwise, every non-blank tile that is not immediately followed
/// by its goal successor scores 2. A tile in the centre scores 1 unless it is the goal's
/// centre tile. With the clockwise goal the successor of `t` is `(t mod 8) + 1` and any
/// tile in the centre scores 1.
pub fn sequence_score(board: &Board, goal: &Goal) -> u32 {
    let mut score = 0;

    for (k, &(r, c)) in CLOCKWISE_RING.iter().enumerate() {
        let tile = board.get_tile(r, c);
        if tile == BLANK {
            continue;
        }
        let (nr, nc) = CLOCKWISE_RING[(k + 1) % CLOCKWISE_RING.len()];
        if goal.successors[tile as usize] != Some(board.get_tile(nr, nc)) {
            score += 2;
        }
    }

    let centre = board.get_tile(CENTRE.0, CENTRE.1);
    if centre != BLANK && centre != goal.centre_tile() {
        score += 1;
    }
    score
}

/// Splits the Nilsson score of `board` into its sequence and Manhattan parts.
pub fn nilsson_breakdown(board: &Board, goal: &Goal) -> NilssonBreakdown {
    NilssonBreakdown {
        sequence: sequence_score(board, goal),
        manhattan: manhattan_distance(board, goal),
    }
}

/// Nilsson sequence score `3 × S(n) + P(n)`.
///
/// This estimator can overestimate and is not consistent; the search compensates
/// with the path-max rule when computing `f`.
pub fn nilsson_score(board: &Board, goal: &Goal) -> u32 {
    nilsson_breakdown(board, goal).total()
}
