//! Board model for the 3×3 sliding-tile puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: an immutable 3×3 grid of tile values, with validation, tile lookup,
//!   move generation and a permutation-parity check.
//! - `Move`: the four directions the blank can travel in.
use crate::error::{Error, Result};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use serde::Serialize;
use std::fmt;

/// Width and height of the board. The puzzle is always 3×3.
pub const BOARD_SIZE: usize = 3;

/// Number of cells on the board, and therefore the number of distinct tile values.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Tile value used for the blank cell.
pub const BLANK: u8 = 0;

/// Direction the blank travels in when it swaps with a neighbouring tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    /// All moves in expansion order.
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Row and column offset of the blank for this move.
    pub fn as_offset(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }

    /// The move that undoes this one.
    pub fn opposite(&self) -> Self {
        match self {
            Move::Up => Move::Down,
            Move::Down => Move::Up,
            Move::Left => Move::Right,
            Move::Right => Move::Left,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Move::Up => "Up",
            Move::Down => "Down",
            Move::Left => "Left",
            Move::Right => "Right",
        };
        write!(f, "{}", s)
    }
}

/// A puzzle configuration: a 3×3 grid holding each value `0..=8` exactly once,
/// where `0` is the blank.
///
/// Boards are plain values. Every move produces a fresh board and never touches
/// the one it was generated from.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Board {
    grid: [[u8; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a board from a grid, checking that every value `0..=8` appears exactly once.
    ///
    /// # Errors
    /// Returns `Error::MalformedBoard` if a value is out of range, duplicated or missing.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// let board = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap();
    /// assert_eq!(board.locate(0), Some((1, 1)));
    ///
    /// assert!(Board::from_grid([[1, 1, 3], [4, 0, 6], [7, 5, 8]]).is_err());
    /// ```
    pub fn from_grid(grid: [[u8; BOARD_SIZE]; BOARD_SIZE]) -> Result<Self> {
        let mut seen = [0usize; CELL_COUNT];
        for &value in grid.iter().flatten() {
            let slot = seen.get_mut(value as usize).ok_or_else(|| {
                Error::malformed(format!(
                    "tile value {} is out of range 0-{}",
                    value,
                    CELL_COUNT - 1
                ))
            })?;
            *slot += 1;
        }

        let duplicated: Vec<String> = (0..CELL_COUNT)
            .filter(|&v| seen[v] > 1)
            .map(|v| v.to_string())
            .collect();
        if !duplicated.is_empty() {
            let missing: Vec<String> = (0..CELL_COUNT)
                .filter(|&v| seen[v] == 0)
                .map(|v| if v == 0 { "blank".to_string() } else { v.to_string() })
                .collect();
            return Err(Error::malformed(format!(
                "duplicate tile values [{}], missing [{}]",
                duplicated.join(", "),
                missing.join(", ")
            )));
        }

        Ok(Board { grid })
    }

    /// Creates a board from row vectors, checking the 3×3 shape before the tile values.
    ///
    /// # Errors
    /// Returns `Error::MalformedBoard` for a wrong number of rows or columns, or for any
    /// problem reported by [`Board::from_grid`].
    pub fn from_rows(rows: &[Vec<u8>]) -> Result<Self> {
        if rows.len() != BOARD_SIZE {
            return Err(Error::malformed(format!(
                "expected {} rows, found {}",
                BOARD_SIZE,
                rows.len()
            )));
        }

        let mut grid = [[BLANK; BOARD_SIZE]; BOARD_SIZE];
        for (r, row) in rows.iter().enumerate() {
            if row.len() != BOARD_SIZE {
                return Err(Error::malformed(format!(
                    "row {} has {} tiles (expected {})",
                    r,
                    row.len(),
                    BOARD_SIZE
                )));
            }
            grid[r].copy_from_slice(row);
        }
        Self::from_grid(grid)
    }

    /// The canonical goal with tiles numbered clockwise around an empty centre:
    ///
    /// ```text
    /// 1 2 3
    /// 8 * 4
    /// 7 6 5
    /// ```
    pub fn clockwise_goal() -> Self {
        Board {
            grid: [[1, 2, 3], [8, 0, 4], [7, 6, 5]],
        }
    }

    /// Returns the tile at row `r`, column `c`.
    ///
    /// # Panics
    /// Panics if `r` or `c` is outside `0..BOARD_SIZE`.
    pub fn get_tile(&self, r: usize, c: usize) -> u8 {
        self.grid[r][c]
    }

    /// Iterates over the cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = u8> + '_ {
        self.grid.iter().flatten().copied()
    }

    /// Returns the `(row, col)` holding `value`, or `None` if no cell holds it.
    pub fn locate(&self, value: u8) -> Option<(usize, usize)> {
        self.grid.iter().enumerate().find_map(|(r, row)| {
            row.iter().position(|&tile| tile == value).map(|c| (r, c))
        })
    }

    /// Position of the blank.
    pub fn blank_position(&self) -> (usize, usize) {
        // Construction guarantees exactly one blank.
        self.locate(BLANK).unwrap_or((0, 0))
    }

    /// Slides the blank one cell in direction `movement`.
    ///
    /// # Returns
    /// * `Some(board)` with the blank swapped with its neighbour.
    /// * `None` if the move would take the blank off the board.
    pub fn apply_move(&self, movement: Move) -> Option<Board> {
        let (blank_r, blank_c) = self.blank_position();
        let (dr, dc) = movement.as_offset();
        let adj_r = blank_r.checked_add_signed(dr).filter(|&r| r < BOARD_SIZE)?;
        let adj_c = blank_c.checked_add_signed(dc).filter(|&c| c < BOARD_SIZE)?;

        let mut grid = self.grid;
        grid[blank_r][blank_c] = grid[adj_r][adj_c];
        grid[adj_r][adj_c] = BLANK;
        Some(Board { grid })
    }

    /// Every `(move, board)` reachable in one slide of the blank, in `Move::ALL` order.
    pub fn successors(&self) -> Vec<(Move, Board)> {
        Move::ALL
            .iter()
            .filter_map(|&mv| self.apply_move(mv).map(|board| (mv, board)))
            .collect()
    }

    /// Boards reachable by swapping the blank with an orthogonal neighbour
    /// (up, down, left, right order). A corner blank yields 2 boards, an edge
    /// blank 3 and a centre blank 4.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle::engine::Board;
    /// let board = Board::clockwise_goal();
    /// assert_eq!(board.generate_moves().len(), 4);
    /// ```
    pub fn generate_moves(&self) -> Vec<Board> {
        self.successors().into_iter().map(|(_, board)| board).collect()
    }

    /// Number of tile pairs (blank excluded) that appear in the opposite order
    /// to their numeric order when the board is read row by row.
    pub fn count_inversions(&self) -> usize {
        let tiles: Vec<u8> = self.cells().filter(|&t| t != BLANK).collect();
        tiles
            .iter()
            .enumerate()
            .map(|(i, &val)| tiles[i + 1..].iter().filter(|&&next| next < val).count())
            .sum()
    }

    /// Whether `goal` can be reached from this board.
    ///
    /// On an odd-width board every slide preserves the inversion parity, so two
    /// boards are mutually reachable exactly when their inversion counts share parity.
    pub fn is_solvable_from(&self, goal: &Board) -> bool {
        self.count_inversions() % 2 == goal.count_inversions() % 2
    }

    /// Random walk of `steps` slides from this board, never immediately undoing the
    /// previous slide. The same seed always produces the same board, and the result
    /// is always reachable from `self`.
    pub fn scramble_with_seed(&self, steps: usize, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = *self;
        let mut last_move: Option<Move> = None;

        for _ in 0..steps {
            let candidates: Vec<(Move, Board)> = board
                .successors()
                .into_iter()
                .filter(|(mv, _)| last_move.map_or(true, |last| *mv != last.opposite()))
                .collect();
            match candidates.choose(&mut rng) {
                Some(&(mv, next)) => {
                    board = next;
                    last_move = Some(mv);
                }
                None => break,
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Three rows of space-separated tiles with the blank shown as `*`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            let tokens: Vec<String> = row
                .iter()
                .map(|&t| if t == BLANK { "*".to_string() } else { t.to_string() })
                .collect();
            write!(f, "{}", tokens.join(" "))?;
            if r < BOARD_SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(grid: [[u8; 3]; 3]) -> Board {
        Board::from_grid(grid).unwrap()
    }

    #[test]
    fn test_from_grid_valid() {
        let b = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        assert_eq!(b.get_tile(0, 0), 1);
        assert_eq!(b.get_tile(1, 1), BLANK);
        assert_eq!(b.get_tile(2, 2), 8);
    }

    #[test]
    fn test_from_grid_duplicate_tile() {
        let result = Board::from_grid([[1, 2, 3], [4, 4, 6], [7, 5, 8]]);
        match result {
            Err(Error::MalformedBoard { reason }) => {
                assert!(reason.contains("duplicate tile values [4]"), "{}", reason);
                assert!(reason.contains("missing [blank]"), "{}", reason);
            }
            other => panic!("expected MalformedBoard, got {:?}", other),
        }
    }

    #[test]
    fn test_from_grid_out_of_range() {
        let result = Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 9]]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_from_rows_wrong_shape() {
        let too_few = vec![vec![1, 2, 3], vec![4, 0, 6]];
        assert!(matches!(
            Board::from_rows(&too_few),
            Err(Error::MalformedBoard { .. })
        ));

        let short_row = vec![vec![1, 2, 3], vec![4, 0], vec![7, 5, 8, 6]];
        match Board::from_rows(&short_row) {
            Err(Error::MalformedBoard { reason }) => assert!(reason.contains("row 1")),
            other => panic!("expected MalformedBoard, got {:?}", other),
        }
    }

    #[test]
    fn test_equality_is_structural() {
        let a = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let b = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let c = board([[1, 2, 3], [4, 6, 0], [7, 5, 8]]);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_locate() {
        let b = Board::clockwise_goal();
        assert_eq!(b.locate(0), Some((1, 1)));
        assert_eq!(b.locate(8), Some((1, 0)));
        assert_eq!(b.locate(5), Some((2, 2)));
        assert_eq!(b.locate(9), None);
    }

    #[test]
    fn test_generate_moves_counts() {
        let corner = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        let edge = board([[1, 0, 2], [3, 4, 5], [6, 7, 8]]);
        let centre = board([[1, 2, 3], [4, 0, 5], [6, 7, 8]]);
        assert_eq!(corner.generate_moves().len(), 2);
        assert_eq!(edge.generate_moves().len(), 3);
        assert_eq!(centre.generate_moves().len(), 4);
    }

    #[test]
    fn test_generate_moves_swaps_blank_in_order() {
        let b = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let children = b.generate_moves();
        assert_eq!(
            children,
            vec![
                board([[1, 0, 3], [4, 2, 6], [7, 5, 8]]),
                board([[1, 2, 3], [4, 5, 6], [7, 0, 8]]),
                board([[1, 2, 3], [0, 4, 6], [7, 5, 8]]),
                board([[1, 2, 3], [4, 6, 0], [7, 5, 8]]),
            ]
        );
        // The source board is untouched.
        assert_eq!(b, board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]));
    }

    #[test]
    fn test_generate_moves_children_differ_in_two_cells() {
        let b = board([[8, 1, 3], [2, 0, 4], [7, 6, 5]]);
        for child in b.generate_moves() {
            let diff = b.cells().zip(child.cells()).filter(|(x, y)| x != y).count();
            assert_eq!(diff, 2);
            assert!(child.generate_moves().contains(&b));
        }
    }

    #[test]
    fn test_apply_move_out_of_bounds() {
        let corner = board([[0, 1, 2], [3, 4, 5], [6, 7, 8]]);
        assert!(corner.apply_move(Move::Up).is_none());
        assert!(corner.apply_move(Move::Left).is_none());
        assert_eq!(
            corner.apply_move(Move::Right),
            Some(board([[1, 0, 2], [3, 4, 5], [6, 7, 8]]))
        );
    }

    #[test]
    fn test_move_opposite() {
        for mv in Move::ALL {
            assert_eq!(mv.opposite().opposite(), mv);
            assert_ne!(mv.opposite(), mv);
        }
    }

    #[test]
    fn test_is_solvable_from() {
        let goal = board([[1, 2, 3], [4, 5, 6], [7, 8, 0]]);
        let reachable = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        let swapped = board([[2, 1, 3], [4, 5, 6], [7, 8, 0]]);
        assert!(reachable.is_solvable_from(&goal));
        assert!(!swapped.is_solvable_from(&goal));
        assert_eq!(swapped.count_inversions(), 1);
    }

    #[test]
    fn test_scramble_with_seed_determinism() {
        let goal = Board::clockwise_goal();
        let a = goal.scramble_with_seed(30, 7);
        let b = goal.scramble_with_seed(30, 7);
        assert_eq!(a, b);
        assert!(a.is_solvable_from(&goal));
        assert_eq!(goal.scramble_with_seed(0, 7), goal);
    }

    #[test]
    fn test_display_board_formatting() {
        let b = board([[1, 2, 3], [4, 0, 6], [7, 5, 8]]);
        assert_eq!(b.to_string(), "1 2 3\n4 * 6\n7 5 8");
    }
}
