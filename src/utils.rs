use crate::engine::{Board, BLANK, BOARD_SIZE};
use crate::error::{Error, Result};
use flexi_logger::{FlexiLoggerError, Logger, LoggerHandle};
use std::path::Path;

/// Symbol used for the blank tile in puzzle definitions.
pub const BLANK_SYMBOL: &str = "*";

/// Start and goal boards read from a puzzle definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PuzzleDefinition {
    pub start: Board,
    pub goal: Board,
}

/// Parses rows of whitespace-separated tile tokens into a `Board`.
///
/// Each token is a digit `1`-`8`, or `*` (also accepted: `0`) for the blank.
///
/// # Errors
/// `Error::MalformedBoard` for an unknown token, a wrong number of rows or columns, or
/// a tile set that is not exactly `1`-`8` plus one blank.
///
/// # Examples
/// ```
/// use eight_puzzle::utils::board_from_str_array;
///
/// let board = board_from_str_array(&["1 2 3", "4 * 6", "7 5 8"]).unwrap();
/// assert_eq!(board.get_tile(1, 1), 0);
///
/// assert!(board_from_str_array(&["1 2 3", "4 * 6"]).is_err());
/// assert!(board_from_str_array(&["1 2 3", "4 X 6", "7 5 8"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board> {
    let mut rows = Vec::with_capacity(BOARD_SIZE);
    for (r, row_str) in s.iter().enumerate() {
        let row = row_str
            .split_whitespace()
            .enumerate()
            .map(|(c, token)| parse_tile(token, r, c))
            .collect::<Result<Vec<u8>>>()?;
        rows.push(row);
    }
    Board::from_rows(&rows)
}

fn parse_tile(token: &str, r: usize, c: usize) -> Result<u8> {
    if token == BLANK_SYMBOL {
        return Ok(BLANK);
    }
    match token.parse::<u8>() {
        Ok(value) if value <= 8 => Ok(value),
        _ => Err(Error::malformed(format!(
            "unrecognized tile '{}' in row {} col {}",
            token, r, c
        ))),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Section {
    Start,
    Goal,
}

/// Parses a puzzle definition: a `start` label and a `goal` label (either order,
/// case-insensitive), each followed by three rows of tiles. Blank lines are ignored.
///
/// ```text
/// start
/// 1 2 3
/// 4 * 6
/// 7 5 8
/// goal
/// 1 2 3
/// 4 5 6
/// 7 8 *
/// ```
///
/// # Errors
/// `Error::InvalidDefinition` for a missing, repeated or unknown section label, and
/// `Error::MalformedBoard` for a bad board.
pub fn parse_puzzle_definition(content: &str) -> Result<PuzzleDefinition> {
    let lines: Vec<(usize, &str)> = content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
        .collect();

    let mut start = None;
    let mut goal = None;
    let mut idx = 0;

    while idx < lines.len() {
        let (line_no, label) = lines[idx];
        let section = match label.to_ascii_lowercase().as_str() {
            "start" => Section::Start,
            "goal" => Section::Goal,
            _ => {
                return Err(Error::InvalidDefinition {
                    line: line_no,
                    reason: format!("expected 'start' or 'goal', found '{}'", label),
                })
            }
        };

        // Rows run until the next label or the end of input.
        let rows: Vec<&str> = lines[idx + 1..]
            .iter()
            .map(|&(_, line)| line)
            .take_while(|line| !is_label(line))
            .collect();
        idx += 1 + rows.len();

        let board = board_from_str_array(&rows)?;
        let slot = match section {
            Section::Start => &mut start,
            Section::Goal => &mut goal,
        };
        if slot.replace(board).is_some() {
            return Err(Error::InvalidDefinition {
                line: line_no,
                reason: format!("duplicate '{}' section", label),
            });
        }
    }

    let missing = |name: &str| Error::InvalidDefinition {
        line: lines.last().map_or(0, |&(n, _)| n),
        reason: format!("missing '{}' section", name),
    };
    Ok(PuzzleDefinition {
        start: start.ok_or_else(|| missing("start"))?,
        goal: goal.ok_or_else(|| missing("goal"))?,
    })
}

fn is_label(line: &str) -> bool {
    line.eq_ignore_ascii_case("start") || line.eq_ignore_ascii_case("goal")
}

/// Reads and parses a puzzle definition file.
pub fn load_puzzle_file(path: &Path) -> Result<PuzzleDefinition> {
    let content = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_puzzle_definition(&content)
}

/// Starts stderr logging with `spec` (e.g. `"info"`, `"eight_puzzle=debug"`), unless
/// `RUST_LOG` is set. Keep the returned handle alive for as long as logging is needed.
pub fn init_logger(spec: &str) -> std::result::Result<LoggerHandle, FlexiLoggerError> {
    Logger::try_with_env_or_str(spec)?
        .format(flexi_logger::colored_default_format)
        .start()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LABELLED_FORMAT: &str = "start\n1 2 3\n4 * 6\n7 5 8\ngoal\n1 2 3\n4 5 6\n7 8 *\n";

    #[test]
    fn test_board_from_str_array_valid() {
        let board = board_from_str_array(&["8 1 3", "2 * 4", "7 6 5"]).unwrap();
        assert_eq!(board.get_tile(0, 0), 8);
        assert_eq!(board.get_tile(1, 1), BLANK);
        assert_eq!(board.get_tile(2, 2), 5);
    }

    #[test]
    fn test_board_from_str_array_zero_blank() {
        let a = board_from_str_array(&["1 2 3", "4 0 6", "7 5 8"]).unwrap();
        let b = board_from_str_array(&["1 2 3", "4 * 6", "7 5 8"]).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_board_from_str_array_invalid_token() {
        let result = board_from_str_array(&["1 2 3", "4 * 6", "7 5 9"]);
        match result {
            Err(Error::MalformedBoard { reason }) => {
                assert!(reason.contains("unrecognized tile '9' in row 2 col 2"), "{}", reason)
            }
            other => panic!("expected MalformedBoard, got {:?}", other),
        }
    }

    #[test]
    fn test_board_from_str_array_missing_blank() {
        let result = board_from_str_array(&["1 2 3", "4 5 6", "7 8 8"]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_board_from_str_array_short_row() {
        let result = board_from_str_array(&["1 2 3", "4 *", "7 5 8 6"]);
        assert!(matches!(result, Err(Error::MalformedBoard { .. })));
    }

    #[test]
    fn test_parse_labelled_format() {
        let definition = parse_puzzle_definition(LABELLED_FORMAT).unwrap();
        assert_eq!(
            definition.start,
            Board::from_grid([[1, 2, 3], [4, 0, 6], [7, 5, 8]]).unwrap()
        );
        assert_eq!(
            definition.goal,
            Board::from_grid([[1, 2, 3], [4, 5, 6], [7, 8, 0]]).unwrap()
        );
    }

    #[test]
    fn test_parse_goal_first_with_blank_lines() {
        let content = "\nGOAL\n1 2 3\n8 * 4\n7 6 5\n\nStart\n2 8 3\n1 6 4\n7 * 5\n";
        let definition = parse_puzzle_definition(content).unwrap();
        assert_eq!(definition.goal, Board::clockwise_goal());
        assert_eq!(definition.start.get_tile(0, 1), 8);
    }

    #[test]
    fn test_parse_missing_goal() {
        let result = parse_puzzle_definition("start\n1 2 3\n4 * 6\n7 5 8\n");
        match result {
            Err(Error::InvalidDefinition { reason, .. }) => {
                assert!(reason.contains("missing 'goal'"))
            }
            other => panic!("expected InvalidDefinition, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_unknown_label() {
        let result = parse_puzzle_definition("begin\n1 2 3\n4 * 6\n7 5 8\n");
        assert!(matches!(
            result,
            Err(Error::InvalidDefinition { line: 1, .. })
        ));
    }

    #[test]
    fn test_parse_duplicate_section() {
        let content = "start\n1 2 3\n4 * 6\n7 5 8\nstart\n1 2 3\n4 * 6\n7 5 8\n";
        assert!(matches!(
            parse_puzzle_definition(content),
            Err(Error::InvalidDefinition { line: 5, .. })
        ));
    }

    #[test]
    fn test_parse_too_many_rows() {
        let content = "start\n1 2 3\n4 * 6\n7 5 8\n1 2 3\ngoal\n1 2 3\n4 5 6\n7 8 *\n";
        assert!(matches!(
            parse_puzzle_definition(content),
            Err(Error::MalformedBoard { .. })
        ));
    }

    #[test]
    fn test_load_puzzle_file_missing() {
        let result = load_puzzle_file(Path::new("/nonexistent/eight_puzzle/input.txt"));
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
