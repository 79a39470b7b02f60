//! Boards built from text.
//!
//! The format is a line holding the side length `n`, followed by `n` rows of
//! exactly `n` characters each: `t` for a tower and `0` for a free cell
//! (case-insensitive). Lines after the last row are ignored.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use towerpath_core::{Board, BoardError, Tile};

/// Character marking a tower.
pub const TOWER: char = 't';
/// Character marking a free cell.
pub const FREE: char = '0';

/// Parse a board from its textual description.
pub fn parse_board(s: &str) -> Result<Board, ParseError> {
    let mut lines = s.lines();
    let header = lines.next().ok_or(ParseError::Empty)?;
    let n: usize = header
        .trim()
        .parse()
        .map_err(|_| ParseError::InvalidSize(header.to_string()))?;
    if n == 0 {
        return Err(ParseError::ZeroSize);
    }

    let rows: Vec<&str> = lines.take(n).collect();
    if rows.len() < n {
        return Err(ParseError::MissingRows {
            expected: n,
            found: rows.len(),
        });
    }

    // Every row must hold `n` characters before `n * n` tiles are reserved.
    for (row, line) in rows.iter().enumerate() {
        let width = line.chars().count();
        if width != n {
            return Err(ParseError::RowLength {
                row,
                expected: n,
                found: width,
            });
        }
    }

    let cells = n.checked_mul(n).ok_or(BoardError::TooLarge(n))?;
    let mut tiles = Vec::with_capacity(cells);
    for (row, line) in rows.iter().enumerate() {
        for (col, ch) in line.chars().enumerate() {
            let tile = match ch.to_ascii_lowercase() {
                TOWER => Tile::Hazard,
                FREE => Tile::Free,
                _ => return Err(ParseError::InvalidChar { ch, row, col }),
            };
            tiles.push(tile);
        }
    }

    let board = Board::new(n, tiles)?;
    log::debug!(
        "parsed {n}x{n} board with {} towers",
        board.hazards().count()
    );
    Ok(board)
}

/// Read and parse the board stored at `path`.
pub fn load_board(path: impl AsRef<Path>) -> Result<Board, ParseError> {
    let path = path.as_ref();
    log::info!("reading board from {}", path.display());
    let text = fs::read_to_string(path).map_err(ParseError::Io)?;
    parse_board(&text)
}

/// Errors that can occur when reading a board.
#[derive(Debug)]
pub enum ParseError {
    /// The input could not be read.
    Io(io::Error),
    /// The input has no lines at all.
    Empty,
    /// The first line is not a non-negative integer.
    InvalidSize(String),
    /// The declared size is zero.
    ZeroSize,
    /// Fewer rows than the declared size.
    MissingRows { expected: usize, found: usize },
    /// A row does not have exactly `n` characters.
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A character other than a tower or free marker.
    InvalidChar { ch: char, row: usize, col: usize },
    /// The parsed tiles were rejected by the board itself.
    Board(BoardError),
}

impl From<BoardError> for ParseError {
    fn from(e: BoardError) -> Self {
        Self::Board(e)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "board: cannot read input: {e}"),
            Self::Empty => write!(f, "board: input is empty"),
            Self::InvalidSize(s) => write!(f, "board: invalid size line \u{201c}{s}\u{201d}"),
            Self::ZeroSize => write!(f, "board: size must be at least 1"),
            Self::MissingRows { expected, found } => {
                write!(f, "board: expected {expected} rows, found {found}")
            }
            Self::RowLength {
                row,
                expected,
                found,
            } => write!(
                f,
                "board: row {row} has {found} characters, expected {expected}"
            ),
            Self::InvalidChar { ch, row, col } => write!(
                f,
                "board contains invalid character \u{201c}{ch}\u{201d} at row {row}, column {col}"
            ),
            Self::Board(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Board(e) => Some(e),
            _ => None,
        }
    }
}
