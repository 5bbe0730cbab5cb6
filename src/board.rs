//! Generalized Sudoku board.
//!
//! This module provides [`SudokuBoard`], a dense row-major grid of digits for any board
//! size n where n is a perfect square (4, 9, 16, ...). A value of 0 marks an empty cell.
//! The board is the input surface for the exact-cover machinery in [`crate::matrix`] and
//! [`crate::solver`]; it performs all input validation up front so that the matrix builder
//! can trust its preconditions.

use std::{error::Error, fmt, str::FromStr};

/// Errors returned from board construction and parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardError {
    /// The number of cells is not a perfect square.
    InvalidLength(usize),

    /// The board size is not itself a perfect square, so there is no region subdivision.
    NonSquareSize(usize),

    /// A cell value lies outside `0..=n`.
    ValueOutOfRange { row: usize, col: usize, value: u8 },

    /// A comma-delimited entry could not be parsed as a cell value.
    InvalidEntry { position: usize, text: String },

    /// A character in a compact puzzle string is not a digit or '.'.
    InvalidCharacter { position: usize, character: char },

    /// A cell coordinate was out of bounds.
    OutOfBounds { row: usize, col: usize },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidLength(len) => {
                write!(f, "board has {len} cells, which is not a perfect square")
            }
            BoardError::NonSquareSize(size) => {
                write!(f, "board size {size} is not a perfect square, so it has no regions")
            }
            BoardError::ValueOutOfRange { row, col, value } => {
                write!(f, "value {value} at row {row}, column {col} is outside the allowed range")
            }
            BoardError::InvalidEntry { position, text } => {
                write!(f, "entry '{text}' at position {position} is not a cell value")
            }
            BoardError::InvalidCharacter { position, character } => {
                write!(f, "invalid character '{character}' at position {position}; expected digits or '.'")
            }
            BoardError::OutOfBounds { row, col } => {
                write!(f, "cell at row {row}, column {col} is out of bounds")
            }
        }
    }
}

impl Error for BoardError {}

/// Mutable Sudoku board that stores digits in row-major order. Empty cells hold 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SudokuBoard {
    size: usize,
    region_size: usize,
    cells: Vec<u8>,
}

impl SudokuBoard {
    /// Creates an empty board with `size` cells per side. `size` must be a perfect square.
    pub fn empty(size: usize) -> Result<SudokuBoard, BoardError> {
        let region_size = exact_sqrt(size).ok_or(BoardError::NonSquareSize(size))?;
        Ok(SudokuBoard {
            size,
            region_size,
            cells: vec![0; size * size],
        })
    }

    /// Creates a board from a flat row-major slice of values, where 0 marks an empty cell.
    ///
    /// Fails fast on malformed input: the length must be `n²` for a perfect-square n,
    /// and every value must lie in `0..=n`.
    pub fn from_values(values: &[u8]) -> Result<SudokuBoard, BoardError> {
        let size = exact_sqrt(values.len()).ok_or(BoardError::InvalidLength(values.len()))?;
        let mut board = SudokuBoard::empty(size)?;
        for (index, &value) in values.iter().enumerate() {
            if value as usize > size {
                return Err(BoardError::ValueOutOfRange {
                    row: index / size,
                    col: index % size,
                    value,
                });
            }
            board.cells[index] = value;
        }
        Ok(board)
    }

    /// The number of cells per side (n).
    pub fn size(&self) -> usize {
        self.size
    }

    /// The side length of one region (√n).
    pub fn region_size(&self) -> usize {
        self.region_size
    }

    /// Returns the stored digit at the given cell (0 for empty).
    pub fn value(&self, row: usize, col: usize) -> u8 {
        assert!(row < self.size && col < self.size);
        self.cells[row * self.size + col]
    }

    /// Sets a digit (1..=n) or clears a cell by providing 0.
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) -> Result<(), BoardError> {
        if row >= self.size || col >= self.size {
            return Err(BoardError::OutOfBounds { row, col });
        }
        if value as usize > self.size {
            return Err(BoardError::ValueOutOfRange { row, col, value });
        }
        self.cells[row * self.size + col] = value;
        Ok(())
    }

    /// Unchecked-by-contract write used when projecting solver placements onto a board.
    pub(crate) fn fill(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(row < self.size && col < self.size);
        debug_assert!(value != 0 && value as usize <= self.size);
        self.cells[row * self.size + col] = value;
    }

    /// The flat row-major cell values.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Index of the region containing the given cell. Regions are numbered 0..n from
    /// left to right and top to bottom.
    pub fn region_of(&self, row: usize, col: usize) -> usize {
        (row / self.region_size) * self.region_size + (col / self.region_size)
    }

    /// Number of pre-filled (given) cells.
    pub fn num_givens(&self) -> usize {
        self.cells.iter().filter(|&&value| value != 0).count()
    }

    /// True when every cell holds a digit.
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|&value| value != 0)
    }
}

impl fmt::Display for SudokuBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let width = if self.size >= 10 { 2 } else { 1 };
        for row in 0..self.size {
            if row != 0 {
                writeln!(f)?;
            }
            for col in 0..self.size {
                if col != 0 {
                    write!(f, " ")?;
                }
                match self.value(row, col) {
                    0 => write!(f, "{:>width$}", ".")?,
                    value => write!(f, "{value:>width$}")?,
                }
            }
        }
        Ok(())
    }
}

impl FromStr for SudokuBoard {
    type Err = BoardError;

    /// Parses either the comma-delimited integer form (`3,4,1,0,...`, any board size) or
    /// the compact digit/'.' form (`53..7....6...`, sizes up to 9).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.contains(',') {
            let mut values = Vec::new();
            for (position, entry) in s.split(',').enumerate() {
                let text = entry.trim();
                let value = text.parse::<u8>().map_err(|_| BoardError::InvalidEntry {
                    position,
                    text: text.to_string(),
                })?;
                values.push(value);
            }
            return SudokuBoard::from_values(&values);
        }

        let mut values = Vec::new();
        for (position, ch) in s.chars().filter(|c| !c.is_whitespace()).enumerate() {
            let value = match ch {
                '1'..='9' => ch as u8 - b'0',
                '0' | '.' => 0,
                character => return Err(BoardError::InvalidCharacter { position, character }),
            };
            values.push(value);
        }
        SudokuBoard::from_values(&values)
    }
}

/// Returns the integer square root of `value` if `value` is a perfect square.
fn exact_sqrt(value: usize) -> Option<usize> {
    let root = (value as f64).sqrt().round() as usize;
    if root * root == value {
        Some(root)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_values_four_by_four() {
        let board = SudokuBoard::from_values(&[1, 0, 0, 4, 0, 4, 1, 0, 0, 1, 4, 0, 4, 0, 0, 1])
            .expect("valid board");
        assert_eq!(board.size(), 4);
        assert_eq!(board.region_size(), 2);
        assert_eq!(board.value(0, 0), 1);
        assert_eq!(board.value(0, 3), 4);
        assert_eq!(board.value(1, 2), 1);
        assert_eq!(board.num_givens(), 8);
        assert!(!board.is_complete());
    }

    #[test]
    fn from_values_rejects_bad_lengths() {
        // 5 cells is not a perfect square at all.
        assert_eq!(
            SudokuBoard::from_values(&[0; 5]).unwrap_err(),
            BoardError::InvalidLength(5)
        );

        // 9 cells gives a 3x3 board, but 3 is not a perfect square so there
        // is no region subdivision.
        assert_eq!(
            SudokuBoard::from_values(&[0; 9]).unwrap_err(),
            BoardError::NonSquareSize(3)
        );
    }

    #[test]
    fn from_values_rejects_out_of_range_values() {
        let mut values = [0u8; 16];
        values[6] = 5;
        assert_eq!(
            SudokuBoard::from_values(&values).unwrap_err(),
            BoardError::ValueOutOfRange {
                row: 1,
                col: 2,
                value: 5
            }
        );
    }

    #[test]
    fn parse_comma_delimited() {
        let board: SudokuBoard = "3,4,1,0,0,2,0,0,0,0,2,0,0,1,4,3".parse().expect("valid puzzle");
        assert_eq!(board.size(), 4);
        assert_eq!(board.value(0, 0), 3);
        assert_eq!(board.value(1, 1), 2);
        assert_eq!(board.value(3, 3), 3);

        let err = "3,4,x,0".parse::<SudokuBoard>().unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidEntry {
                position: 2,
                text: "x".to_string()
            }
        );
    }

    #[test]
    fn parse_compact_form() {
        let puzzle = "\
            530070000\
            600195000\
            098000060\
            800060003\
            400803001\
            700020006\
            060000280\
            000419005\
            000080079";
        let board: SudokuBoard = puzzle.parse().expect("valid puzzle");
        assert_eq!(board.size(), 9);
        assert_eq!(board.value(0, 0), 5);
        assert_eq!(board.value(0, 1), 3);
        assert_eq!(board.value(8, 8), 9);
        assert_eq!(board.num_givens(), 30);

        let err = "1.x4".parse::<SudokuBoard>().unwrap_err();
        assert_eq!(
            err,
            BoardError::InvalidCharacter {
                position: 2,
                character: 'x'
            }
        );
    }

    #[test]
    fn region_indices() {
        let board = SudokuBoard::empty(9).expect("9x9 board");
        assert_eq!(board.region_of(0, 0), 0);
        assert_eq!(board.region_of(0, 8), 2);
        assert_eq!(board.region_of(4, 4), 4);
        assert_eq!(board.region_of(8, 0), 6);
        assert_eq!(board.region_of(8, 8), 8);

        let board = SudokuBoard::empty(4).expect("4x4 board");
        assert_eq!(board.region_of(1, 1), 0);
        assert_eq!(board.region_of(1, 2), 1);
        assert_eq!(board.region_of(2, 1), 2);
        assert_eq!(board.region_of(3, 3), 3);
    }

    #[test]
    fn display_renders_grid() {
        let board = SudokuBoard::from_values(&[1, 0, 0, 4, 0, 4, 1, 0, 0, 1, 4, 0, 4, 0, 0, 1])
            .expect("valid board");
        let rendered = format!("{board}");
        assert_eq!(rendered, "1 . . 4\n. 4 1 .\n. 1 4 .\n4 . . 1");
    }

    #[test]
    fn set_value_validates_input() {
        let mut board = SudokuBoard::empty(4).expect("4x4 board");
        board.set_value(2, 3, 4).expect("in range");
        assert_eq!(board.value(2, 3), 4);

        board.set_value(2, 3, 0).expect("clearing is allowed");
        assert_eq!(board.value(2, 3), 0);

        assert_eq!(
            board.set_value(4, 0, 1).unwrap_err(),
            BoardError::OutOfBounds { row: 4, col: 0 }
        );
        assert_eq!(
            board.set_value(0, 0, 5).unwrap_err(),
            BoardError::ValueOutOfRange {
                row: 0,
                col: 0,
                value: 5
            }
        );
    }
}
