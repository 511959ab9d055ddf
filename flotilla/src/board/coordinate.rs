use std::{fmt, str::FromStr};

use thiserror::Error;

/// The address of a single cell on the board, written as a column letter
/// followed by a 1-based row number, like `B2`.
///
/// Both fields are 0-based indices internally; column `A` is 0 and row `1`
/// is 0. Coordinates carry no grid bounds of their own: parsing accepts any
/// letter column, and it is the board that decides whether a coordinate is
/// actually on the grid.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Coordinate {
    /// Horizontal position of the cell, 0-based.
    pub col: usize,
    /// Vertical position of the cell, 0-based.
    pub row: usize,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from 0-based column and row indices.
    pub fn new(col: usize, row: usize) -> Self {
        Self { col, row }
    }

    /// The column letter used when displaying this coordinate. Columns past
    /// `Z` never occur on a valid board.
    fn column_letter(&self) -> char {
        (b'A' + self.col as u8) as char
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.column_letter(), self.row + 1)
    }
}

impl From<(usize, usize)> for Coordinate {
    /// Construct a [`Coordinate`] from a `(col, row)` pair.
    fn from((col, row): (usize, usize)) -> Self {
        Self::new(col, row)
    }
}

impl From<Coordinate> for (usize, usize) {
    /// Convert the [`Coordinate`] into a `(col, row)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.col, coord.row)
    }
}

/// Error returned when a move literal is not a recognizable coordinate
/// token.
#[derive(Debug, Error, Clone, Eq, PartialEq)]
#[error("{input:?} is not a coordinate; a move is a column letter followed by a row number, like B2")]
pub struct ParseCoordinateError {
    input: String,
}

impl ParseCoordinateError {
    fn new(input: &str) -> Self {
        Self {
            input: input.to_owned(),
        }
    }

    /// The literal that failed to parse.
    pub fn input(&self) -> &str {
        &self.input
    }
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    /// Parse a coordinate literal: one ASCII letter then a 1-based row
    /// number, case-insensitive. No bounds are applied beyond the shape of
    /// the token itself, so `Z9` parses and is left for the board to reject
    /// as out of range.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let col = match chars.next() {
            Some(letter) if letter.is_ascii_alphabetic() => {
                (letter.to_ascii_uppercase() as u8 - b'A') as usize
            }
            _ => return Err(ParseCoordinateError::new(s)),
        };
        let row = match chars.as_str().parse::<usize>() {
            // Rows are numbered from 1; a row of 0 is not a coordinate.
            Ok(0) | Err(_) => return Err(ParseCoordinateError::new(s)),
            Ok(row) => row - 1,
        };
        Ok(Coordinate::new(col, row))
    }
}
