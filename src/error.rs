// SPDX-License-Identifier: GPL-3.0-or-later
use std::error::Error as StdError;
use std::fmt;
use std::num::ParseFloatError;

use ndarray::ShapeError;

/// Errors from turning text into a depth grid and from normalizing it.
///
/// Row and column indices are zero-based grid coordinates. The [fmt::Display] implementation
/// reports one-based line numbers, as that's what people look for in the input file.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum GridError {
    /// The input did not contain any rows.
    Empty,

    /// A value could not be parsed as a floating point number.
    InvalidValue {
        row: usize,
        column: usize,
        token: String,
        source: ParseFloatError,
    },

    /// A row had a different number of values than the first row.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A value fell outside of the [0, 1] range.
    OutOfRange { row: usize, column: usize, value: f64 },

    /// The parsed values could not be arranged into a grid.
    Shape(ShapeError),
}

impl From<ShapeError> for GridError {
    fn from(err: ShapeError) -> Self {
        Self::Shape(err)
    }
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "depth grid has no rows"),
            Self::InvalidValue {
                row, column, token, ..
            } => write!(
                f,
                "invalid value {:?} on line {}, column {}",
                token,
                row + 1,
                column + 1
            ),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "ragged input: line {} has {} values, expected {}",
                row + 1,
                found,
                expected
            ),
            Self::OutOfRange { row, column, value } => write!(
                f,
                "value {} on line {}, column {} is outside of [0, 1]",
                value,
                row + 1,
                column + 1
            ),
            Self::Shape(_) => write!(f, "parsed values do not form a rectangular grid"),
        }
    }
}

impl StdError for GridError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match self {
            Self::InvalidValue { source, .. } => Some(source),
            Self::Shape(err) => Some(err),
            _ => None,
        }
    }
}
