//! # Error reporting
//!
//! Every failure of the pivoting engine is reported through a single enum. Errors are returned
//! immediately from the search that encountered them; there is no partial result and no retry.
use std::error::Error as StdError;
use std::fmt;
use std::fmt::Display;

/// Everything that can go wrong while pivoting, solving or reducing.
///
/// The variants split into two groups. `NoPivotColumn` and `NoPivotRow` describe the linear
/// program itself (it is infeasible, or unbounded in the direction that was searched). The other
/// variants describe input that the engine can't work with.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The chosen pivot cell is exactly zero.
    ///
    /// The pivot rules never select such a cell, so seeing this from a solver search indicates a
    /// bug in the rule that was used.
    DivideByZero,
    /// An infeasible row has no negative coefficient to pivot on, so no feasible region is
    /// reachable from the current tableau.
    NoPivotColumn {
        /// Index of the infeasible row.
        row: usize,
    },
    /// The ratio test found no eligible row: the problem is unbounded in the direction of this
    /// column.
    NoPivotRow {
        /// Index of the column that was tested.
        column: usize,
    },
    /// Rows of different lengths, a label vector that doesn't match the table, or a vector that
    /// doesn't fit the matrix it is combined with.
    IncompatibleDimensions {
        /// The length that was required.
        expected: usize,
        /// The length that was supplied.
        found: usize,
    },
    /// Zero rows, zero columns, or an empty game matrix.
    EmptyInput,
    /// The matrix has no inverse.
    SingularMatrix,
    /// A search didn't terminate within the configured number of steps.
    IterationLimit {
        /// The limit that was hit.
        limit: usize,
    },
    /// A row or column index outside of the table.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of valid indices.
        len: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::DivideByZero => write!(f, "divide by zero: the pivot element is 0"),
            Error::NoPivotColumn { row } => write!(
                f, "no negative numbers are found in the row {}", row,
            ),
            Error::NoPivotRow { column } => write!(
                f, "cannot find a row to pivot on in column {}", column,
            ),
            Error::IncompatibleDimensions { expected, found } => write!(
                f, "incompatible dimensions: expected {}, found {}", expected, found,
            ),
            Error::EmptyInput => write!(f, "cannot work with an empty matrix"),
            Error::SingularMatrix => write!(f, "cannot invert a degenerate matrix"),
            Error::IterationLimit { limit } => write!(
                f, "no result after {} iterations", limit,
            ),
            Error::IndexOutOfBounds { index, len } => write!(
                f, "index {} is out of bounds for length {}", index, len,
            ),
        }
    }
}

impl StdError for Error {}
