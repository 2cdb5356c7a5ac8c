//! # Dense matrices
//!
//! A rectangular `f64` matrix backed by a `Vec<Vec<f64>>`, together with the Jordan elimination
//! step that both this matrix and the simplex tableau are built on.
//!
//! Two variants of the elimination step exist. The stand-alone linear algebra in this module
//! (inversion, rank) negates the pivot row. The tableau used by the simplex algorithms negates
//! the pivot column instead, see `crate::data::tableau`.
use std::fmt;
use std::fmt::Display;

use itertools::Itertools;
use num_traits::Zero;

use crate::data::number_types::round;
use crate::error::Error;

/// Values closer to zero than this are not used as a pivot by `invert` and `rank`.
const EPSILON: f64 = 1e-9;

/// Which part of the pivot cross is negated during an elimination step.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub(crate) enum Negate {
    /// Plain Jordan elimination, as used for inverting a matrix.
    PivotRow,
    /// The modified variant used on simplex tableaus.
    PivotColumn,
}

/// Apply one Jordan elimination step to `data`, pivoting on the cell at (`row`, `column`).
///
/// With `p` the pivot value, the pivot cell becomes `1 / p`, the pivot row and column are divided
/// by `p` (and one of the two is negated, depending on `negate`) and every other cell is updated
/// with the cross rule `(a[i][j] * p - a[i][column] * a[row][j]) / p`.
///
/// # Arguments
///
/// * `data`: Rectangular matrix of values.
/// * `column`: Index of the pivot column.
/// * `row`: Index of the pivot row.
/// * `negate`: Whether the row or the column gets negated.
///
/// # Return value
///
/// A new matrix of the same shape, or `Error::DivideByZero` if the pivot cell is exactly zero.
pub(crate) fn eliminate(
    data: &[Vec<f64>],
    column: usize,
    row: usize,
    negate: Negate,
) -> Result<Vec<Vec<f64>>, Error> {
    if row >= data.len() {
        return Err(Error::IndexOutOfBounds { index: row, len: data.len() });
    }
    let pivot_row = &data[row];
    if column >= pivot_row.len() {
        return Err(Error::IndexOutOfBounds { index: column, len: pivot_row.len() });
    }
    let pivot = pivot_row[column];
    if pivot.is_zero() {
        return Err(Error::DivideByZero);
    }

    let (row_sign, column_sign) = match negate {
        Negate::PivotRow => (-1f64, 1f64),
        Negate::PivotColumn => (1f64, -1f64),
    };

    let result = data.iter().enumerate()
        .map(|(i, values)| {
            debug_assert_eq!(values.len(), pivot_row.len());

            values.iter().enumerate()
                .map(|(j, &value)| match (i == row, j == column) {
                    (true, true) => 1f64 / pivot,
                    (true, false) => row_sign * value / pivot,
                    (false, true) => column_sign * value / pivot,
                    (false, false) => (value * pivot - values[column] * pivot_row[j]) / pivot,
                })
                .collect()
        })
        .collect();

    Ok(result)
}

/// Uses a `Vec<Vec<f64>>` as underlying data structure. Dimensions are fixed at creation.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    data: Vec<Vec<f64>>,
    nr_rows: usize,
    nr_columns: usize,
}

/// A payoff that is both the largest row minimum and the smallest column maximum.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SaddlePoint {
    /// Pure strategy of the row player.
    pub row: usize,
    /// Pure strategy of the column player.
    pub column: usize,
    /// Value of the game.
    pub value: f64,
}

impl Matrix {
    /// Create a `Matrix` from rows of values.
    ///
    /// A matrix without rows is allowed; operations that need values report `Error::EmptyInput`.
    ///
    /// # Errors
    ///
    /// `Error::IncompatibleDimensions` if not all rows have the same length as the first one.
    pub fn new(data: Vec<Vec<f64>>) -> Result<Self, Error> {
        let (nr_rows, nr_columns) = get_data_dimensions(&data)?;

        Ok(Self { data, nr_rows, nr_columns })
    }

    /// Create a square identity matrix of size `len`.
    pub fn identity(len: usize) -> Self {
        let data = (0..len)
            .map(|i| (0..len).map(|j| if i == j { 1f64 } else { 0f64 }).collect())
            .collect();

        Self { data, nr_rows: len, nr_columns: len }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.nr_rows
    }

    /// Number of columns.
    pub fn nr_columns(&self) -> usize {
        self.nr_columns
    }

    /// Whether there are no values in the matrix.
    pub fn is_empty(&self) -> bool {
        self.nr_rows == 0 || self.nr_columns == 0
    }

    /// Get the value at coordinate (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        self.data[row][column]
    }

    /// All values in row `row`.
    pub fn row(&self, row: usize) -> &[f64] {
        debug_assert!(row < self.nr_rows);

        &self.data[row]
    }

    /// All values in column `column`.
    pub fn column(&self, column: usize) -> Vec<f64> {
        debug_assert!(column < self.nr_columns);

        self.data.iter().map(|row| row[column]).collect()
    }

    /// All rows of the matrix.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.data
    }

    /// Take the underlying rows.
    pub fn into_data(self) -> Vec<Vec<f64>> {
        self.data
    }

    /// Plain Jordan elimination on the cell at (`row`, `column`).
    ///
    /// The pivot row is negated and divided by the pivot value, the pivot column is divided by
    /// it. Repeating this for every diagonal cell of a square matrix yields its inverse.
    ///
    /// # Errors
    ///
    /// `Error::DivideByZero` if the pivot cell is zero, `Error::IndexOutOfBounds` if the cell is
    /// not in the matrix.
    pub fn jordan_eliminate(&self, column: usize, row: usize) -> Result<Self, Error> {
        let data = eliminate(&self.data, column, row, Negate::PivotRow)?;

        Ok(Self { data, ..*self })
    }

    /// Exchange as many rows for columns as possible.
    ///
    /// Diagonal pivots are preferred; when none remains, any non-zero cell in a row and column
    /// that weren't exchanged before is used.
    fn exchange_all(&self) -> Exchanged {
        let mut data = self.data.clone();
        let mut column_of_row = vec![None; self.nr_rows];
        let mut row_of_column = vec![None; self.nr_columns];

        loop {
            let is_free = |row: usize, column: usize, data: &[Vec<f64>]| {
                column_of_row[row].is_none()
                    && row_of_column[column].is_none()
                    && data[row][column].abs() > EPSILON
            };

            let diagonal = (0..self.nr_rows.min(self.nr_columns))
                .find(|&i| is_free(i, i, &data))
                .map(|i| (i, i));
            let candidate = diagonal.or_else(|| {
                (0..self.nr_rows)
                    .cartesian_product(0..self.nr_columns)
                    .find(|&(row, column)| is_free(row, column, &data))
            });

            let Some((row, column)) = candidate else { break };
            match eliminate(&data, column, row, Negate::PivotRow) {
                Ok(next) => data = next,
                Err(_) => break,
            }
            column_of_row[row] = Some(column);
            row_of_column[column] = Some(row);
        }

        Exchanged { data, column_of_row, row_of_column }
    }

    /// Inverse of a square matrix.
    ///
    /// # Errors
    ///
    /// `Error::IncompatibleDimensions` if the matrix isn't square, `Error::EmptyInput` if it has no
    /// values and `Error::SingularMatrix` if it can't be inverted.
    pub fn invert(&self) -> Result<Self, Error> {
        if self.nr_rows != self.nr_columns {
            return Err(Error::IncompatibleDimensions { expected: self.nr_rows, found: self.nr_columns });
        }
        if self.is_empty() {
            return Err(Error::EmptyInput);
        }

        let exchanged = self.exchange_all();
        if exchanged.rank() < self.nr_rows {
            return Err(Error::SingularMatrix);
        }

        // Row `i` of the exchanged table expresses variable `column_of_row[i]` in terms of the
        // right hand sides `row_of_column[j]`.
        let mut data = vec![vec![0f64; self.nr_columns]; self.nr_rows];
        for (i, column) in exchanged.column_of_row.iter().enumerate() {
            for (j, row) in exchanged.row_of_column.iter().enumerate() {
                if let (Some(column), Some(row)) = (column, row) {
                    data[*column][*row] = exchanged.data[i][j];
                }
            }
        }

        Ok(Self { data, ..*self })
    }

    /// Maximum number of linearly independent rows.
    pub fn rank(&self) -> usize {
        self.exchange_all().rank()
    }

    /// Determinant of a square matrix, computed by Laplace expansion along the first column.
    ///
    /// # Errors
    ///
    /// `Error::IncompatibleDimensions` if the matrix isn't square and `Error::EmptyInput` if it
    /// has no values.
    pub fn determinant(&self) -> Result<f64, Error> {
        if self.nr_rows != self.nr_columns {
            return Err(Error::IncompatibleDimensions { expected: self.nr_rows, found: self.nr_columns });
        }

        match self.nr_rows {
            0 => Err(Error::EmptyInput),
            1 => Ok(self.data[0][0]),
            2 => Ok(self.data[0][0] * self.data[1][1] - self.data[0][1] * self.data[1][0]),
            _ => (0..self.nr_rows)
                .filter(|&row| !self.data[row][0].is_zero())
                .map(|row| -> Result<f64, Error> {
                    let sign = if row % 2 == 0 { 1f64 } else { -1f64 };
                    Ok(sign * self.data[row][0] * self.minor(row, 0).determinant()?)
                })
                .sum(),
        }
    }

    /// The matrix without row `row` and column `column`.
    pub fn minor(&self, row: usize, column: usize) -> Self {
        debug_assert!(row < self.nr_rows);
        debug_assert!(column < self.nr_columns);

        let data = self.data.iter().enumerate()
            .filter(|&(i, _)| i != row)
            .map(|(_, values)| {
                values.iter().enumerate()
                    .filter(|&(j, _)| j != column)
                    .map(|(_, &value)| value)
                    .collect()
            })
            .collect();

        Self {
            data,
            nr_rows: self.nr_rows - 1,
            nr_columns: self.nr_columns - 1,
        }
    }

    /// Round every value to two decimals.
    pub fn round(&self) -> Self {
        let data = self.data.iter()
            .map(|row| row.iter().map(|&value| round(value)).collect())
            .collect();

        Self { data, ..*self }
    }

    /// Multiply the matrix with a vector.
    ///
    /// # Errors
    ///
    /// `Error::IncompatibleDimensions` if the vector length doesn't match the number of columns.
    pub fn multiply(&self, vector: &[f64]) -> Result<Vec<f64>, Error> {
        if vector.len() != self.nr_columns {
            return Err(Error::IncompatibleDimensions { expected: self.nr_columns, found: vector.len() });
        }

        Ok(self.data.iter()
            .map(|row| row.iter().zip(vector).map(|(a, b)| a * b).sum())
            .collect())
    }

    /// Smallest value in the matrix, or `0` if the matrix is empty.
    pub fn min(&self) -> f64 {
        self.data.iter()
            .flatten()
            .copied()
            .reduce(f64::min)
            .unwrap_or(0f64)
    }

    /// Add `value` to every element.
    pub fn add(&self, value: f64) -> Self {
        let data = self.data.iter()
            .map(|row| row.iter().map(|&element| element + value).collect())
            .collect();

        Self { data, ..*self }
    }

    /// The row whose smallest element is largest, with that element.
    ///
    /// Ties are broken by taking the first row. Returns `None` for an empty matrix.
    pub fn max_min_row(&self) -> Option<(usize, f64)> {
        if self.is_empty() {
            return None;
        }

        self.data.iter()
            .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
            .enumerate()
            .fold(None, |best, (row, value)| match best {
                Some((_, best_value)) if best_value >= value => best,
                _ => Some((row, value)),
            })
    }

    /// The column whose largest element is smallest, with that element.
    ///
    /// Ties are broken by taking the first column. Returns `None` for an empty matrix.
    pub fn min_max_column(&self) -> Option<(usize, f64)> {
        if self.is_empty() {
            return None;
        }

        (0..self.nr_columns)
            .map(|column| self.data.iter().map(|row| row[column]).fold(f64::NEG_INFINITY, f64::max))
            .enumerate()
            .fold(None, |best, (column, value)| match best {
                Some((_, best_value)) if best_value <= value => best,
                _ => Some((column, value)),
            })
    }

    /// Pure strategy solution of the game with this payoff matrix, if there is one.
    ///
    /// The entries are the payoffs to the row player.
    pub fn saddle_point(&self) -> Option<SaddlePoint> {
        let (row, lower) = self.max_min_row()?;
        let (column, upper) = self.min_max_column()?;

        if lower == upper {
            Some(SaddlePoint { row, column, value: lower })
        } else {
            None
        }
    }
}

impl Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for row in &self.data {
            writeln!(f, "{}", row.iter().map(|&value| format!("{:>8}", round(value))).join(" "))?;
        }

        Ok(())
    }
}

/// Result of exchanging rows for columns.
struct Exchanged {
    data: Vec<Vec<f64>>,
    column_of_row: Vec<Option<usize>>,
    row_of_column: Vec<Option<usize>>,
}

impl Exchanged {
    fn rank(&self) -> usize {
        self.column_of_row.iter().filter(|column| column.is_some()).count()
    }
}

/// If all row sizes agree, return the dimensions of the vector `data`.
pub(crate) fn get_data_dimensions(data: &[Vec<f64>]) -> Result<(usize, usize), Error> {
    let nr_rows = data.len();
    let nr_columns = data.first().map_or(0, Vec::len);

    match data.iter().find(|row| row.len() != nr_columns) {
        Some(row) => Err(Error::IncompatibleDimensions { expected: nr_columns, found: row.len() }),
        None => Ok((nr_rows, nr_columns)),
    }
}
