//! # Simplex tableaus
//!
//! A tableau is a rectangular table of `f64` values. The last column holds the right hand side of
//! every constraint, the last row holds the objective function, and the bottom right cell holds
//! the current objective value. The other rows and columns are labeled with the variable that is
//! bound to them: row labels are the basic variables, column labels the non-basic ones.
//!
//! Tableaus are never modified in place by the algorithms in this crate. Every operation returns
//! a new tableau, so that a caller keeps access to the tableau it started with.
use std::fmt;
use std::fmt::Display;

use index_utils::remove_indices;
use itertools::repeat_n;
use log::{debug, trace};
use num_traits::Zero;

use crate::algorithm::simplex::limits::Limits;
use crate::data::linear_algebra::matrix::{eliminate, get_data_dimensions, Negate};
use crate::data::number_types::{fractional_part, round, round_to, PRECISION};
use crate::error::Error;

pub use label::Label;

pub mod label;

/// Width of a single cell when a tableau is displayed.
const CELL_WIDTH: usize = 8;

/// Labeled simplex tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau {
    /// Constraint rows followed by the objective row, each ending with its right hand side.
    rows: Vec<Vec<f64>>,
    /// Basic variable of each constraint row.
    row_labels: Vec<Label>,
    /// Non-basic variable of each column, excluding the right hand side column.
    column_labels: Vec<Label>,
    /// Length of the dual result vector.
    initial_rows: usize,
    /// Length of the primal result vector.
    initial_columns: usize,
}

impl Tableau {
    /// Create a tableau with default labels.
    ///
    /// Constraint row `i` is labeled with slack variable `y_i`, column `j` with primal variable
    /// `x_j`.
    ///
    /// # Arguments
    ///
    /// * `rows`: Constraint rows followed by the objective row. Every row ends with its right hand
    /// side.
    ///
    /// # Errors
    ///
    /// `Error::EmptyInput` if there are no rows or columns, `Error::IncompatibleDimensions` if the
    /// rows don't all have the same length.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, Error> {
        let (nr_rows, nr_columns) = get_data_dimensions(&rows)?;
        if nr_rows == 0 || nr_columns == 0 {
            return Err(Error::EmptyInput);
        }

        let row_labels = (0..nr_rows - 1).map(Label::Dual).collect();
        let column_labels = (0..nr_columns - 1).map(Label::Primal).collect();

        Self::with_labels(rows, row_labels, column_labels)
    }

    /// Create a tableau with the given labels.
    ///
    /// # Arguments
    ///
    /// * `rows`: Constraint rows followed by the objective row.
    /// * `row_labels`: One label for every constraint row.
    /// * `column_labels`: One label for every column except the right hand side.
    ///
    /// # Errors
    ///
    /// `Error::EmptyInput` if there are no rows or columns, `Error::IncompatibleDimensions` if the
    /// rows are ragged or a label vector doesn't match the table.
    pub fn with_labels(
        rows: Vec<Vec<f64>>,
        row_labels: Vec<Label>,
        column_labels: Vec<Label>,
    ) -> Result<Self, Error> {
        let (nr_rows, nr_columns) = get_data_dimensions(&rows)?;
        if nr_rows == 0 || nr_columns == 0 {
            return Err(Error::EmptyInput);
        }
        if row_labels.len() != nr_rows - 1 {
            return Err(Error::IncompatibleDimensions { expected: nr_rows - 1, found: row_labels.len() });
        }
        if column_labels.len() != nr_columns - 1 {
            return Err(Error::IncompatibleDimensions { expected: nr_columns - 1, found: column_labels.len() });
        }

        // Result vectors are indexed by label, so they need to be long enough for every label.
        let labels = || row_labels.iter().chain(column_labels.iter());
        let primal_bound = labels().filter_map(|label| label.primal_index()).max().map_or(0, |i| i + 1);
        let dual_bound = labels().filter_map(|label| label.dual_index()).max().map_or(0, |i| i + 1);

        Ok(Self {
            initial_rows: (nr_rows - 1).max(dual_bound),
            initial_columns: (nr_columns - 1).max(primal_bound),
            rows,
            row_labels,
            column_labels,
        })
    }

    /// Number of rows, including the objective row.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, including the right hand side column.
    pub fn nr_columns(&self) -> usize {
        self.rows[0].len()
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.nr_rows() - 1
    }

    /// Number of variable columns.
    pub fn nr_variables(&self) -> usize {
        self.nr_columns() - 1
    }

    /// Length of the dual result vector: the number of constraints at creation.
    pub fn initial_rows(&self) -> usize {
        self.initial_rows
    }

    /// Length of the primal result vector: the number of variables at creation.
    pub fn initial_columns(&self) -> usize {
        self.initial_columns
    }

    /// All rows, the objective row last.
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    /// Labels of the constraint rows.
    pub fn row_labels(&self) -> &[Label] {
        &self.row_labels
    }

    /// Labels of the variable columns.
    pub fn column_labels(&self) -> &[Label] {
        &self.column_labels
    }

    /// Value at (`row`, `column`).
    pub fn get(&self, row: usize, column: usize) -> f64 {
        debug_assert!(row < self.nr_rows());
        debug_assert!(column < self.nr_columns());

        self.rows[row][column]
    }

    /// Right hand side of a row.
    pub fn rhs(&self, row: usize) -> f64 {
        self.rows[row][self.nr_variables()]
    }

    /// The objective row, including its right hand side.
    pub fn objective_row(&self) -> &[f64] {
        &self.rows[self.nr_constraints()]
    }

    /// The bottom right cell.
    pub fn objective_value(&self) -> f64 {
        self.rhs(self.nr_constraints())
    }

    /// Exchange the variables of a row and a column using modified Jordan elimination.
    ///
    /// With `p` the value of the pivot cell, the pivot cell becomes `1 / p`, the other values in
    /// the pivot row are divided by `p` and the other values in the pivot column are divided by
    /// `-p`. All remaining values follow the cross rule
    /// `(a[i][j] * p - a[i][column] * a[row][j]) / p`. The labels of the row and the column are
    /// swapped.
    ///
    /// Pivoting twice on the same cell gives back the original tableau.
    ///
    /// # Arguments
    ///
    /// * `column`: Variable column, not the right hand side.
    /// * `row`: Constraint row, not the objective row.
    ///
    /// # Errors
    ///
    /// `Error::DivideByZero` if the pivot cell is exactly zero and `Error::IndexOutOfBounds` if
    /// the cell isn't in a constraint row and a variable column.
    pub fn pivot(&self, column: usize, row: usize) -> Result<Self, Error> {
        if row >= self.nr_constraints() {
            return Err(Error::IndexOutOfBounds { index: row, len: self.nr_constraints() });
        }
        if column >= self.nr_variables() {
            return Err(Error::IndexOutOfBounds { index: column, len: self.nr_variables() });
        }

        let rows = eliminate(&self.rows, column, row, Negate::PivotColumn)?;
        let mut row_labels = self.row_labels.clone();
        let mut column_labels = self.column_labels.clone();
        std::mem::swap(&mut row_labels[row], &mut column_labels[column]);

        debug!(
            "pivot on column {} and row {}: {} enters the basis, {} leaves",
            column, row, self.column_labels[column], self.row_labels[row],
        );

        let pivoted = Self { rows, row_labels, column_labels, ..*self };
        trace!("tableau after pivot:\n{}", pivoted);

        Ok(pivoted)
    }

    /// Round every value to the default precision of two decimals.
    pub fn round(&self) -> Self {
        self.round_to(PRECISION)
    }

    /// Round every value to `precision` decimals, half away from zero.
    pub fn round_to(&self, precision: i32) -> Self {
        let rows = self.rows.iter()
            .map(|row| row.iter().map(|&value| round_to(value, precision)).collect())
            .collect();

        Self { rows, ..self.clone() }
    }

    /// Flip the sign of the objective row, turning a minimization into a maximization.
    pub fn negate_objective(&self) -> Self {
        let mut negated = self.clone();
        let objective = negated.nr_constraints();
        for value in &mut negated.rows[objective] {
            *value = -*value;
        }

        negated
    }

    /// First constraint row with a strictly negative right hand side.
    pub fn first_infeasible_row(&self) -> Option<usize> {
        (0..self.nr_constraints()).find(|&row| self.rhs(row) < 0f64)
    }

    /// Ratio test: the row to pivot on once `column` has been selected.
    ///
    /// Rows with a zero in the column are skipped. For the others, the ratio of the right hand
    /// side and the column value needs to be nonnegative, and can't be zero while the column value
    /// is negative. The smallest ratio wins, the first row in case of a tie.
    ///
    /// # Errors
    ///
    /// `Error::NoPivotRow` if no row qualifies: the problem is unbounded in this direction.
    pub fn select_pivot_row(&self, column: usize) -> Result<usize, Error> {
        debug_assert!(column < self.nr_variables());

        let rhs = self.nr_variables();
        self.rows[..self.nr_constraints()].iter().enumerate()
            .filter(|(_, values)| !values[column].is_zero())
            .map(|(row, values)| (row, values[column], values[rhs] / values[column]))
            .filter(|&(_, value, ratio)| ratio >= 0f64 && !(ratio.is_zero() && value < 0f64))
            .fold(None, |best: Option<(usize, f64)>, (row, _, ratio)| match best {
                Some((_, best_ratio)) if best_ratio <= ratio => best,
                _ => Some((row, ratio)),
            })
            .map(|(row, _)| row)
            .ok_or(Error::NoPivotRow { column })
    }

    /// Pivot a constraint row out of the basis.
    ///
    /// The pivot column is the first column with a strictly positive value in `row`; the pivot row
    /// follows from the ratio test on that column, so it need not be `row` itself. When the
    /// column that the pivot produces is labeled `Label::Zero`, it is removed from the tableau.
    ///
    /// # Errors
    ///
    /// `Error::NoPivotColumn` if the row has no positive value, `Error::NoPivotRow` if the ratio
    /// test fails.
    pub fn delete_row(&self, row: usize) -> Result<Self, Error> {
        if row >= self.nr_constraints() {
            return Err(Error::IndexOutOfBounds { index: row, len: self.nr_constraints() });
        }

        let column = self.rows[row][..self.nr_variables()].iter()
            .position(|&value| value > 0f64)
            .ok_or(Error::NoPivotColumn { row })?;
        let pivot_row = self.select_pivot_row(column)?;

        let mut pivoted = self.pivot(column, pivot_row)?;
        if pivoted.column_labels[column] == Label::Zero {
            debug!("removing column {} of an equality constraint", column);
            pivoted.remove_column(column);
        }

        Ok(pivoted)
    }

    /// Pivot out all rows labeled `Label::Zero`, one at a time.
    ///
    /// # Errors
    ///
    /// Those of `delete_row`, and `Error::IterationLimit` when rows are still left after
    /// `limits.max_pivots` pivots.
    pub fn delete_zeros(&self, limits: &Limits) -> Result<Self, Error> {
        let mut tableau = self.clone();

        for _ in 0..limits.max_pivots {
            match tableau.row_labels.iter().position(|&label| label == Label::Zero) {
                Some(row) => tableau = tableau.delete_row(row)?,
                None => return Ok(tableau),
            }
        }

        if tableau.row_labels.contains(&Label::Zero) {
            Err(Error::IterationLimit { limit: limits.max_pivots })
        } else {
            Ok(tableau)
        }
    }

    fn remove_column(&mut self, column: usize) {
        debug_assert!(column < self.nr_variables());

        let to_remove = [column];
        for row in &mut self.rows {
            remove_indices(row, &to_remove);
        }
        remove_indices(&mut self.column_labels, &to_remove);
    }

    /// Add a constraint just above the objective row, labeled `Label::Slack`.
    ///
    /// # Errors
    ///
    /// `Error::IncompatibleDimensions` if the row length differs from the tableau width.
    pub fn insert_row(&self, row: Vec<f64>) -> Result<Self, Error> {
        if row.len() != self.nr_columns() {
            return Err(Error::IncompatibleDimensions { expected: self.nr_columns(), found: row.len() });
        }

        let mut extended = self.clone();
        extended.rows.insert(self.nr_constraints(), row);
        extended.row_labels.push(Label::Slack);

        Ok(extended)
    }

    /// Fractional parts of all values in a row, including the right hand side.
    ///
    /// Values are first rounded to two decimals, so a value of `2.999999999` has fractional part
    /// zero. Negative values are floored towards negative infinity: `-4.5` gives `0.5`.
    pub fn integer_limitation_for(&self, row: usize) -> Result<Vec<f64>, Error> {
        self.rows.get(row)
            .map(|values| values.iter().map(|&value| fractional_part(value)).collect())
            .ok_or(Error::IndexOutOfBounds { index: row, len: self.nr_rows() })
    }

    /// Values of the primal variables.
    ///
    /// Every row labeled `Label::Primal(i)` contributes its right hand side at index `i`, all
    /// other variables are zero.
    pub fn primal_result(&self) -> Vec<f64> {
        let rhs = self.nr_variables();
        let mut result = vec![0f64; self.initial_columns];
        for (label, values) in self.row_labels.iter().zip(&self.rows) {
            if let Some(index) = label.primal_index() {
                result[index] = values[rhs];
            }
        }

        result
    }

    /// Values of the dual variables.
    ///
    /// Every column labeled `Label::Dual(i)` contributes its value in the objective row at index
    /// `i`.
    pub fn dual_result(&self) -> Vec<f64> {
        let objective = self.objective_row();
        let mut result = vec![0f64; self.initial_rows];
        for (label, &value) in self.column_labels.iter().zip(objective) {
            if let Some(index) = label.dual_index() {
                result[index] = value;
            }
        }

        result
    }
}

impl Display for Tableau {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let width = CELL_WIDTH;

        write!(f, "{:>width$}", "")?;
        for label in &self.column_labels {
            write!(f, "{:>width$}", label.to_string())?;
        }
        writeln!(f, "{:>width$}", "1")?;
        writeln!(f, "{}", repeat_n('-', width * (self.nr_columns() + 2)).collect::<String>())?;

        for (row, values) in self.rows.iter().enumerate() {
            let (name, marker) = match self.row_labels.get(row) {
                Some(label) => (label.to_string(), label.dual_marker().unwrap_or_default()),
                None => ("z".to_string(), "w".to_string()),
            };
            write!(f, "{:>width$}", name)?;
            for &value in values {
                write!(f, "{:>width$}", round(value))?;
            }
            writeln!(f, "{:>width$}", marker)?;
        }

        write!(f, "{:>width$}", "")?;
        for label in &self.column_labels {
            write!(f, "{:>width$}", label.dual_marker().unwrap_or_default())?;
        }
        writeln!(f)
    }
}
