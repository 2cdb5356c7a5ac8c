//! # Systems of linear equations
//!
//! Square systems `A x = b` are solved by inverting `A` with Jordan elimination.
use crate::data::linear_algebra::matrix::Matrix;
use crate::data::number_types::round_all;
use crate::error::Error;

/// Solve `a x = b`.
///
/// # Return value
///
/// The solution `x`, every value rounded to two decimals.
///
/// # Errors
///
/// `Error::IncompatibleDimensions` if `a` isn't square or `b` doesn't have one value for every row
/// of `a`, `Error::SingularMatrix` if the system has no unique solution.
pub fn solve_system(a: &Matrix, b: &[f64]) -> Result<Vec<f64>, Error> {
    if b.len() != a.nr_rows() {
        return Err(Error::IncompatibleDimensions { expected: a.nr_rows(), found: b.len() });
    }

    let inverse = a.invert()?;
    let x = inverse.multiply(b)?;

    Ok(round_all(&x))
}
