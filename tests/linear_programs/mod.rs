//! # Small linear programs
//!
//! Problems in tableau form: constraint rows `a x <= b` followed by the negated objective row.
use jordan_lp::data::tableau::Tableau;

/// # Solving and checking
mod test;

/// Build a tableau with default labels from integer coefficients.
///
/// # Arguments
///
/// * `rows`: Constraint rows followed by the objective row, every row ending with its right hand
/// side.
fn tableau(rows: &[&[i32]]) -> Tableau {
    let rows = rows.iter()
        .map(|row| row.iter().map(|&value| f64::from(value)).collect())
        .collect();

    Tableau::new(rows).unwrap()
}
