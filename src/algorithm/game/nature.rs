//! # Games against nature
//!
//! Decision criteria for a player who faces an indifferent opponent: the columns of the payoff
//! matrix are states of nature, the rows are the options of the player. Every criterion returns
//! all rows that are optimal under it, in ascending order.
use crate::algorithm::utilities::{max_indices, min_indices};
use crate::data::linear_algebra::matrix::Matrix;
use crate::error::Error;

/// Wald's criterion: maximize the worst case payoff.
pub fn maximin(matrix: &Matrix) -> Vec<usize> {
    max_indices(&row_minima(matrix))
}

/// Maximize the best case payoff.
pub fn maximax(matrix: &Matrix) -> Vec<usize> {
    max_indices(&row_maxima(matrix))
}

/// Hurwicz's criterion: maximize a weighted mean of the worst and the best case.
///
/// # Arguments
///
/// * `matrix`: Payoffs.
/// * `pessimism`: Weight `y` of the worst case, the best case gets weight `1 - y`.
pub fn hurwicz(matrix: &Matrix, pessimism: f64) -> Vec<usize> {
    let weighted = row_minima(matrix).into_iter()
        .zip(row_maxima(matrix))
        .map(|(min, max)| pessimism * min + (1f64 - pessimism) * max)
        .collect::<Vec<_>>();

    max_indices(&weighted)
}

/// Savage's criterion: minimize the largest regret.
///
/// The regret of a payoff is the difference with the best payoff in its column.
pub fn savage(matrix: &Matrix) -> Vec<usize> {
    let column_maxima = (0..matrix.nr_columns())
        .map(|column| matrix.column(column).into_iter().fold(f64::NEG_INFINITY, f64::max))
        .collect::<Vec<_>>();

    let max_regrets = matrix.rows().iter()
        .map(|row| {
            row.iter().zip(&column_maxima)
                .map(|(&value, &best)| best - value)
                .fold(f64::NEG_INFINITY, f64::max)
        })
        .collect::<Vec<_>>();

    min_indices(&max_regrets)
}

/// Bayes' criterion: maximize the expected payoff.
///
/// # Arguments
///
/// * `matrix`: Payoffs.
/// * `probabilities`: Probability of each state of nature.
///
/// # Errors
///
/// `Error::IncompatibleDimensions` if there isn't a probability for every column.
pub fn bayes(matrix: &Matrix, probabilities: &[f64]) -> Result<Vec<usize>, Error> {
    matrix.multiply(probabilities).map(|expected| max_indices(&expected))
}

/// Laplace's criterion: Bayes' criterion with the same probability for every state.
///
/// # Errors
///
/// `Error::EmptyInput` if the matrix has no values.
pub fn laplace(matrix: &Matrix, probability: f64) -> Result<Vec<usize>, Error> {
    if matrix.is_empty() {
        return Err(Error::EmptyInput);
    }

    bayes(matrix, &vec![probability; matrix.nr_columns()])
}

fn row_minima(matrix: &Matrix) -> Vec<f64> {
    matrix.rows().iter()
        .map(|row| row.iter().copied().fold(f64::INFINITY, f64::min))
        .collect()
}

fn row_maxima(matrix: &Matrix) -> Vec<f64> {
    matrix.rows().iter()
        .map(|row| row.iter().copied().fold(f64::NEG_INFINITY, f64::max))
        .collect()
}
