//! # Two player zero sum games
//!
//! A payoff matrix holds the payoffs to the row player, who maximizes. If the matrix has a saddle
//! point, both players have a pure strategy. Otherwise, the game is reduced to a linear program:
//! all payoffs are shifted to be nonnegative, a column of ones and a row of minus ones are
//! appended, and the resulting tableau is maximized. The primal solution then holds the mixed
//! strategy of the column player, the dual solution that of the row player.
use enum_map::{Enum, EnumMap};
use log::debug;

use crate::algorithm::simplex::strategy::pivot_rule::{FirstNegative, PivotRule};
use crate::algorithm::simplex::Solver;
use crate::data::linear_algebra::matrix::{Matrix, SaddlePoint};
use crate::data::number_types::round;
use crate::data::tableau::Tableau;
use crate::error::Error;

pub mod nature;

/// The two participants of a matrix game.
#[derive(Enum, Debug, Copy, Clone, Eq, PartialEq)]
pub enum Player {
    /// Chooses a row, receives the payoff.
    Row,
    /// Chooses a column, pays the payoff.
    Column,
}

/// Solution of a game.
#[derive(Clone, Debug, PartialEq)]
pub enum GameSolution {
    /// Both players always play the same row and column.
    Pure(SaddlePoint),
    /// The players randomize over their options.
    Mixed(MixedSolution),
}

/// Value of a game together with the probability of each option of each player.
#[derive(Clone, Debug, PartialEq)]
pub struct MixedSolution {
    value: f64,
    strategies: EnumMap<Player, Vec<f64>>,
}

impl MixedSolution {
    /// Expected payoff to the row player, rounded to two decimals.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Probabilities with which `player` picks each option, rounded to two decimals.
    pub fn strategy(&self, player: Player) -> &[f64] {
        &self.strategies[player]
    }
}

/// Turn a nonnegative payoff matrix into a tableau that can be maximized.
///
/// A column of ones is appended as right hand side and a row of minus ones as objective, with a
/// zero in the corner. Rows are labeled `Label::Dual`, columns `Label::Primal`.
///
/// # Errors
///
/// `Error::EmptyInput` if the matrix has no values.
pub fn complete_matrix_to_compatible(matrix: &Matrix) -> Result<Tableau, Error> {
    if matrix.is_empty() {
        return Err(Error::EmptyInput);
    }

    let mut rows = matrix.rows().iter()
        .map(|row| {
            let mut row = row.clone();
            row.push(1f64);
            row
        })
        .collect::<Vec<_>>();
    let mut objective = vec![-1f64; matrix.nr_columns()];
    objective.push(0f64);
    rows.push(objective);

    Tableau::new(rows)
}

/// Reciprocal of the bottom right cell of a solved game tableau, rounded.
///
/// This is the value of the (shifted) game.
///
/// # Errors
///
/// `Error::DivideByZero` if the cell is zero.
pub fn game_weight(tableau: &Tableau) -> Result<f64, Error> {
    let objective_value = tableau.objective_value();
    if objective_value == 0f64 {
        return Err(Error::DivideByZero);
    }

    Ok(round(1f64 / objective_value))
}

/// Undo the shift that made all payoffs nonnegative.
pub fn correct_game_weight(weight: f64, shift: f64) -> f64 {
    round(weight - shift)
}

/// Scale a solution of the game tableau to probabilities.
pub fn correct_mixed_strategy(strategy: &[f64], weight: f64) -> Vec<f64> {
    strategy.iter().map(|&value| round(value * weight)).collect()
}

impl<PR: PivotRule> Solver<PR> {
    /// Solve a matrix game.
    ///
    /// # Arguments
    ///
    /// * `matrix`: Payoffs to the row player.
    ///
    /// # Errors
    ///
    /// `Error::EmptyInput` for an empty matrix, otherwise the errors of the underlying searches.
    pub fn solve_game(&self, matrix: &Matrix) -> Result<GameSolution, Error> {
        if matrix.is_empty() {
            return Err(Error::EmptyInput);
        }

        if let Some(saddle_point) = matrix.saddle_point() {
            debug!(
                "saddle point at row {} and column {} with value {}",
                saddle_point.row, saddle_point.column, saddle_point.value,
            );
            return Ok(GameSolution::Pure(saddle_point));
        }

        let shift = matrix.min().abs();
        debug!("no saddle point, shifting payoffs by {}", shift);
        let tableau = complete_matrix_to_compatible(&matrix.add(shift))?;

        let doubled = self.find_max_doubled_with_optimal_solution(&tableau)?;
        let weight = game_weight(doubled.max().tableau())?;

        // Scaled by the value of the shifted game.
        let mut strategies = EnumMap::default();
        strategies[Player::Column] = correct_mixed_strategy(doubled.max().result(), weight);
        strategies[Player::Row] = correct_mixed_strategy(doubled.min().result(), weight);

        Ok(GameSolution::Mixed(MixedSolution {
            value: correct_game_weight(weight, shift),
            strategies,
        }))
    }
}

/// Shorthand for `Solver::solve_game` with the default solver.
pub fn solve_game(matrix: &Matrix) -> Result<GameSolution, Error> {
    Solver::<FirstNegative>::default().solve_game(matrix)
}
