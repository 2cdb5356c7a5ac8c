//! # The Simplex algorithm
//!
//! Searches over labeled tableaus. A search repeatedly lets a `PivotRule` pick a column, lets the
//! ratio test pick a row, and pivots, until the tableau is feasible (support search) or optimal
//! (optimal search).
//!
//! Minimization problems are never solved directly: their objective row is negated and the
//! resulting maximization problem is solved instead.
use std::marker::PhantomData;

use log::debug;

use crate::algorithm::simplex::limits::Limits;
use crate::algorithm::simplex::solution::{MaxSolution, MinSolution, Solution};
use crate::algorithm::simplex::strategy::pivot_rule::{FirstNegative, PivotRule};
use crate::data::tableau::Tableau;
use crate::error::Error;

pub mod limits;
pub mod solution;
pub mod strategy;

/// Runs the searches with a pivot rule and a bound on the number of pivots.
///
/// Every search returns a new tableau; the tableau that was passed in is left unchanged.
#[derive(Debug, Copy, Clone)]
pub struct Solver<PR: PivotRule = FirstNegative> {
    limits: Limits,
    pivot_rule: PhantomData<PR>,
}

impl<PR: PivotRule> Solver<PR> {
    /// Create a solver that respects the given limits.
    pub fn new(limits: Limits) -> Self {
        Self { limits, pivot_rule: PhantomData }
    }

    /// Limits used by all searches of this solver.
    pub fn limits(&self) -> &Limits {
        &self.limits
    }

    /// Pivot until every constraint has a nonnegative right hand side.
    ///
    /// In each step, the first row with a negative right hand side is repaired: the pivot rule
    /// selects a column with a negative value in that row and the ratio test selects the row.
    ///
    /// # Return value
    ///
    /// The feasible tableau with the values of the primal variables.
    ///
    /// # Errors
    ///
    /// `Error::NoPivotColumn` if an infeasible row has no negative value (the problem is
    /// infeasible), `Error::NoPivotRow` if the ratio test fails, and `Error::IterationLimit` if
    /// the tableau is still infeasible after the maximum number of pivots.
    pub fn find_support_solution(&self, tableau: &Tableau) -> Result<Solution, Error> {
        let mut rule = PR::new();
        let mut tableau = tableau.clone();

        for _ in 0..self.limits.max_pivots {
            let Some(row) = tableau.first_infeasible_row() else {
                return Ok(Solution::primal(tableau));
            };

            let column = rule.select_feasibility_column(&tableau, row)
                .ok_or(Error::NoPivotColumn { row })?;
            let pivot_row = tableau.select_pivot_row(column)?;
            tableau = tableau.pivot(column, pivot_row)?;
        }

        match tableau.first_infeasible_row() {
            None => Ok(Solution::primal(tableau)),
            Some(_) => Err(Error::IterationLimit { limit: self.limits.max_pivots }),
        }
    }

    /// Pivot until no value in the objective row is negative.
    ///
    /// The tableau is assumed to be feasible already, see `find_support_solution`.
    ///
    /// # Return value
    ///
    /// The optimal tableau with the values of the primal variables, and the maximum found in the
    /// bottom right cell.
    ///
    /// # Errors
    ///
    /// `Error::NoPivotRow` if the problem is unbounded, `Error::IterationLimit` if the tableau is
    /// not optimal after the maximum number of pivots.
    pub fn find_optimal_solution(&self, tableau: &Tableau) -> Result<MaxSolution, Error> {
        let mut rule = PR::new();
        let mut tableau = tableau.clone();

        for _ in 0..self.limits.max_pivots {
            let Some(column) = rule.select_optimality_column(&tableau) else {
                return Ok(Self::optimum(tableau));
            };

            let row = tableau.select_pivot_row(column)?;
            tableau = tableau.pivot(column, row)?;
        }

        match rule.select_optimality_column(&tableau) {
            None => Ok(Self::optimum(tableau)),
            Some(_) => Err(Error::IterationLimit { limit: self.limits.max_pivots }),
        }
    }

    fn optimum(tableau: Tableau) -> MaxSolution {
        let max = tableau.objective_value();
        debug!("optimal tableau found with objective value {}", max);

        MaxSolution::new(Solution::primal(tableau), max)
    }

    /// Find a feasible tableau first, and then maximize from there.
    pub fn find_max_with_optimal_solution(&self, tableau: &Tableau) -> Result<MaxSolution, Error> {
        let support = self.find_support_solution(tableau)?;
        self.find_optimal_solution(support.tableau())
    }

    /// Minimize the objective function by maximizing its negation.
    ///
    /// The tableau of the solution is the final tableau of the negated problem.
    pub fn find_min_with_optimal_solution(&self, tableau: &Tableau) -> Result<MinSolution, Error> {
        self.find_max_with_optimal_solution(&tableau.negate_objective())
            .map(MinSolution::from)
    }

    /// Negate the objective row, then search for a feasible tableau.
    ///
    /// The returned tableau is that of the negated problem, so `find_optimal_solution` can
    /// continue from it; its result converts back with `MinSolution::from`.
    pub fn find_min_with_support_solution(&self, tableau: &Tableau) -> Result<Solution, Error> {
        self.find_support_solution(&tableau.negate_objective())
    }
}

impl<PR: PivotRule> Default for Solver<PR> {
    fn default() -> Self {
        Self::new(Limits::default())
    }
}

/// Shorthand for `find_support_solution` with the default solver.
pub fn find_support_solution(tableau: &Tableau) -> Result<Solution, Error> {
    Solver::<FirstNegative>::default().find_support_solution(tableau)
}

/// Shorthand for `find_optimal_solution` with the default solver.
pub fn find_optimal_solution(tableau: &Tableau) -> Result<MaxSolution, Error> {
    Solver::<FirstNegative>::default().find_optimal_solution(tableau)
}

/// Shorthand for `find_max_with_optimal_solution` with the default solver.
pub fn find_max_with_optimal_solution(tableau: &Tableau) -> Result<MaxSolution, Error> {
    Solver::<FirstNegative>::default().find_max_with_optimal_solution(tableau)
}

/// Shorthand for `find_min_with_optimal_solution` with the default solver.
pub fn find_min_with_optimal_solution(tableau: &Tableau) -> Result<MinSolution, Error> {
    Solver::<FirstNegative>::default().find_min_with_optimal_solution(tableau)
}

/// Shorthand for `find_min_with_support_solution` with the default solver.
pub fn find_min_with_support_solution(tableau: &Tableau) -> Result<Solution, Error> {
    Solver::<FirstNegative>::default().find_min_with_support_solution(tableau)
}

#[cfg(test)]
mod test {
    use approx::assert_abs_diff_eq;

    use crate::algorithm::simplex::{
        find_max_with_optimal_solution, find_min_with_optimal_solution,
        find_min_with_support_solution, find_optimal_solution, find_support_solution, Solver,
    };
    use crate::algorithm::simplex::limits::Limits;
    use crate::algorithm::simplex::solution::MinSolution;
    use crate::algorithm::simplex::strategy::pivot_rule::{FirstNegative, MostNegative};
    use crate::data::number_types::round_all;
    use crate::data::tableau::{Label, Tableau};
    use crate::error::Error;

    fn constraints() -> Vec<Vec<f64>> {
        vec![
            vec![1f64, 1f64, -1f64, -2f64, 6f64],
            vec![-1f64, -1f64, -1f64, 1f64, -5f64],
            vec![2f64, -1f64, 3f64, 4f64, 10f64],
        ]
    }

    fn with_objective(objective: Vec<f64>) -> Tableau {
        let mut rows = constraints();
        rows.push(objective);
        Tableau::new(rows).unwrap()
    }

    #[test]
    fn support_then_optimal() {
        let tableau = Tableau::new(vec![
            vec![-1f64, 0f64, 3f64, -2f64, 1f64, 3f64],
            vec![1f64, -1f64, 0f64, 1f64, 1f64, 3f64],
            vec![-1f64, -3f64, 1f64, 1f64, -1f64, -2f64],
            vec![-1f64, 1f64, 0f64, 0f64, 1f64, 0f64],
        ]).unwrap();

        let support = find_support_solution(&tableau).unwrap();
        assert_eq!(round_all(support.result()), vec![2f64, 0f64, 0f64, 0f64, 0f64]);

        let optimal = find_optimal_solution(support.tableau()).unwrap();
        assert_eq!(round_all(optimal.result()), vec![3f64, 0f64, 0f64, 0f64, 0f64]);
        assert_abs_diff_eq!(optimal.max(), 3f64, epsilon = 1e-9);
    }

    #[test]
    fn max() {
        let tableau = with_objective(vec![-1f64, -2f64, 1f64, 1f64, 0f64]);

        let support = find_support_solution(&tableau).unwrap();
        assert_eq!(round_all(support.result()), vec![5f64, 0f64, 0f64, 0f64]);

        let optimal = find_max_with_optimal_solution(&tableau).unwrap();
        assert_eq!(round_all(optimal.result()), vec![0f64, 22f64, 0f64, 8f64]);
        assert_abs_diff_eq!(optimal.max(), 36f64, epsilon = 1e-9);
    }

    #[test]
    fn min() {
        let tableau = with_objective(vec![2f64, -3f64, 0f64, 3f64, 0f64]);

        let min = find_min_with_optimal_solution(&tableau).unwrap();
        assert_eq!(round_all(min.result()), vec![5f64, 0f64, 0f64, 0f64]);
        assert_abs_diff_eq!(min.min(), -10f64, epsilon = 1e-9);

        let support = find_min_with_support_solution(&tableau).unwrap();
        let continued = MinSolution::from(find_optimal_solution(support.tableau()).unwrap());
        assert_eq!(continued, min);
    }

    #[test]
    fn min_is_negated_max() {
        let max = find_max_with_optimal_solution(&with_objective(vec![-1f64, -2f64, 1f64, 1f64, 0f64])).unwrap();
        let min = find_min_with_optimal_solution(&with_objective(vec![1f64, 2f64, -1f64, -1f64, 0f64])).unwrap();

        assert_eq!(min.min(), -max.max());
        assert_eq!(min.result(), max.result());
    }

    #[test]
    fn source_is_unchanged() {
        let tableau = with_objective(vec![-1f64, -2f64, 1f64, 1f64, 0f64]);
        let copy = tableau.clone();
        find_max_with_optimal_solution(&tableau).unwrap();

        assert_eq!(tableau, copy);
    }

    #[test]
    fn equality_constraints() {
        let tableau = Tableau::with_labels(
            vec![
                vec![-2f64, 1f64, 1f64, 3f64, 2f64],
                vec![-3f64, 2f64, -3f64, 0f64, 7f64],
                vec![-3f64, 1f64, 4f64, 1f64, 1f64],
                vec![3f64, -2f64, 2f64, -2f64, -9f64],
                vec![-10f64, 1f64, 42f64, 52f64, 0f64],
            ],
            vec![Label::Zero, Label::Zero, Label::Dual(0), Label::Dual(1)],
            (0..4).map(Label::Primal).collect(),
        ).unwrap();

        let solver = Solver::<FirstNegative>::default();
        let without_zeros = tableau.delete_zeros(solver.limits()).unwrap();
        let optimal = solver.find_max_with_optimal_solution(&without_zeros).unwrap();

        assert_eq!(optimal.tableau().round().rows(), &[
            vec![-3f64, -2f64, 9f64],
            vec![-4f64, 2f64, 10f64],
            vec![-4.5, -4.5, 17f64],
            vec![-0.5, 0.5, 1f64],
            vec![0.5, 0.5, 21f64],
        ]);
        assert_eq!(
            optimal.tableau().row_labels(),
            &[Label::Primal(0), Label::Dual(0), Label::Primal(1), Label::Primal(3)],
        );
        assert_eq!(optimal.tableau().column_labels(), &[Label::Dual(1), Label::Primal(2)]);
        assert_eq!(round_all(optimal.result()), vec![9f64, 17f64, 0f64, 1f64]);
        assert_abs_diff_eq!(optimal.max(), 21f64, epsilon = 1e-9);
    }

    #[test]
    fn infeasible() {
        let tableau = Tableau::new(vec![
            vec![1f64, 1f64, -2f64],
            vec![-1f64, -1f64, 0f64],
        ]).unwrap();

        assert_eq!(find_support_solution(&tableau), Err(Error::NoPivotColumn { row: 0 }));
    }

    #[test]
    fn unbounded() {
        let tableau = Tableau::new(vec![
            vec![-1f64, 1f64, 1f64],
            vec![-1f64, -1f64, 0f64],
        ]).unwrap();

        assert_eq!(find_max_with_optimal_solution(&tableau), Err(Error::NoPivotRow { column: 0 }));
    }

    #[test]
    fn iteration_limit() {
        let tableau = with_objective(vec![-1f64, -2f64, 1f64, 1f64, 0f64]);
        let solver = Solver::<FirstNegative>::new(Limits::default().with_max_pivots(1));

        assert_eq!(
            solver.find_max_with_optimal_solution(&tableau),
            Err(Error::IterationLimit { limit: 1 }),
        );
    }

    #[test]
    fn most_negative_rule() {
        let tableau = with_objective(vec![-1f64, -2f64, 1f64, 1f64, 0f64]);
        let optimal = Solver::<MostNegative>::default()
            .find_max_with_optimal_solution(&tableau)
            .unwrap();

        assert_abs_diff_eq!(optimal.max(), 36f64, epsilon = 1e-9);
    }
}
