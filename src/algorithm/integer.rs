//! # Integer solutions
//!
//! A cutting plane extension of the simplex searches. After an optimal tableau is found, the first
//! row of a primal variable with a fractional value yields a new constraint: the negated
//! fractional parts of that row, labeled `Label::Slack`. The tableau with the extra constraint is
//! rounded and solved again from scratch, until all primal variables are integer.
//!
//! This is a single cut heuristic, not a branch and bound method. It finds the integer optimum of
//! the small problems it is meant for, but it is not guaranteed to be globally optimal in general.
use log::debug;

use crate::algorithm::simplex::solution::{MaxSolution, MinSolution, Solution};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::Solver;
use crate::data::number_types::{is_integer, round_all};
use crate::data::tableau::Tableau;
use crate::error::Error;

/// Outcome of the last round of the cutting plane loop.
#[derive(Clone, Debug, PartialEq)]
pub struct IntegerSolution<O> {
    support: Solution,
    optimal: O,
}

impl<O> IntegerSolution<O> {
    /// Feasible tableau found in the last round, before optimizing.
    pub fn support(&self) -> &Solution {
        &self.support
    }

    /// Optimal solution of the last round. Its result vector is rounded, so it holds integers.
    pub fn optimal(&self) -> &O {
        &self.optimal
    }
}

impl<PR: PivotRule> Solver<PR> {
    /// Maximize over the integer points of the feasible region.
    ///
    /// # Errors
    ///
    /// Any error of the underlying searches, or `Error::IterationLimit` when the solution is still
    /// fractional after `limits.max_cuts` cutting planes.
    pub fn find_max_integer_solution(
        &self,
        tableau: &Tableau,
    ) -> Result<IntegerSolution<MaxSolution>, Error> {
        let mut tableau = tableau.clone();

        for cuts in 0..=self.limits().max_cuts {
            let support = self.find_support_solution(&tableau)?;
            let optimal = self.find_optimal_solution(support.tableau())?;

            let Some(row) = first_fractional_row(optimal.tableau()) else {
                debug!("integer solution found after {} cutting planes", cuts);

                let max = optimal.max();
                let result = round_all(optimal.result());
                let tableau = optimal.into_solution().into_tableau();
                let optimal = MaxSolution::new(Solution::new(tableau, result), max);
                return Ok(IntegerSolution { support, optimal });
            };

            let cut = optimal.tableau().integer_limitation_for(row)?
                .into_iter()
                .map(|value| -value)
                .collect::<Vec<_>>();
            debug!("adding cutting plane {:?} derived from row {}", cut, row);

            tableau = optimal.tableau().insert_row(cut)?.round();
        }

        Err(Error::IterationLimit { limit: self.limits().max_cuts })
    }

    /// Minimize over the integer points of the feasible region, by maximizing the negation.
    pub fn find_min_integer_solution(
        &self,
        tableau: &Tableau,
    ) -> Result<IntegerSolution<MinSolution>, Error> {
        let IntegerSolution { support, optimal } =
            self.find_max_integer_solution(&tableau.negate_objective())?;

        Ok(IntegerSolution { support, optimal: MinSolution::from(optimal) })
    }
}

/// First row of a primal variable whose value, rounded to two decimals, is not integer.
fn first_fractional_row(tableau: &Tableau) -> Option<usize> {
    tableau.row_labels().iter().enumerate()
        .find(|&(row, label)| label.primal_index().is_some() && !is_integer(tableau.rhs(row)))
        .map(|(row, _)| row)
}
