//! # Doubled solutions
//!
//! A solved tableau holds the solution of the dual problem as well: the dual variable paired with
//! a non-basic column takes the value of the objective row in that column. This module reads both
//! solutions from the same tableau, without any further pivoting.
//!
//! Both sides share the objective value, which is read from the same bottom right cell.
use crate::algorithm::simplex::solution::{MaxSolution, MinSolution, Solution};
use crate::algorithm::simplex::strategy::pivot_rule::PivotRule;
use crate::algorithm::simplex::Solver;
use crate::data::tableau::Tableau;
use crate::error::Error;

/// Primal and dual solutions read from a feasible, but not necessarily optimal, tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct DoubledSolution {
    max: Solution,
    min: Solution,
}

impl DoubledSolution {
    /// Derive the dual of a maximization problem from its feasible tableau.
    pub fn from_max_support(support: Solution) -> Self {
        let min = Solution::dual(support.tableau().clone());
        Self { max: support, min }
    }

    /// Derive the dual of a minimization problem from the feasible tableau of its negation.
    pub fn from_min_support(support: Solution) -> Self {
        let max = Solution::dual(support.tableau().clone());
        Self { max, min: support }
    }

    /// Side of the maximization problem.
    pub fn max(&self) -> &Solution {
        &self.max
    }

    /// Side of the minimization problem.
    pub fn min(&self) -> &Solution {
        &self.min
    }
}

/// Primal and dual solutions read from an optimal tableau.
#[derive(Clone, Debug, PartialEq)]
pub struct DoubledOptimalSolution {
    max: MaxSolution,
    min: MinSolution,
}

impl DoubledOptimalSolution {
    /// Derive the optimal solution of the dual minimization problem.
    pub fn from_max(max: MaxSolution) -> Self {
        let dual = Solution::dual(max.tableau().clone());
        let min = MinSolution::new(dual, max.max());

        Self { max, min }
    }

    /// Derive the optimal solution of the dual maximization problem.
    pub fn from_min(min: MinSolution) -> Self {
        let dual = Solution::dual(min.tableau().clone());
        let max = MaxSolution::new(dual, min.min());

        Self { max, min }
    }

    /// Side of the maximization problem.
    pub fn max(&self) -> &MaxSolution {
        &self.max
    }

    /// Side of the minimization problem.
    pub fn min(&self) -> &MinSolution {
        &self.min
    }
}

impl<PR: PivotRule> Solver<PR> {
    /// Maximize, and read the dual solution from the optimal tableau.
    pub fn find_max_doubled_with_optimal_solution(
        &self,
        tableau: &Tableau,
    ) -> Result<DoubledOptimalSolution, Error> {
        self.find_max_with_optimal_solution(tableau)
            .map(DoubledOptimalSolution::from_max)
    }

    /// Minimize, and read the dual solution from the optimal tableau.
    pub fn find_min_doubled_with_optimal_solution(
        &self,
        tableau: &Tableau,
    ) -> Result<DoubledOptimalSolution, Error> {
        self.find_min_with_optimal_solution(tableau)
            .map(DoubledOptimalSolution::from_min)
    }

    /// Search for a feasible tableau, and read both solutions from it.
    pub fn find_max_doubled_with_support_solution(
        &self,
        tableau: &Tableau,
    ) -> Result<DoubledSolution, Error> {
        self.find_support_solution(tableau)
            .map(DoubledSolution::from_max_support)
    }

    /// Search for a feasible tableau of the negated problem, and read both solutions from it.
    pub fn find_min_doubled_with_support_solution(
        &self,
        tableau: &Tableau,
    ) -> Result<DoubledSolution, Error> {
        self.find_min_with_support_solution(tableau)
            .map(DoubledSolution::from_min_support)
    }
}
