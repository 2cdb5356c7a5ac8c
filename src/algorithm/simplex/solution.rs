//! # Representation of solutions
//!
//! A solution pairs the final tableau of a search with the values of the variables that were read
//! from it. The tableau is kept, so that a caller can continue searching from it or derive the
//! dual solution.
use crate::data::tableau::Tableau;

/// Final tableau of a search, together with the values of the primal variables.
#[derive(Clone, Debug, PartialEq)]
pub struct Solution {
    tableau: Tableau,
    /// Value of each variable, indexed by the variable index at creation of the first tableau.
    result: Vec<f64>,
}

impl Solution {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    pub fn new(tableau: Tableau, result: Vec<f64>) -> Self {
        Self { tableau, result }
    }

    /// Read the values of the primal variables from a tableau.
    pub fn primal(tableau: Tableau) -> Self {
        let result = tableau.primal_result();
        Self { tableau, result }
    }

    /// Read the values of the dual variables from a tableau.
    pub fn dual(tableau: Tableau) -> Self {
        let result = tableau.dual_result();
        Self { tableau, result }
    }

    /// The final tableau.
    pub fn tableau(&self) -> &Tableau {
        &self.tableau
    }

    /// Value of every variable.
    pub fn result(&self) -> &[f64] {
        &self.result
    }

    /// Take the final tableau.
    pub fn into_tableau(self) -> Tableau {
        self.tableau
    }
}

/// A solution of a maximization problem with its objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct MaxSolution {
    solution: Solution,
    max: f64,
}

impl MaxSolution {
    /// Create a new `MaxSolution` instance.
    pub fn new(solution: Solution, max: f64) -> Self {
        Self { solution, max }
    }

    /// The solution without the objective value.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Shorthand for the tableau of the solution.
    pub fn tableau(&self) -> &Tableau {
        self.solution.tableau()
    }

    /// Shorthand for the variable values of the solution.
    pub fn result(&self) -> &[f64] {
        self.solution.result()
    }

    /// Maximum objective value.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Take the solution without the objective value.
    pub fn into_solution(self) -> Solution {
        self.solution
    }
}

/// A solution of a minimization problem with its objective value.
#[derive(Clone, Debug, PartialEq)]
pub struct MinSolution {
    solution: Solution,
    min: f64,
}

impl MinSolution {
    /// Create a new `MinSolution` instance.
    pub fn new(solution: Solution, min: f64) -> Self {
        Self { solution, min }
    }

    /// The solution without the objective value.
    pub fn solution(&self) -> &Solution {
        &self.solution
    }

    /// Shorthand for the tableau of the solution.
    pub fn tableau(&self) -> &Tableau {
        self.solution.tableau()
    }

    /// Shorthand for the variable values of the solution.
    pub fn result(&self) -> &[f64] {
        self.solution.result()
    }

    /// Minimum objective value.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Take the solution without the objective value.
    pub fn into_solution(self) -> Solution {
        self.solution
    }
}

/// Minimizing `f` is maximizing `-f`: convert the solution of the negated problem back.
impl From<MaxSolution> for MinSolution {
    fn from(negated: MaxSolution) -> Self {
        Self {
            solution: negated.solution,
            min: -negated.max,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::algorithm::simplex::solution::{MaxSolution, MinSolution, Solution};
    use crate::data::tableau::{Label, Tableau};

    #[test]
    fn read_results() {
        let tableau = Tableau::with_labels(
            vec![vec![1f64, 2f64, 5f64], vec![3f64, 4f64, 6f64], vec![7f64, 8f64, 9f64]],
            vec![Label::Primal(1), Label::Dual(0)],
            vec![Label::Dual(1), Label::Primal(0)],
        ).unwrap();

        assert_eq!(Solution::primal(tableau.clone()).result(), &[0f64, 5f64]);
        assert_eq!(Solution::dual(tableau).result(), &[0f64, 7f64]);
    }

    #[test]
    fn negated_maximum() {
        let tableau = Tableau::new(vec![vec![1f64, 2f64], vec![3f64, 4f64]]).unwrap();
        let max = MaxSolution::new(Solution::primal(tableau), 4f64);
        let min = MinSolution::from(max.clone());

        assert_eq!(min.min(), -4f64);
        assert_eq!(min.result(), max.result());
        assert_eq!(min.tableau(), max.tableau());
    }
}
