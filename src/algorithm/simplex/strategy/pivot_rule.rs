//! # Pivot rules
//!
//! Strategies for selecting the column to pivot on, both while searching for a feasible tableau
//! and while improving the objective of a feasible one.
//!
//! Once the column has been selected, a row needs to be found. That decision is made by the ratio
//! test in `Tableau::select_pivot_row`, independent of the strategy.
use crate::data::tableau::Tableau;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;
    /// Column selection rule while searching for a feasible tableau.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau that is not yet feasible.
    /// * `row`: Constraint row with a negative right hand side.
    ///
    /// # Return value
    ///
    /// A column with a negative value in `row`, if there is one.
    fn select_feasibility_column(&mut self, tableau: &Tableau, row: usize) -> Option<usize>;
    /// Column selection rule while improving the objective value.
    ///
    /// # Return value
    ///
    /// A column with a negative relative cost, or `None` if the tableau is optimal.
    fn select_optimality_column(&mut self, tableau: &Tableau) -> Option<usize>;
}

/// Simply pivot on the first column with a negative value.
pub struct FirstNegative;
impl PivotRule for FirstNegative {
    fn new() -> Self {
        Self
    }

    fn select_feasibility_column(&mut self, tableau: &Tableau, row: usize) -> Option<usize> {
        first_negative(&tableau.rows()[row][..tableau.nr_variables()])
    }

    fn select_optimality_column(&mut self, tableau: &Tableau) -> Option<usize> {
        first_negative(&tableau.objective_row()[..tableau.nr_variables()])
    }
}

/// Pivot on the column with the most negative value, the first one in case of ties.
///
/// This is Dantzig's original rule. It usually needs fewer pivots than `FirstNegative`, but it can
/// cycle on degenerate problems.
pub struct MostNegative;
impl PivotRule for MostNegative {
    fn new() -> Self {
        Self
    }

    fn select_feasibility_column(&mut self, tableau: &Tableau, row: usize) -> Option<usize> {
        most_negative(&tableau.rows()[row][..tableau.nr_variables()])
    }

    fn select_optimality_column(&mut self, tableau: &Tableau) -> Option<usize> {
        most_negative(&tableau.objective_row()[..tableau.nr_variables()])
    }
}

fn first_negative(values: &[f64]) -> Option<usize> {
    values.iter().position(|&value| value < 0f64)
}

fn most_negative(values: &[f64]) -> Option<usize> {
    values.iter().enumerate()
        .filter(|&(_, &value)| value < 0f64)
        .fold(None, |best: Option<(usize, f64)>, (column, &value)| match best {
            Some((_, best_value)) if best_value <= value => best,
            _ => Some((column, value)),
        })
        .map(|(column, _)| column)
}
