use approx::assert_abs_diff_eq;

use jordan_lp::algorithm::equations::solve_system;
use jordan_lp::algorithm::simplex::limits::Limits;
use jordan_lp::algorithm::simplex::solution::MinSolution;
use jordan_lp::algorithm::simplex::strategy::pivot_rule::{FirstNegative, MostNegative};
use jordan_lp::algorithm::simplex::{
    find_max_with_optimal_solution, find_min_with_optimal_solution, find_optimal_solution,
    find_support_solution, Solver,
};
use jordan_lp::data::linear_algebra::matrix::Matrix;
use jordan_lp::data::number_types::{is_integer, round_all};
use jordan_lp::data::tableau::Label;
use jordan_lp::Error;

use crate::linear_programs::tableau;

#[test]
fn support_then_optimal() {
    let tableau = tableau(&[
        &[-1, 0, 3, -2, 1, 3],
        &[1, -1, 0, 1, 1, 3],
        &[-1, -3, 1, 1, -1, -2],
        &[-1, 1, 0, 0, 1, 0],
    ]);

    let support = find_support_solution(&tableau).unwrap();
    assert_eq!(round_all(support.result()), vec![2f64, 0f64, 0f64, 0f64, 0f64]);
    assert!(support.tableau().first_infeasible_row().is_none());

    let optimal = find_optimal_solution(support.tableau()).unwrap();
    assert_eq!(round_all(optimal.result()), vec![3f64, 0f64, 0f64, 0f64, 0f64]);
    assert_abs_diff_eq!(optimal.max(), 3f64, epsilon = 1e-9);
}

#[test]
fn max_and_min_are_negations() {
    let max = find_max_with_optimal_solution(&tableau(&[
        &[1, 1, -1, -2, 6],
        &[-1, -1, -1, 1, -5],
        &[2, -1, 3, 4, 10],
        &[-1, -2, 1, 1, 0],
    ])).unwrap();
    assert_eq!(round_all(max.result()), vec![0f64, 22f64, 0f64, 8f64]);
    assert_abs_diff_eq!(max.max(), 36f64, epsilon = 1e-9);

    let min = find_min_with_optimal_solution(&tableau(&[
        &[1, 1, -1, -2, 6],
        &[-1, -1, -1, 1, -5],
        &[2, -1, 3, 4, 10],
        &[1, 2, -1, -1, 0],
    ])).unwrap();
    assert_eq!(min.min(), -max.max());
}

#[test]
fn doubled_optimum_is_shared() {
    let solver = Solver::<FirstNegative>::default();
    let doubled = solver.find_max_doubled_with_optimal_solution(&tableau(&[
        &[-2, 3, 14],
        &[1, 1, 8],
        &[-2, -7, 0],
    ])).unwrap();

    assert_eq!(doubled.max().max(), doubled.min().min());
    assert_eq!(round_all(doubled.max().result()), vec![2f64, 6f64]);
    assert_eq!(round_all(doubled.min().result()), vec![1f64, 4f64]);
    // Strong duality: b^T y equals c^T x.
    let dual_objective = 14f64 * doubled.min().result()[0] + 8f64 * doubled.min().result()[1];
    assert_abs_diff_eq!(dual_objective, doubled.max().max(), epsilon = 1e-9);
}

#[test]
fn integer_results() {
    let solver = Solver::<FirstNegative>::default();
    let problems = [
        tableau(&[&[2, 1, 6], &[1, 3, 4], &[-1, -4, 0]]),
        tableau(&[&[3, 2, 0, 10], &[1, 4, 0, 11], &[3, 3, 1, 13], &[-4, -5, -1, 0]]),
    ];

    for problem in &problems {
        let solution = solver.find_max_integer_solution(problem).unwrap();
        assert!(solution.optimal().result().iter().all(|&value| is_integer(value)));
        assert!(solution.optimal().result().iter().all(|&value| value == value.round()));
    }
}

#[test]
fn zeros_before_search() {
    let tableau = jordan_lp::data::tableau::Tableau::with_labels(
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

    let limits = Limits::default();
    let solver = Solver::<MostNegative>::new(limits);
    let solution = solver.find_max_with_optimal_solution(&tableau.delete_zeros(&limits).unwrap()).unwrap();

    assert!(!solution.tableau().row_labels().contains(&Label::Zero));
    assert_abs_diff_eq!(solution.max(), 21f64, epsilon = 1e-9);
}

#[test]
fn min_continued_from_support() {
    let tableau = tableau(&[
        &[1, 1, -1, -2, 6],
        &[-1, -1, -1, 1, -5],
        &[2, -1, 3, 4, 10],
        &[2, -3, 0, 3, 0],
    ]);
    let solver = Solver::<FirstNegative>::default();

    let support = solver.find_min_with_support_solution(&tableau).unwrap();
    let min = MinSolution::from(solver.find_optimal_solution(support.tableau()).unwrap());

    assert_eq!(round_all(min.result()), vec![5f64, 0f64, 0f64, 0f64]);
    assert_abs_diff_eq!(min.min(), -10f64, epsilon = 1e-9);
}

#[test]
fn infeasible_and_unbounded() {
    assert_eq!(
        find_support_solution(&tableau(&[&[1, 1, -2], &[-1, -1, 0]])),
        Err(Error::NoPivotColumn { row: 0 }),
    );
    assert_eq!(
        find_max_with_optimal_solution(&tableau(&[&[-1, 1, 1], &[-1, -1, 0]])),
        Err(Error::NoPivotRow { column: 0 }),
    );
}

#[test]
fn equations() {
    let a = Matrix::new(vec![
        vec![5f64, -3f64, 7f64],
        vec![-1f64, 4f64, 3f64],
        vec![6f64, -2f64, 5f64],
    ]).unwrap();

    assert_eq!(solve_system(&a, &[13f64, 13f64, 12f64]), Ok(vec![1f64, 2f64, 2f64]));
    assert_eq!(a.invert().unwrap().invert().unwrap().round(), a);
}
