use approx::assert_abs_diff_eq;

use jordan_lp::algorithm::game::nature::{bayes, hurwicz, laplace, maximax, maximin, savage};
use jordan_lp::algorithm::game::{solve_game, GameSolution, Player};
use jordan_lp::data::linear_algebra::matrix::{Matrix, SaddlePoint};

#[test]
fn saddle_point() {
    let matrix = Matrix::new(vec![
        vec![4f64, 6f64, 7f64, 5f64],
        vec![3f64, 2f64, 8f64, 6f64],
        vec![3f64, 1f64, 6f64, 9f64],
    ]).unwrap();

    assert_eq!(
        solve_game(&matrix),
        Ok(GameSolution::Pure(SaddlePoint { row: 0, column: 0, value: 4f64 })),
    );
}

#[test]
fn strategies_are_distributions() {
    let games = [
        vec![vec![1f64, -1f64], vec![-1f64, 1f64]],
        vec![vec![2f64, -3f64], vec![-1f64, 2f64]],
        vec![vec![1f64, 3f64], vec![4f64, 2f64]],
    ];

    for game in games {
        let matrix = Matrix::new(game).unwrap();
        let GameSolution::Mixed(solution) = solve_game(&matrix).unwrap() else {
            panic!("game has a saddle point");
        };

        for player in [Player::Row, Player::Column] {
            let strategy = solution.strategy(player);
            assert!(strategy.iter().all(|&probability| probability >= 0f64));
            assert_abs_diff_eq!(strategy.iter().sum::<f64>(), 1f64, epsilon = 0.02);
        }
    }
}

#[test]
fn rock_paper_scissors() {
    let matrix = Matrix::new(vec![
        vec![0f64, -1f64, 1f64],
        vec![1f64, 0f64, -1f64],
        vec![-1f64, 1f64, 0f64],
    ]).unwrap();
    let GameSolution::Mixed(solution) = solve_game(&matrix).unwrap() else {
        panic!("game has a saddle point");
    };

    assert_eq!(solution.value(), 0f64);
    assert_eq!(solution.strategy(Player::Row), &[0.33, 0.33, 0.33]);
}

#[test]
fn nature() {
    let matrix = Matrix::new(vec![
        vec![-1f64, 1f64, 1f64, 4f64],
        vec![-1f64, -2f64, 2f64, 3f64],
        vec![3f64, -1f64, 3f64, 2f64],
    ]).unwrap();

    assert_eq!(maximin(&matrix), vec![0, 2]);
    assert_eq!(maximax(&matrix), vec![0]);
    assert_eq!(hurwicz(&matrix, 0.3), vec![0]);
    assert_eq!(savage(&matrix), vec![2]);
    assert_eq!(bayes(&matrix, &[0.2, 0.4, 0.1, 0.3]), Ok(vec![0]));
    assert_eq!(laplace(&matrix, 0.25), Ok(vec![2]));
}
