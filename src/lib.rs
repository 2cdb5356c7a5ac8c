//! # Jordan elimination on simplex tableaus
//!
//! Small linear programs are solved with the Simplex Method on labeled tableaus. Every step is a
//! (modified) Jordan elimination, which exchanges a basic and a non-basic variable. On top of the
//! basic searches, the crate derives dual solutions, integer solutions through cutting planes,
//! and mixed strategies of two player zero sum games.
//!
//! ```
//! use jordan_lp::algorithm::simplex::find_max_with_optimal_solution;
//! use jordan_lp::data::tableau::Tableau;
//!
//! // Maximize 2 x0 + 7 x1 subject to -2 x0 + 3 x1 <= 14 and x0 + x1 <= 8.
//! let tableau = Tableau::new(vec![
//!     vec![-2f64, 3f64, 14f64],
//!     vec![1f64, 1f64, 8f64],
//!     vec![-2f64, -7f64, 0f64],
//! ])?;
//! let solution = find_max_with_optimal_solution(&tableau)?;
//! assert!((solution.max() - 46f64).abs() < 1e-9);
//! # Ok::<(), jordan_lp::Error>(())
//! ```
#![warn(missing_docs)]

pub mod algorithm;
pub mod data;
pub mod error;

pub use error::Error;
