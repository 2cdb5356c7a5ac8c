//! # Linear algebra primitives
//!
//! Dense matrices and the Jordan elimination step.

pub mod matrix;
