//! # Algorithms
//!
//! The simplex searches, and the algorithms that are built on top of them.
pub mod doubled;
pub mod equations;
pub mod game;
pub mod integer;
pub mod simplex;
pub mod utilities;
