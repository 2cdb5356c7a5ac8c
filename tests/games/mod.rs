//! # Matrix games
//!
//! Games with and without a saddle point, and the decision criteria for games against nature.

/// # Solving and checking
mod test;
