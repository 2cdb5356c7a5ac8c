//! # Utilities
//!
//! Helper functions for algorithms.

/// Indices of all elements equal to the largest one, in ascending order.
///
/// Returns an empty vector for an empty slice.
pub fn max_indices(values: &[f64]) -> Vec<usize> {
    extreme_indices(values, |candidate, best| candidate > best)
}

/// Indices of all elements equal to the smallest one, in ascending order.
///
/// Returns an empty vector for an empty slice.
pub fn min_indices(values: &[f64]) -> Vec<usize> {
    extreme_indices(values, |candidate, best| candidate < best)
}

fn extreme_indices(values: &[f64], is_better: impl Fn(f64, f64) -> bool) -> Vec<usize> {
    let mut indices = Vec::new();
    let mut best = None;

    for (i, &value) in values.iter().enumerate() {
        match best {
            Some(current) if value == current => indices.push(i),
            Some(current) if !is_better(value, current) => (),
            _ => {
                best = Some(value);
                indices.clear();
                indices.push(i);
            },
        }
    }

    indices
}
