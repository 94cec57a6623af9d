//! Vector utilities: in-place modification, searching, sorting, reversal,
//! rotation, and merging.

use crate::error::{Error, Result};

/// Add 1 to each element, in place.
pub fn modify_vector(vector: &mut [i64]) {
    for value in vector.iter_mut() {
        *value += 1;
    }
}

/// Collect every index at which the value appears, ascending.
pub fn search_vector(vector: &[i64], value: i64) -> Vec<usize> {
    vector
        .iter()
        .enumerate()
        .filter_map(|(i, &v)| (v == value).then_some(i))
        .collect()
}

/// Return a new vector with the slice's elements sorted ascending.
pub fn sort_vector(vector: &[i64]) -> Vec<i64> {
    let mut sorted = vector.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Return a new vector with the slice's elements in reverse order.
pub fn reverse_vector(vector: &[i64]) -> Vec<i64> {
    vector.iter().rev().copied().collect()
}

/// Return a new vector rotated left by `positions`.
///
/// Fails with [`Error::RotationOutOfRange`] when a non-zero `positions` is
/// not less than the slice length; rotating by 0 always succeeds, the empty
/// slice included.
pub fn rotate_vector(vector: &[i64], positions: usize) -> Result<Vec<i64>> {
    if positions > 0 && positions >= vector.len() {
        return Err(Error::RotationOutOfRange {
            positions,
            len: vector.len(),
        });
    }
    let mut rotated = Vec::with_capacity(vector.len());
    rotated.extend_from_slice(&vector[positions..]);
    rotated.extend_from_slice(&vector[..positions]);
    Ok(rotated)
}

/// Return a new vector holding all of `vector1` followed by all of `vector2`.
pub fn merge_vectors(vector1: &[i64], vector2: &[i64]) -> Vec<i64> {
    let mut merged = Vec::with_capacity(vector1.len() + vector2.len());
    merged.extend_from_slice(vector1);
    merged.extend_from_slice(vector2);
    merged
}
