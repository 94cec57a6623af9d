//! Random vector generation for demo inputs and tests.

use rand::Rng;

use crate::error::{Error, Result};

/// Generate `size` uniform random integers in `[min_val, max_val]`.
///
/// Fails with [`Error::InvalidRange`] when min exceeds max. A size of zero
/// yields an empty vector.
pub fn generate_vector(size: usize, min_val: i64, max_val: i64) -> Result<Vec<i64>> {
    generate_vector_with(&mut rand::rng(), size, min_val, max_val)
}

/// [`generate_vector`] with a caller-supplied RNG, for deterministic tests.
pub fn generate_vector_with<R: Rng>(
    rng: &mut R,
    size: usize,
    min_val: i64,
    max_val: i64,
) -> Result<Vec<i64>> {
    if min_val > max_val {
        return Err(Error::InvalidRange {
            min: min_val,
            max: max_val,
        });
    }
    Ok((0..size).map(|_| rng.random_range(min_val..=max_val)).collect())
}
