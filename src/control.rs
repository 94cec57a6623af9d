//! Loop-formula utilities: range sums, array maxima, and pair counting.
//!
//! The summation functions use the closed-form formulas for what would
//! conceptually be single or nested loops, so they run in O(1).

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Sum the integers from 1 to n (exclusive), i.e. n * (n - 1) / 2.
///
/// Fails with [`Error::NegativeBound`] if n is negative.
pub fn sum_range(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    Ok(n * (n - 1) / 2)
}

/// Find the maximum value in a slice.
///
/// Fails with [`Error::EmptyInput`] for an empty slice, which has no maximum.
pub fn max_array(array: &[i64]) -> Result<i64> {
    match array.iter().max() {
        Some(&max) => Ok(max),
        None => Err(Error::EmptyInput),
    }
}

/// Sum the multiples of m below n, i.e. m * k * (k + 1) / 2 for k = (n - 1) / m.
///
/// Fails with [`Error::NegativeBound`] if n is negative and with
/// [`Error::NonPositive`] if m is not strictly positive.
pub fn sum_modulus(n: i64, m: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    if m <= 0 {
        return Err(Error::NonPositive(m));
    }
    let k = (n - 1) / m;
    Ok(m * k * (k + 1) / 2)
}

/// Sum the squares 0^2 + 1^2 + ... + (n - 1)^2 via (n - 1) n (2n - 1) / 6.
///
/// Fails with [`Error::NegativeBound`] if n is negative.
pub fn sum_square(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    Ok((n - 1) * n * (2 * n - 1) / 6)
}

/// Sum the triangular numbers T(0) + T(1) + ... + T(n - 1) via (n - 1) n (n + 1) / 6.
///
/// Fails with [`Error::NegativeBound`] if n is negative.
pub fn sum_triangle(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    Ok((n - 1) * n * (n + 1) / 6)
}

/// Count the values that appear exactly twice in the slice.
///
/// Single pass over a frequency map, O(n) instead of the naive O(n^2)
/// pairwise comparison.
pub fn count_pairs(array: &[i64]) -> usize {
    let mut frequency: HashMap<i64, usize> = HashMap::new();
    for &value in array {
        *frequency.entry(value).or_insert(0) += 1;
    }
    frequency.values().filter(|&&count| count == 2).count()
}

/// Count the positions at which the two slices hold equal values.
///
/// Fails with [`Error::LengthMismatch`] if the slices differ in length.
pub fn count_duplicates(array0: &[i64], array1: &[i64]) -> Result<usize> {
    if array0.len() != array1.len() {
        return Err(Error::LengthMismatch {
            left: array0.len(),
            right: array1.len(),
        });
    }
    Ok(array0
        .iter()
        .zip(array1.iter())
        .filter(|(a, b)| a == b)
        .count())
}

/// Sum every value in a square matrix.
///
/// Fails with [`Error::NotSquare`] if any row's length differs from the
/// number of rows.
pub fn sum_matrix(matrix: &[Vec<i64>]) -> Result<i64> {
    let n = matrix.len();
    let mut total = 0;
    for (row, values) in matrix.iter().enumerate() {
        if values.len() != n {
            return Err(Error::NotSquare {
                row,
                expected: n,
                actual: values.len(),
            });
        }
        total += values.iter().sum::<i64>();
    }
    Ok(total)
}
