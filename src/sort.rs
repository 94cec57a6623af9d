//! Sorting and selection: sorted copies, Dutch-flag partitioning, and
//! heap-based top-N selection.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use crate::error::{Error, Result};

/// Return a new vector with the slice's elements sorted ascending.
pub fn sort_vector(data: &[i64]) -> Vec<i64> {
    let mut sorted = data.to_vec();
    sorted.sort_unstable();
    sorted
}

/// Partition a copy of the slice around a pivot, Dutch-national-flag style.
///
/// The result holds all elements less than the pivot, then all elements equal
/// to it, then all elements greater, in two O(n) swap passes over the copy.
pub fn dutch_flag_partition(data: &[i64], pivot: i64) -> Vec<i64> {
    let mut result = data.to_vec();
    let mut next = 0;

    // First pass: move everything below the pivot to the front.
    for i in 0..result.len() {
        if result[i] < pivot {
            result.swap(i, next);
            next += 1;
        }
    }
    // Second pass: move pivot-equal elements in behind them.
    for i in next..result.len() {
        if result[i] == pivot {
            result.swap(i, next);
            next += 1;
        }
    }

    result
}

/// Return the n largest elements of the slice, descending.
///
/// Keeps a min-heap of size n while scanning, so the whole selection costs
/// O(len log n) time and O(n) space. Fails with
/// [`Error::SelectionOutOfRange`] when n is zero or exceeds the slice length.
pub fn max_n(data: &[i64], n: usize) -> Result<Vec<i64>> {
    if n == 0 || n > data.len() {
        return Err(Error::SelectionOutOfRange { n, len: data.len() });
    }

    let mut heap: BinaryHeap<Reverse<i64>> = data[..n].iter().map(|&v| Reverse(v)).collect();
    for &value in &data[n..] {
        // The heap root is the smallest of the n best seen so far.
        if let Some(&Reverse(smallest)) = heap.peek() {
            if value > smallest {
                heap.pop();
                heap.push(Reverse(value));
            }
        }
    }

    let mut result: Vec<i64> = heap.into_iter().map(|Reverse(v)| v).collect();
    result.sort_unstable_by(|a, b| b.cmp(a));
    Ok(result)
}
