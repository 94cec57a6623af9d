//! Linked-list style operations over `VecDeque<i64>`: random shuffling and
//! slicing. Both return new deques and leave the input untouched.

use std::collections::VecDeque;

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// Return a new deque holding the input's elements in random order.
pub fn shuffle(list: &VecDeque<i64>) -> VecDeque<i64> {
    shuffle_with(&mut rand::rng(), list)
}

/// [`shuffle`] with a caller-supplied RNG, for deterministic tests.
pub fn shuffle_with<R: Rng>(rng: &mut R, list: &VecDeque<i64>) -> VecDeque<i64> {
    let mut values: Vec<i64> = list.iter().copied().collect();
    values.shuffle(rng);
    values.into()
}

/// Return the elements in `[start, end)` as a new deque.
///
/// Fails with [`Error::IndexOutOfBounds`] when either index exceeds the
/// length and with [`Error::InvertedRange`] when start is past end.
pub fn slice(list: &VecDeque<i64>, start: usize, end: usize) -> Result<VecDeque<i64>> {
    let len = list.len();
    if start > len {
        return Err(Error::IndexOutOfBounds { index: start, len });
    }
    if end > len {
        return Err(Error::IndexOutOfBounds { index: end, len });
    }
    if start > end {
        return Err(Error::InvertedRange { start, end });
    }
    Ok(list.iter().copied().skip(start).take(end - start).collect())
}
