//! Prime number algorithms: sieve generation, primality testing, prime
//! summation, prime enumeration, and trial-division factorization.

use crate::error::{Error, Result};

/// Sieve of Eratosthenes over `[0, n]`, with no bound validation.
///
/// Strikes multiples of each prime p starting at p * p: every smaller
/// composite multiple of p has a smaller prime factor and was already struck
/// by it. The outer loop stops once i * i exceeds n for the same reason.
/// O(n log log n) time, O(n) space.
fn sieve_table(n: usize) -> Vec<bool> {
    let mut table = vec![true; n + 1];
    // 0 and 1 are not prime. take(2) keeps this in bounds for n < 2.
    for slot in table.iter_mut().take(2) {
        *slot = false;
    }

    let mut i = 2;
    while i * i <= n {
        if table[i] {
            for multiple in (i * i..=n).step_by(i) {
                table[multiple] = false;
            }
        }
        i += 1;
    }

    table
}

/// Generate a primality table for `[0, n]`: `table[i]` is true iff i is prime.
///
/// The table always has length `n + 1` so it can be indexed directly by
/// value, and entries 0 and 1 are always false. The table is built fresh on
/// every call; two calls with the same bound return identical tables.
///
/// Fails with [`Error::NegativeBound`] if n is negative, before any
/// allocation.
pub fn generate_sieve(n: i64) -> Result<Vec<bool>> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    Ok(sieve_table(n as usize))
}

/// Check whether n is prime by sieving up to n and indexing the table.
///
/// Returns false for anything below 2, negative numbers included, without
/// erroring. Each call rebuilds its sieve, so for repeated membership checks
/// over a range prefer [`primes_up_to`], and for one-off checks of large n
/// prefer [`is_prime_fast`].
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    sieve_table(n as usize)[n as usize]
}

/// Check whether n is prime by trial division up to sqrt(n).
///
/// Agrees with [`is_prime`] for every n, but runs in O(sqrt(n)) time and
/// O(1) space instead of building an O(n) table.
pub fn is_prime_fast(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3;
    while divisor * divisor <= n {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Sum all primes strictly less than n.
///
/// Fails with [`Error::NegativeBound`] if n is negative. Returns 0 for
/// n <= 2, as there are no primes below 2. The i64 sum does not overflow for
/// any bound this crate is meant for (the primes below 10,000,000 sum to
/// roughly 3.2e12).
pub fn sum_primes(n: i64) -> Result<i64> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    if n <= 2 {
        return Ok(0);
    }

    let table = sieve_table((n - 1) as usize);
    let sum = table
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i as i64))
        .sum();
    Ok(sum)
}

/// Sum all primes strictly less than n.
///
/// Legacy name kept for callers of the original API; thin alias with behavior
/// identical to [`sum_primes`] for every n.
pub fn sum_primes_using_sieve(n: i64) -> Result<i64> {
    sum_primes(n)
}

/// Collect all primes in `[2, n]` in ascending order.
///
/// Fails with [`Error::NegativeBound`] if n is negative, and returns an empty
/// vector for n < 2. Every returned value satisfies [`is_prime`].
pub fn primes_up_to(n: i64) -> Result<Vec<i64>> {
    if n < 0 {
        return Err(Error::NegativeBound(n));
    }
    if n < 2 {
        return Ok(Vec::new());
    }

    let table = sieve_table(n as usize);
    let primes = table
        .iter()
        .enumerate()
        .filter_map(|(i, &prime)| prime.then_some(i as i64))
        .collect();
    Ok(primes)
}

/// Find the prime factors of n, ascending, with multiplicity.
///
/// The product of the returned factors equals n. Uses trial division rather
/// than a sieve: memory stays O(1) beyond the result, and the worst case
/// (n prime) takes O(sqrt(n)) divisions. Fails with [`Error::NonPositive`]
/// if n <= 0; n == 1 yields an empty vector.
pub fn prime_factors(n: i64) -> Result<Vec<i64>> {
    if n <= 0 {
        return Err(Error::NonPositive(n));
    }

    let mut factors = Vec::new();
    let mut remaining = n;

    let mut divisor = 2;
    while divisor * divisor <= remaining {
        while remaining % divisor == 0 {
            factors.push(divisor);
            remaining /= divisor;
        }
        divisor += 1;
    }
    // Whatever survives trial division is itself prime.
    if remaining > 1 {
        factors.push(remaining);
    }

    Ok(factors)
}
