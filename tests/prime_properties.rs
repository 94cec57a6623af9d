use classic_algos::primes::{
    generate_sieve, is_prime, is_prime_fast, prime_factors, primes_up_to, sum_primes,
    sum_primes_using_sieve,
};
use proptest::prelude::*;

/// Trial-division primality, independent of the sieve, as a reference.
fn trial_division_is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

/// Sum of primes below n computed without any sieve.
fn trial_division_sum_primes(n: i64) -> i64 {
    (2..n).filter(|&k| trial_division_is_prime(k)).sum()
}

#[test]
fn sum_cross_checks_against_trial_division() {
    for n in [12, 100, 1000] {
        assert_eq!(trial_division_sum_primes(n), sum_primes(n).unwrap());
    }
}

#[test]
fn negative_bounds_fail_across_operations() {
    for n in [-1, -5, -100] {
        assert!(generate_sieve(n).is_err());
        assert!(sum_primes(n).is_err());
        assert!(sum_primes_using_sieve(n).is_err());
        assert!(primes_up_to(n).is_err());
        assert!(prime_factors(n).is_err());
    }
    assert!(prime_factors(0).is_err());
}

proptest! {
    #[test]
    fn sieve_table_shape(n in 0i64..2_000) {
        let table = generate_sieve(n).unwrap();
        prop_assert_eq!((n + 1) as usize, table.len());
        prop_assert!(!table[0]);
        if n >= 1 {
            prop_assert!(!table[1]);
        }
    }

    #[test]
    fn sieve_is_idempotent(n in 0i64..2_000) {
        prop_assert_eq!(generate_sieve(n).unwrap(), generate_sieve(n).unwrap());
    }

    #[test]
    fn sieve_agrees_with_trial_division(n in 0i64..1_000) {
        let table = generate_sieve(n).unwrap();
        for i in 0..=n {
            prop_assert_eq!(trial_division_is_prime(i), table[i as usize]);
        }
    }

    #[test]
    fn enumeration_matches_is_prime_membership(n in 0i64..1_000) {
        let primes = primes_up_to(n).unwrap();
        for window in primes.windows(2) {
            prop_assert!(window[0] < window[1]);
        }
        for i in 0..=n {
            prop_assert_eq!(is_prime(i), primes.contains(&i));
        }
    }

    #[test]
    fn summation_entry_points_agree(n in 0i64..5_000) {
        prop_assert_eq!(sum_primes(n).unwrap(), sum_primes_using_sieve(n).unwrap());
    }

    #[test]
    fn summation_matches_trial_division(n in 0i64..1_500) {
        prop_assert_eq!(trial_division_sum_primes(n), sum_primes(n).unwrap());
    }

    #[test]
    fn factor_product_recovers_input(n in 1i64..100_000) {
        let factors = prime_factors(n).unwrap();
        prop_assert_eq!(n, factors.iter().product::<i64>());
        for window in factors.windows(2) {
            prop_assert!(window[0] <= window[1]);
        }
        for &f in &factors {
            prop_assert!(is_prime_fast(f));
        }
    }

    #[test]
    fn fast_primality_agrees(n in -100i64..3_000) {
        prop_assert_eq!(is_prime(n), is_prime_fast(n));
    }
}
