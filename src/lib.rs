//! Classic algorithm exercises: prime sieving, sorting and selection, loop
//! formulas, and small container/string utilities.
//!
//! Every function is self-contained and pure (or trivially in-place): it
//! allocates what it needs, hands the result to the caller, and keeps no
//! state between calls. The one piece with real algorithmic content is the
//! prime module, built on a Sieve of Eratosthenes; everything else is a
//! single-pass or closed-form computation.
//!
//! Usage:
//!
//!     use classic_algos::primes;
//!
//!     assert_eq!(vec![2, 3, 5, 7], primes::primes_up_to(10).unwrap());
//!     assert_eq!(vec![2, 2, 3], primes::prime_factors(12).unwrap());

// Internal modules
mod error;

pub mod control;
pub mod generator;
pub mod linked_list;
pub mod primes;
pub mod sort;
pub mod strings;
pub mod vector;

pub use error::{Error, Result};
