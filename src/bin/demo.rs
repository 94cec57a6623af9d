//! Console demo that exercises each library module in sequence, mirroring
//! the sections a reader would explore first: loop formulas, vectors,
//! primes, then sorting.

use std::process;

use classic_algos::{control, generator, primes, sort, vector, Result};

fn single_loops() -> Result<()> {
    println!("SingleForLoop");
    println!("-------------");
    println!("sum_range(10): {}", control::sum_range(10)?);
    println!("max_array([1, 2, 3, 4, 5]): {}", control::max_array(&[1, 2, 3, 4, 5])?);
    println!("sum_modulus(100, 3): {}", control::sum_modulus(100, 3)?);
    println!();
    Ok(())
}

fn double_loops() -> Result<()> {
    println!("DoubleForLoop");
    println!("-------------");
    println!("sum_square(10): {}", control::sum_square(10)?);
    println!("sum_triangle(10): {}", control::sum_triangle(10)?);
    println!(
        "count_pairs([1, 2, 3, 4, 5, 2]): {}",
        control::count_pairs(&[1, 2, 3, 4, 5, 2])
    );
    println!(
        "count_duplicates([1, 2, 3, 4, 5], [1, 3, 2, 4, 5]): {}",
        control::count_duplicates(&[1, 2, 3, 4, 5], &[1, 3, 2, 4, 5])?
    );
    println!();
    Ok(())
}

fn vectors() -> Result<()> {
    let input = generator::generate_vector(10, 0, 9)?;
    let input2 = generator::generate_vector(10, 0, 9)?;

    println!("Vector");
    println!("------");
    let mut modified = input.clone();
    vector::modify_vector(&mut modified);
    println!("modify_vector({:?}): {:?}", input, modified);
    println!(
        "search_vector({:?}, 5): {:?}",
        input,
        vector::search_vector(&input, 5)
    );
    println!("sort_vector({:?}): {:?}", input, vector::sort_vector(&input));
    println!(
        "reverse_vector({:?}): {:?}",
        input,
        vector::reverse_vector(&input)
    );
    println!(
        "rotate_vector({:?}, 3): {:?}",
        input,
        vector::rotate_vector(&input, 3)?
    );
    println!(
        "merge_vectors({:?}, {:?}): {:?}",
        input,
        input2,
        vector::merge_vectors(&input, &input2)
    );
    println!();
    Ok(())
}

fn prime_ops() -> Result<()> {
    println!("Primes");
    println!("------");
    println!("is_prime(10): {}", primes::is_prime(10));
    println!("sum_primes(10): {}", primes::sum_primes(10)?);
    println!("prime_factors(10): {:?}", primes::prime_factors(10)?);
    println!();
    Ok(())
}

fn sorting() -> Result<()> {
    let input = generator::generate_vector(20, 0, 9)?;

    println!("Sort");
    println!("------");
    println!("sort_vector({:?}): {:?}", input, sort::sort_vector(&input));
    println!(
        "dutch_flag_partition({:?}, 5): {:?}",
        input,
        sort::dutch_flag_partition(&input, 5)
    );
    println!("max_n({:?}, 5): {:?}", input, sort::max_n(&input, 5)?);
    println!();
    Ok(())
}

fn run() -> Result<()> {
    single_loops()?;
    double_loops()?;
    vectors()?;
    prime_ops()?;
    sorting()?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("Application error: {e}");
        eprintln!("The application encountered an error and will terminate.");
        process::exit(1);
    }
}
