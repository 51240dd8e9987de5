//! Irreducible Polynomials
//!
//! This example demonstrates:
//! - Testing polynomials for irreducibility with Rabin's test
//! - Finding the first irreducible polynomial of a given degree
//! - Cancelling a long search from another thread
//! - Sharing moduli through the process-wide cache
//!
//! Run with: cargo run --example irreducible_search

use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use gfpk::{cached_modulus, find_irreducible, is_irreducible, FieldError, IrreducibleSearch, Poly};

fn main() -> Result<(), FieldError> {
    println!("=== Irreducible Polynomials ===\n");

    irreducibility_tests()?;
    finding_irreducibles()?;
    cancellation();
    caching()?;

    Ok(())
}

fn irreducibility_tests() -> Result<(), FieldError> {
    println!("--- Irreducibility Tests ---\n");

    // 3 is not a square mod 17, so x^2 - 3 has no root
    let irred = Poly::from_signed(17, &[-3, 0, 1]);
    println!("f(x) = {} over F_17", irred);
    println!("  is_irreducible: {}\n", is_irreducible(&irred, 17, 2)?);

    // x^2 - 4 = (x - 2)(x + 2)
    let reducible = Poly::from_signed(17, &[-4, 0, 1]);
    println!("g(x) = {} over F_17", reducible);
    println!("  is_irreducible: {}\n", is_irreducible(&reducible, 17, 2)?);

    // no roots over F_2, yet (x^2 + x + 1)^2
    let square = Poly::new(2, vec![1, 0, 1, 0, 1]);
    println!("h(x) = {} over F_2", square);
    println!("  is_irreducible: {}\n", is_irreducible(&square, 2, 4)?);

    Ok(())
}

fn finding_irreducibles() -> Result<(), FieldError> {
    println!("--- Finding Irreducibles ---\n");

    for (p, k) in [(2, 2), (2, 3), (2, 8), (3, 2), (5, 3), (7, 4), (65537, 3)] {
        let f = find_irreducible(p, k)?;
        println!("GF({}^{}): {}", p, k, f);
    }
    println!();

    Ok(())
}

fn cancellation() {
    println!("--- Cancellation ---\n");

    let cancel = AtomicBool::new(false);
    thread::scope(|s| {
        let search = s.spawn(|| IrreducibleSearch::new(1_000_003, 12).with_cancel(&cancel).run());
        thread::sleep(Duration::from_millis(10));
        cancel.store(true, Ordering::Relaxed);

        match search.join() {
            Ok(Ok(f)) => println!("finished before the flag was set: {}", f),
            Ok(Err(e)) => println!("search stopped: {}", e),
            Err(_) => println!("search thread panicked"),
        }
    });
    println!();
}

fn caching() -> Result<(), FieldError> {
    println!("--- Cache ---\n");

    let a = cached_modulus(3, 5)?;
    let b = cached_modulus(3, 5)?;
    println!("modulus for GF(3^5): {}", a);
    println!("  shared: {}", std::sync::Arc::ptr_eq(&a, &b));

    Ok(())
}
