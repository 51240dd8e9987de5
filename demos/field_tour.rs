//! GF(p^k) Arithmetic
//!
//! This example demonstrates:
//! - Building a field from a known modulus and from a search
//! - Element arithmetic, including integer scalars on either side
//! - Powers, Frobenius, trace and norm
//! - Checked operations that report errors instead of panicking
//!
//! Run with: cargo run --example field_tour

use std::sync::Arc;

use gfpk::{FieldElement, FieldError, Modulus, Poly};

fn main() -> Result<(), FieldError> {
    println!("=== GF(p^k) Arithmetic ===\n");

    gf4_table()?;
    gf9_maps()?;
    searched_field()?;
    error_handling()?;

    Ok(())
}

/// The full multiplication table of GF(4) = F_2[x] / (x^2 + x + 1)
fn gf4_table() -> Result<(), FieldError> {
    println!("--- GF(4) Multiplication ---\n");

    let modulus = Arc::new(Modulus::irreducible(Poly::new(2, vec![1, 1, 1]), 2)?);
    let elements: Vec<FieldElement> = [[0, 0], [1, 0], [0, 1], [1, 1]]
        .iter()
        .map(|c| FieldElement::new(c, modulus.clone()))
        .collect();

    for a in &elements {
        let row: Vec<String> = elements
            .iter()
            .map(|b| format!("{:>5}", (a * b).to_string()))
            .collect();
        println!("{:>5} | {}", a.to_string(), row.join(" "));
    }
    println!();

    Ok(())
}

/// Frobenius, trace and norm in GF(9) = F_3[x] / (x^2 + 1)
fn gf9_maps() -> Result<(), FieldError> {
    println!("--- GF(9) Maps ---\n");

    let modulus = Arc::new(Modulus::irreducible(Poly::new(3, vec![1, 0, 1]), 2)?);
    let x = FieldElement::x_like(&FieldElement::from_int(0, modulus));
    let a = &x + 1;

    println!("a          = {}", a);
    println!("a^p        = {}", a.frobenius());
    println!("conjugates = {:?}", a.conjugates());
    println!("Tr(a)      = {}", a.trace()?);
    println!("N(a)       = {}", a.norm()?);
    println!("a^8        = {}", a.pow(8));
    println!("2 - a      = {}", 2 - &a);
    println!("a^-1       = {}\n", a.inverse()?);

    Ok(())
}

/// A field whose modulus is found by the crate
fn searched_field() -> Result<(), FieldError> {
    println!("--- GF(7^4) ---\n");

    let modulus = Arc::new(Modulus::find(7, 4)?);
    println!("modulus: {}", modulus);
    println!("order:   {:?}", modulus.order());

    let a = FieldElement::new(&[3, -1, 0, 2], modulus);
    let inv = a.inverse()?;
    println!("a       = {}", a);
    println!("a^-1    = {}", inv);
    println!("a*a^-1  = {}\n", &a * &inv);

    Ok(())
}

fn error_handling() -> Result<(), FieldError> {
    println!("--- Errors ---\n");

    let gf4 = Arc::new(Modulus::irreducible(Poly::new(2, vec![1, 1, 1]), 2)?);
    let gf9 = Arc::new(Modulus::irreducible(Poly::new(3, vec![1, 0, 1]), 2)?);
    let a = FieldElement::new(&[1, 1], gf4.clone());
    let b = FieldElement::new(&[1, 1], gf9);
    let zero = FieldElement::new(&[], gf4);

    println!("a + b:    {:?}", a.try_add(&b).err());
    println!("a / 0:    {:?}", a.try_div(&zero).err());
    println!("a^-2:     {:?}", a.pow_signed(-2).err());
    println!("rem by 0: {:?}", Poly::x(5).rem(&Poly::zero(5)).err());
    println!(
        "bad degree: {:?}",
        FieldElement::from_parts(&[1], 2, 3, &Poly::new(2, vec![1, 1, 1])).err()
    );

    Ok(())
}
