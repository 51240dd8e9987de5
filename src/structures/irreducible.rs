//! Construction and verification of irreducible polynomials over F_p.
//!
//! [`is_irreducible`] implements Rabin's test. A monic `f` of degree `k` is
//! irreducible iff
//! 1. `x^(p^k) ≡ x (mod f)`, and
//! 2. `gcd(f, x^(p^(k/d)) - x) = 1` for every prime `d | k`.
//!
//! The powers `x^(p^j)` are taken as `j` successive Frobenius maps in
//! F_p[x]/(f), so the exponent `p^j` itself is never materialized.

use alloc::sync::Arc;
use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, trace};

use crate::error::{FieldError, ModulusError};
use crate::structures::gf::{FieldElement, Modulus};
use crate::structures::poly::Poly;
use crate::utils::prime_factors;

/// Rabin's irreducibility test for a degree-`k` polynomial over F_p.
///
/// The arithmetic is carried out modulo `candidate` itself, which need not
/// be irreducible for this to be well defined.
///
/// # Errors
///
/// [`FieldError::FieldMismatch`] if `candidate` is not over F_p, and
/// [`FieldError::InvalidModulus`] if its degree is 0 or differs from `k`.
///
/// # Example
///
/// ```
/// use gfpk::{is_irreducible, Poly};
///
/// // x^3 + x + 1 is irreducible over F_2, x^3 + 1 = (x + 1)(x^2 + x + 1) is not
/// assert!(is_irreducible(&Poly::new(2, vec![1, 1, 0, 1]), 2, 3).unwrap());
/// assert!(!is_irreducible(&Poly::new(2, vec![1, 0, 0, 1]), 2, 3).unwrap());
/// ```
pub fn is_irreducible(candidate: &Poly, p: u64, k: usize) -> Result<bool, FieldError> {
    if candidate.p() != p {
        return Err(FieldError::FieldMismatch);
    }
    let modulus = Arc::new(Modulus::new(candidate.clone(), k)?);
    let a = FieldElement::from_poly(&Poly::x(p), modulus);

    // x^(p^(k/d)) for each prime d | k, collected on the way to x^(p^k)
    let divisors = prime_factors(k);
    let mut intermediate = Vec::with_capacity(divisors.len());
    let mut conjugate = a.clone();
    for i in 1..=k {
        conjugate = conjugate.frobenius();
        if divisors.iter().any(|&d| i * d == k) {
            intermediate.push(conjugate.clone());
        }
    }

    // Step 1: f | x^(p^k) - x
    if conjugate != a {
        return Ok(false);
    }

    // Step 2: no factor of degree dividing k/d
    for power in &intermediate {
        let b = power.poly() - a.poly();
        if Poly::gcd(candidate, &b).degree() != Some(0) {
            return Ok(false);
        }
    }

    Ok(true)
}

/// Find a monic irreducible polynomial of degree `k` over F_p.
///
/// Returns `x` for `k = 1`. Otherwise the first irreducible polynomial in
/// [`MonicCandidates`] order is returned. Which one that is should not be
/// relied upon; only its irreducibility is guaranteed.
///
/// # Errors
///
/// [`FieldError::InvalidModulus`] for `k = 0`. [`FieldError::NoIrreducible`]
/// would mean the enumeration missed every candidate, which cannot happen
/// for prime `p`.
///
/// # Example
///
/// ```
/// use gfpk::find_irreducible;
///
/// let f = find_irreducible(5, 4).unwrap();
/// assert_eq!(f.degree(), Some(4));
/// assert!(f.is_monic());
/// assert!(f.is_irreducible());
/// ```
pub fn find_irreducible(p: u64, k: usize) -> Result<Poly, FieldError> {
    IrreducibleSearch::new(p, k).run()
}

/// Configurable search for an irreducible polynomial.
///
/// The search may visit up to `(p - 1) * p^(k-1)` candidates, so
/// long-running callers can hand in a flag to stop it from another thread.
///
/// ```
/// use std::sync::atomic::AtomicBool;
/// use gfpk::{FieldError, IrreducibleSearch};
///
/// let cancel = AtomicBool::new(true);
/// let result = IrreducibleSearch::new(7, 5).with_cancel(&cancel).run();
/// assert_eq!(result, Err(FieldError::Cancelled));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct IrreducibleSearch<'a> {
    p: u64,
    k: usize,
    cancel: Option<&'a AtomicBool>,
}

impl<'a> IrreducibleSearch<'a> {
    pub fn new(p: u64, k: usize) -> Self {
        Self { p, k, cancel: None }
    }

    /// Abort with [`FieldError::Cancelled`] once `flag` is set.
    pub fn with_cancel(mut self, flag: &'a AtomicBool) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// The candidates this search will visit, in order.
    pub fn candidates(&self) -> MonicCandidates {
        MonicCandidates::new(self.p, self.k)
    }

    pub fn run(&self) -> Result<Poly, FieldError> {
        let (p, k) = (self.p, self.k);
        match k {
            0 => return Err(ModulusError::ZeroDegree.into()),
            1 => return Ok(Poly::x(p)),
            _ => {}
        }

        debug!(p, k, "searching for irreducible polynomial");
        for (tried, candidate) in self.candidates().enumerate() {
            if self.cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                debug!(p, k, tried, "irreducible search cancelled");
                return Err(FieldError::Cancelled);
            }
            if is_irreducible(&candidate, p, k)? {
                debug!(p, k, tried = tried + 1, modulus = %candidate, "found irreducible polynomial");
                return Ok(candidate);
            }
            trace!(candidate = %candidate, "candidate is reducible");
        }

        Err(FieldError::NoIrreducible { p, k })
    }
}

/// Monic polynomials of degree `k` over F_p in a fixed order.
///
/// The lower coefficients are counted like the digits of a base-`p` number
/// with the constant term as the least significant digit. For `k >= 2`
/// candidates with constant term zero are skipped, since `x` divides them.
#[derive(Debug, Clone)]
pub struct MonicCandidates {
    p: u64,
    /// `digits[i]` is the coefficient of `x^i`; `None` once exhausted.
    digits: Option<Vec<u64>>,
    skip_zero_constant: bool,
}

impl MonicCandidates {
    pub fn new(p: u64, k: usize) -> Self {
        let skip_zero_constant = k >= 2;
        let digits = match k {
            0 => None,
            _ => {
                let mut digits = vec![0; k];
                if skip_zero_constant {
                    digits[0] = 1 % p;
                }
                Some(digits)
            }
        };
        Self {
            p,
            digits,
            skip_zero_constant,
        }
    }

    fn advance(&mut self) {
        let Some(digits) = self.digits.as_mut() else {
            return;
        };
        let first = usize::from(self.skip_zero_constant);
        for (i, d) in digits.iter_mut().enumerate() {
            *d += 1;
            if *d < self.p {
                return;
            }
            *d = if i == 0 { first as u64 } else { 0 };
        }
        self.digits = None;
    }
}

impl Iterator for MonicCandidates {
    type Item = Poly;

    fn next(&mut self) -> Option<Poly> {
        let digits = self.digits.as_ref()?;
        let mut coeffs = digits.clone();
        coeffs.push(1);
        let poly = Poly::new(self.p, coeffs);
        self.advance();
        Some(poly)
    }
}

/// Generate a random monic irreducible polynomial of the given degree.
///
/// Uses rejection sampling: about one in `k` monic polynomials of degree `k`
/// is irreducible.
///
/// # Errors
///
/// [`FieldError::InvalidModulus`] for `k = 0`.
#[cfg(feature = "rand")]
pub fn random_irreducible<R: rand::Rng + ?Sized>(
    rng: &mut R,
    p: u64,
    k: usize,
) -> Result<Poly, FieldError> {
    if k == 0 {
        return Err(ModulusError::ZeroDegree.into());
    }

    loop {
        let mut coeffs: Vec<u64> = (0..k).map(|_| rng.gen_range(0..p)).collect();
        coeffs.push(1); // monic

        let f = Poly::new(p, coeffs);
        if is_irreducible(&f, p, k)? {
            return Ok(f);
        }
    }
}
