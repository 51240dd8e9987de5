//! Arithmetic in finite fields GF(p^k).
//!
//! Elements of GF(p^k) are polynomials over F_p reduced modulo a fixed
//! irreducible polynomial of degree `k`. The crate is layered:
//!
//! - [`Poly`]: the polynomial ring F_p[x] (division, gcd, modular inverse
//!   and exponentiation),
//! - [`FieldElement`]: an element bundled with the [`Modulus`] that defines
//!   its field,
//! - [`find_irreducible`] / [`is_irreducible`]: Rabin's test and a
//!   deterministic search for a modulus.
//!
//! # Primality of `p`
//!
//! The characteristic `p` is **not** checked for primality. A composite `p`
//! makes F_p a ring with zero divisors, and inverses or the irreducibility
//! test then give meaningless answers. Validate once with [`is_prime`].
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use gfpk::{FieldElement, Modulus, Poly};
//!
//! // GF(4) = F_2[x] / (x^2 + x + 1)
//! let modulus = Arc::new(Modulus::irreducible(Poly::new(2, vec![1, 1, 1]), 2).unwrap());
//! let x = FieldElement::new(&[0, 1], modulus.clone());
//! let one = FieldElement::new(&[1], modulus);
//!
//! assert_eq!(&x * &x, &x + &one);
//! assert_eq!(x.inverse().unwrap(), x + 1);
//! ```
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls and the modulus cache.
//! - `serde`: serialization for `Fp`, `Poly`, `Modulus` and `FieldElement`.
//! - `rand`: random elements and random irreducible polynomials.
//! - `subtle`: constant-time equality.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod algebra;
pub mod error;
pub mod structures;
pub mod utils;

pub use algebra::field::Field;
pub use algebra::ring::Ring;

pub use error::{FieldError, ModulusError};

#[cfg(feature = "std")]
pub use structures::cache::{self, cached_modulus};
pub use structures::fp::{Fp, Scalar};
pub use structures::gf::{FieldElement, Modulus};
#[cfg(feature = "rand")]
pub use structures::irreducible::random_irreducible;
pub use structures::irreducible::{
    find_irreducible, is_irreducible, IrreducibleSearch, MonicCandidates,
};
pub use structures::poly::Poly;
pub use utils::{is_prime, prime_factors};
