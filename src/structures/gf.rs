//! Extension field elements GF(p^k).
//!
//! This module provides:
//! - The `Modulus` struct bundling `(p, k, f)` for a reduction polynomial `f`
//! - The `FieldElement` struct that carries its modulus, so arithmetic needs
//!   no extra arguments and mixing fields is caught
//!
//! A `Modulus` only checks the degree. Building one from a reducible
//! polynomial is allowed (the irreducibility test itself does this); use
//! [`Modulus::irreducible`] or [`Modulus::find`] to get a real field.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::{FieldError, ModulusError};
use crate::structures::fp::{self, Fp, Scalar};
use crate::structures::irreducible;
use crate::structures::poly::Poly;
use crate::utils::checked_pow;

// ============================================================================
// Modulus
// ============================================================================

/// A reduction polynomial of degree `k` over F_p.
///
/// # Example
///
/// ```
/// use gfpk::{Modulus, Poly};
///
/// // GF(2^2) = F_2[x] / (x^2 + x + 1)
/// let modulus = Modulus::irreducible(Poly::new(2, vec![1, 1, 1]), 2).unwrap();
/// assert_eq!(modulus.p(), 2);
/// assert_eq!(modulus.order(), Some(4));
///
/// // x^2 + 1 = (x + 1)^2 is rejected
/// assert!(Modulus::irreducible(Poly::new(2, vec![1, 0, 1]), 2).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawModulus", into = "RawModulus")
)]
pub struct Modulus {
    poly: Poly,
    k: usize,
    /// Inverse of the leading coefficient mod p, cached for reduction.
    lc_inv: u64,
}

impl Modulus {
    /// Create a modulus of degree `k`, without testing irreducibility.
    ///
    /// # Errors
    ///
    /// Returns `ModulusError::ZeroDegree` if `poly` is zero or constant,
    /// and `ModulusError::WrongDegree` if its degree is not `k`.
    pub fn new(poly: Poly, k: usize) -> Result<Self, ModulusError> {
        let lc = match poly.degree() {
            None | Some(0) => return Err(ModulusError::ZeroDegree),
            Some(d) if d != k => {
                return Err(ModulusError::WrongDegree {
                    expected: k,
                    got: Some(d),
                })
            }
            Some(_) => poly.leading_coeff().unwrap_or(1),
        };
        // a non-unit leading coefficient only shows up with composite p,
        // where reduction is undefined anyway
        let lc_inv = fp::inv_mod(lc, poly.p()).ok_or(ModulusError::NotIrreducible)?;
        Ok(Self { poly, k, lc_inv })
    }

    /// Create a modulus, rejecting reducible polynomials.
    ///
    /// # Errors
    ///
    /// Everything [`Modulus::new`] rejects, plus `ModulusError::NotIrreducible`.
    pub fn irreducible(poly: Poly, k: usize) -> Result<Self, ModulusError> {
        let modulus = Self::new(poly, k)?;
        if !modulus.poly.is_irreducible() {
            return Err(ModulusError::NotIrreducible);
        }
        Ok(modulus)
    }

    /// Search for an irreducible modulus of degree `k` over F_p.
    ///
    /// ```
    /// use gfpk::Modulus;
    ///
    /// let modulus = Modulus::find(3, 2).unwrap();
    /// assert!(modulus.poly().is_irreducible());
    /// ```
    pub fn find(p: u64, k: usize) -> Result<Self, FieldError> {
        let poly = irreducible::find_irreducible(p, k)?;
        Ok(Self::new(poly, k)?)
    }

    /// Get a reference to the underlying polynomial.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// The characteristic `p`.
    pub fn p(&self) -> u64 {
        self.poly.p()
    }

    /// The extension degree `k`.
    pub fn k(&self) -> usize {
        self.k
    }

    /// The number of elements `p^k`, or `None` if it overflows `u64`.
    pub fn order(&self) -> Option<u64> {
        checked_pow(self.p(), self.k)
    }

    /// Reduce `poly` to its canonical representative of degree `< k`.
    pub fn reduce(&self, poly: &Poly) -> Poly {
        poly.div_rem_by_unit(&self.poly, self.lc_inv).1
    }
}

impl fmt::Debug for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Modulus({:?} over F_{})", self.poly, self.p())
    }
}

impl fmt::Display for Modulus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.poly)
    }
}

// ============================================================================
// FieldElement
// ============================================================================

/// An element of GF(p^k), stored as its reduced polynomial plus a shared modulus.
///
/// The polynomial always has degree `< k`. Two elements are equal when their
/// polynomials and moduli (hence `p` and `k`) agree.
///
/// The `try_*` methods return [`FieldError::FieldMismatch`] for operands from
/// different fields. The operators `+ - * /` are a convenience layer on top and
/// panic in that case (and on division by zero).
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use gfpk::{FieldElement, Modulus, Poly};
///
/// let modulus = Arc::new(Modulus::new(Poly::new(2, vec![1, 1, 1]), 2).unwrap());
/// let x = FieldElement::new(&[0, 1], Arc::clone(&modulus));
/// let x_plus_1 = FieldElement::new(&[1, 1], Arc::clone(&modulus));
///
/// assert_eq!(&x * &x, x_plus_1);
/// assert_eq!(&x * &x_plus_1, FieldElement::one_like(&x));
/// assert_eq!(&x + 1, x_plus_1);
/// ```
#[derive(Clone)]
pub struct FieldElement {
    poly: Poly,
    modulus: Arc<Modulus>,
}

impl FieldElement {
    /// Create an element from ascending coefficients, reduced mod p and
    /// then mod the modulus.
    pub fn new(coeffs: &[i64], modulus: Arc<Modulus>) -> Self {
        let poly = Poly::from_signed(modulus.p(), coeffs);
        Self::from_poly(&poly, modulus)
    }

    /// Create an element from explicit field parameters.
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidModulus`] when `modulus` has degree 0 or a degree
    /// other than `k`, and [`FieldError::FieldMismatch`] when it is not a
    /// polynomial over F_p.
    pub fn from_parts(coeffs: &[i64], p: u64, k: usize, modulus: &Poly) -> Result<Self, FieldError> {
        if modulus.p() != p {
            return Err(FieldError::FieldMismatch);
        }
        let modulus = Modulus::new(modulus.clone(), k)?;
        Ok(Self::new(coeffs, Arc::new(modulus)))
    }

    /// Reduce an arbitrary polynomial into the field.
    ///
    /// # Panics
    ///
    /// Panics if `poly` is over a different prime than the modulus.
    pub fn from_poly(poly: &Poly, modulus: Arc<Modulus>) -> Self {
        Self {
            poly: modulus.reduce(poly),
            modulus,
        }
    }

    /// The constant `n mod p`.
    pub fn from_int<S: Scalar>(n: S, modulus: Arc<Modulus>) -> Self {
        let poly = Poly::constant(modulus.p(), n.reduce_mod(modulus.p()));
        Self::from_poly(&poly, modulus)
    }

    /// Create the zero element with the same modulus as another element.
    pub fn zero_like(other: &Self) -> Self {
        Self {
            poly: Poly::zero(other.p()),
            modulus: Arc::clone(&other.modulus),
        }
    }

    /// Create the one element with the same modulus as another element.
    pub fn one_like(other: &Self) -> Self {
        Self::from_int(1u64, Arc::clone(&other.modulus))
    }

    /// Create the class of `x` with the same modulus.
    pub fn x_like(other: &Self) -> Self {
        Self::from_poly(&Poly::x(other.p()), Arc::clone(&other.modulus))
    }

    /// Get the reduced polynomial.
    pub fn poly(&self) -> &Poly {
        &self.poly
    }

    /// Get the modulus.
    pub fn modulus(&self) -> &Modulus {
        &self.modulus
    }

    /// Get the shared modulus reference.
    pub fn modulus_arc(&self) -> Arc<Modulus> {
        Arc::clone(&self.modulus)
    }

    pub fn p(&self) -> u64 {
        self.modulus.p()
    }

    pub fn k(&self) -> usize {
        self.modulus.k()
    }

    /// Get the coefficient of `x^i`.
    pub fn coeff(&self, i: usize) -> u64 {
        self.poly.coeff(i)
    }

    /// All `k` coefficients, zero-padded.
    pub fn to_coeffs(&self) -> Vec<u64> {
        (0..self.k()).map(|i| self.coeff(i)).collect()
    }

    /// Check if this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.poly.is_zero()
    }

    /// Check if this is the one element.
    pub fn is_one(&self) -> bool {
        self.poly.degree() == Some(0) && self.poly.coeff(0) == 1
    }

    /// Whether `self` and `other` live in the same field.
    pub fn same_field(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.modulus, &other.modulus) || self.modulus == other.modulus
    }

    fn check_same_field(&self, other: &Self) -> Result<(), FieldError> {
        if self.same_field(other) {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }

    fn with_poly(&self, poly: Poly) -> Self {
        Self {
            poly,
            modulus: Arc::clone(&self.modulus),
        }
    }

    // Callers have already checked the fields match.
    fn mul_reduced(&self, rhs: &Self) -> Self {
        self.with_poly(self.modulus.reduce(&(&self.poly * &rhs.poly)))
    }

    pub fn try_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(rhs)?;
        Ok(self.with_poly(&self.poly + &rhs.poly))
    }

    pub fn try_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(rhs)?;
        Ok(self.with_poly(&self.poly - &rhs.poly))
    }

    pub fn try_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(rhs)?;
        Ok(self.mul_reduced(rhs))
    }

    /// `self / rhs`.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotInvertible`] if `rhs` is zero, and
    /// [`FieldError::FieldMismatch`] for operands from different fields.
    pub fn try_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(rhs)?;
        let inv = rhs.inverse()?;
        Ok(self.mul_reduced(&inv))
    }

    /// Compute the multiplicative inverse.
    ///
    /// # Errors
    ///
    /// [`FieldError::NotInvertible`] for zero, or for a zero divisor when the
    /// modulus is reducible.
    pub fn inverse(&self) -> Result<Self, FieldError> {
        let inv = self.poly.mod_inverse(self.modulus.poly())?;
        Ok(self.with_poly(inv))
    }

    /// `self + n`, with `n` promoted to a constant of the field.
    pub fn add_scalar<S: Scalar>(&self, n: S) -> Self {
        let c = Poly::constant(self.p(), n.reduce_mod(self.p()));
        self.with_poly(self.modulus.reduce(&(&self.poly + &c)))
    }

    /// `self - n`.
    pub fn sub_scalar<S: Scalar>(&self, n: S) -> Self {
        let c = Poly::constant(self.p(), n.reduce_mod(self.p()));
        self.with_poly(self.modulus.reduce(&(&self.poly - &c)))
    }

    /// `n - self`.
    pub fn rsub_scalar<S: Scalar>(&self, n: S) -> Self {
        let c = Poly::constant(self.p(), n.reduce_mod(self.p()));
        self.with_poly(self.modulus.reduce(&(&c - &self.poly)))
    }

    /// `self * n`.
    pub fn mul_scalar<S: Scalar>(&self, n: S) -> Self {
        self.with_poly(self.modulus.reduce(&self.poly.scale(n.reduce_mod(self.p()))))
    }

    /// Compute `self^exp` by square-and-multiply. `a^0` is one, including `0^0`.
    pub fn pow(&self, exp: u64) -> Self {
        let mut base = self.clone();
        let mut result = Self::one_like(self);
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = result.mul_reduced(&base);
            }
            base = base.mul_reduced(&base);
            e >>= 1;
        }
        result
    }

    /// Signed variant of [`FieldElement::pow`].
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidExponent`] if `exp < 0`.
    pub fn pow_signed(&self, exp: i64) -> Result<Self, FieldError> {
        let exp = u64::try_from(exp).map_err(|_| FieldError::InvalidExponent(exp))?;
        Ok(self.pow(exp))
    }

    /// Frobenius endomorphism: `a -> a^p`.
    pub fn frobenius(&self) -> Self {
        self.pow(self.p())
    }

    /// The conjugates `a, a^p, ..., a^(p^(k-1))`.
    pub fn conjugates(&self) -> Vec<Self> {
        let mut out = Vec::with_capacity(self.k());
        let mut conjugate = self.clone();
        for _ in 0..self.k() {
            let next = conjugate.frobenius();
            out.push(conjugate);
            conjugate = next;
        }
        out
    }

    /// Sum of the conjugates, `a + a^p + ... + a^(p^(k-1))`, as a field element.
    pub fn trace_element(&self) -> Self {
        let zero = Self::zero_like(self);
        self.conjugates()
            .iter()
            .fold(zero, |acc, c| acc.with_poly(&acc.poly + &c.poly))
    }

    /// Compute the trace to the base field.
    ///
    /// # Errors
    ///
    /// [`FieldError::TraceNotInBaseField`] if the sum has positive degree,
    /// which can only happen when the modulus is reducible.
    pub fn trace(&self) -> Result<Fp, FieldError> {
        Self::to_base_field(self.trace_element())
    }

    /// Compute the norm to the base field: the product of the conjugates.
    ///
    /// # Errors
    ///
    /// Same conditions as [`FieldElement::trace`].
    pub fn norm(&self) -> Result<Fp, FieldError> {
        let one = Self::one_like(self);
        let product = self
            .conjugates()
            .iter()
            .fold(one, |acc, c| acc.mul_reduced(c));
        Self::to_base_field(product)
    }

    fn to_base_field(elem: Self) -> Result<Fp, FieldError> {
        match elem.poly.degree() {
            None | Some(0) => Ok(Fp::new(elem.poly.coeff(0), elem.p())),
            Some(degree) => Err(FieldError::TraceNotInBaseField { degree }),
        }
    }

    /// Sample a uniformly random element of the field.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, modulus: Arc<Modulus>) -> Self {
        let p = modulus.p();
        let coeffs = (0..modulus.k()).map(|_| rng.gen_range(0..p)).collect();
        Self::from_poly(&Poly::new(p, coeffs), modulus)
    }
}

impl Ring for FieldElement {
    fn zero_like(&self) -> Self {
        FieldElement::zero_like(self)
    }

    fn one_like(&self) -> Self {
        FieldElement::one_like(self)
    }

    fn is_zero(&self) -> bool {
        FieldElement::is_zero(self)
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::try_add(self, rhs)
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::try_sub(self, rhs)
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::try_mul(self, rhs)
    }

    fn negate(&self) -> Self {
        self.with_poly(-&self.poly)
    }

    fn try_pow(&self, exp: u64) -> Result<Self, FieldError> {
        Ok(self.pow(exp))
    }
}

impl Field for FieldElement {
    fn inverse(&self) -> Result<Self, FieldError> {
        FieldElement::inverse(self)
    }

    fn characteristic(&self) -> u64 {
        self.p()
    }

    fn try_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        FieldElement::try_div(self, rhs)
    }
}

/* ---- Element-by-element operators ---- */

macro_rules! impl_field_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait<&FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: &FieldElement) -> FieldElement {
                FieldElement::$checked(self, rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }

        impl $trait for FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: FieldElement) -> FieldElement {
                (&self).$method(&rhs)
            }
        }

        impl $trait<&FieldElement> for FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: &FieldElement) -> FieldElement {
                (&self).$method(rhs)
            }
        }

        impl $trait<FieldElement> for &FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: FieldElement) -> FieldElement {
                self.$method(&rhs)
            }
        }
    };
}

impl_field_op!(Add, add, try_add);
impl_field_op!(Sub, sub, try_sub);
impl_field_op!(Mul, mul, try_mul);
impl_field_op!(Div, div, try_div);

impl Neg for FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

impl Neg for &FieldElement {
    type Output = FieldElement;

    fn neg(self) -> FieldElement {
        self.negate()
    }
}

/* ---- Mixed element/integer operators ---- */

macro_rules! impl_scalar_rhs {
    ($trait:ident, $method:ident, $scalar:ident) => {
        impl<S: Scalar> $trait<S> for &FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: S) -> FieldElement {
                self.$scalar(rhs)
            }
        }

        impl<S: Scalar> $trait<S> for FieldElement {
            type Output = FieldElement;

            fn $method(self, rhs: S) -> FieldElement {
                self.$scalar(rhs)
            }
        }
    };
}

impl_scalar_rhs!(Add, add, add_scalar);
impl_scalar_rhs!(Sub, sub, sub_scalar);
impl_scalar_rhs!(Mul, mul, mul_scalar);

// A single concrete type on the left, so `2 * &a` infers without a suffix.
macro_rules! impl_scalar_lhs {
    ($trait:ident, $method:ident, $scalar:ident) => {
        impl $trait<&FieldElement> for i64 {
            type Output = FieldElement;

            fn $method(self, rhs: &FieldElement) -> FieldElement {
                rhs.$scalar(self)
            }
        }

        impl $trait<FieldElement> for i64 {
            type Output = FieldElement;

            fn $method(self, rhs: FieldElement) -> FieldElement {
                rhs.$scalar(self)
            }
        }
    };
}

impl_scalar_lhs!(Add, add, add_scalar);
impl_scalar_lhs!(Sub, sub, rsub_scalar);
impl_scalar_lhs!(Mul, mul, mul_scalar);

impl PartialEq for FieldElement {
    fn eq(&self, other: &Self) -> bool {
        self.same_field(other) && self.poly == other.poly
    }
}

impl Eq for FieldElement {}

impl fmt::Debug for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.poly)
    }
}

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConstantTimeEq for FieldElement {
    /// The modulus is public data and compared normally; only the
    /// coefficients are compared in constant time.
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        let same_field = subtle::Choice::from(self.same_field(other) as u8);
        let a = self.to_coeffs();
        let b = other.to_coeffs();
        if a.len() != b.len() {
            return subtle::Choice::from(0);
        }
        a.iter()
            .zip(b.iter())
            .fold(same_field, |acc, (x, y)| acc & subtle::ConstantTimeEq::ct_eq(x, y))
    }
}

/* ---- Serialization ---- */

#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawModulus {
    poly: Poly,
    k: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawModulus> for Modulus {
    type Error = ModulusError;

    fn try_from(raw: RawModulus) -> Result<Self, Self::Error> {
        Modulus::new(raw.poly, raw.k)
    }
}

#[cfg(feature = "serde")]
impl From<Modulus> for RawModulus {
    fn from(modulus: Modulus) -> Self {
        RawModulus {
            poly: modulus.poly,
            k: modulus.k,
        }
    }
}

/// Serialized form of a [`FieldElement`]: its coefficients together with the
/// modulus, since an element means nothing without it.
///
/// Deserialization re-validates the modulus degree and re-reduces the
/// coefficients; it does not re-run the irreducibility test.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawFieldElement {
    coeffs: Vec<u64>,
    modulus: Modulus,
}

#[cfg(feature = "serde")]
impl serde::Serialize for FieldElement {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        RawFieldElement {
            coeffs: self.poly.coefficients().to_vec(),
            modulus: (*self.modulus).clone(),
        }
        .serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FieldElement {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = RawFieldElement::deserialize(deserializer)?;
        let poly = Poly::new(raw.modulus.p(), raw.coeffs);
        Ok(FieldElement::from_poly(&poly, Arc::new(raw.modulus)))
    }
}


#[cfg(all(test, feature = "subtle"))]
mod subtle_tests {
    use super::*;
    use alloc::vec;
    use subtle::ConstantTimeEq;

    #[test]
    fn ct_eq_matches_eq() {
        let m = Arc::new(Modulus::new(Poly::new(2, vec![1, 1, 1]), 2).unwrap());
        let a = FieldElement::new(&[1, 1], Arc::clone(&m));
        let b = FieldElement::new(&[1, 1], Arc::clone(&m));
        let c = FieldElement::new(&[0, 1], m);
        assert!(bool::from(a.ct_eq(&b)));
        assert!(!bool::from(a.ct_eq(&c)));
    }
}

#[cfg(all(test, feature = "rand"))]
mod rand_tests {
    use super::*;
    use alloc::vec;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn random_elements_are_reduced() {
        let m = Arc::new(Modulus::new(Poly::new(5, vec![2, 0, 1, 1]), 3).unwrap());
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let a = FieldElement::random(&mut rng, Arc::clone(&m));
            assert!(a.poly().degree().map_or(true, |d| d < 3));
            assert!(a.to_coeffs().iter().all(|&c| c < 5));
        }
    }
}
