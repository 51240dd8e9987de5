use alloc::vec;
use alloc::vec::Vec;
use core::fmt;
use core::ops::{Add, Mul, Neg, Sub};

use crate::error::FieldError;
use crate::structures::fp::{self, Fp};
use crate::structures::irreducible;

/// Polynomial over a prime field F_p, with `p` chosen at runtime.
///
/// Coefficients are stored in ascending order of degree:
/// `coeffs[i]` is the coefficient of `x^i`, always in `[0, p)`.
///
/// The zero polynomial is represented as an empty coefficient vector.
///
/// Combining polynomials over different primes with the arithmetic operators
/// panics; the field layer reports it as [`FieldError::FieldMismatch`].
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawPoly", into = "RawPoly")
)]
pub struct Poly {
    p: u64,
    coeffs: Vec<u64>,
}

impl Poly {
    /// Create a polynomial from coefficients in ascending order.
    ///
    /// Each coefficient is reduced mod `p`; trailing zeros are removed.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// // 3 + 2x + x^2 over F_5, with 7 ≡ 2
    /// let p = Poly::new(5, vec![3, 7, 1]);
    /// assert_eq!(p.degree(), Some(2));
    /// assert_eq!(p.coeff(1), 2);
    /// ```
    pub fn new(p: u64, coeffs: Vec<u64>) -> Self {
        debug_assert!(p >= 2, "characteristic p={} must be at least 2", p);
        let coeffs = coeffs.into_iter().map(|c| c % p).collect();
        let mut poly = Self { p, coeffs };
        poly.normalize();
        poly
    }

    /// Create a polynomial from signed coefficients; negatives wrap mod `p`.
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// // x - 1 over F_3
    /// let p = Poly::from_signed(3, &[-1, 1]);
    /// assert_eq!(p.coefficients(), &[2, 1]);
    /// ```
    pub fn from_signed(p: u64, coeffs: &[i64]) -> Self {
        debug_assert!(p >= 2, "characteristic p={} must be at least 2", p);
        let coeffs = coeffs.iter().map(|&c| fp::reduce_signed(c, p)).collect();
        let mut poly = Self { p, coeffs };
        poly.normalize();
        poly
    }

    /// Create the zero polynomial.
    pub fn zero(p: u64) -> Self {
        Self {
            p,
            coeffs: Vec::new(),
        }
    }

    /// Create a constant polynomial.
    pub fn constant(p: u64, c: u64) -> Self {
        Self::new(p, vec![c])
    }

    /// Create the polynomial `x`.
    pub fn x(p: u64) -> Self {
        Self::new(p, vec![0, 1])
    }

    /// Create a monomial `c * x^n`.
    pub fn monomial(p: u64, c: u64, n: usize) -> Self {
        if c % p == 0 {
            return Self::zero(p);
        }
        let mut coeffs = vec![0; n + 1];
        coeffs[n] = c % p;
        Self { p, coeffs }
    }

    /// The characteristic of the coefficient field.
    pub fn p(&self) -> u64 {
        self.p
    }

    /// Check if this is the zero polynomial.
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Get the degree of the polynomial.
    ///
    /// Returns `None` for the zero polynomial, `Some(n)` otherwise
    /// where `n` is the highest power with a non-zero coefficient.
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Get the leading coefficient.
    ///
    /// Returns `None` for the zero polynomial.
    pub fn leading_coeff(&self) -> Option<u64> {
        self.coeffs.last().copied()
    }

    /// Get the coefficient of `x^i`.
    ///
    /// Returns zero if `i` is beyond the polynomial's degree.
    pub fn coeff(&self, i: usize) -> u64 {
        self.coeffs.get(i).copied().unwrap_or(0)
    }

    /// Get a slice of all coefficients.
    pub fn coefficients(&self) -> &[u64] {
        &self.coeffs
    }

    /// Check whether the leading coefficient is 1.
    pub fn is_monic(&self) -> bool {
        self.leading_coeff() == Some(1)
    }

    /// Evaluate the polynomial at a point using Horner's method.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpk::{Fp, Poly};
    ///
    /// // 1 + 2x + 3x^2 over F_17; p(2) = 17 ≡ 0
    /// let p = Poly::new(17, vec![1, 2, 3]);
    /// assert_eq!(p.eval(Fp::new(2, 17)), Fp::new(0, 17));
    /// ```
    pub fn eval(&self, x: Fp) -> Fp {
        let p = self.p;
        let x = x.value() % p;
        let value = self
            .coeffs
            .iter()
            .rev()
            .fold(0, |acc, &c| fp::add_mod(fp::mul_mod(acc, x, p), c, p));
        Fp::new(value, p)
    }

    /// Remove trailing zero coefficients.
    fn normalize(&mut self) {
        while self.coeffs.last() == Some(&0) {
            self.coeffs.pop();
        }
    }

    /// Multiply every coefficient by the scalar `c`.
    pub fn scale(&self, c: u64) -> Self {
        let p = self.p;
        let c = c % p;
        if c == 0 {
            return Self::zero(p);
        }
        let coeffs = self.coeffs.iter().map(|&a| fp::mul_mod(a, c, p)).collect();
        let mut poly = Self { p, coeffs };
        // a zero divisor can cancel the top term when p is composite
        poly.normalize();
        poly
    }

    /// Make the polynomial monic (leading coefficient = 1).
    ///
    /// Returns `None` if the polynomial is zero.
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// let p = Poly::new(17, vec![2, 4, 2]); // 2 + 4x + 2x^2
    /// assert_eq!(p.monic().unwrap().coefficients(), &[1, 2, 1]);
    /// ```
    pub fn monic(&self) -> Option<Self> {
        let lc = self.leading_coeff()?;
        let inv = fp::inv_mod(lc, self.p)?;
        Some(self.scale(inv))
    }

    /// Euclidean division: compute quotient and remainder.
    ///
    /// Returns `(q, r)` such that `self = q * divisor + r` and `deg(r) < deg(divisor)`.
    ///
    /// # Errors
    ///
    /// [`FieldError::DivisionError`] if the divisor is zero, and
    /// [`FieldError::NotInvertible`] if its leading coefficient has no inverse
    /// mod `p` (only possible when `p` is not prime).
    ///
    /// # Example
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// // (x^2 + 2x + 1) / (x + 1) = (x + 1), remainder 0
    /// let dividend = Poly::new(17, vec![1, 2, 1]);
    /// let divisor = Poly::new(17, vec![1, 1]);
    /// let (q, r) = dividend.div_rem(&divisor).unwrap();
    ///
    /// assert_eq!(q, divisor);
    /// assert!(r.is_zero());
    /// ```
    pub fn div_rem(&self, divisor: &Self) -> Result<(Self, Self), FieldError> {
        let lc = divisor.leading_coeff().ok_or(FieldError::DivisionError)?;
        let lc_inv = fp::inv_mod(lc, self.p).ok_or(FieldError::NotInvertible)?;
        Ok(self.div_rem_by_unit(divisor, lc_inv))
    }

    /// Long division by a non-zero divisor whose leading coefficient has
    /// inverse `lc_inv`.
    pub(crate) fn div_rem_by_unit(&self, divisor: &Self, lc_inv: u64) -> (Self, Self) {
        self.assert_same_prime(divisor);
        let p = self.p;
        let divisor_deg = divisor.coeffs.len() - 1;
        if self.coeffs.len() < divisor.coeffs.len() {
            return (Self::zero(p), self.clone());
        }

        let mut remainder = self.coeffs.clone();
        let mut quotient = vec![0; self.coeffs.len() - divisor_deg];

        for rem_deg in (divisor_deg..remainder.len()).rev() {
            let rem_lc = remainder[rem_deg];
            if rem_lc == 0 {
                continue;
            }
            let coeff = fp::mul_mod(rem_lc, lc_inv, p);
            let shift = rem_deg - divisor_deg;
            quotient[shift] = coeff;

            // remainder -= coeff * x^shift * divisor
            for (i, &d) in divisor.coeffs.iter().enumerate() {
                let r = &mut remainder[i + shift];
                *r = fp::sub_mod(*r, fp::mul_mod(coeff, d, p), p);
            }
        }
        remainder.truncate(divisor_deg);

        let mut q = Self {
            p,
            coeffs: quotient,
        };
        let mut r = Self {
            p,
            coeffs: remainder,
        };
        q.normalize();
        r.normalize();
        (q, r)
    }

    /// Compute the remainder of division.
    pub fn rem(&self, divisor: &Self) -> Result<Self, FieldError> {
        self.div_rem(divisor).map(|(_, r)| r)
    }

    /// Compute the greatest common divisor of two polynomials.
    ///
    /// The result is monic unless both inputs are zero.
    ///
    /// With a composite `p` a remainder can have a non-unit leading
    /// coefficient; the algorithm then stops and returns the last divisor.
    ///
    /// # Example
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// // gcd((x-1)(x-2), (x-2)(x-3)) = x - 2 over F_17
    /// let p1 = Poly::from_signed(17, &[2, -3, 1]);
    /// let p2 = Poly::from_signed(17, &[6, -5, 1]);
    /// assert_eq!(Poly::gcd(&p1, &p2), Poly::from_signed(17, &[-2, 1]));
    /// ```
    pub fn gcd(a: &Self, b: &Self) -> Self {
        a.assert_same_prime(b);
        let (mut r0, mut r1) = (a.clone(), b.clone());
        while !r1.is_zero() {
            let r = match r0.rem(&r1) {
                Ok(r) => r,
                // non-unit leading coefficient, composite p only
                Err(_) => break,
            };
            r0 = core::mem::replace(&mut r1, r);
        }
        let zero = Self::zero(a.p);
        r0.monic().unwrap_or(zero)
    }

    /// Extended Euclidean algorithm for polynomials.
    ///
    /// Returns `(g, s, t)` such that `g = gcd(a, b) = s*a + t*b`.
    ///
    /// The gcd `g` is monic unless both inputs are zero. Stops early with a
    /// composite `p`, like [`Poly::gcd`].
    ///
    /// # Example
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// let a = Poly::new(17, vec![1, 2, 1]); // 1 + 2x + x^2
    /// let b = Poly::new(17, vec![1, 1]);    // 1 + x
    ///
    /// let (g, s, t) = Poly::extended_gcd(&a, &b);
    /// assert_eq!(&s * &a + &t * &b, g);
    /// ```
    pub fn extended_gcd(a: &Self, b: &Self) -> (Self, Self, Self) {
        a.assert_same_prime(b);
        let p = a.p;
        let (mut r0, mut r1) = (a.clone(), b.clone());
        let (mut s0, mut s1) = (Self::constant(p, 1), Self::zero(p));
        let (mut t0, mut t1) = (Self::zero(p), Self::constant(p, 1));

        while !r1.is_zero() {
            let (q, r) = match r0.div_rem(&r1) {
                Ok(qr) => qr,
                // non-unit leading coefficient, composite p only
                Err(_) => break,
            };
            r0 = core::mem::replace(&mut r1, r);
            let s = &s0 - &(&q * &s1);
            s0 = core::mem::replace(&mut s1, s);
            let t = &t0 - &(&q * &t1);
            t0 = core::mem::replace(&mut t1, t);
        }

        // Scale so that g is monic
        match r0.leading_coeff().and_then(|lc| fp::inv_mod(lc, p)) {
            Some(inv) => (r0.scale(inv), s0.scale(inv), t0.scale(inv)),
            None if r0.is_zero() => (r0, Self::zero(p), Self::zero(p)),
            None => (r0, s0, t0),
        }
    }

    /// The inverse of `self` modulo `m`: the `b` with `self * b ≡ 1 (mod m)`.
    ///
    /// # Errors
    ///
    /// [`FieldError::DivisionError`] if `m` is zero, and
    /// [`FieldError::NotInvertible`] if `gcd(self, m)` is not a unit, which
    /// happens for `self ≡ 0 (mod m)` or when `m` is reducible.
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// let m = Poly::new(2, vec![1, 1, 1]); // x^2 + x + 1
    /// let x = Poly::x(2);
    /// let inv = x.mod_inverse(&m).unwrap();
    /// assert_eq!(inv, Poly::new(2, vec![1, 1])); // x * (x + 1) ≡ 1
    /// ```
    pub fn mod_inverse(&self, m: &Self) -> Result<Self, FieldError> {
        let a = self.rem(m)?;
        if a.is_zero() {
            return Err(FieldError::NotInvertible);
        }
        let (g, s, _) = Self::extended_gcd(&a, m);
        if g.degree() != Some(0) {
            return Err(FieldError::NotInvertible);
        }
        s.rem(m)
    }

    /// Compute `self^exp mod m` using repeated squaring.
    ///
    /// # Errors
    ///
    /// [`FieldError::DivisionError`] if `m` is zero.
    pub fn pow_mod(&self, exp: u64, m: &Self) -> Result<Self, FieldError> {
        let mut base = self.rem(m)?;
        let mut result = Self::constant(self.p, 1).rem(m)?;
        let mut e = exp;

        while e > 0 {
            if e & 1 == 1 {
                result = (&result * &base).rem(m)?;
            }
            base = (&base * &base).rem(m)?;
            e >>= 1;
        }

        Ok(result)
    }

    /// Signed variant of [`Poly::pow_mod`].
    ///
    /// # Errors
    ///
    /// [`FieldError::InvalidExponent`] if `exp < 0`.
    pub fn pow_mod_signed(&self, exp: i64, m: &Self) -> Result<Self, FieldError> {
        let exp = u64::try_from(exp).map_err(|_| FieldError::InvalidExponent(exp))?;
        self.pow_mod(exp, m)
    }

    /// Test this polynomial for irreducibility over F_p with Rabin's test.
    ///
    /// Returns `false` for zero and constant polynomials.
    ///
    /// ```
    /// use gfpk::Poly;
    ///
    /// assert!(Poly::new(2, vec![1, 1, 1]).is_irreducible());  // x^2 + x + 1
    /// assert!(!Poly::new(2, vec![1, 0, 1]).is_irreducible()); // (x + 1)^2
    /// ```
    pub fn is_irreducible(&self) -> bool {
        match self.degree() {
            None | Some(0) => false,
            Some(k) => irreducible::is_irreducible(self, self.p, k).unwrap_or(false),
        }
    }

    fn assert_same_prime(&self, rhs: &Self) {
        assert_eq!(
            self.p, rhs.p,
            "polynomials must have coefficients in the same prime field"
        );
    }

    fn add_ref(&self, rhs: &Self) -> Self {
        self.assert_same_prime(rhs);
        let p = self.p;
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| fp::add_mod(self.coeff(i), rhs.coeff(i), p))
            .collect();
        let mut poly = Self { p, coeffs };
        poly.normalize();
        poly
    }

    fn sub_ref(&self, rhs: &Self) -> Self {
        self.assert_same_prime(rhs);
        let p = self.p;
        let len = self.coeffs.len().max(rhs.coeffs.len());
        let coeffs = (0..len)
            .map(|i| fp::sub_mod(self.coeff(i), rhs.coeff(i), p))
            .collect();
        let mut poly = Self { p, coeffs };
        poly.normalize();
        poly
    }

    /// Polynomial multiplication using naive O(n*m) convolution.
    fn mul_ref(&self, rhs: &Self) -> Self {
        self.assert_same_prime(rhs);
        let p = self.p;
        if self.is_zero() || rhs.is_zero() {
            return Self::zero(p);
        }

        let n = self.coeffs.len();
        let m = rhs.coeffs.len();
        let mut coeffs = vec![0; n + m - 1];

        for (i, &a) in self.coeffs.iter().enumerate() {
            if a == 0 {
                continue;
            }
            for (j, &b) in rhs.coeffs.iter().enumerate() {
                coeffs[i + j] = fp::add_mod(coeffs[i + j], fp::mul_mod(a, b, p), p);
            }
        }

        let mut poly = Self { p, coeffs };
        poly.normalize();
        poly
    }
}

/* ---- Arithmetic operators ---- */

macro_rules! impl_poly_op {
    ($trait:ident, $method:ident, $inner:ident) => {
        impl $trait<&Poly> for &Poly {
            type Output = Poly;

            fn $method(self, rhs: &Poly) -> Poly {
                self.$inner(rhs)
            }
        }

        impl $trait for Poly {
            type Output = Poly;

            fn $method(self, rhs: Poly) -> Poly {
                self.$inner(&rhs)
            }
        }

        impl $trait<&Poly> for Poly {
            type Output = Poly;

            fn $method(self, rhs: &Poly) -> Poly {
                self.$inner(rhs)
            }
        }

        impl $trait<Poly> for &Poly {
            type Output = Poly;

            fn $method(self, rhs: Poly) -> Poly {
                self.$inner(&rhs)
            }
        }
    };
}

impl_poly_op!(Add, add, add_ref);
impl_poly_op!(Sub, sub, sub_ref);
impl_poly_op!(Mul, mul, mul_ref);

impl Neg for Poly {
    type Output = Self;

    fn neg(self) -> Self::Output {
        let p = self.p;
        let coeffs = self.coeffs.into_iter().map(|c| fp::neg_mod(c, p)).collect();
        Self { p, coeffs }
    }
}

impl Neg for &Poly {
    type Output = Poly;

    fn neg(self) -> Poly {
        -self.clone()
    }
}

impl fmt::Debug for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut first = true;
        for (i, &coeff) in self.coeffs.iter().enumerate() {
            if coeff == 0 {
                continue;
            }

            if !first {
                write!(f, " + ")?;
            }
            first = false;

            match i {
                0 => write!(f, "{}", coeff)?,
                1 if coeff == 1 => write!(f, "x")?,
                1 => write!(f, "{}*x", coeff)?,
                _ if coeff == 1 => write!(f, "x^{}", i)?,
                _ => write!(f, "{}*x^{}", coeff, i)?,
            }
        }

        Ok(())
    }
}

impl fmt::Display for Poly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

/// Wire form of a polynomial: the prime and the ascending coefficients.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RawPoly {
    p: u64,
    coeffs: Vec<u64>,
}

#[cfg(feature = "serde")]
impl TryFrom<RawPoly> for Poly {
    type Error = &'static str;

    fn try_from(raw: RawPoly) -> Result<Self, Self::Error> {
        if raw.p < 2 {
            return Err("characteristic must be at least 2");
        }
        Ok(Poly::new(raw.p, raw.coeffs))
    }
}

#[cfg(feature = "serde")]
impl From<Poly> for RawPoly {
    fn from(poly: Poly) -> Self {
        RawPoly {
            p: poly.p,
            coeffs: poly.coeffs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::format;

    fn p17(coeffs: &[i64]) -> Poly {
        Poly::from_signed(17, coeffs)
    }

    #[test]
    fn new_normalizes() {
        let p = Poly::new(17, vec![1, 2, 0, 0]);
        assert_eq!(p.degree(), Some(1));
        assert_eq!(p.coefficients(), &[1, 2]);
    }

    #[test]
    fn new_reduces_coefficients() {
        let p = Poly::new(5, vec![7, 10, 6]);
        assert_eq!(p.coefficients(), &[2, 0, 1]);
    }

    #[test]
    fn new_all_zeros() {
        let p = Poly::new(17, vec![0, 17, 34]);
        assert!(p.is_zero());
        assert_eq!(p.degree(), None);
    }

    #[test]
    fn constructors() {
        assert!(Poly::constant(5, 0).is_zero());
        assert_eq!(Poly::constant(5, 3).degree(), Some(0));
        assert_eq!(Poly::x(5).coefficients(), &[0, 1]);
        assert_eq!(Poly::monomial(5, 3, 2).coefficients(), &[0, 0, 3]);
        assert!(Poly::monomial(5, 10, 2).is_zero());
    }

    #[test]
    fn coeff_out_of_range() {
        let p = p17(&[1, 2]);
        assert_eq!(p.coeff(5), 0);
    }

    #[test]
    fn eval_horner() {
        let p = p17(&[1, 2, 3]);
        assert_eq!(p.eval(Fp::new(1, 17)).value(), 6);
        assert_eq!(p.eval(Fp::new(2, 17)).value(), 0);
        assert_eq!(Poly::zero(17).eval(Fp::new(3, 17)).value(), 0);
    }

    #[test]
    fn debug_format() {
        let p = p17(&[1, 0, 3, 1]);
        assert_eq!(format!("{:?}", p), "1 + 3*x^2 + x^3");
        assert_eq!(format!("{}", Poly::zero(17)), "0");
        assert_eq!(format!("{}", p17(&[0, 1])), "x");
    }

    #[test]
    fn add_different_degrees() {
        let a = p17(&[1, 2]);
        let b = p17(&[3, 4, 5]);
        assert_eq!(&a + &b, p17(&[4, 6, 5]));
    }

    #[test]
    fn add_cancellation() {
        let a = p17(&[1, 2, 3]);
        let b = p17(&[0, 0, -3]);
        assert_eq!((a + b).degree(), Some(1));
    }

    #[test]
    fn sub_self_is_zero() {
        let a = p17(&[1, 2, 3]);
        assert!((&a - &a).is_zero());
    }

    #[test]
    fn neg_basic() {
        let a = p17(&[1, 0, 16]);
        assert_eq!(-&a, p17(&[16, 0, 1]));
        assert!((-Poly::zero(17)).is_zero());
    }

    #[test]
    fn mul_linear() {
        // (1 + x)(1 - x) = 1 - x^2
        let a = p17(&[1, 1]);
        let b = p17(&[1, -1]);
        assert_eq!(a * b, p17(&[1, 0, -1]));
    }

    #[test]
    fn mul_degree_sum() {
        let a = p17(&[1, 2, 3]);
        let b = p17(&[4, 5, 6, 7]);
        assert_eq!((&a * &b).degree(), Some(5));
        assert!((&a * &Poly::zero(17)).is_zero());
    }

    #[test]
    fn scale_and_monic() {
        let a = p17(&[2, 4, 2]);
        assert_eq!(a.scale(9), p17(&[1, 2, 1]));
        assert!(a.scale(17).is_zero());
        assert!(a.monic().unwrap().is_monic());
        assert!(Poly::zero(17).monic().is_none());
    }

    #[test]
    fn gcd_over_composite_modulus_stops_early() {
        // over Z/4, 2x + 1 has no inverse leading coefficient
        let a = Poly::new(4, vec![0, 0, 1]);
        let b = Poly::new(4, vec![1, 2]);
        assert_eq!(a.rem(&b), Err(FieldError::NotInvertible));
        assert_eq!(Poly::gcd(&a, &b), a);

        let (g, s, t) = Poly::extended_gcd(&a, &b);
        assert_eq!(g, a);
        assert_eq!(&s * &a + &t * &b, g);
    }

    #[test]
    #[should_panic(expected = "same prime field")]
    fn mixed_primes_panic() {
        let _ = Poly::x(3) + Poly::x(5);
    }

    // ---- div_rem tests ----

    #[test]
    fn div_rem_exact_division() {
        // (x^2 - 1) / (x - 1) = (x + 1), remainder 0
        let dividend = p17(&[-1, 0, 1]);
        let divisor = p17(&[-1, 1]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();

        assert_eq!(q, p17(&[1, 1]));
        assert!(r.is_zero());
        assert_eq!(q * divisor, dividend);
    }

    #[test]
    fn div_rem_with_remainder() {
        let dividend = p17(&[1, 0, 1]); // 1 + x^2
        let divisor = p17(&[1, 1]); // 1 + x
        let (q, r) = dividend.div_rem(&divisor).unwrap();

        assert_eq!(&q * &divisor + &r, dividend);
        assert_eq!(r, p17(&[2]));
    }

    #[test]
    fn div_rem_non_monic_divisor() {
        let dividend = p17(&[3, 1, 4, 1, 5]);
        let divisor = p17(&[2, 0, 7]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();

        assert_eq!(&q * &divisor + &r, dividend);
        assert!(r.degree().unwrap_or(0) < 2);
    }

    #[test]
    fn div_rem_dividend_smaller() {
        let dividend = p17(&[1, 1]);
        let divisor = p17(&[1, 0, 1]);
        let (q, r) = dividend.div_rem(&divisor).unwrap();

        assert!(q.is_zero());
        assert_eq!(r, dividend);
    }

    #[test]
    fn div_rem_zero_dividend() {
        let (q, r) = Poly::zero(17).div_rem(&p17(&[1, 1])).unwrap();
        assert!(q.is_zero());
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_by_constant() {
        let dividend = p17(&[2, 4, 6]);
        let (q, r) = dividend.div_rem(&p17(&[2])).unwrap();
        assert_eq!(q, p17(&[1, 2, 3]));
        assert!(r.is_zero());
    }

    #[test]
    fn div_rem_zero_divisor() {
        let dividend = p17(&[1, 1]);
        assert_eq!(
            dividend.div_rem(&Poly::zero(17)),
            Err(FieldError::DivisionError)
        );
        assert_eq!(dividend.rem(&Poly::zero(17)), Err(FieldError::DivisionError));
    }

    // ---- gcd tests ----

    #[test]
    fn gcd_coprime() {
        let a = p17(&[-1, 1]);
        let b = p17(&[-2, 1]);
        assert_eq!(Poly::gcd(&a, &b), p17(&[1]));
    }

    #[test]
    fn gcd_common_factor_is_monic() {
        // 2(x - 2)(x - 1) and 3(x - 2)(x - 3)
        let a = p17(&[2, -3, 1]).scale(2);
        let b = p17(&[6, -5, 1]).scale(3);
        let g = Poly::gcd(&a, &b);
        assert_eq!(g, p17(&[-2, 1]));
    }

    #[test]
    fn gcd_with_zero() {
        let a = p17(&[2, 4]);
        assert_eq!(Poly::gcd(&a, &Poly::zero(17)), p17(&[9, 1]));
        assert_eq!(Poly::gcd(&Poly::zero(17), &a), p17(&[9, 1]));
        assert!(Poly::gcd(&Poly::zero(17), &Poly::zero(17)).is_zero());
    }

    #[test]
    fn extended_gcd_bezout_identity() {
        let a = p17(&[3, 1, 4, 1]);
        let b = p17(&[5, 9, 2]);
        let (g, s, t) = Poly::extended_gcd(&a, &b);
        assert_eq!(&s * &a + &t * &b, g);
        assert!(g.is_monic());
    }

    #[test]
    fn extended_gcd_with_common_factor() {
        let a = p17(&[2, -3, 1]);
        let b = p17(&[6, -5, 1]);
        let (g, s, t) = Poly::extended_gcd(&a, &b);
        assert_eq!(g, p17(&[-2, 1]));
        assert_eq!(&s * &a + &t * &b, g);
    }

    #[test]
    fn extended_gcd_both_zero() {
        let z = Poly::zero(17);
        let (g, s, t) = Poly::extended_gcd(&z, &z);
        assert!(g.is_zero());
        assert!(s.is_zero());
        assert!(t.is_zero());
    }

    // ---- mod_inverse tests ----

    #[test]
    fn mod_inverse_roundtrip() {
        let m = p17(&[3, 0, 1]); // x^2 + 3, irreducible over F_17
        let a = p17(&[2, 1]);
        let inv = a.mod_inverse(&m).unwrap();
        assert_eq!((&a * &inv).rem(&m).unwrap(), p17(&[1]));
    }

    #[test]
    fn mod_inverse_of_zero() {
        let m = p17(&[3, 0, 1]);
        assert_eq!(Poly::zero(17).mod_inverse(&m), Err(FieldError::NotInvertible));
        // m itself reduces to zero
        assert_eq!(m.mod_inverse(&m), Err(FieldError::NotInvertible));
    }

    #[test]
    fn mod_inverse_shared_factor() {
        // m = (x - 1)(x + 1), a = x - 1
        let m = p17(&[-1, 0, 1]);
        let a = p17(&[-1, 1]);
        assert_eq!(a.mod_inverse(&m), Err(FieldError::NotInvertible));
    }

    #[test]
    fn mod_inverse_zero_modulus() {
        let a = p17(&[1, 1]);
        assert_eq!(a.mod_inverse(&Poly::zero(17)), Err(FieldError::DivisionError));
    }

    // ---- pow_mod tests ----

    #[test]
    fn pow_mod_basic() {
        // x^3 mod (x^2 + 1) = -x
        let m = p17(&[1, 0, 1]);
        let r = Poly::x(17).pow_mod(3, &m).unwrap();
        assert_eq!(r, p17(&[0, -1]));
    }

    #[test]
    fn pow_mod_zero_exp() {
        let m = p17(&[1, 1]);
        assert_eq!(p17(&[5, 3]).pow_mod(0, &m).unwrap(), p17(&[1]));
    }

    #[test]
    fn pow_mod_base() {
        // (1 + x)^2 mod (x^2 + 1) = 2x
        let m = p17(&[1, 0, 1]);
        let r = p17(&[1, 1]).pow_mod(2, &m).unwrap();
        assert_eq!(r, p17(&[0, 2]));
    }

    #[test]
    fn pow_mod_zero_modulus() {
        assert_eq!(
            Poly::x(17).pow_mod(5, &Poly::zero(17)),
            Err(FieldError::DivisionError)
        );
    }

    #[test]
    fn pow_mod_negative_exponent() {
        let m = p17(&[1, 0, 1]);
        assert_eq!(
            Poly::x(17).pow_mod_signed(-1, &m),
            Err(FieldError::InvalidExponent(-1))
        );
        assert_eq!(
            Poly::x(17).pow_mod_signed(3, &m),
            Poly::x(17).pow_mod(3, &m)
        );
    }

    // ---- irreducibility ----

    #[test]
    fn is_irreducible_degenerate() {
        assert!(!Poly::zero(17).is_irreducible());
        assert!(!Poly::constant(17, 5).is_irreducible());
        assert!(p17(&[3, 1]).is_irreducible());
        assert!(p17(&[7, 5]).is_irreducible());
    }

    #[test]
    fn is_irreducible_quadratics() {
        // 3 is not a quadratic residue mod 17, 4 is
        assert!(p17(&[-3, 0, 1]).is_irreducible());
        assert!(!p17(&[-4, 0, 1]).is_irreducible());
    }

    #[test]
    fn is_irreducible_non_monic() {
        assert!(p17(&[-3, 0, 1]).scale(5).is_irreducible());
    }
}
