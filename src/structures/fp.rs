use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Sub};

use crate::algebra::field::Field;
use crate::algebra::ring::Ring;
use crate::error::FieldError;

/* ---- Arithmetic on residues in [0, p) ---- */

#[inline]
pub(crate) fn add_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 + b as u128) % p as u128) as u64
}

#[inline]
pub(crate) fn sub_mod(a: u64, b: u64, p: u64) -> u64 {
    if a >= b {
        a - b
    } else {
        p - (b - a)
    }
}

#[inline]
pub(crate) fn neg_mod(a: u64, p: u64) -> u64 {
    if a == 0 {
        0
    } else {
        p - a
    }
}

#[inline]
pub(crate) fn mul_mod(a: u64, b: u64, p: u64) -> u64 {
    ((a as u128 * b as u128) % p as u128) as u64
}

pub(crate) fn pow_mod(base: u64, mut exp: u64, p: u64) -> u64 {
    let mut result = 1 % p;
    let mut b = base % p;
    while exp > 0 {
        if exp & 1 == 1 {
            result = mul_mod(result, b, p);
        }
        b = mul_mod(b, b, p);
        exp >>= 1;
    }
    result
}

/// Inverse of `a` mod `p` by the extended Euclidean algorithm.
///
/// Returns `None` when `gcd(a, p) != 1`, which for prime `p` means `a ≡ 0`.
pub(crate) fn inv_mod(a: u64, p: u64) -> Option<u64> {
    let (mut r0, mut r1) = (p as i128, (a % p) as i128);
    let (mut t0, mut t1) = (0i128, 1i128);
    while r1 != 0 {
        let q = r0 / r1;
        (r0, r1) = (r1, r0 - q * r1);
        (t0, t1) = (t1, t0 - q * t1);
    }
    if r0 != 1 {
        return None;
    }
    Some(t0.rem_euclid(p as i128) as u64)
}

/// Reduce a signed integer into `[0, p)`.
#[inline]
pub(crate) fn reduce_signed(value: i64, p: u64) -> u64 {
    (value as i128).rem_euclid(p as i128) as u64
}

/// Integers that can be promoted into F_p.
///
/// Mixed arithmetic such as `a + 3` or `3 - a` promotes the integer to a
/// constant first, so negative values wrap the usual way.
pub trait Scalar: Copy {
    /// The residue of `self` in `[0, p)`.
    fn reduce_mod(self, p: u64) -> u64;
}

macro_rules! impl_scalar_signed {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn reduce_mod(self, p: u64) -> u64 {
                reduce_signed(self as i64, p)
            }
        }
    )*};
}

macro_rules! impl_scalar_unsigned {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            #[inline]
            fn reduce_mod(self, p: u64) -> u64 {
                (self as u64) % p
            }
        }
    )*};
}

impl_scalar_signed!(i64, i32);
impl_scalar_unsigned!(u64, u32);

/// Element of the prime field F_p with `p` chosen at runtime.
///
/// `p` is not checked for primality: with a composite `p` the ring
/// operations still work but `inverse` fails for zero divisors.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawFp")
)]
pub struct Fp {
    value: u64,
    p: u64,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawFp {
    value: u64,
    p: u64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawFp> for Fp {
    type Error = &'static str;

    fn try_from(raw: RawFp) -> Result<Self, Self::Error> {
        if raw.p < 2 {
            return Err("characteristic must be at least 2");
        }
        Ok(Fp::new(raw.value, raw.p))
    }
}

#[cfg(feature = "subtle")]
impl subtle::ConstantTimeEq for Fp {
    fn ct_eq(&self, other: &Self) -> subtle::Choice {
        use subtle::ConstantTimeEq;
        self.value.ct_eq(&other.value) & self.p.ct_eq(&other.p)
    }
}

impl Fp {
    /// Create a new element, reducing `value` mod `p`.
    ///
    /// In debug builds, this asserts `p >= 2`.
    pub fn new(value: u64, p: u64) -> Self {
        debug_assert!(p >= 2, "characteristic p={} must be at least 2", p);
        Self { value: value % p, p }
    }

    /// Create from a signed integer; negative values wrap mod `p`.
    pub fn from_signed(value: i64, p: u64) -> Self {
        debug_assert!(p >= 2, "characteristic p={} must be at least 2", p);
        Self {
            value: reduce_signed(value, p),
            p,
        }
    }

    pub fn zero(p: u64) -> Self {
        Self::new(0, p)
    }

    pub fn one(p: u64) -> Self {
        Self::new(1, p)
    }

    /// The representative in `[0, p-1]`.
    pub const fn value(self) -> u64 {
        self.value
    }

    /// The modulus `p`.
    pub const fn modulus(self) -> u64 {
        self.p
    }

    /// Compute `self^exp` using square-and-multiply.
    pub fn pow(self, exp: u64) -> Self {
        Self {
            value: pow_mod(self.value, exp, self.p),
            p: self.p,
        }
    }

    /// Sample a uniformly random element of F_p.
    #[cfg(feature = "rand")]
    pub fn random<R: rand::Rng + ?Sized>(rng: &mut R, p: u64) -> Self {
        Self::new(rng.gen_range(0..p), p)
    }

    fn check_same_field(self, rhs: Self) -> Result<(), FieldError> {
        if self.p == rhs.p {
            Ok(())
        } else {
            Err(FieldError::FieldMismatch)
        }
    }
}

impl fmt::Debug for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (mod {})", self.value, self.p)
    }
}

impl fmt::Display for Fp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<Fp> for u64 {
    fn from(a: Fp) -> u64 {
        a.value
    }
}

impl Ring for Fp {
    fn zero_like(&self) -> Self {
        Self::zero(self.p)
    }

    fn one_like(&self) -> Self {
        Self::one(self.p)
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn try_add(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(*rhs)?;
        Ok(Self {
            value: add_mod(self.value, rhs.value, self.p),
            p: self.p,
        })
    }

    fn try_sub(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(*rhs)?;
        Ok(Self {
            value: sub_mod(self.value, rhs.value, self.p),
            p: self.p,
        })
    }

    fn try_mul(&self, rhs: &Self) -> Result<Self, FieldError> {
        self.check_same_field(*rhs)?;
        Ok(Self {
            value: mul_mod(self.value, rhs.value, self.p),
            p: self.p,
        })
    }

    fn negate(&self) -> Self {
        Self {
            value: neg_mod(self.value, self.p),
            p: self.p,
        }
    }
}

impl Field for Fp {
    fn inverse(&self) -> Result<Self, FieldError> {
        inv_mod(self.value, self.p)
            .map(|value| Self { value, p: self.p })
            .ok_or(FieldError::NotInvertible)
    }

    fn characteristic(&self) -> u64 {
        self.p
    }
}

/* ---- Operators: panic on mismatched characteristic or division by zero ---- */

macro_rules! impl_fp_op {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl $trait for Fp {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                self.$checked(&rhs).unwrap_or_else(|e| panic!("{}", e))
            }
        }
    };
}

impl_fp_op!(Add, add, try_add);
impl_fp_op!(Sub, sub, try_sub);
impl_fp_op!(Mul, mul, try_mul);
impl_fp_op!(Div, div, try_div);

impl Neg for Fp {
    type Output = Self;

    fn neg(self) -> Self {
        self.negate()
    }
}
