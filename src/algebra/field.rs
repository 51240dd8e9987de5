use super::ring::Ring;
use crate::error::FieldError;

/// A (commutative) field.
///
/// Extends `Ring` with multiplicative inverses for all non-zero elements.
pub trait Field: Ring {
    /// Multiplicative inverse `a⁻¹`.
    ///
    /// For a true field:
    /// - `self` is zero  ⇒  `Err(FieldError::NotInvertible)`
    /// - otherwise       ⇒  `Ok(a⁻¹)`
    fn inverse(&self) -> Result<Self, FieldError>;

    /// The characteristic `p` of the field.
    fn characteristic(&self) -> u64;

    /// Division; fails with `NotInvertible` when `rhs` is zero.
    #[inline]
    fn try_div(&self, rhs: &Self) -> Result<Self, FieldError> {
        let inv = rhs.inverse()?;
        self.try_mul(&inv)
    }

    /// The Frobenius map `a ↦ a^p`.
    fn frobenius_map(&self) -> Result<Self, FieldError> {
        self.try_pow(self.characteristic())
    }
}
