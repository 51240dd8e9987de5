use crate::error::FieldError;

/// A commutative ring whose elements carry their own parameters at runtime.
///
/// Identities can't be associated constants because the characteristic (and,
/// for extension fields, the modulus) lives in the value, so they are built
/// from an existing element instead.
///
/// Laws (test these for concrete types):
/// - (R, +) is an abelian group with identity `zero_like`
/// - (R, ·) is a commutative monoid with identity `one_like`
/// - multiplication distributes over addition.
///
/// Combining elements of different rings is an error, not a panic.
pub trait Ring: Sized + Clone + PartialEq {
    /// The additive identity of the ring `self` belongs to.
    fn zero_like(&self) -> Self;

    /// The multiplicative identity of the ring `self` belongs to.
    fn one_like(&self) -> Self;

    fn is_zero(&self) -> bool;

    fn try_add(&self, rhs: &Self) -> Result<Self, FieldError>;

    fn try_sub(&self, rhs: &Self) -> Result<Self, FieldError>;

    fn try_mul(&self, rhs: &Self) -> Result<Self, FieldError>;

    /// Additive inverse `-a`.
    fn negate(&self) -> Self;

    /// Exponentiation by a non-negative integer using square-and-multiply.
    fn try_pow(&self, exp: u64) -> Result<Self, FieldError> {
        let mut base = self.clone();
        let mut result = self.one_like();

        let mut e = exp;
        while e > 0 {
            if e & 1 == 1 {
                result = result.try_mul(&base)?;
            }
            base = base.try_mul(&base)?;
            e >>= 1;
        }
        Ok(result)
    }
}
