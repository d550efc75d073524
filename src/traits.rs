use crypto_bigint::subtle::{Choice, ConstantTimeEq};

/// Multiplicative identity (unity).
pub trait One: ConstantTimeEq + Sized {
    /// The multiplicative identity (i.e. the value `1`) of the
    /// underlying algebraic structure.
    fn one() -> Self;

    /// Determine, in constant time, whether this value is the
    /// multiplicative identity `Self::one` of the underlying
    /// algebraic structure.
    #[inline]
    fn is_one(&self) -> Choice {
        self.ct_eq(&Self::one())
    }
}

pub trait BLSField {

    /// Convert `self` to byte array representation
    /// (big-endian, fixed-width, canonical).
    fn to_bytes(&self) -> Vec<u8>;

    /// Compute the value of 2&times;`self`.
    fn double(&self) -> Self;

    /// Compute the value of `self`/2.
    fn half(&self) -> Self;

    /// Compute `self`&sup2;.
    fn sq(&self) -> Self;

    /// Compute `self`&sup3;.
    fn cb(&self) -> Self;

    /// Compute the inverse of `self` (or 0, if `self` itself is zero).
    fn inv(&self) -> Self;
}
