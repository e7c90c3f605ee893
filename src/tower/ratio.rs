//! Exact rationals in canonical form.
//!
//! A [`Ratio`] is a numerator/denominator pair of 64-bit integers that is always kept in
//! canonical form:
//!
//! - the denominator is strictly positive, the sign lives in the numerator
//! - numerator and denominator are coprime
//! - zero is always `0 / 1`
//!
//! Every constructor and every arithmetic operation funnels through a single reducing
//! step, so two ratios are equal exactly when their components are equal and the derived
//! `Eq`/`Hash` are sound. Intermediate products are computed in 128 bits; a reduced
//! result that no longer fits 64 bits is reported as [`Error::Overflow`].
//!
//! # Examples
//!
//! ```rust
//! use boxval::{Numeric, Ratio};
//!
//! let sum = Ratio::new(1, 2)?.checked_add(&Ratio::new(1, 3)?)?;
//! assert_eq!((sum.numerator(), sum.denominator()), (5, 6));
//!
//! let neg = Ratio::new(-2, -4)?;
//! assert_eq!(neg, Ratio::new(1, 2)?);
//! assert_eq!(Numeric::negate(&neg)?.to_string(), "-1 / 2");
//! # Ok::<(), boxval::Error>(())
//! ```

use std::fmt;

use num_bigint::BigInt;

use crate::{
    protocol::{Equatable, Ordered, Trit},
    tower::{Numeric, NumericConvert},
    utils::gcd,
    value::{Kind, Value},
    Error, Result,
};

/// An exact rational number in canonical lowest-terms form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Ratio {
    numerator: i64,
    denominator: i64,
}

impl Ratio {
    /// `0 / 1`
    pub const ZERO: Ratio = Ratio::from_integer(0);
    /// `1 / 1`
    pub const ONE: Ratio = Ratio::from_integer(1);
    /// `-1 / 1`
    pub const NEGATIVE_ONE: Ratio = Ratio::from_integer(-1);

    /// Builds the canonical ratio `numerator / denominator`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `denominator` is zero, and
    /// [`Error::Overflow`] when the reduced form does not fit 64-bit components
    /// (only possible for `i64::MIN` paired with a negative denominator).
    pub fn new(numerator: i64, denominator: i64) -> Result<Ratio> {
        Self::canonical(i128::from(numerator), i128::from(denominator), "new")
    }

    /// Checked construction for untrusted input.
    ///
    /// Same as [`Ratio::new`], but a zero denominator is reported as an
    /// [`Error::InvalidArgument`] naming the rejected pair.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a zero denominator, or [`Error::Overflow`]
    /// as described for [`Ratio::new`].
    pub fn make(numerator: i64, denominator: i64) -> Result<Ratio> {
        if denominator == 0 {
            return Err(invalid_argument!(
                format!("{numerator}/{denominator}"),
                "denominator must not be zero"
            ));
        }
        Self::new(numerator, denominator)
    }

    /// The ratio `n / 1`.
    #[must_use]
    pub const fn from_integer(n: i64) -> Ratio {
        Ratio {
            numerator: n,
            denominator: 1,
        }
    }

    /// Boxes an already reduced pair without re-canonicalizing.
    ///
    /// Only for composition inside the numeric tower where the pair is known to be
    /// canonical (e.g. the output of another canonical ratio type).
    pub(crate) const fn from_canonical(numerator: i64, denominator: i64) -> Ratio {
        Ratio {
            numerator,
            denominator,
        }
    }

    /// Reduces a wide pair to canonical form.
    fn canonical(numerator: i128, denominator: i128, operation: &'static str) -> Result<Ratio> {
        if denominator == 0 {
            return Err(Error::DivisionByZero);
        }
        if numerator == 0 {
            return Ok(Ratio::ZERO);
        }

        let (mut numerator, mut denominator) = if denominator < 0 {
            (
                numerator.checked_neg().ok_or(Error::Overflow { operation })?,
                denominator.checked_neg().ok_or(Error::Overflow { operation })?,
            )
        } else {
            (numerator, denominator)
        };

        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        if divisor != 1 {
            let divisor = i128::try_from(divisor).map_err(|_| Error::Overflow { operation })?;
            numerator /= divisor;
            denominator /= divisor;
        }

        Ok(Ratio {
            numerator: i64::try_from(numerator).map_err(|_| Error::Overflow { operation })?,
            denominator: i64::try_from(denominator).map_err(|_| Error::Overflow { operation })?,
        })
    }

    /// Numerator; carries the sign.
    #[must_use]
    pub const fn numerator(&self) -> i64 {
        self.numerator
    }

    /// Denominator; always positive.
    #[must_use]
    pub const fn denominator(&self) -> i64 {
        self.denominator
    }

    /// `true` for `0 / 1`.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// `true` when the ratio denotes a whole number.
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        self.numerator == 0 || self.denominator == 1
    }

    /// Swaps numerator and denominator.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when inverting zero.
    pub fn invert(&self) -> Result<Ratio> {
        Self::canonical(
            i128::from(self.denominator),
            i128::from(self.numerator),
            "invert",
        )
    }

    /// Exact sum.
    ///
    /// Adding zero returns the other operand unchanged, and equal denominators skip the
    /// cross multiplication.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the reduced sum does not fit.
    pub fn checked_add(&self, other: &Ratio) -> Result<Ratio> {
        if other.is_zero() {
            return Ok(*self);
        }
        if self.is_zero() {
            return Ok(*other);
        }
        if self.denominator == other.denominator {
            return Self::canonical(
                i128::from(self.numerator) + i128::from(other.numerator),
                i128::from(self.denominator),
                "add",
            );
        }

        let (left, right, denominator) = self.cross(other);
        let numerator = left
            .checked_add(right)
            .ok_or(Error::Overflow { operation: "add" })?;
        Self::canonical(numerator, denominator, "add")
    }

    /// Exact difference.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the reduced difference does not fit.
    pub fn checked_sub(&self, other: &Ratio) -> Result<Ratio> {
        if other.is_zero() {
            return Ok(*self);
        }

        let (left, right, denominator) = self.cross(other);
        let numerator = left
            .checked_sub(right)
            .ok_or(Error::Overflow {
                operation: "subtract",
            })?;
        Self::canonical(numerator, denominator, "subtract")
    }

    /// Exact product.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Overflow`] when the reduced product does not fit.
    pub fn checked_mul(&self, other: &Ratio) -> Result<Ratio> {
        Self::canonical(
            i128::from(self.numerator) * i128::from(other.numerator),
            i128::from(self.denominator) * i128::from(other.denominator),
            "multiply",
        )
    }

    /// Exact quotient.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `other` is zero, [`Error::Overflow`] when
    /// the reduced quotient does not fit.
    pub fn checked_div(&self, other: &Ratio) -> Result<Ratio> {
        Self::canonical(
            i128::from(self.numerator) * i128::from(other.denominator),
            i128::from(self.denominator) * i128::from(other.numerator),
            "divide",
        )
    }

    /// Remainder of truncating division; the result takes the sign of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DivisionByZero`] when `other` is zero, [`Error::Overflow`] when
    /// the reduced remainder does not fit.
    pub fn checked_rem(&self, other: &Ratio) -> Result<Ratio> {
        if other.is_zero() {
            return Err(Error::DivisionByZero);
        }

        let (left, right, denominator) = self.cross(other);
        Self::canonical(left % right, denominator, "modulo")
    }

    /// `(self.n * other.d, other.n * self.d, self.d * other.d)`
    ///
    /// Products of two 64-bit values always fit in 128 bits.
    fn cross(&self, other: &Ratio) -> (i128, i128, i128) {
        (
            i128::from(self.numerator) * i128::from(other.denominator),
            i128::from(other.numerator) * i128::from(self.denominator),
            i128::from(self.denominator) * i128::from(other.denominator),
        )
    }

    /// Nearest double-precision value.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> f64 {
        if self.is_integer() {
            self.numerator as f64
        } else {
            self.numerator as f64 / self.denominator as f64
        }
    }

    /// Nearest single-precision value.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn to_f32(&self) -> f32 {
        self.to_f64() as f32
    }
}

impl Default for Ratio {
    fn default() -> Self {
        Ratio::ZERO
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.numerator, self.denominator)
    }
}

impl From<i64> for Ratio {
    fn from(n: i64) -> Self {
        Ratio::from_integer(n)
    }
}

impl Equatable for Ratio {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Ordered for Ratio {
    fn compare(&self, other: &Self) -> Trit {
        let (left, right, _) = self.cross(other);
        Trit::from(left.cmp(&right))
    }
}

impl_std_ord!(Ratio);

impl Numeric for Ratio {
    const KIND: Kind = Kind::Ratio;

    fn zero() -> Self {
        Ratio::ZERO
    }

    fn one() -> Self {
        Ratio::ONE
    }

    fn negative() -> Self {
        Ratio::NEGATIVE_ONE
    }

    fn add(&self, other: &Self) -> Result<Self> {
        self.checked_add(other)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        self.checked_sub(other)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        self.checked_mul(other)
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        self.checked_div(other)
    }

    fn modulo(&self, other: &Self) -> Result<Self> {
        self.checked_rem(other)
    }

    fn negate(&self) -> Result<Self> {
        Self::canonical(
            -i128::from(self.numerator),
            i128::from(self.denominator),
            "negate",
        )
    }

    fn signum(&self) -> Trit {
        Trit::from_sign(self.numerator)
    }

    fn into_value(self) -> Value {
        Value::Ratio(self)
    }
}

impl NumericConvert for Ratio {
    fn to_int(&self) -> i64 {
        self.numerator / self.denominator
    }

    fn to_big_int(&self) -> Result<BigInt> {
        Ok(BigInt::from(self.numerator / self.denominator))
    }

    fn to_float(&self) -> f32 {
        self.to_f32()
    }

    fn to_double(&self) -> f64 {
        self.to_f64()
    }

    fn to_ratio(&self) -> Result<Ratio> {
        Ok(*self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::compare;

    fn r(n: i64, d: i64) -> Ratio {
        Ratio::new(n, d).unwrap()
    }

    #[test]
    fn test_reduces_to_lowest_terms() {
        let half = r(4, 8);
        assert_eq!((half.numerator(), half.denominator()), (1, 2));
    }

    #[test]
    fn test_sign_moves_to_numerator() {
        assert_eq!(r(-2, -4), r(1, 2));
        let neg = r(3, -9);
        assert_eq!((neg.numerator(), neg.denominator()), (-1, 3));
    }

    #[test]
    fn test_zero_is_canonical() {
        assert_eq!(r(0, -5), Ratio::ZERO);
        assert_eq!(Ratio::ZERO.denominator(), 1);
    }

    #[test]
    fn test_zero_denominator() {
        assert_eq!(Ratio::new(1, 0), Err(Error::DivisionByZero));
        assert!(matches!(
            Ratio::make(1, 0),
            Err(Error::InvalidArgument { value, .. }) if value == "1/0"
        ));
    }

    #[test]
    fn test_overflowing_construction() {
        assert_eq!(
            Ratio::new(i64::MIN, -1),
            Err(Error::Overflow { operation: "new" })
        );
        assert_eq!(r(i64::MIN, 2).numerator(), i64::MIN / 2);
    }

    #[test]
    fn test_add() {
        assert_eq!(r(1, 2).checked_add(&r(1, 3)).unwrap(), r(5, 6));
        assert_eq!(r(1, 4).checked_add(&r(1, 4)).unwrap(), r(1, 2));
        assert_eq!(r(1, 2).checked_add(&r(-1, 2)).unwrap(), Ratio::ZERO);
        assert_eq!(Ratio::ZERO.checked_add(&r(7, 3)).unwrap(), r(7, 3));
    }

    #[test]
    fn test_subtract_multiply_divide() {
        assert_eq!(r(1, 2).checked_sub(&r(1, 3)).unwrap(), r(1, 6));
        assert_eq!(r(2, 3).checked_mul(&r(3, 4)).unwrap(), r(1, 2));
        assert_eq!(r(1, 2).checked_div(&r(1, 4)).unwrap(), r(2, 1));
        assert_eq!(r(1, 2).checked_div(&Ratio::ZERO), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_modulo() {
        assert_eq!(r(7, 2).checked_rem(&Ratio::ONE).unwrap(), r(1, 2));
        assert_eq!(r(-7, 2).checked_rem(&Ratio::ONE).unwrap(), r(-1, 2));
        assert_eq!(r(5, 6).checked_rem(&r(1, 3)).unwrap(), r(1, 6));
        assert_eq!(r(1, 2).checked_rem(&Ratio::ZERO), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_add_overflow_reported() {
        let big = r(i64::MAX, 1);
        assert_eq!(
            big.checked_add(&Ratio::ONE),
            Err(Error::Overflow { operation: "add" })
        );
    }

    #[test]
    fn test_invert_and_negate() {
        assert_eq!(r(-2, 3).invert().unwrap(), r(-3, 2));
        assert_eq!(Ratio::ZERO.invert(), Err(Error::DivisionByZero));
        assert_eq!(Numeric::negate(&r(1, 2)).unwrap(), r(-1, 2));
        assert_eq!(Numeric::abs(&r(-1, 2)).unwrap(), r(1, 2));
    }

    #[test]
    fn test_compare_exact() {
        assert_eq!(compare(&r(1, 3), &r(1, 2)), Trit::Negative);
        assert_eq!(compare(&r(-1, 2), &r(-1, 3)), Trit::Negative);
        assert_eq!(compare(&r(2, 4), &r(1, 2)), Trit::Zero);

        // products that would lose precision as floats
        let a = r(i64::MAX, i64::MAX - 1);
        let b = r(i64::MAX - 1, i64::MAX - 2);
        assert_eq!(compare(&a, &b), Trit::Negative);
    }

    #[test]
    fn test_pow() {
        assert_eq!(Numeric::pow(&r(2, 3), 3).unwrap(), r(8, 27));
        assert_eq!(Numeric::pow(&r(2, 3), -2).unwrap(), r(9, 4));
        assert_eq!(Numeric::pow(&r(5, 7), 0).unwrap(), Ratio::ONE);
        assert_eq!(Numeric::pow(&Ratio::ZERO, -1), Err(Error::DivisionByZero));
    }

    #[test]
    fn test_is_integer_and_conversions() {
        assert!(r(4, 2).is_integer());
        assert!(Ratio::ZERO.is_integer());
        assert!(!r(1, 2).is_integer());

        assert_eq!(r(1, 4).to_f64(), 0.25);
        assert_eq!(r(7, 2).to_int(), 3);
        assert_eq!(r(-7, 2).to_int(), -3);
        assert_eq!(r(-7, 2).to_big_int().unwrap(), BigInt::from(-3));
    }

    #[test]
    fn test_display() {
        assert_eq!(r(5, 6).to_string(), "5 / 6");
        assert_eq!(r(-4, 2).to_string(), "-2 / 1");
    }

    #[test]
    fn test_sort() {
        let mut values = vec![r(1, 2), r(-3, 4), r(1, 3), Ratio::ZERO];
        values.sort();
        assert_eq!(values, vec![r(-3, 4), Ratio::ZERO, r(1, 3), r(1, 2)]);
    }
}
