//! Arbitrary-precision integers.
//!
//! A thin adapter putting [`num_bigint::BigInt`] behind the numeric protocol. Division
//! truncates toward zero and the remainder takes the sign of the dividend, matching the
//! fixed-width kind.

use num_bigint::{BigInt, Sign};
use num_traits::{Signed, ToPrimitive};

use crate::{
    protocol::{Equatable, Ordered, Trit},
    tower::{Numeric, NumericConvert, Ratio},
    value::{Kind, Value},
    Error, Result,
};

/// Parses an optionally signed run of decimal digits.
///
/// Unlike `str::parse`, surrounding whitespace, `_` separators and empty digit runs are
/// all rejected.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] naming the rejected text.
pub fn parse_big_int(text: &str) -> Result<BigInt> {
    let (negative, digits) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_argument!(
            text,
            "expected an optionally signed run of decimal digits"
        ));
    }

    let magnitude = BigInt::parse_bytes(digits.as_bytes(), 10)
        .ok_or_else(|| invalid_argument!(text, "expected a decimal integer"))?;
    Ok(if negative { -magnitude } else { magnitude })
}

impl Equatable for BigInt {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Ordered for BigInt {
    fn compare(&self, other: &Self) -> Trit {
        Trit::from(Ord::cmp(self, other))
    }
}

impl Numeric for BigInt {
    const KIND: Kind = Kind::BigInt;

    fn zero() -> Self {
        BigInt::from(0)
    }

    fn one() -> Self {
        BigInt::from(1)
    }

    fn negative() -> Self {
        BigInt::from(-1)
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Ok(self + other)
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(self - other)
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(self * other)
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        if other.sign() == Sign::NoSign {
            return Err(Error::DivisionByZero);
        }
        Ok(self / other)
    }

    fn modulo(&self, other: &Self) -> Result<Self> {
        if other.sign() == Sign::NoSign {
            return Err(Error::DivisionByZero);
        }
        Ok(self % other)
    }

    fn negate(&self) -> Result<Self> {
        Ok(-self)
    }

    fn abs(&self) -> Result<Self> {
        Ok(Signed::abs(self))
    }

    fn pow(&self, exponent: i64) -> Result<Self> {
        let magnitude = num_traits::Pow::pow(self, exponent.unsigned_abs());
        if exponent < 0 {
            Self::one().divide(&magnitude)
        } else {
            Ok(magnitude)
        }
    }

    fn signum(&self) -> Trit {
        match self.sign() {
            Sign::Minus => Trit::Negative,
            Sign::NoSign => Trit::Zero,
            Sign::Plus => Trit::Positive,
        }
    }

    fn into_value(self) -> Value {
        Value::from(self)
    }
}

impl NumericConvert for BigInt {
    /// Keeps the low 64 bits, wrapping like a two's complement narrowing cast.
    #[allow(clippy::cast_possible_wrap)]
    fn to_int(&self) -> i64 {
        let low = self.iter_u64_digits().next().unwrap_or(0) as i64;
        if self.sign() == Sign::Minus {
            low.wrapping_neg()
        } else {
            low
        }
    }

    fn to_big_int(&self) -> Result<BigInt> {
        Ok(self.clone())
    }

    fn to_float(&self) -> f32 {
        self.to_f32().unwrap_or(if self.is_negative() {
            f32::NEG_INFINITY
        } else {
            f32::INFINITY
        })
    }

    fn to_double(&self) -> f64 {
        self.to_f64().unwrap_or(if self.is_negative() {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        })
    }

    fn to_ratio(&self) -> Result<Ratio> {
        self.to_i64()
            .map(Ratio::from_integer)
            .ok_or(Error::Overflow {
                operation: "to_ratio",
            })
    }
}
