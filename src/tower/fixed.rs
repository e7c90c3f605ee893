//! Numeric protocol for the machine kinds: `i64`, `f32` and `f64`.
//!
//! Fixed-width integer arithmetic wraps on overflow, the same as two's complement
//! hardware. Division and remainder by zero return [`Error::DivisionByZero`].
//!
//! Floating arithmetic is plain IEEE 754: dividing by zero yields an infinity or NaN,
//! never an error. Equality is bitwise and ordering follows `total_cmp`, so NaN equals
//! itself and `-0.0` sorts directly below `0.0`.

use num_bigint::BigInt;
use num_traits::FromPrimitive;

use crate::{
    protocol::{Equatable, Ordered, Trit},
    tower::{Numeric, NumericConvert, Ratio},
    value::{Kind, Value},
    Error, Result,
};

impl Equatable for i64 {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Ordered for i64 {
    fn compare(&self, other: &Self) -> Trit {
        Trit::from(self.cmp(other))
    }
}

impl Numeric for i64 {
    const KIND: Kind = Kind::Int;

    fn zero() -> Self {
        0
    }

    fn one() -> Self {
        1
    }

    fn negative() -> Self {
        -1
    }

    fn add(&self, other: &Self) -> Result<Self> {
        Ok(i64::wrapping_add(*self, *other))
    }

    fn subtract(&self, other: &Self) -> Result<Self> {
        Ok(i64::wrapping_sub(*self, *other))
    }

    fn multiply(&self, other: &Self) -> Result<Self> {
        Ok(i64::wrapping_mul(*self, *other))
    }

    fn divide(&self, other: &Self) -> Result<Self> {
        if *other == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(i64::wrapping_div(*self, *other))
    }

    fn modulo(&self, other: &Self) -> Result<Self> {
        if *other == 0 {
            return Err(Error::DivisionByZero);
        }
        Ok(i64::wrapping_rem(*self, *other))
    }

    fn negate(&self) -> Result<Self> {
        Ok(i64::wrapping_neg(*self))
    }

    fn abs(&self) -> Result<Self> {
        Ok(i64::wrapping_abs(*self))
    }

    fn signum(&self) -> Trit {
        Trit::from_sign(*self)
    }

    fn into_value(self) -> Value {
        Value::Int(self)
    }
}

impl NumericConvert for i64 {
    fn to_int(&self) -> i64 {
        *self
    }

    fn to_big_int(&self) -> Result<BigInt> {
        Ok(BigInt::from(*self))
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_float(&self) -> f32 {
        *self as f32
    }

    #[allow(clippy::cast_precision_loss)]
    fn to_double(&self) -> f64 {
        *self as f64
    }

    fn to_ratio(&self) -> Result<Ratio> {
        Ok(Ratio::from_integer(*self))
    }
}

/// Implements the numeric protocol for one IEEE floating type.
macro_rules! impl_float_numeric {
    ($float:ident, $kind:ident) => {
        impl Equatable for $float {
            fn equals(&self, other: &Self) -> bool {
                self.to_bits() == other.to_bits()
            }
        }

        impl Ordered for $float {
            fn compare(&self, other: &Self) -> Trit {
                Trit::from(self.total_cmp(other))
            }
        }

        impl Numeric for $float {
            const KIND: Kind = Kind::$kind;

            fn zero() -> Self {
                0.0
            }

            fn one() -> Self {
                1.0
            }

            fn negative() -> Self {
                -1.0
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
                Ok(self / other)
            }

            fn modulo(&self, other: &Self) -> Result<Self> {
                Ok(self % other)
            }

            fn negate(&self) -> Result<Self> {
                Ok(-self)
            }

            fn abs(&self) -> Result<Self> {
                Ok($float::abs(*self))
            }

            #[allow(clippy::cast_precision_loss)]
            fn pow(&self, exponent: i64) -> Result<Self> {
                Ok(match i32::try_from(exponent) {
                    Ok(exponent) => $float::powi(*self, exponent),
                    Err(_) => $float::powf(*self, exponent as $float),
                })
            }

            /// Both signed zeros; NaN is not zero.
            fn is_zero(&self) -> bool {
                *self == 0.0
            }

            fn is_finite(&self) -> bool {
                $float::is_finite(*self)
            }

            fn into_value(self) -> Value {
                Value::$kind(self)
            }
        }

        impl NumericConvert for $float {
            /// Truncates toward zero, saturating at the `i64` bounds; NaN becomes `0`.
            #[allow(clippy::cast_possible_truncation)]
            fn to_int(&self) -> i64 {
                *self as i64
            }

            fn to_big_int(&self) -> Result<BigInt> {
                if !self.is_finite() {
                    return Err(invalid_argument!(self, "expected a finite value"));
                }
                BigInt::from_f64(f64::from(self.trunc()))
                    .ok_or_else(|| invalid_argument!(self, "expected a finite value"))
            }

            #[allow(clippy::cast_possible_truncation)]
            fn to_float(&self) -> f32 {
                *self as f32
            }

            fn to_double(&self) -> f64 {
                f64::from(*self)
            }

            fn to_ratio(&self) -> Result<Ratio> {
                float_to_ratio(f64::from(*self))
            }
        }
    };
}

impl_float_numeric!(f32, Float);
impl_float_numeric!(f64, Double);

/// Closest ratio with 64-bit components.
///
/// Whole numbers convert exactly; everything else goes through a continued-fraction
/// approximation.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn float_to_ratio(value: f64) -> Result<Ratio> {
    if !value.is_finite() {
        return Err(invalid_argument!(value, "expected a finite value"));
    }
    if value.fract() == 0.0 && value.abs() < i64::MAX as f64 {
        return Ok(Ratio::from_integer(value as i64));
    }

    let approx = num_rational::Ratio::<i64>::approximate_float(value).ok_or(Error::Overflow {
        operation: "to_ratio",
    })?;
    Ok(Ratio::from_canonical(*approx.numer(), *approx.denom()))
}
