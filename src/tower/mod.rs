//! The numeric tower.
//!
//! Five numeric kinds take part in arithmetic: [`Kind::Int`] (`i64`), [`Kind::BigInt`]
//! ([`num_bigint::BigInt`]), [`Kind::Ratio`] ([`Ratio`]), [`Kind::Float`] (`f32`) and
//! [`Kind::Double`] (`f64`). Each implements [`Numeric`] for its own arithmetic and
//! [`NumericConvert`] for conversions to every other kind.
//!
//! # Promotion
//!
//! Arithmetic on two boxed values of different kinds first promotes both to their
//! [`join`], the least kind able to hold either operand:
//!
//! ```text
//!          Double
//!            |
//!          Float
//!            |
//!          Ratio
//!         /     \
//!       Int    BigInt
//! ```
//!
//! - identical kinds stay as they are
//! - `Double` absorbs everything, then `Float` absorbs the exact kinds
//! - `Ratio` absorbs both integer kinds; a big integer outside the 64-bit range has no
//!   ratio form, so that pair falls back to `Double`
//! - `Int` and `BigInt` join in `BigInt`
//!
//! # Ordering across kinds
//!
//! Numeric values of different kinds are compared by exact value ([`compare_across`]),
//! never through a lossy float conversion, and fall back to kind rank when the values
//! are equal so that the order stays total and consistent with equality.
//!
//! # Examples
//!
//! ```rust
//! use boxval::{Kind, Ratio, Value};
//!
//! let third = Value::Ratio(Ratio::new(1, 3)?);
//! let sum = third.add(&Value::Int(1))?;
//! assert_eq!(sum, Value::Ratio(Ratio::new(4, 3)?));
//!
//! let mixed = Value::Float(0.5).multiply(&Value::Double(3.0))?;
//! assert_eq!(mixed.kind(), Kind::Double);
//! # Ok::<(), boxval::Error>(())
//! ```

mod bigint;
mod cache;
mod fixed;
mod ratio;
mod sequence;

use num_bigint::BigInt;
use num_rational::BigRational;

use crate::{
    protocol::{Ordered, Trit},
    value::{Kind, Value},
    Error, Result,
};

pub use bigint::parse_big_int;
pub use cache::{CacheKey, ConstantCache, NamedConstant};
pub use ratio::Ratio;
pub use sequence::{Sequence, SequenceIter};

/// Arithmetic shared by every numeric kind.
///
/// Every operation returns a fresh value. Operations that cannot fail for a kind still
/// return [`Result`] so the exact kinds can report [`crate::Error::DivisionByZero`] and
/// [`crate::Error::Overflow`] through the same interface.
pub trait Numeric: Ordered + Clone + Sized {
    /// The boxed kind this native type corresponds to.
    const KIND: Kind;

    /// Additive identity.
    fn zero() -> Self;

    /// Multiplicative identity.
    fn one() -> Self;

    /// The value representing `-1`.
    fn negative() -> Self;

    /// `self + other`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn add(&self, other: &Self) -> Result<Self>;

    /// `self - other`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn subtract(&self, other: &Self) -> Result<Self> {
        self.add(&other.negate()?)
    }

    /// `self * other`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn multiply(&self, other: &Self) -> Result<Self>;

    /// `self / other`
    ///
    /// # Errors
    ///
    /// Exact kinds return [`crate::Error::DivisionByZero`] for a zero divisor.
    fn divide(&self, other: &Self) -> Result<Self>;

    /// Remainder of `self / other`, with the sign of `self`.
    ///
    /// # Errors
    ///
    /// Exact kinds return [`crate::Error::DivisionByZero`] for a zero divisor.
    fn modulo(&self, other: &Self) -> Result<Self>;

    /// `-self`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn negate(&self) -> Result<Self>;

    /// `|self|`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn abs(&self) -> Result<Self> {
        if self.signum().is_negative() {
            self.negate()
        } else {
            Ok(self.clone())
        }
    }

    /// `self + 1`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn increment(&self) -> Result<Self> {
        self.add(&Self::one())
    }

    /// `self - 1`
    ///
    /// # Errors
    ///
    /// Kind specific, see the implementing type.
    fn decrement(&self) -> Result<Self> {
        self.subtract(&Self::one())
    }

    /// `self` raised to an integer power by repeated squaring.
    ///
    /// A negative exponent yields `1 / self^|exponent|`, which truncates for the integer
    /// kinds.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DivisionByZero`] for zero raised to a negative power in the
    /// exact kinds, or whatever the kind's `multiply` reports.
    fn pow(&self, exponent: i64) -> Result<Self> {
        let mut base = self.clone();
        let mut remaining = exponent.unsigned_abs();
        let mut result = Self::one();

        while remaining > 0 {
            if remaining & 1 == 1 {
                result = result.multiply(&base)?;
            }
            remaining >>= 1;
            if remaining > 0 {
                base = base.multiply(&base)?;
            }
        }

        if exponent < 0 {
            Self::one().divide(&result)
        } else {
            Ok(result)
        }
    }

    /// Sign of `self`, i.e. `compare(self, zero)`.
    fn signum(&self) -> Trit {
        self.compare(&Self::zero())
    }

    /// `true` for the additive identity.
    fn is_zero(&self) -> bool {
        self.signum().is_zero()
    }

    /// `false` for infinities and NaN; the exact kinds are always finite.
    fn is_finite(&self) -> bool {
        true
    }

    /// Boxes `self`.
    fn into_value(self) -> Value;
}

/// Conversions from one numeric kind to every other.
///
/// Narrowing conversions are lossy: exact kinds truncate toward zero when converted to
/// `Int`, floats truncate toward zero and saturate, arbitrary-precision integers keep
/// their low 64 bits.
pub trait NumericConvert {
    /// Converts to a fixed-width integer.
    fn to_int(&self) -> i64;

    /// Converts to an arbitrary-precision integer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] for infinite and NaN floats.
    fn to_big_int(&self) -> Result<BigInt>;

    /// Converts to the nearest single-precision value.
    fn to_float(&self) -> f32;

    /// Converts to the nearest double-precision value.
    fn to_double(&self) -> f64;

    /// Converts to a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] for infinite and NaN floats, and
    /// [`crate::Error::Overflow`] when the value does not fit 64-bit components.
    fn to_ratio(&self) -> Result<Ratio>;
}

/// Two operands promoted to a common numeric kind.
#[derive(Debug, Clone, PartialEq)]
pub enum Promoted {
    /// Both operands as `i64`
    Int(i64, i64),
    /// Both operands as arbitrary-precision integers
    BigInt(BigInt, BigInt),
    /// Both operands as ratios
    Ratio(Ratio, Ratio),
    /// Both operands as `f32`
    Float(f32, f32),
    /// Both operands as `f64`
    Double(f64, f64),
}

/// The least numeric kind able to represent values of both `a` and `b`.
///
/// Returns `None` when either kind is not numeric.
#[must_use]
pub const fn join(a: Kind, b: Kind) -> Option<Kind> {
    if !a.is_numeric() || !b.is_numeric() {
        return None;
    }
    Some(match (a, b) {
        _ if a as u8 == b as u8 => a,
        (Kind::Double, _) | (_, Kind::Double) => Kind::Double,
        (Kind::Float, _) | (_, Kind::Float) => Kind::Float,
        (Kind::Ratio, _) | (_, Kind::Ratio) => Kind::Ratio,
        _ => Kind::BigInt,
    })
}

/// Promotes `x` and `y` to their [`join`].
///
/// # Errors
///
/// Returns [`crate::Error::UnimplementedOperation`] naming `operation` when either operand is
/// not numeric, and propagates conversion errors. A big integer too large for a ratio
/// is not an error: the pair is promoted to `Double` instead.
pub fn promote(operation: &'static str, x: &Value, y: &Value) -> Result<Promoted> {
    for operand in [x, y] {
        if !operand.is_numeric() {
            return Err(unimplemented_operation!(operation, operand.kind()));
        }
    }

    Ok(match join(x.kind(), y.kind()) {
        Some(Kind::Int) => Promoted::Int(x.to_int()?, y.to_int()?),
        Some(Kind::BigInt) => Promoted::BigInt(x.to_big_int()?, y.to_big_int()?),
        Some(Kind::Ratio) => match (x.to_ratio(), y.to_ratio()) {
            (Ok(a), Ok(b)) => Promoted::Ratio(a, b),
            (Err(Error::Overflow { .. }), _) | (_, Err(Error::Overflow { .. })) => {
                Promoted::Double(x.to_double()?, y.to_double()?)
            }
            (Err(error), _) | (_, Err(error)) => return Err(error),
        },
        Some(Kind::Float) => Promoted::Float(x.to_float()?, y.to_float()?),
        _ => Promoted::Double(x.to_double()?, y.to_double()?),
    })
}

/// Exact position of a numeric value on the extended real line.
///
/// NaNs sort to the ends according to their sign bit, matching `total_cmp`.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord)]
enum Magnitude {
    NegativeNan,
    NegativeInfinity,
    Finite(BigRational),
    PositiveInfinity,
    PositiveNan,
}

impl Magnitude {
    fn of_float(value: f64) -> Magnitude {
        if value.is_nan() {
            if value.is_sign_negative() {
                Magnitude::NegativeNan
            } else {
                Magnitude::PositiveNan
            }
        } else if value.is_infinite() {
            if value.is_sign_negative() {
                Magnitude::NegativeInfinity
            } else {
                Magnitude::PositiveInfinity
            }
        } else {
            // finite floats always have an exact rational form
            BigRational::from_float(value).map_or(Magnitude::PositiveNan, Magnitude::Finite)
        }
    }

    fn of(value: &Value) -> Option<Magnitude> {
        Some(match value {
            Value::Int(n) => Magnitude::Finite(BigRational::from_integer(BigInt::from(*n))),
            Value::BigInt(n) => Magnitude::Finite(BigRational::from_integer(n.as_ref().clone())),
            Value::Ratio(r) => Magnitude::Finite(BigRational::new(
                BigInt::from(r.numerator()),
                BigInt::from(r.denominator()),
            )),
            Value::Float(f) => Magnitude::of_float(f64::from(*f)),
            Value::Double(f) => Magnitude::of_float(*f),
            _ => return None,
        })
    }
}

/// Orders two numeric values of possibly different kinds by exact value.
///
/// Equal values of different kinds order by kind rank, so `Int(1) < Double(1.0)`.
/// Non-numeric operands order by kind rank only.
#[must_use]
pub fn compare_across(x: &Value, y: &Value) -> Trit {
    let by_value = match (Magnitude::of(x), Magnitude::of(y)) {
        (Some(a), Some(b)) => a.cmp(&b),
        _ => std::cmp::Ordering::Equal,
    };
    Trit::from(by_value.then_with(|| x.kind().cmp(&y.kind())))
}

impl Value {
    /// Sum of two numeric values.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric operands, and
    /// [`crate::Error::Overflow`] when an exact ratio result does not fit.
    pub fn add(&self, other: &Value) -> Result<Value> {
        with_promoted!("add", self, other, |a, b| Numeric::add(&a, &b)
            .map(Numeric::into_value))
    }

    /// Difference of two numeric values.
    ///
    /// # Errors
    ///
    /// See [`Value::add`].
    pub fn subtract(&self, other: &Value) -> Result<Value> {
        with_promoted!("subtract", self, other, |a, b| Numeric::subtract(&a, &b)
            .map(Numeric::into_value))
    }

    /// Product of two numeric values.
    ///
    /// # Errors
    ///
    /// See [`Value::add`].
    pub fn multiply(&self, other: &Value) -> Result<Value> {
        with_promoted!("multiply", self, other, |a, b| Numeric::multiply(&a, &b)
            .map(Numeric::into_value))
    }

    /// Quotient of two numeric values.
    ///
    /// Floating kinds follow IEEE 754 and never fail; integer division truncates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::DivisionByZero`] when the promoted kind is exact and `other`
    /// is zero, otherwise as [`Value::add`].
    pub fn divide(&self, other: &Value) -> Result<Value> {
        with_promoted!("divide", self, other, |a, b| Numeric::divide(&a, &b)
            .map(Numeric::into_value))
    }

    /// Remainder of two numeric values.
    ///
    /// # Errors
    ///
    /// See [`Value::divide`].
    pub fn modulo(&self, other: &Value) -> Result<Value> {
        with_promoted!("modulo", self, other, |a, b| Numeric::modulo(&a, &b)
            .map(Numeric::into_value))
    }

    /// Additive inverse.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn negate(&self) -> Result<Value> {
        with_numeric!("negate", self, |a| Numeric::negate(a).map(Numeric::into_value))
    }

    /// Absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn abs(&self) -> Result<Value> {
        with_numeric!("abs", self, |a| Numeric::abs(a).map(Numeric::into_value))
    }

    /// `self + 1` in the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn increment(&self) -> Result<Value> {
        with_numeric!("increment", self, |a| Numeric::increment(a)
            .map(Numeric::into_value))
    }

    /// `self - 1` in the same kind.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn decrement(&self) -> Result<Value> {
        with_numeric!("decrement", self, |a| Numeric::decrement(a)
            .map(Numeric::into_value))
    }

    /// Integer power in the same kind, see [`Numeric::pow`].
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds, and
    /// [`crate::Error::DivisionByZero`] for exact zero raised to a negative power.
    pub fn pow(&self, exponent: i64) -> Result<Value> {
        with_numeric!("pow", self, |a| Numeric::pow(a, exponent)
            .map(Numeric::into_value))
    }

    /// Sign of a numeric value.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn signum(&self) -> Result<Trit> {
        with_numeric!("signum", self, |a| Ok(Numeric::signum(a)))
    }

    /// `true` for either zero of a numeric kind; NaN is not zero.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn is_zero(&self) -> Result<bool> {
        with_numeric!("is_zero", self, |a| Ok(Numeric::is_zero(a)))
    }

    /// `n!` computed in the kind of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] for negative input and
    /// [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn factorial(&self) -> Result<Value> {
        with_numeric!("factorial", self, |a| factorial(a).map(Numeric::into_value))
    }

    /// The `n`-th Fibonacci number computed in the kind of `self`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidArgument`] for negative input and
    /// [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn fibonacci(&self) -> Result<Value> {
        with_numeric!("fibonacci", self, |a| fibonacci(a).map(Numeric::into_value))
    }

    /// Converts to a fixed-width integer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn to_int(&self) -> Result<i64> {
        with_numeric!("to_int", self, |a| Ok(NumericConvert::to_int(a)))
    }

    /// Converts to an arbitrary-precision integer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds and
    /// [`crate::Error::InvalidArgument`] for non-finite floats.
    pub fn to_big_int(&self) -> Result<BigInt> {
        with_numeric!("to_big_int", self, |a| NumericConvert::to_big_int(a))
    }

    /// Converts to single precision.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn to_float(&self) -> Result<f32> {
        with_numeric!("to_float", self, |a| Ok(NumericConvert::to_float(a)))
    }

    /// Converts to double precision.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds.
    pub fn to_double(&self) -> Result<f64> {
        with_numeric!("to_double", self, |a| Ok(NumericConvert::to_double(a)))
    }

    /// Converts to a ratio.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] for non-numeric kinds, and the
    /// errors of [`NumericConvert::to_ratio`].
    pub fn to_ratio(&self) -> Result<Ratio> {
        with_numeric!("to_ratio", self, |a| NumericConvert::to_ratio(a))
    }

    /// Converts to the numeric kind `kind`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxval::{Kind, Value};
    ///
    /// let d = Value::Int(3).convert(Kind::Double)?;
    /// assert_eq!(d, Value::Double(3.0));
    ///
    /// let r = Value::Double(0.75).convert(Kind::Ratio)?;
    /// assert_eq!(r.to_string(), "3 / 4");
    /// # Ok::<(), boxval::Error>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] when `self` or `kind` is not numeric,
    /// and propagates conversion errors.
    pub fn convert(&self, kind: Kind) -> Result<Value> {
        if self.kind() == kind {
            return Ok(self.clone());
        }
        match kind {
            Kind::Int => self.to_int().map(Value::Int),
            Kind::BigInt => self.to_big_int().map(Value::from),
            Kind::Ratio => self.to_ratio().map(Value::Ratio),
            Kind::Float => self.to_float().map(Value::Float),
            Kind::Double => self.to_double().map(Value::Double),
            other => Err(unimplemented_operation!("convert", other)),
        }
    }
}

/// `n!` for a non-negative whole `n`, computed iteratively in `n`'s own kind.
///
/// Fractional input multiplies `1 * 2 * ...` up to the largest whole number not above
/// `n`. A floating product that overflows to infinity ends the loop early.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for negative or non-finite `n`, or when
/// counting up to `n` runs past the precision of its kind, and propagates arithmetic
/// errors (e.g. ratio overflow).
pub fn factorial<T: Numeric + std::fmt::Display>(n: &T) -> Result<T> {
    check_counting_bound(n, "factorial")?;

    let mut result = T::one();
    let mut factor = T::one();
    while factor.compare(n) != Trit::Positive {
        result = result.multiply(&factor)?;
        if !result.is_finite() {
            break;
        }
        factor = count_up(&factor, n)?;
    }
    Ok(result)
}

/// The `n`-th Fibonacci number (`fib(0) = 0`, `fib(1) = 1`), computed iteratively.
///
/// A floating term that overflows to infinity ends the loop early.
///
/// # Errors
///
/// Returns [`crate::Error::InvalidArgument`] for negative or non-finite `n`, or when
/// counting up to `n` runs past the precision of its kind, and propagates arithmetic
/// errors.
pub fn fibonacci<T: Numeric + std::fmt::Display>(n: &T) -> Result<T> {
    check_counting_bound(n, "fibonacci")?;

    let (mut current, mut next) = (T::zero(), T::one());
    let mut index = T::zero();
    while index.compare(n) == Trit::Negative {
        let sum = current.add(&next)?;
        current = next;
        next = sum;
        if !current.is_finite() {
            break;
        }
        index = count_up(&index, n)?;
    }
    Ok(current)
}

fn check_counting_bound<T: Numeric + std::fmt::Display>(n: &T, operation: &str) -> Result<()> {
    if !n.is_finite() {
        return Err(invalid_argument!(n, "{} of a non-finite number", operation));
    }
    if !n.is_zero() && n.signum().is_negative() {
        return Err(invalid_argument!(n, "{} of a negative number", operation));
    }
    Ok(())
}

/// `value + 1`, or an error once the kind can no longer represent the step.
fn count_up<T: Numeric + std::fmt::Display>(value: &T, n: &T) -> Result<T> {
    let next = value.increment()?;
    if next.compare(value) == Trit::Positive {
        Ok(next)
    } else {
        Err(invalid_argument!(n, "counting up to this value exceeds the precision of its kind"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{protocol::compare, Error};

    fn ratio(n: i64, d: i64) -> Value {
        Value::Ratio(Ratio::new(n, d).unwrap())
    }

    fn big(text: &str) -> Value {
        Value::from(parse_big_int(text).unwrap())
    }

    #[test]
    fn test_join_lattice() {
        assert_eq!(join(Kind::Int, Kind::Int), Some(Kind::Int));
        assert_eq!(join(Kind::Int, Kind::BigInt), Some(Kind::BigInt));
        assert_eq!(join(Kind::Ratio, Kind::Int), Some(Kind::Ratio));
        assert_eq!(join(Kind::Ratio, Kind::BigInt), Some(Kind::Ratio));
        assert_eq!(join(Kind::Ratio, Kind::Float), Some(Kind::Float));
        assert_eq!(join(Kind::Float, Kind::Double), Some(Kind::Double));
        assert_eq!(join(Kind::Char, Kind::Int), None);
        assert_eq!(join(Kind::Trit, Kind::Trit), None);
    }

    #[test]
    fn test_join_is_commutative() {
        use strum::IntoEnumIterator;
        for a in Kind::iter() {
            for b in Kind::iter() {
                assert_eq!(join(a, b), join(b, a), "{a} {b}");
            }
        }
    }

    #[test]
    fn test_mixed_arithmetic() {
        assert_eq!(Value::Int(2).add(&Value::Int(3)).unwrap(), Value::Int(5));
        assert_eq!(Value::Int(1).add(&ratio(1, 2)).unwrap(), ratio(3, 2));
        assert_eq!(
            Value::Int(2).multiply(&big("10000000000000000000")).unwrap(),
            big("20000000000000000000")
        );
        assert_eq!(ratio(1, 2).add(&big("1")).unwrap(), ratio(3, 2));
        assert_eq!(
            Value::Float(1.5).subtract(&ratio(1, 2)).unwrap(),
            Value::Float(1.0)
        );
    }

    #[test]
    fn test_big_int_with_ratio_stays_exact() {
        assert_eq!(ratio(1, 3).add(&big("0")).unwrap(), ratio(1, 3));
        assert_eq!(ratio(1, 3).multiply(&big("3")).unwrap(), ratio(1, 1));
        assert_eq!(big("-2").subtract(&ratio(1, 2)).unwrap(), ratio(-5, 2));

        // past 64 bits there is no ratio form
        assert_eq!(
            ratio(1, 2).add(&big("100000000000000000000")).unwrap(),
            Value::Double(1e20)
        );
    }

    #[test]
    fn test_non_numeric_operands() {
        assert_eq!(
            Value::Char('a').add(&Value::Int(1)),
            Err(Error::UnimplementedOperation {
                operation: "add",
                kind: Kind::Char
            })
        );
        assert_eq!(
            Value::Int(1).multiply(&Value::TRUE),
            Err(Error::UnimplementedOperation {
                operation: "multiply",
                kind: Kind::Bool
            })
        );
        assert!(Value::TRUE.negate().is_err());
    }

    #[test]
    fn test_division_by_zero() {
        assert_eq!(Value::Int(1).divide(&Value::Int(0)), Err(Error::DivisionByZero));
        assert_eq!(ratio(1, 2).divide(&Value::Int(0)), Err(Error::DivisionByZero));
        assert_eq!(
            Value::Int(1).divide(&Value::Double(0.0)).unwrap(),
            Value::Double(f64::INFINITY)
        );
    }

    #[test]
    fn test_unary_operations() {
        assert_eq!(Value::Int(-4).abs().unwrap(), Value::Int(4));
        assert_eq!(ratio(1, 2).negate().unwrap(), ratio(-1, 2));
        assert_eq!(Value::Double(1.5).increment().unwrap(), Value::Double(2.5));
        assert_eq!(big("0").decrement().unwrap(), big("-1"));
        assert_eq!(ratio(1, 2).pow(-3).unwrap(), Value::Ratio(Ratio::from_integer(8)));
        assert_eq!(Value::Int(-3).signum().unwrap(), Trit::Negative);
        assert_eq!(ratio(0, 5).signum().unwrap(), Trit::Zero);
    }

    #[test]
    fn test_conversions() {
        assert_eq!(ratio(7, 2).to_int().unwrap(), 3);
        assert_eq!(Value::Double(-2.7).convert(Kind::Int).unwrap(), Value::Int(-2));
        assert_eq!(
            Value::Int(5).convert(Kind::BigInt).unwrap(),
            big("5")
        );
        assert_eq!(ratio(1, 4).convert(Kind::Double).unwrap(), Value::Double(0.25));
        assert_eq!(Value::Float(0.5).to_ratio().unwrap(), Ratio::new(1, 2).unwrap());
        assert!(Value::Int(5).convert(Kind::Char).is_err());
        assert!(Value::Char('x').convert(Kind::Int).is_err());
    }

    #[test]
    fn test_compare_across_exact() {
        // 2^53 + 1 is not representable as f64
        let exact = Value::Int(9_007_199_254_740_993);
        let rounded = Value::Double(9_007_199_254_740_992.0);
        assert_eq!(compare_across(&exact, &rounded), Trit::Positive);

        assert_eq!(compare_across(&ratio(1, 3), &Value::Double(0.333)), Trit::Positive);
        assert_eq!(
            compare_across(&Value::Double(f64::NEG_INFINITY), &big("-1000000000000000000000000")),
            Trit::Negative
        );
        assert_eq!(
            compare_across(&Value::Double(f64::NAN), &big("1000000000000000000000000")),
            Trit::Positive
        );
    }

    #[test]
    fn test_compare_across_ties_by_kind() {
        assert_eq!(compare(&Value::Int(1), &Value::Double(1.0)), Trit::Negative);
        assert_eq!(compare(&Value::Double(1.0), &Value::Float(1.0)), Trit::Positive);
        assert_eq!(compare(&big("2"), &ratio(2, 1)), Trit::Negative);
    }

    #[test]
    fn test_factorial_and_fibonacci() {
        assert_eq!(Value::Int(5).factorial().unwrap(), Value::Int(120));
        assert_eq!(Value::Int(0).factorial().unwrap(), Value::Int(1));
        assert_eq!(
            big("25").factorial().unwrap(),
            big("15511210043330985984000000")
        );
        assert!(Value::Int(-1).factorial().is_err());

        assert_eq!(Value::Int(10).fibonacci().unwrap(), Value::Int(55));
        assert_eq!(Value::Int(0).fibonacci().unwrap(), Value::Int(0));
        assert_eq!(Value::Double(7.0).fibonacci().unwrap(), Value::Double(13.0));
    }

    #[test]
    fn test_factorial_and_fibonacci_floating_bounds() {
        for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
            assert!(matches!(
                Value::Double(bad).factorial(),
                Err(Error::InvalidArgument { .. })
            ));
            assert!(matches!(
                Value::Double(bad).fibonacci(),
                Err(Error::InvalidArgument { .. })
            ));
        }
        assert!(Value::Float(f32::NAN).factorial().is_err());

        assert_eq!(
            Value::Double(1e20).fibonacci().unwrap(),
            Value::Double(f64::INFINITY)
        );
        assert_eq!(
            Value::Double(1e20).factorial().unwrap(),
            Value::Double(f64::INFINITY)
        );
        assert_eq!(Value::Double(-0.0).factorial().unwrap(), Value::Double(1.0));
    }

    #[test]
    fn test_counting_past_precision_fails() {
        // 2^24 + 1 is the first integer f32 cannot count to
        let start = 16_777_216.0_f32;
        assert!(matches!(
            count_up(&start, &start),
            Err(Error::InvalidArgument { .. })
        ));
        assert_eq!(count_up(&1.0_f32, &start).unwrap(), 2.0);
        assert!(count_up(&i64::MAX, &i64::MAX).is_err());
    }

    #[test]
    fn test_signum_follows_compare() {
        for x in [-0.0, 0.0, f64::NAN, -f64::NAN, f64::INFINITY, -1.5] {
            let value = Value::Double(x);
            assert_eq!(
                value.signum().unwrap(),
                compare(&value, &Value::Double(0.0)),
                "{x}"
            );
        }
        assert_eq!(Value::Double(-0.0).signum().unwrap(), Trit::Negative);
        assert!(Value::Double(-0.0).is_zero().unwrap());
        assert!(!Value::Double(f64::NAN).is_zero().unwrap());
    }
}
