//! Boxed value representation.
//!
//! [`Value`] is the closed sum of every kind this crate knows about. Each variant holds
//! exactly one canonical native payload and is immutable once constructed; protocol and
//! arithmetic functions always hand back a freshly constructed value, or a shared
//! instance from the [`crate::tower::ConstantCache`] for the handful of canonical
//! constants.
//!
//! # Construction surface
//!
//! | Operation | Rust spelling |
//! |-----------|---------------|
//! | `box(value)` | [`Value::boxed`] / `Value::from(native)` |
//! | `make(value, ...)` | [`Value::make_bool`], [`Value::make_int`], [`Value::make_char`], ... |
//! | `covariant(x)` | [`Value::covariant`] |
//! | `zero()` / `one()` / `negative()` / `none()` | [`Value::zero`], [`Value::one`], [`Value::negative`], [`Value::none`] |
//! | `cr()` / `lf()` / `space()` | [`Value::cr`], [`Value::lf`], [`Value::space`] |
//! | `unbox(depth)` | [`Value::unbox`] |
//!
//! # Examples
//!
//! ```rust
//! use boxval::{Kind, Value};
//!
//! let c = Value::make_char("x")?;
//! assert_eq!(c.kind(), Kind::Char);
//!
//! let zero = Value::zero(Kind::Ratio)?;
//! assert_eq!(zero.to_string(), "0 / 1");
//! # Ok::<(), boxval::Error>(())
//! ```

mod display;
mod native;
mod ordering;

use std::sync::Arc;

use num_bigint::BigInt;
use strum::{EnumCount, EnumIter, IntoStaticStr};
use tracing::debug;

use crate::{
    collections::{Optional, Tuple},
    protocol::Trit,
    tower::{parse_big_int, CacheKey, ConstantCache, NamedConstant, Ratio},
    Error, Result,
};

pub use native::Native;

/// The closed tag identifying which variant a [`Value`] is.
///
/// The declaration order is the kind rank used to order values of different kinds
/// that have no numeric relationship.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    EnumCount,
    IntoStaticStr,
    strum::Display,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Kind {
    /// `true` / `false`
    Bool,
    /// Ternary sign
    Trit,
    /// Single Unicode scalar value
    Char,
    /// 64-bit signed integer
    Int,
    /// Arbitrary-precision integer
    BigInt,
    /// Exact rational with 64-bit components
    Ratio,
    /// Single-precision float
    Float,
    /// Double-precision float
    Double,
    /// Fixed-length heterogeneous sequence
    Tuple,
    /// Zero-or-one value container
    Optional,
}

impl Kind {
    /// Returns `true` for the kinds that make up the numeric tower.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Kind::Int | Kind::BigInt | Kind::Ratio | Kind::Float | Kind::Double
        )
    }

    /// Returns `true` for the floating-point kinds.
    #[must_use]
    pub const fn is_floating(self) -> bool {
        matches!(self, Kind::Float | Kind::Double)
    }
}

/// An immutable boxed value.
///
/// # Equality
///
/// Two values are equal when they have the same kind and the same payload. Values of
/// different kinds are never equal, even when numerically identical: `Int(1)` and
/// `Double(1.0)` differ. Floating payloads compare by their IEEE total order, so a NaN
/// equals itself and `-0.0` differs from `0.0`.
///
/// # Ordering
///
/// Values of the same kind order by their native total order. Numeric values of
/// different kinds order by exact numeric value and fall back to kind rank on a tie.
/// Everything else orders by [`Kind`] rank.
#[derive(Debug, Clone)]
pub enum Value {
    /// Boolean
    Bool(bool),
    /// Ternary sign
    Trit(Trit),
    /// Single character
    Char(char),
    /// Fixed-width integer
    Int(i64),
    /// Arbitrary-precision integer
    BigInt(Arc<BigInt>),
    /// Exact rational in canonical form
    Ratio(Ratio),
    /// Single-precision float
    Float(f32),
    /// Double-precision float
    Double(f64),
    /// Tuple of boxed values
    Tuple(Tuple),
    /// Optional boxed value
    Optional(Optional),
}

impl_value_from!(Bool, bool);
impl_value_from!(Trit, Trit);
impl_value_from!(Char, char);
impl_value_from!(Int, i64);
impl_value_from!(Ratio, Ratio);
impl_value_from!(Float, f32);
impl_value_from!(Double, f64);
impl_value_from!(Tuple, Tuple);
impl_value_from!(Optional, Optional);

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(i64::from(value))
    }
}

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Value::BigInt(Arc::new(value))
    }
}

impl From<Option<Value>> for Value {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(inner) => Value::Optional(Optional::some(inner)),
            None => Value::none(),
        }
    }
}

impl Value {
    /// Boxed `true`.
    pub const TRUE: Value = Value::Bool(true);

    /// Boxed `false`.
    pub const FALSE: Value = Value::Bool(false);

    /// Unchecked construction from a native payload.
    ///
    /// The payload types are already canonical (a [`Ratio`] can only exist in reduced
    /// form), so no validation is needed.
    #[must_use]
    pub fn boxed<T: Into<Value>>(native: T) -> Value {
        native.into()
    }

    /// Returns the kind tag of this value.
    #[must_use]
    pub fn kind(&self) -> Kind {
        match self {
            Value::Bool(_) => Kind::Bool,
            Value::Trit(_) => Kind::Trit,
            Value::Char(_) => Kind::Char,
            Value::Int(_) => Kind::Int,
            Value::BigInt(_) => Kind::BigInt,
            Value::Ratio(_) => Kind::Ratio,
            Value::Float(_) => Kind::Float,
            Value::Double(_) => Kind::Double,
            Value::Tuple(_) => Kind::Tuple,
            Value::Optional(_) => Kind::Optional,
        }
    }

    /// Returns a static string name for this value's kind.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        self.kind().into()
    }

    /// Returns `true` when this value belongs to the numeric tower.
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        self.kind().is_numeric()
    }

    /// Identity cast asserting this value already has kind `expected`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::KindMismatch`] when the kinds differ.
    pub fn covariant(&self, expected: Kind) -> Result<&Value> {
        let found = self.kind();
        if found == expected {
            Ok(self)
        } else {
            Err(Error::KindMismatch { expected, found })
        }
    }

    /// The additive identity of a numeric kind (or [`Trit::Zero`]).
    ///
    /// Served from the process-wide [`ConstantCache`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] for kinds without a zero.
    pub fn zero(kind: Kind) -> Result<Value> {
        ConstantCache::global().get(CacheKey::Numeric(kind, NamedConstant::Zero))
    }

    /// The multiplicative identity of a numeric kind (or [`Trit::Positive`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] for kinds without a one.
    pub fn one(kind: Kind) -> Result<Value> {
        ConstantCache::global().get(CacheKey::Numeric(kind, NamedConstant::One))
    }

    /// The value representing `-1` in a numeric kind (or [`Trit::Negative`]).
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] for kinds without a negative one.
    pub fn negative(kind: Kind) -> Result<Value> {
        ConstantCache::global().get(CacheKey::Numeric(kind, NamedConstant::Negative))
    }

    /// The shared empty optional.
    #[must_use]
    pub fn none() -> Value {
        Value::Optional(ConstantCache::global().none())
    }

    /// Checked boolean construction from `"true"` or `"false"`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other text.
    pub fn make_bool(text: &str) -> Result<Value> {
        match text {
            "true" => Ok(ConstantCache::global().boolean(true)),
            "false" => Ok(ConstantCache::global().boolean(false)),
            _ => Err(rejected(invalid_argument!(
                text,
                "expected 'true' or 'false'"
            ))),
        }
    }

    /// Checked ternary construction from `-1`, `0` or `1`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for any other integer.
    pub fn make_trit(sign: i64) -> Result<Value> {
        match sign {
            -1 | 0 | 1 => Ok(Value::Trit(Trit::from_sign(sign))),
            _ => Err(rejected(invalid_argument!(
                sign,
                "expected -1, 0 or 1"
            ))),
        }
    }

    /// Checked character construction from a string holding exactly one character.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `text` is empty or holds more than one
    /// character.
    pub fn make_char(text: &str) -> Result<Value> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(Value::Char(c)),
            _ => Err(rejected(invalid_argument!(
                text,
                "expected exactly one character, got {}",
                text.chars().count()
            ))),
        }
    }

    /// Checked fixed-width integer construction from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `text` is not a decimal integer that fits
    /// in 64 bits.
    pub fn make_int(text: &str) -> Result<Value> {
        text.parse::<i64>().map(Value::Int).map_err(|e| {
            rejected(invalid_argument!(
                text,
                "expected a 64-bit decimal integer ({e})"
            ))
        })
    }

    /// Checked arbitrary-precision integer construction from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `text` is not an optionally signed run of
    /// decimal digits.
    pub fn make_big_int(text: &str) -> Result<Value> {
        parse_big_int(text).map(Value::from).map_err(rejected)
    }

    /// Checked single-precision construction from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `text` is not a floating-point literal.
    pub fn make_float(text: &str) -> Result<Value> {
        text.parse::<f32>().map(Value::Float).map_err(|e| {
            rejected(invalid_argument!(text, "expected a float literal ({e})"))
        })
    }

    /// Checked double-precision construction from decimal text.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `text` is not a floating-point literal.
    pub fn make_double(text: &str) -> Result<Value> {
        text.parse::<f64>().map(Value::Double).map_err(|e| {
            rejected(invalid_argument!(text, "expected a double literal ({e})"))
        })
    }

    /// Checked ratio construction, see [`Ratio::make`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for a zero denominator.
    pub fn make_ratio(numerator: i64, denominator: i64) -> Result<Value> {
        Ratio::make(numerator, denominator)
            .map(Value::Ratio)
            .map_err(rejected)
    }

    /// Checked pair construction, see [`Tuple::make_pair`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless exactly two items are supplied.
    pub fn make_pair(items: Vec<Value>) -> Result<Value> {
        Tuple::make_pair(items).map(Value::Tuple).map_err(rejected)
    }

    /// Carriage return character.
    #[must_use]
    pub const fn cr() -> Value {
        Value::Char('\r')
    }

    /// Line feed character.
    #[must_use]
    pub const fn lf() -> Value {
        Value::Char('\n')
    }

    /// Space character.
    #[must_use]
    pub const fn space() -> Value {
        Value::Char(' ')
    }

    /// Horizontal tab character.
    #[must_use]
    pub const fn tab() -> Value {
        Value::Char('\t')
    }

    /// NUL character.
    #[must_use]
    pub const fn nul() -> Value {
        Value::Char('\0')
    }

    /// Builds a character from a Unicode code point.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] for surrogates and values above `U+10FFFF`.
    pub fn from_code(code: u32) -> Result<Value> {
        char::from_u32(code)
            .map(Value::Char)
            .ok_or_else(|| rejected(invalid_argument!(code, "not a Unicode scalar value")))
    }

    /// Returns the code point of a character value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] for non-character kinds.
    pub fn code(&self) -> Result<u32> {
        match self {
            Value::Char(c) => Ok(u32::from(*c)),
            other => Err(unimplemented_operation!("code", other.kind())),
        }
    }

    /// Logical negation of a boolean value.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] for non-boolean kinds.
    pub fn not(&self) -> Result<Value> {
        Ok(Value::Bool(!self.expect_bool("not")?))
    }

    /// Logical conjunction of two boolean values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] if either operand is not a boolean.
    pub fn and(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(
            self.expect_bool("and")? & other.expect_bool("and")?,
        ))
    }

    /// Logical disjunction of two boolean values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] if either operand is not a boolean.
    pub fn or(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(
            self.expect_bool("or")? | other.expect_bool("or")?,
        ))
    }

    /// Exclusive disjunction of two boolean values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnimplementedOperation`] if either operand is not a boolean.
    pub fn xor(&self, other: &Value) -> Result<Value> {
        Ok(Value::Bool(
            self.expect_bool("xor")? ^ other.expect_bool("xor")?,
        ))
    }

    fn expect_bool(&self, operation: &'static str) -> Result<bool> {
        match self {
            Value::Bool(b) => Ok(*b),
            other => Err(unimplemented_operation!(operation, other.kind())),
        }
    }

    /// Returns the boolean payload, if this is a boolean.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the trit payload, if this is a trit.
    #[must_use]
    pub fn as_trit(&self) -> Option<Trit> {
        match self {
            Value::Trit(t) => Some(*t),
            _ => None,
        }
    }

    /// Returns the character payload, if this is a character.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        match self {
            Value::Char(c) => Some(*c),
            _ => None,
        }
    }

    /// Returns the fixed-width integer payload, if this is an `Int`.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the arbitrary-precision payload, if this is a `BigInt`.
    #[must_use]
    pub fn as_big_int(&self) -> Option<&BigInt> {
        match self {
            Value::BigInt(n) => Some(n.as_ref()),
            _ => None,
        }
    }

    /// Returns the ratio payload, if this is a `Ratio`.
    #[must_use]
    pub fn as_ratio(&self) -> Option<Ratio> {
        match self {
            Value::Ratio(r) => Some(*r),
            _ => None,
        }
    }

    /// Returns the single-precision payload, if this is a `Float`.
    #[must_use]
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the double-precision payload, if this is a `Double`.
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            Value::Double(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the tuple payload, if this is a `Tuple`.
    #[must_use]
    pub fn as_tuple(&self) -> Option<&Tuple> {
        match self {
            Value::Tuple(t) => Some(t),
            _ => None,
        }
    }

    /// Returns the optional payload, if this is an `Optional`.
    #[must_use]
    pub fn as_optional(&self) -> Option<&Optional> {
        match self {
            Value::Optional(o) => Some(o),
            _ => None,
        }
    }

    /// Returns the native payload.
    ///
    /// `depth` only matters for containers: `0` unwraps one level and leaves the items
    /// boxed, anything greater recursively unboxes nested values `depth` levels deep.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use boxval::{Native, Tuple, Value};
    ///
    /// let pair = Value::from(Tuple::pair(Value::Int(1), Value::Char('a')));
    /// assert_eq!(
    ///     pair.unbox(0),
    ///     Native::Tuple(vec![Value::Int(1), Value::Char('a')])
    /// );
    /// assert_eq!(
    ///     pair.unbox(1),
    ///     Native::List(vec![Native::Int(1), Native::Char('a')])
    /// );
    /// ```
    #[must_use]
    pub fn unbox(&self, depth: usize) -> Native {
        match self {
            Value::Bool(b) => Native::Bool(*b),
            Value::Trit(t) => Native::Trit(*t),
            Value::Char(c) => Native::Char(*c),
            Value::Int(n) => Native::Int(*n),
            Value::BigInt(n) => Native::BigInt(n.as_ref().clone()),
            Value::Ratio(r) => Native::Ratio(*r),
            Value::Float(f) => Native::Float(*f),
            Value::Double(f) => Native::Double(*f),
            Value::Tuple(t) => t.unbox(depth),
            Value::Optional(o) => o.unbox(depth),
        }
    }
}

/// Logs a rejected checked construction and passes the error through.
fn rejected(error: Error) -> Error {
    debug!(%error, "checked construction rejected its input");
    error
}
