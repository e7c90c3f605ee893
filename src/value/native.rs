//! Native payloads returned by [`Value::unbox`](crate::Value::unbox).

use num_bigint::BigInt;
use num_traits::ToPrimitive;
use serde::{ser::SerializeSeq, Serialize, Serializer};

use crate::{protocol::Trit, tower::Ratio, value::Value};

/// The unboxed form of a [`Value`].
///
/// Scalars map one-to-one onto their payload. Containers depend on the requested
/// depth: a tuple unboxed at depth `0` keeps its items boxed ([`Native::Tuple`]),
/// deeper unboxing produces [`Native::List`] of unboxed items. An empty optional
/// unboxes to [`Native::Absent`]; a defined one unboxes to its payload.
///
/// `Native` serializes to JSON-compatible data: ratios become their text form and
/// arbitrary-precision integers become numbers when they fit 128 bits, strings
/// otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum Native {
    /// Boolean payload
    Bool(bool),
    /// Trit payload
    Trit(Trit),
    /// Character payload
    Char(char),
    /// Fixed-width integer payload
    Int(i64),
    /// Arbitrary-precision integer payload
    BigInt(BigInt),
    /// Ratio payload
    Ratio(Ratio),
    /// Single-precision payload
    Float(f32),
    /// Double-precision payload
    Double(f64),
    /// Tuple unboxed one level; items remain boxed
    Tuple(Vec<Value>),
    /// Tuple unboxed recursively
    List(Vec<Native>),
    /// Defined optional unboxed one level; the payload remains boxed
    Present(Value),
    /// Empty optional
    Absent,
}

impl Serialize for Native {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Native::Bool(b) => serializer.serialize_bool(*b),
            Native::Trit(t) => serializer.serialize_i8(t.as_i8()),
            Native::Char(c) => serializer.serialize_char(*c),
            Native::Int(n) => serializer.serialize_i64(*n),
            Native::BigInt(n) => match n.to_i128() {
                Some(small) => serializer.serialize_i128(small),
                None => serializer.collect_str(n),
            },
            Native::Ratio(r) => serializer.collect_str(r),
            Native::Float(f) => serializer.serialize_f32(*f),
            Native::Double(f) => serializer.serialize_f64(*f),
            Native::Tuple(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Native::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Native::Present(value) => value.serialize(serializer),
            Native::Absent => serializer.serialize_none(),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.unbox(usize::MAX).serialize(serializer)
    }
}
