//! Lazy inclusive numeric ranges.

use tracing::debug;

use crate::{
    protocol::{self, Trit},
    tower::join,
    value::{Kind, Value},
    Result,
};

/// A finite, restartable sequence of numeric values from `start` to `end` inclusive.
///
/// The bound is either the end value itself, in which case the step is one, or a pair
/// `(next, end)` whose implied step is `next - start`. Start, step and end are promoted
/// to their common numeric kind. The sign of the step picks the direction; a zero step
/// produces `start` once when it equals `end` and nothing otherwise.
///
/// Iteration stops early when adding the step no longer moves strictly toward `end`
/// (fixed-width wrap-around, floats too large to change, a ratio that overflows).
///
/// # Examples
///
/// ```rust
/// use boxval::{Sequence, Tuple, Value};
///
/// let up = Sequence::new(&Value::Int(1), &Value::Int(4))?;
/// let items: Vec<Value> = up.iter().collect();
/// assert_eq!(items, [1, 2, 3, 4].map(Value::Int));
///
/// // (next, end) pair: step of -2
/// let bound = Value::from(Tuple::pair(Value::Int(8), Value::Int(5)));
/// let down = Sequence::new(&Value::Int(10), &bound)?;
/// assert_eq!(down.iter().collect::<Vec<_>>(), [10, 8, 6].map(Value::Int));
///
/// // restartable
/// assert_eq!(up.iter().count(), 4);
/// # Ok::<(), boxval::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Sequence {
    start: Value,
    step: Value,
    end: Value,
    direction: Trit,
}

impl Sequence {
    /// Builds a sequence from `start` up or down to `bound`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] when `start`, the step or the end
    /// is not numeric, and propagates conversion errors from promoting them to a common
    /// kind.
    pub fn new(start: &Value, bound: &Value) -> Result<Sequence> {
        if !start.is_numeric() {
            return Err(unimplemented_operation!("sequence", start.kind()));
        }

        let (step, end) = match bound {
            Value::Tuple(pair) if pair.is_pair() => (pair.first()?.subtract(start)?, pair.second()?),
            end => (Value::one(start.kind())?, end),
        };

        let kind = common_kind(&[start, &step, end])?;
        let step = step.convert(kind)?;
        let direction = if step.is_zero()? {
            Trit::Zero
        } else {
            step.signum()?
        };

        Ok(Sequence {
            start: start.convert(kind)?,
            step,
            end: end.convert(kind)?,
            direction,
        })
    }

    /// First value.
    #[must_use]
    pub fn start(&self) -> &Value {
        &self.start
    }

    /// Distance between consecutive values.
    #[must_use]
    pub fn step(&self) -> &Value {
        &self.step
    }

    /// Inclusive bound.
    #[must_use]
    pub fn end(&self) -> &Value {
        &self.end
    }

    /// Starts a fresh pass over the sequence.
    #[must_use]
    pub fn iter(&self) -> SequenceIter<'_> {
        let next = self.within(&self.start).then(|| self.start.clone());
        SequenceIter {
            sequence: self,
            next,
        }
    }

    fn within(&self, value: &Value) -> bool {
        match self.direction {
            Trit::Positive => protocol::le(value, &self.end),
            Trit::Negative => protocol::ge(value, &self.end),
            Trit::Zero => protocol::eq(value, &self.end),
        }
    }

    fn advance(&self, current: &Value) -> Option<Value> {
        if self.direction.is_zero() {
            return None;
        }

        let following = match current.add(&self.step) {
            Ok(following) => following,
            Err(error) => {
                debug!(%error, "sequence stopped, step failed");
                return None;
            }
        };

        let progressed = protocol::compare(&following, current) == self.direction;
        (progressed && self.within(&following)).then_some(following)
    }
}

fn common_kind(values: &[&Value]) -> Result<Kind> {
    let mut kind = Kind::Int;
    for value in values {
        kind = join(kind, value.kind())
            .ok_or_else(|| unimplemented_operation!("sequence", value.kind()))?;
    }
    Ok(kind)
}

/// Iterator over one pass of a [`Sequence`].
#[derive(Debug, Clone)]
pub struct SequenceIter<'a> {
    sequence: &'a Sequence,
    next: Option<Value>,
}

impl Iterator for SequenceIter<'_> {
    type Item = Value;

    fn next(&mut self) -> Option<Value> {
        let current = self.next.take()?;
        self.next = self.sequence.advance(&current);
        Some(current)
    }
}

impl<'a> IntoIterator for &'a Sequence {
    type Item = Value;
    type IntoIter = SequenceIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
