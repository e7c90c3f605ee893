//! Three-valued sign used as the canonical comparison outcome.

use std::{cmp::Ordering, fmt};

use strum::{EnumCount, EnumIter};

/// A ternary sign: negative, zero or positive.
///
/// Every comparison in this crate produces a `Trit` instead of a raw signed integer,
/// which makes comparison results a first-class, totally ordered value in their own
/// right. Trits box into [`crate::Value::Trit`] and take part in the same equality
/// and ordering protocol as every other kind.
///
/// The order is `Negative < Zero < Positive`.
///
/// # Examples
///
/// ```rust
/// use boxval::Trit;
///
/// assert_eq!(Trit::from_sign(-42), Trit::Negative);
/// assert_eq!(Trit::Negative.negate(), Trit::Positive);
/// assert_eq!(Trit::Negative.multiply(Trit::Negative), Trit::Positive);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumCount)]
#[repr(i8)]
pub enum Trit {
    /// Less than / below zero
    Negative = -1,
    /// Equal / zero
    Zero = 0,
    /// Greater than / above zero
    Positive = 1,
}

impl Trit {
    /// Builds a trit from the sign of an integer.
    #[must_use]
    pub const fn from_sign(value: i64) -> Self {
        if value < 0 {
            Trit::Negative
        } else if value > 0 {
            Trit::Positive
        } else {
            Trit::Zero
        }
    }

    /// Returns the trit as `-1`, `0` or `1`.
    #[must_use]
    pub const fn as_i8(self) -> i8 {
        self as i8
    }

    /// Flips the sign; `Zero` stays `Zero`.
    ///
    /// Antisymmetry of every [`crate::Ordered`] implementation is expressed through
    /// this: `compare(x, y) == compare(y, x).negate()`.
    #[must_use]
    pub const fn negate(self) -> Self {
        match self {
            Trit::Negative => Trit::Positive,
            Trit::Zero => Trit::Zero,
            Trit::Positive => Trit::Negative,
        }
    }

    /// Sign of the product of two values with these signs.
    #[must_use]
    pub const fn multiply(self, other: Trit) -> Self {
        Trit::from_sign((self.as_i8() * other.as_i8()) as i64)
    }

    /// Returns `true` for [`Trit::Negative`].
    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(self, Trit::Negative)
    }

    /// Returns `true` for [`Trit::Zero`].
    #[must_use]
    pub const fn is_zero(self) -> bool {
        matches!(self, Trit::Zero)
    }

    /// Returns `true` for [`Trit::Positive`].
    #[must_use]
    pub const fn is_positive(self) -> bool {
        matches!(self, Trit::Positive)
    }

    /// Chains two comparison results: `self` unless it is `Zero`, otherwise `next()`.
    ///
    /// Used for lexicographic comparisons.
    #[must_use]
    pub fn then_with<F: FnOnce() -> Trit>(self, next: F) -> Self {
        match self {
            Trit::Zero => next(),
            decided => decided,
        }
    }
}

impl From<Ordering> for Trit {
    fn from(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Trit::Negative,
            Ordering::Equal => Trit::Zero,
            Ordering::Greater => Trit::Positive,
        }
    }
}

impl From<Trit> for Ordering {
    fn from(trit: Trit) -> Self {
        match trit {
            Trit::Negative => Ordering::Less,
            Trit::Zero => Ordering::Equal,
            Trit::Positive => Ordering::Greater,
        }
    }
}

impl From<Trit> for i64 {
    fn from(trit: Trit) -> Self {
        i64::from(trit.as_i8())
    }
}

impl fmt::Display for Trit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_i8())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_trit_from_sign() {
        assert_eq!(Trit::from_sign(i64::MIN), Trit::Negative);
        assert_eq!(Trit::from_sign(0), Trit::Zero);
        assert_eq!(Trit::from_sign(7), Trit::Positive);
    }

    #[test]
    fn test_trit_negate_involution() {
        for trit in Trit::iter() {
            assert_eq!(trit.negate().negate(), trit);
        }
        assert_eq!(Trit::COUNT, 3);
    }

    #[test]
    fn test_trit_multiply_sign_rule() {
        assert_eq!(Trit::Positive.multiply(Trit::Negative), Trit::Negative);
        assert_eq!(Trit::Negative.multiply(Trit::Negative), Trit::Positive);
        assert_eq!(Trit::Zero.multiply(Trit::Negative), Trit::Zero);
    }

    #[test]
    fn test_trit_ordering_roundtrip() {
        for trit in Trit::iter() {
            assert_eq!(Trit::from(Ordering::from(trit)), trit);
        }
        assert!(Trit::Negative < Trit::Zero && Trit::Zero < Trit::Positive);
    }

    #[test]
    fn test_trit_then_with() {
        assert_eq!(Trit::Zero.then_with(|| Trit::Positive), Trit::Positive);
        assert_eq!(Trit::Negative.then_with(|| Trit::Positive), Trit::Negative);
    }

    #[test]
    fn test_trit_display() {
        assert_eq!(Trit::Negative.to_string(), "-1");
        assert_eq!(Trit::Zero.to_string(), "0");
        assert_eq!(Trit::Positive.to_string(), "1");
    }
}
