//! Equality and ordering protocol shared by every boxed value.
//!
//! Every value kind implements two traits:
//!
//! - [`Equatable`] - structural equality ([`eq`]) and the stricter identity check ([`id`])
//! - [`Ordered`] - a single total-order primitive, [`Ordered::compare`], returning a [`Trit`]
//!
//! The remaining relations (`ge`, `gt`, `le`, `lt`, `max`, `min`) are derived mechanically
//! from `compare` by the free functions in this module, so a new kind only has to supply
//! `compare` and `equals` to take part in the protocol consistently.
//!
//! # Laws
//!
//! Implementations must satisfy, for all values `x`, `y`, `z` of the same type:
//!
//! - **Reflexive**: `compare(x, x) == Zero`
//! - **Antisymmetric**: `compare(x, y) == compare(y, x).negate()`
//! - **Transitive**: `compare(x, y) == compare(y, z) == Positive` implies `compare(x, z) == Positive`
//! - **Consistent**: `eq(x, y)` holds exactly when `compare(x, y) == Zero`
//!
//! # Absent operands
//!
//! An absent operand (`None`) always orders before a present one. [`compare_present`]
//! threads that rule through optional operands, and the same rule is used by
//! [`crate::Optional`] and by [`crate::Value`] comparisons.
//!
//! # Examples
//!
//! ```rust
//! use boxval::{protocol, Ratio, Trit};
//!
//! let half = Ratio::new(1, 2)?;
//! let third = Ratio::new(1, 3)?;
//!
//! assert_eq!(protocol::compare(&half, &third), Trit::Positive);
//! assert!(protocol::gt(&half, &third));
//! assert_eq!(protocol::min(&half, &third), &third);
//! # Ok::<(), boxval::Error>(())
//! ```

mod trit;

pub use trit::Trit;

/// Structural equality between two values of the same type.
///
/// Named `equals`/`identical` rather than `eq` so that the trait never shadows
/// [`PartialEq::eq`] at call sites; the protocol-level spellings are the free
/// functions [`eq`] and [`id`].
pub trait Equatable {
    /// Structural equality.
    ///
    /// Container kinds recurse into their items and delegate to the items' own
    /// equality.
    fn equals(&self, other: &Self) -> bool;

    /// Equality that additionally requires the same runtime identity.
    ///
    /// For scalar kinds this is the same as [`Equatable::equals`]. Reference-like
    /// kinds (tuples, defined options) are only identical when they share storage.
    fn identical(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

/// Total order over values of the same type.
pub trait Ordered: Equatable {
    /// Compares `self` against `other`.
    ///
    /// Must satisfy the laws listed in the [module documentation](self).
    fn compare(&self, other: &Self) -> Trit;
}

/// Structural equality, see [`Equatable::equals`].
#[must_use]
pub fn eq<T: Equatable + ?Sized>(x: &T, y: &T) -> bool {
    x.equals(y)
}

/// Identity, see [`Equatable::identical`].
#[must_use]
pub fn id<T: Equatable + ?Sized>(x: &T, y: &T) -> bool {
    x.identical(y)
}

/// Total-order comparison, see [`Ordered::compare`].
#[must_use]
pub fn compare<T: Ordered + ?Sized>(x: &T, y: &T) -> Trit {
    x.compare(y)
}

/// `x >= y`
#[must_use]
pub fn ge<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    !x.compare(y).is_negative()
}

/// `x > y`
#[must_use]
pub fn gt<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    x.compare(y).is_positive()
}

/// `x <= y`
#[must_use]
pub fn le<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    !x.compare(y).is_positive()
}

/// `x < y`
#[must_use]
pub fn lt<T: Ordered + ?Sized>(x: &T, y: &T) -> bool {
    x.compare(y).is_negative()
}

/// Returns the greater operand itself (not a copy); `x` wins ties.
#[must_use]
pub fn max<'a, T: Ordered + ?Sized>(x: &'a T, y: &'a T) -> &'a T {
    if lt(x, y) {
        y
    } else {
        x
    }
}

/// Returns the lesser operand itself (not a copy); `x` wins ties.
#[must_use]
pub fn min<'a, T: Ordered + ?Sized>(x: &'a T, y: &'a T) -> &'a T {
    if gt(x, y) {
        y
    } else {
        x
    }
}

/// Compares two possibly absent operands.
///
/// Absent orders before present, two absent operands are equal, and two present
/// operands delegate to their own [`Ordered::compare`].
///
/// # Examples
///
/// ```rust
/// use boxval::{protocol::compare_present, Trit, Value};
///
/// let zero = Value::Int(0);
/// assert_eq!(compare_present(None, Some(&zero)), Trit::Negative);
/// assert_eq!(compare_present::<Value>(None, None), Trit::Zero);
/// ```
#[must_use]
pub fn compare_present<T: Ordered + ?Sized>(x: Option<&T>, y: Option<&T>) -> Trit {
    match (x, y) {
        (None, None) => Trit::Zero,
        (None, Some(_)) => Trit::Negative,
        (Some(_), None) => Trit::Positive,
        (Some(x), Some(y)) => x.compare(y),
    }
}

/// Equality of two possibly absent operands; absent only equals absent.
#[must_use]
pub fn eq_present<T: Equatable + ?Sized>(x: Option<&T>, y: Option<&T>) -> bool {
    match (x, y) {
        (None, None) => true,
        (Some(x), Some(y)) => x.equals(y),
        _ => false,
    }
}

impl Equatable for Trit {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Ordered for Trit {
    fn compare(&self, other: &Self) -> Trit {
        Trit::from(self.cmp(other))
    }
}

impl Equatable for bool {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Ordered for bool {
    fn compare(&self, other: &Self) -> Trit {
        Trit::from(self.cmp(other))
    }
}

impl Equatable for char {
    fn equals(&self, other: &Self) -> bool {
        self == other
    }
}

impl Ordered for char {
    fn compare(&self, other: &Self) -> Trit {
        Trit::from(self.cmp(other))
    }
}
