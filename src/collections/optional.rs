//! The option monad over boxed values.

use std::{
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::{
    protocol::{compare_present, eq_present, Equatable, Ordered, Trit},
    value::{Native, Value},
    Result,
};

/// Zero or one boxed value.
///
/// An `Optional` is immutable; every combinator returns a new one. A defined optional
/// shares its payload on clone, so [`crate::protocol::id`] tells apart two separately
/// built `Some(x)` while [`crate::protocol::eq`] does not.
///
/// Ordering puts `None` before every `Some`; two `Some` order by their payloads.
///
/// # Examples
///
/// ```rust
/// use boxval::{Optional, Value};
///
/// let doubled = Optional::some(Value::Int(3)).try_bind(|x| {
///     Ok(if x > &Value::Int(0) {
///         Optional::some(x.multiply(&Value::Int(2))?)
///     } else {
///         Optional::NONE
///     })
/// })?;
/// assert_eq!(doubled, Optional::some(Value::Int(6)));
///
/// assert_eq!(Optional::NONE.or_some(Value::Int(0)), Value::Int(0));
/// # Ok::<(), boxval::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Optional(Option<Arc<Value>>);

impl Optional {
    /// The empty optional.
    pub const NONE: Optional = Optional(None);

    /// Wraps `value`.
    #[must_use]
    pub fn some(value: Value) -> Optional {
        Optional(Some(Arc::new(value)))
    }

    /// `true` when a value is present.
    #[must_use]
    pub fn is_defined(&self) -> bool {
        self.0.is_some()
    }

    /// `true` for `None`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// The contained value, if any.
    #[must_use]
    pub fn get(&self) -> Option<&Value> {
        self.0.as_deref()
    }

    /// `Some(f(v))` for `Some(v)`, `None` otherwise.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Optional
    where
        F: FnOnce(&Value) -> Value,
    {
        self.get().map_or(Optional::NONE, |v| Optional::some(f(v)))
    }

    /// Like [`Optional::map`] with a fallible function.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `f`.
    pub fn try_map<F>(&self, f: F) -> Result<Optional>
    where
        F: FnOnce(&Value) -> Result<Value>,
    {
        match self.get() {
            Some(v) => f(v).map(Optional::some),
            None => Ok(Optional::NONE),
        }
    }

    /// `f(v)` for `Some(v)`, `None` otherwise; never double wraps.
    #[must_use]
    pub fn bind<F>(&self, f: F) -> Optional
    where
        F: FnOnce(&Value) -> Optional,
    {
        self.get().map_or(Optional::NONE, f)
    }

    /// Like [`Optional::bind`] with a fallible function.
    ///
    /// # Errors
    ///
    /// Propagates the error returned by `f`.
    pub fn try_bind<F>(&self, f: F) -> Result<Optional>
    where
        F: FnOnce(&Value) -> Result<Optional>,
    {
        self.get().map_or(Ok(Optional::NONE), f)
    }

    /// `self` when defined and `predicate` holds for the payload, `None` otherwise.
    #[must_use]
    pub fn filter<P>(&self, predicate: P) -> Optional
    where
        P: FnOnce(&Value) -> bool,
    {
        match self.get() {
            Some(v) if predicate(v) => self.clone(),
            _ => Optional::NONE,
        }
    }

    /// `self` when defined, `other` otherwise.
    #[must_use]
    pub fn or_else(&self, other: &Optional) -> Optional {
        if self.is_defined() {
            self.clone()
        } else {
            other.clone()
        }
    }

    /// `self` when defined, the result of `f` otherwise.
    #[must_use]
    pub fn or_else_with<F>(&self, f: F) -> Optional
    where
        F: FnOnce() -> Optional,
    {
        if self.is_defined() {
            self.clone()
        } else {
            f()
        }
    }

    /// The payload when defined, `default` otherwise.
    #[must_use]
    pub fn or_some(&self, default: Value) -> Value {
        self.get().cloned().unwrap_or(default)
    }

    /// Collapses both cases into one result.
    pub fn fold<R, F>(&self, none: R, some: F) -> R
    where
        F: FnOnce(&Value) -> R,
    {
        self.get().map_or(none, some)
    }

    /// Iterates over the payload, zero or one times.
    pub fn iter(&self) -> std::option::IntoIter<&Value> {
        self.get().into_iter()
    }

    pub(crate) fn unbox(&self, depth: usize) -> Native {
        match self.get() {
            None => Native::Absent,
            Some(v) if depth == 0 => Native::Present(v.clone()),
            Some(v) => v.unbox(depth - 1),
        }
    }
}

impl From<Option<Value>> for Optional {
    fn from(value: Option<Value>) -> Self {
        value.map_or(Optional::NONE, Optional::some)
    }
}

impl From<Optional> for Option<Value> {
    fn from(value: Optional) -> Self {
        value.get().cloned()
    }
}

impl<'a> IntoIterator for &'a Optional {
    type Item = &'a Value;
    type IntoIter = std::option::IntoIter<&'a Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Equatable for Optional {
    fn equals(&self, other: &Self) -> bool {
        eq_present(self.get(), other.get())
    }

    fn identical(&self, other: &Self) -> bool {
        match (&self.0, &other.0) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Ordered for Optional {
    fn compare(&self, other: &Self) -> Trit {
        compare_present(self.get(), other.get())
    }
}

impl_std_eq!(Optional);
impl_std_ord!(Optional);

impl Hash for Optional {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.get().hash(state);
    }
}
