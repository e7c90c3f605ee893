//! Fixed-length heterogeneous tuples.

use std::{
    hash::{Hash, Hasher},
    slice,
    sync::Arc,
};

use crate::{
    protocol::{Equatable, Ordered, Trit},
    tower::ConstantCache,
    value::{Native, Value},
    Error, Result,
};

/// An immutable, fixed-length, 0-indexed sequence of boxed values.
///
/// Items are stored behind an [`Arc`], so cloning a tuple shares its storage and the
/// clone stays [`identical`](Equatable::identical) to the original.
///
/// Tuples order lexicographically: items are compared pairwise up to the shorter
/// length, the first difference wins, and when one tuple is a prefix of the other the
/// shorter one sorts first.
///
/// # Examples
///
/// ```rust
/// use boxval::{protocol, Trit, Tuple, Value};
///
/// let a = Tuple::pair(Value::Int(1), Value::Int(2));
/// let b = Tuple::pair(Value::Int(1), Value::Int(3));
/// assert_eq!(protocol::compare(&a, &b), Trit::Negative);
///
/// let swapped = a.swap()?;
/// assert_eq!(swapped.first()?, &Value::Int(2));
/// assert_eq!(swapped.swap()?, a);
/// # Ok::<(), boxval::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Tuple {
    items: Arc<[Value]>,
}

impl Tuple {
    /// Builds a tuple from `items`.
    #[must_use]
    pub fn new(items: Vec<Value>) -> Tuple {
        Tuple {
            items: Arc::from(items),
        }
    }

    /// Builds a 2-tuple.
    #[must_use]
    pub fn pair(first: Value, second: Value) -> Tuple {
        Tuple::new(vec![first, second])
    }

    /// Checked 2-tuple construction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] unless `items` holds exactly two values.
    pub fn make_pair(items: Vec<Value>) -> Result<Tuple> {
        if items.len() != 2 {
            return Err(invalid_argument!(
                Tuple::new(items.clone()),
                "expected exactly two items, got {}",
                items.len()
            ));
        }
        Ok(Tuple::new(items))
    }

    /// The shared empty tuple.
    #[must_use]
    pub fn empty() -> Tuple {
        ConstantCache::global().empty_tuple()
    }

    /// Number of items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// `true` for the tuple of length zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// `true` for 2-tuples.
    #[must_use]
    pub fn is_pair(&self) -> bool {
        self.items.len() == 2
    }

    /// Item at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] when `index >= len()`.
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.items.get(index).ok_or(Error::IndexOutOfBounds {
            index,
            len: self.items.len(),
        })
    }

    /// Item at index 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for the empty tuple.
    pub fn first(&self) -> Result<&Value> {
        self.get(0)
    }

    /// Item at index 1.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] for tuples shorter than two.
    pub fn second(&self) -> Result<&Value> {
        self.get(1)
    }

    /// A new pair with the two items exchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] when `self` is not a pair.
    pub fn swap(&self) -> Result<Tuple> {
        match &*self.items {
            [first, second] => Ok(Tuple::pair(second.clone(), first.clone())),
            _ => Err(invalid_argument!(
                self,
                "swap needs a pair, got {} items",
                self.items.len()
            )),
        }
    }

    /// The items as a slice.
    #[must_use]
    pub fn items(&self) -> &[Value] {
        &self.items
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// A new tuple holding `f` applied to every item.
    #[must_use]
    pub fn map<F>(&self, f: F) -> Tuple
    where
        F: FnMut(&Value) -> Value,
    {
        self.items.iter().map(f).collect()
    }

    pub(crate) fn unbox(&self, depth: usize) -> Native {
        if depth == 0 {
            Native::Tuple(self.items.to_vec())
        } else {
            Native::List(self.items.iter().map(|v| v.unbox(depth - 1)).collect())
        }
    }
}

impl FromIterator<Value> for Tuple {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Tuple {
            items: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Tuple {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Equatable for Tuple {
    fn equals(&self, other: &Self) -> bool {
        self.items.len() == other.items.len()
            && self
                .items
                .iter()
                .zip(other.items.iter())
                .all(|(a, b)| a.equals(b))
    }

    fn identical(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.items, &other.items)
    }
}

impl Ordered for Tuple {
    fn compare(&self, other: &Self) -> Trit {
        self.items
            .iter()
            .zip(other.items.iter())
            .map(|(a, b)| a.compare(b))
            .find(|trit| !trit.is_zero())
            .unwrap_or_else(|| Trit::from(self.items.len().cmp(&other.items.len())))
    }
}

impl_std_eq!(Tuple);
impl_std_ord!(Tuple);

impl Hash for Tuple {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.items.hash(state);
    }
}
