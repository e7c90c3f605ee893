//! Shared instances of the canonical constants.
//!
//! The numeric tower hands out `zero`, `one` and `-1` for every numeric kind, plus the
//! boxed booleans, the empty optional and the empty tuple, from a [`ConstantCache`].
//! Entries are built on first access and then shared: cloning a cached tuple keeps its
//! storage, so every caller observes the same instance and [`crate::protocol::id`]
//! holds between them.
//!
//! The cache is a value, not an ambient global. [`ConstantCache::global`] is the
//! process-wide instance used by [`crate::Value::zero`] and friends, while tests can
//! build, warm and clear their own.
//!
//! # Thread Safety
//!
//! Backed by [`DashMap`]. Threads racing to populate the same key resolve to a single
//! stored instance: the first insert wins and every later access clones it.

use std::sync::LazyLock;

use dashmap::DashMap;
use num_bigint::BigInt;
use strum::IntoEnumIterator;
use tracing::trace;

use crate::{
    collections::{Optional, Tuple},
    protocol::Trit,
    tower::Ratio,
    value::{Kind, Value},
    Result,
};

static GLOBAL: LazyLock<ConstantCache> = LazyLock::new(ConstantCache::new);

/// The three named numeric constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::EnumIter)]
pub enum NamedConstant {
    /// Additive identity
    Zero,
    /// Multiplicative identity
    One,
    /// The value representing `-1`
    Negative,
}

impl NamedConstant {
    /// The integer this constant stands for.
    #[must_use]
    pub const fn as_i64(self) -> i64 {
        match self {
            NamedConstant::Zero => 0,
            NamedConstant::One => 1,
            NamedConstant::Negative => -1,
        }
    }

    /// The operation name reported when a kind has no such constant.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            NamedConstant::Zero => "zero",
            NamedConstant::One => "one",
            NamedConstant::Negative => "negative",
        }
    }
}

/// Key of one cached constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheKey {
    /// A named constant of a numeric kind (or of [`Kind::Trit`])
    Numeric(Kind, NamedConstant),
    /// Boxed `true` or `false`
    Bool(bool),
    /// The empty optional
    None,
    /// The tuple of length zero
    EmptyTuple,
}

/// Lazily populated table of canonical constants.
#[derive(Debug, Default)]
pub struct ConstantCache {
    entries: DashMap<CacheKey, Value>,
}

impl ConstantCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        ConstantCache {
            entries: DashMap::new(),
        }
    }

    /// The process-wide cache.
    pub fn global() -> &'static ConstantCache {
        &GLOBAL
    }

    /// Returns the constant stored under `key`, building it on first access.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::UnimplementedOperation`] when `key` names a constant
    /// that does not exist for its kind, e.g. the zero of [`Kind::Char`].
    pub fn get(&self, key: CacheKey) -> Result<Value> {
        if let Some(entry) = self.entries.get(&key) {
            return Ok(entry.value().clone());
        }

        let built = Self::build(key)?;
        let entry = self.entries.entry(key).or_insert_with(|| {
            trace!(?key, "populating constant cache");
            built
        });
        Ok(entry.value().clone())
    }

    /// The shared empty tuple.
    #[must_use]
    pub fn empty_tuple(&self) -> Tuple {
        match self.shared(CacheKey::EmptyTuple, || Value::Tuple(Tuple::new(Vec::new()))) {
            Value::Tuple(tuple) => tuple,
            _ => Tuple::new(Vec::new()),
        }
    }

    /// The shared boxed boolean `b`.
    #[must_use]
    pub fn boolean(&self, b: bool) -> Value {
        self.shared(CacheKey::Bool(b), || Value::Bool(b))
    }

    /// The shared empty optional.
    #[must_use]
    pub fn none(&self) -> Optional {
        match self.shared(CacheKey::None, || Value::Optional(Optional::NONE)) {
            Value::Optional(none) => none,
            _ => Optional::NONE,
        }
    }

    /// Entry for a key that always has a constant.
    fn shared<F: FnOnce() -> Value>(&self, key: CacheKey, build: F) -> Value {
        self.entries
            .entry(key)
            .or_insert_with(|| {
                trace!(?key, "populating constant cache");
                build()
            })
            .value()
            .clone()
    }

    /// Populates every key up front.
    pub fn warm(&self) {
        let numeric = Kind::iter()
            .filter(|kind| kind.is_numeric() || *kind == Kind::Trit)
            .flat_map(|kind| NamedConstant::iter().map(move |c| CacheKey::Numeric(kind, c)));
        let others = [
            CacheKey::Bool(false),
            CacheKey::Bool(true),
            CacheKey::None,
            CacheKey::EmptyTuple,
        ];

        for key in numeric.chain(others) {
            if let Err(error) = self.get(key) {
                trace!(?key, %error, "constant not available");
            }
        }
    }

    /// Drops every entry; later accesses build fresh instances.
    pub fn clear(&self) {
        self.entries.clear();
    }

    /// Number of populated entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing has been populated yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[allow(clippy::cast_precision_loss)]
    fn build(key: CacheKey) -> Result<Value> {
        Ok(match key {
            CacheKey::Numeric(kind, constant) => {
                let n = constant.as_i64();
                match kind {
                    Kind::Trit => Value::Trit(Trit::from_sign(n)),
                    Kind::Int => Value::Int(n),
                    Kind::BigInt => Value::from(BigInt::from(n)),
                    Kind::Ratio => Value::Ratio(Ratio::from_integer(n)),
                    Kind::Float => Value::Float(n as f32),
                    Kind::Double => Value::Double(n as f64),
                    other => return Err(unimplemented_operation!(constant.operation(), other)),
                }
            }
            CacheKey::Bool(b) => Value::Bool(b),
            CacheKey::None => Value::Optional(Optional::NONE),
            CacheKey::EmptyTuple => Value::Tuple(Tuple::new(Vec::new())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{protocol::id, Error};

    #[test]
    fn test_lazy_population() {
        let cache = ConstantCache::new();
        assert!(cache.is_empty());

        let zero = cache
            .get(CacheKey::Numeric(Kind::Int, NamedConstant::Zero))
            .unwrap();
        assert_eq!(zero, Value::Int(0));
        assert_eq!(cache.len(), 1);

        cache
            .get(CacheKey::Numeric(Kind::Int, NamedConstant::Zero))
            .unwrap();
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_missing_constant() {
        let cache = ConstantCache::new();
        assert_eq!(
            cache.get(CacheKey::Numeric(Kind::Tuple, NamedConstant::One)),
            Err(Error::UnimplementedOperation {
                operation: "one",
                kind: Kind::Tuple
            })
        );
        assert!(cache.is_empty());
    }

    #[test]
    fn test_warm_and_clear() {
        let cache = ConstantCache::new();
        cache.warm();
        // 6 kinds x 3 constants, 2 booleans, none, empty tuple
        assert_eq!(cache.len(), 22);

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_shared_empty_tuple() {
        let cache = ConstantCache::new();
        let a = Value::Tuple(cache.empty_tuple());
        let b = cache.get(CacheKey::EmptyTuple).unwrap();
        assert!(id(&a, &b));

        let fresh = Value::Tuple(Tuple::new(Vec::new()));
        assert!(!id(&a, &fresh));
    }

    #[test]
    fn test_boolean_and_none_are_cached() {
        let cache = ConstantCache::new();
        assert_eq!(cache.boolean(true), Value::TRUE);
        assert_eq!(cache.boolean(false), Value::FALSE);
        assert_eq!(cache.none(), Optional::NONE);
        assert_eq!(cache.len(), 3);

        assert_eq!(cache.get(CacheKey::Bool(true)).unwrap(), Value::TRUE);
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_global_serves_constructors() {
        Value::make_bool("true").unwrap();
        Value::from(None::<Value>);
        let global = ConstantCache::global();
        assert!(global.entries.contains_key(&CacheKey::Bool(true)));
        assert!(global.entries.contains_key(&CacheKey::None));
    }

    #[test]
    fn test_constants_per_kind() {
        let cache = ConstantCache::new();
        let get = |kind, c| cache.get(CacheKey::Numeric(kind, c)).unwrap();

        assert_eq!(get(Kind::Ratio, NamedConstant::Negative), Value::Ratio(Ratio::NEGATIVE_ONE));
        assert_eq!(get(Kind::Float, NamedConstant::One), Value::Float(1.0));
        assert_eq!(get(Kind::Trit, NamedConstant::Zero), Value::Trit(Trit::Zero));
        assert_eq!(
            get(Kind::BigInt, NamedConstant::Negative),
            Value::from(BigInt::from(-1))
        );
    }

    #[test]
    fn test_concurrent_first_access_shares_instance() {
        let cache = ConstantCache::new();
        let values: Vec<Value> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| Value::Tuple(cache.empty_tuple())))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        for value in &values[1..] {
            assert!(id(&values[0], value));
        }
    }
}
