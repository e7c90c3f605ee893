//! Equality, ordering and hashing of boxed values.

use std::hash::{Hash, Hasher};

use crate::{
    protocol::{Equatable, Ordered, Trit},
    tower::compare_across,
    value::Value,
};

impl Equatable for Value {
    fn equals(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.equals(b),
            (Value::Trit(a), Value::Trit(b)) => a.equals(b),
            (Value::Char(a), Value::Char(b)) => a.equals(b),
            (Value::Int(a), Value::Int(b)) => a.equals(b),
            (Value::BigInt(a), Value::BigInt(b)) => a.as_ref().equals(b.as_ref()),
            (Value::Ratio(a), Value::Ratio(b)) => a.equals(b),
            (Value::Float(a), Value::Float(b)) => a.equals(b),
            (Value::Double(a), Value::Double(b)) => a.equals(b),
            (Value::Tuple(a), Value::Tuple(b)) => a.equals(b),
            (Value::Optional(a), Value::Optional(b)) => a.equals(b),
            // kinds are never coerced for equality
            _ => false,
        }
    }

    fn identical(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Tuple(a), Value::Tuple(b)) => a.identical(b),
            (Value::Optional(a), Value::Optional(b)) => a.identical(b),
            _ => self.kind() == other.kind() && self.equals(other),
        }
    }
}

impl Ordered for Value {
    fn compare(&self, other: &Self) -> Trit {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.compare(b),
            (Value::Trit(a), Value::Trit(b)) => a.compare(b),
            (Value::Char(a), Value::Char(b)) => a.compare(b),
            (Value::Int(a), Value::Int(b)) => a.compare(b),
            (Value::BigInt(a), Value::BigInt(b)) => a.as_ref().compare(b.as_ref()),
            (Value::Ratio(a), Value::Ratio(b)) => a.compare(b),
            (Value::Float(a), Value::Float(b)) => a.compare(b),
            (Value::Double(a), Value::Double(b)) => a.compare(b),
            (Value::Tuple(a), Value::Tuple(b)) => a.compare(b),
            (Value::Optional(a), Value::Optional(b)) => a.compare(b),
            (a, b) if a.is_numeric() && b.is_numeric() => compare_across(a, b),
            (a, b) => Trit::from(a.kind().cmp(&b.kind())),
        }
    }
}

impl_std_eq!(Value);
impl_std_ord!(Value);

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind().hash(state);
        match self {
            Value::Bool(b) => b.hash(state),
            Value::Trit(t) => t.hash(state),
            Value::Char(c) => c.hash(state),
            Value::Int(n) => n.hash(state),
            Value::BigInt(n) => n.hash(state),
            Value::Ratio(r) => r.hash(state),
            // equality is bitwise for floats, so hashing the bits stays consistent
            Value::Float(f) => f.to_bits().hash(state),
            Value::Double(f) => f.to_bits().hash(state),
            Value::Tuple(t) => t.hash(state),
            Value::Optional(o) => o.hash(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use num_bigint::BigInt;

    use crate::{
        collections::{Optional, Tuple},
        protocol::{compare, eq, id, Trit},
        tower::Ratio,
        value::Value,
    };

    #[test]
    fn test_same_payload_different_kind_not_equal() {
        assert!(!eq(&Value::Int(1), &Value::Double(1.0)));
        assert!(!eq(&Value::Int(1), &Value::from(BigInt::from(1))));
        assert!(!eq(&Value::Float(1.0), &Value::Double(1.0)));
        assert!(eq(&Value::Int(1), &Value::Int(1)));
    }

    #[test]
    fn test_float_equality_is_bitwise() {
        assert!(eq(&Value::Double(f64::NAN), &Value::Double(f64::NAN)));
        assert!(!eq(&Value::Double(0.0), &Value::Double(-0.0)));
        assert_eq!(compare(&Value::Double(-0.0), &Value::Double(0.0)), Trit::Negative);
    }

    #[test]
    fn test_cross_kind_numeric_order() {
        let half = Value::Ratio(Ratio::new(1, 2).unwrap());
        assert_eq!(compare(&Value::Int(0), &half), Trit::Negative);
        assert_eq!(compare(&Value::Int(1), &half), Trit::Positive);
        assert_eq!(compare(&half, &Value::Double(0.5)), Trit::Negative);
        assert_eq!(compare(&Value::Double(0.5), &half), Trit::Positive);
        assert_eq!(
            compare(&Value::from(BigInt::from(10)), &Value::Float(9.5)),
            Trit::Positive
        );
    }

    #[test]
    fn test_cross_kind_non_numeric_order_by_rank() {
        assert_eq!(compare(&Value::TRUE, &Value::Char('a')), Trit::Negative);
        assert_eq!(compare(&Value::Char('a'), &Value::Int(-5)), Trit::Negative);
        assert_eq!(
            compare(&Value::from(Tuple::empty()), &Value::Double(1e300)),
            Trit::Positive
        );
    }

    #[test]
    fn test_identity_for_containers() {
        let a = Value::from(Tuple::pair(Value::Int(1), Value::Int(2)));
        let b = Value::from(Tuple::pair(Value::Int(1), Value::Int(2)));
        let shared = a.clone();

        assert!(eq(&a, &b));
        assert!(!id(&a, &b));
        assert!(id(&a, &shared));

        assert!(id(&Value::Int(3), &Value::Int(3)));
        assert!(!id(&Value::Int(3), &Value::Double(3.0)));
    }

    #[test]
    fn test_value_sorting_uses_protocol() {
        let mut values = vec![
            Value::Double(2.5),
            Value::Int(3),
            Value::Ratio(Ratio::new(-1, 2).unwrap()),
            Value::Int(-7),
        ];
        values.sort();
        assert_eq!(
            values,
            vec![
                Value::Int(-7),
                Value::Ratio(Ratio::new(-1, 2).unwrap()),
                Value::Double(2.5),
                Value::Int(3),
            ]
        );
    }

    #[test]
    fn test_hash_consistent_with_eq() {
        let mut set = HashSet::new();
        set.insert(Value::Int(1));
        set.insert(Value::Int(1));
        set.insert(Value::Double(1.0));
        set.insert(Value::from(Optional::some(Value::Int(1))));
        set.insert(Value::from(Optional::some(Value::Int(1))));
        assert_eq!(set.len(), 3);
    }
}
