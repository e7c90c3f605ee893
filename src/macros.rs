#![allow(unused_macros)]

/// Helper macro for boxing a native payload into its `Value` variant
///
/// ```rust, ignore
///  impl_value_from!(Int, i64);
///  let v: Value = 42_i64.into();
/// ```
macro_rules! impl_value_from {
    ($variant:ident, $native:ty) => {
        impl From<$native> for $crate::Value {
            fn from(value: $native) -> Self {
                $crate::Value::$variant(value)
            }
        }
    };
}

/// Helper macro for deriving `PartialEq`/`Eq` from the `Equatable` protocol
///
/// ```rust, ignore
///  impl_std_eq!(Tuple);
///  assert!(a == b); // same as protocol::eq(&a, &b)
/// ```
macro_rules! impl_std_eq {
    ($type:ty) => {
        impl PartialEq for $type {
            fn eq(&self, other: &Self) -> bool {
                $crate::protocol::Equatable::equals(self, other)
            }
        }

        impl Eq for $type {}
    };
}

/// Helper macro for deriving `PartialOrd`/`Ord` from the `Ordered` protocol
///
/// ```rust, ignore
///  impl_std_ord!(Tuple);
///  items.sort(); // ordered by protocol::compare
/// ```
macro_rules! impl_std_ord {
    ($type:ty) => {
        impl PartialOrd for $type {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $type {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $crate::protocol::Ordered::compare(self, other).into()
            }
        }
    };
}

/// Helper macro for running one expression against both operands after promoting
/// them to their common numeric kind
///
/// ```rust, ignore
///  let sum = with_promoted!("add", x, y, |a, b| Numeric::add(&a, &b).map(Numeric::into_value));
/// ```
macro_rules! with_promoted {
    ($operation:expr, $x:expr, $y:expr, |$a:ident, $b:ident| $body:expr) => {
        match $crate::tower::promote($operation, $x, $y)? {
            $crate::tower::Promoted::Int($a, $b) => $body,
            $crate::tower::Promoted::BigInt($a, $b) => $body,
            $crate::tower::Promoted::Ratio($a, $b) => $body,
            $crate::tower::Promoted::Float($a, $b) => $body,
            $crate::tower::Promoted::Double($a, $b) => $body,
        }
    };
}

/// Helper macro for running one expression against the native payload of a numeric
/// value, failing with `UnimplementedOperation` for every other kind
///
/// ```rust, ignore
///  let negated = with_numeric!("negate", x, |a| Numeric::negate(a).map(Numeric::into_value));
/// ```
macro_rules! with_numeric {
    ($operation:expr, $x:expr, |$a:ident| $body:expr) => {
        match $x {
            $crate::Value::Int(n) => {
                let $a: &i64 = n;
                $body
            }
            $crate::Value::BigInt(n) => {
                let $a: &num_bigint::BigInt = n.as_ref();
                $body
            }
            $crate::Value::Ratio(n) => {
                let $a: &$crate::Ratio = n;
                $body
            }
            $crate::Value::Float(n) => {
                let $a: &f32 = n;
                $body
            }
            $crate::Value::Double(n) => {
                let $a: &f64 = n;
                $body
            }
            other => Err(unimplemented_operation!($operation, other.kind())),
        }
    };
}
