//! End-to-end scenarios through the public API.
//!
//! Each test builds boxed values through the public constructors and checks one
//! observable behavior:
//! 1. Ratio canonicalization and arithmetic
//! 2. Option chaining and ordering
//! 3. Tuple ordering and swapping
//! 4. Mixed-kind arithmetic and ordering across the numeric tower
//! 5. Construction surface, rendering and unboxing

use boxval::{
    protocol::{self, compare, compare_present},
    tower::{CacheKey, NamedConstant},
    ConstantCache, DisplayConfig, Error, Kind, Native, Optional, Ratio, Result, Sequence, Trit,
    Tuple, Value,
};

/// Doubles positive integers, drops everything else.
fn positive_doubled(x: &Value) -> Result<Optional> {
    Ok(if protocol::gt(x, &Value::Int(0)) {
        Optional::some(x.multiply(&Value::Int(2))?)
    } else {
        Optional::NONE
    })
}

#[test]
fn test_ratio_make_reduces() -> Result<()> {
    let r = Ratio::make(4, 8)?;
    assert_eq!(r.numerator(), 1);
    assert_eq!(r.denominator(), 2);
    Ok(())
}

#[test]
fn test_ratio_make_normalizes_sign() -> Result<()> {
    let r = Ratio::make(-2, -4)?;
    assert_eq!(r.numerator(), 1);
    assert_eq!(r.denominator(), 2);
    Ok(())
}

#[test]
fn test_ratio_add() -> Result<()> {
    let sum = Value::make_ratio(1, 2)?.add(&Value::make_ratio(1, 3)?)?;
    assert_eq!(sum, Value::Ratio(Ratio::new(5, 6)?));
    assert_eq!(sum.to_string(), "5 / 6");
    Ok(())
}

#[test]
fn test_ratio_make_rejects_zero_denominator() {
    match Value::make_ratio(3, 0) {
        Err(Error::InvalidArgument { value, reason, .. }) => {
            assert_eq!(value, "3/0");
            assert!(reason.contains("denominator"));
        }
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn test_option_bind() -> Result<()> {
    let result = Optional::some(Value::Int(3)).try_bind(positive_doubled)?;
    assert_eq!(result, Optional::some(Value::Int(6)));

    let dropped = Optional::some(Value::Int(-3)).try_bind(positive_doubled)?;
    assert_eq!(dropped, Optional::NONE);
    Ok(())
}

#[test]
fn test_option_none_orders_first() {
    let none = Value::from(Optional::NONE);
    let some_zero = Value::from(Optional::some(Value::Int(0)));
    assert_eq!(compare(&none, &some_zero), Trit::Negative);
    assert_eq!(compare(&some_zero, &none), Trit::Positive);

    assert_eq!(
        compare_present(None, Some(&Value::Int(0))),
        Trit::Negative
    );
}

#[test]
fn test_tuple_compare() {
    let a = Tuple::pair(Value::Int(1), Value::Int(2));
    let b = Tuple::pair(Value::Int(1), Value::Int(3));
    assert_eq!(compare(&a, &b), Trit::Negative);
    assert_eq!(compare(&Value::from(b), &Value::from(a)), Trit::Positive);
}

#[test]
fn test_tuple_swap_needs_pair() -> Result<()> {
    let pair = Value::make_pair(vec![Value::Char('k'), Value::Int(7)])?;
    let tuple = pair.as_tuple().ok_or(Error::KindMismatch {
        expected: Kind::Tuple,
        found: pair.kind(),
    })?;
    assert_eq!(tuple.swap()?.first()?, &Value::Int(7));

    let triple = Tuple::new(vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    assert!(matches!(triple.swap(), Err(Error::InvalidArgument { .. })));
    Ok(())
}

#[test]
fn test_max_min_return_operands() {
    let small = Value::Int(1);
    let big = Value::Ratio(Ratio::from_integer(2));
    assert!(std::ptr::eq(protocol::max(&small, &big), &big));
    assert!(std::ptr::eq(protocol::min(&small, &big), &small));
}

#[test]
fn test_numeric_tower_promotion() -> Result<()> {
    let total = Value::Int(1)
        .add(&Value::make_big_int("99999999999999999999")?)?
        .multiply(&Value::Int(2))?;
    assert_eq!(total, Value::make_big_int("200000000000000000000")?);

    let mixed = Value::make_ratio(1, 4)?.add(&Value::Float(0.5))?;
    assert_eq!(mixed, Value::Float(0.75));
    Ok(())
}

#[test]
fn test_sorting_mixed_values() {
    let mut values = vec![
        Value::Double(0.5),
        Value::Char('a'),
        Value::Int(0),
        Value::from(Optional::NONE),
        Value::FALSE,
        Value::Ratio(Ratio::new(1, 3).unwrap_or(Ratio::ZERO)),
    ];
    values.sort();

    let kinds: Vec<Kind> = values.iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        vec![
            Kind::Bool,
            Kind::Char,
            Kind::Int,
            Kind::Ratio,
            Kind::Double,
            Kind::Optional
        ]
    );
}

#[test]
fn test_sequence_over_ratios() -> Result<()> {
    let step_pair = Value::make_pair(vec![Value::make_ratio(1, 3)?, Value::Int(1)])?;
    let sequence = Sequence::new(&Value::Int(0), &step_pair)?;

    let rendered: Vec<String> = sequence.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered, ["0 / 1", "1 / 3", "2 / 3", "1 / 1"]);
    Ok(())
}

#[test]
fn test_named_constants_are_shared() -> Result<()> {
    let a = Value::from(Tuple::empty());
    let b = Value::from(Tuple::empty());
    assert!(protocol::id(&a, &b));

    let cache = ConstantCache::new();
    cache.warm();
    assert_eq!(
        cache.get(CacheKey::Numeric(Kind::Double, NamedConstant::Negative))?,
        Value::Double(-1.0)
    );
    assert_eq!(Value::zero(Kind::BigInt)?, Value::make_big_int("0")?);
    Ok(())
}

#[test]
fn test_rendering() -> Result<()> {
    let nested = Value::from(Tuple::new(vec![
        Value::Int(1),
        Value::make_ratio(2, 4)?,
        Value::from(Tuple::pair(Value::TRUE, Value::space())),
        Value::Double(0.25),
    ]));
    assert_eq!(nested.to_string(), r#"[1,"1 / 2",[true," "],0.25]"#);

    assert_eq!(Value::make_double("2.5")?.to_string(), "2.500000");
    assert_eq!(
        Value::make_ratio(-3, 9)?.render(&DisplayConfig::compact()),
        "-1/3"
    );
    Ok(())
}

#[test]
fn test_unbox_round_trip() -> Result<()> {
    assert_eq!(Value::make_int("-17")?.unbox(0), Native::Int(-17));
    assert_eq!(Value::make_char("λ")?.unbox(0), Native::Char('λ'));
    assert_eq!(Value::make_bool("true")?.unbox(0), Native::Bool(true));
    assert_eq!(
        Value::make_ratio(6, 4)?.unbox(0),
        Native::Ratio(Ratio::new(3, 2)?)
    );
    Ok(())
}

#[test]
fn test_errors_name_the_operation() {
    let err = Value::Char('x').add(&Value::Int(1)).unwrap_err();
    assert_eq!(
        err.to_string(),
        "Operation 'add' is not implemented for kind char"
    );

    let err = Value::Int(1).covariant(Kind::Ratio).unwrap_err();
    assert_eq!(err.to_string(), "Expected a value of kind ratio, found int");
}
