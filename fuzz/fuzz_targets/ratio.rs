#![no_main]

use boxval::{Error, Ratio};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (i64, i64, i64, i64)| {
    let (n, d, m, e) = input;
    let Ok(a) = Ratio::new(n, d) else { return };

    assert!(a.denominator() > 0);
    if a.numerator() == 0 {
        assert_eq!(a.denominator(), 1);
    }

    let Ok(b) = Ratio::new(m, e) else { return };
    for result in [a.checked_add(&b), a.checked_sub(&b), a.checked_mul(&b), a.checked_div(&b)] {
        match result {
            Ok(r) => assert_eq!(Ratio::new(r.numerator(), r.denominator()), Ok(r)),
            Err(Error::Overflow { .. } | Error::DivisionByZero) => {}
            Err(other) => panic!("unexpected {other:?}"),
        }
    }
});
