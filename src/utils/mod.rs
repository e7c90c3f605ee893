//! Small helpers without a natural home in a value module.

mod math;

pub(crate) use math::gcd;
