//! Integer helpers shared by the exact numeric kinds.

/// Greatest common divisor of two unsigned magnitudes.
///
/// `gcd(0, n) == n`, so reducing `0 / n` divides by `n` itself; callers that need the
/// canonical zero `(0, 1)` handle it before reducing.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::utils::gcd;
///
/// assert_eq!(gcd(12, 18), 6);
/// assert_eq!(gcd(7, 0), 7);
/// ```
#[must_use]
pub const fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let rem = a % b;
        a = b;
        b = rem;
    }
    a
}
