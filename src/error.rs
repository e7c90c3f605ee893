use thiserror::Error;

use crate::value::Kind;

macro_rules! invalid_argument {
    // Single string version
    ($value:expr, $reason:expr) => {
        crate::Error::InvalidArgument {
            value: $value.to_string(),
            reason: $reason.to_string(),
            file: file!(),
            line: line!(),
        }
    };

    // Format string with arguments version
    ($value:expr, $fmt:expr, $($arg:tt)*) => {
        crate::Error::InvalidArgument {
            value: $value.to_string(),
            reason: format!($fmt, $($arg)*),
            file: file!(),
            line: line!(),
        }
    };
}

macro_rules! unimplemented_operation {
    ($operation:expr, $kind:expr) => {
        crate::Error::UnimplementedOperation {
            operation: $operation,
            kind: $kind,
        }
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Constructors validate eagerly and fail fast; arithmetic and protocol functions assume
/// already-valid operands. A failure is always a programming or input error, never a
/// transient condition, so nothing in this crate retries.
///
/// # Error Categories
///
/// ## Input Errors
/// - [`Error::InvalidArgument`] - A checked constructor rejected its input
/// - [`Error::KindMismatch`] - A value was not of the kind the caller asserted
/// - [`Error::IndexOutOfBounds`] - Tuple access past the last item
///
/// ## Programmer Errors
/// - [`Error::UnimplementedOperation`] - The operation has no meaning for the given kind
///
/// ## Arithmetic Errors
/// - [`Error::DivisionByZero`] - Exact division (integer or ratio) by zero
/// - [`Error::Overflow`] - An exact ratio no longer fits the fixed-width components
///
/// # Examples
///
/// ```rust
/// use boxval::{Error, Value};
///
/// match Value::make_char("ab") {
///     Err(Error::InvalidArgument { value, reason, .. }) => {
///         assert_eq!(value, "ab");
///         println!("rejected: {reason}");
///     }
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// A checked constructor rejected its input.
    ///
    /// Reports the rejected value together with the shape that was expected so
    /// call sites building values from untrusted input can be debugged.
    ///
    /// # Fields
    ///
    /// * `value` - Text form of the rejected input
    /// * `reason` - Expected shape versus what was received
    /// * `file` - Source file where the input was rejected
    /// * `line` - Source line where the input was rejected
    #[error("Invalid argument '{value}' - {file}:{line}: {reason}")]
    InvalidArgument {
        /// The rejected input, rendered as text
        value: String,
        /// Why the input was rejected
        reason: String,
        /// The source file in which this error occured
        file: &'static str,
        /// The source line in which this error occured
        line: u32,
    },

    /// The requested protocol or arithmetic operation does not exist for this kind.
    ///
    /// This surfaces programmer error, e.g. asking a character for its additive
    /// identity or adding two tuples.
    #[error("Operation '{operation}' is not implemented for kind {kind}")]
    UnimplementedOperation {
        /// Name of the operation that was requested
        operation: &'static str,
        /// Kind of the offending operand
        kind: Kind,
    },

    /// A value did not have the kind the caller asserted.
    #[error("Expected a value of kind {expected}, found {found}")]
    KindMismatch {
        /// The kind the caller asked for
        expected: Kind,
        /// The kind of the value that was supplied
        found: Kind,
    },

    /// Exact division by zero.
    ///
    /// Raised when constructing a ratio with a zero denominator, inverting the zero
    /// ratio, or dividing a fixed-width or arbitrary-precision integer by zero.
    /// Floating kinds never produce this error; they yield infinity or NaN.
    #[error("Division by zero")]
    DivisionByZero,

    /// The reduced result of an exact ratio operation does not fit in 64 bits.
    #[error("Arithmetic overflow in {operation}")]
    Overflow {
        /// Name of the operation that overflowed
        operation: &'static str,
    },

    /// Tuple access with an index past the last item.
    #[error("Index {index} out of bounds for tuple of length {len}")]
    IndexOutOfBounds {
        /// The requested index
        index: usize,
        /// The tuple length
        len: usize,
    },
}
