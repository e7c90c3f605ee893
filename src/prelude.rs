//! # boxval Prelude
//!
//! Re-exports the types and traits most code needs. Import everything with
//! `use boxval::prelude::*;`.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all boxval operations
pub use crate::Error;

/// The result type used throughout boxval
pub use crate::Result;

// ================================================================================================
// Values
// ================================================================================================

/// Boxed value, its kind tag and its unboxed form
pub use crate::{Kind, Native, Value};

/// Container kinds
pub use crate::{Optional, Tuple};

/// Rendering configuration
pub use crate::DisplayConfig;

// ================================================================================================
// Protocol
// ================================================================================================

/// Equality and ordering traits plus the comparison result
pub use crate::{Equatable, Ordered, Trit};

/// Free protocol functions (`protocol::eq`, `protocol::compare`, ...)
pub use crate::protocol;

// ================================================================================================
// Numeric Tower
// ================================================================================================

/// Arithmetic and conversion traits
pub use crate::{Numeric, NumericConvert};

/// Exact rational and lazy ranges
pub use crate::{Ratio, Sequence};
