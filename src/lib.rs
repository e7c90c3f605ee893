// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![deny(unsafe_code)]

//! # boxval
//!
//! [![Crates.io](https://img.shields.io/crates/v/boxval.svg)](https://crates.io/crates/boxval)
//! [![Documentation](https://docs.rs/boxval/badge.svg)](https://docs.rs/boxval)
//! [![License](https://img.shields.io/badge/license-Apache--2.0-blue.svg)](https://github.com/BinFlip/boxval/blob/main/LICENSE-APACHE)
//!
//! A closed family of immutable boxed values (booleans, trits, characters, fixed and
//! arbitrary-precision integers, exact rationals, floats, tuples and options) that all
//! follow one equality, ordering and text-conversion protocol, and that convert into
//! one another through a numeric tower.
//!
//! ## Features
//!
//! - **Closed value type** - [`Value`] is a single enum; "different kinds are never equal"
//!   is a `match`, not a runtime type test
//! - **One ordering primitive** - every kind supplies `compare`; `ge`/`gt`/`le`/`lt`/`max`/`min`
//!   are derived in [`protocol`]
//! - **Exact rationals** - [`Ratio`] is always in lowest terms with a positive denominator
//! - **Numeric tower** - mixed-kind arithmetic promotes to the least common kind; mixed-kind
//!   comparison is exact
//! - **Option monad** - [`Optional`] with `map`/`bind`/`filter`/`or_else`/`or_some`, `None`
//!   ordering before every `Some`
//!
//! ## Quick Start
//!
//! ```rust
//! use boxval::prelude::*;
//!
//! let half = Ratio::make(4, 8)?;
//! assert_eq!((half.numerator(), half.denominator()), (1, 2));
//!
//! let sum = Value::Ratio(half).add(&Value::Ratio(Ratio::new(1, 3)?))?;
//! assert_eq!(sum.to_string(), "5 / 6");
//!
//! let pair = Tuple::pair(Value::Int(1), Value::Int(2));
//! assert!(protocol::lt(&pair, &Tuple::pair(Value::Int(1), Value::Int(3))));
//!
//! assert_eq!(
//!     protocol::compare_present(None, Some(&Value::Int(0))),
//!     Trit::Negative
//! );
//! # Ok::<(), boxval::Error>(())
//! ```
//!
//! ## Error Handling
//!
//! Checked constructors validate eagerly and report which input was rejected and why.
//! Arithmetic only fails where an exact kind cannot produce a result.
//!
//! ```rust
//! use boxval::{Error, Value};
//!
//! match Value::make_int("12x") {
//!     Ok(_) => unreachable!(),
//!     Err(Error::InvalidArgument { value, reason, .. }) => {
//!         println!("rejected {value}: {reason}");
//!     }
//!     Err(e) => println!("other error: {e}"),
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (rejected checked constructions at `debug`,
//! constant cache population at `trace`) and never installs a subscriber.
//!
//! ## Development and Testing
//!
//! ```bash
//! cargo test
//! cargo bench
//!
//! # Fuzz the ratio constructor
//! cargo +nightly fuzz run ratio --release
//! ```
#[macro_use]
pub(crate) mod macros;

#[macro_use]
pub(crate) mod error;
pub(crate) mod utils;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use boxval::prelude::*;
///
/// let x = Value::Int(3).multiply(&Value::Double(0.5))?;
/// assert_eq!(x, Value::Double(1.5));
/// # Ok::<(), boxval::Error>(())
/// ```
pub mod prelude;

pub mod collections;
pub mod config;
pub mod protocol;
pub mod tower;
pub mod value;

/// `boxval` Result type
///
/// A type alias for [`std::result::Result<T, Error>`] where the error type is always [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;

pub use collections::{Optional, Tuple};
pub use config::DisplayConfig;
pub use protocol::{Equatable, Ordered, Trit};
pub use tower::{ConstantCache, Numeric, NumericConvert, Ratio, Sequence};
pub use value::{Kind, Native, Value};
