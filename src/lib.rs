//! # testkit-assert
//!
//! > Convenience assertions for Rust tests
//!
//! **testkit-assert** adds the small checks tests keep rewriting by hand:
//! numeric ordering, substring containment, runtime type checks, primitive
//! equality, and "this call must fail with that error" helpers that hand the
//! captured failure back for inspection.
//!
//! ## Quick Start
//!
//! ```rust
//! use testkit_assert::prelude::*;
//! use std::num::ParseIntError;
//!
//! assert_gt(5, &6);
//! assert_lte(5, &5);
//! assert_contains("abc", "xxabcyy");
//! assert_instance_of(TypeClass::number(), &5);
//!
//! let err: ParseIntError = assert_throws(|| "x".parse::<i32>());
//! assert_eq!(err.to_string(), "invalid digit found in string");
//! ```
//!
//! ## Features
//!
//! - `async` (default) - awaitable forms of the expected-failure helpers

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod assertions;
pub mod error;

/// Prelude for convenient imports
///
/// ```rust
/// use testkit_assert::prelude::*;
/// ```
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::error::{Error, Result};
}

// Re-exports
pub use error::{Error, Result};
