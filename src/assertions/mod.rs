//! Convenience assertions for tests.
//!
//! This module provides the checks of testkit-assert:
//!
//! - [`assert_equals`] - primitive equality with a type check
//! - [`assert_gt`], [`assert_gte`], [`assert_lt`], [`assert_lte`] - numeric ordering
//! - [`assert_contains`] - literal substring
//! - [`assert_instance_of`] - runtime type membership, see [`TypeClass`]
//! - [`assert_throws`], [`assert_panics`] - expected failures
//! - [`matcher`] - the matchers the checks are built on
//!
//! Every `assert_*` function has a `check_*` twin returning
//! [`Result`](crate::Result) instead of panicking.
//!
//! # Value Checks
//!
//! ```rust
//! use testkit_assert::assertions::*;
//!
//! assert_equals('x', &'x');
//! assert_gte(10_u64, &10_u64);
//! assert_contains("needle", "haystack with a needle");
//! assert_instance_of(TypeClass::number(), &2.5);
//! ```
//!
//! # Expected Failures
//!
//! ```rust
//! use testkit_assert::assertions::{assert_throws_with, check_throws};
//! use std::num::ParseFloatError;
//!
//! assert_throws_with(|| "one".parse::<f32>(), |err: ParseFloatError| {
//!     assert_eq!(err.to_string(), "invalid float literal");
//! });
//!
//! assert!(check_throws::<ParseFloatError, _, _>(|| "1.5".parse::<f32>()).is_err());
//! ```

mod compare;
#[cfg(feature = "async")]
mod future;
mod kind;
pub mod matcher;
mod throws;

pub use compare::{
    assert_contains, assert_equals, assert_gt, assert_gte, assert_instance_of, assert_lt,
    assert_lte, check_contains, check_equals, check_gt, check_gte, check_instance_of, check_lt,
    check_lte,
};
#[cfg(feature = "async")]
pub use future::{assert_panics_async, assert_throws_async, check_panics_async, check_throws_async};
pub use kind::{Number, Primitive, TypeClass};
pub use throws::{
    assert_panics, assert_panics_with, assert_throws, assert_throws_with, check_panics,
    check_throws, BoxError, PanicPayload,
};
