//! Error definitions
//!
//! This module provides the failure taxonomy for testkit-assert. Every
//! `check_*` function reports a broken expectation as one of these variants;
//! the matching `assert_*` function panics with its message.

use thiserror::Error;

/// Main error type for testkit-assert
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A value did not meet the expectation
    #[error("Assertion failed: {0}")]
    AssertionFailed(String),

    /// The callable completed without failing
    #[error("No failure was raised (expected `{expected}`)")]
    NothingThrown {
        /// Name of the expected failure kind.
        expected: &'static str,
    },

    /// The callable failed, but with a different kind than expected
    #[error("Bad failure type {actual} (expected `{expected}`)")]
    BadFailureType {
        /// Rendering of the failure that was actually raised.
        actual: String,
        /// Name of the expected failure kind.
        expected: &'static str,
    },
}

impl Error {
    /// Create an assertion failed error.
    #[must_use]
    pub fn assertion_failed(message: impl Into<String>) -> Self {
        Self::AssertionFailed(message.into())
    }

    /// Create an error for a callable that did not fail.
    #[must_use]
    pub fn nothing_thrown<E: ?Sized>() -> Self {
        Self::NothingThrown {
            expected: std::any::type_name::<E>(),
        }
    }

    /// Create an error for a callable that failed with the wrong kind.
    #[must_use]
    pub fn bad_failure_type<E: ?Sized>(actual: impl Into<String>) -> Self {
        Self::BadFailureType {
            actual: actual.into(),
            expected: std::any::type_name::<E>(),
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
