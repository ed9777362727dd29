//! Expected-failure assertions.
//!
//! - [`assert_throws`] - the callable must return `Err` of a given error type
//! - [`assert_panics`] - the callable must panic with a given payload type
//!
//! Both run the callable, classify whatever failure it produced against the
//! expected kind, and hand back the captured failure so the test can inspect
//! it. A callable that does not fail, or fails with another kind, is an
//! assertion failure.
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::assertions::{assert_panics, assert_throws};
//!
//! let err: std::num::ParseIntError = assert_throws(|| "x".parse::<u8>());
//! assert_eq!(err.to_string(), "invalid digit found in string");
//!
//! let message: &str = assert_panics(|| panic!("boom"));
//! assert_eq!(message, "boom");
//! ```

use std::any::{type_name, Any};
use std::error::Error as StdError;
use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, trace};

use crate::error::{Error, Result};

/// A type-erased error, the form every `Err` is classified in.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// A caught panic payload.
pub type PanicPayload = Box<dyn Any + Send + 'static>;

/// Classify an error against the expected type `E`.
///
/// A mismatch is reported as the static error type `Er` followed by the
/// error's `Debug` text.
pub(crate) fn classify_error<E, Er>(err: Er) -> Result<E>
where
    E: StdError + 'static,
    Er: Into<BoxError>,
{
    let err: BoxError = err.into();
    match err.downcast::<E>() {
        Ok(caught) => {
            debug!(kind = type_name::<E>(), error = %caught, "captured expected error");
            Ok(*caught)
        }
        Err(other) => {
            trace!(kind = type_name::<E>(), error = ?other, "error of another type");
            Err(Error::bad_failure_type::<E>(format!(
                "{} ({other:?})",
                type_name::<Er>()
            )))
        }
    }
}

/// Classify a panic payload against the expected type `P`.
pub(crate) fn classify_payload<P: Any + Send>(payload: PanicPayload) -> Result<P> {
    let description = describe_payload(payload.as_ref());
    match payload.downcast::<P>() {
        Ok(caught) => {
            debug!(kind = type_name::<P>(), payload = %description, "captured expected panic");
            Ok(*caught)
        }
        Err(_) => {
            trace!(kind = type_name::<P>(), payload = %description, "panic of another type");
            Err(Error::bad_failure_type::<P>(description))
        }
    }
}

/// Render a panic payload. Only string payloads carry readable content.
pub(crate) fn describe_payload(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&'static str>() {
        format!("&str {message:?}")
    } else if let Some(message) = payload.downcast_ref::<String>() {
        format!("String {message:?}")
    } else {
        "Box<dyn Any>".to_string()
    }
}

/// Run `callable` and capture the error it returns.
///
/// # Errors
///
/// - [`Error::NothingThrown`] when the callable returns `Ok`
/// - [`Error::BadFailureType`] when it returns an error that is not an `E`
pub fn check_throws<E, T, Er>(callable: impl FnOnce() -> std::result::Result<T, Er>) -> Result<E>
where
    E: StdError + 'static,
    Er: Into<BoxError>,
{
    match callable() {
        Ok(_) => Err(Error::nothing_thrown::<E>()),
        Err(err) => classify_error::<E, Er>(err),
    }
}

/// Assert that `callable` returns an `Err` holding an `E`, and return it.
///
/// # Panics
///
/// Panics when the callable returns `Ok` or an error of another type.
///
/// # Example
///
/// ```rust
/// use std::num::ParseIntError;
/// use testkit_assert::assertions::assert_throws;
///
/// let err = assert_throws::<ParseIntError, _, _>(|| "".parse::<i32>());
/// assert_eq!(err.to_string(), "cannot parse integer from empty string");
/// ```
#[track_caller]
pub fn assert_throws<E, T, Er>(callable: impl FnOnce() -> std::result::Result<T, Er>) -> E
where
    E: StdError + 'static,
    Er: Into<BoxError>,
{
    match check_throws(callable) {
        Ok(caught) => caught,
        Err(err) => panic!("{err}"),
    }
}

/// Assert that `callable` returns an `Err` holding an `E`, then pass it to
/// `consumer`.
///
/// # Panics
///
/// Panics when the callable returns `Ok` or an error of another type.
#[track_caller]
pub fn assert_throws_with<E, T, Er>(
    callable: impl FnOnce() -> std::result::Result<T, Er>,
    consumer: impl FnOnce(E),
) where
    E: StdError + 'static,
    Er: Into<BoxError>,
{
    consumer(assert_throws(callable));
}

/// Run `callable` and capture its panic payload.
///
/// `panic!("literal")` raises a `&'static str`, a formatted `panic!` raises a
/// `String`, and [`std::panic::panic_any`] raises any value.
///
/// The default panic hook still reports the caught panic on stderr.
///
/// # Errors
///
/// - [`Error::NothingThrown`] when the callable returns normally
/// - [`Error::BadFailureType`] when the payload is not a `P`
pub fn check_panics<P: Any + Send, R>(callable: impl FnOnce() -> R) -> Result<P> {
    match panic::catch_unwind(AssertUnwindSafe(callable)) {
        Ok(_) => Err(Error::nothing_thrown::<P>()),
        Err(payload) => classify_payload(payload),
    }
}

/// Assert that `callable` panics with a `P` payload, and return it.
///
/// # Panics
///
/// Panics when the callable returns normally or panics with another payload.
#[track_caller]
pub fn assert_panics<P: Any + Send, R>(callable: impl FnOnce() -> R) -> P {
    match check_panics(callable) {
        Ok(caught) => caught,
        Err(err) => panic!("{err}"),
    }
}

/// Assert that `callable` panics with a `P` payload, then pass it to
/// `consumer`.
///
/// # Panics
///
/// Panics when the callable returns normally or panics with another payload.
#[track_caller]
pub fn assert_panics_with<P: Any + Send, R>(
    callable: impl FnOnce() -> R,
    consumer: impl FnOnce(P),
) {
    consumer(assert_panics(callable));
}
