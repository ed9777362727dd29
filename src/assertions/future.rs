//! Expected-failure assertions for futures.
//!
//! The async forms of [`check_throws`](super::check_throws) and
//! [`check_panics`](super::check_panics). They only await the future they are
//! given, so any executor works.
//!
//! # Example
//!
//! ```rust
//! use std::num::ParseIntError;
//! use testkit_assert::assertions::assert_throws_async;
//!
//! async fn read_port(raw: &str) -> Result<u16, ParseIntError> {
//!     raw.parse()
//! }
//!
//! futures::executor::block_on(async {
//!     let err: ParseIntError = assert_throws_async(read_port("http")).await;
//!     assert_eq!(err.to_string(), "invalid digit found in string");
//! });
//! ```

use std::any::Any;
use std::error::Error as StdError;
use std::future::Future;
use std::panic::AssertUnwindSafe;

use futures::FutureExt;

use crate::error::{Error, Result};

use super::throws::{classify_error, classify_payload, BoxError};

/// Await `future` and capture the error it resolves to.
///
/// # Errors
///
/// - [`Error::NothingThrown`] when the future resolves to `Ok`
/// - [`Error::BadFailureType`] when it resolves to an error that is not an `E`
pub async fn check_throws_async<E, T, Er>(
    future: impl Future<Output = std::result::Result<T, Er>>,
) -> Result<E>
where
    E: StdError + 'static,
    Er: Into<BoxError>,
{
    match future.await {
        Ok(_) => Err(Error::nothing_thrown::<E>()),
        Err(err) => classify_error::<E, Er>(err),
    }
}

/// Await `future` and return the `E` it fails with.
///
/// # Panics
///
/// Panics when the future resolves to `Ok` or to an error of another type.
pub async fn assert_throws_async<E, T, Er>(
    future: impl Future<Output = std::result::Result<T, Er>>,
) -> E
where
    E: StdError + 'static,
    Er: Into<BoxError>,
{
    match check_throws_async(future).await {
        Ok(caught) => caught,
        Err(err) => panic!("{err}"),
    }
}

/// Await `future` and capture the payload of a panic raised while polling it.
///
/// # Errors
///
/// - [`Error::NothingThrown`] when the future completes normally
/// - [`Error::BadFailureType`] when the payload is not a `P`
pub async fn check_panics_async<P: Any + Send, F: Future>(future: F) -> Result<P> {
    match AssertUnwindSafe(future).catch_unwind().await {
        Ok(_) => Err(Error::nothing_thrown::<P>()),
        Err(payload) => classify_payload(payload),
    }
}

/// Await `future` and return the `P` payload it panics with.
///
/// # Panics
///
/// Panics when the future completes normally or panics with another payload.
pub async fn assert_panics_async<P: Any + Send, F: Future>(future: F) -> P {
    match check_panics_async(future).await {
        Ok(caught) => caught,
        Err(err) => panic!("{err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::num::ParseIntError;

    async fn parse(raw: &str) -> std::result::Result<i64, ParseIntError> {
        raw.parse()
    }

    async fn write_file() -> std::io::Result<()> {
        Err(std::io::Error::new(std::io::ErrorKind::NotFound, "missing"))
    }

    #[tokio::test]
    async fn test_throws_async_captures_error() {
        let err: ParseIntError = assert_throws_async(parse("abc")).await;
        assert_eq!(err.to_string(), "invalid digit found in string");
    }

    #[tokio::test]
    async fn test_throws_async_nothing_thrown() {
        let err = check_throws_async::<ParseIntError, _, _>(parse("12"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::NothingThrown { .. }));
    }

    #[tokio::test]
    async fn test_throws_async_bad_type() {
        let err = check_throws_async::<ParseIntError, _, _>(write_file())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::BadFailureType { .. }));
        assert!(err.to_string().contains("NotFound"));
        assert!(err.to_string().contains("io::error::Error (Custom"));
    }

    #[tokio::test]
    async fn test_panics_async_captures_payload() {
        let message: String = assert_panics_async(async {
            tokio::task::yield_now().await;
            panic!("failed after {} polls", 2);
        })
        .await;
        assert_eq!(message, "failed after 2 polls");
    }

    #[tokio::test]
    async fn test_panics_async_nothing_thrown() {
        let err = check_panics_async::<&str, _>(async { 5 }).await.unwrap_err();
        assert!(err.to_string().starts_with("No failure was raised"));
    }

    #[tokio::test]
    #[should_panic(expected = "Bad failure type")]
    async fn test_assert_panics_async_bad_type() {
        let _: u8 = assert_panics_async(async { panic!("boom") }).await;
    }
}
