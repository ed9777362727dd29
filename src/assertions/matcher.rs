// Allow must_use_candidate for matcher factory functions since returning the matcher
// without using it is the common pattern for test setup
#![allow(clippy::must_use_candidate)]

//! Matchers behind the convenience checks.
//!
//! Every `check_*` function in this crate builds one matcher, evaluates it
//! once through [`check_that`] and drops it:
//!
//! - [`Matcher`] trait
//! - [`eq`] - primitive equality against a type-erased value
//! - [`gt`], [`gte`], [`lt`], [`lte`] - numeric ordering ([`NumberMatcher`])
//! - [`contains_str`] - literal substring
//! - [`instance_of`] - runtime type test
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::assertions::matcher::{gt, contains_str, Matcher};
//!
//! let m = gt(10);
//! assert!(m.matches(&20));
//! assert_eq!(Matcher::<i32>::describe(&m), "a number > 10");
//!
//! let m = contains_str("world");
//! assert!(m.matches("hello world"));
//! ```

use std::any::{type_name, Any};
use std::cmp::Ordering;

use tracing::trace;

use crate::error::{Error, Result};

use super::kind::{Number, Primitive, TypeClass};

/// A matcher for testing values.
///
/// # Implementing Custom Matchers
///
/// ```rust
/// use testkit_assert::assertions::matcher::{check_that, Matcher};
///
/// struct IsEven;
///
/// impl Matcher<i32> for IsEven {
///     fn matches(&self, value: &i32) -> bool {
///         value % 2 == 0
///     }
///
///     fn describe(&self) -> String {
///         "is even".to_string()
///     }
///
///     fn describe_mismatch(&self, value: &i32) -> String {
///         format!("{} is not even", value)
///     }
/// }
///
/// assert!(check_that(&4, &IsEven).is_ok());
/// assert!(check_that(&3, &IsEven).is_err());
/// ```
pub trait Matcher<T: ?Sized> {
    /// Check if the value matches.
    fn matches(&self, value: &T) -> bool;

    /// Describe what this matcher expects.
    fn describe(&self) -> String;

    /// Describe why a value didn't match.
    fn describe_mismatch(&self, value: &T) -> String;
}

/// Evaluate `matcher` against `value`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`] carrying the mismatch and the
/// expectation when the value does not match.
pub fn check_that<T: ?Sized, M: Matcher<T> + ?Sized>(value: &T, matcher: &M) -> Result<()> {
    if matcher.matches(value) {
        return Ok(());
    }
    let expected = matcher.describe();
    trace!(%expected, "value did not match");
    Err(Error::assertion_failed(format!(
        "{}\n  expected: {}",
        matcher.describe_mismatch(value),
        expected
    )))
}

/// Assert that a value matches a matcher.
///
/// # Panics
///
/// Panics with a descriptive message if the value doesn't match.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::matcher::{assert_that, lte};
///
/// assert_that(&5_u32, &lte(5_u32));
/// ```
#[track_caller]
pub fn assert_that<T: ?Sized, M: Matcher<T> + ?Sized>(value: &T, matcher: &M) {
    if let Err(err) = check_that(value, matcher) {
        panic!("{err}");
    }
}

// =============================================================================
// Built-in Matchers
// =============================================================================

/// Create an equality matcher for a primitive.
///
/// Like the other matchers here except [`contains_str`], it accepts a value
/// of any type. The value must have the same concrete type as `expected`:
/// `5_i32` does not equal `5_i64`.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, eq};
///
/// let m = eq(42);
/// assert!(m.matches(&42));
/// assert!(!m.matches(&42_u8));
/// assert!(!m.matches(&0));
/// ```
pub fn eq<P: Primitive>(expected: P) -> EqMatcher<P> {
    EqMatcher { expected }
}

/// Matcher for primitive equality.
pub struct EqMatcher<P> {
    expected: P,
}

impl<P: Primitive, T: Any> Matcher<T> for EqMatcher<P> {
    fn matches(&self, value: &T) -> bool {
        let value: &dyn Any = value;
        value
            .downcast_ref::<P>()
            .is_some_and(|actual| actual.same_value(&self.expected))
    }

    fn describe(&self) -> String {
        format!("equals {:?} ({})", self.expected, type_name::<P>())
    }

    fn describe_mismatch(&self, value: &T) -> String {
        let value: &dyn Any = value;
        match value.downcast_ref::<P>() {
            Some(actual) => format!("{:?} does not equal {:?}", actual, self.expected),
            None => format!("`{}` is not a `{}`", type_name::<T>(), type_name::<P>()),
        }
    }
}

/// Matcher comparing a type-erased number against an expected one.
///
/// Holds the expected value, the accepted [`Ordering`]s of
/// `actual.compare(expected)` (see [`Number::compare`]) and the relation's
/// symbol.
pub struct NumberMatcher<N> {
    expected: N,
    accept: fn(Ordering) -> bool,
    symbol: &'static str,
}

impl<N: Number> NumberMatcher<N> {
    /// Create a matcher from an expected value, an ordering predicate and the
    /// symbol shown in descriptions.
    pub fn new(expected: N, accept: fn(Ordering) -> bool, symbol: &'static str) -> Self {
        Self {
            expected,
            accept,
            symbol,
        }
    }
}

impl<N: Number, T: Any> Matcher<T> for NumberMatcher<N> {
    fn matches(&self, value: &T) -> bool {
        let value: &dyn Any = value;
        value
            .downcast_ref::<N>()
            .is_some_and(|actual| (self.accept)(actual.compare(&self.expected)))
    }

    fn describe(&self) -> String {
        format!("a number {} {:?}", self.symbol, self.expected)
    }

    fn describe_mismatch(&self, value: &T) -> String {
        let value: &dyn Any = value;
        match value.downcast_ref::<N>() {
            Some(actual) => format!("was {actual:?}"),
            None => format!("`{}` is not a `{}`", type_name::<T>(), type_name::<N>()),
        }
    }
}

/// Create a greater-than matcher.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, gt};
///
/// let m = gt(10);
/// assert!(m.matches(&20));
/// assert!(!m.matches(&10));
/// ```
pub fn gt<N: Number>(expected: N) -> NumberMatcher<N> {
    NumberMatcher::new(expected, Ordering::is_gt, ">")
}

/// Create a greater-than-or-equal matcher.
pub fn gte<N: Number>(expected: N) -> NumberMatcher<N> {
    NumberMatcher::new(expected, Ordering::is_ge, ">=")
}

/// Create a less-than matcher.
pub fn lt<N: Number>(expected: N) -> NumberMatcher<N> {
    NumberMatcher::new(expected, Ordering::is_lt, "<")
}

/// Create a less-than-or-equal matcher.
pub fn lte<N: Number>(expected: N) -> NumberMatcher<N> {
    NumberMatcher::new(expected, Ordering::is_le, "<=")
}

/// Create a substring contains matcher for strings.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::matcher::{Matcher, contains_str};
///
/// let m = contains_str("world");
/// assert!(m.matches(&"hello world".to_string()));
/// assert!(!m.matches(&"hello".to_string()));
/// ```
pub fn contains_str(substring: &str) -> ContainsStrMatcher {
    ContainsStrMatcher {
        substring: substring.to_string(),
    }
}

/// Matcher for string contains.
pub struct ContainsStrMatcher {
    substring: String,
}

impl Matcher<String> for ContainsStrMatcher {
    fn matches(&self, value: &String) -> bool {
        value.contains(&self.substring)
    }

    fn describe(&self) -> String {
        format!("contains {:?}", self.substring)
    }

    fn describe_mismatch(&self, value: &String) -> String {
        format!("{:?} does not contain {:?}", value, self.substring)
    }
}

impl Matcher<str> for ContainsStrMatcher {
    fn matches(&self, value: &str) -> bool {
        value.contains(&self.substring)
    }

    fn describe(&self) -> String {
        format!("contains {:?}", self.substring)
    }

    fn describe_mismatch(&self, value: &str) -> String {
        format!("{:?} does not contain {:?}", value, self.substring)
    }
}

/// Create a runtime type matcher.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::{matcher::{instance_of, Matcher}, TypeClass};
///
/// let m = instance_of(TypeClass::number());
/// assert!(m.matches(&5));
/// assert!(!m.matches(&"5"));
/// ```
pub fn instance_of(class: TypeClass) -> InstanceOfMatcher {
    InstanceOfMatcher { class }
}

/// Matcher for [`TypeClass`] membership.
pub struct InstanceOfMatcher {
    class: TypeClass,
}

impl<T: Any> Matcher<T> for InstanceOfMatcher {
    fn matches(&self, value: &T) -> bool {
        self.class.is_instance(value)
    }

    fn describe(&self) -> String {
        format!("an instance of {}", self.class)
    }

    fn describe_mismatch(&self, _value: &T) -> String {
        format!("`{}` is not an instance of {}", type_name::<T>(), self.class)
    }
}
