//! Value checks: primitive equality, numeric ordering, substring containment
//! and runtime type membership.
//!
//! Each check exists twice. `check_*` returns a [`Result`](crate::Result)
//! and `assert_*` panics with the error's message, which is what a test wants.
//!
//! The `actual` side of every check except [`assert_contains`] is taken as any
//! `'static` value, so a test can pass whatever it has in hand and have the
//! type verified along with the value.
//!
//! # Example
//!
//! ```rust
//! use testkit_assert::assertions::{assert_contains, assert_equals, assert_gt, assert_lte};
//!
//! assert_equals(3_u16, &3_u16);
//! assert_gt(5, &6);
//! assert_lte(5, &5);
//! assert_contains("abc", "xxabcyy");
//! ```

use std::any::Any;

use crate::error::Result;

use super::kind::{Number, Primitive, TypeClass};
use super::matcher::{
    assert_that, check_that, contains_str, eq, gt, gte, instance_of, lt, lte,
};

/// Check that `actual` is a `P` equal to `expected`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`](crate::Error::AssertionFailed) when the
/// types differ or the values are not equal.
pub fn check_equals<P: Primitive, T: Any>(expected: P, actual: &T) -> Result<()> {
    check_that(actual, &eq(expected))
}

/// Assert that `actual` is a `P` equal to `expected`.
///
/// # Panics
///
/// Panics when the types differ or the values are not equal.
#[track_caller]
pub fn assert_equals<P: Primitive, T: Any>(expected: P, actual: &T) {
    assert_that(actual, &eq(expected));
}

/// Check that `actual` is an `N` greater than `expected`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`](crate::Error::AssertionFailed) when
/// `actual` is not an `N` or the relation does not hold.
pub fn check_gt<N: Number, T: Any>(expected: N, actual: &T) -> Result<()> {
    check_that(actual, &gt(expected))
}

/// Check that `actual` is an `N` greater than or equal to `expected`.
///
/// # Errors
///
/// See [`check_gt`].
pub fn check_gte<N: Number, T: Any>(expected: N, actual: &T) -> Result<()> {
    check_that(actual, &gte(expected))
}

/// Check that `actual` is an `N` less than `expected`.
///
/// # Errors
///
/// See [`check_gt`].
pub fn check_lt<N: Number, T: Any>(expected: N, actual: &T) -> Result<()> {
    check_that(actual, &lt(expected))
}

/// Check that `actual` is an `N` less than or equal to `expected`.
///
/// # Errors
///
/// See [`check_gt`].
pub fn check_lte<N: Number, T: Any>(expected: N, actual: &T) -> Result<()> {
    check_that(actual, &lte(expected))
}

/// Assert that `actual` is an `N` greater than `expected`.
///
/// # Panics
///
/// Panics with `a number > expected` when `actual` has another type or is not
/// greater.
#[track_caller]
pub fn assert_gt<N: Number, T: Any>(expected: N, actual: &T) {
    assert_that(actual, &gt(expected));
}

/// Assert that `actual` is an `N` greater than or equal to `expected`.
///
/// # Panics
///
/// See [`assert_gt`].
#[track_caller]
pub fn assert_gte<N: Number, T: Any>(expected: N, actual: &T) {
    assert_that(actual, &gte(expected));
}

/// Assert that `actual` is an `N` less than `expected`.
///
/// # Panics
///
/// See [`assert_gt`].
#[track_caller]
pub fn assert_lt<N: Number, T: Any>(expected: N, actual: &T) {
    assert_that(actual, &lt(expected));
}

/// Assert that `actual` is an `N` less than or equal to `expected`.
///
/// # Panics
///
/// See [`assert_gt`].
#[track_caller]
pub fn assert_lte<N: Number, T: Any>(expected: N, actual: &T) {
    assert_that(actual, &lte(expected));
}

/// Check that `actual` contains `substring` literally.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`](crate::Error::AssertionFailed) when the
/// substring is absent.
pub fn check_contains(substring: &str, actual: &str) -> Result<()> {
    check_that(actual, &contains_str(substring))
}

/// Assert that `actual` contains `substring` literally.
///
/// # Panics
///
/// Panics when the substring is absent.
#[track_caller]
pub fn assert_contains(substring: &str, actual: &str) {
    assert_that(actual, &contains_str(substring));
}

/// Check that `object` belongs to `class`.
///
/// # Errors
///
/// Returns [`Error::AssertionFailed`](crate::Error::AssertionFailed) when it
/// does not.
pub fn check_instance_of<T: Any>(class: TypeClass, object: &T) -> Result<()> {
    check_that(object, &instance_of(class))
}

/// Assert that `object` belongs to `class`.
///
/// # Panics
///
/// Panics when it does not.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::{assert_instance_of, TypeClass};
///
/// assert_instance_of(TypeClass::number(), &5);
/// assert_instance_of(TypeClass::of::<Vec<u8>>(), &vec![1_u8]);
/// ```
#[track_caller]
pub fn assert_instance_of<T: Any>(class: TypeClass, object: &T) {
    assert_that(object, &instance_of(class));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equals_every_primitive() {
        assert_equals(1_i8, &1_i8);
        assert_equals(1_i16, &1_i16);
        assert_equals(1_i32, &1_i32);
        assert_equals(1_i64, &1_i64);
        assert_equals(1_u8, &1_u8);
        assert_equals(1_usize, &1_usize);
        assert_equals(1.5_f32, &1.5_f32);
        assert_equals(1.5_f64, &1.5_f64);
        assert_equals('c', &'c');
    }

    #[test]
    fn test_equals_rejects_other_value() {
        let err = check_equals(1_i32, &2_i32).unwrap_err();
        assert!(err.to_string().contains("2 does not equal 1"));
    }

    #[test]
    fn test_equals_rejects_other_type() {
        let err = check_equals(1_i32, &1_i64).unwrap_err();
        assert!(err.to_string().contains("`i64` is not a `i32`"));
        assert!(check_equals('1', &"1").is_err());
    }

    #[test]
    fn test_equals_nan_equals_nan() {
        assert_equals(f64::NAN, &f64::NAN);
        assert_equals(f32::NAN, &-f32::NAN);
        assert!(check_equals(f64::NAN, &1.0_f64).is_err());
    }

    #[test]
    fn test_equals_distinguishes_signed_zero() {
        let err = check_equals(0.0_f64, &-0.0_f64).unwrap_err();
        assert!(err.to_string().contains("-0.0 does not equal 0.0"));
        assert!(check_equals(-0.0_f32, &0.0_f32).is_err());
        assert_equals(-0.0_f64, &-0.0_f64);
    }

    #[test]
    #[should_panic(expected = "does not equal")]
    fn test_assert_equals_panics() {
        assert_equals(b'a', &b'b');
    }

    #[test]
    fn test_gt() {
        assert!(check_gt(5, &6).is_ok());
        assert!(check_gt(5, &5).is_err());
        assert!(check_gt(5, &4).is_err());
    }

    #[test]
    fn test_gte() {
        assert!(check_gte(5, &6).is_ok());
        assert!(check_gte(5, &5).is_ok());
        assert!(check_gte(5, &4).is_err());
    }

    #[test]
    fn test_lt() {
        assert!(check_lt(5, &4).is_ok());
        assert!(check_lt(5, &5).is_err());
        assert!(check_lt(5, &6).is_err());
    }

    #[test]
    fn test_lte() {
        assert!(check_lte(5, &5).is_ok());
        assert!(check_lte(5, &4).is_ok());
        assert!(check_lte(5, &6).is_err());
    }

    #[test]
    fn test_ordering_requires_same_type() {
        assert!(check_gt(5_i32, &6_i64).is_err());
        assert!(check_lt(5.0_f64, &4.0_f32).is_err());
        assert!(check_gte(5_u8, &"6").is_err());
    }

    #[test]
    fn test_ordering_floats() {
        assert!(check_gt(0.1_f64, &0.2_f64).is_ok());
        assert!(check_lte(f64::NAN, &1.0_f64).is_ok());
        assert!(check_gte(1.0_f64, &f64::NAN).is_ok());
        assert!(check_gte(f64::NAN, &f64::NAN).is_ok());
        assert!(check_lt(f64::NAN, &f64::NAN).is_err());
        assert!(check_gt(f32::MAX, &f32::NAN).is_ok());
    }

    #[test]
    fn test_ordering_signed_zero() {
        assert!(check_gt(-0.0_f64, &0.0_f64).is_ok());
        assert!(check_lt(0.0_f64, &-0.0_f64).is_ok());
        assert!(check_lte(-0.0_f32, &0.0_f32).is_err());
    }

    #[test]
    fn test_ordering_failure_message() {
        let err = check_gt(5, &4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Assertion failed: was 4\n  expected: a number > 5"
        );
    }

    #[test]
    #[should_panic(expected = "a number <= 5")]
    fn test_assert_lte_panics() {
        assert_lte(5, &6);
    }

    #[test]
    #[should_panic(expected = "a number < 5")]
    fn test_assert_lt_panics() {
        assert_lt(5, &5);
    }

    #[test]
    fn test_contains() {
        assert_contains("abc", "xxabcyy");
        assert_contains("", "anything");
        assert!(check_contains("abc", "xyz").is_err());
        assert!(check_contains("ABC", "abc").is_err());
    }

    #[test]
    #[should_panic(expected = "does not contain \"abc\"")]
    fn test_assert_contains_panics() {
        assert_contains("abc", "xyz");
    }

    #[test]
    fn test_instance_of() {
        assert_instance_of(TypeClass::number(), &5);
        assert_instance_of(TypeClass::string(), &"five");
        assert!(check_instance_of(TypeClass::string(), &5).is_err());
        assert!(check_instance_of(TypeClass::of::<u32>(), &5_i32).is_err());
    }

    #[test]
    #[should_panic(expected = "`i32` is not an instance of string")]
    fn test_assert_instance_of_panics() {
        assert_instance_of(TypeClass::string(), &5);
    }
}
