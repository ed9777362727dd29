//! Value kinds the checks are typed over.
//!
//! - [`Primitive`] - integers, floats and `char`, accepted by
//!   [`assert_equals`](super::assert_equals)
//! - [`Number`] - the numeric subset, accepted by the ordering checks
//! - [`TypeClass`] - a named runtime type test used by
//!   [`assert_instance_of`](super::assert_instance_of)

use std::any::{type_name, Any};
use std::cmp::Ordering;
use std::fmt::{self, Debug};

mod sealed {
    pub trait Sealed {}
}

/// A primitive value: any integer type, `f32`, `f64` or `char`.
///
/// This trait is sealed.
pub trait Primitive: sealed::Sealed + Any + Copy + PartialEq + Debug {
    /// Value equality as boxed primitives see it.
    ///
    /// Integers and `char` compare with `==`. Floats compare bit patterns with
    /// every NaN folded into one, so `NaN` equals `NaN` and `0.0` does not
    /// equal `-0.0`.
    fn same_value(&self, other: &Self) -> bool;
}

/// A primitive numeric value.
///
/// This trait is sealed.
pub trait Number: Primitive + PartialOrd {
    /// Total order used by the ordering checks.
    ///
    /// For floats, `-0.0` sorts below `0.0` and NaN sorts above every other
    /// value and equal to itself.
    fn compare(&self, other: &Self) -> Ordering;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                fn same_value(&self, other: &Self) -> bool {
                    self == other
                }
            }

            impl Number for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl sealed::Sealed for $t {}

            impl Primitive for $t {
                fn same_value(&self, other: &Self) -> bool {
                    if self.is_nan() {
                        other.is_nan()
                    } else {
                        self.to_bits() == other.to_bits()
                    }
                }
            }

            impl Number for $t {
                fn compare(&self, other: &Self) -> Ordering {
                    match (self.is_nan(), other.is_nan()) {
                        (true, true) => Ordering::Equal,
                        (true, false) => Ordering::Greater,
                        (false, true) => Ordering::Less,
                        (false, false) => self.total_cmp(other),
                    }
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_float!(f32, f64);

impl sealed::Sealed for char {}

impl Primitive for char {
    fn same_value(&self, other: &Self) -> bool {
        self == other
    }
}

fn is_number(value: &dyn Any) -> bool {
    value.is::<i8>()
        || value.is::<i16>()
        || value.is::<i32>()
        || value.is::<i64>()
        || value.is::<i128>()
        || value.is::<isize>()
        || value.is::<u8>()
        || value.is::<u16>()
        || value.is::<u32>()
        || value.is::<u64>()
        || value.is::<u128>()
        || value.is::<usize>()
        || value.is::<f32>()
        || value.is::<f64>()
}

fn is_string(value: &dyn Any) -> bool {
    value.is::<String>() || value.is::<&'static str>()
}

fn is_primitive(value: &dyn Any) -> bool {
    is_number(value) || value.is::<char>()
}

/// A named runtime type test.
///
/// A class built with [`TypeClass::of`] accepts exactly one concrete type.
/// The family classes ([`number`](TypeClass::number),
/// [`string`](TypeClass::string), [`primitive`](TypeClass::primitive)) accept
/// several, which is how a check can ask for "any number" the way it would ask
/// for a supertype.
///
/// # Example
///
/// ```rust
/// use testkit_assert::assertions::TypeClass;
///
/// assert!(TypeClass::number().is_instance(&5_u8));
/// assert!(TypeClass::of::<String>().is_instance(&String::from("x")));
/// assert!(!TypeClass::string().is_instance(&5));
/// ```
#[derive(Clone, Copy)]
pub struct TypeClass {
    name: &'static str,
    test: fn(&dyn Any) -> bool,
}

impl TypeClass {
    /// Create a class from a name and a type test.
    pub const fn new(name: &'static str, test: fn(&dyn Any) -> bool) -> Self {
        Self { name, test }
    }

    /// Class accepting exactly the concrete type `T`.
    pub fn of<T: Any>() -> Self {
        Self {
            name: type_name::<T>(),
            test: |value| value.is::<T>(),
        }
    }

    /// Class accepting every primitive numeric type.
    pub const fn number() -> Self {
        Self::new("number", is_number)
    }

    /// Class accepting `String` and `&'static str`.
    pub const fn string() -> Self {
        Self::new("string", is_string)
    }

    /// Class accepting every [`Primitive`] type.
    pub const fn primitive() -> Self {
        Self::new("primitive", is_primitive)
    }

    /// Name used in failure messages.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Whether `value` belongs to this class.
    pub fn is_instance(&self, value: &dyn Any) -> bool {
        (self.test)(value)
    }
}

impl Debug for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypeClass").field(&self.name).finish()
    }
}

impl fmt::Display for TypeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_class() {
        let class = TypeClass::number();
        assert!(class.is_instance(&5));
        assert!(class.is_instance(&5_u64));
        assert!(class.is_instance(&2.5_f32));
        assert!(!class.is_instance(&'a'));
        assert!(!class.is_instance(&"5"));
    }

    #[test]
    fn test_string_class() {
        let class = TypeClass::string();
        assert!(class.is_instance(&"abc"));
        assert!(class.is_instance(&String::from("abc")));
        assert!(!class.is_instance(&5));
    }

    #[test]
    fn test_primitive_class() {
        let class = TypeClass::primitive();
        assert!(class.is_instance(&'x'));
        assert!(class.is_instance(&-1_i8));
        assert!(!class.is_instance(&String::new()));
    }

    #[test]
    fn test_concrete_class_is_exact() {
        let class = TypeClass::of::<i32>();
        assert!(class.is_instance(&7_i32));
        assert!(!class.is_instance(&7_i64));
        assert_eq!(class.name(), "i32");
    }

    #[test]
    fn test_float_same_value() {
        assert!(f64::NAN.same_value(&f64::NAN));
        assert!((-f32::NAN).same_value(&f32::NAN));
        assert!(!0.0_f64.same_value(&-0.0));
        assert!(1.5_f32.same_value(&1.5));
        assert!(!1.5_f64.same_value(&f64::NAN));
    }

    #[test]
    fn test_float_compare() {
        assert_eq!(f64::NAN.compare(&f64::INFINITY), Ordering::Greater);
        assert_eq!(f64::NEG_INFINITY.compare(&f64::NAN), Ordering::Less);
        assert_eq!((-f64::NAN).compare(&f64::NAN), Ordering::Equal);
        assert_eq!((-0.0_f32).compare(&0.0), Ordering::Less);
        assert_eq!(2.0_f64.compare(&1.0), Ordering::Greater);
    }

    #[test]
    fn test_integer_compare() {
        assert_eq!(3_u8.compare(&7), Ordering::Less);
        assert_eq!((-1_i64).compare(&-1), Ordering::Equal);
        assert!('a'.same_value(&'a'));
    }

    #[test]
    fn test_custom_class() {
        let even = TypeClass::new("even i32", |v| {
            v.downcast_ref::<i32>().is_some_and(|n| n % 2 == 0)
        });
        assert!(even.is_instance(&4));
        assert!(!even.is_instance(&3));
        assert_eq!(even.to_string(), "even i32");
    }
}
