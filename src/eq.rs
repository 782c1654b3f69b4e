//! Structural equality with a fast referential and type-based path.
//!
//! Absence is modelled with [`Option`]: two absent values are always equal,
//! an absent and a present value never are.

use core::{any::Any, ptr};

/// Decides equality without looking at the values when possible.
///
/// Returns `Some(true)` when both sides are absent or `b` is the very same
/// object as `a`, `Some(false)` when exactly one side is absent or `b` is not
/// a `T`, and `None` when a value comparison is required.
///
/// # Examples
///
/// ```rust
/// use tadt::eq::fast_equals;
///
/// let x = 5_i32;
/// assert_eq!(fast_equals(Some(&x), Some(&x)), Some(true));
/// assert_eq!(fast_equals(Some(&x), Some(&"5")), Some(false));
/// assert_eq!(fast_equals(Some(&x), Some(&5_i32)), None);
/// assert_eq!(fast_equals::<i32>(None, None), Some(true));
/// ```
pub fn fast_equals<T: Any>(a: Option<&T>, b: Option<&dyn Any>) -> Option<bool> {
    match (a, b) {
        (None, None) => Some(true),
        (None, Some(_)) | (Some(_), None) => Some(false),
        (Some(_), Some(b)) if !b.is::<T>() => Some(false),
        (Some(a), Some(b)) if same_object(a, b) => Some(true),
        (Some(_), Some(_)) => None,
    }
}

/// [`fast_equals`], falling back to `T`'s value equality when undecided.
pub fn structurally_equals<T: Any + PartialEq>(a: Option<&T>, b: Option<&dyn Any>) -> bool {
    fast_equals(a, b).unwrap_or_else(|| match (a, b.and_then(|b| b.downcast_ref::<T>())) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    })
}

/// The fast path for two values already known to share a type: identity
/// first, then value equality.
pub fn slot_equals<T: PartialEq + ?Sized>(a: &T, b: &T) -> bool {
    ptr::eq(a, b) || a == b
}

fn same_object<T: Any>(a: &T, b: &dyn Any) -> bool {
    ptr::eq(a as *const T as *const (), b as *const dyn Any as *const ())
}

/// Structural equality against a value of unknown type.
pub trait Structural: Any {
    fn structurally_equals(&self, other: &dyn Any) -> bool;
}

impl<T: Any + PartialEq> Structural for T {
    fn structurally_equals(&self, other: &dyn Any) -> bool {
        structurally_equals(Some(self), Some(other))
    }
}

#[cfg(test)]
mod tests {
    use std::string::String;

    use super::*;
    use crate::Maybe;

    #[test]
    fn fast_path() {
        let x = String::from("x");
        let y = String::from("x");

        assert_eq!(fast_equals(Some(&x), Some(&x)), Some(true));
        assert_eq!(fast_equals(Some(&x), None), Some(false));
        assert_eq!(fast_equals::<String>(None, Some(&y)), Some(false));
        assert_eq!(fast_equals(Some(&x), Some(&1_u8)), Some(false));
        assert_eq!(fast_equals(Some(&x), Some(&y)), None);
    }

    #[test]
    fn absent_values_are_equal_across_types() {
        assert_eq!(fast_equals::<u8>(None, None), Some(true));
        assert!(structurally_equals::<String>(None, None));
        assert!(!structurally_equals(Some(&1_u8), None));
    }

    #[test]
    fn identity_needs_matching_type() {
        #[derive(PartialEq)]
        struct Wrapper(u32);

        let w = Wrapper(3);
        // `w` and `w.0` share an address but are different objects.
        assert_eq!(fast_equals(Some(&w), Some(&w.0)), Some(false));
    }

    #[test]
    fn falls_back_to_values() {
        let nan = f64::NAN;
        assert!(structurally_equals(Some(&nan), Some(&nan)));
        assert!(!structurally_equals(Some(&nan), Some(&f64::NAN)));

        assert!(structurally_equals(Some(&String::from("a")), Some(&String::from("a"))));
        assert!(!structurally_equals(Some(&String::from("a")), Some(&String::from("b"))));
    }

    #[test]
    fn dynamic_comparison() {
        let short = product![1, 2];
        let long = product![1, 2, 3];

        assert!(short.structurally_equals(&product![1, 2]));
        assert!(!short.structurally_equals(&long));
        assert!(Maybe::some(4).structurally_equals(&Maybe::some(4)));
        assert!(!Maybe::some(4).structurally_equals(&Maybe::<i32>::none()));
    }
}
