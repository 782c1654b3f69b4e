//! A value that may be absent, built as the two-slot sum `Sum![(), T]`.

use core::fmt;

use crate::{
    error::EmptyOptionError,
    index::{U0, U1},
    Sum,
};

/// Presence or absence of a `T`.
///
/// Absence occupies discriminant 0 and presence discriminant 1 of the
/// underlying sum, so equality follows the sum rules: two absent values are
/// equal, absent and present never are, and two present values are equal when
/// their contents are.
///
/// # Examples
///
/// ```rust
/// use tadt::Maybe;
///
/// let five = Maybe::some(5);
/// assert_eq!(five.map(|x| x + 1).get(), Ok(&6));
///
/// let none = Maybe::<i32>::none();
/// assert!(none.is_empty());
/// assert_eq!(none.get_or_else(0), 0);
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Maybe<T>(Sum<((), (T, ()))>);

impl<T> Maybe<T> {
    pub fn none() -> Self {
        Maybe(Sum::new::<(), U0>(()))
    }

    pub fn some(value: T) -> Self {
        Maybe(Sum::new::<T, U1>(value))
    }

    /// Builds from a possibly absent value; `None` maps to [`Maybe::none`].
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Maybe::some(value),
            None => Maybe::none(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.0.discriminant() == 0
    }

    pub fn is_present(&self) -> bool {
        !self.is_empty()
    }

    pub fn get(&self) -> Result<&T, EmptyOptionError> {
        self.0.get::<T, U1>().ok_or(EmptyOptionError)
    }

    pub fn into_inner(self) -> Result<T, EmptyOptionError> {
        self.0.try_unwrap::<T, U1>().map_err(|_| EmptyOptionError)
    }

    pub fn get_or_else(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    pub fn get_or_else_with(self, default: impl FnOnce() -> T) -> T {
        self.into_option().unwrap_or_else(default)
    }

    /// Applies `f` to a present value. `f` is not called when absent.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Maybe<U> {
        self.0
            .fold(t![|()| Maybe::none(), |value: T| Maybe::some(f(value))])
    }

    pub fn as_ref(&self) -> Maybe<&T> {
        match self.get() {
            Ok(value) => Maybe::some(value),
            Err(_) => Maybe::none(),
        }
    }

    pub fn into_option(self) -> Option<T> {
        self.0.fold(t![|()| None, |value: T| Some(value)])
    }

    /// The underlying two-slot sum.
    pub fn into_sum(self) -> Sum![(), T] {
        self.0
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Maybe::none()
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(value: Option<T>) -> Self {
        Maybe::from_option(value)
    }
}

impl<T> From<Maybe<T>> for Option<T> {
    fn from(value: Maybe<T>) -> Self {
        value.into_option()
    }
}

impl<T: fmt::Debug> fmt::Debug for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Ok(value) => f.debug_tuple("Some").field(value).finish(),
            Err(_) => f.write_str("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::Cell, format, string::String};

    use super::*;

    #[test]
    fn absence() {
        let none = Maybe::<String>::none();
        assert!(none.is_empty());
        assert!(!none.is_present());
        assert_eq!(none.get(), Err(EmptyOptionError));
        assert_eq!(none.clone().into_inner(), Err(EmptyOptionError));
        assert_eq!(none.get_or_else_with(|| String::from("dflt")), "dflt");
        assert_eq!(Maybe::<u8>::default(), Maybe::none());
        assert_eq!(Maybe::<u8>::from(None), Maybe::none());
    }

    #[test]
    fn presence() {
        let some = Maybe::some(String::from("v"));
        assert!(some.is_present());
        assert_eq!(some.get().map(String::as_str), Ok("v"));
        assert_eq!(some.as_ref().get(), Ok(&&String::from("v")));
        assert_eq!(some.clone().into_option(), Some(String::from("v")));
        assert_eq!(some.into_inner(), Ok(String::from("v")));
    }

    #[test]
    fn map_skips_absent() {
        let calls = Cell::new(0);
        let none = Maybe::<i32>::none().map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert!(none.is_empty());
        assert_eq!(calls.get(), 0);

        let six = Maybe::some(5).map(|x| {
            calls.set(calls.get() + 1);
            x + 1
        });
        assert_eq!(six.get(), Ok(&6));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn equality() {
        assert_eq!(Maybe::<i32>::none(), Maybe::none());
        assert_ne!(Maybe::none(), Maybe::some(0));
        assert_eq!(Maybe::some(1), Maybe::some(1));
        assert_ne!(Maybe::some(1), Maybe::some(2));
        assert_eq!(format!("{:?}", Maybe::some(1)), "Some(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "None");
    }

    #[test]
    fn clone_and_hash() {
        use std::collections::hash_map::DefaultHasher;
        use std::hash::{Hash, Hasher};

        fn hash<T: Hash>(value: &T) -> u64 {
            let mut h = DefaultHasher::new();
            value.hash(&mut h);
            h.finish()
        }

        let some = Maybe::some(String::from("x"));
        let copy = some.clone();
        assert_eq!(copy, some);
        assert_eq!(hash(&copy), hash(&some));
        assert_eq!(hash(&Maybe::<u8>::none()), hash(&Maybe::<u8>::none()));
        assert_ne!(Maybe::<u8>::none().clone(), Maybe::some(0));
    }
}
