//! Type-directed construction of a [`Sum`] from a [`Dynamic`] value.
//!
//! The candidate types of a sum are tried in their declared order and the
//! value lands in the slot of the first candidate that accepts it. A value may
//! be accepted by several candidates (an `i32` is both an `i32` and a
//! [`Number`]); the earliest one wins.

use alloc::string::String;
use core::any;

use crate::{
    error::UnmatchedTypeError,
    index::{Count, Index, UTerm},
    sum::{
        repr::{Append, SumList},
        Appended,
    },
    Dynamic, Sum,
};

/// A type that a [`Dynamic`] value may be an instance of.
pub trait Candidate: Sized {
    /// Takes the value if it is an instance of `Self`, or hands it back.
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic>;
}

impl Candidate for Dynamic {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        Ok(value)
    }
}

candidate!(
    (),
    bool,
    char,
    i8,
    i16,
    i32,
    i64,
    i128,
    isize,
    u8,
    u16,
    u32,
    u64,
    u128,
    usize,
    f32,
    f64,
    String,
    &'static str,
);

/// Any primitive number, widened to the largest type of its kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Signed(i128),
    Unsigned(u128),
    Float(f64),
}

impl Candidate for Number {
    fn from_dynamic(value: Dynamic) -> Result<Self, Dynamic> {
        macro_rules! widen {
            ($($t:ty => $variant:ident($wide:ty)),* $(,)?) => {$(
                if let Some(&n) = value.downcast_ref::<$t>() {
                    return Ok(Number::$variant(n as $wide));
                }
            )*};
        }

        widen!(
            i8 => Signed(i128),
            i16 => Signed(i128),
            i32 => Signed(i128),
            i64 => Signed(i128),
            i128 => Signed(i128),
            isize => Signed(i128),
            u8 => Unsigned(u128),
            u16 => Unsigned(u128),
            u32 => Unsigned(u128),
            u64 => Unsigned(u128),
            u128 => Unsigned(u128),
            usize => Unsigned(u128),
            f32 => Float(f64),
            f64 => Float(f64),
        );
        Err(value)
    }
}

/// A type list whose every element is a [`Candidate`].
pub trait Candidates: SumList {
    /// Places `value` in the slot of the first accepting candidate.
    fn dispatch(value: Dynamic) -> Result<Sum<Self>, Dynamic>;
}

impl Candidates for () {
    fn dispatch(value: Dynamic) -> Result<Sum<Self>, Dynamic> {
        Err(value)
    }
}

impl<Head, Tail> Candidates for (Head, Tail)
where
    Head: Candidate,
    Tail: Candidates,
{
    fn dispatch(value: Dynamic) -> Result<Sum<Self>, Dynamic> {
        match Head::from_dynamic(value) {
            Ok(head) => Ok(Sum::new::<Head, UTerm>(head)),
            Err(value) => {
                tracing::trace!(
                    candidate = any::type_name::<Head>(),
                    value = value.type_name(),
                    "candidate rejected value"
                );
                Tail::dispatch(value).map(|rest| rest.prepend::<Head>())
            }
        }
    }
}

/// Builds the sum whose slot is the first candidate `value` is an instance of.
///
/// # Examples
///
/// ```rust
/// use tadt::{dispatch::{match_to_sum, Number}, Dynamic, Sum};
///
/// let s: Sum![i32, Number] = match_to_sum(Dynamic::new(5)).unwrap();
/// assert_eq!(s.discriminant(), 0);
///
/// let s: Sum![Number, i32] = match_to_sum(Dynamic::new(5)).unwrap();
/// assert_eq!(s.discriminant(), 0);
/// assert_eq!(s.get::<Number, _>(), Some(&Number::Signed(5)));
///
/// let err = match_to_sum::<tadt::T![i32, bool]>(Dynamic::new("x")).unwrap_err();
/// assert_eq!(err.arity(), 2);
/// ```
pub fn match_to_sum<S: Candidates>(value: Dynamic) -> Result<Sum<S>, UnmatchedTypeError> {
    S::dispatch(value).map_err(|value| {
        tracing::debug!(
            value = value.type_name(),
            arity = S::ARITY,
            "value matches no candidate"
        );
        UnmatchedTypeError::new(&value, S::ARITY)
    })
}

/// Like [`match_to_sum`], but hands an unmatched value to `fallback` and
/// returns its result unchecked.
pub fn match_to_sum_or_else<S, F>(value: Dynamic, fallback: F) -> Sum<S>
where
    S: Candidates,
    F: FnOnce(Dynamic) -> Sum<S>,
{
    S::dispatch(value).unwrap_or_else(|value| {
        tracing::debug!(value = value.type_name(), "falling back for unmatched value");
        fallback(value)
    })
}

/// The total variant of [`match_to_sum`]: the sum gains a trailing
/// [`Dynamic`] slot that keeps any value no candidate accepts.
///
/// # Examples
///
/// ```rust
/// use tadt::{dispatch::match_to_sum_total, Dynamic, Sum};
///
/// let s: Sum![i32, bool, Dynamic] = match_to_sum_total::<tadt::T![i32, bool]>(Dynamic::new("x"));
/// assert_eq!(s.discriminant(), 2);
/// ```
pub fn match_to_sum_total<S>(value: Dynamic) -> Sum<Appended<S, Dynamic>>
where
    S: Candidates + Append<Dynamic>,
{
    match S::dispatch(value) {
        Ok(sum) => sum.append::<Dynamic>(),
        Err(value) => {
            tracing::trace!(value = value.type_name(), "value kept in catch-all slot");
            Sum::from_parts(<<S as Count>::Count as Index>::TAG, S::from_last(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::string::{String, ToString};

    use super::*;
    use crate::index::*;

    #[test]
    fn first_match_wins() {
        let s: Sum![i32, Number] = match_to_sum(Dynamic::new(5)).unwrap();
        assert_eq!(s.discriminant(), 0);
        assert_eq!(s.get::<i32, _>(), Some(&5));

        let s: Sum![Number, i32] = match_to_sum(Dynamic::new(5)).unwrap();
        assert_eq!(s.discriminant(), 0);
        assert_eq!(s.get::<Number, _>(), Some(&Number::Signed(5)));

        let s: Sum![Dynamic, i32] = match_to_sum(Dynamic::new(5)).unwrap();
        assert_eq!(s.discriminant(), 0);
    }

    #[test]
    fn numbers_of_every_width() {
        let s: Sum![bool, Number] = match_to_sum(Dynamic::new(7_i128)).unwrap();
        assert_eq!(s.get::<Number, _>(), Some(&Number::Signed(7)));

        let s: Sum![bool, Number] = match_to_sum(Dynamic::new(u128::MAX)).unwrap();
        assert_eq!(s.get::<Number, _>(), Some(&Number::Unsigned(u128::MAX)));

        let s: Sum![bool, Number] = match_to_sum(Dynamic::new(-3_i8)).unwrap();
        assert_eq!(s.get::<Number, _>(), Some(&Number::Signed(-3)));

        let s: Sum![bool, Number] = match_to_sum(Dynamic::new(0.5_f32)).unwrap();
        assert_eq!(s.get::<Number, _>(), Some(&Number::Float(0.5)));
    }

    #[test]
    fn full_arity() {
        type Nine = T![u8, u16, u32, u64, i8, i16, i32, i64, char];

        let s: Sum<Nine> = match_to_sum(Dynamic::new('z')).unwrap();
        assert_eq!(s.discriminant(), 8);
        assert_eq!(s.arity(), 9);
        assert_eq!(s.get::<char, _>(), Some(&'z'));

        let s = match_to_sum_total::<Nine>(Dynamic::new("none of them"));
        assert_eq!(s.discriminant(), 9);
        assert_eq!(s.arity(), 10);
        assert_eq!(
            s.get::<Dynamic, U9>().and_then(Dynamic::downcast_ref::<&str>),
            Some(&"none of them")
        );

        let p = crate::Product::new(t![1_u8, 2_u16, 3_u32, 4_u64, 5_i8, 6_i16, 7_i32, 8_i64, 'z']);
        assert_eq!(p.arity(), 9);
        assert_eq!(*p.get::<U8>(), 'z');
        assert_eq!(p.value_at(9).unwrap().downcast_ref::<char>(), Some(&'z'));
        assert_eq!(p.value_at(10).unwrap_err().arity(), 9);
    }

    #[test]
    fn later_candidate() {
        let s: Sum![String, i64, Dynamic] = match_to_sum(Dynamic::new(42_i64)).unwrap();
        assert_eq!(s.discriminant(), 1);
        assert_eq!(s.get::<i64, _>(), Some(&42));
        assert_eq!(s.get::<String, _>(), None);
        assert_eq!(s.get::<Dynamic, _>(), None);
    }

    #[test]
    fn unmatched() {
        let err = match_to_sum::<T![i32, bool]>(Dynamic::new("x")).unwrap_err();
        assert_eq!(err.repr(), "\"x\"");
        assert_eq!(err.arity(), 2);

        let err = match_to_sum::<T![]>(Dynamic::new(1_u8)).unwrap_err();
        assert_eq!(err.arity(), 0);
    }

    #[test]
    fn fallback() {
        let s: Sum![i32, String] =
            match_to_sum_or_else(Dynamic::new(1.5_f64), |value| Sum::new(format_dyn(&value)));
        assert_eq!(s.get::<String, _>().map(String::as_str), Some("1.5"));

        let s: Sum![i32, String] =
            match_to_sum_or_else(Dynamic::new(3), |_| unreachable!("3 is an i32"));
        assert_eq!(s.get::<i32, _>(), Some(&3));
    }

    fn format_dyn(value: &Dynamic) -> String {
        std::format!("{value:?}")
    }

    #[test]
    fn total() {
        let s = match_to_sum_total::<T![i32, bool]>(Dynamic::new("x"));
        assert_eq!(s.discriminant(), 2);
        assert_eq!(s.arity(), 3);
        let caught = s.get::<Dynamic, _>().unwrap();
        assert_eq!(caught.downcast_ref::<&str>(), Some(&"x"));

        let s = match_to_sum_total::<T![i32, bool]>(Dynamic::new(true));
        assert_eq!(s.discriminant(), 1);
        assert_eq!(s.try_unwrap::<bool, U1>(), Ok(true));

        let s = match_to_sum_total::<T![]>(Dynamic::new('c'));
        assert_eq!(s.into_inner().downcast::<char>(), Ok('c'));
    }

    #[test]
    fn user_candidates() {
        #[derive(Debug, PartialEq)]
        struct Label(&'static str);
        candidate!(Label);

        let s: Sum![u8, Label] = match_to_sum(Dynamic::new(Label("l"))).unwrap();
        assert_eq!(s.fold(t![|n: u8| n.to_string(), |l: Label| l.0.to_string()]), "l");
    }
}
