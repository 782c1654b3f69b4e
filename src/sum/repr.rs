//! The module dealing with the underlying representation of the [`Sum`] type.
//!
//! # Implementation details
//!
//! A sum type is a hand-written tagged union. In other words, the memory
//! layout of a sum type resembles a tagged union:
//!
//! ```rust,no_run
//! # use core::convert::Infallible;
//! # use core::mem::ManuallyDrop;
//!
//! struct Nil(Infallible);
//! union Cons<T, Next> {
//!     data: ManuallyDrop<T>,
//!     next: ManuallyDrop<Next>,
//! }
//!
//! // For example only. Not actually defined.
//! struct RawSum2<T1, T2> {
//!     tag: u8,
//!     data: Cons<T1, Cons<T2, Nil>>,
//! }
//! ```
//!
//! Every operation walks the type list and the tag in lockstep: tag `0`
//! selects `data`, any other tag descends into `next` with the tag decremented.
//!
//! [`Sum`]: crate::sum::Sum

use core::{convert::Infallible, mem::ManuallyDrop};

use crate::index::{Count, Index, UInt, UTerm};

/// The terminator type of the underlying union of the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub struct Nil(pub(crate) Infallible);

/// The accumulator type of the underlying union of the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub union Cons<T, U> {
    pub(crate) data: ManuallyDrop<T>,
    pub(crate) next: ManuallyDrop<U>,
}

/// The trait that type lists implement to support its corresponding tagged
/// union representation for the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub trait SumList: Count + Sized {
    /// The underlying representation of the `Sum` type.
    type Repr;

    #[doc(hidden)]
    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8);
}

impl SumList for () {
    type Repr = Nil;

    unsafe fn drop(_: &mut ManuallyDrop<Nil>, _: u8) {}
}

impl<Head, Tail> SumList for (Head, Tail)
where
    Tail: SumList,
{
    type Repr = Cons<Head, Tail::Repr>;

    unsafe fn drop(this: &mut ManuallyDrop<Self::Repr>, tag: u8) {
        if tag == 0 {
            unsafe { ManuallyDrop::drop(&mut this.data) };
        } else {
            unsafe { Tail::drop(&mut this.next, tag - 1) }
        }
    }
}

/// The trait that type lists implement to support manipulating a specified
/// variant value marked by a specified index tag in the [`Sum`] type.
///
/// [`Sum`]: crate::sum::Sum
pub trait Split<T, U: Index>: SumList {
    /// The remainder type list from splitting type list `Self` with type `T`
    /// and its index tag `U`.
    type Remainder: SumList;

    #[doc(hidden)]
    fn from_data(data: T) -> Self::Repr;

    #[doc(hidden)]
    unsafe fn get_unchecked(this: &Self::Repr) -> &T;

    #[doc(hidden)]
    unsafe fn take(
        this: Self::Repr,
        tag: u8,
    ) -> Result<T, (u8, <Self::Remainder as SumList>::Repr)>;
}

impl<Head, Tail> Split<Head, UTerm> for (Head, Tail)
where
    Tail: SumList,
{
    type Remainder = Tail;

    fn from_data(data: Head) -> Self::Repr {
        Cons {
            data: ManuallyDrop::new(data),
        }
    }

    unsafe fn get_unchecked(this: &Self::Repr) -> &Head {
        unsafe { &*this.data }
    }

    unsafe fn take(
        this: Self::Repr,
        tag: u8,
    ) -> Result<Head, (u8, <Self::Remainder as SumList>::Repr)> {
        match tag.checked_sub(1) {
            None => Ok(ManuallyDrop::into_inner(unsafe { this.data })),
            Some(tag) => Err((tag, ManuallyDrop::into_inner(unsafe { this.next }))),
        }
    }
}

impl<Head, Tail, T, U: Index> Split<T, UInt<U>> for (Head, Tail)
where
    Tail: Split<T, U>,
{
    type Remainder = (Head, <Tail as Split<T, U>>::Remainder);

    fn from_data(data: T) -> Self::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_data(data)),
        }
    }

    unsafe fn get_unchecked(this: &Self::Repr) -> &T {
        unsafe { Tail::get_unchecked(&*this.next) }
    }

    unsafe fn take(
        this: Self::Repr,
        tag: u8,
    ) -> Result<T, (u8, <Self::Remainder as SumList>::Repr)> {
        if tag == 0 {
            return Err((0, Cons { data: unsafe { this.data } }));
        }
        let next = ManuallyDrop::into_inner(unsafe { this.next });
        match unsafe { Tail::take(next, tag - 1) } {
            Ok(data) => Ok(data),
            Err((tag, rest)) => Err((
                tag + 1,
                Cons {
                    next: ManuallyDrop::new(rest),
                },
            )),
        }
    }
}

/// The trait that type lists implement to be widened by one trailing type `X`
/// while keeping every existing tag in place.
pub trait Append<X>: SumList {
    /// The type list with `X` appended.
    type Output: SumList;

    #[doc(hidden)]
    unsafe fn widen(this: Self::Repr, tag: u8) -> <Self::Output as SumList>::Repr;

    #[doc(hidden)]
    fn from_last(data: X) -> <Self::Output as SumList>::Repr;
}

impl<X> Append<X> for () {
    type Output = (X, ());

    unsafe fn widen(this: Nil, _: u8) -> <Self::Output as SumList>::Repr {
        match this.0 {}
    }

    fn from_last(data: X) -> <Self::Output as SumList>::Repr {
        Cons {
            data: ManuallyDrop::new(data),
        }
    }
}

impl<X, Head, Tail> Append<X> for (Head, Tail)
where
    Tail: Append<X>,
{
    type Output = (Head, Tail::Output);

    unsafe fn widen(this: Self::Repr, tag: u8) -> <Self::Output as SumList>::Repr {
        if tag == 0 {
            return Cons { data: unsafe { this.data } };
        }
        let next = ManuallyDrop::into_inner(unsafe { this.next });
        Cons {
            next: ManuallyDrop::new(unsafe { Tail::widen(next, tag - 1) }),
        }
    }

    fn from_last(data: X) -> <Self::Output as SumList>::Repr {
        Cons {
            next: ManuallyDrop::new(Tail::from_last(data)),
        }
    }
}
