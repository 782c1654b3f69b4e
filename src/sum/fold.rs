//! Exhaustive consumption of a [`Sum`] with one handler per variant.
//!
//! Handlers are passed as a tuple list built with [`t!`], in the same order as
//! the variant types. Leaving out a handler, or passing one too many, fails to
//! compile.
//!
//! [`Sum`]: crate::sum::Sum
//! [`t!`]: crate::t

use core::mem::ManuallyDrop;

use super::repr::{Cons, Nil, SumList};

/// A tuple list of handlers consuming every variant of the type list `S` by
/// value, each producing an `R`.
pub trait Fold<S: SumList, R> {
    #[doc(hidden)]
    unsafe fn fold(self, this: S::Repr, tag: u8) -> R;
}

impl<R> Fold<(), R> for () {
    unsafe fn fold(self, this: Nil, _: u8) -> R {
        match this.0 {}
    }
}

impl<Head, Tail, F, Fs, R> Fold<(Head, Tail), R> for (F, Fs)
where
    Tail: SumList,
    F: FnOnce(Head) -> R,
    Fs: Fold<Tail, R>,
{
    unsafe fn fold(self, this: Cons<Head, Tail::Repr>, tag: u8) -> R {
        let (handler, rest) = self;
        match tag.checked_sub(1) {
            None => handler(ManuallyDrop::into_inner(unsafe { this.data })),
            Some(tag) => unsafe { rest.fold(ManuallyDrop::into_inner(this.next), tag) },
        }
    }
}

/// A tuple list of handlers inspecting every variant of the type list `S` by
/// reference, each producing an `R`.
pub trait FoldRef<'a, S: SumList, R> {
    #[doc(hidden)]
    unsafe fn fold_ref(self, this: &'a S::Repr, tag: u8) -> R;
}

impl<'a, R> FoldRef<'a, (), R> for () {
    unsafe fn fold_ref(self, this: &'a Nil, _: u8) -> R {
        match this.0 {}
    }
}

impl<'a, Head, Tail, F, Fs, R> FoldRef<'a, (Head, Tail), R> for (F, Fs)
where
    Head: 'a,
    Tail: SumList,
    F: FnOnce(&'a Head) -> R,
    Fs: FoldRef<'a, Tail, R>,
{
    unsafe fn fold_ref(self, this: &'a Cons<Head, Tail::Repr>, tag: u8) -> R {
        let (handler, rest) = self;
        match tag.checked_sub(1) {
            None => handler(unsafe { &*this.data }),
            Some(tag) => unsafe { rest.fold_ref(&*this.next, tag) },
        }
    }
}
