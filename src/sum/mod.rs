//! The tagged sum type and its operations.

use core::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
    ops::Deref,
    ptr,
};

pub mod derive;
pub mod fold;
pub mod repr;

use self::{
    fold::{Fold, FoldRef},
    repr::{Append, Split, SumList},
};
use crate::{
    index::{Index, UTerm},
    Maybe,
};

pub type Repr<S> = <S as SumList>::Repr;
pub type Rem<S, T, U> = <S as Split<T, U>>::Remainder;
pub type Appended<S, X> = <S as Append<X>>::Output;

/// A closed tagged union over the types of the type list `S`.
///
/// Exactly one variant is populated at any time, identified by its
/// 0-based [`discriminant`](Sum::discriminant). Values are immutable once
/// built: the only ways to read a variant are the checked accessors and the
/// exhaustive [`fold`](Sum::fold).
///
/// Use the [`Sum!`](crate::Sum!) macro to spell the type.
pub struct Sum<S: SumList> {
    tag: u8,
    data: ManuallyDrop<Repr<S>>,
}

impl<T> From<T> for Sum![T] {
    /// Construct a `Sum` of one type from a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tadt::Sum;
    ///
    /// let s: Sum![i32] = 42.into();
    /// assert_eq!(*s, 42);
    /// ```
    fn from(value: T) -> Self {
        Sum::new(value)
    }
}

impl<T> Deref for Sum![T] {
    type Target = T;

    fn deref(&self) -> &Self::Target {
        unsafe { <(T, ()) as Split<T, UTerm>>::get_unchecked(&*self.data) }
    }
}

impl<T> Sum![T] {
    pub fn into_inner(self) -> T {
        match self.try_unwrap::<T, UTerm>() {
            Ok(value) => value,
            Err(rest) => rest.unreachable(),
        }
    }
}

impl Sum![] {
    /// Eliminates a value that cannot exist.
    pub fn unreachable(self) -> ! {
        match self.data.0 {}
    }
}

impl<S: SumList> Sum<S> {
    pub(crate) fn from_parts(tag: u8, data: Repr<S>) -> Self {
        Sum {
            tag,
            data: ManuallyDrop::new(data),
        }
    }

    fn into_parts(self) -> (u8, Repr<S>) {
        let mut this = ManuallyDrop::new(self);
        let data = unsafe { ManuallyDrop::take(&mut this.data) };
        (this.tag, data)
    }
}

impl<S: SumList> Sum<S> {
    /// Creates the variant holding `value` in the slot of index `U`.
    ///
    /// The slot is found from the value's type when it appears only once in
    /// `S`; otherwise name the index explicitly.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tadt::{index::U1, Sum};
    ///
    /// let a: Sum![i32, String] = Sum::new(7);
    /// assert_eq!(a.discriminant(), 0);
    ///
    /// let b: Sum![i32, i32] = Sum::new::<_, U1>(7);
    /// assert_eq!(b.discriminant(), 1);
    /// ```
    pub fn new<T, U>(value: T) -> Self
    where
        S: Split<T, U>,
        U: Index,
    {
        Self::from_parts(U::TAG, S::from_data(value))
    }

    /// The 0-based index of the populated slot.
    pub fn discriminant(&self) -> u8 {
        self.tag
    }

    /// The number of slots of this sum type.
    pub fn arity(&self) -> usize {
        S::ARITY
    }

    pub fn is<T, U>(&self) -> bool
    where
        S: Split<T, U>,
        U: Index,
    {
        self.tag == U::TAG
    }

    pub fn get<T, U>(&self) -> Option<&T>
    where
        S: Split<T, U>,
        U: Index,
    {
        (self.tag == U::TAG).then(|| unsafe { S::get_unchecked(&*self.data) })
    }

    /// Like [`get`](Sum::get), answered with a [`Maybe`].
    pub fn try_get<T, U>(&self) -> Maybe<&T>
    where
        S: Split<T, U>,
        U: Index,
    {
        self.get().into()
    }

    /// Extracts the value of slot `U`, or returns the sum of the remaining
    /// slots with the discriminant renumbered accordingly.
    pub fn try_unwrap<T, U>(self) -> Result<T, Sum<Rem<S, T, U>>>
    where
        S: Split<T, U>,
        U: Index,
    {
        let (tag, data) = self.into_parts();
        match unsafe { S::take(data, tag) } {
            Ok(value) => Ok(value),
            Err((tag, rest)) => Err(Sum::from_parts(tag, rest)),
        }
    }

    /// Consumes the sum with exactly one handler per slot, invoking only the
    /// handler of the populated slot.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use tadt::{t, Sum};
    ///
    /// let s: Sum![i32, String] = Sum::new(String::from("four"));
    /// let len = s.fold(t![|n: i32| n as usize, |s: String| s.len()]);
    /// assert_eq!(len, 4);
    /// ```
    pub fn fold<R, F>(self, handlers: F) -> R
    where
        F: Fold<S, R>,
    {
        let (tag, data) = self.into_parts();
        unsafe { handlers.fold(data, tag) }
    }

    /// Like [`fold`](Sum::fold), handing each handler a reference.
    pub fn fold_ref<'a, R, F>(&'a self, handlers: F) -> R
    where
        F: FoldRef<'a, S, R>,
    {
        unsafe { handlers.fold_ref(&*self.data, self.tag) }
    }

    /// Widens the sum by a new leading slot `H`; every discriminant moves up
    /// by one.
    pub fn prepend<H>(self) -> Sum<(H, S)> {
        let (tag, data) = self.into_parts();
        Sum::from_parts(
            tag + 1,
            repr::Cons {
                next: ManuallyDrop::new(data),
            },
        )
    }

    /// Widens the sum by a new trailing slot `X`; every discriminant stays.
    pub fn append<X>(self) -> Sum<Appended<S, X>>
    where
        S: Append<X>,
    {
        let (tag, data) = self.into_parts();
        Sum::from_parts(tag, unsafe { S::widen(data, tag) })
    }
}

impl<S: derive::TypeMeta> Sum<S> {
    pub fn type_id(&self) -> TypeId {
        <S as derive::TypeMeta>::type_id(self.tag)
    }

    pub fn type_name(&self) -> &'static str {
        S::type_name(self.tag)
    }

    pub fn as_any(&self) -> &dyn Any {
        unsafe { S::as_any(&*self.data, self.tag) }
    }
}

impl<S: derive::SumDebug> fmt::Debug for Sum<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        unsafe { S::fmt(&*self.data, self.tag, f) }
    }
}

impl<S: SumList> Drop for Sum<S> {
    fn drop(&mut self) {
        unsafe { S::drop(&mut self.data, self.tag) }
    }
}

impl<S: derive::SumClone> Clone for Sum<S> {
    fn clone(&self) -> Self {
        Sum::from_parts(self.tag, unsafe { S::clone(&*self.data, self.tag) })
    }
}

impl<S: derive::SumPartialEq> PartialEq for Sum<S> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self, other)
            || (self.tag == other.tag && unsafe { S::eq(&*self.data, &*other.data, self.tag) })
    }
}

impl<S: derive::SumPartialEq + Eq> Eq for Sum<S> {}

impl<S: derive::SumHash> Hash for Sum<S> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tag.hash(state);
        unsafe { S::hash(&*self.data, self.tag, state) }
    }
}
