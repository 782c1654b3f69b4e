//! Immutable heterogeneous products over a type list.

use core::{any::Any, fmt};

use crate::{
    eq,
    error::IndexError,
    index::{Count, Index, UInt, UTerm},
    tuple::{List, Tuple},
};

/// An immutable ordered aggregate of independently typed values.
///
/// The slot types are the type list `L`; use the [`Product!`](crate::Product!)
/// macro to spell the type and [`product!`](crate::product!) to build a value.
/// Products of different arity or slot types are different types and never
/// compare equal.
///
/// # Examples
///
/// ```rust
/// use tadt::{index::*, product};
///
/// let p = product![1, "a", true];
/// assert_eq!(*p.get::<U0>(), 1);
/// assert_eq!(*p.get::<U1>(), "a");
/// assert_eq!(p.value_at(3).unwrap().downcast_ref::<bool>(), Some(&true));
/// assert!(p.value_at(4).is_err());
/// ```
#[derive(Clone, Copy, Hash, Default)]
pub struct Product<L> {
    list: L,
}

impl<L> Product<L> {
    pub fn new(list: L) -> Self {
        Product { list }
    }

    pub fn from_tuple<Tu>(tuple: Tu) -> Self
    where
        Tu: Tuple<AsList = L>,
    {
        Product::new(tuple.into_list())
    }

    pub fn into_tuple(self) -> L::AsTuple
    where
        L: List,
    {
        self.list.into_tuple()
    }

    pub fn as_list(&self) -> &L {
        &self.list
    }

    pub fn into_list(self) -> L {
        self.list
    }

    pub fn arity(&self) -> usize
    where
        L: Count,
    {
        L::ARITY
    }

    /// The slot at the 0-based type-level index `U`.
    pub fn get<U: Index>(&self) -> &<L as Slot<U>>::Value
    where
        L: Slot<U>,
    {
        self.list.slot()
    }

    /// The slot at the 1-based runtime index `index`.
    pub fn value_at(&self, index: usize) -> Result<&dyn Any, IndexError>
    where
        L: DynSlots + Count,
    {
        index
            .checked_sub(1)
            .and_then(|index| self.list.slot_dyn(index))
            .ok_or(IndexError {
                index,
                arity: L::ARITY,
            })
    }
}

/// Access to the element at index `U` of a type list.
pub trait Slot<U: Index> {
    type Value;

    fn slot(&self) -> &Self::Value;
}

impl<Head, Tail> Slot<UTerm> for (Head, Tail) {
    type Value = Head;

    fn slot(&self) -> &Head {
        &self.0
    }
}

impl<Head, Tail: Slot<U>, U: Index> Slot<UInt<U>> for (Head, Tail) {
    type Value = Tail::Value;

    fn slot(&self) -> &Tail::Value {
        self.1.slot()
    }
}

/// Runtime-indexed access to the elements of a type list.
pub trait DynSlots {
    #[doc(hidden)]
    fn slot_dyn(&self, index: usize) -> Option<&dyn Any>;
}

impl DynSlots for () {
    fn slot_dyn(&self, _: usize) -> Option<&dyn Any> {
        None
    }
}

impl<Head: Any, Tail: DynSlots> DynSlots for (Head, Tail) {
    fn slot_dyn(&self, index: usize) -> Option<&dyn Any> {
        match index.checked_sub(1) {
            None => Some(&self.0),
            Some(index) => self.1.slot_dyn(index),
        }
    }
}

pub trait ProductEq {
    #[doc(hidden)]
    fn slots_eq(&self, other: &Self) -> bool;
}

impl ProductEq for () {
    fn slots_eq(&self, _: &Self) -> bool {
        true
    }
}

impl<Head: PartialEq, Tail: ProductEq> ProductEq for (Head, Tail) {
    fn slots_eq(&self, other: &Self) -> bool {
        eq::slot_equals(&self.0, &other.0) && self.1.slots_eq(&other.1)
    }
}

pub trait ProductDebug {
    #[doc(hidden)]
    fn entries(&self, f: &mut fmt::DebugTuple<'_, '_>);
}

impl ProductDebug for () {
    fn entries(&self, _: &mut fmt::DebugTuple<'_, '_>) {}
}

impl<Head: fmt::Debug, Tail: ProductDebug> ProductDebug for (Head, Tail) {
    fn entries(&self, f: &mut fmt::DebugTuple<'_, '_>) {
        f.field(&self.0);
        self.1.entries(f);
    }
}

impl<L: ProductEq> PartialEq for Product<L> {
    fn eq(&self, other: &Self) -> bool {
        core::ptr::eq(self, other) || self.list.slots_eq(&other.list)
    }
}

impl<L: ProductEq + Eq> Eq for Product<L> {}

impl<L: ProductDebug> fmt::Debug for Product<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tuple = f.debug_tuple("Product");
        self.list.entries(&mut tuple);
        tuple.finish()
    }
}

#[cfg(test)]
mod tests {
    use std::{format, string::String};

    use super::*;
    use crate::index::*;

    #[test]
    fn slots() {
        let p = product![1, "a", true];
        assert_eq!(p.arity(), 3);
        assert_eq!(*p.get::<U0>(), 1);
        assert_eq!(*p.get::<U1>(), "a");
        assert!(*p.get::<U2>());

        assert_eq!(p.value_at(1).unwrap().downcast_ref::<i32>(), Some(&1));
        assert_eq!(p.value_at(2).unwrap().downcast_ref::<&str>(), Some(&"a"));
        assert_eq!(p.value_at(3).unwrap().downcast_ref::<bool>(), Some(&true));
    }

    #[test]
    fn out_of_range() {
        let p = product![1_u8, 2_u16];
        assert_eq!(p.value_at(0).unwrap_err(), IndexError { index: 0, arity: 2 });
        assert_eq!(p.value_at(3).unwrap_err(), IndexError { index: 3, arity: 2 });

        let empty: Product![] = product![];
        assert_eq!(empty.arity(), 0);
        assert!(empty.value_at(1).is_err());
    }

    #[test]
    fn equality_is_slot_wise() {
        assert_eq!(product![1, String::from("x")], product![1, String::from("x")]);
        assert_ne!(product![1, String::from("x")], product![1, String::from("y")]);
        assert_ne!(product![1, 2], product![2, 1]);
        assert_eq!(product![], product![]);
    }

    #[test]
    fn tuples() {
        let p = Product::from_tuple((1_u8, 'c', "s"));
        assert_eq!(*p.get::<U1>(), 'c');
        assert_eq!(format!("{p:?}"), "Product(1, 'c', \"s\")");
        assert_eq!(p.into_tuple(), (1_u8, 'c', "s"));
    }

    static_assertions::assert_not_impl_any!(Product![i32, i32]: PartialEq<Product![i32, i32, i32]>);
    static_assertions::assert_not_impl_any!(Product![i32, i32]: PartialEq<Product![i32, u8]>);
    static_assertions::assert_impl_all!(Product![i32, String]: Send, Sync, Clone, Eq);
}
