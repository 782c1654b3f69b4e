//! Standard trait support for [`Sum`], dispatched on the active tag.
//!
//! [`Sum`]: crate::sum::Sum

use core::{
    any::{self, Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    mem::ManuallyDrop,
};

use super::repr::{Cons, Nil, SumList};
use crate::eq;

pub trait TypeMeta: SumList + 'static {
    #[doc(hidden)]
    fn type_name(tag: u8) -> &'static str;

    #[doc(hidden)]
    fn type_id(tag: u8) -> TypeId;

    #[doc(hidden)]
    unsafe fn as_any(this: &Self::Repr, tag: u8) -> &dyn Any;
}

impl TypeMeta for () {
    fn type_name(tag: u8) -> &'static str {
        unreachable!("type name of tag {tag} in an empty sum")
    }

    fn type_id(tag: u8) -> TypeId {
        unreachable!("type id of tag {tag} in an empty sum")
    }

    unsafe fn as_any(this: &Nil, _: u8) -> &dyn Any {
        match this.0 {}
    }
}

impl<Head: 'static, Tail: TypeMeta> TypeMeta for (Head, Tail) {
    fn type_name(tag: u8) -> &'static str {
        match tag.checked_sub(1) {
            None => any::type_name::<Head>(),
            Some(tag) => Tail::type_name(tag),
        }
    }

    fn type_id(tag: u8) -> TypeId {
        match tag.checked_sub(1) {
            None => TypeId::of::<Head>(),
            Some(tag) => <Tail as TypeMeta>::type_id(tag),
        }
    }

    unsafe fn as_any(this: &Self::Repr, tag: u8) -> &dyn Any {
        match tag.checked_sub(1) {
            None => unsafe { &*this.data },
            Some(tag) => unsafe { Tail::as_any(&*this.next, tag) },
        }
    }
}

pub trait SumClone: SumList {
    #[doc(hidden)]
    unsafe fn clone(this: &Self::Repr, tag: u8) -> Self::Repr;
}

impl SumClone for () {
    unsafe fn clone(this: &Nil, _: u8) -> Nil {
        match this.0 {}
    }
}

impl<Head: Clone, Tail: SumClone> SumClone for (Head, Tail) {
    unsafe fn clone(this: &Self::Repr, tag: u8) -> Self::Repr {
        match tag.checked_sub(1) {
            None => Cons {
                data: unsafe { this.data.clone() },
            },
            Some(tag) => Cons {
                next: ManuallyDrop::new(unsafe { Tail::clone(&*this.next, tag) }),
            },
        }
    }
}

pub trait SumPartialEq: SumList {
    #[doc(hidden)]
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool;
}

impl SumPartialEq for () {
    unsafe fn eq(this: &Nil, _: &Nil, _: u8) -> bool {
        match this.0 {}
    }
}

impl<Head: PartialEq, Tail: SumPartialEq> SumPartialEq for (Head, Tail) {
    unsafe fn eq(this: &Self::Repr, other: &Self::Repr, tag: u8) -> bool {
        match tag.checked_sub(1) {
            None => eq::slot_equals::<Head>(unsafe { &*this.data }, unsafe { &*other.data }),
            Some(tag) => unsafe { Tail::eq(&*this.next, &*other.next, tag) },
        }
    }
}

pub trait SumDebug: SumList {
    #[doc(hidden)]
    unsafe fn fmt(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl SumDebug for () {
    unsafe fn fmt(this: &Nil, _: u8, _: &mut fmt::Formatter<'_>) -> fmt::Result {
        match this.0 {}
    }
}

impl<Head: fmt::Debug, Tail: SumDebug> SumDebug for (Head, Tail) {
    unsafe fn fmt(this: &Self::Repr, tag: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match tag.checked_sub(1) {
            None => fmt::Debug::fmt(unsafe { &*this.data }, f),
            Some(tag) => unsafe { Tail::fmt(&*this.next, tag, f) },
        }
    }
}

pub trait SumHash: SumList {
    #[doc(hidden)]
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H);
}

impl SumHash for () {
    unsafe fn hash<H: Hasher>(this: &Nil, _: u8, _: &mut H) {
        match this.0 {}
    }
}

impl<Head: Hash, Tail: SumHash> SumHash for (Head, Tail) {
    unsafe fn hash<H: Hasher>(this: &Self::Repr, tag: u8, state: &mut H) {
        match tag.checked_sub(1) {
            None => Hash::hash(unsafe { &*this.data }, state),
            Some(tag) => unsafe { Tail::hash(&*this.next, tag, state) },
        }
    }
}
