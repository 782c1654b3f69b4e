//! A boxed value that remembers how to describe and compare itself.

use alloc::boxed::Box;
use core::{
    any::{self, Any, TypeId},
    fmt,
};

use crate::eq;

/// A type-erased value carrying its runtime type identity.
///
/// This is the input of the type-directed dispatcher and the catch-all slot
/// of its total variant. Besides the value it keeps the type name and erased
/// `Debug` and `PartialEq` implementations, so that a `Dynamic` can be
/// printed and compared without knowing what it holds.
pub struct Dynamic {
    value: Box<dyn Any + Send + Sync>,
    type_name: &'static str,
    debug: fn(&dyn Any, &mut fmt::Formatter<'_>) -> fmt::Result,
    eq: fn(&dyn Any, &dyn Any) -> bool,
}

impl Dynamic {
    pub fn new<T>(value: T) -> Self
    where
        T: Any + Send + Sync + fmt::Debug + PartialEq,
    {
        Dynamic {
            value: Box::new(value),
            type_name: any::type_name::<T>(),
            debug: debug_erased::<T>,
            eq: eq_erased::<T>,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.as_any().type_id()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.as_any().is::<T>()
    }

    pub fn as_any(&self) -> &dyn Any {
        &*self.value
    }

    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.as_any().downcast_ref()
    }

    /// Takes the value out if it is a `T`, or gives the box back.
    pub fn downcast<T: Any>(self) -> Result<T, Self> {
        let Dynamic {
            value,
            type_name,
            debug,
            eq,
        } = self;
        match value.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(value) => Err(Dynamic {
                value,
                type_name,
                debug,
                eq,
            }),
        }
    }
}

fn debug_erased<T: Any + fmt::Debug>(value: &dyn Any, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match value.downcast_ref::<T>() {
        Some(value) => fmt::Debug::fmt(value, f),
        None => f.write_str(any::type_name::<T>()),
    }
}

fn eq_erased<T: Any + PartialEq>(a: &dyn Any, b: &dyn Any) -> bool {
    eq::structurally_equals(a.downcast_ref::<T>(), Some(b))
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (self.debug)(self.as_any(), f)
    }
}

impl PartialEq for Dynamic {
    fn eq(&self, other: &Self) -> bool {
        (self.eq)(self.as_any(), other.as_any())
    }
}
