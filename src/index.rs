//! Type-level indices addressing the slots of sums and products.
#![allow(missing_docs)]

use core::marker::PhantomData;

pub struct UTerm;

pub struct UInt<U>(PhantomData<U>);

pub trait Index {
    const TAG: u8;
}

impl Index for UTerm {
    const TAG: u8 = 0;
}

impl<U: Index> Index for UInt<U> {
    const TAG: u8 = 1 + U::TAG;
}

pub type U0 = UTerm;
pub type U1 = UInt<U0>;
pub type U2 = UInt<U1>;
pub type U3 = UInt<U2>;
pub type U4 = UInt<U3>;
pub type U5 = UInt<U4>;
pub type U6 = UInt<U5>;
pub type U7 = UInt<U6>;
pub type U8 = UInt<U7>;
pub type U9 = UInt<U8>;
pub type U10 = UInt<U9>;

/// Counts the number of elements in a type list using index tags.
pub trait Count {
    /// The number of elements in the type list, measured by index tags.
    type Count: Index;

    /// The number of elements as a plain number.
    const ARITY: usize = <Self::Count as Index>::TAG as usize;
}

impl Count for () {
    type Count = UTerm;
}

impl<Head, Tail> Count for (Head, Tail)
where
    Tail: Count,
{
    type Count = UInt<Tail::Count>;
}
