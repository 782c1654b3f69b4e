//! Conversions back and forth between flat tuples and their corresponding
//! inductive list structures.
//!
//! Sums and products are defined over inductive type-level lists, while
//! callers usually hold flat tuples. The traits here convert between the two
//! equivalent representations for tuples of up to 10 elements.

use crate::index::Count;

/// Convert a tuple into its corresponding inductive list structure.
pub trait Tuple: Sized {
    /// The corresponding inductive list.
    type AsList: List<AsTuple = Self>;

    fn into_list(self) -> Self::AsList;
}

/// Convert an inductive list structure into its corresponding tuple.
pub trait List: Count + Sized {
    /// The corresponding tuple.
    type AsTuple: Tuple<AsList = Self>;

    fn into_tuple(self) -> Self::AsTuple;
}

macro_rules! list {
    () => { () };
    ($head:ident $(, $tail:ident)*) => { ($head, list!($($tail),*)) };
}

macro_rules! impl_tuple {
    ($($t:ident),*) => {
        #[allow(non_snake_case, clippy::unused_unit)]
        impl<$($t,)*> Tuple for ($($t,)*) {
            type AsList = list!($($t),*);

            fn into_list(self) -> Self::AsList {
                let ($($t,)*) = self;
                list!($($t),*)
            }
        }

        #[allow(non_snake_case, clippy::unused_unit)]
        impl<$($t,)*> List for list!($($t),*) {
            type AsTuple = ($($t,)*);

            fn into_tuple(self) -> Self::AsTuple {
                let list!($($t),*) = self;
                ($($t,)*)
            }
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A, B);
impl_tuple!(A, B, C);
impl_tuple!(A, B, C, D);
impl_tuple!(A, B, C, D, E);
impl_tuple!(A, B, C, D, E, F);
impl_tuple!(A, B, C, D, E, F, G);
impl_tuple!(A, B, C, D, E, F, G, H);
impl_tuple!(A, B, C, D, E, F, G, H, I);
impl_tuple!(A, B, C, D, E, F, G, H, I, J);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_shapes() {
        assert_eq!((1, 'x', "y").into_list(), t![1, 'x', "y"]);
        assert_eq!(t![1_u8].into_tuple(), (1_u8,));
        assert_eq!(().into_list(), ());
        assert_eq!(<T![u8, u8, u8, u8, u8, u8, u8, u8, u8, u8] as Count>::ARITY, 10);
    }
}
