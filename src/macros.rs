/// Constructs a [`struct@Sum`] type from a list of types.
///
/// # Examples
///
/// ```rust
/// use tadt::Sum;
///
/// type MySum = Sum![i32, u32, f64];
/// let s: MySum = Sum::new(42u32);
/// assert_eq!(s.discriminant(), 1);
/// ```
#[macro_export]
macro_rules! Sum {
    [$($t:ty),* $(,)?] => [$crate::Sum::<$crate::T![$($t,)*]>];
}

/// Constructs a [`struct@Product`] type from a list of types.
///
/// The value version of the macro is [`product`].
///
/// # Examples
///
/// ```rust
/// use tadt::{product, Product};
///
/// let p: Product![i32, &str, bool] = product![1, "a", true];
/// assert_eq!(p.arity(), 3);
/// ```
#[macro_export]
macro_rules! Product {
    [$($t:ty),* $(,)?] => [$crate::Product::<$crate::T![$($t,)*]>];
}

/// Constructs a [`struct@Product`] value from a list of values.
///
/// The type version of the macro is [`Product`].
#[macro_export]
macro_rules! product {
    [$($v:expr),* $(,)?] => [$crate::Product::new($crate::t![$($v,)*])];
}

/// Constructs a tuple list (heterogeneous list) type from a list of types.
///
/// The value version of the macro is [`t`].
///
/// # Examples
///
/// ```rust
/// use tadt::T;
///
/// type MyList = T![i32, u32, f64];
/// let list: MyList = (42i32, (42u32, (42.0f64, ())));
/// ```
#[macro_export]
macro_rules! T {
    [] => [()];
    [$head:ty $(, $t:ty)* $(,)?] => [($head, $crate::T!($($t,)*))];
}

/// Constructs a tuple list (heterogeneous list) value from a list of values.
///
/// The type version of the macro is [`T`].
///
/// # Examples
///
/// ```rust
/// use tadt::t;
///
/// type MyList = (i32, (u32, (f64, ())));
/// let list: MyList = t![42i32, 42u32, 42.0f64];
/// ```
#[macro_export]
macro_rules! t {
    [] => [()];
    [$head:expr $(, $t:expr)* $(,)?] => [($head, $crate::t!($($t,)*))];
}

/// Implements [`Candidate`] for types that match a [`Dynamic`] only by their
/// exact runtime type.
///
/// # Examples
///
/// ```rust
/// use tadt::{candidate, dispatch, Dynamic, Sum};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
///
/// candidate!(Meters);
///
/// let s: Sum![i32, Meters] = dispatch::match_to_sum(Dynamic::new(Meters(2.0))).unwrap();
/// assert_eq!(s.discriminant(), 1);
/// ```
///
/// [`Candidate`]: crate::dispatch::Candidate
/// [`Dynamic`]: crate::Dynamic
#[macro_export]
macro_rules! candidate {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::dispatch::Candidate for $t {
            fn from_dynamic(
                value: $crate::Dynamic,
            ) -> ::core::result::Result<Self, $crate::Dynamic> {
                value.downcast::<Self>()
            }
        }
    )*};
}
