//! Failures surfaced by the fallible operations of the crate.

use alloc::{format, string::String};

use thiserror::Error;

use crate::Dynamic;

/// Returned by [`match_to_sum`](crate::dispatch::match_to_sum) when a value
/// is an instance of none of the candidate types.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[error("value {repr} of type `{type_name}` matches none of the {arity} candidate types")]
pub struct UnmatchedTypeError {
    repr: String,
    type_name: &'static str,
    arity: usize,
}

impl UnmatchedTypeError {
    pub(crate) fn new(value: &Dynamic, arity: usize) -> Self {
        UnmatchedTypeError {
            repr: format!("{value:?}"),
            type_name: value.type_name(),
            arity,
        }
    }

    /// The debug representation of the rejected value.
    pub fn repr(&self) -> &str {
        &self.repr
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// The number of candidate types that were tried.
    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Returned by [`Product::value_at`](crate::Product::value_at) when the
/// 1-based slot index is outside `1..=arity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[error("slot {index} is out of range for a product of arity {arity}")]
pub struct IndexError {
    pub(crate) index: usize,
    pub(crate) arity: usize,
}

impl IndexError {
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn arity(&self) -> usize {
        self.arity
    }
}

/// Returned when a value is extracted from an empty [`Maybe`](crate::Maybe).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Error)]
#[error("attempted to extract a value from an empty option")]
pub struct EmptyOptionError;

/// Any error of this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum Error {
    #[error(transparent)]
    UnmatchedType(#[from] UnmatchedTypeError),
    #[error(transparent)]
    Index(#[from] IndexError),
    #[error(transparent)]
    EmptyOption(#[from] EmptyOptionError),
}

#[cfg(test)]
mod tests {
    use std::string::ToString;

    use super::*;

    #[test]
    fn messages() {
        let err = UnmatchedTypeError::new(&Dynamic::new("x"), 2);
        assert_eq!(err.repr(), "\"x\"");
        assert_eq!(err.arity(), 2);
        assert_eq!(
            err.to_string(),
            "value \"x\" of type `&str` matches none of the 2 candidate types"
        );

        let err: Error = IndexError { index: 4, arity: 3 }.into();
        assert_eq!(err.to_string(), "slot 4 is out of range for a product of arity 3");

        let err: Error = EmptyOptionError.into();
        assert!(matches!(err, Error::EmptyOption(_)));
    }
}
