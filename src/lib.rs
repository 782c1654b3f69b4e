#![doc = include_str!("../README.md")]
#![no_std]
#![deny(future_incompatible)]
#![deny(rust_2018_idioms)]
#![deny(rust_2024_compatibility)]
#![allow(edition_2024_expr_fragment_specifier)]

extern crate alloc;
#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

pub mod dispatch;
mod dynamic;
pub mod eq;
pub mod error;
pub mod index;
mod maybe;
pub mod product;
pub mod sum;
pub mod tuple;

pub use self::{
    dispatch::{match_to_sum, match_to_sum_or_else, match_to_sum_total, Candidate, Number},
    dynamic::Dynamic,
    eq::Structural,
    error::{EmptyOptionError, Error, IndexError, UnmatchedTypeError},
    maybe::Maybe,
    product::Product,
    sum::Sum,
};
