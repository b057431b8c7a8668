//! # Number types
//!
//! The algorithms in this crate are defined over an ordered field rather than over a concrete
//! number type. A benefit of this approach is that the algorithms can be tested well for
//! correctness using fractional numbers, while the same code is used without adaptation with
//! floating point numbers.

pub mod traits;
