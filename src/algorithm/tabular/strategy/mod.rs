//! # Strategies
//!
//! Interchangeable decision procedures within the tabular Simplex method.
pub mod pivot_rule;
