//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn dense_form()` for the validated problem instance
//! * `const OPTIMAL_OBJECTIVE` for its known optimal objective value
pub mod problem_1;

use num_traits::FromPrimitive;

/// Build a vector of any supported number type from integer test data.
pub fn vector<F: FromPrimitive>(values: &[i64]) -> Vec<F> {
    values.iter().map(|&value| F::from_i64(value).unwrap()).collect()
}

/// Build a dense row-major matrix of any supported number type from integer test data.
pub fn matrix<F: FromPrimitive>(rows: &[&[i64]]) -> Vec<Vec<F>> {
    rows.iter().map(|row| vector(row)).collect()
}
