//! # A bounded maximization
//!
//! `maximize 3x1 + 5x2` subject to `x1 <= 4`, `2x2 <= 12` and `3x1 + 2x2 <= 18`. The instance
//! starts feasible, so only objective-improvement pivots occur.
use num_traits::FromPrimitive;

use crate::data::linear_program::dense_form::DenseForm;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::Field;
use crate::tests::{matrix, vector};

/// The known optimal objective value of this instance.
pub const OPTIMAL_OBJECTIVE: i64 = 36;

/// The problem as a caller would provide it.
pub fn dense_form<F: Field + FromPrimitive>() -> DenseForm<F> {
    DenseForm::new(
        Objective::Maximize,
        vector(&[3, 5]),
        matrix(&[&[1, 0], &[0, 2], &[3, 2]]),
        vector(&[4, 12, 18]),
    ).unwrap()
}
