//! # Linear programs in dense standard form
//!
//! A problem instance as the caller provides it: a direction of optimization, a cost vector, a
//! dense coefficient matrix and a right-hand side vector. Structural consistency is checked once,
//! at construction; afterwards, the dimensions can be relied upon.
use std::fmt;
use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::{Field, FieldRef};
use crate::io::error::Inconsistency;

/// A linear program in dense standard form.
///
/// The problem described is
///
/// `optimize c^T x  subject to  A x <= b, x >= 0`
///
/// where the right-hand side values may be negative. Rows of `A` are stored densely; the
/// coefficients express the constraints in terms of the current non-basic variables once the
/// tableau starts iterating.
#[derive(Clone, Debug, PartialEq)]
pub struct DenseForm<F> {
    /// Whether the cost function should be maximized or minimized.
    objective: Objective,
    /// The linear combination of costs, one coefficient per variable.
    cost: Vec<F>,
    /// All constraint coefficients, row major.
    constraints: Vec<Vec<F>>,
    /// All right-hand sides of the constraints.
    rhs: Vec<F>,
}

impl<F: Field> DenseForm<F> {
    /// Create a new linear program in dense standard form.
    ///
    /// This is the single entry point for problem data; the structural checks here guarantee that
    /// the solve algorithms never encounter mismatched dimensions.
    ///
    /// # Arguments
    ///
    /// * `objective`: Direction of optimization.
    /// * `cost`: Cost coefficients, one per variable.
    /// * `constraints`: Dense coefficient rows, all of equal length `cost.len()`.
    /// * `rhs`: Right-hand side values, one per constraint row.
    ///
    /// # Errors
    ///
    /// An `Inconsistency` describing the first structural mismatch found. Note that the values
    /// themselves are not inspected; a sign-wise infeasible problem is constructed fine and only
    /// rejected when solved.
    pub fn new(
        objective: Objective,
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        rhs: Vec<F>,
    ) -> Result<Self, Inconsistency> {
        let nr_variables = match constraints.first() {
            Some(row) => row.len(),
            None => return Err(Inconsistency::new("a problem needs at least one constraint")),
        };
        if nr_variables == 0 {
            return Err(Inconsistency::new("a constraint needs at least one coefficient"));
        }
        if !constraints.iter().map(Vec::len).all_equal() {
            return Err(Inconsistency::new("not all constraint rows have the same length"));
        }
        if cost.len() != nr_variables {
            return Err(Inconsistency::new(format!(
                "{} cost coefficients provided while the constraints have {} columns",
                cost.len(), nr_variables,
            )));
        }
        if rhs.len() != constraints.len() {
            return Err(Inconsistency::new(format!(
                "{} right-hand side values provided for {} constraints",
                rhs.len(), constraints.len(),
            )));
        }

        Ok(Self { objective, cost, constraints, rhs })
    }

    /// Number of constraint rows.
    pub fn nr_constraints(&self) -> usize {
        self.constraints.len()
    }

    /// Number of decision variables.
    pub fn nr_variables(&self) -> usize {
        self.cost.len()
    }

    /// Direction of optimization of this instance.
    pub fn objective(&self) -> Objective {
        self.objective
    }

    /// Cost coefficients.
    pub fn cost(&self) -> &[F] {
        &self.cost
    }

    /// Constraint coefficient rows.
    pub fn constraints(&self) -> &[Vec<F>] {
        &self.constraints
    }

    /// Right-hand side values.
    pub fn rhs(&self) -> &[F] {
        &self.rhs
    }

    /// Derive the dual of this problem.
    ///
    /// The constraint rows of the primal map onto the decision variables of the dual and vice
    /// versa: the new cost vector is the old right-hand side, the new coefficient matrix is the
    /// negated transpose, the new right-hand side is the negated old cost vector and the direction
    /// of optimization flips.
    ///
    /// Dualizing twice reproduces the original instance: the transpose and the two negations all
    /// cancel.
    pub fn dual(&self) -> Self
    where
        for<'r> &'r F: FieldRef<F>,
    {
        let constraints = (0..self.nr_variables())
            .map(|column| self.constraints.iter().map(|row| -&row[column]).collect())
            .collect();

        // Dimensions of a valid instance transpose into a valid instance, so the checks in `new`
        // are not repeated.
        Self {
            objective: !self.objective,
            cost: self.rhs.clone(),
            constraints,
            rhs: self.cost.iter().map(|value| -value).collect(),
        }
    }
}

impl<F: Field> Display for DenseForm<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let direction = match self.objective {
            Objective::Maximize => "maximize",
            Objective::Minimize => "minimize",
        };
        writeln!(f, "{} {}", direction, self.cost.iter().join(" "))?;
        writeln!(f, "subject to")?;
        for (row, rhs) in self.constraints.iter().zip(&self.rhs) {
            writeln!(f, "  {} <= {}", row.iter().join(" "), rhs)?;
        }

        Ok(())
    }
}
