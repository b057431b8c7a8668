//! # The working tableau
//!
//! All state of the tabular Simplex method: the relative cost coefficients, the constraint
//! coefficients expressed in the current basis, the constraint values and the running objective
//! value. A pivot produces a wholly new tableau; the previous iterate is never partially
//! overwritten, which keeps every update readable as the textbook formula it implements.
use std::fmt;
use std::fmt::{Display, Formatter};
use std::iter::once;

use itertools::{Itertools, izip};

use crate::data::linear_program::dense_form::DenseForm;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::{Field, FieldRef, OrderedField, OrderedFieldRef};

/// The resolving element around which the next basis change happens.
///
/// The value is kept next to the indices because the transformation divides by it repeatedly; it
/// is never zero by construction, see [`Tableau::select_pivot_row`].
#[derive(Clone, Debug, PartialEq)]
pub struct Pivot<F> {
    /// Value of the tableau at the pivot position.
    pub value: F,
    /// Row index of the pivot.
    pub row: usize,
    /// Column index of the pivot.
    pub column: usize,
}

impl<F: Display> Display for Pivot<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{} at row {}, column {}", self.value, self.row, self.column)
    }
}

/// The complete state of the tabular Simplex method.
///
/// There is no hidden state: two tableaus with equal fields behave identically. Note that the
/// relative costs keep the maximization convention regardless of the original problem; a
/// minimization is negated on construction.
#[derive(Clone, Debug, PartialEq)]
pub struct Tableau<F> {
    /// Relative cost coefficients, one per column.
    cost: Vec<F>,
    /// Constraint coefficients in the current basis, row major.
    constraints: Vec<Vec<F>>,
    /// Constraint values; a negative value signals primal infeasibility of the current basis.
    rhs: Vec<F>,
    /// Objective value of the current basic solution.
    objective_value: F,
}

impl<F> Tableau<F> {
    /// Number of constraint rows.
    pub fn nr_rows(&self) -> usize {
        self.constraints.len()
    }

    /// Number of columns of the coefficient matrix.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }

    /// The current relative cost coefficients.
    pub fn relative_costs(&self) -> &[F] {
        &self.cost
    }

    /// The current constraint values.
    pub fn constraint_values(&self) -> &[F] {
        &self.rhs
    }

    /// One row of constraint coefficients.
    pub fn coefficient_row(&self, row: usize) -> &[F] {
        &self.constraints[row]
    }

    /// Objective value of the current basic solution.
    ///
    /// This value follows the internal sign convention: it accumulates the negative of the
    /// maximized cost function.
    pub fn objective_function_value(&self) -> &F {
        &self.objective_value
    }

    /// Build a tableau directly from its fields.
    ///
    /// Test helper; problem input should go through [`Tableau::new`] so that a minimization is
    /// oriented correctly.
    #[cfg(test)]
    pub(crate) fn from_parts(
        cost: Vec<F>,
        constraints: Vec<Vec<F>>,
        rhs: Vec<F>,
        objective_value: F,
    ) -> Self {
        debug_assert!(constraints.iter().all(|row| row.len() == cost.len()));
        debug_assert_eq!(constraints.len(), rhs.len());

        Self { cost, constraints, rhs, objective_value }
    }
}

impl<F: Field> Tableau<F>
where
    for<'r> &'r F: FieldRef<F>,
{
    /// Set up the initial tableau for a problem instance.
    ///
    /// The caller's data is copied: iterating consumes the tableau, never the problem. If the
    /// problem is a minimization, the cost coefficients are negated here such that the algorithm
    /// itself always maximizes.
    pub fn new(form: &DenseForm<F>) -> Self {
        let cost = match form.objective() {
            Objective::Maximize => form.cost().to_vec(),
            Objective::Minimize => form.cost().iter().map(|value| -value).collect(),
        };

        Self {
            cost,
            constraints: form.constraints().to_vec(),
            rhs: form.rhs().to_vec(),
            objective_value: F::zero(),
        }
    }

    /// Perform a basis change around the given pivot.
    ///
    /// This is the Gauss-Jordan elimination step with the sign convention that unifies
    /// infeasibility repair and objective improvement into one formula set. Writing `p`, `r`, `k`
    /// for the pivot value, row and column:
    ///
    /// * pivot cell: `1 / p`; rest of the pivot column: `-a[i][k] / p`,
    /// * rest of the pivot row: `a[r][j] / p`,
    /// * every other cell: `a[i][j] - a[i][k] * a[r][j] / p`,
    ///
    /// and the analogous formulas for the cost row, the constraint values and the objective
    /// value. All reads are from `self`; the next iterate is built independently.
    ///
    /// # Arguments
    ///
    /// * `pivot`: Resolving element as selected through [`Tableau::select_pivot_row`], which
    /// guarantees a non-zero pivot value.
    #[must_use]
    pub fn bring_into_basis(&self, pivot: &Pivot<F>) -> Self {
        let Pivot { value: p, row, column } = pivot;
        let (r, k) = (*row, *column);

        let cost = self.cost.iter().enumerate()
            .map(|(j, cost_j)| if j == k {
                -(cost_j / p)
            } else {
                cost_j - &(&self.constraints[r][j] * &self.cost[k] / p)
            })
            .collect();

        let rhs = izip!(0.., &self.rhs, &self.constraints)
            .map(|(i, rhs_i, coefficients)| if i == r {
                rhs_i / p
            } else {
                rhs_i - &(&coefficients[k] * &self.rhs[r] / p)
            })
            .collect();

        let constraints = izip!(0.., &self.constraints)
            .map(|(i, coefficients)| izip!(0.., coefficients)
                .map(|(j, a_ij)| match (i == r, j == k) {
                    (true, true) => F::one() / p,
                    (true, false) => a_ij / p,
                    (false, true) => -(a_ij / p),
                    (false, false) => a_ij - &(&coefficients[k] * &self.constraints[r][j] / p),
                })
                .collect())
            .collect();

        let objective_value = &self.objective_value - &(&self.cost[k] * &self.rhs[r] / p);

        Self { cost, constraints, rhs, objective_value }
    }
}

impl<F: OrderedField> Tableau<F>
where
    for<'r> &'r F: OrderedFieldRef<F>,
{
    /// Whether the current basic solution is feasible and optimal.
    ///
    /// This is the negation of the iteration criterion: no relative cost is positive (no
    /// objective improvement possible) and no constraint value is negative (primal feasible).
    pub fn is_optimal(&self) -> bool {
        let zero = F::zero();

        self.cost.iter().all(|cost| cost <= &zero) && self.rhs.iter().all(|rhs| rhs >= &zero)
    }

    /// The lowest-index row with a negative constraint value, if any.
    pub fn first_infeasible_row(&self) -> Option<usize> {
        let zero = F::zero();

        self.rhs.iter().position(|rhs| rhs < &zero)
    }

    /// The minimum-ratio test.
    ///
    /// Only rows with a non-zero coefficient in the column are considered, and only strictly
    /// positive ratios `rhs / coefficient` qualify; of those, the row with the lowest ratio is
    /// selected. Ties go to the first such row in index order, which does not protect against
    /// cycling on degenerate instances.
    ///
    /// # Return value
    ///
    /// The pivot, or `None` if no row yields a positive ratio: the problem is then unbounded in
    /// this column's direction.
    pub fn select_pivot_row(&self, column: usize) -> Option<Pivot<F>> {
        debug_assert!(column < self.nr_columns());

        let zero = F::zero();
        let mut lowest: Option<(F, usize)> = None;
        for (row, (coefficients, rhs)) in izip!(&self.constraints, &self.rhs).enumerate() {
            let coefficient = &coefficients[column];
            if coefficient.is_zero() {
                continue;
            }

            let ratio = rhs / coefficient;
            // The strict comparison keeps the first row at the lowest ratio.
            if ratio > zero && lowest.as_ref().map_or(true, |(current, _)| &ratio < current) {
                lowest = Some((ratio, row));
            }
        }

        lowest.map(|(_, row)| Pivot {
            value: self.constraints[row][column].clone(),
            row,
            column,
        })
    }
}

impl<F: Field> Display for Tableau<F> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let header = once("b".to_string())
            .chain((1..=self.nr_columns()).map(|j| format!("x{}", j)))
            .collect::<Vec<_>>();
        let rows = izip!(&self.rhs, &self.constraints)
            .map(|(rhs, coefficients)| once(rhs).chain(coefficients).map(|value| value.to_string()).collect())
            .chain(once(
                once(&self.objective_value).chain(&self.cost).map(|value| value.to_string()).collect(),
            ))
            .collect::<Vec<Vec<_>>>();

        let width = rows.iter().flatten()
            .chain(header.iter())
            .map(String::len)
            .max()
            .unwrap_or(0) + 2;

        writeln!(f, "{}", header.iter().map(|cell| format!("{:>width$}", cell)).join(" |"))?;
        writeln!(f, "{}", "-".repeat((width + 2) * header.len() - 2))?;
        for row in rows {
            writeln!(f, "{}", row.iter().map(|cell| format!("{:>width$}", cell)).join(" |"))?;
        }

        Ok(())
    }
}
