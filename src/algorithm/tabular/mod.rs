//! # The tabular Simplex method
//!
//! This module contains all data structures and logic specific to the tabular variant of the
//! Simplex method. An infeasible basis is not repaired through a first phase with artificial
//! variables; instead, a row with a negative constraint value is pivoted on directly, using a
//! negative coefficient in that row. Only once the basis is feasible does the method turn to
//! improving the objective.
use num_traits::Zero;

use crate::algorithm::{OptimizationResult, SolveTabular};
use crate::algorithm::tabular::strategy::pivot_rule::{LargestCoefficient, PivotRule};
use crate::algorithm::tabular::tableau::{Pivot, Tableau};
use crate::data::linear_program::dense_form::DenseForm;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};

pub mod strategy;
pub mod tableau;

/// Outcome of searching for the next resolving element.
///
/// Both failure variants are expected terminal outcomes of the algorithm, not exceptional
/// conditions; optimality is not represented here because the driver detects it before searching.
#[derive(Debug, PartialEq)]
pub enum PivotSearch<F> {
    /// The next basis change happens around this element.
    Pivot(Pivot<F>),
    /// The basis can not be repaired to feasibility: there is no solution.
    Infeasible,
    /// No bounded pivot exists: the objective can be improved without limit.
    Unbounded,
}

/// Search the next resolving element.
///
/// Infeasibility repair takes priority over objective improvement, because an infeasible basis
/// can not be evaluated for optimality. The decision is made on the first row with a negative
/// constraint value alone: if that row has no negative coefficient, no pivot can make it feasible
/// and the search fails, regardless of any later rows. Within the repair row, the first negative
/// coefficient determines the column.
///
/// Only when the basis is feasible is the column chosen by the pivot rule.
///
/// # Arguments
///
/// * `tableau`: State to search; callers should have checked [`Tableau::is_optimal`] first, as
/// an already optimal tableau is reported as `Infeasible` (nothing can improve it).
pub fn select_pivot<F, PR>(tableau: &Tableau<F>, rule: &mut PR) -> PivotSearch<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
    PR: PivotRule,
{
    if tableau.relative_costs().iter().all(Zero::is_zero) {
        // A cost row of only zeros can never drive an improvement.
        return PivotSearch::Infeasible;
    }

    let zero = F::zero();
    if let Some(row) = tableau.first_infeasible_row() {
        return match tableau.coefficient_row(row).iter().position(|value| value < &zero) {
            Some(column) => match tableau.select_pivot_row(column) {
                Some(pivot) => PivotSearch::Pivot(pivot),
                None => PivotSearch::Unbounded,
            },
            None => PivotSearch::Infeasible,
        };
    }

    match rule.select_pivot_column(tableau) {
        Some(column) => match tableau.select_pivot_row(column) {
            Some(pivot) => PivotSearch::Pivot(pivot),
            None => PivotSearch::Unbounded,
        },
        None => PivotSearch::Infeasible,
    }
}

/// Iterate until a terminal state is reached.
///
/// The returned objective value follows the tableau's internal sign convention; see
/// [`SolveTabular::solve_tabular`] for the conversion to the caller's direction of optimization.
pub(crate) fn primal<F, PR>(mut tableau: Tableau<F>) -> OptimizationResult<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
    PR: PivotRule,
{
    let mut rule = PR::new();
    loop {
        if tableau.is_optimal() {
            break OptimizationResult::FiniteOptimum(tableau.objective_function_value().clone());
        }

        match select_pivot(&tableau, &mut rule) {
            PivotSearch::Pivot(pivot) => tableau = tableau.bring_into_basis(&pivot),
            PivotSearch::Infeasible => break OptimizationResult::Infeasible,
            PivotSearch::Unbounded => break OptimizationResult::Unbounded,
        }
    }
}

impl<F> SolveTabular<F> for DenseForm<F>
where
    F: OrderedField,
    for<'r> &'r F: OrderedFieldRef<F>,
{
    fn solve_tabular(&self) -> OptimizationResult<F> {
        let tableau = Tableau::new(self);

        match primal::<_, LargestCoefficient>(tableau) {
            OptimizationResult::FiniteOptimum(value) => {
                // The running objective value accumulates the negative of the maximized cost
                // function; a minimization was negated once on tableau construction.
                OptimizationResult::FiniteOptimum(match self.objective() {
                    Objective::Maximize => -value,
                    Objective::Minimize => value,
                })
            },
            other => other,
        }
    }
}
