//! # Pivot rules
//!
//! During the Simplex method, one needs to decide how to move from basic solution to basic
//! solution. The pivot rule describes that behavior for the objective-improvement regime: it
//! chooses the column to pivot in when the current basis is feasible but not optimal. The repair
//! of an infeasible basis is not a strategy; its column choice is fixed, see
//! [`crate::algorithm::tabular::select_pivot`].
use crate::algorithm::tabular::tableau::Tableau;
use crate::data::number_types::traits::{OrderedField, OrderedFieldRef};

/// Deciding in which column to pivot.
///
/// Once the column has been selected, the row follows from the minimum-ratio test independent of
/// the strategy chosen here.
pub trait PivotRule {
    /// Create a new instance.
    fn new() -> Self;

    /// Column selection for the objective-improvement regime.
    ///
    /// # Return value
    ///
    /// The column to pivot in, or `None` if no relative cost is positive and the current
    /// solution can not be improved.
    fn select_pivot_column<F>(&mut self, tableau: &Tableau<F>) -> Option<usize>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
    ;
}

/// Pivot on the column with the largest relative cost.
///
/// Dantzig's original rule: the steepest improvement per unit of the entering variable. Ties go
/// to the first such column in index order.
pub struct LargestCoefficient;
impl PivotRule for LargestCoefficient {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column<F>(&mut self, tableau: &Tableau<F>) -> Option<usize>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
    {
        let mut largest: Option<(usize, &F)> = None;
        for (column, cost) in tableau.relative_costs().iter().enumerate() {
            // The strict comparison keeps the first occurrence of the largest cost.
            if largest.map_or(true, |(_, current)| cost > current) {
                largest = Some((column, cost));
            }
        }

        largest
            .filter(|&(_, cost)| cost > &F::zero())
            .map(|(column, _)| column)
    }
}

/// Simply pivot on the first column which has a positive relative cost.
///
/// Cheaper per iteration than [`LargestCoefficient`] but typically takes more iterations.
pub struct FirstProfitable;
impl PivotRule for FirstProfitable {
    fn new() -> Self {
        Self
    }

    fn select_pivot_column<F>(&mut self, tableau: &Tableau<F>) -> Option<usize>
    where
        F: OrderedField,
        for<'r> &'r F: OrderedFieldRef<F>,
    {
        let zero = F::zero();

        tableau.relative_costs().iter().position(|cost| cost > &zero)
    }
}

#[cfg(test)]
mod test {
    use num_rational::Rational64;

    use crate::algorithm::tabular::strategy::pivot_rule::{FirstProfitable, LargestCoefficient, PivotRule};
    use crate::algorithm::tabular::tableau::Tableau;

    fn r(value: i64) -> Rational64 {
        Rational64::from_integer(value)
    }

    fn tableau(cost: Vec<Rational64>) -> Tableau<Rational64> {
        let width = cost.len();
        Tableau::from_parts(cost, vec![vec![r(1); width]], vec![r(1)], r(0))
    }

    #[test]
    fn largest_coefficient_takes_first_occurrence_of_the_maximum() {
        let tableau = tableau(vec![r(1), r(3), r(3)]);
        assert_eq!(LargestCoefficient::new().select_pivot_column(&tableau), Some(1));
    }

    #[test]
    fn largest_coefficient_needs_a_positive_cost() {
        let tableau = tableau(vec![r(0), r(-1)]);
        assert_eq!(LargestCoefficient::new().select_pivot_column(&tableau), None);
    }

    #[test]
    fn first_profitable_takes_the_first_positive() {
        let tableau = tableau(vec![r(-1), r(0), r(2), r(3)]);
        assert_eq!(FirstProfitable::new().select_pivot_column(&tableau), Some(2));
    }
}
