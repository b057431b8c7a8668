//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
use num_rational::Rational64;

use denselp::algorithm::{OptimizationResult, SolveTabular};
use denselp::data::linear_program::dense_form::DenseForm;
use denselp::data::linear_program::elements::Objective;

fn r(value: i64) -> Rational64 {
    Rational64::from_integer(value)
}

/// A feasible, bounded maximization solved over floats.
#[test]
fn bounded_maximization() {
    let form = DenseForm::new(
        Objective::Maximize,
        vec![3f64, 5f64],
        vec![vec![1f64, 0f64], vec![0f64, 2f64], vec![3f64, 2f64]],
        vec![4f64, 12f64, 18f64],
    ).unwrap();

    assert_eq!(form.solve_tabular(), OptimizationResult::FiniteOptimum(36f64));
}

/// The same instance over exact rationals.
#[test]
fn bounded_maximization_exact() {
    let form = DenseForm::new(
        Objective::Maximize,
        vec![r(3), r(5)],
        vec![vec![r(1), r(0)], vec![r(0), r(2)], vec![r(3), r(2)]],
        vec![r(4), r(12), r(18)],
    ).unwrap();

    assert_eq!(form.solve_tabular(), OptimizationResult::FiniteOptimum(r(36)));
}

/// A negative right-hand side value with a repairable row: the solver recovers feasibility and
/// then optimizes.
#[test]
fn infeasible_start_is_repaired() {
    let form = DenseForm::new(
        Objective::Maximize,
        vec![1f64, 1f64],
        vec![vec![-1f64, -1f64], vec![1f64, 0f64], vec![0f64, 1f64]],
        vec![-2f64, 3f64, 4f64],
    ).unwrap();

    assert_eq!(form.solve_tabular(), OptimizationResult::FiniteOptimum(7f64));
}

/// A negative right-hand side value without any negative coefficient in its row cannot be
/// repaired.
#[test]
fn unrepairable_problem_is_infeasible() {
    let form = DenseForm::new(
        Objective::Maximize,
        vec![1f64, 1f64],
        vec![vec![1f64, 1f64]],
        vec![-1f64],
    ).unwrap();

    assert_eq!(form.solve_tabular(), OptimizationResult::Infeasible);
}

/// No column ever produces a positive ratio: the objective improves without limit.
#[test]
fn unbounded_problem() {
    let form = DenseForm::new(
        Objective::Maximize,
        vec![1f64],
        vec![vec![-1f64]],
        vec![5f64],
    ).unwrap();

    assert_eq!(form.solve_tabular(), OptimizationResult::Unbounded);
}

/// Minimizing is exactly: negate the cost function, maximize, negate the result.
#[test]
fn minimization_is_negated_maximization() {
    let constraints = vec![vec![r(1), r(0)], vec![r(0), r(2)], vec![r(3), r(2)]];
    let rhs = vec![r(4), r(12), r(18)];

    let minimization = DenseForm::new(
        Objective::Minimize,
        vec![r(-3), r(-5)],
        constraints.clone(),
        rhs.clone(),
    ).unwrap();
    let negated_maximization = DenseForm::new(
        Objective::Maximize,
        vec![r(3), r(5)],
        constraints,
        rhs,
    ).unwrap();

    let minimum = match minimization.solve_tabular() {
        OptimizationResult::FiniteOptimum(value) => value,
        other => panic!("expected a finite optimum, got {:?}", other),
    };
    let maximum = match negated_maximization.solve_tabular() {
        OptimizationResult::FiniteOptimum(value) => value,
        other => panic!("expected a finite optimum, got {:?}", other),
    };

    assert_eq!(minimum, -maximum);
    assert_eq!(minimum, r(-36));
}

/// Dualizing twice reproduces the original problem.
#[test]
fn dual_of_dual_is_primal() {
    let primal = DenseForm::new(
        Objective::Maximize,
        vec![r(3), r(5)],
        vec![vec![r(1), r(0)], vec![r(0), r(2)], vec![r(3), r(2)]],
        vec![r(4), r(12), r(18)],
    ).unwrap();

    assert_eq!(primal.dual().dual(), primal);
}

/// The dual of a feasible bounded problem attains the same optimal objective value.
#[test]
fn strong_duality() {
    let primal = DenseForm::new(
        Objective::Maximize,
        vec![r(3), r(5)],
        vec![vec![r(1), r(0)], vec![r(0), r(2)], vec![r(3), r(2)]],
        vec![r(4), r(12), r(18)],
    ).unwrap();
    let dual = primal.dual();

    assert_eq!(primal.solve_tabular(), OptimizationResult::FiniteOptimum(r(36)));
    assert_eq!(dual.solve_tabular(), OptimizationResult::FiniteOptimum(r(36)));
}

/// Problems that fail the structural check are rejected before any iteration.
#[test]
fn invalid_input_is_rejected() {
    assert!(DenseForm::new(
        Objective::Maximize,
        vec![1f64, 2f64],
        vec![vec![1f64, 0f64], vec![1f64]],
        vec![1f64, 1f64],
    ).is_err());
}
