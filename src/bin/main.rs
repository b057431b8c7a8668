use std::path::PathBuf;
use std::process::exit;

use clap::Parser;

use denselp::algorithm::{OptimizationResult, SolveTabular};
use denselp::data::linear_program::dense_form::DenseForm;
use denselp::io::import;

/// A dense linear program solver written in rust.
#[derive(Parser)]
#[command(version, about)]
struct Opts {
    /// File containing the problem description
    problem_file: PathBuf,
}

fn main() {
    let opts = Opts::parse();

    println!("Reading problem file: \"{}\"...", opts.problem_file.display());
    let problem: DenseForm<f64> = match import(&opts.problem_file) {
        Ok(problem) => problem,
        Err(error) => {
            eprintln!("{}", error);
            exit(1);
        },
    };

    print!("{}", problem);
    println!("Solving...");
    match problem.solve_tabular() {
        OptimizationResult::FiniteOptimum(value) => println!("Optimal objective value: {}", value),
        OptimizationResult::Infeasible => println!("Problem is not feasible."),
        OptimizationResult::Unbounded => println!("Problem is unbounded."),
    }
}
