//! # The dense tableau format
//!
//! A minimal textual description of a problem in dense standard form, recognized by the `dt`
//! file extension:
//!
//! ```text
//! # The classic production planning exercise.
//! maximize
//! 3 5
//! 1 0 4
//! 0 2 12
//! 3 2 18
//! ```
//!
//! The first significant line gives the direction of optimization, the second the cost
//! coefficients, and every further line one constraint row: its coefficients followed by the
//! right-hand side value. Blank lines and lines starting with `#` are skipped. Number syntax is
//! whatever the number type accepts, so the same file can be read exactly (`1/3`) or as floats
//! (`0.25`).
use std::str::FromStr;

use crate::data::linear_program::dense_form::DenseForm;
use crate::data::linear_program::elements::Objective;
use crate::data::number_types::traits::Field;
use crate::io::error::{FileLocation, Import, Parse};

/// Parse a problem description in the dense tableau format.
///
/// # Arguments
///
/// * `program`: Full contents of a problem file.
///
/// # Errors
///
/// A `Parse` error with the offending line for syntactic problems, or an `Inconsistency` if the
/// lines parse but don't form a problem of consistent dimensions.
pub fn import<F>(program: &str) -> Result<DenseForm<F>, Import>
where
    F: Field + FromStr,
{
    let mut lines = program.lines().enumerate()
        .map(|(index, line)| (index as u64 + 1, line.trim()))
        .filter(|&(_, line)| !line.is_empty() && !line.starts_with('#'));

    let objective = match lines.next() {
        Some((_, "maximize")) => Objective::Maximize,
        Some((_, "minimize")) => Objective::Minimize,
        Some(location) => return Err(Import::Parse(Parse::with_file_location(
            "expected \"maximize\" or \"minimize\"",
            location,
        ))),
        None => return Err(Import::Parse(Parse::new("empty problem description"))),
    };

    let cost = match lines.next() {
        Some(location) => parse_numbers(location)?,
        None => return Err(Import::Parse(Parse::new("missing cost coefficient line"))),
    };

    let mut constraints = Vec::new();
    let mut rhs = Vec::new();
    for location in lines {
        let mut values = parse_numbers(location)?;
        match values.pop() {
            Some(value) if !values.is_empty() => {
                constraints.push(values);
                rhs.push(value);
            },
            _ => return Err(Import::Parse(Parse::with_file_location(
                "a constraint line needs at least one coefficient and a right-hand side",
                location,
            ))),
        }
    }

    DenseForm::new(objective, cost, constraints, rhs).map_err(Import::LinearProgram)
}

/// Read a full line of whitespace-separated numbers.
fn parse_numbers<F: FromStr>((line_number, line): FileLocation) -> Result<Vec<F>, Import> {
    line.split_whitespace()
        .map(|token| F::from_str(token).map_err(|_| Import::Parse(Parse::with_file_location(
            format!("could not parse \"{}\" as a number", token),
            (line_number, line),
        ))))
        .collect()
}
