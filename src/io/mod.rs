//! # Reading and writing of linear programs
//!
//! This module provides read functionality for linear program formats.
use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::data::linear_program::dense_form::DenseForm;
use crate::data::number_types::traits::Field;
use crate::io::error::Import;

pub mod dense;
pub mod error;

/// Import a problem from a file.
///
/// Currently only supports the dense tableau (`dt`) filetype.
///
/// # Errors
///
/// When a file extension is unknown, a file cannot be found or read, there is an inconsistency in
/// the problem file, etc. an error type is returned.
pub fn import<F>(file_path: &Path) -> Result<DenseForm<F>, Import>
where
    F: Field + FromStr,
{
    // Open and read the file
    let mut program = String::new();
    File::open(file_path)
        .map_err(Import::IO)?
        .read_to_string(&mut program)
        .map_err(Import::IO)?;

    // Choose the right parser
    match file_path.extension() {
        Some(extension) => match extension.to_str() {
            Some("dt") => dense::import(&program),
            Some(extension_string) => Err(Import::FileExtension(format!(
                "Could not recognise file extension \"{}\" of file: {:?}",
                extension_string, file_path,
            ))),
            None => Err(Import::FileExtension(format!(
                "Could not convert OsStr to &str, probably invalid unicode: {:?}",
                extension,
            ))),
        },
        None => Err(Import::FileExtension(format!(
            "Could not read extension from file path: {:?}",
            file_path,
        ))),
    }
}
