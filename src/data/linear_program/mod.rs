//! # Representing linear programs
//!
//! This module contains the representation of linear programs in standard tableau form, the only
//! form the tabular algorithm operates on. More general constraint types should be rewritten to
//! this form by the caller.
pub mod dense_form;
pub mod elements;
