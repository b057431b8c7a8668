//! # Traits
//!
//! A hierarchy of number types is defined. The hierarchy is "mathematically exact", but the
//! implementations aren't. That is, the contracts that these traits define, or their names imply,
//! may not be kept precisely. This is due to finite representation of these numbers and is a
//! fundamental problem that cannot be avoided, but perhaps be dealt with differently.
use std::fmt::{Debug, Display};
use std::iter::Sum;
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use num_traits::{One, Zero};

/// Basic field operations with `Self` and with references to `Self`.
///
/// Automatically implemented for all types satisfying the trait's bounds.
pub trait Field:
    PartialEq + // Equivalence relation
    Zero + // Additive identity
    Neg<Output = Self> + // Additive inverse
    One + // Multiplicative identity
    // First operation
    Add<Self, Output = Self> +
    for<'r> Add<&'r Self, Output = Self> +
    AddAssign<Self> +
    for<'r> AddAssign<&'r Self> +
    Sum +
    // First operation inverse
    Sub<Self, Output = Self> +
    for<'r> Sub<&'r Self, Output = Self> +
    SubAssign<Self> +
    for<'r> SubAssign<&'r Self> +
    // Second operation
    Mul<Self, Output = Self> +
    for<'r> Mul<&'r Self, Output = Self> +
    MulAssign<Self> +
    for<'r> MulAssign<&'r Self> +
    // Second operation inverse
    Div<Self, Output = Self> +
    for<'r> Div<&'r Self, Output = Self> +
    DivAssign<Self> +
    for<'r> DivAssign<&'r Self> +

    // Practicalities
    Clone +
    Display +
    Debug +
{
}
impl<T> Field for T
where
    T:
        PartialEq +
        Zero +
        Neg<Output = Self> +
        One +
        Add<Self, Output = Self> +
        for<'r> Add<&'r Self, Output = Self> +
        AddAssign<Self> +
        for<'r> AddAssign<&'r Self> +
        Sum +
        Sub<Self, Output = Self> +
        for<'r> Sub<&'r Self, Output = Self> +
        SubAssign<Self> +
        for<'r> SubAssign<&'r Self> +
        Mul<Self, Output = Self> +
        for<'r> Mul<&'r Self, Output = Self> +
        MulAssign<Self> +
        for<'r> MulAssign<&'r Self> +
        Div<Self, Output = Self> +
        for<'r> Div<&'r Self, Output = Self> +
        DivAssign<Self> +
        for<'r> DivAssign<&'r Self> +
        Clone +
        Display +
        Debug,
{
}

/// A reference to a variable that is in a [`Field`].
///
/// Methods with algorithmic content take values by reference and bound
/// `for<'r> &'r F: FieldRef<F>` to compute without cloning.
pub trait FieldRef<Deref>:
    // Equivalence relation
    PartialEq<Self> +
    Neg<Output = Deref> + // Additive inverse
    // First operation
    Add<Deref, Output = Deref> +
    Add<Self, Output = Deref> +
    // First operation inverse
    Sub<Deref, Output = Deref> +
    Sub<Self, Output = Deref> +
    // Second operation
    Mul<Deref, Output = Deref> +
    Mul<Self, Output = Deref> +
    // Second operation inverse
    Div<Deref, Output = Deref> +
    Div<Self, Output = Deref> +

    // Practicalities
    Copy +
    Debug +
    // Necessary for the Add, Sub, Mul and Div traits. References are sized anyways.
    Sized +
{
}
impl<T, Deref> FieldRef<Deref> for T where
    T:
        PartialEq<Self> +
        Neg<Output = Deref> +
        Add<Deref, Output = Deref> +
        Add<Self, Output = Deref> +
        Sub<Deref, Output = Deref> +
        Sub<Self, Output = Deref> +
        Mul<Deref, Output = Deref> +
        Mul<Self, Output = Deref> +
        Div<Deref, Output = Deref> +
        Div<Self, Output = Deref> +
        Copy +
        Debug +
        Sized,
{
}

/// The simplex algorithm is defined over the ordered fields.
///
/// All methods containing algorithmic logic should be defined to work on an ordered field (or a
/// field, if they don't need the ordering). The ordering is partial such that floating point
/// numbers qualify; on non-comparable values (`NaN`) no behavior is guaranteed.
pub trait OrderedField: Field + PartialOrd {}
impl<T: Field + PartialOrd> OrderedField for T {}

/// A reference to an ordered field.
pub trait OrderedFieldRef<Deref>: FieldRef<Deref> + PartialOrd {}
impl<T: FieldRef<Deref> + PartialOrd, Deref> OrderedFieldRef<Deref> for T {}

#[cfg(test)]
mod test {
    use super::{Field, FieldRef, OrderedField};

    fn is_field<F: Field>()
    where
        for<'r> &'r F: FieldRef<F>,
    {
    }
    fn is_ordered_field<F: OrderedField>()
    where
        for<'r> &'r F: FieldRef<F>,
    {
    }

    /// Both the float and rational number types used throughout the test suite qualify.
    #[test]
    fn implementors() {
        is_field::<f64>();
        is_ordered_field::<f64>();
        is_field::<num_rational::Rational64>();
        is_ordered_field::<num_rational::Rational64>();
    }
}
