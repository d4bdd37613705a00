use crate::{vector::Vector, Result};
use std::fmt;

/// Capabilities of a read-only mathematical vector.
///
/// Implementors can be held behind `dyn MathVector`, combined with each
/// other through the binary operations, and copied into a [`Vector`] via
/// [`Vector::from_math_vector`].
pub trait MathVector: fmt::Display {
    fn dimensions(&self) -> usize;
    fn length(&self) -> f64;
    fn get(&self, index: isize) -> Result<f64>;

    /// Components in index order. Each call starts a fresh pass.
    fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_>;

    fn sum_number(&self, scalar: f64) -> Vector;
    fn multiply_number(&self, scalar: f64) -> Vector;
    fn sum(&self, other: &dyn MathVector) -> Result<Vector>;
    fn multiply(&self, other: &dyn MathVector) -> Result<Vector>;
    fn scalar_multiply(&self, other: &dyn MathVector) -> Result<f64>;
    fn calc_distance(&self, other: &dyn MathVector) -> Result<f64>;

    /// Concrete view, if this is a [`Vector`]. Lets binary operations
    /// skip copying the right-hand operand.
    fn as_vector(&self) -> Option<&Vector> {
        None
    }
}

impl MathVector for Vector {
    fn dimensions(&self) -> usize {
        Vector::dimensions(self)
    }

    fn length(&self) -> f64 {
        Vector::length(self)
    }

    fn get(&self, index: isize) -> Result<f64> {
        Vector::get(self, index)
    }

    fn iter(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        Box::new(Vector::iter(self))
    }

    fn sum_number(&self, scalar: f64) -> Vector {
        Vector::sum_number(self, scalar)
    }

    fn multiply_number(&self, scalar: f64) -> Vector {
        Vector::multiply_number(self, scalar)
    }

    fn sum(&self, other: &dyn MathVector) -> Result<Vector> {
        Vector::sum(self, other)
    }

    fn multiply(&self, other: &dyn MathVector) -> Result<Vector> {
        Vector::multiply(self, other)
    }

    fn scalar_multiply(&self, other: &dyn MathVector) -> Result<f64> {
        Vector::scalar_multiply(self, other)
    }

    fn calc_distance(&self, other: &dyn MathVector) -> Result<f64> {
        Vector::calc_distance(self, other)
    }

    fn as_vector(&self) -> Option<&Vector> {
        Some(self)
    }
}
