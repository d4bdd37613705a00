//! Operator sugar over the named [`Vector`] operations.
//!
//! Vector operands and scalar division can fail, so those operators yield
//! `Result<Vector>`. Scalar `+`, `-` and `*` always succeed and yield `Vector`.

use crate::{vector::Vector, Result};
use std::ops::{Add, Div, Index, Mul, Sub};

macro_rules! impl_vector_op {
    ($trait:ident, $fname:ident, $method:ident) => {
        impl $trait<&Vector> for &Vector {
            type Output = Result<Vector>;

            fn $fname(self, rhs: &Vector) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl $trait<Vector> for Vector {
            type Output = Result<Vector>;

            fn $fname(self, rhs: Vector) -> Self::Output {
                self.$method(&rhs)
            }
        }

        impl $trait<&Vector> for Vector {
            type Output = Result<Vector>;

            fn $fname(self, rhs: &Vector) -> Self::Output {
                self.$method(rhs)
            }
        }
    };
}

macro_rules! impl_scalar_op {
    ($trait:ident, $fname:ident, $method:ident, $output:ty) => {
        impl $trait<f64> for &Vector {
            type Output = $output;

            fn $fname(self, rhs: f64) -> Self::Output {
                self.$method(rhs)
            }
        }

        impl $trait<f64> for Vector {
            type Output = $output;

            fn $fname(self, rhs: f64) -> Self::Output {
                self.$method(rhs)
            }
        }
    };
}

impl_vector_op!(Add, add, sum);
impl_vector_op!(Sub, sub, subtract);
impl_vector_op!(Mul, mul, multiply);
impl_vector_op!(Div, div, divide);

impl_scalar_op!(Add, add, sum_number, Vector);
impl_scalar_op!(Sub, sub, subtract_number, Vector);
impl_scalar_op!(Mul, mul, multiply_number, Vector);
impl_scalar_op!(Div, div, divide_number, Result<Vector>);

/// Unchecked access; panics when `index >= dimensions` like slice indexing.
/// Use [`Vector::get`] for a checked read.
impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        self.component(index)
    }
}
