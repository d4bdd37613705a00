pub mod math_vector;
pub mod ops;
pub mod utils;
pub mod vector;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum VectorError {
    #[error("Invalid Argument: {0}")]
    InvalidArgument(String),
    #[error("Index Out Of Range: index {index} is outside 0..{dimensions}")]
    IndexOutOfRange { index: isize, dimensions: usize },
    #[error("Dimension Mismatch: {left} != {right}")]
    DimensionMismatch { left: usize, right: usize },
    #[error("Divide By Zero")]
    DivideByZero,
}

pub type Result<T> = std::result::Result<T, VectorError>;

// Re-export main types for convenience
pub use math_vector::MathVector;
pub use utils::{approx_eq, generate_random_vectors};
pub use vector::{Components, Vector};
