use crate::{math_vector::MathVector, Result, VectorError};
use ndarray::{Array1, ArrayView1, Ix1};
use std::{borrow::Cow, fmt};

/// Fixed-length, immutable sequence of `f64` components.
///
/// Every arithmetic operation returns a new `Vector`; the receiver is never
/// modified. Binary operations check that both operands have the same number
/// of dimensions on every call.
#[derive(Debug, Clone, PartialEq)]
pub struct Vector {
    data: Array1<f64>,
}

impl Vector {
    pub fn new(data: Array1<f64>) -> Self {
        Self { data }
    }

    /// The zero-dimension vector.
    pub fn empty() -> Self {
        Self::new(Array1::from_vec(Vec::new()))
    }

    /// Copies the components of an enumerable source that may be absent.
    pub fn from_source<I>(source: Option<I>) -> Result<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        match source {
            Some(values) => Ok(values.into_iter().collect()),
            None => Err(VectorError::InvalidArgument(
                "source sequence is absent".to_string(),
            )),
        }
    }

    pub fn from_math_vector(other: &dyn MathVector) -> Self {
        other.iter().collect()
    }

    pub fn dimensions(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Euclidean norm. Zero for the empty vector.
    pub fn length(&self) -> f64 {
        self.data.dot(&self.data).sqrt()
    }

    pub fn get(&self, index: isize) -> Result<f64> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.data.get(i).copied())
            .ok_or(VectorError::IndexOutOfRange {
                index,
                dimensions: self.dimensions(),
            })
    }

    pub(crate) fn component(&self, index: usize) -> &f64 {
        &self.data[index]
    }

    pub fn view(&self) -> ArrayView1<'_, f64> {
        self.data.view()
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.to_vec()
    }

    pub fn iter(&self) -> Components<'_> {
        Components {
            inner: self.data.iter(),
        }
    }

    pub fn sum_number(&self, scalar: f64) -> Vector {
        Self::new(self.data.mapv(|x| x + scalar))
    }

    pub fn subtract_number(&self, scalar: f64) -> Vector {
        Self::new(self.data.mapv(|x| x - scalar))
    }

    pub fn multiply_number(&self, scalar: f64) -> Vector {
        Self::new(self.data.mapv(|x| x * scalar))
    }

    pub fn divide_number(&self, scalar: f64) -> Result<Vector> {
        if scalar == 0.0 {
            return Err(VectorError::DivideByZero);
        }
        Ok(Self::new(self.data.mapv(|x| x / scalar)))
    }

    pub fn sum(&self, other: &dyn MathVector) -> Result<Vector> {
        let rhs = self.operand(other)?;
        Ok(Self::new(&self.data + &*rhs))
    }

    pub fn subtract(&self, other: &dyn MathVector) -> Result<Vector> {
        let rhs = self.operand(other)?;
        Ok(Self::new(&self.data - &*rhs))
    }

    /// Elementwise (Hadamard) product.
    pub fn multiply(&self, other: &dyn MathVector) -> Result<Vector> {
        let rhs = self.operand(other)?;
        Ok(Self::new(&self.data * &*rhs))
    }

    pub fn divide(&self, other: &dyn MathVector) -> Result<Vector> {
        let rhs = self.operand(other)?;
        if rhs.iter().any(|&x| x == 0.0) {
            return Err(VectorError::DivideByZero);
        }
        Ok(Self::new(&self.data / &*rhs))
    }

    /// Dot product.
    pub fn scalar_multiply(&self, other: &dyn MathVector) -> Result<f64> {
        let rhs = self.operand(other)?;
        Ok(self.data.dot(&*rhs))
    }

    pub fn calc_distance(&self, other: &dyn MathVector) -> Result<f64> {
        let rhs = self.operand(other)?;
        let diff = &*rhs - &self.data;
        Ok(diff.dot(&diff).sqrt())
    }

    /// Right-hand operand components, borrowed when `other` is a `Vector`.
    fn operand<'a>(&self, other: &'a dyn MathVector) -> Result<Cow<'a, Array1<f64>>> {
        let mismatch = |right| VectorError::DimensionMismatch {
            left: self.dimensions(),
            right,
        };
        if self.dimensions() != other.dimensions() {
            return Err(mismatch(other.dimensions()));
        }

        let rhs = match other.as_vector() {
            Some(vector) => Cow::Borrowed(&vector.data),
            None => Cow::Owned(other.iter().collect::<Array1<f64>>()),
        };
        // An implementor whose iterator disagrees with its dimension count
        if rhs.len() != self.dimensions() {
            return Err(mismatch(rhs.len()));
        }
        Ok(rhs)
    }
}

impl Default for Vector {
    fn default() -> Self {
        Self::empty()
    }
}

impl From<Array1<f64>> for Vector {
    fn from(data: Array1<f64>) -> Self {
        Self::new(data)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(values: Vec<f64>) -> Self {
        Self::new(Array1::from_vec(values))
    }
}

impl From<&[f64]> for Vector {
    fn from(values: &[f64]) -> Self {
        Self::new(Array1::from_vec(values.to_vec()))
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(values: [f64; N]) -> Self {
        Self::new(Array1::from_vec(values.to_vec()))
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, value) in self.data.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", value)?;
        }
        write!(f, ")")
    }
}

/// Iterator over the components of a [`Vector`], in index order.
#[derive(Clone)]
pub struct Components<'a> {
    inner: ndarray::iter::Iter<'a, f64, Ix1>,
}

impl Iterator for Components<'_> {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl DoubleEndedIterator for Components<'_> {
    fn next_back(&mut self) -> Option<f64> {
        self.inner.next_back().copied()
    }
}

impl ExactSizeIterator for Components<'_> {}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = Components<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    // `to_vec` walks logical order; the raw buffer may not for strided arrays.
    fn into_iter(self) -> Self::IntoIter {
        self.data.to_vec().into_iter()
    }
}
