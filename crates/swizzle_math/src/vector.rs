//! Dynamically sized vector core
//!
//! [`Vector`] owns a fixed-length buffer of `f64` components. The length is
//! chosen at construction and never changes: the buffer is a boxed slice, so
//! there is no way to push or truncate it. Arithmetic returns fresh vectors
//! and leaves the receiver untouched; only indexed and keyed writes mutate
//! in place.

use core::fmt;
use core::ops::{Index, IndexMut};

use crate::error::{Result, VectorError};

/// Which specialization a vector of a given size maps to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dimension {
    Two,
    Three,
    Four,
    /// Any other size, including 0 and 1
    Dynamic(usize),
}

impl Dimension {
    #[inline]
    pub const fn of(size: usize) -> Self {
        match size {
            2 => Self::Two,
            3 => Self::Three,
            4 => Self::Four,
            n => Self::Dynamic(n),
        }
    }

    #[inline]
    pub const fn size(self) -> usize {
        match self {
            Self::Two => 2,
            Self::Three => 3,
            Self::Four => 4,
            Self::Dynamic(n) => n,
        }
    }
}

/// Real vector of fixed, arbitrary length
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Vector {
    components: Box<[f64]>,
}

impl Vector {
    /// Create a vector owning the given components
    #[inline]
    pub fn new(components: impl Into<Box<[f64]>>) -> Self {
        Self {
            components: components.into(),
        }
    }

    /// Create a vector by copying a slice
    #[inline]
    pub fn from_slice(components: &[f64]) -> Self {
        Self::new(components)
    }

    /// Vector of `size` zeros
    pub fn zeros(size: usize) -> Self {
        Self::splat(size, 0.0)
    }

    /// Vector of `size` copies of `value`
    pub fn splat(size: usize, value: f64) -> Self {
        Self::new(vec![value; size])
    }

    /// Number of components
    #[inline]
    pub fn size(&self) -> usize {
        self.components.len()
    }

    #[inline]
    pub fn dimension(&self) -> Dimension {
        Dimension::of(self.size())
    }

    /// Component at `index`, or `None` past the end
    #[inline]
    pub fn get(&self, index: usize) -> Option<f64> {
        self.components.get(index).copied()
    }

    /// Overwrite the component at `index`
    pub fn set(&mut self, index: usize, value: f64) -> Result<()> {
        let size = self.size();
        let slot = self
            .components
            .get_mut(index)
            .ok_or(VectorError::IndexOutOfRange { index, size })?;
        *slot = value;
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[f64] {
        &self.components
    }

    /// Copy the components out, in index order
    #[inline]
    pub fn to_vec(&self) -> Vec<f64> {
        self.components.to_vec()
    }

    /// Iterate over the components by value without consuming the vector
    #[inline]
    pub fn iter(&self) -> core::iter::Copied<core::slice::Iter<'_, f64>> {
        self.components.iter().copied()
    }

    /// Exact componentwise equality; vectors of different sizes are never equal
    #[inline]
    pub fn equals(&self, other: &Vector) -> bool {
        self == other
    }

    /// Sum of squared components
    #[inline]
    pub fn n2(&self) -> f64 {
        self.iter().map(|c| c * c).sum()
    }

    /// Euclidean length
    #[inline]
    pub fn norm(&self) -> f64 {
        self.n2().sqrt()
    }

    /// Dot product
    pub fn dot(&self, other: &Vector) -> Result<f64> {
        self.ensure_same_size(other, "dot")?;
        Ok(self.dot_unchecked(other))
    }

    /// Componentwise sum
    pub fn plus(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_size(other, "add")?;
        Ok(self.zip_map(other, |a, b| a + b))
    }

    /// Componentwise difference, `self + other * -1`
    pub fn minus(&self, other: &Vector) -> Result<Vector> {
        self.ensure_same_size(other, "subtract")?;
        self.plus(&other.times(-1.0))
    }

    /// Scale every component
    #[inline]
    pub fn times(&self, scalar: f64) -> Vector {
        self.iter().map(|c| c * scalar).collect()
    }

    /// Unit vector in the same direction. The zero vector normalizes to
    /// itself rather than to NaN.
    pub fn normalize(&self) -> Vector {
        let norm = self.norm();
        if norm == 0.0 {
            log::debug!(
                "Normalizing zero vector of size {}, returning it unchanged",
                self.size()
            );
            return self.clone();
        }
        self.times(1.0 / norm)
    }

    fn ensure_same_size(&self, other: &Vector, operation: &'static str) -> Result<()> {
        if self.size() != other.size() {
            return Err(VectorError::SizeMismatch {
                operation,
                left: self.size(),
                right: other.size(),
            });
        }
        Ok(())
    }

    /// Sizes must already match.
    #[inline]
    pub(crate) fn dot_unchecked(&self, other: &Vector) -> f64 {
        self.iter().zip(other.iter()).map(|(a, b)| a * b).sum()
    }

    /// Sizes must already match.
    #[inline]
    pub(crate) fn zip_map(&self, other: &Vector, f: impl Fn(f64, f64) -> f64) -> Vector {
        self.iter().zip(other.iter()).map(|(a, b)| f(a, b)).collect()
    }

    /// Fresh vector holding the components at `indices`, in that order.
    /// Indices must be in range.
    pub(crate) fn gather(&self, indices: &[usize]) -> Vector {
        indices.iter().map(|&i| self.components[i]).collect()
    }

    /// Write `values[i]` into slot `indices[i]`, left to right, so a repeated
    /// index keeps the last value. Indices must be in range and `values` at
    /// least as long as `indices`.
    pub(crate) fn scatter(&mut self, indices: &[usize], values: &[f64]) {
        for (&index, &value) in indices.iter().zip(values) {
            self.components[index] = value;
        }
    }
}

impl From<Vec<f64>> for Vector {
    fn from(components: Vec<f64>) -> Self {
        Self::new(components)
    }
}

impl From<&[f64]> for Vector {
    fn from(components: &[f64]) -> Self {
        Self::from_slice(components)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(components: [f64; N]) -> Self {
        Self::new(components)
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = f64;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Vector {
    type Item = f64;
    type IntoIter = std::vec::IntoIter<f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.components.into_vec().into_iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.components[index]
    }
}

impl IndexMut<usize> for Vector {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.components[index]
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        self.as_slice()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Vector(")?;
        for (i, c) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", c)?;
        }
        f.write_str(")")
    }
}
