use std::fmt;
use std::iter::FromIterator;
use std::ops::{Add, Deref, DerefMut, Div, Index, IndexMut, Mul, Sub};
use std::slice::{Iter, IterMut};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::ops;

/// Owned, fixed-length sequence of `f64`.
///
/// Dereferences to `[f64]`, so every function in [`crate::ops`] accepts a
/// `&Vector` directly.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    pub fn from_vec(data: Vec<f64>) -> Self {
        Self::new(data)
    }

    pub fn from_elem(len: usize, value: f64) -> Self {
        Vector::from_vec(vec![value; len])
    }

    pub fn zeros(len: usize) -> Self {
        Vector::from_elem(len, 0.0)
    }

    pub fn ones(len: usize) -> Self {
        ops::ones(len)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, f64> {
        self.data.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, f64> {
        self.data.iter_mut()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [f64] {
        &mut self.data
    }

    pub fn to_vec(&self) -> Vec<f64> {
        self.data.clone()
    }

    /// Exact element-wise comparison, see [`ops::equal`].
    pub fn equal(&self, other: &[f64]) -> bool {
        ops::equal(self, other)
    }

    pub fn apply<F>(&self, f: F) -> Vector
    where
        F: FnMut(f64) -> f64,
    {
        ops::apply(f, self)
    }

    pub fn apply_in_place<F>(&mut self, f: F)
    where
        F: FnMut(f64) -> f64,
    {
        ops::apply_in_place(f, self)
    }

    pub fn reset(&mut self) {
        ops::reset(self)
    }

    pub fn sum(&self) -> f64 {
        ops::sum(self)
    }

    pub fn dot(&self, other: &[f64]) -> Result<f64> {
        ops::dot(self, other)
    }

    pub fn norm(&self) -> f64 {
        ops::norm(self)
    }

    pub fn mean(&self) -> Option<f64> {
        if self.is_empty() {
            None
        } else {
            Some(self.sum() / self.len() as f64)
        }
    }
}

impl Deref for Vector {
    type Target = [f64];

    fn deref(&self) -> &Self::Target {
        &self.data
    }
}

impl DerefMut for Vector {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.data
    }
}

impl From<Vec<f64>> for Vector {
    fn from(value: Vec<f64>) -> Self {
        Vector::from_vec(value)
    }
}

impl From<&[f64]> for Vector {
    fn from(value: &[f64]) -> Self {
        Vector::from_vec(value.to_vec())
    }
}

impl From<Vector> for Vec<f64> {
    fn from(value: Vector) -> Self {
        value.data
    }
}

impl FromIterator<f64> for Vector {
    fn from_iter<I: IntoIterator<Item = f64>>(iter: I) -> Self {
        Vector::from_vec(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a f64;
    type IntoIter = Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl Index<usize> for Vector {
    type Output = f64;

    fn index(&self, index: usize) -> &Self::Output {
        &self.data[index]
    }
}

impl IndexMut<usize> for Vector {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.data[index]
    }
}

// Operator forms cannot return a Result, so a violated precondition panics
// with the error message.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op:path) => {
        impl<'a, 'b> $trait<&'b Vector> for &'a Vector {
            type Output = Vector;

            #[track_caller]
            fn $method(self, rhs: &'b Vector) -> Self::Output {
                match $op(self, rhs) {
                    Ok(out) => out,
                    Err(err) => panic!("{}", err),
                }
            }
        }
    };
}

impl_binary_op!(Add, add, ops::add);
impl_binary_op!(Sub, sub, ops::sub);
impl_binary_op!(Mul, mul, ops::mul);
impl_binary_op!(Div, div, ops::div);

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (idx, value) in self.data.iter().enumerate() {
            write!(f, "{}", value)?;
            if idx + 1 != self.data.len() {
                write!(f, ", ")?;
            }
        }
        write!(f, "]")
    }
}
