//! Stateless operations over 1D `f64` vectors.
//!
//! Operands are borrowed as `&[f64]`, so `Vec<f64>`, arrays and
//! [`Vector`](crate::math::Vector) can be passed interchangeably. Functions
//! that produce a vector always allocate a new one; the `*_in_place` family
//! and [`reset`] mutate the caller's buffer instead.

use crate::error::{Operation, Result, VecError};
use crate::math::Vector;

/// A vector of `len` elements, each `1.0`.
pub fn ones(len: usize) -> Vector {
    let mut out = Vector::zeros(len);
    apply_in_place(|_| 1.0, &mut out);
    out
}

/// A vector whose element `[0]` is `0.0`, each following element incremented
/// by `1.0`.
///
/// `inc(3)` is `[0.0, 1.0, 2.0]`.
pub fn inc(len: usize) -> Vector {
    (0..len).map(|i| i as f64).collect()
}

/// A vector of `len` elements, each `0.0`.
pub fn zeros(len: usize) -> Vector {
    Vector::zeros(len)
}

/// True if both vectors have the same length and identical entries.
///
/// Comparison is exact (`==`), so any `NaN` entry makes the vectors unequal.
pub fn equal(v1: &[f64], v2: &[f64]) -> bool {
    if v1.len() != v2.len() {
        return false;
    }
    v1.iter().zip(v2.iter()).all(|(a, b)| a == b)
}

fn check_lengths(op: Operation, v1: &[f64], v2: &[f64]) -> Result<()> {
    if v1.len() != v2.len() {
        log::debug!(
            "{} rejected operands of length {} and {}",
            op,
            v1.len(),
            v2.len()
        );
        return Err(VecError::LengthMismatch {
            op,
            lhs: v1.len(),
            rhs: v2.len(),
        });
    }
    Ok(())
}

fn zip_with<F>(op: Operation, v1: &[f64], v2: &[f64], f: F) -> Result<Vector>
where
    F: Fn(f64, f64) -> f64,
{
    check_lengths(op, v1, v2)?;
    Ok(zip_unchecked(op, v1, v2, f))
}

fn zip_unchecked<F>(op: Operation, v1: &[f64], v2: &[f64], f: F) -> Vector
where
    F: Fn(f64, f64) -> f64,
{
    log::trace!("{}: allocating result of length {}", op, v1.len());
    v1.iter().zip(v2.iter()).map(|(&a, &b)| f(a, b)).collect()
}

/// Element-wise product.
pub fn mul(v1: &[f64], v2: &[f64]) -> Result<Vector> {
    zip_with(Operation::Mul, v1, v2, |a, b| a * b)
}

/// Element-wise sum.
pub fn add(v1: &[f64], v2: &[f64]) -> Result<Vector> {
    zip_with(Operation::Add, v1, v2, |a, b| a + b)
}

/// Element-wise difference `v1 - v2`.
pub fn sub(v1: &[f64], v2: &[f64]) -> Result<Vector> {
    zip_with(Operation::Sub, v1, v2, |a, b| a - b)
}

/// Element-wise quotient `v1 / v2`.
///
/// Fails with [`VecError::DivisionByZero`] naming the first zero entry of
/// `v2`. Lengths are checked before the divisor is scanned.
pub fn div(v1: &[f64], v2: &[f64]) -> Result<Vector> {
    check_lengths(Operation::Div, v1, v2)?;
    if let Some(index) = v2.iter().position(|&d| d == 0.0) {
        log::debug!("Div rejected zero divisor at index {}", index);
        return Err(VecError::DivisionByZero {
            op: Operation::Div,
            index,
        });
    }
    Ok(zip_unchecked(Operation::Div, v1, v2, |a, b| a / b))
}

/// Replace every element with `f(element)`, in index order.
///
/// Mutates `v`. Use [`apply`] to keep the input untouched.
pub fn apply_in_place<F>(mut f: F, v: &mut [f64])
where
    F: FnMut(f64) -> f64,
{
    for x in v.iter_mut() {
        *x = f(*x);
    }
}

/// A new vector holding `f` applied to each element of `v`.
pub fn apply<F>(mut f: F, v: &[f64]) -> Vector
where
    F: FnMut(f64) -> f64,
{
    v.iter().map(|&x| f(x)).collect()
}

/// Inner product of two vectors.
pub fn dot(v1: &[f64], v2: &[f64]) -> Result<f64> {
    check_lengths(Operation::Dot, v1, v2)?;
    Ok(v1
        .iter()
        .zip(v2.iter())
        .fold(0.0, |acc, (&a, &b)| acc + a * b))
}

/// Set every element of `v` to `0.0`.
pub fn reset(v: &mut [f64]) {
    apply_in_place(|_| 0.0, v)
}

/// Sum of the elements, accumulated in index order. `0.0` when empty.
pub fn sum(v: &[f64]) -> f64 {
    v.iter().fold(0.0, |acc, &x| acc + x)
}

/// Euclidean length of `v`.
pub fn norm(v: &[f64]) -> f64 {
    sum(&apply(|x| x * x, v)).sqrt()
}
