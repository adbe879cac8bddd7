//! The owned vector container.
//!
//! `Vector` is a thin wrapper over `Vec<f64>` with the conversions, indexing
//! and method forms of the operations in [`crate::ops`].
pub mod vector;

pub use vector::Vector;
