//! vecops: elementary operations over one-dimensional `f64` vectors.
//!
//! The crate provides constructors (`ones`, `inc`), element-wise arithmetic,
//! reductions (`sum`, `dot`, `norm`) and functional mapping (`apply`,
//! `apply_in_place`, `reset`). Binary operations check their preconditions
//! and return a structured [`VecError`] instead of aborting; callers that want
//! violations to be fatal can opt in through [`config::OpsConfig`].
#![doc = include_str!("../README.md")]

pub mod config;
pub mod error;
pub mod math;
pub mod ops;

pub use error::{Operation, Result, VecError};
pub use math::Vector;
