//! Immutable numeric value types for Zaru's geometry and layout code.
//!
//! This crate provides a handful of small value types:
//!
//! - [`Matrix`], a dynamically-sized matrix of finite [`f64`] elements, and [`SquareMatrix`],
//!   which adds a determinant and an inverse.
//! - [`Vector`], a short column vector with dot and cross products.
//! - [`Percentage`], a non-negative fraction with a total order and multiplicative structure.
//!
//! # Goals & Non-Goals
//!
//! - All types are immutable values. Every operation returns a new value and leaves its operands
//!   untouched.
//! - Operations report invalid input by returning an [`Error`] rather than panicking. The only
//!   exception are the [`Index`][std::ops::Index] impls, which panic on out-of-bounds access just
//!   like slices do.
//! - Determinants and inverses are computed by straightforward recursive cofactor expansion. This
//!   is only suitable for small matrices, and no attempt is made to improve numerical stability.
//! - Approximate comparisons are provided through the [`approx`] traits.
//!
//! Operations emit diagnostics through the [`log`] crate.

mod error;
mod matrix;
mod percentage;
mod vector;

pub use error::*;
pub use matrix::*;
pub use percentage::*;
pub use vector::*;
