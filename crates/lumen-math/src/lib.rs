#![warn(missing_docs)]

//! Math types for the lumen ray tracer.
//!
//! Plain `f64` value types for 3D geometry: [`Vector3`] for points and
//! directions, [`Matrix4`] for affine transforms, and tolerance constants.
//! Both convert to and from their nalgebra counterparts.

mod error;
mod matrix;
mod vector;

pub use error::{MathError, Result};
pub use matrix::{Matrix4, SIZE};
pub use vector::Vector3;

/// Tolerance for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance.
    pub linear: f64,
}

impl Tolerance {
    /// Default tolerance (1e-9 linear).
    pub const DEFAULT: Self = Self { linear: 1e-9 };

    /// Check if a scalar distance is effectively zero.
    pub fn is_zero(&self, d: f64) -> bool {
        d.abs() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
