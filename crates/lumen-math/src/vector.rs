//! Three component vectors used for both points and directions.

use std::fmt;
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::{MathError, Result};

/// A point or direction in 3D space.
///
/// Whether a value is a point or a direction is up to the caller; the type
/// does not track it. `Vector3 * Vector3` is the dot product, so there is no
/// operator for element-wise multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector3 {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
}

impl Vector3 {
    /// The zero vector.
    pub const ZERO: Vector3 = Vector3::new(0.0, 0.0, 0.0);
    /// Unit vector along X.
    pub const I: Vector3 = Vector3::new(1.0, 0.0, 0.0);
    /// Unit vector along Y.
    pub const J: Vector3 = Vector3::new(0.0, 1.0, 0.0);
    /// Unit vector along Z.
    pub const K: Vector3 = Vector3::new(0.0, 0.0, 1.0);

    /// Create a vector from its components.
    #[inline]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Dot product. Same as `self * v`.
    #[inline]
    pub fn dot(self, v: Vector3) -> f64 {
        v.x * self.x + v.y * self.y + v.z * self.z
    }

    /// Dot product of the vector with itself.
    #[inline]
    pub fn sqr(self) -> f64 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, v: Vector3) -> Vector3 {
        Vector3::new(
            self.y * v.z - self.z * v.y,
            self.z * v.x - self.x * v.z,
            self.x * v.y - self.y * v.x,
        )
    }

    /// Euclidean length.
    #[inline]
    pub fn len(self) -> f64 {
        self.sqr().sqrt()
    }

    /// Euclidean distance to `v`.
    #[inline]
    pub fn dist(self, v: Vector3) -> f64 {
        (self - v).len()
    }

    /// Normalize in place.
    ///
    /// The vector must have nonzero length. Normalizing the zero vector
    /// divides by zero and leaves NaN components; use [`Vector3::try_norm`]
    /// when the length is not known to be nonzero.
    #[inline]
    pub fn norm(&mut self) {
        let l = self.len();
        self.x /= l;
        self.y /= l;
        self.z /= l;
    }

    /// Shorthand for [`Vector3::norm`].
    #[inline]
    pub fn nor(&mut self) {
        self.norm();
    }

    /// Normalize in place, rejecting zero-length and non-finite vectors.
    ///
    /// Components are divided by the largest magnitude first, so vectors whose
    /// squared length overflows or underflows still normalize.
    pub fn try_norm(&mut self) -> Result<()> {
        if !self.x.is_finite() || !self.y.is_finite() || !self.z.is_finite() {
            log::debug!("rejected normalization of non-finite vector {self:?}");
            return Err(MathError::NonFinite);
        }
        let scale = self.x.abs().max(self.y.abs()).max(self.z.abs());
        if scale == 0.0 {
            log::debug!("rejected normalization of zero-length vector");
            return Err(MathError::ZeroLength);
        }
        self.x /= scale;
        self.y /= scale;
        self.z /= scale;
        self.norm();
        Ok(())
    }

    /// Normalized copy. Same precondition as [`Vector3::norm`].
    #[inline]
    pub fn normalized(self) -> Vector3 {
        let mut v = self;
        v.norm();
        v
    }

    /// Component-wise comparison within `eps`.
    ///
    /// `==` compares components exactly and is sensitive to rounding drift
    /// after chains of arithmetic.
    #[inline]
    pub fn approx_eq(self, v: Vector3, eps: f64) -> bool {
        (self.x - v.x).abs() <= eps && (self.y - v.y).abs() <= eps && (self.z - v.z).abs() <= eps
    }
}

impl fmt::Display for Vector3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.6}, {:.6}, {:.6}>", self.x, self.y, self.z)
    }
}

impl Add for Vector3 {
    type Output = Vector3;
    #[inline]
    fn add(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x + v.x, self.y + v.y, self.z + v.z)
    }
}

impl AddAssign for Vector3 {
    #[inline]
    fn add_assign(&mut self, v: Vector3) {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
    }
}

impl Sub for Vector3 {
    type Output = Vector3;
    #[inline]
    fn sub(self, v: Vector3) -> Vector3 {
        Vector3::new(self.x - v.x, self.y - v.y, self.z - v.z)
    }
}

impl SubAssign for Vector3 {
    #[inline]
    fn sub_assign(&mut self, v: Vector3) {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
    }
}

impl Neg for Vector3 {
    type Output = Vector3;
    #[inline]
    fn neg(self) -> Vector3 {
        Vector3::new(-self.x, -self.y, -self.z)
    }
}

/// Dot product.
impl Mul for Vector3 {
    type Output = f64;
    #[inline]
    fn mul(self, v: Vector3) -> f64 {
        self.dot(v)
    }
}

impl Mul<f64> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, s: f64) -> Vector3 {
        Vector3::new(s * self.x, s * self.y, s * self.z)
    }
}

impl Mul<Vector3> for f64 {
    type Output = Vector3;
    #[inline]
    fn mul(self, v: Vector3) -> Vector3 {
        v * self
    }
}

impl Mul<f32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, s: f32) -> Vector3 {
        self * f64::from(s)
    }
}

impl Mul<i32> for Vector3 {
    type Output = Vector3;
    #[inline]
    fn mul(self, s: i32) -> Vector3 {
        self * f64::from(s)
    }
}

impl MulAssign<f64> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, s: f64) {
        self.x *= s;
        self.y *= s;
        self.z *= s;
    }
}

impl MulAssign<f32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, s: f32) {
        *self *= f64::from(s);
    }
}

impl MulAssign<i32> for Vector3 {
    #[inline]
    fn mul_assign(&mut self, s: i32) {
        *self *= f64::from(s);
    }
}

impl From<nalgebra::Vector3<f64>> for Vector3 {
    fn from(v: nalgebra::Vector3<f64>) -> Self {
        Vector3::new(v.x, v.y, v.z)
    }
}

impl From<Vector3> for nalgebra::Vector3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Vector3::new(v.x, v.y, v.z)
    }
}

impl From<nalgebra::Point3<f64>> for Vector3 {
    fn from(p: nalgebra::Point3<f64>) -> Self {
        Vector3::new(p.x, p.y, p.z)
    }
}

impl From<Vector3> for nalgebra::Point3<f64> {
    fn from(v: Vector3) -> Self {
        nalgebra::Point3::new(v.x, v.y, v.z)
    }
}
