//! 4x4 homogeneous transforms.
//!
//! Matrices are stored column-major: indices 0-3 hold column 0, 4-7 column 1,
//! 8-11 column 2 and 12-15 column 3. The translation lives at indices 12, 13
//! and 14. Every factory in this module produces an affine matrix whose last
//! row is `(0, 0, 0, 1)`.

use std::fmt;
use std::ops::{Add, Mul, Sub};

use serde::{Deserialize, Serialize};

use crate::{MathError, Result, Vector3};

/// Number of elements in a [`Matrix4`].
pub const SIZE: usize = 16;

#[rustfmt::skip]
const IDENTITY_ELEMENTS: [f64; SIZE] = [
    1.0, 0.0, 0.0, 0.0,
    0.0, 1.0, 0.0, 0.0,
    0.0, 0.0, 1.0, 0.0,
    0.0, 0.0, 0.0, 1.0,
];

/// A 4x4 affine transformation matrix in column-major order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Matrix4 {
    mat: [f64; SIZE],
}

impl Matrix4 {
    /// The identity matrix.
    pub const IDENTITY: Matrix4 = Matrix4 {
        mat: IDENTITY_ELEMENTS,
    };

    /// Identity transform.
    pub const fn identity() -> Self {
        Self::IDENTITY
    }

    /// Wrap 16 column-major elements.
    pub const fn from_columns(mat: [f64; SIZE]) -> Self {
        Self { mat }
    }

    /// Build a matrix from a column-major slice.
    ///
    /// The slice must hold exactly [`SIZE`] elements.
    pub fn from_slice(elements: &[f64]) -> Result<Self> {
        let mat: [f64; SIZE] = elements.try_into().map_err(|_| {
            log::debug!("rejected matrix backing slice of length {}", elements.len());
            MathError::InvalidMatrixLength {
                expected: SIZE,
                actual: elements.len(),
            }
        })?;
        Ok(Self { mat })
    }

    /// Translation by `(x, y, z)`.
    ///
    /// ```text
    /// |1 0 0 x|
    /// |0 1 0 y|
    /// |0 0 1 z|
    /// |0 0 0 1|
    /// ```
    pub fn translation(x: f64, y: f64, z: f64) -> Self {
        let mut mat = IDENTITY_ELEMENTS;
        mat[12] = x;
        mat[13] = y;
        mat[14] = z;
        Self { mat }
    }

    /// Translation by `v`.
    pub fn translation_vec(v: Vector3) -> Self {
        Self::translation(v.x, v.y, v.z)
    }

    /// Rotation about the X axis by `theta` radians.
    pub fn rotation_x(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let mut mat = IDENTITY_ELEMENTS;
        mat[5] = c;
        mat[6] = s;
        mat[9] = -s;
        mat[10] = c;
        Self { mat }
    }

    /// Rotation about the Y axis by `theta` radians.
    ///
    /// ```text
    /// | c  0  s  0|
    /// | 0  1  0  0|
    /// |-s  0  c  0|
    /// | 0  0  0  1|
    /// ```
    pub fn rotation_y(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let mut mat = IDENTITY_ELEMENTS;
        mat[0] = c;
        mat[2] = -s;
        mat[8] = s;
        mat[10] = c;
        Self { mat }
    }

    /// Rotation about the Z axis by `theta` radians.
    pub fn rotation_z(theta: f64) -> Self {
        let (s, c) = theta.sin_cos();
        let mut mat = IDENTITY_ELEMENTS;
        mat[0] = c;
        mat[1] = s;
        mat[4] = -s;
        mat[5] = c;
        Self { mat }
    }

    /// Element at `row`, `col`.
    ///
    /// # Panics
    ///
    /// Panics if either index is 4 or greater.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(row < 4 && col < 4, "matrix index ({row}, {col}) out of range");
        self.mat[col * 4 + row]
    }

    /// The column-major backing array.
    #[inline]
    pub fn as_array(&self) -> &[f64; SIZE] {
        &self.mat
    }

    /// The translation column.
    #[inline]
    pub fn translation_part(&self) -> Vector3 {
        Vector3::new(self.mat[12], self.mat[13], self.mat[14])
    }

    /// Whether the last row is exactly `(0, 0, 0, 1)`.
    pub fn is_affine(&self) -> bool {
        self.mat[3] == 0.0 && self.mat[7] == 0.0 && self.mat[11] == 0.0 && self.mat[15] == 1.0
    }

    /// Transposed copy.
    pub fn transpose(&self) -> Self {
        let mut mat = [0.0; SIZE];
        for col in 0..4 {
            for row in 0..4 {
                mat[row * 4 + col] = self.mat[col * 4 + row];
            }
        }
        Self { mat }
    }

    /// `self = self * m`, in place.
    ///
    /// The existing transform stays on the left, so `m` is applied to points
    /// before the transform accumulated so far.
    pub fn mult(&mut self, m: &Matrix4) -> &mut Self {
        self.mat = product(&self.mat, &m.mat);
        self
    }

    /// `self * m` as a new matrix.
    pub fn get_mult(&self, m: &Matrix4) -> Matrix4 {
        Matrix4 {
            mat: product(&self.mat, &m.mat),
        }
    }

    /// Transform the point `v` in place (homogeneous `w = 1`).
    ///
    /// Translation is always applied. There is no direction variant.
    pub fn transform_vec(&self, v: &mut Vector3) {
        *v = self.get_transformed_vec(*v);
    }

    /// The point `v` transformed by this matrix.
    pub fn get_transformed_vec(&self, v: Vector3) -> Vector3 {
        let m = &self.mat;
        let row = |i: usize| m[i] * v.x + m[i + 4] * v.y + m[i + 8] * v.z + m[i + 12];
        Vector3::new(row(0), row(1), row(2))
    }

    /// Add `(x, y, z)` to the translation column.
    pub fn translate(&mut self, x: f64, y: f64, z: f64) -> &mut Self {
        self.mat[12] += x;
        self.mat[13] += y;
        self.mat[14] += z;
        self
    }

    /// Add `v` to the translation column.
    pub fn translate_vec(&mut self, v: Vector3) -> &mut Self {
        self.translate(v.x, v.y, v.z)
    }

    /// Rotate about the X axis by `theta` radians.
    ///
    /// See [`Matrix4::rot_y`] for the meaning of `around_origin`.
    pub fn rot_x(&mut self, theta: f64, around_origin: bool) -> &mut Self {
        self.rotate(Self::rotation_x(theta), around_origin)
    }

    /// Rotate about the Y axis by `theta` radians.
    ///
    /// With `around_origin` set, the rotation happens in world space and an
    /// object that is not on the axis travels on a circle around it. Without
    /// it, the object turns about its own position and the translation
    /// column is left unchanged.
    pub fn rot_y(&mut self, theta: f64, around_origin: bool) -> &mut Self {
        self.rotate(Self::rotation_y(theta), around_origin)
    }

    /// Rotate about the Z axis by `theta` radians.
    ///
    /// See [`Matrix4::rot_y`] for the meaning of `around_origin`.
    pub fn rot_z(&mut self, theta: f64, around_origin: bool) -> &mut Self {
        self.rotate(Self::rotation_z(theta), around_origin)
    }

    fn rotate(&mut self, rotation: Matrix4, around_origin: bool) -> &mut Self {
        if around_origin {
            *self = rotation.get_mult(self);
        } else {
            let t = self.translation_part();
            self.translate(-t.x, -t.y, -t.z);
            self.mult(&rotation);
            self.translate_vec(t);
        }
        log::trace!(
            "rotated (around_origin={around_origin}), translation now {}",
            self.translation_part()
        );
        self
    }
}

/// Column-major 4x4 product `a * b`.
///
/// Output element `(row n, column m)` is row `n` of `a` dotted with column
/// `m` of `b`.
fn product(a: &[f64; SIZE], b: &[f64; SIZE]) -> [f64; SIZE] {
    let mut out = [0.0; SIZE];
    for m in 0..4 {
        for n in 0..4 {
            out[4 * m + n] = a[n] * b[4 * m]
                + a[n + 4] * b[4 * m + 1]
                + a[n + 8] * b[4 * m + 2]
                + a[n + 12] * b[4 * m + 3];
        }
    }
    out
}

impl Default for Matrix4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for Matrix4 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let m = &self.mat;
        for i in 0..4 {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "|{:.6} {:.6} {:.6} {:.6}|",
                m[i],
                m[i + 4],
                m[i + 8],
                m[i + 12]
            )?;
        }
        Ok(())
    }
}

impl TryFrom<&[f64]> for Matrix4 {
    type Error = MathError;

    fn try_from(elements: &[f64]) -> Result<Self> {
        Self::from_slice(elements)
    }
}

/// Element-wise sum of the backing arrays.
impl Add for Matrix4 {
    type Output = Matrix4;

    fn add(self, rhs: Matrix4) -> Matrix4 {
        let mut mat = self.mat;
        for (a, b) in mat.iter_mut().zip(rhs.mat.iter()) {
            *a += b;
        }
        Matrix4 { mat }
    }
}

/// Element-wise difference of the backing arrays.
impl Sub for Matrix4 {
    type Output = Matrix4;

    fn sub(self, rhs: Matrix4) -> Matrix4 {
        let mut mat = self.mat;
        for (a, b) in mat.iter_mut().zip(rhs.mat.iter()) {
            *a -= b;
        }
        Matrix4 { mat }
    }
}

impl Mul for Matrix4 {
    type Output = Matrix4;

    fn mul(self, rhs: Matrix4) -> Matrix4 {
        self.get_mult(&rhs)
    }
}

/// Point transform, same as [`Matrix4::get_transformed_vec`].
impl Mul<Vector3> for Matrix4 {
    type Output = Vector3;

    fn mul(self, v: Vector3) -> Vector3 {
        self.get_transformed_vec(v)
    }
}

impl From<nalgebra::Matrix4<f64>> for Matrix4 {
    fn from(m: nalgebra::Matrix4<f64>) -> Self {
        let mut mat = [0.0; SIZE];
        mat.copy_from_slice(m.as_slice());
        Self { mat }
    }
}

impl From<Matrix4> for nalgebra::Matrix4<f64> {
    fn from(m: Matrix4) -> Self {
        nalgebra::Matrix4::from_column_slice(&m.mat)
    }
}
